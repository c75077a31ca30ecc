use anyhow::{Context, Result, bail};
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 64 * 1024; // 64KB

pub struct InputReader;

impl InputReader {
    /// Joins the words given on the command line, or reads stdin when
    /// there are none.
    pub fn read(words: &[String]) -> Result<String> {
        if words.is_empty() {
            Self::read_from(io::stdin().lock())
        } else {
            Self::check_size(words.join(" "))
        }
    }

    fn read_from(reader: impl Read) -> Result<String> {
        let mut buffer = Vec::new();
        reader
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(
                "Error: Input exceeds maximum allowed size (64 KB).\n\n\
                 The assistant answers questions, not documents."
            );
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }

    fn check_size(text: String) -> Result<String> {
        if text.len() > MAX_INPUT_SIZE {
            bail!("Error: Input exceeds maximum allowed size (64 KB).");
        }
        Ok(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_joins_words() {
        let words = vec!["tell".to_string(), "me".to_string(), "more".to_string()];
        assert_eq!(InputReader::read(&words).unwrap(), "tell me more");
    }

    #[test]
    fn test_read_from_reader() {
        let text = InputReader::read_from("hello there\n".as_bytes()).unwrap();
        assert_eq!(text, "hello there\n");
    }

    #[test]
    fn test_read_from_unicode() {
        let content = "こんにちは世界！🌍";
        let text = InputReader::read_from(content.as_bytes()).unwrap();
        assert_eq!(text, content);
    }

    #[test]
    fn test_read_from_at_max_size() {
        let content = "x".repeat(MAX_INPUT_SIZE);
        let text = InputReader::read_from(content.as_bytes()).unwrap();
        assert_eq!(text.len(), MAX_INPUT_SIZE);
    }

    #[test]
    fn test_read_from_exceeds_max_size() {
        let content = "x".repeat(MAX_INPUT_SIZE + 1);
        let err = InputReader::read_from(content.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_from_invalid_utf8() {
        let err = InputReader::read_from(&[0xff, 0xfe][..]).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }
}
