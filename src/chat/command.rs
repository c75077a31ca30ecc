use inquire::autocompletion::{Autocomplete, Replacement};

use super::resolver::{Effect, Reply};
use super::transcript::MessageKind;
use crate::profile;

/// Metadata for one slash command, as listed by `/help`.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// The command table, in `/help` order.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "/help",
        usage: "/help",
        description: "Show available commands",
    },
    CommandInfo {
        name: "/about",
        usage: "/about",
        description: "Who is behind this portfolio",
    },
    CommandInfo {
        name: "/projects",
        usage: "/projects",
        description: "List showcased projects",
    },
    CommandInfo {
        name: "/project",
        usage: "/project <number>",
        description: "Show details for one project",
    },
    CommandInfo {
        name: "/skills",
        usage: "/skills",
        description: "List core skills",
    },
    CommandInfo {
        name: "/contact",
        usage: "/contact",
        description: "How to get in touch",
    },
    CommandInfo {
        name: "/clear",
        usage: "/clear",
        description: "Clear the conversation",
    },
    CommandInfo {
        name: "/quit",
        usage: "/quit",
        description: "Exit chat mode",
    },
];

pub const UNKNOWN_COMMAND: &str = "Command not recognized. Type /help to see available commands.";
pub const CLEARED: &str = "Chat cleared. Type /help to see available commands.";
pub const GOODBYE: &str = "Goodbye! Thanks for stopping by.";

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let needle = input.to_lowercase();
        let suggestions: Vec<String> = COMMANDS
            .iter()
            .filter(|info| info.name.starts_with(&needle))
            .map(|info| format!("{}  {}", info.name, info.description))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Help,
    About,
    Projects,
    /// `/project <number>`; the raw argument is validated when answering.
    Project(Option<String>),
    Skills,
    Contact,
    Clear,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let mut parts = cmd.split_whitespace();
    let name = parts.next().unwrap_or("").to_lowercase();

    let command = match name.as_str() {
        "help" | "?" => SlashCommand::Help,
        "about" => SlashCommand::About,
        "projects" => SlashCommand::Projects,
        "project" => SlashCommand::Project(parts.next().map(str::to_string)),
        "skills" => SlashCommand::Skills,
        "contact" => SlashCommand::Contact,
        "clear" | "cls" => SlashCommand::Clear,
        "quit" | "exit" | "q" => SlashCommand::Quit,
        _ => SlashCommand::Unknown(name),
    };

    Input::Command(command)
}

impl SlashCommand {
    /// Produces the canned answer for this command.
    pub fn respond(&self) -> Reply {
        match self {
            Self::Help => Reply::new(MessageKind::Reply, help_text()),
            Self::About => Reply::new(MessageKind::Reply, about_text()),
            Self::Projects => Reply::new(MessageKind::Reply, projects_text()),
            Self::Project(arg) => project_reply(arg.as_deref()),
            Self::Skills => Reply::new(MessageKind::Reply, skills_text()),
            Self::Contact => Reply::new(MessageKind::Reply, contact_text()),
            Self::Clear => {
                Reply::new(MessageKind::Command, CLEARED).with_effect(Effect::ClearTranscript)
            }
            Self::Quit => {
                Reply::new(MessageKind::Command, GOODBYE).with_effect(Effect::EndSession)
            }
            Self::Unknown(_) => Reply::new(MessageKind::Error, UNKNOWN_COMMAND),
        }
    }
}

pub fn help_text() -> String {
    let width = COMMANDS.iter().map(|c| c.usage.len()).max().unwrap_or(0);
    let mut text = String::from("Available commands:");
    for info in COMMANDS {
        text.push_str(&format!("\n  {:<width$}  {}", info.usage, info.description));
    }
    text
}

fn about_text() -> String {
    let stats = profile::STATS
        .iter()
        .map(|(value, label)| format!("{value} {label}"))
        .collect::<Vec<_>>()
        .join(" | ");
    format!(
        "{}: {}\n{} {}\n{}",
        profile::OWNER,
        profile::TITLES.join(", "),
        profile::TAGLINE,
        profile::ABOUT,
        stats
    )
}

fn projects_text() -> String {
    let mut text = String::from("Featured projects:");
    for (index, project) in profile::PROJECTS.iter().enumerate() {
        text.push_str(&format!(
            "\n  {}. {} - {}",
            index + 1,
            project.title,
            project.summary
        ));
    }
    text.push_str("\nType /project <number> for details.");
    text
}

fn project_reply(arg: Option<&str>) -> Reply {
    let found = arg
        .and_then(|raw| raw.parse::<usize>().ok())
        .and_then(profile::project);

    let Some(project) = found else {
        return Reply::new(
            MessageKind::Error,
            format!("Usage: /project <1-{}>", profile::PROJECTS.len()),
        );
    };

    let mut text = format!("{}\n{}", project.title, project.summary);
    text.push_str(&format!("\nTech: {}", project.technologies.join(", ")));
    for feature in project.features {
        text.push_str(&format!("\n  - {feature}"));
    }
    Reply::new(MessageKind::Reply, text)
}

fn skills_text() -> String {
    let mut text = String::from("Core skills:");
    for skill in profile::SKILLS {
        text.push_str(&format!(
            "\n  {} ({}): {}",
            skill.name, skill.category, skill.details
        ));
    }
    text
}

fn contact_text() -> String {
    format!(
        "{}\nEmail: {}\nSocial: {}",
        profile::CONTACT_NOTE,
        profile::CONTACT_EMAIL,
        profile::CONTACT_HANDLE
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_input(""), Input::Empty));
        assert!(matches!(parse_input("   "), Input::Empty));
    }

    #[test]
    fn test_parse_text_input() {
        match parse_input("  Hello, world!  ") {
            Input::Text(text) => assert_eq!(text, "Hello, world!"),
            _ => panic!("Expected Input::Text"),
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(
            parse_input("  /PROJECTS  "),
            Input::Command(SlashCommand::Projects)
        );
        assert_eq!(parse_input("/Help"), Input::Command(SlashCommand::Help));
    }

    #[test]
    fn test_parse_aliases() {
        for alias in ["/quit", "/exit", "/q"] {
            assert_eq!(parse_input(alias), Input::Command(SlashCommand::Quit));
        }
        assert_eq!(parse_input("/?"), Input::Command(SlashCommand::Help));
        assert_eq!(parse_input("/cls"), Input::Command(SlashCommand::Clear));
    }

    #[test]
    fn test_parse_project_argument() {
        assert_eq!(
            parse_input("/project 2"),
            Input::Command(SlashCommand::Project(Some("2".to_string())))
        );
        assert_eq!(
            parse_input("/project"),
            Input::Command(SlashCommand::Project(None))
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        match parse_input("/Dance now") {
            Input::Command(SlashCommand::Unknown(cmd)) => assert_eq!(cmd, "dance"),
            _ => panic!("Expected Input::Command(SlashCommand::Unknown)"),
        }
        assert_eq!(
            parse_input("/"),
            Input::Command(SlashCommand::Unknown(String::new()))
        );
    }

    #[test]
    fn test_every_listed_command_parses_to_a_known_variant() {
        for info in COMMANDS {
            match parse_input(info.name) {
                Input::Command(SlashCommand::Unknown(name)) => {
                    panic!("{} parsed as unknown ({name})", info.name)
                }
                Input::Command(_) => {}
                other => panic!("{} parsed as {other:?}", info.name),
            }
        }
    }

    #[test]
    fn test_informational_commands_reply_kind() {
        for cmd in [
            SlashCommand::Help,
            SlashCommand::About,
            SlashCommand::Projects,
            SlashCommand::Skills,
            SlashCommand::Contact,
        ] {
            let reply = cmd.respond();
            assert_eq!(reply.kind, MessageKind::Reply, "{cmd:?}");
            assert_eq!(reply.effect, Effect::None);
        }
    }

    #[test]
    fn test_action_commands_carry_effects() {
        let clear = SlashCommand::Clear.respond();
        assert_eq!(clear.kind, MessageKind::Command);
        assert_eq!(clear.effect, Effect::ClearTranscript);
        assert_eq!(clear.text, CLEARED);

        let quit = SlashCommand::Quit.respond();
        assert_eq!(quit.effect, Effect::EndSession);
        assert_eq!(quit.text, GOODBYE);
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = help_text();
        for info in COMMANDS {
            assert!(help.contains(info.usage), "missing {}", info.usage);
        }
    }

    #[test]
    fn test_project_details() {
        let reply = SlashCommand::Project(Some("3".to_string())).respond();
        assert_eq!(reply.kind, MessageKind::Reply);
        assert!(reply.text.starts_with("Autonomous Agent Framework"));
        assert!(reply.text.contains("Rust"));
    }

    #[test]
    fn test_project_bad_argument_is_error() {
        for arg in [None, Some("0"), Some("4"), Some("two")] {
            let reply = SlashCommand::Project(arg.map(str::to_string)).respond();
            assert_eq!(reply.kind, MessageKind::Error, "{arg:?}");
            assert_eq!(reply.text, "Usage: /project <1-3>");
        }
    }

    // SlashCommandCompleter tests

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("hello").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/pro").unwrap();
        assert_eq!(suggestions.len(), 2);

        let suggestions = completer.get_suggestions("/Sk").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/skills"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/contact  How to get in touch".to_string();
        let completion = completer.get_completion("/c", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/contact".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter;
        let completion = completer.get_completion("/x", None).unwrap();
        assert!(completion.is_none());
    }
}
