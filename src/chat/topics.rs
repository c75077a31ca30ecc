//! Keyword groups for free-text input.
//!
//! Each topic owns a keyword list (matched by substring against the
//! lower-cased input) and a set of candidate replies.

/// Topic buckets, including the fallback that matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Greeting,
    Projects,
    Skills,
    Contact,
    Help,
    Fallback,
}

impl Topic {
    /// Match precedence: the first topic whose keywords hit wins.
    pub const MATCH_ORDER: [Self; 5] = [
        Self::Greeting,
        Self::Projects,
        Self::Skills,
        Self::Contact,
        Self::Help,
    ];

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Greeting => &[
                "hello",
                "greetings",
                "good morning",
                "good afternoon",
                "good evening",
                "howdy",
            ],
            Self::Projects => &[
                "project",
                "portfolio",
                "your work",
                "worked on",
                "built",
                "build",
            ],
            Self::Skills => &[
                "skill",
                "tech",
                "stack",
                "language",
                "expertise",
                "experience",
            ],
            Self::Contact => &[
                "contact",
                "email",
                "hire",
                "reach",
                "collaborat",
                "touch",
            ],
            Self::Help => &["help", "command", "what can you", "how do i"],
            Self::Fallback => &[],
        }
    }

    pub const fn replies(self) -> &'static [&'static str] {
        match self {
            Self::Greeting => &[
                "Hello! How can I assist you today?",
                "Hi there! Ask me about projects, skills, or how to get in touch.",
                "Greetings, visitor. DiwanshuOS is online and ready for your questions.",
            ],
            Self::Projects => &[
                "I'm currently working on several AI projects. Would you like to know more about any specific one?",
                "Highlights include a real-time computer vision system, a 3D data explorer, and a multi-agent framework. Try /projects for the list.",
                "Every project here mixes AI with immersive interfaces. Type /project 1 to start with the Neural Vision System.",
            ],
            Self::Skills => &[
                "My expertise includes machine learning, computer vision, and full-stack development.",
                "I've worked with Python, C++, JavaScript, and several other programming languages.",
                "The toolbox spans TensorFlow and OpenCV on the AI side and React and Three.js on the web side. See /skills for more.",
            ],
            Self::Contact => &[
                "The best way to contact me is through the form on this website or via email.",
                "I'm always open to discussing new project opportunities and collaborations.",
                "Send a transmission to diwanshu.yadav@example.com and expect a reply within 24 hours.",
            ],
            Self::Help => &[
                "I can answer questions about projects, skills, and contact details. Type /help for the full command list.",
                "Try asking about projects or skills, or type /help to see every command.",
            ],
            Self::Fallback => &[
                "Thanks for your interest! Let me know if you have any other questions.",
                "I'm not sure I follow. Ask about projects, skills, or contact details.",
                "Interesting question! The portfolio sections may have the answer, or try /help.",
            ],
        }
    }

    /// Returns the first topic in [`Topic::MATCH_ORDER`] with a keyword
    /// contained in `lowered`.
    pub fn classify(lowered: &str) -> Option<Self> {
        Self::MATCH_ORDER
            .into_iter()
            .find(|topic| topic.keywords().iter().any(|kw| lowered.contains(kw)))
    }
}

/// Reply for short input that matched no keyword.
pub const ELABORATE: &str =
    "Could you elaborate a little? Ask about projects, skills, or contact, or type /help.";

/// Inputs shorter than this (in characters) get [`ELABORATE`] instead of
/// a fallback reply.
pub const MIN_FALLBACK_CHARS: usize = 5;
