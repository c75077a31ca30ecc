//! Static portfolio content.
//!
//! Everything the assistant can say about its owner lives here: the
//! canned command bodies are rendered from these tables, so editing the
//! portfolio never touches the resolver.

/// Owner of the portfolio.
pub const OWNER: &str = "Diwanshu Yadav";

/// Name the assistant introduces itself with.
pub const ASSISTANT_NAME: &str = "DiwanshuOS";

/// Titles shown under the owner's name.
pub const TITLES: &[&str] = &[
    "AI Architect",
    "Full-Stack Alchemist",
    "Creative Technologist",
];

pub const TAGLINE: &str = "Building the future.";

pub const ABOUT: &str = "Creating intelligent, immersive experiences that push technological \
boundaries while remaining accessible and human-centered.";

/// Headline numbers: (value, label).
pub const STATS: &[(&str, &str)] = &[
    ("12+", "Projects Completed"),
    ("8", "Certifications"),
    ("6", "Programming Languages"),
];

/// A showcased project.
#[derive(Debug, Clone)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Neural Vision System",
        summary: "Computer vision platform for real-time object detection and tracking",
        technologies: &["Python", "TensorFlow", "OpenCV", "CUDA", "Docker"],
        features: &[
            "Real-time processing at 60fps",
            "Multi-object tracking",
            "Custom neural network architecture",
            "Edge device compatibility",
            "Cloud integration for data storage",
        ],
    },
    Project {
        title: "DataSphere Explorer",
        summary: "3D interactive data visualization platform with real-time analysis",
        technologies: &["JavaScript", "Three.js", "D3.js", "WebGL", "React"],
        features: &[
            "Interactive 3D visualizations",
            "Real-time data streaming",
            "Customizable visualization templates",
            "VR/AR compatibility",
            "Data filtering and search",
        ],
    },
    Project {
        title: "Autonomous Agent Framework",
        summary: "Multi-agent system for automated decision making and task orchestration",
        technologies: &[
            "C++",
            "Rust",
            "Reinforcement Learning",
            "Distributed Systems",
            "Message Passing Interface",
        ],
        features: &[
            "Decentralized agent architecture",
            "Self-healing network topology",
            "Adaptive learning algorithms",
            "Real-time constraint satisfaction",
            "Hierarchical planning systems",
        ],
    },
];

/// A skill card.
#[derive(Debug, Clone)]
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
    pub details: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Python",
        category: "Programming",
        details: "Machine Learning, Data Science, Backend",
    },
    Skill {
        name: "C++",
        category: "Programming",
        details: "Performance-critical applications, Game Dev",
    },
    Skill {
        name: "Machine Learning",
        category: "AI",
        details: "Neural Networks, NLP, Computer Vision",
    },
    Skill {
        name: "Web Development",
        category: "Web",
        details: "React, Next.js, Three.js, GSAP",
    },
    Skill {
        name: "Databases",
        category: "Database",
        details: "SQL, MongoDB, Firebase, Redis",
    },
    Skill {
        name: "Version Control",
        category: "DevOps",
        details: "Git, GitHub, CI/CD Pipelines",
    },
];

pub const CONTACT_EMAIL: &str = "diwanshu.yadav@example.com";
pub const CONTACT_HANDLE: &str = "@diwanshu_yadav";
pub const CONTACT_NOTE: &str = "Ready to collaborate on your next groundbreaking project? \
Send me a transmission, and I'll respond within 24 hours.";

/// Looks up a project by its 1-based position, as shown in `/projects`.
pub fn project(number: usize) -> Option<&'static Project> {
    number.checked_sub(1).and_then(|index| PROJECTS.get(index))
}
