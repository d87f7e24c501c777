use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod loader;

pub use loader::load_role_data;

/// One competency axis. Ordering within a set is significant: it fixes the
/// axis order of the radar chart and the row order of the slider panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competency {
    pub theme: String,
    #[serde(rename = "competency")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricEntry {
    pub score: u8,
    pub label: String,
    pub desc: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    ProjectManager,
    Consultant,
    Director,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::ProjectManager, Role::Consultant, Role::Director];

    pub fn id(self) -> &'static str {
        match self {
            Role::ProjectManager => "project-manager",
            Role::Consultant => "consultant",
            Role::Director => "director",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Role::ProjectManager => "Project Manager",
            Role::Consultant => "Consultant",
            Role::Director => "Director of Consulting",
        }
    }

    /// Unrecognized identifiers fall back to the default role rather than
    /// failing: role selection is user input, not a contract surface.
    pub fn parse(value: &str) -> Role {
        let normalized = value.trim().to_ascii_lowercase();
        for role in Role::ALL {
            if role.id() == normalized {
                return role;
            }
        }
        if !normalized.is_empty() {
            tracing::warn!(role = %normalized, "unknown role identifier, using default");
        }
        Role::default()
    }

    pub fn competencies_resource(self) -> String {
        format!("competencies-{}.json", self.id())
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Everything the evaluate section needs for one role: the competency set
/// plus the shared scoring rubric.
#[derive(Debug, Clone)]
pub struct RoleData {
    pub role: Role,
    pub competencies: Vec<Competency>,
    pub rubric: Vec<RubricEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
