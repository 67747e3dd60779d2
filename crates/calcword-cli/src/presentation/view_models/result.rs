use serde::Serialize;

use super::common::StatusLevel;

/// One-line status shown above a command's output
#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn success(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            label: label.into(),
        }
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            label: label.into(),
        }
    }

    pub fn icon(&self) -> &str {
        match self.level {
            StatusLevel::Success => "✅",
            StatusLevel::Info => "ℹ️",
            StatusLevel::Warning => "⚠️",
        }
    }
}

/// A follow-up `calcword` invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub description: String,
    pub command: String,
}

impl Tip {
    pub fn new(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: command.into(),
        }
    }
}

/// Content of a console command plus the badge and tips printed around it.
///
/// JSON output serializes the whole value, so tips stay machine-readable.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,
    pub content: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<Tip>,
}

impl<T: Serialize> CommandResultViewModel<T> {
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            tips: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_tip(mut self, description: impl Into<String>, command: impl Into<String>) -> Self {
        self.tips.push(Tip::new(description, command));
        self
    }
}
