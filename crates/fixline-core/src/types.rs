//! Core domain types for Fixline

use serde::{Deserialize, Serialize};

/// A top-level organizational unit owning a set of complaint categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Opaque department identifier
    pub id: String,

    /// Display name (e.g. "Hostel")
    pub name: String,

    /// Stable lowercase key (e.g. "hostel")
    pub slug: String,

    /// Optional human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Hours before an unresolved complaint escalates
    pub escalate_after_hrs: u32,
}

impl Department {
    /// Create a new department
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            escalate_after_hrs: DEFAULT_ESCALATE_AFTER_HRS,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the escalation window in hours
    pub fn with_escalation(mut self, hours: u32) -> Self {
        self.escalate_after_hrs = hours;
        self
    }
}

/// Default escalation window for departments that do not configure one
pub const DEFAULT_ESCALATE_AFTER_HRS: u32 = 48;

/// A department-scoped complaint subtype used for routing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Opaque category identifier
    pub id: String,

    /// Display name (e.g. "Water Quality")
    pub name: String,

    /// Stable lowercase key used to look up the keyword set
    pub slug: String,

    /// Owning department
    pub department_id: String,
}

impl Category {
    /// Create a new category
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
        department_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            department_id: department_id.into(),
        }
    }
}

/// Complaint priority as selected by the submitter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "URGENT" => Ok(Self::Urgent),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

/// Lifecycle state of a filed complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}
