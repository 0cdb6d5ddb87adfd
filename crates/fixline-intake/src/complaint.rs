//! Complaint submission and ticket types

use chrono::{DateTime, Utc};
use fixline_core::{ComplaintStatus, Priority};
use serde::{Deserialize, Serialize};

/// An incoming complaint as submitted by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComplaint {
    /// Short summary
    pub title: String,

    /// Full description of the grievance
    pub description: String,

    /// Target department
    pub department_id: String,

    /// Explicit category selection; absent (or blank) means auto-route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    /// Submitter-selected priority
    #[serde(default)]
    pub priority: Priority,
}

impl NewComplaint {
    /// Create a new complaint for auto-routing
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        department_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            department_id: department_id.into(),
            category_id: None,
            priority: Priority::default(),
        }
    }

    /// Pick a category explicitly, bypassing the router
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// The explicit category choice, with blank selections treated as absent
    pub fn explicit_category(&self) -> Option<&str> {
        self.category_id
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// A filed complaint, ready for the caller to persist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintTicket {
    /// Ticket identifier
    pub id: String,

    /// Short summary
    pub title: String,

    /// Full description
    pub description: String,

    /// Target department
    pub department_id: String,

    /// Routed or explicitly chosen category, if any
    pub category_id: Option<String>,

    /// Lifecycle state
    pub status: ComplaintStatus,

    /// Submitter-selected priority
    pub priority: Priority,

    /// Whether the category came from the router rather than the user
    pub auto_routed: bool,

    /// Router confidence; absent for explicit selections and empty catalogs
    pub routing_confidence: Option<f32>,

    /// Submission time
    pub created_at: DateTime<Utc>,

    /// Update trail, oldest first
    pub updates: Vec<TicketUpdate>,
}

/// A single entry in a ticket's update trail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketUpdate {
    /// Human-readable message
    pub message: String,

    /// Who/what produced this update
    pub kind: UpdateKind,

    /// When the update happened
    pub at: DateTime<Utc>,
}

impl TicketUpdate {
    /// Create a system-generated update stamped now
    pub fn system(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: UpdateKind::System,
            at: Utc::now(),
        }
    }
}

/// Origin of a ticket update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateKind {
    System,
    Comment,
    StatusChange,
}
