//! Fixline Intake
//!
//! Complaint submission decision logic for the intake portal.
//!
//! This crate decides what happens between "user pressed submit" and "a
//! ticket exists": input validation, explicit-category versus auto-routed
//! classification, and assembly of the resulting ticket. Persisting the
//! ticket is the caller's concern.

pub mod complaint;
pub mod service;
pub mod validate;

pub use complaint::{ComplaintTicket, NewComplaint, TicketUpdate, UpdateKind};
pub use service::{IntakeService, RoutingFallback};
pub use validate::{validate, MIN_DESCRIPTION_LEN, MIN_TITLE_LEN};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::complaint::{ComplaintTicket, NewComplaint};
    pub use crate::service::{IntakeService, RoutingFallback};
}
