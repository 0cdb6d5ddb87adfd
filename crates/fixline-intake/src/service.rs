//! Intake service: validate, route, and assemble the ticket

use crate::complaint::{ComplaintTicket, NewComplaint, TicketUpdate};
use crate::validate::validate;
use chrono::Utc;
use fixline_catalog::CategoryCatalog;
use fixline_core::{ComplaintStatus, Result};
use fixline_routing::CategoryRouter;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// What to do with a submission when the routing catalog read fails.
///
/// The router itself has no failure policy; the choice of whether a catalog
/// outage rejects the complaint or merely leaves it unrouted belongs here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoutingFallback {
    /// File the ticket with no category and log a warning
    #[default]
    Unrouted,
    /// Reject the submission, propagating the error
    Fail,
}

/// Complaint intake pipeline: validation, category decision, ticket assembly
pub struct IntakeService {
    router: CategoryRouter,
    fallback: RoutingFallback,
}

impl IntakeService {
    /// Create an intake service routing against the given catalog
    pub fn new(catalog: Arc<dyn CategoryCatalog>) -> Result<Self> {
        Ok(Self {
            router: CategoryRouter::new(catalog)?,
            fallback: RoutingFallback::default(),
        })
    }

    /// Set the catalog-failure policy
    pub fn with_fallback(mut self, fallback: RoutingFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Validate and file a complaint.
    ///
    /// An explicit category selection is used verbatim and skips the router.
    /// Otherwise the ticket is marked auto-routed and carries whatever the
    /// router predicted, which may be no category at all.
    pub async fn submit(&self, complaint: NewComplaint) -> Result<ComplaintTicket> {
        validate(&complaint)?;

        let explicit = complaint.explicit_category().map(str::to_string);
        let auto_routed = explicit.is_none();

        let (category_id, routing_confidence) = match explicit {
            Some(category_id) => (Some(category_id), None),
            None => {
                match self
                    .router
                    .predict(
                        &complaint.department_id,
                        &complaint.title,
                        &complaint.description,
                    )
                    .await
                {
                    Ok(prediction) => (prediction.category_id, prediction.confidence),
                    Err(e) => {
                        metrics::counter!("fixline_routing_errors_total").increment(1);
                        match self.fallback {
                            RoutingFallback::Fail => return Err(e),
                            RoutingFallback::Unrouted => {
                                warn!(
                                    department_id = %complaint.department_id,
                                    error = %e,
                                    "routing failed, filing unrouted"
                                );
                                (None, None)
                            }
                        }
                    }
                }
            }
        };

        let ticket = ComplaintTicket {
            id: Uuid::new_v4().to_string(),
            title: complaint.title,
            description: complaint.description,
            department_id: complaint.department_id,
            category_id,
            status: ComplaintStatus::Open,
            priority: complaint.priority,
            auto_routed,
            routing_confidence,
            created_at: Utc::now(),
            updates: vec![TicketUpdate::system("Complaint created")],
        };

        metrics::counter!(
            "fixline_complaints_total",
            "auto_routed" => if auto_routed { "true" } else { "false" }
        )
        .increment(1);

        info!(
            ticket_id = %ticket.id,
            department_id = %ticket.department_id,
            category_id = ticket.category_id.as_deref().unwrap_or("-"),
            auto_routed,
            "complaint filed"
        );

        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixline_catalog::CatalogSeed;
    use fixline_core::Priority;

    fn campus_service() -> (IntakeService, String) {
        let catalog = Arc::new(CatalogSeed::campus_default().build().unwrap());
        let water_id = catalog.department_by_slug("water").unwrap().id.clone();
        (IntakeService::new(catalog).unwrap(), water_id)
    }

    #[tokio::test]
    async fn test_auto_routes_when_no_category_given() {
        let (service, water_id) = campus_service();

        let ticket = service
            .submit(NewComplaint::new(
                "Leaking pipe in room",
                "Water pipe has a leak",
                &water_id,
            ))
            .await
            .unwrap();

        assert!(ticket.auto_routed);
        assert!(ticket.category_id.is_some());
        let confidence = ticket.routing_confidence.unwrap();
        assert!((confidence - 0.70).abs() < 1e-6);
        assert_eq!(ticket.status, ComplaintStatus::Open);
        assert_eq!(ticket.updates.len(), 1);
        assert_eq!(ticket.updates[0].message, "Complaint created");
    }

    #[tokio::test]
    async fn test_explicit_category_bypasses_router() {
        let (service, water_id) = campus_service();

        let ticket = service
            .submit(
                NewComplaint::new(
                    "Leaking pipe in room",
                    "Water pipe has a leak",
                    &water_id,
                )
                .with_category("c-chosen")
                .with_priority(Priority::High),
            )
            .await
            .unwrap();

        assert!(!ticket.auto_routed);
        assert_eq!(ticket.category_id.as_deref(), Some("c-chosen"));
        assert_eq!(ticket.routing_confidence, None);
        assert_eq!(ticket.priority, Priority::High);
    }

    #[tokio::test]
    async fn test_blank_category_still_auto_routes() {
        let (service, water_id) = campus_service();

        let ticket = service
            .submit(
                NewComplaint::new(
                    "Nothing relevant here",
                    "unrelated text goes here",
                    &water_id,
                )
                .with_category(""),
            )
            .await
            .unwrap();

        // No keyword hits: unrouted ticket, but still flagged auto-routed
        assert!(ticket.auto_routed);
        assert_eq!(ticket.category_id, None);
        assert_eq!(ticket.routing_confidence, Some(0.0));
    }

    #[tokio::test]
    async fn test_invalid_submission_is_rejected_before_routing() {
        let (service, water_id) = campus_service();

        let err = service
            .submit(NewComplaint::new("ab", "too short", &water_id))
            .await
            .unwrap_err();

        assert!(matches!(err, fixline_core::Error::Validation(_)));
    }
}
