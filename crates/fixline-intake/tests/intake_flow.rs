//! End-to-end intake flow against catalog failures

use async_trait::async_trait;
use fixline_catalog::CategoryCatalog;
use fixline_core::{Category, Department, Error, Result};
use fixline_intake::{IntakeService, NewComplaint, RoutingFallback};
use std::sync::Arc;

/// A catalog whose reads always fail
struct OutageCatalog;

#[async_trait]
impl CategoryCatalog for OutageCatalog {
    async fn categories_in(&self, _department_id: &str) -> Result<Vec<Category>> {
        Err(Error::catalog("connection refused"))
    }

    async fn department(&self, _department_id: &str) -> Result<Option<Department>> {
        Err(Error::catalog("connection refused"))
    }

    async fn departments(&self) -> Result<Vec<Department>> {
        Err(Error::catalog("connection refused"))
    }
}

#[tokio::test]
async fn outage_with_default_fallback_files_unrouted() {
    let service = IntakeService::new(Arc::new(OutageCatalog)).unwrap();

    let ticket = service
        .submit(NewComplaint::new(
            "Leaking pipe in room",
            "Water pipe has a leak",
            "d-water",
        ))
        .await
        .unwrap();

    assert!(ticket.auto_routed);
    assert_eq!(ticket.category_id, None);
    assert_eq!(ticket.routing_confidence, None);
}

#[tokio::test]
async fn outage_with_fail_policy_rejects_submission() {
    let service = IntakeService::new(Arc::new(OutageCatalog))
        .unwrap()
        .with_fallback(RoutingFallback::Fail);

    let err = service
        .submit(NewComplaint::new(
            "Leaking pipe in room",
            "Water pipe has a leak",
            "d-water",
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Catalog(_)));
}

#[tokio::test]
async fn explicit_category_survives_catalog_outage() {
    // The router is never consulted, so the outage is invisible
    let service = IntakeService::new(Arc::new(OutageCatalog))
        .unwrap()
        .with_fallback(RoutingFallback::Fail);

    let ticket = service
        .submit(
            NewComplaint::new("Leaking pipe in room", "Water pipe has a leak", "d-water")
                .with_category("c-leak"),
        )
        .await
        .unwrap();

    assert!(!ticket.auto_routed);
    assert_eq!(ticket.category_id.as_deref(), Some("c-leak"));
}
