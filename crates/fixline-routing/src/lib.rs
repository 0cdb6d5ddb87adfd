//! Fixline Routing
//!
//! Auto-routing classifier for the complaint intake portal.
//!
//! Given a department and free-text title/description, scores every category
//! belonging to that department against a compiled-in keyword dictionary and
//! returns the best match with a derived confidence score, or no match if
//! nothing scores above zero.
//!
//! The router is stateless per call: the dictionary is read-only static
//! data and the catalog is read fresh on each call, so concurrent
//! submissions classify concurrently with no coordination.

pub mod keywords;
pub mod matcher;
pub mod prediction;
pub mod router;

pub use matcher::KeywordMatcher;
pub use prediction::{
    confidence_for_score, RoutingPrediction, CONFIDENCE_BASE, CONFIDENCE_CAP, CONFIDENCE_PER_HIT,
};
pub use router::CategoryRouter;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::prediction::{confidence_for_score, RoutingPrediction};
    pub use crate::router::CategoryRouter;
}
