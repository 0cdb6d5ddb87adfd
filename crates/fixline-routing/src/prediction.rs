//! Routing prediction result type

use serde::{Deserialize, Serialize};

/// Confidence floor applied as soon as any keyword matches
pub const CONFIDENCE_BASE: f32 = 0.4;

/// Confidence gained per additional distinct keyword hit
pub const CONFIDENCE_PER_HIT: f32 = 0.15;

/// Hard ceiling; a lexicon score is a heuristic, not a calibrated probability
pub const CONFIDENCE_CAP: f32 = 0.9;

/// Result of routing a complaint text against a department's categories.
///
/// Produced fresh per call and never persisted here; the caller stores it
/// alongside the complaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingPrediction {
    /// Best-matching category, if any keyword scored
    pub category_id: Option<String>,

    /// Derived confidence in [0, 0.9]; absent when the department has no
    /// categories at all
    pub confidence: Option<f32>,
}

impl RoutingPrediction {
    /// Department had no categories to score
    pub fn unrouted() -> Self {
        Self {
            category_id: None,
            confidence: None,
        }
    }

    /// Categories existed but nothing scored above zero
    pub fn no_match() -> Self {
        Self {
            category_id: None,
            confidence: Some(0.0),
        }
    }

    /// A category won with the given confidence
    pub fn routed(category_id: impl Into<String>, confidence: f32) -> Self {
        Self {
            category_id: Some(category_id.into()),
            confidence: Some(confidence),
        }
    }

    /// Whether a category was selected
    pub fn is_routed(&self) -> bool {
        self.category_id.is_some()
    }

    /// Check if confidence meets a threshold
    pub fn exceeds_threshold(&self, threshold: f32) -> bool {
        self.confidence.map(|c| c >= threshold).unwrap_or(false)
    }
}

/// Map a raw distinct-keyword score to a confidence value.
///
/// score 1 -> 0.55, 2 -> 0.70, 3 -> 0.85, >= 4 saturates at 0.9.
pub fn confidence_for_score(score: usize) -> f32 {
    (CONFIDENCE_BASE + score as f32 * CONFIDENCE_PER_HIT).min(CONFIDENCE_CAP)
}
