//! Category router: scores a department's categories against the keyword
//! dictionary and picks the best match

use crate::keywords;
use crate::matcher::KeywordMatcher;
use crate::prediction::{confidence_for_score, RoutingPrediction};
use fixline_catalog::CategoryCatalog;
use fixline_core::Result;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Auto-routing classifier over an injected category catalog.
///
/// One Aho-Corasick automaton per dictionary slug, built once at
/// construction. Each `predict` call performs a single catalog read and is
/// otherwise a pure function of its inputs; concurrent calls need no
/// coordination.
pub struct CategoryRouter {
    catalog: Arc<dyn CategoryCatalog>,
    matchers: HashMap<&'static str, KeywordMatcher>,
}

impl CategoryRouter {
    /// Create a router over the given catalog
    pub fn new(catalog: Arc<dyn CategoryCatalog>) -> Result<Self> {
        let mut matchers = HashMap::new();
        for slug in keywords::known_slugs() {
            matchers.insert(slug, KeywordMatcher::new(keywords::keywords_for(slug))?);
        }

        Ok(Self { catalog, matchers })
    }

    /// Route a complaint text to the best-matching category of a department.
    ///
    /// Returns `{None, None}` when the department has no categories,
    /// `{None, Some(0.0)}` when categories exist but nothing matched, and
    /// the winning category with a confidence in [0.55, 0.9] otherwise.
    /// Ties keep the first category in catalog order.
    pub async fn predict(
        &self,
        department_id: &str,
        title: &str,
        description: &str,
    ) -> Result<RoutingPrediction> {
        let start = Instant::now();

        let categories = self.catalog.categories_in(department_id).await?;
        if categories.is_empty() {
            debug!(department_id, "no categories to route against");
            return Ok(RoutingPrediction::unrouted());
        }

        let text = format!("{} {}", title, description).to_lowercase();

        let mut best: Option<(&str, usize)> = None;
        for category in &categories {
            let score = self.score_slug(&category.slug, &text);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((category.id.as_str(), score)),
            }
        }

        let latency_us = start.elapsed().as_micros() as u64;
        metrics::histogram!("fixline_routing_latency_us").record(latency_us as f64);

        let prediction = match best {
            Some((_, 0)) | None => RoutingPrediction::no_match(),
            Some((category_id, score)) => {
                RoutingPrediction::routed(category_id, confidence_for_score(score))
            }
        };

        debug!(
            department_id,
            category_id = prediction.category_id.as_deref().unwrap_or("-"),
            confidence = prediction.confidence.unwrap_or(0.0) as f64,
            latency_us,
            "routing prediction"
        );

        Ok(prediction)
    }

    /// Distinct-keyword score for one category slug against lowercased text
    fn score_slug(&self, slug: &str, text: &str) -> usize {
        self.matchers
            .get(slug)
            .map(|matcher| matcher.distinct_hits(text))
            .unwrap_or(0)
    }
}
