// Query orchestrator: the one entry point a listing UI calls.
// Pipeline is strictly filter then sort; pricing is per-room and computed on
// demand when the user drills into a hotel, so it never runs here. The engine
// holds no state between calls beyond its ranking policy, so every call is
// reproducible from its arguments.

use tracing::debug;

use crate::error::{ValidationError, Violations};
use crate::filter::FilterSet;
use crate::model::{Hotel, SearchCriteria, SortKey};
use crate::sort::{sort_with_weights, RankingWeights};

#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    weights: RankingWeights,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine whose `Recommended` ranking uses caller-supplied weights.
    pub fn with_weights(weights: RankingWeights) -> Self {
        Self { weights }
    }

    /// Runs the search pipeline over a catalog snapshot.
    ///
    /// Criteria and filters are validated up front, with every violation from
    /// both reported together; sub-component failures propagate unchanged.
    pub fn search(
        &self,
        hotels: &[Hotel],
        criteria: &SearchCriteria,
        filters: &FilterSet,
        sort_key: SortKey,
    ) -> Result<Vec<Hotel>, Vec<ValidationError>> {
        let mut v = Violations::new();
        if let Err(errors) = criteria.validate() {
            v.extend(errors);
        }
        if let Err(errors) = filters.validate() {
            v.extend(errors);
        }
        v.into_result(())?;

        let matched = crate::filter::apply(hotels, filters);
        debug!(
            destination = %criteria.destination,
            candidates = hotels.len(),
            matched = matched.len(),
            ?sort_key,
            "search pipeline"
        );

        Ok(sort_with_weights(&matched, sort_key, &self.weights))
    }
}
