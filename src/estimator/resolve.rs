//! Walks the granularity chain for one query and returns the first match.

use crate::estimator::types::{AggregateStore, Granularity, Query, ResolutionResult};

/// Resolves a query against the store.
///
/// Tries the keyed granularities in [`Granularity::KEYED`] order. A level is
/// only considered when the query carries every field its key needs, and it
/// matches as soon as the table holds an entry for that key. Existence is the
/// whole test: a single observation at a specific level wins over any amount
/// of data at a coarser one. When nothing matches, the overall entry is
/// returned unconditionally, even if it is empty.
pub fn resolve(store: &AggregateStore, query: &Query) -> ResolutionResult {
    for level in Granularity::KEYED {
        if let Some(entry) = store.lookup(level, query) {
            return ResolutionResult {
                median: entry.median,
                matched: level,
                count: Some(entry.count),
            };
        }
    }

    ResolutionResult {
        median: store.overall.median,
        matched: Granularity::Overall,
        count: Some(store.overall.count),
    }
}
