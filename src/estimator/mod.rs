//! Historical delay aggregation and fallback resolution.
//!
//! This module buckets raw trip records into median-delay tables at six
//! granularities, then answers a query by walking those tables from most
//! specific to least specific and labelling the match with a confidence
//! level.

pub mod aggregate;
pub mod confidence;
pub mod resolve;
pub mod types;
pub mod utility;
