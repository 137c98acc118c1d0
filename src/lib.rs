pub mod estimator;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod prediction;
pub mod records;
