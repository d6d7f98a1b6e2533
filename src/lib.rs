pub mod config;
pub mod errors;
pub mod models;
pub mod plan;
pub mod probe;
pub mod report;
