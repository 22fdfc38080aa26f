pub mod config;
pub mod liveness;
