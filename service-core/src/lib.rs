//! service-core: Shared infrastructure for the BrightSmile webhook service.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
