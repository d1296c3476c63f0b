//! Shared CLI policy and observability for the helloworld binaries.
//!
//! Binaries pull color decisions and tracing setup from here instead of
//! re-implementing them.

pub mod cli;
pub mod observability;

pub use cli::ColorWhen;
pub use observability::init_tracing;
