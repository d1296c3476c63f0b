//! Observability utilities (tracing only).

mod tracing;

pub use tracing::init_tracing;
