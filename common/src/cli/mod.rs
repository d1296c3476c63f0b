//! CLI policy shared by binaries.
//!
//! Currently just the color decision, used both for program output and for
//! log lines on stderr.

mod color;

pub use color::ColorWhen;
