//! Hello World Library
//!
//! Prints a green "Hello World". The coloring step is a [`Painter`] so callers
//! and tests can swap it out.

pub mod greeter;

pub use greeter::{say_hello, AnsiPainter, Greeter, Painter, PlainPainter, GREETING};
