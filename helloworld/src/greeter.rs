//! The greeter: one fixed line, painted green, written once.

use std::io::Write;

use anyhow::{Context, Result};
use colored::Color;
use tracing::debug;

/// The text every invocation prints.
pub const GREETING: &str = "Hello World";

/// Foreground color applied to [`GREETING`].
pub const GREETING_COLOR: Color = Color::Green;

/// Wraps text in terminal styling for a foreground color.
///
/// Implementations must not alter the text itself, only surround it.
pub trait Painter {
    fn paint(&self, text: &str, color: Color) -> String;
}

impl<P: Painter + ?Sized> Painter for &P {
    fn paint(&self, text: &str, color: Color) -> String {
        (**self).paint(text, color)
    }
}

/// ANSI SGR painter: `ESC[<code>m` + text + `ESC[0m`.
///
/// Codes come from `colored`, but unlike `Colorize` this ignores the crate's
/// process-wide on/off switch. Whether to color at all is the caller's call.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPainter;

impl Painter for AnsiPainter {
    fn paint(&self, text: &str, color: Color) -> String {
        format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
    }
}

/// Passthrough painter, for plain output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn paint(&self, text: &str, _color: Color) -> String {
        text.to_string()
    }
}

/// Renders and writes the greeting through a [`Painter`].
#[derive(Debug, Clone, Default)]
pub struct Greeter<P = AnsiPainter> {
    // ---
    painter: P,
}

impl<P: Painter> Greeter<P> {
    // ---
    pub fn new(painter: P) -> Self {
        // ---
        Self { painter }
    }

    /// The full output line, trailing newline included.
    pub fn render(&self) -> String {
        // ---
        let mut line = self.painter.paint(GREETING, GREETING_COLOR);
        line.push('\n');
        line
    }

    /// Writes the rendered line to `out` in a single write, then flushes.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error (e.g. a closed pipe) with context.
    pub fn greet<W: Write>(&self, out: &mut W) -> Result<()> {
        // ---
        let line = self.render();
        debug!(bytes = line.len(), "writing greeting");

        out.write_all(line.as_bytes())
            .context("failed to write greeting")?;
        out.flush().context("failed to flush greeting")?;

        Ok(())
    }
}

/// Prints the green greeting to stdout.
pub fn say_hello() -> Result<()> {
    // ---
    let stdout = std::io::stdout();
    Greeter::new(AnsiPainter).greet(&mut stdout.lock())
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use std::cell::RefCell;
    use std::io;

    /// Records every call and returns a recognizable wrapping.
    #[derive(Default)]
    struct RecordingPainter {
        calls: RefCell<Vec<(String, Color)>>,
    }

    impl Painter for RecordingPainter {
        fn paint(&self, text: &str, color: Color) -> String {
            self.calls.borrow_mut().push((text.to_string(), color));
            format!("<{text}>")
        }
    }

    /// Writer that refuses everything, like stdout after the reader hung up.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Removes `ESC[...m` sequences.
    fn strip_sgr(s: &str) -> String {
        // ---
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn ansi_painter_wraps_in_green_and_reset() {
        // ---
        let greeter = Greeter::new(AnsiPainter);
        assert_eq!(greeter.render(), "\x1b[32mHello World\x1b[0m\n");
    }

    #[test]
    fn default_greeter_is_ansi() {
        // ---
        let greeter: Greeter = Greeter::default();
        assert_eq!(greeter.render(), Greeter::new(AnsiPainter).render());
    }

    #[test]
    fn plain_painter_yields_bare_line() {
        // ---
        let mut buf = Vec::new();
        Greeter::new(PlainPainter).greet(&mut buf).unwrap();
        assert_eq!(buf, b"Hello World\n");
    }

    #[test]
    fn stripped_ansi_output_matches_plain() {
        // ---
        let colored = Greeter::new(AnsiPainter).render();
        assert_eq!(strip_sgr(&colored), Greeter::new(PlainPainter).render());
    }

    #[test]
    fn painter_sees_exact_text_and_green() {
        // ---
        let painter = RecordingPainter::default();
        let greeter = Greeter::new(&painter);

        assert_eq!(greeter.render(), "<Hello World>\n");
        assert_eq!(
            painter.calls.borrow().as_slice(),
            &[("Hello World".to_string(), Color::Green)]
        );
    }

    #[test]
    fn repeated_greets_append_identical_lines() {
        // ---
        let greeter = Greeter::new(AnsiPainter);
        let mut buf = Vec::new();
        for _ in 0..3 {
            greeter.greet(&mut buf).unwrap();
        }

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| *l == "\x1b[32mHello World\x1b[0m"));
    }

    #[test]
    fn write_failure_propagates() {
        // ---
        let err = Greeter::new(PlainPainter)
            .greet(&mut ClosedPipe)
            .expect_err("closed pipe must fail");

        assert!(err.to_string().contains("failed to write greeting"));
        let io_err = err.downcast_ref::<io::Error>().expect("io error source");
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }
}
