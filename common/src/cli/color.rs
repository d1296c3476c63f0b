//! Standardized CLI color policy.
//!
//! Follows the usual terminal conventions:
//! - Command-line choice wins.
//! - `NO_COLOR` disables colors.
//! - `EMACS` and `TERM=dumb` imply a terminal that can't render them.
//! - `CLICOLOR_FORCE` (anything but `0`) enables colors even when piped.
//! - Otherwise, in `Auto`, colors follow whether the stream is a TTY.

use std::env;
use std::ffi::OsString;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorWhen {
    /// Enable colors only when output is a TTY.
    #[default]
    Auto,

    /// Always enable colors.
    Always,

    /// Never enable colors.
    Never,
}

impl ColorWhen {
    // ---
    /// Returns whether ANSI color should be used for the given stream.
    pub fn should_color(self, stream: atty::Stream) -> bool {
        // ---
        self.decide(|key| env::var_os(key), || atty::is(stream))
    }

    /// Convenience helper for stdout.
    pub fn should_color_stdout(self) -> bool {
        self.should_color(atty::Stream::Stdout)
    }

    /// Convenience helper for stderr.
    pub fn should_color_stderr(self) -> bool {
        self.should_color(atty::Stream::Stderr)
    }

    /// Core decision, parameterized over the environment lookup and the TTY
    /// probe. The probe only runs when nothing in the environment settles it.
    fn decide<E, T>(self, var: E, is_tty: T) -> bool
    where
        E: Fn(&str) -> Option<OsString>,
        T: FnOnce() -> bool,
    {
        // ---
        match self {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => {
                if var("NO_COLOR").is_some() {
                    return false;
                }

                if var("EMACS").is_some() {
                    return false;
                }

                if var("TERM").is_some_and(|term| term == "dumb") {
                    return false;
                }

                if var("CLICOLOR_FORCE").is_some_and(|force| force != "0") {
                    return true;
                }

                is_tty()
            }
        }
    }
}
