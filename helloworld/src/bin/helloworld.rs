//! Hello World - CLI binary.
//!
//! Prints a green "Hello World" to stdout and exits.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use helloworld::{say_hello, Greeter, PlainPainter};
use helloworld_common::{init_tracing, ColorWhen};

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorWhen {
    fn from(v: ColorArg) -> Self {
        match v {
            ColorArg::Auto => ColorWhen::Auto,
            ColorArg::Always => ColorWhen::Always,
            ColorArg::Never => ColorWhen::Never,
        }
    }
}

/// Hello World - Print a colored greeting
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    // ---
    /// Coloring
    #[arg(long, value_enum, default_value = "always")]
    color: ColorArg,
}

/// Capture version number from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // ---
    let args = Args::parse();
    let color: ColorWhen = args.color.into();

    init_tracing(color, "warn")?;
    debug!("helloworld v{VERSION}, color: {:?}", color);

    if color.should_color_stdout() {
        say_hello()
    } else {
        Greeter::new(PlainPainter).greet(&mut std::io::stdout().lock())
    }
}
