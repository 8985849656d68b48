//! folio-cli - the portfolio terminal outside the browser.
//!
//! Runs the same command registry and session as the web site:
//!
//! ```text
//! folio-cli                      # interactive prompt
//! folio-cli run whoami "ls projects"
//! folio-cli --json run "ping social"
//! ```

mod banner;
mod render;
mod repl;

use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use folio_core::config::{WELCOME_TEXT, typing::DEFAULT_SPEED_MS};
use folio_core::{TerminalSession, TypingConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "folio-cli", version, about = "Portfolio terminal for the command line")]
struct Cli {
    /// Skip the animated welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Print the final transcript as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Milliseconds between banner characters
    #[arg(long, default_value_t = DEFAULT_SPEED_MS)]
    speed: u32,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Execute the given lines in order and exit
    Run {
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// Read commands from stdin until EOF or `exit`
    Repl,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = TypingConfig::new(cli.speed, 0, false).context("invalid --speed")?;
    let mut session = TerminalSession::new();
    let mut stdout = io::stdout().lock();

    if !cli.no_banner && !cli.json {
        let lines = WELCOME_TEXT.lines().map(str::to_string).collect();
        banner::play(&mut stdout, lines, config).await?;
    }

    match cli.mode.unwrap_or(Mode::Repl) {
        Mode::Run { lines } => {
            for line in &lines {
                let outcome = session.execute(line);
                if !cli.json {
                    render::outcome(&mut stdout, &session, outcome)?;
                }
            }
        }
        Mode::Repl => {
            let stdin = io::stdin().lock();
            repl::run(stdin, &mut stdout, &mut session, !cli.json)?;
        }
    }

    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, session.lines())
            .context("failed to serialize transcript")?;
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
