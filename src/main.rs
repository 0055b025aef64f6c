// KIF replay tool: applies KIF move lines to a position and prints the board

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shogi_board::board::{kif, DisplayOptions, Position, STARTPOS_SFEN};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting position in SFEN (with or without the leading "sfen")
    #[arg(long, default_value = STARTPOS_SFEN)]
    sfen: String,

    /// Marker printed next to the side to move
    #[arg(long, default_value = "【手番】")]
    turn_label: String,

    /// Only print the final SFEN
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// KIF record to replay; stdin when omitted
    kif: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();

    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            log::error!("Fatal error: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Returns whether every move line applied cleanly.
fn run(args: &Args) -> Result<bool> {
    let mut position = Position::try_from_sfen(&args.sfen)
        .with_context(|| format!("invalid starting position {:?}", args.sfen))?;

    let text = match &args.kif {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };

    let options = DisplayOptions {
        turn_label: args.turn_label.clone(),
        ..DisplayOptions::default()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.quiet {
        write!(out, "{}", position.render(&options))?;
    }

    let mut clean = true;
    for line in kif::move_lines(&text) {
        match position.apply_kif(line) {
            Ok(()) => {
                position.increment_move_count();
                if !args.quiet {
                    writeln!(out, "{line}")?;
                    write!(out, "{}", position.render(&options))?;
                }
            }
            Err(e) => {
                log::error!("{line}: {e}");
                clean = false;
            }
        }
    }

    writeln!(out, "sfen {}", position.to_sfen())?;
    Ok(clean)
}
