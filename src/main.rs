//! `golf`: play Golf Solitaire in the terminal.
//!
//! Usage: `golf [--seed N] [--legacy]`

use std::error::Error;
use std::io::{self, BufRead, Write};

use golf_solitaire::session::{render, status_line, Session};
use golf_solitaire::GolfConfig;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<GolfConfig, String> {
    let mut config = GolfConfig::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed '{}'", value))?;
                config = config.with_seed(seed);
            }
            "--legacy" => config = config.with_stock_size(GolfConfig::legacy().stock_size),
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = parse_args(std::env::args().skip(1))?;
    let mut session = Session::new(config)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();
    let mut message = String::new();

    while session.is_running() {
        if let Some(line) = status_line(session.game().status()) {
            message = line.to_string();
        }

        write!(stdout, "{}", CLEAR_SCREEN)?;
        writeln!(stdout, "{}", render(session.game()))?;
        writeln!(stdout, "{}\n", message)?;
        writeln!(stdout, "Make your move. Press H for help")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        message = session.handle_line(&line?);
    }

    Ok(())
}
