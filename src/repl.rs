//! The interactive loop.
//!
//! Owns the single [`AddressBook`] instance, reads one command per
//! line, routes it through [`commands::dispatch`], and prints the
//! outcome. Failures are formatted for the user and never end the
//! loop.

use crate::book::AddressBook;
use crate::commands::{self, Command};
use crate::config::Config;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the assistant over stdin/stdout until `close`/`exit` or EOF.
pub fn run(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(&mut stdin.lock(), &mut stdout.lock(), &config.prompt, || {
        Local::now().date_naive()
    })
}

/// The loop itself, generic over its streams so tests can drive it
/// with scripted input and a fixed clock.
pub fn run_with<R, W, F>(input: &mut R, output: &mut W, prompt: &str, today: F) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut book = AddressBook::new();
    let mut line = String::new();

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input stream closed");
            break;
        }

        let mut tokens = line.split_whitespace();
        let Some(token) = tokens.next() else {
            continue;
        };
        let args: Vec<&str> = tokens.collect();

        match token.parse::<Command>() {
            Ok(Command::Exit) => {
                writeln!(output, "Good bye!")?;
                break;
            }
            Ok(command) => match commands::dispatch(command, &args, &mut book, today()) {
                Ok(message) => writeln!(output, "{}", message)?,
                Err(err) => {
                    debug!(error = %err, "command failed");
                    writeln!(output, "{}", err)?;
                }
            },
            Err(_) => writeln!(output, "Invalid command.")?,
        }
    }

    Ok(())
}
