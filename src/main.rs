//! rolo - Main entry point
//!
//! Interactive address book: reads commands from stdin, prints replies to
//! stdout, and persists the book to a data file on exit.

use anyhow::{Context, Result};
use chrono::Local;
use rolo::commands::{self, Reply};
use rolo::{storage, AddressBook, Config};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only; stdout belongs to the REPL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut book = if config.data_file.exists() {
        match storage::load_from_file(&config.data_file) {
            Ok(book) => {
                info!(
                    "Loaded {} contacts from {}",
                    book.len(),
                    config.data_file.display()
                );
                book
            }
            Err(e) => {
                // Refuse to run: a later save would overwrite the file
                error!("Failed to load {}: {}", config.data_file.display(), e);
                return Err(e).context(format!(
                    "could not read address book from {}",
                    config.data_file.display()
                ));
            }
        }
    } else {
        info!(
            "No data file at {}, starting with an empty book",
            config.data_file.display()
        );
        AddressBook::new()
    };

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: save and leave, same as `close`
            break;
        }

        let today = Local::now().date_naive();
        match commands::execute(&mut book, &line, today) {
            Reply::Empty => continue,
            Reply::Message(message) => println!("{}", message),
            Reply::Farewell(message) => {
                println!("{}", message);
                break;
            }
        }
    }

    storage::save_to_file(&book, &config.data_file).context("could not save address book")?;
    info!(
        "Saved {} contacts to {}",
        book.len(),
        config.data_file.display()
    );

    Ok(())
}
