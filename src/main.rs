//! Contact Book - demonstration entry point
//!
//! Walks the address book through a small scripted session: create two
//! contacts, print them, edit and look up phone numbers, and delete a
//! record. Demonstrative only; the reusable surface is the library.

use anyhow::{Context, Result};
use contact_book::{AddressBook, Config, Record};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only, so demo output stays clean on stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting contact book demo");

    let mut book = AddressBook::new();

    // Create a record for John
    let mut john_record = Record::new("John")?;
    john_record.add_phone("1234567890")?;
    john_record.add_phone("5555555555")?;
    book.add_record(john_record);

    // Create and add a record for Jane
    let mut jane_record = Record::new("Jane")?;
    jane_record.add_phone("9876543210")?;
    book.add_record(jane_record);

    // Print every record in the book
    for record in book.records() {
        println!("{}", record);
    }

    // Find John and edit one of his phone numbers
    let john = book
        .find_mut("John")
        .context("John should be in the book")?;
    john.edit_phone("1234567890", "1112223333")?;

    println!("{}", john); // Contact name: John, phones: 1112223333; 5555555555

    // Look up a specific phone number on John
    let found_phone = john.find_phone("5555555555")?;
    println!("{}: {}", john.name(), found_phone); // John: 5555555555

    // Delete Jane's record
    book.delete("Jane");

    info!(contacts = book.len(), "Demo finished");
    Ok(())
}
