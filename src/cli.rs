pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::Contact;
use crate::errors::AppError;
use std::io::{BufRead, Write};

pub const MENU: [&str; 8] = [
    "Enter 1 to add a contact",
    "Enter 2 to search for a contact",
    "Enter 3 to update a contact",
    "Enter 4 to delete a contact",
    "Enter 5 to import contacts from a CSV file",
    "Enter 6 to export contacts to a CSV file",
    "Enter 7 to print all contacts",
    "Enter 0 to exit",
];

// OUTPUT FUNCTIONS
pub fn show_menu<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out)?;
    for line in MENU {
        writeln!(out, "{}", line)?;
    }
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

pub fn display_contacts<W: Write>(
    out: &mut W,
    heading: &str,
    contacts: &[Contact],
) -> Result<(), AppError> {
    writeln!(out, "{}", heading)?;
    for contact in contacts {
        writeln!(out, "{}", contact)?;
    }
    Ok(())
}

// INPUT FUNCTIONS
/// Reads one trimmed line. `None` once the input is exhausted.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>, AppError> {
    write!(out, "{}", label)?;
    out.flush()?;
    get_input(input)
}
