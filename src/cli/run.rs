use super::*;

use crate::domain::{ContactBook, parse_phone};
use crate::logging;
use crate::storage::StorageMediums;
use clap::Parser;
use command::{Cli, Command};
use dotenv::dotenv;
use log::{debug, error};
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// What became of one command once it stopped reading input.
enum Outcome {
    Done,
    InputClosed,
}

/// Fields read for a command, or the reason there are none.
enum Prompted<T> {
    Value(T),
    Abandoned,
    InputClosed,
}

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet)?;

    let medium = StorageMediums::from(&cli.storage)?;
    let mut book = ContactBook::open(medium, &cli.db_path)?;

    println!("\n--- CONTACT MANAGER ({} storage) ---", book.medium());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = Session::new(&mut book, stdin.lock(), stdout.lock()).run();

    let closed = book.close();
    result.and(closed)
}

/// Read-dispatch-print loop over one contact book.
///
/// Store failures and bad input are reported to the operator and the menu is
/// shown again. Only an exit request, end of input, or a failure to write to
/// the operator ends the session.
pub struct Session<'a, R, W> {
    book: &'a mut ContactBook,
    input: R,
    out: W,
    state: SessionState,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(book: &'a mut ContactBook, input: R, out: W) -> Self {
        Self {
            book,
            input,
            out,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        while self.state == SessionState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// Shows the menu and handles one command.
    pub fn step(&mut self) -> Result<SessionState, AppError> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }

        show_menu(&mut self.out)?;

        let Some(action) = get_input(&mut self.input)? else {
            return self.terminate();
        };

        let command = Command::from_input(&action);
        debug!("menu selection {:?}", command);

        let outcome = match command {
            Command::Add => self.add()?,
            Command::Search => self.search()?,
            Command::Update => self.update()?,
            Command::Delete => self.delete()?,
            Command::Import => self.import()?,
            Command::Export => self.export()?,
            Command::ListAll => self.list_all()?,
            Command::Exit => return self.terminate(),
            Command::Unrecognized(raw) => {
                writeln!(self.out, "Invalid option '{}'. Please enter a number from 0 to 7.", raw)?;
                Outcome::Done
            }
        };

        match outcome {
            Outcome::Done => Ok(self.state),
            Outcome::InputClosed => self.terminate(),
        }
    }

    fn terminate(&mut self) -> Result<SessionState, AppError> {
        writeln!(self.out, "\nBye!")?;
        self.out.flush()?;
        self.state = SessionState::Terminated;
        Ok(self.state)
    }

    fn field(&mut self, label: &str) -> Result<Option<String>, AppError> {
        prompt(&mut self.input, &mut self.out, label)
    }

    fn report(&mut self, err: AppError) -> Result<Outcome, AppError> {
        error!("{}", err);
        writeln!(self.out, "Error: {}", err)?;
        Ok(Outcome::Done)
    }

    fn contact_fields(&mut self) -> Result<Prompted<(String, String, i64)>, AppError> {
        let Some(name) = self.field("Enter contact name: ")? else {
            return Ok(Prompted::InputClosed);
        };
        let Some(email) = self.field("Enter contact email: ")? else {
            return Ok(Prompted::InputClosed);
        };
        let Some(phone) = self.field("Enter contact phone: ")? else {
            return Ok(Prompted::InputClosed);
        };

        match parse_phone(&phone) {
            Ok(phone) => Ok(Prompted::Value((name, email, phone))),
            Err(e) => {
                writeln!(self.out, "{}. Returning to menu.", e)?;
                Ok(Prompted::Abandoned)
            }
        }
    }

    fn add(&mut self) -> Result<Outcome, AppError> {
        let (name, email, phone) = match self.contact_fields()? {
            Prompted::Value(fields) => fields,
            Prompted::Abandoned => return Ok(Outcome::Done),
            Prompted::InputClosed => return Ok(Outcome::InputClosed),
        };

        match self.book.add(&name, &email, phone) {
            Ok(_) => writeln!(self.out, "Contact added successfully!")?,
            Err(e) => return self.report(e),
        }
        Ok(Outcome::Done)
    }

    fn search(&mut self) -> Result<Outcome, AppError> {
        let Some(query) = self.field("Enter name or email to search: ")? else {
            return Ok(Outcome::InputClosed);
        };

        match self.book.search(&query) {
            Ok(results) if results.is_empty() => {
                writeln!(self.out, "No results found for the given query.")?
            }
            Ok(results) => display_contacts(&mut self.out, "Search results:", &results)?,
            Err(e) => return self.report(e),
        }
        Ok(Outcome::Done)
    }

    fn update(&mut self) -> Result<Outcome, AppError> {
        let (name, email, phone) = match self.contact_fields()? {
            Prompted::Value(fields) => fields,
            Prompted::Abandoned => return Ok(Outcome::Done),
            Prompted::InputClosed => return Ok(Outcome::InputClosed),
        };

        match self.book.update(&name, &email, phone) {
            Ok(result) if result.matched => writeln!(self.out, "Contact updated successfully!")?,
            Ok(_) => writeln!(self.out, "No contact found with the given name.")?,
            Err(e) => return self.report(e),
        }
        Ok(Outcome::Done)
    }

    fn delete(&mut self) -> Result<Outcome, AppError> {
        let Some(name) = self.field("Enter contact name: ")? else {
            return Ok(Outcome::InputClosed);
        };

        match self.book.delete(&name) {
            Ok(result) if result.matched => writeln!(self.out, "Contact deleted successfully!")?,
            Ok(_) => writeln!(self.out, "No contact found with the given name.")?,
            Err(e) => return self.report(e),
        }
        Ok(Outcome::Done)
    }

    fn import(&mut self) -> Result<Outcome, AppError> {
        let Some(path) = self.field("Enter CSV file path: ")? else {
            return Ok(Outcome::InputClosed);
        };

        match self.book.import_from(Path::new(&path)) {
            Ok(result) => {
                writeln!(
                    self.out,
                    "Imported {} contacts from {:?}.",
                    result.imported, result.source
                )?;
                for rejected in &result.rejected {
                    writeln!(
                        self.out,
                        "  row {} skipped: {}",
                        rejected.row, rejected.reason
                    )?;
                }
            }
            Err(e) => return self.report(e),
        }
        Ok(Outcome::Done)
    }

    fn export(&mut self) -> Result<Outcome, AppError> {
        let Some(path) = self.field("Enter CSV file path: ")? else {
            return Ok(Outcome::InputClosed);
        };

        match self.book.export_to(Path::new(&path)) {
            Ok(result) => writeln!(
                self.out,
                "Exported {} contacts to {:?}.",
                result.exported, result.destination
            )?,
            Err(e) => return self.report(e),
        }
        Ok(Outcome::Done)
    }

    fn list_all(&mut self) -> Result<Outcome, AppError> {
        match self.book.list_all() {
            Ok(contacts) if contacts.is_empty() => writeln!(self.out, "No contacts found.")?,
            Ok(contacts) => display_contacts(&mut self.out, "All contacts:", &contacts)?,
            Err(e) => return self.report(e),
        }
        Ok(Outcome::Done)
    }
}
