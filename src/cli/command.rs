use crate::storage::DEFAULT_DB_PATH;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rusty-contacts", version, about = "Interactive contact manager")]
pub struct Cli {
    /// Storage medium (json, mem)
    #[arg(long, env = "CONTACTS_STORAGE", default_value_t = String::from("json"))]
    pub storage: String,

    /// Location of the json collection file
    #[arg(long, env = "CONTACTS_DB_PATH", default_value_t = String::from(DEFAULT_DB_PATH))]
    pub db_path: String,

    /// Log debug events to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// One menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Search,
    Update,
    Delete,
    Import,
    Export,
    ListAll,
    Exit,
    Unrecognized(String),
}

impl Command {
    pub fn from_input(input: &str) -> Self {
        match input.trim() {
            "1" => Command::Add,
            "2" => Command::Search,
            "3" => Command::Update,
            "4" => Command::Delete,
            "5" => Command::Import,
            "6" => Command::Export,
            "7" => Command::ListAll,
            "0" => Command::Exit,
            other => Command::Unrecognized(other.to_string()),
        }
    }
}
