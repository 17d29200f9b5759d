//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    ledger::{Ledger, load_ledger},
};

/// How the expenses page is wired up.
///
/// The mode is an explicit configuration choice made at start-up, not
/// something inferred from the rendered markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OperatingMode {
    /// The built-in ledger handles mutations and mirrors them to local
    /// storage. This is the default.
    ClientOnly,
    /// The expense form posts to an external backend and the built-in
    /// ledger endpoints are not registered.
    ServerBacked,
}

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Whether the built-in ledger or an external backend handles the
    /// expense form.
    pub mode: OperatingMode,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The in-memory ledger, loaded from storage once at start-up and
    /// mirrored back after every mutation.
    pub ledger: Arc<Mutex<Ledger>>,

    /// The database connection backing the key-value storage.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database and load the persisted
    /// ledger, treating absent or undecodable data as an empty ledger.
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized or read.
    pub fn new(
        db_connection: Connection,
        mode: OperatingMode,
        local_timezone: &str,
    ) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let ledger = load_ledger(&db_connection)?;

        Ok(Self {
            mode,
            local_timezone: local_timezone.to_owned(),
            ledger: Arc::new(Mutex::new(ledger)),
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}
