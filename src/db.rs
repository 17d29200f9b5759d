//! Database initialization.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, storage::create_kv_table};

/// Create the application's tables if they do not exist.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_kv_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
