//! The durable key-value storage collaborator.
//!
//! A single `kv` table maps string keys to string values. The ledger is
//! stored under one fixed key as a JSON document; absence of the key is
//! a valid state and means "no data".

use rusqlite::{Connection, OptionalExtension};

use crate::Error;

/// Create the key-value table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_kv_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Read the value stored under `key`, or `None` if the key is absent.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get(key: &str, connection: &Connection) -> Result<Option<String>, Error> {
    connection
        .prepare("SELECT value FROM kv WHERE key = :key")?
        .query_row(&[(":key", &key)], |row| row.get(0))
        .optional()
        .map_err(|error| error.into())
}

/// Store `value` under `key`, replacing any previous value.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn set(key: &str, value: &str, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO kv (key, value) VALUES (:key, :value)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        &[(":key", &key), (":value", &value)],
    )?;

    Ok(())
}

/// Remove `key` and its value. Removing an absent key is a no-op.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn remove(key: &str, connection: &Connection) -> Result<(), Error> {
    connection.execute("DELETE FROM kv WHERE key = :key", &[(":key", &key)])?;

    Ok(())
}

#[cfg(test)]
mod storage_tests {
    use rusqlite::Connection;

    use crate::db::initialize;

    use super::{get, remove, set};

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn get_returns_none_for_absent_key() {
        let conn = get_test_connection();

        let value = get("expenses", &conn).expect("Could not read key");

        assert_eq!(value, None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let conn = get_test_connection();

        set("expenses", "[]", &conn).expect("Could not store value");

        let value = get("expenses", &conn).expect("Could not read key");
        assert_eq!(value, Some("[]".to_owned()));
    }

    #[test]
    fn set_replaces_previous_value() {
        let conn = get_test_connection();
        set("expenses", "old", &conn).unwrap();

        set("expenses", "new", &conn).unwrap();

        let value = get("expenses", &conn).unwrap();
        assert_eq!(value, Some("new".to_owned()));
    }

    #[test]
    fn remove_deletes_key() {
        let conn = get_test_connection();
        set("expenses", "[]", &conn).unwrap();

        remove("expenses", &conn).expect("Could not remove key");

        assert_eq!(get("expenses", &conn).unwrap(), None);
    }

    #[test]
    fn remove_absent_key_is_a_no_op() {
        let conn = get_test_connection();

        let result = remove("expenses", &conn);

        assert_eq!(result, Ok(()));
    }
}
