//! Mirroring the ledger to the key-value storage collaborator.
//!
//! The whole ledger is stored under one fixed key as a JSON array of
//! `{"name": ..., "amount": ...}` objects in insertion order, e.g.
//! `[{"name":"Coffee","amount":3.5},{"name":"Rent","amount":1200.0}]`.

use rusqlite::Connection;

use crate::{Error, storage};

use super::{Expense, Ledger};

/// The storage key under which the serialized ledger lives.
pub const LEDGER_KEY: &str = "expenses";

/// Load the ledger from storage.
///
/// An absent key and a value that does not decode as a list of expenses
/// are both treated as an empty ledger.
///
/// # Errors
/// This function will return an [Error::SqlError] if the storage read
/// itself fails.
pub fn load_ledger(connection: &Connection) -> Result<Ledger, Error> {
    let Some(raw_ledger) = storage::get(LEDGER_KEY, connection)? else {
        return Ok(Ledger::new());
    };

    match serde_json::from_str::<Vec<Expense>>(&raw_ledger) {
        Ok(records) => Ok(Ledger::from_records(records)),
        Err(error) => {
            tracing::warn!("Stored ledger could not be decoded, starting empty: {error}");
            Ok(Ledger::new())
        }
    }
}

/// Write the full ledger to storage, replacing whatever was there.
///
/// # Errors
/// This function will return an:
/// - [Error::SerializationError] if the ledger cannot be encoded as JSON,
/// - or [Error::SqlError] if the storage write fails.
pub fn save_ledger(ledger: &Ledger, connection: &Connection) -> Result<(), Error> {
    let encoded = serde_json::to_string(ledger.records())
        .map_err(|error| Error::SerializationError(error.to_string()))?;

    storage::set(LEDGER_KEY, &encoded, connection)
}

/// Remove the ledger's storage key entirely.
///
/// This is distinct from saving an empty ledger, although both load back
/// as empty.
///
/// # Errors
/// This function will return an [Error::SqlError] if the storage write fails.
pub fn remove_ledger(connection: &Connection) -> Result<(), Error> {
    storage::remove(LEDGER_KEY, connection)
}

#[cfg(test)]
mod persistence_tests {
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        ledger::{Expense, Ledger},
        storage,
    };

    use super::{LEDGER_KEY, load_ledger, remove_ledger, save_ledger};

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn test_ledger() -> Ledger {
        Ledger::from_records(vec![
            Expense::parse("Coffee", "3.5").unwrap(),
            Expense::parse("Rent", "1200").unwrap(),
        ])
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let conn = get_test_connection();
        let ledger = test_ledger();

        save_ledger(&ledger, &conn).expect("Could not save ledger");
        let loaded = load_ledger(&conn).expect("Could not load ledger");

        assert_eq!(loaded, ledger);
    }

    #[test]
    fn stored_encoding_is_a_json_array_of_name_amount_objects() {
        let conn = get_test_connection();

        save_ledger(&test_ledger(), &conn).unwrap();

        let raw = storage::get(LEDGER_KEY, &conn).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"name":"Coffee","amount":3.5},{"name":"Rent","amount":1200.0}]"#
        );
    }

    #[test]
    fn absent_key_loads_as_empty_ledger() {
        let conn = get_test_connection();

        let loaded = load_ledger(&conn).expect("Could not load ledger");

        assert!(loaded.is_empty());
    }

    #[test]
    fn malformed_values_load_as_empty_ledger() {
        let malformed_values = [
            "not json",
            "{\"name\":\"Coffee\"}",
            "[{\"name\":\"Coffee\"}]",
            "[{\"name\":\"Coffee\",\"amount\":\"lots\"}]",
            "[1, 2, 3]",
        ];

        for value in malformed_values {
            let conn = get_test_connection();
            storage::set(LEDGER_KEY, value, &conn).unwrap();

            let loaded = load_ledger(&conn).expect("Could not load ledger");

            assert!(loaded.is_empty(), "value: {value:?}");
        }
    }

    #[test]
    fn empty_array_and_removed_key_both_load_as_empty() {
        let conn = get_test_connection();

        storage::set(LEDGER_KEY, "[]", &conn).unwrap();
        assert!(load_ledger(&conn).unwrap().is_empty());

        remove_ledger(&conn).unwrap();
        assert!(load_ledger(&conn).unwrap().is_empty());
    }

    #[test]
    fn remove_ledger_deletes_the_key() {
        let conn = get_test_connection();
        save_ledger(&test_ledger(), &conn).unwrap();

        remove_ledger(&conn).expect("Could not remove ledger");

        assert_eq!(storage::get(LEDGER_KEY, &conn).unwrap(), None);
    }
}
