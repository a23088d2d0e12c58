//! Implements a SQLite backed expense store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row, params};
use time::Date;

use crate::{
    Error,
    expense::{Expense, ExpenseData, ExpenseId, ExpenseStore},
};

/// Stores expenses in a SQLite database.
///
/// The connection is only locked for the duration of a single statement.
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    ///
    /// The caller must have created the expense table, e.g. with
    /// [initialize_db](crate::initialize_db).
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    fn create(&self, expense: ExpenseData) -> Result<Expense, Error> {
        let connection = self.lock()?;

        let expense = connection
            .prepare(
                "INSERT INTO expense (description, amount, date) VALUES (?1, ?2, ?3)
                 RETURNING id, description, amount, date",
            )?
            .query_row(
                params![expense.description, expense.amount, expense.date],
                map_row,
            )?;

        Ok(expense)
    }

    /// Retrieve an expense in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] there is some other SQL error.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        let expense = self
            .lock()?
            .prepare("SELECT id, description, amount, date FROM expense WHERE id = :id")?
            .query_row(&[(":id", &id)], map_row)?;

        Ok(expense)
    }

    fn get_all(&self) -> Result<Vec<Expense>, Error> {
        self.lock()?
            .prepare("SELECT id, description, amount, date FROM expense ORDER BY id ASC")?
            .query_map([], map_row)?
            .map(|maybe_expense| maybe_expense.map_err(Error::from))
            .collect()
    }

    fn update(&self, id: ExpenseId, expense: ExpenseData) -> Result<Expense, Error> {
        let connection = self.lock()?;

        // `RETURNING` yields no rows when `id` does not match, which maps to `Error::NotFound`.
        let expense = connection
            .prepare(
                "UPDATE expense SET description = ?1, amount = ?2, date = ?3 WHERE id = ?4
                 RETURNING id, description, amount, date",
            )?
            .query_row(
                params![expense.description, expense.amount, expense.date, id],
                map_row,
            )?;

        Ok(expense)
    }

    fn delete(&self, id: ExpenseId) -> Result<(), Error> {
        let rows_affected = self
            .lock()?
            .execute("DELETE FROM expense WHERE id = ?1", [id])?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    fn sum_all(&self) -> Result<f64, Error> {
        let total = self
            .lock()?
            .prepare("SELECT COALESCE(SUM(amount), 0) FROM expense")?
            .query_row([], |row| row.get(0))?;

        Ok(total)
    }

    fn sum_current_month(&self, today: Date) -> Result<f64, Error> {
        let year_month = format!("{:04}-{:02}", today.year(), u8::from(today.month()));

        let total = self
            .lock()?
            .prepare(
                "SELECT COALESCE(SUM(amount), 0) FROM expense
                 WHERE strftime('%Y-%m', date) = ?1",
            )?
            .query_row([year_month], |row| row.get(0))?;

        Ok(total)
    }
}

/// Create the expense table and its indexes if they do not already exist.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY,
            description TEXT NOT NULL,
            amount REAL NOT NULL,
            date TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_expense_description ON expense(description);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        description: row.get(1)?,
        amount: row.get(2)?,
        date: row.get(3)?,
    })
}

#[cfg(test)]
mod create_table_tests {
    use rusqlite::Connection;

    use super::create_expense_table;

    #[test]
    fn sql_is_valid() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

        assert_eq!(Ok(()), create_expense_table(&connection));
    }
}
