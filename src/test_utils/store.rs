use time::Date;

use crate::{
    Error,
    expense::{Expense, ExpenseData, ExpenseId, ExpenseStore},
};

/// An expense store where every operation fails as if the database were broken.
#[derive(Debug, Clone)]
pub(crate) struct FailingExpenseStore;

fn storage_error() -> Error {
    Error::SqlError(rusqlite::Error::InvalidQuery)
}

impl ExpenseStore for FailingExpenseStore {
    fn create(&self, _expense: ExpenseData) -> Result<Expense, Error> {
        Err(storage_error())
    }

    fn get(&self, _id: ExpenseId) -> Result<Expense, Error> {
        Err(storage_error())
    }

    fn get_all(&self) -> Result<Vec<Expense>, Error> {
        Err(storage_error())
    }

    fn update(&self, _id: ExpenseId, _expense: ExpenseData) -> Result<Expense, Error> {
        Err(storage_error())
    }

    fn delete(&self, _id: ExpenseId) -> Result<(), Error> {
        Err(storage_error())
    }

    fn sum_all(&self) -> Result<f64, Error> {
        Err(storage_error())
    }

    fn sum_current_month(&self, _today: Date) -> Result<f64, Error> {
        Err(storage_error())
    }
}
