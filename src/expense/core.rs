use serde::{Deserialize, Deserializer, Serialize, de};
use time::Date;

use crate::Error;

/// Database identifier for an expense.
pub type ExpenseId = i64;

/// A single expense as it is stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID assigned by the database when the expense was created.
    pub id: ExpenseId,
    /// A short label for what the money was spent on.
    pub description: String,
    /// How much was spent.
    pub amount: f64,
    /// When the money was spent.
    pub date: Date,
}

/// The user supplied fields of an expense.
///
/// This is the body of both the HTML forms and the JSON API requests, and is
/// used for creating an expense as well as replacing an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseData {
    /// A short label for what the money was spent on.
    pub description: String,
    /// How much was spent, must be a finite number.
    #[serde(deserialize_with = "deserialize_finite_amount")]
    pub amount: f64,
    /// When the money was spent, as an ISO 8601 date, e.g. "2025-01-31".
    pub date: Date,
}

fn deserialize_finite_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = f64::deserialize(deserializer)?;

    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(de::Error::custom(format!(
            "amount must be a finite number, got {amount}"
        )))
    }
}

/// Handles the creation, retrieval, modification and totalling of expenses.
///
/// Route handlers are generic over this trait so that the storage backend is
/// chosen when the [AppState](crate::AppState) is built.
pub trait ExpenseStore: Clone + Send + Sync + 'static {
    /// Add a new expense to the store and return it with its assigned ID.
    fn create(&self, expense: ExpenseData) -> Result<Expense, Error>;

    /// Retrieve an expense by its `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored expense.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error>;

    /// Retrieve every expense in the order it is stored.
    fn get_all(&self) -> Result<Vec<Expense>, Error>;

    /// Replace the description, amount and date of the expense `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored expense,
    /// in which case the store is left unchanged.
    fn update(&self, id: ExpenseId, expense: ExpenseData) -> Result<Expense, Error>;

    /// Remove the expense `id` from the store.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored expense.
    fn delete(&self, id: ExpenseId) -> Result<(), Error>;

    /// The sum of all expense amounts, zero if there are none.
    fn sum_all(&self) -> Result<f64, Error>;

    /// The sum of the amounts of expenses dated in the same calendar month and
    /// year as `today`, zero if there are none.
    fn sum_current_month(&self, today: Date) -> Result<f64, Error>;
}
