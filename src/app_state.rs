//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::expense::ExpenseStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<S>
where
    S: ExpenseStore,
{
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The store for managing [expenses](crate::Expense).
    pub expense_store: S,
}

impl<S> AppState<S>
where
    S: ExpenseStore,
{
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    /// It decides what "today" means for date defaults and the monthly total.
    pub fn new(expense_store: S, local_timezone: &str) -> Self {
        Self {
            local_timezone: local_timezone.to_owned(),
            expense_store,
        }
    }
}

/// The state needed by route handlers that read or write expenses.
#[derive(Debug, Clone)]
pub struct ExpenseState<S>
where
    S: ExpenseStore,
{
    /// The store for managing [expenses](crate::Expense).
    pub expense_store: S,
}

impl<S> FromRef<AppState<S>> for ExpenseState<S>
where
    S: ExpenseStore,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// The state needed by route handlers that need to know today's date.
#[derive(Debug, Clone)]
pub struct TimezoneState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl<S> FromRef<AppState<S>> for TimezoneState
where
    S: ExpenseStore,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}
