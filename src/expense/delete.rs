//! Defines the endpoint for deleting an expense from the expenses page.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::{
    Error,
    app_state::ExpenseState,
    endpoints,
    expense::{ExpenseId, ExpenseStore},
};

/// A route handler for deleting an expense, redirects to the expenses list on success.
pub async fn delete_expense_endpoint<S>(
    State(state): State<ExpenseState<S>>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Redirect, Error>
where
    S: ExpenseStore,
{
    state
        .expense_store
        .delete(expense_id)
        .inspect_err(|error| {
            if *error != Error::NotFound {
                tracing::error!("Could not delete expense {expense_id}: {error}");
            }
        })?;

    Ok(Redirect::to(endpoints::ROOT))
}
