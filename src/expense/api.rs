//! The JSON API for programmatic clients.
//!
//! Errors are reported as `{"detail": "..."}` with a status code of 404 for a missing expense,
//! 422 for a body or path that is not valid, and 500 for storage failures.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    app_state::{ExpenseState, TimezoneState},
    expense::{Expense, ExpenseData, ExpenseId, ExpenseStore},
    timezone::get_local_date,
};

/// An expense as returned by the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRead {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// What the money was spent on.
    pub description: String,
    /// How much was spent.
    pub amount: f64,
    /// When the money was spent, serialized as "YYYY-MM-DD".
    pub date: Date,
}

impl From<Expense> for ExpenseRead {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            description: expense.description,
            amount: expense.amount,
            date: expense.date,
        }
    }
}

/// A JSON extractor that rejects bad request bodies with [ApiError::Unprocessable].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// A path extractor that rejects malformed path parameters, e.g. a non-integer ID,
/// with [ApiError::Unprocessable].
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// The errors returned by the JSON API.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ApiError {
    /// The requested expense does not exist.
    #[error("Expense not found")]
    NotFound,

    /// The request body or path could not be parsed.
    #[error("{0}")]
    Unprocessable(String),

    /// Something went wrong on the server, details are logged rather than returned.
    #[error("Internal server error")]
    Internal,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Unprocessable(rejection.body_text())
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        match error {
            Error::NotFound => Self::NotFound,
            error => {
                tracing::error!("An unexpected error occurred in the expense API: {error}");
                Self::Internal
            }
        }
    }
}

/// The body of informational and error responses.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Detail {
    /// A human readable message.
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(Detail {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Create an expense from a JSON body and return it with its new ID.
pub async fn create_expense_api<S>(
    State(state): State<ExpenseState<S>>,
    ApiJson(data): ApiJson<ExpenseData>,
) -> Result<Json<ExpenseRead>, ApiError>
where
    S: ExpenseStore,
{
    let expense = state.expense_store.create(data)?;

    Ok(Json(expense.into()))
}

/// List every expense, oldest first.
pub async fn get_expenses_api<S>(
    State(state): State<ExpenseState<S>>,
) -> Result<Json<Vec<ExpenseRead>>, ApiError>
where
    S: ExpenseStore,
{
    let expenses = state.expense_store.get_all()?;

    Ok(Json(expenses.into_iter().map(ExpenseRead::from).collect()))
}

/// The sum of the expenses dated in the current calendar month, as a bare JSON number.
///
/// The current month is taken from today's date in the server's timezone.
pub async fn get_monthly_total_api<S>(
    State(state): State<ExpenseState<S>>,
    State(timezone): State<TimezoneState>,
) -> Result<Json<f64>, ApiError>
where
    S: ExpenseStore,
{
    let today = get_local_date(&timezone.local_timezone)?;
    let total = state.expense_store.sum_current_month(today)?;

    Ok(Json(total))
}

/// Replace every field of an existing expense.
pub async fn update_expense_api<S>(
    State(state): State<ExpenseState<S>>,
    ApiPath(expense_id): ApiPath<ExpenseId>,
    ApiJson(data): ApiJson<ExpenseData>,
) -> Result<Json<ExpenseRead>, ApiError>
where
    S: ExpenseStore,
{
    let expense = state.expense_store.update(expense_id, data)?;

    Ok(Json(expense.into()))
}

/// Delete an expense.
pub async fn delete_expense_api<S>(
    State(state): State<ExpenseState<S>>,
    ApiPath(expense_id): ApiPath<ExpenseId>,
) -> Result<Json<Detail>, ApiError>
where
    S: ExpenseStore,
{
    state.expense_store.delete(expense_id)?;

    Ok(Json(Detail {
        detail: "Expense deleted".to_owned(),
    }))
}
