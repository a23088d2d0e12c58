//! The endpoint URIs for the web pages and the JSON API.
//!
//! For endpoints that take a parameter, e.g., '/update/{expense_id}', use [format_endpoint].

/// The page listing all expenses and their total.
pub const ROOT: &str = "/";
/// The page and form target for creating a new expense.
pub const NEW_EXPENSE_VIEW: &str = "/add";
/// The page and form target for updating an existing expense.
pub const UPDATE_EXPENSE_VIEW: &str = "/update/{expense_id}";
/// The form target for deleting an expense.
pub const DELETE_EXPENSE: &str = "/delete/{expense_id}";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create and list expenses.
pub const EXPENSES_API: &str = "/api/expenses/";
/// The list/create route without its trailing slash, redirects to [EXPENSES_API].
pub const EXPENSES_API_NO_SLASH: &str = "/api/expenses";
/// The route for the total of this month's expenses.
pub const EXPENSES_TOTAL_API: &str = "/api/expenses/total";
/// The route to update or delete a single expense.
pub const EXPENSE_API: &str = "/api/expenses/{expense_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/update/{expense_id}', '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
