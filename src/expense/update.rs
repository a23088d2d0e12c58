//! The page and endpoint for updating an expense from an HTML form.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    app_state::ExpenseState,
    endpoints::{self, format_endpoint},
    expense::{
        Expense, ExpenseData, ExpenseId, ExpenseStore,
        form::{ExpenseFormValues, expense_form_view},
    },
    html::{FORM_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
};

/// Renders the page for updating an expense, pre-filled with its current values.
///
/// Responds with the 404 page if the expense does not exist.
pub async fn get_update_expense_page<S>(
    State(state): State<ExpenseState<S>>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Response, Error>
where
    S: ExpenseStore,
{
    let expense = state.expense_store.get(expense_id).inspect_err(|error| {
        if *error != Error::NotFound {
            tracing::error!("Failed to retrieve expense {expense_id}: {error}");
        }
    })?;

    Ok(update_expense_view(&expense).into_response())
}

/// A route handler for replacing an expense's fields, redirects to the expenses list on success.
pub async fn update_expense_endpoint<S>(
    State(state): State<ExpenseState<S>>,
    Path(expense_id): Path<ExpenseId>,
    Form(form): Form<ExpenseData>,
) -> Result<Redirect, Error>
where
    S: ExpenseStore,
{
    state
        .expense_store
        .update(expense_id, form)
        .inspect_err(|error| {
            if *error != Error::NotFound {
                tracing::error!("Could not update expense {expense_id}: {error}");
            }
        })?;

    Ok(Redirect::to(endpoints::ROOT))
}

fn update_expense_view(expense: &Expense) -> Markup {
    let update_url = format_endpoint(endpoints::UPDATE_EXPENSE_VIEW, expense.id);
    let nav_bar = NavBar::new(endpoints::UPDATE_EXPENSE_VIEW).into_html();
    let form = expense_form_view(
        &update_url,
        "Update Expense",
        ExpenseFormValues {
            description: &expense.description,
            amount: Some(expense.amount),
            date: expense.date,
        },
    );

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Update Expense" }

            (form)
        }
    };

    base("Update Expense", &[dollar_input_styles()], &content)
}

#[cfg(test)]
mod update_expense_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        app_state::ExpenseState,
        endpoints::{self, format_endpoint},
        expense::{ExpenseData, ExpenseStore, SQLiteExpenseStore, get_update_expense_page},
        initialize_db,
        test_utils::{
            assert_form_action, assert_form_input_with_value, assert_form_submit_button,
            assert_valid_html, must_get_form, parse_html_document,
        },
    };

    fn get_test_state() -> ExpenseState<SQLiteExpenseStore> {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();

        ExpenseState {
            expense_store: SQLiteExpenseStore::new(Arc::new(Mutex::new(connection))),
        }
    }

    #[tokio::test]
    async fn form_is_prefilled_with_expense() {
        let state = get_test_state();
        let expense = state
            .expense_store
            .create(ExpenseData {
                description: "Power bill".to_owned(),
                amount: 150.25,
                date: date!(2025 - 07 - 04),
            })
            .unwrap();

        let response = get_update_expense_page(State(state), Path(expense.id))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_action(
            &form,
            &format_endpoint(endpoints::UPDATE_EXPENSE_VIEW, expense.id),
        );
        assert_form_input_with_value(&form, "description", "text", "Power bill");
        assert_form_input_with_value(&form, "amount", "number", "150.25");
        assert_form_input_with_value(&form, "date", "date", "2025-07-04");
        assert_form_submit_button(&form);
    }

    #[tokio::test]
    async fn missing_expense_is_not_found() {
        let state = get_test_state();

        let result = get_update_expense_page(State(state), Path(404)).await;

        assert_eq!(result.as_ref().err(), Some(&Error::NotFound));
        assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);
    }
}
