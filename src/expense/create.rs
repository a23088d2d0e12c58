//! The page and endpoint for creating an expense from an HTML form.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    Error,
    app_state::{ExpenseState, TimezoneState},
    endpoints,
    expense::{
        ExpenseData, ExpenseStore,
        form::{ExpenseFormValues, expense_form_view},
    },
    html::{FORM_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
    timezone::get_local_date,
};

/// Renders the page for creating an expense.
///
/// The date field defaults to today in the server's timezone.
pub async fn get_new_expense_page(State(state): State<TimezoneState>) -> Result<Response, Error> {
    let today = get_local_date(&state.local_timezone)?;

    Ok(new_expense_view(today).into_response())
}

/// A route handler for creating a new expense, redirects to the expenses list on success.
pub async fn create_expense_endpoint<S>(
    State(state): State<ExpenseState<S>>,
    Form(form): Form<ExpenseData>,
) -> Result<Redirect, Error>
where
    S: ExpenseStore,
{
    let expense = state
        .expense_store
        .create(form)
        .inspect_err(|error| tracing::error!("could not create expense: {error}"))?;

    tracing::debug!("created expense {}", expense.id);

    Ok(Redirect::to(endpoints::ROOT))
}

fn new_expense_view(today: Date) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_EXPENSE_VIEW).into_html();
    let form = expense_form_view(
        endpoints::NEW_EXPENSE_VIEW,
        "Add Expense",
        ExpenseFormValues {
            description: "",
            amount: None,
            date: today,
        },
    );

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Add New Expense" }

            (form)
        }
    };

    base("Add New Expense", &[dollar_input_styles()], &content)
}

#[cfg(test)]
mod new_expense_page_tests {
    use axum::{extract::State, http::StatusCode};
    use time::OffsetDateTime;

    use crate::{
        Error,
        app_state::TimezoneState,
        endpoints,
        expense::{form::format_iso_date, get_new_expense_page},
        test_utils::{
            assert_content_type, assert_form_action, assert_form_input,
            assert_form_input_with_value, assert_form_submit_button, assert_valid_html,
            must_get_form, parse_html_document,
        },
    };

    #[tokio::test]
    async fn render_page() {
        let state = TimezoneState {
            local_timezone: "Etc/UTC".to_owned(),
        };

        let response = get_new_expense_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert!(html.html().contains("Add New Expense"));

        let form = must_get_form(&html);
        assert_form_action(&form, endpoints::NEW_EXPENSE_VIEW);
        assert_form_input(&form, "description", "text");
        assert_form_input(&form, "amount", "number");
        assert_form_input_with_value(
            &form,
            "date",
            "date",
            &format_iso_date(OffsetDateTime::now_utc().date()),
        );
        assert_form_submit_button(&form);
    }

    #[tokio::test]
    async fn invalid_timezone_is_an_error() {
        let state = TimezoneState {
            local_timezone: "Not/A_Timezone".to_owned(),
        };

        let result = get_new_expense_page(State(state)).await;

        assert_eq!(
            result.err(),
            Some(Error::InvalidTimezoneError("Not/A_Timezone".to_owned()))
        );
    }
}

#[cfg(test)]
mod create_expense_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Form, extract::State, http::StatusCode, response::IntoResponse};
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        app_state::ExpenseState,
        endpoints,
        expense::{Expense, ExpenseData, ExpenseStore, SQLiteExpenseStore, create_expense_endpoint},
        initialize_db,
        test_utils::{FailingExpenseStore, get_header},
    };

    fn get_test_state() -> ExpenseState<SQLiteExpenseStore> {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();

        ExpenseState {
            expense_store: SQLiteExpenseStore::new(Arc::new(Mutex::new(connection))),
        }
    }

    #[tokio::test]
    async fn can_create_expense() {
        let state = get_test_state();
        let form = ExpenseData {
            description: "Groceries".to_owned(),
            amount: 87.65,
            date: date!(2025 - 06 - 01),
        };

        let response = create_expense_endpoint(State(state.clone()), Form(form.clone()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(get_header(&response, "location"), endpoints::ROOT);
        assert_eq!(
            state.expense_store.get_all(),
            Ok(vec![Expense {
                id: 1,
                description: form.description,
                amount: form.amount,
                date: form.date,
            }])
        );
    }

    #[tokio::test]
    async fn storage_failure_is_a_server_error() {
        let state = ExpenseState {
            expense_store: FailingExpenseStore,
        };
        let form = ExpenseData {
            description: "Groceries".to_owned(),
            amount: 87.65,
            date: date!(2025 - 06 - 01),
        };

        let result = create_expense_endpoint(State(state), Form(form)).await;

        assert!(matches!(result, Err(Error::SqlError(_))));
        assert_eq!(
            result.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
