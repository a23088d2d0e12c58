//! Application router configuration for the HTML pages and the JSON API.

use axum::{
    Router,
    response::Redirect,
    routing::{any, get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    expense::{
        ExpenseStore, create_expense_api, create_expense_endpoint, delete_expense_api,
        delete_expense_endpoint, get_expenses_api, get_expenses_page, get_monthly_total_api,
        get_new_expense_page, get_update_expense_page, update_expense_api,
        update_expense_endpoint,
    },
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: ExpenseStore,
{
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_expenses_page::<S>))
        .route(
            endpoints::NEW_EXPENSE_VIEW,
            get(get_new_expense_page).post(create_expense_endpoint::<S>),
        )
        .route(
            endpoints::UPDATE_EXPENSE_VIEW,
            get(get_update_expense_page::<S>).post(update_expense_endpoint::<S>),
        )
        .route(
            endpoints::DELETE_EXPENSE,
            post(delete_expense_endpoint::<S>),
        );

    let api_routes = Router::new()
        .route(
            endpoints::EXPENSES_API,
            get(get_expenses_api::<S>).post(create_expense_api::<S>),
        )
        .route(endpoints::EXPENSES_API_NO_SLASH, any(redirect_to_expenses_api))
        .route(
            endpoints::EXPENSES_TOTAL_API,
            get(get_monthly_total_api::<S>),
        )
        .route(
            endpoints::EXPENSE_API,
            put(update_expense_api::<S>).delete(delete_expense_api::<S>),
        );

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Redirect to the canonical, trailing slash form of the expenses API.
///
/// The redirect is temporary so that clients repeat the original method and body.
async fn redirect_to_expenses_api() -> Redirect {
    Redirect::temporary(endpoints::EXPENSES_API)
}
