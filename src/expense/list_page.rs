//! Displays all expenses and their total.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    app_state::ExpenseState,
    endpoints::{self, format_endpoint},
    expense::{Expense, ExpenseStore, form::format_iso_date},
    html::{
        BUTTON_DELETE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency,
    },
    navigation::NavBar,
};

const DELETE_CONFIRMATION: &str =
    "return confirm('Are you sure you want to delete this expense? This cannot be undone.');";

/// The expense data to display in the view.
#[derive(Debug, PartialEq)]
struct ExpenseTableRow {
    description: String,
    amount: f64,
    date: time::Date,
    update_url: String,
    delete_url: String,
}

impl From<Expense> for ExpenseTableRow {
    fn from(expense: Expense) -> Self {
        Self {
            update_url: format_endpoint(endpoints::UPDATE_EXPENSE_VIEW, expense.id),
            delete_url: format_endpoint(endpoints::DELETE_EXPENSE, expense.id),
            description: expense.description,
            amount: expense.amount,
            date: expense.date,
        }
    }
}

/// Renders the expenses page with every expense and the all-time total.
pub async fn get_expenses_page<S>(State(state): State<ExpenseState<S>>) -> Result<Response, Error>
where
    S: ExpenseStore,
{
    let expenses = state
        .expense_store
        .get_all()
        .inspect_err(|error| tracing::error!("could not get all expenses: {error}"))?;
    let total = state
        .expense_store
        .sum_all()
        .inspect_err(|error| tracing::error!("could not get expense total: {error}"))?;

    let rows: Vec<ExpenseTableRow> = expenses.into_iter().map(ExpenseTableRow::from).collect();

    Ok(expenses_view(&rows, total).into_response())
}

fn expenses_view(expenses: &[ExpenseTableRow], total: f64) -> Markup {
    let create_expense_page_url = endpoints::NEW_EXPENSE_VIEW;
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let table_row = |expense: &ExpenseTableRow| {
        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    time datetime=(format_iso_date(expense.date)) { (format_iso_date(expense.date)) }
                }

                th
                    scope="row"
                    class="px-6 py-4 font-medium text-gray-900 dark:text-white"
                {
                    (expense.description)
                }

                td class="px-6 py-4 text-right"
                {
                    (format_currency(expense.amount))
                }

                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
                        a href=(expense.update_url) class=(LINK_STYLE) { "Edit" }

                        form
                            method="post"
                            action=(expense.delete_url)
                            onsubmit=(DELETE_CONFIRMATION)
                        {
                            button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                        }
                    }
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Expense Tracker" }

                    a href=(create_expense_page_url) class=(LINK_STYLE)
                    {
                        "Add New Expense"
                    }
                }

                p class="text-lg" data-total="true"
                {
                    "Total: "
                    span class="font-semibold" { (format_currency(total)) }
                }

                div class="w-full overflow-x-auto dark:bg-gray-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class="px-6 py-3 text-right" { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for expense in expenses {
                                (table_row(expense))
                            }

                            @if expenses.is_empty() {
                                tr
                                {
                                    td
                                        colspan="4"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No expenses yet. Add an expense "
                                        a href=(create_expense_page_url) class=(LINK_STYLE)
                                        {
                                            "here"
                                        }
                                        "."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Expenses", &[], &content)
}
