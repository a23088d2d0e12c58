//! Recording, editing and totalling expenses.

mod api;
mod core;
mod create;
mod delete;
mod form;
mod list_page;
mod sqlite;
mod update;

pub use api::{
    ExpenseRead, create_expense_api, delete_expense_api, get_expenses_api,
    get_monthly_total_api, update_expense_api,
};
pub use core::{Expense, ExpenseData, ExpenseId, ExpenseStore};
pub use create::{create_expense_endpoint, get_new_expense_page};
pub use delete::delete_expense_endpoint;
pub use list_page::get_expenses_page;
pub use sqlite::{SQLiteExpenseStore, create_expense_table};
pub use update::{get_update_expense_page, update_expense_endpoint};
