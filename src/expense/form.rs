//! The form shared by the create and update expense pages.

use maud::{Markup, html};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE};

const DATE_INPUT_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

/// Format `date` the way `<input type="date">` and `<time datetime>` expect, e.g. "2025-03-09".
pub(super) fn format_iso_date(date: Date) -> String {
    date.format(DATE_INPUT_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// The values to pre-fill the expense form with.
pub(super) struct ExpenseFormValues<'a> {
    pub description: &'a str,
    pub amount: Option<f64>,
    pub date: Date,
}

/// A form that POSTs the fields of [ExpenseData](crate::ExpenseData) to `action`.
pub(super) fn expense_form_view(
    action: &str,
    submit_label: &str,
    values: ExpenseFormValues,
) -> Markup {
    html! {
        form
            method="post"
            action=(action)
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="Description"
                    value=(values.description)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                div class="input-wrapper"
                {
                    input
                        id="amount"
                        type="number"
                        name="amount"
                        step="0.01"
                        placeholder="0.00"
                        value=[values.amount]
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    id="date"
                    type="date"
                    name="date"
                    value=(format_iso_date(values.date))
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_label) }
        }
    }
}
