use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_amount, format_currency, loading_spinner,
    },
    ledger::Expense,
};

/// Values used to fill the expense form.
///
/// After a failed submission the form is re-rendered with the rejected
/// input still in place; after a successful one it is reset.
#[derive(Debug, Default)]
pub struct ExpenseFormValues<'a> {
    pub name: &'a str,
    pub amount: &'a str,
    pub error: Option<&'a str>,
}

/// The full ledger section: form, itemized list and running total.
///
/// Both derived views are always rendered from the complete `records`
/// slice, never patched incrementally.
pub fn ledger_section(records: &[Expense], total: f64, form_values: &ExpenseFormValues) -> Markup {
    html! {
        section id="ledger" class="w-full max-w-md space-y-6"
        {
            (expense_form(form_values))
            (expense_table(records))
            (total_view(total))
            (clear_button())
        }
    }
}

fn expense_form(values: &ExpenseFormValues) -> Markup {
    html! {
        form
            id="expense-form"
            hx-post=(endpoints::EXPENSES_API)
            hx-target="#ledger"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-indicator="#indicator"
            class="space-y-4"
        {
            (expense_form_fields(values.name, values.amount))

            @if let Some(error_message) = values.error {
                p class="text-red-600 dark:text-red-400"
                {
                    (error_message)
                }
            }

            button
                type="submit" id="submit-button" tabindex="0"
                class=(BUTTON_PRIMARY_STYLE)
            {
                span class="inline htmx-indicator" id="indicator"
                {
                    (loading_spinner())
                }
                "Add Expense"
            }
        }
    }
}

/// The form rendered in server-backed mode: a plain POST to the external
/// backend, using that backend's field names. The built-in ledger plays
/// no part in it.
pub fn backend_expense_form() -> Markup {
    html! {
        form
            id="expense-form"
            method="POST"
            action=(endpoints::BACKEND_ADD_EXPENSE)
            class="w-full max-w-md space-y-4"
        {
            div
            {
                label for="expense-name" class=(FORM_LABEL_STYLE) { "Name" }

                input
                    id="expense-name"
                    name="expense-name"
                    type="text"
                    placeholder="e.g. Coffee"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="expense-amount" class=(FORM_LABEL_STYLE) { "Amount" }

                div class="input-wrapper w-full"
                {
                    input
                        id="expense-amount"
                        name="expense-amount"
                        type="number"
                        step="0.01"
                        min="0.01"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
        }
    }
}

fn expense_form_fields(name: &str, amount: &str) -> Markup {
    html! {
        div
        {
            label for="expense-name" class=(FORM_LABEL_STYLE) { "Name" }

            input
                id="expense-name"
                name="name"
                type="text"
                placeholder="e.g. Coffee"
                required
                autofocus
                value=(name)
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="expense-amount" class=(FORM_LABEL_STYLE) { "Amount" }

            div class="input-wrapper w-full"
            {
                input
                    id="expense-amount"
                    name="amount"
                    type="number"
                    step="0.01"
                    min="0.01"
                    placeholder="0.00"
                    required
                    value=(amount)
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }
    }
}

fn expense_table(records: &[Expense]) -> Markup {
    html! {
        div class="relative overflow-x-auto shadow-md rounded"
        {
            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Delete" } }
                    }
                }

                tbody id="expense-list"
                {
                    @if records.is_empty()
                    {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) data-empty-state="true" colspan="3"
                            {
                                "No expenses yet."
                            }
                        }
                    }

                    @for (index, expense) in records.iter().enumerate()
                    {
                        tr class=(TABLE_ROW_STYLE) data-expense-row="true"
                        {
                            td class=(TABLE_CELL_STYLE) { (expense.name) }
                            td class=(TABLE_CELL_STYLE) { (format_currency(expense.amount)) }
                            td class=(TABLE_CELL_STYLE)
                            {
                                button
                                    hx-delete=(endpoints::format_endpoint(endpoints::DELETE_EXPENSE, index))
                                    hx-target="#ledger"
                                    hx-swap="outerHTML"
                                    hx-target-error="#alert-container"
                                    class=(BUTTON_DELETE_STYLE)
                                {
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn total_view(total: f64) -> Markup {
    html! {
        p class="text-lg font-semibold text-gray-900 dark:text-white"
        {
            "Total: $"
            span id="total-amount" { (format_amount(total)) }
        }
    }
}

fn clear_button() -> Markup {
    html! {
        button
            id="clear-expenses"
            hx-delete=(endpoints::EXPENSES_API)
            hx-confirm="Are you sure you want to clear all expenses?"
            hx-target-error="#alert-container"
            class=(BUTTON_SECONDARY_STYLE)
        {
            "Clear All"
        }
    }
}
