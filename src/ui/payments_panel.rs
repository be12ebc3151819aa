//! Received payments.

use eframe::egui::{self, Ui};

use super::components::{back_button, detail_grid, panel_header, search_box};
use crate::models::{Payment, format_amount};
use crate::table::{Column, DataTable, RowFilter, TableOptions};

fn columns() -> Vec<Column<Payment>> {
    vec![
        Column::new("paid_on", "Date", |p: &Payment| p.paid_on.to_string()).sortable_by(|p: &Payment| p.paid_on),
        Column::new("invoice", "Invoice", |p: &Payment| p.invoice_number.clone())
            .sortable_by(|p: &Payment| p.invoice_number.clone())
            .min_width(110.0),
        Column::new("customer", "Customer", |p: &Payment| p.customer_name.clone())
            .sortable_by(|p: &Payment| p.customer_name.to_lowercase())
            .min_width(160.0),
        Column::new("method", "Method", |p: &Payment| p.method.label().to_string()).sortable_by(|p: &Payment| p.method),
        Column::new("reference", "Reference", |p: &Payment| p.reference.clone().unwrap_or_default()),
        Column::new("amount", "Amount", |p: &Payment| format_amount(p.amount))
            .sortable_by(|p: &Payment| p.amount)
            .min_width(90.0),
    ]
}

/// Payments page state.
pub struct PaymentsPanel {
    pub table: DataTable<Payment>,
    search: String,
    selected: Option<i32>,
}

impl PaymentsPanel {
    pub fn new(options: &TableOptions) -> Self {
        let options = options
            .clone()
            .empty_state("No payments", "Payments appear here once invoices are settled.");
        Self {
            table: DataTable::new(columns(), options),
            search: String::new(),
            selected: None,
        }
    }

    fn apply_search(&mut self) {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            self.table.clear_filter();
            return;
        }
        self.table.set_filter(RowFilter::predicate(move |p: &Payment| {
            p.invoice_number.to_lowercase().contains(&needle)
                || p.customer_name.to_lowercase().contains(&needle)
                || p.reference.as_deref().is_some_and(|r| r.to_lowercase().contains(&needle))
        }));
    }

    /// Show the payments panel.
    ///
    /// Returns `true` if the back button was clicked.
    pub fn show(&mut self, ui: &mut Ui, payments: &[Payment], loading: bool) -> bool {
        let go_back = back_button(ui);
        panel_header(ui, "Payments");

        if search_box(ui, &mut self.search, "Invoice, customer or reference...") {
            self.apply_search();
        }
        ui.add_space(10.0);

        let selected = &mut self.selected;
        let mut on_click = |p: &Payment| *selected = Some(p.id);
        self.table.show(ui, "payments_table", payments, loading, Some(&mut on_click));

        self.show_detail(ui.ctx(), payments);

        go_back
    }

    fn show_detail(&mut self, ctx: &egui::Context, payments: &[Payment]) {
        let Some(payment) = self.selected.and_then(|id| payments.iter().find(|p| p.id == id)) else {
            return;
        };

        let mut open = true;
        egui::Window::new(format!("Payment for {}", payment.invoice_number))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                detail_grid(
                    ui,
                    "payment_detail_grid",
                    &[
                        ("Customer", payment.customer_name.clone()),
                        ("Date", payment.paid_on.to_string()),
                        ("Method", payment.method.label().to_string()),
                        ("Reference", payment.reference.clone().unwrap_or_else(|| "-".to_string())),
                        ("Amount", format_amount(payment.amount)),
                    ],
                );
            });

        if !open {
            self.selected = None;
        }
    }
}
