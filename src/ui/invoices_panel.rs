//! Invoice list with status filter, search, and a detail window.

use eframe::egui::{self, Ui};

use super::components::{back_button, colors, detail_grid, panel_header, search_box, status_badge};
use crate::models::{Invoice, InvoiceStatus, format_amount};
use crate::table::{Column, DataTable, RowFilter, TableOptions};

const STATUSES: [InvoiceStatus; 4] = [
    InvoiceStatus::Draft,
    InvoiceStatus::Pending,
    InvoiceStatus::Overdue,
    InvoiceStatus::Paid,
];

fn status_color(status: InvoiceStatus) -> egui::Color32 {
    match status {
        InvoiceStatus::Draft => colors::NEUTRAL,
        InvoiceStatus::Pending => colors::INFO,
        InvoiceStatus::Overdue => colors::ERROR,
        InvoiceStatus::Paid => colors::SUCCESS,
    }
}

fn columns() -> Vec<Column<Invoice>> {
    vec![
        Column::new("number", "Invoice", |i: &Invoice| i.number.clone())
            .sortable_by(|i: &Invoice| i.number.clone())
            .min_width(110.0),
        Column::new("customer", "Customer", |i: &Invoice| i.customer_name.clone())
            .sortable_by(|i: &Invoice| i.customer_name.to_lowercase())
            .min_width(160.0),
        Column::new("issue_date", "Issued", |i: &Invoice| i.issue_date.to_string())
            .sortable_by(|i: &Invoice| i.issue_date),
        Column::new("due_date", "Due", |i: &Invoice| i.due_date.to_string()).sortable_by(|i: &Invoice| i.due_date),
        Column::new("amount", "Amount", |i: &Invoice| format_amount(i.amount))
            .sortable_by(|i: &Invoice| i.amount)
            .min_width(90.0),
        Column::new("status", "Status", |i: &Invoice| i.status.label().to_string())
            .sortable_by(|i: &Invoice| i.status)
            .cell(|ui, i: &Invoice| {
                status_badge(ui, i.status.label(), status_color(i.status));
            }),
    ]
}

/// Invoices page state.
pub struct InvoicesPanel {
    pub table: DataTable<Invoice>,
    search: String,
    status_filter: Option<InvoiceStatus>,
    selected: Option<i32>,
}

impl InvoicesPanel {
    pub fn new(options: &TableOptions) -> Self {
        let options = options
            .clone()
            .empty_state("No invoices", "Issued invoices will be listed here.");
        Self {
            table: DataTable::new(columns(), options),
            search: String::new(),
            status_filter: None,
            selected: None,
        }
    }

    fn apply_filters(&mut self) {
        let needle = self.search.trim().to_lowercase();
        let status = self.status_filter;
        if needle.is_empty() && status.is_none() {
            self.table.clear_filter();
            return;
        }
        self.table.set_filter(RowFilter::predicate(move |i: &Invoice| {
            let text_match = needle.is_empty()
                || i.number.to_lowercase().contains(&needle)
                || i.customer_name.to_lowercase().contains(&needle);
            let status_match = status.is_none_or(|s| s == i.status);
            text_match && status_match
        }));
    }

    /// Show the invoices panel.
    ///
    /// Returns `true` if the back button was clicked.
    pub fn show(&mut self, ui: &mut Ui, invoices: &[Invoice], loading: bool) -> bool {
        let go_back = back_button(ui);
        panel_header(ui, "Invoices");

        let mut changed = false;
        ui.horizontal(|ui| {
            changed |= search_box(ui, &mut self.search, "Invoice number or customer...");

            ui.add_space(20.0);
            ui.label("Status:");
            if ui.selectable_label(self.status_filter.is_none(), "All").clicked() {
                self.status_filter = None;
                changed = true;
            }
            for status in STATUSES {
                if ui
                    .selectable_label(self.status_filter == Some(status), status.label())
                    .clicked()
                {
                    self.status_filter = Some(status);
                    changed = true;
                }
            }
        });
        if changed {
            self.apply_filters();
        }
        ui.add_space(10.0);

        let selected = &mut self.selected;
        let mut on_click = |i: &Invoice| *selected = Some(i.id);
        self.table.show(ui, "invoices_table", invoices, loading, Some(&mut on_click));

        self.show_detail(ui.ctx(), invoices);

        go_back
    }

    fn show_detail(&mut self, ctx: &egui::Context, invoices: &[Invoice]) {
        let Some(invoice) = self.selected.and_then(|id| invoices.iter().find(|i| i.id == id)) else {
            return;
        };

        let mut open = true;
        egui::Window::new(format!("Invoice {}", invoice.number))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                detail_grid(
                    ui,
                    "invoice_detail_grid",
                    &[
                        ("Customer", invoice.customer_name.clone()),
                        ("Issued", invoice.issue_date.to_string()),
                        ("Due", invoice.due_date.to_string()),
                        ("Amount", format_amount(invoice.amount)),
                        ("Status", invoice.status.label().to_string()),
                    ],
                );
            });

        if !open {
            self.selected = None;
        }
    }
}
