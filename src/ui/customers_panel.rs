//! Customer list with search and a detail window.

use eframe::egui::{self, Ui};

use super::components::{back_button, colors, detail_grid, panel_header, search_box, status_badge};
use crate::models::{Customer, CustomerStatus, format_amount};
use crate::table::{Column, DataTable, RowFilter, TableOptions};

fn status_color(status: CustomerStatus) -> egui::Color32 {
    match status {
        CustomerStatus::Active => colors::SUCCESS,
        CustomerStatus::Lead => colors::INFO,
        CustomerStatus::Inactive => colors::NEUTRAL,
    }
}

fn columns() -> Vec<Column<Customer>> {
    vec![
        Column::new("id", "ID", |c: &Customer| c.id.to_string())
            .sortable_by(|c: &Customer| c.id)
            .min_width(40.0),
        Column::new("name", "Name", |c: &Customer| c.name.clone())
            .sortable_by(|c: &Customer| c.name.to_lowercase())
            .min_width(160.0),
        Column::new("company", "Company", |c: &Customer| c.company.clone().unwrap_or_default())
            .sortable_by(|c: &Customer| c.company.clone())
            .min_width(160.0),
        Column::new("email", "Email", |c: &Customer| c.email.clone()).min_width(200.0),
        Column::new("status", "Status", |c: &Customer| c.status.label().to_string())
            .sortable_by(|c: &Customer| c.status)
            .cell(|ui, c: &Customer| {
                status_badge(ui, c.status.label(), status_color(c.status));
            }),
        Column::new("created_on", "Since", |c: &Customer| c.created_on.to_string())
            .sortable_by(|c: &Customer| c.created_on),
        Column::new("total_spent", "Total Spent", |c: &Customer| format_amount(c.total_spent))
            .sortable_by(|c: &Customer| c.total_spent)
            .min_width(100.0),
    ]
}

/// Customers page state.
pub struct CustomersPanel {
    pub table: DataTable<Customer>,
    search: String,
    selected: Option<i32>,
}

impl CustomersPanel {
    pub fn new(options: &TableOptions) -> Self {
        let options = options
            .clone()
            .empty_state("No customers", "Customers you add will show up here.");
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
        self.table.set_filter(RowFilter::predicate(move |c: &Customer| {
            c.name.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
                || c.company.as_deref().is_some_and(|co| co.to_lowercase().contains(&needle))
        }));
    }

    /// Show the customers panel.
    ///
    /// Returns `true` if the back button was clicked.
    pub fn show(&mut self, ui: &mut Ui, customers: &[Customer], loading: bool) -> bool {
        let go_back = back_button(ui);
        panel_header(ui, "Customers");

        if search_box(ui, &mut self.search, "Name, email or company...") {
            self.apply_search();
        }
        ui.add_space(10.0);

        let selected = &mut self.selected;
        let mut on_click = |c: &Customer| *selected = Some(c.id);
        self.table.show(ui, "customers_table", customers, loading, Some(&mut on_click));

        self.show_detail(ui.ctx(), customers);

        go_back
    }

    fn show_detail(&mut self, ctx: &egui::Context, customers: &[Customer]) {
        let Some(customer) = self.selected.and_then(|id| customers.iter().find(|c| c.id == id)) else {
            return;
        };

        let mut open = true;
        egui::Window::new(format!("Customer #{}", customer.id))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                detail_grid(
                    ui,
                    "customer_detail_grid",
                    &[
                        ("Name", customer.name.clone()),
                        ("Company", customer.company.clone().unwrap_or_else(|| "-".to_string())),
                        ("Email", customer.email.clone()),
                        ("Phone", customer.phone.clone().unwrap_or_else(|| "-".to_string())),
                        ("Status", customer.status.label().to_string()),
                        ("Customer since", customer.created_on.to_string()),
                        ("Total spent", format_amount(customer.total_spent)),
                    ],
                );
            });

        if !open {
            self.selected = None;
        }
    }
}
