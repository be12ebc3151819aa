//! Employee list with search, department and status filters.

use std::collections::BTreeSet;

use eframe::egui::{self, Ui};

use super::components::{back_button, colors, detail_grid, panel_header, search_box};
use crate::models::Employee;
use crate::table::{Column, DataTable, RowFilter, TableOptions};

fn columns() -> Vec<Column<Employee>> {
    vec![
        Column::new("code", "Code", |e: &Employee| e.employee_code.clone())
            .sortable_by(|e: &Employee| e.employee_code.clone())
            .min_width(70.0),
        Column::new("name", "Name", |e: &Employee| e.full_name.clone())
            .sortable_by(|e: &Employee| e.full_name.to_lowercase())
            .min_width(160.0),
        Column::new("department", "Department", |e: &Employee| {
            e.department.clone().unwrap_or_else(|| "-".to_string())
        })
        .sortable_by(|e: &Employee| e.department.clone())
        .min_width(110.0),
        Column::new("role", "Role", |e: &Employee| e.role.clone())
            .sortable_by(|e: &Employee| e.role.clone())
            .min_width(140.0),
        Column::new("start_date", "Start Date", |e: &Employee| e.start_date.to_string())
            .sortable_by(|e: &Employee| e.start_date),
        Column::new("active", "Active", |e: &Employee| if e.is_active { "Yes" } else { "No" }.to_string())
            .sortable_by(|e: &Employee| !e.is_active)
            .cell(|ui, e: &Employee| {
                if e.is_active {
                    ui.colored_label(colors::SUCCESS, "Yes");
                } else {
                    ui.colored_label(colors::NEUTRAL, "No");
                }
            }),
    ]
}

/// Staff page state.
pub struct StaffPanel {
    pub table: DataTable<Employee>,
    search: String,
    dept_filter: Option<String>,
    status_filter: Option<bool>,
    selected: Option<i32>,
}

impl StaffPanel {
    pub fn new(options: &TableOptions) -> Self {
        let options = options
            .clone()
            .empty_state("No employees", "Staff records will be listed here.");
        Self {
            table: DataTable::new(columns(), options),
            search: String::new(),
            dept_filter: None,
            status_filter: None,
            selected: None,
        }
    }

    fn has_filters(&self) -> bool {
        !self.search.trim().is_empty() || self.dept_filter.is_some() || self.status_filter.is_some()
    }

    fn apply_filters(&mut self) {
        if !self.has_filters() {
            self.table.clear_filter();
            return;
        }

        let needle = self.search.trim().to_lowercase();
        let dept = self.dept_filter.clone();
        let status = self.status_filter;
        self.table.set_filter(RowFilter::predicate(move |e: &Employee| {
            let search_match = needle.is_empty()
                || e.employee_code.to_lowercase().contains(&needle)
                || e.full_name.to_lowercase().contains(&needle);
            let dept_match = dept.is_none() || e.department == dept;
            let status_match = status.is_none() || status == Some(e.is_active);
            search_match && dept_match && status_match
        }));
    }

    /// Show the staff panel.
    ///
    /// Returns `true` if the back button was clicked.
    pub fn show(&mut self, ui: &mut Ui, employees: &[Employee], loading: bool) -> bool {
        let go_back = back_button(ui);
        panel_header(ui, "Manage Staff");

        let departments: BTreeSet<&str> = employees.iter().filter_map(|e| e.department.as_deref()).collect();

        let mut changed = false;
        ui.horizontal(|ui| {
            changed |= search_box(ui, &mut self.search, "Code or name...");

            ui.add_space(20.0);

            ui.label("Department:");
            egui::ComboBox::from_id_salt("emp_dept_filter")
                .width(160.0)
                .selected_text(self.dept_filter.as_deref().unwrap_or("All"))
                .show_ui(ui, |ui| {
                    if ui.selectable_label(self.dept_filter.is_none(), "All").clicked() {
                        self.dept_filter = None;
                        changed = true;
                    }
                    for dept in &departments {
                        if ui
                            .selectable_label(self.dept_filter.as_deref() == Some(*dept), *dept)
                            .clicked()
                        {
                            self.dept_filter = Some(dept.to_string());
                            changed = true;
                        }
                    }
                });

            ui.add_space(20.0);

            ui.label("Status:");
            for (value, label) in [(None, "All"), (Some(true), "Active"), (Some(false), "Inactive")] {
                if ui.selectable_label(self.status_filter == value, label).clicked() {
                    self.status_filter = value;
                    changed = true;
                }
            }

            if self.dept_filter.is_some() || self.status_filter.is_some() {
                ui.add_space(10.0);
                if ui.button("Reset filters").clicked() {
                    self.dept_filter = None;
                    self.status_filter = None;
                    changed = true;
                }
            }
        });
        if changed {
            self.apply_filters();
        }

        ui.add_space(10.0);

        let selected = &mut self.selected;
        let mut on_click = |e: &Employee| *selected = Some(e.id);
        let response = self.table.show(ui, "staff_table", employees, loading, Some(&mut on_click));
        if let Some(total) = response.total_rows
            && self.has_filters()
        {
            ui.add_space(6.0);
            ui.label(format!("Showing {} of {} employees", total, employees.len()));
        }

        self.show_detail(ui.ctx(), employees);

        go_back
    }

    fn show_detail(&mut self, ctx: &egui::Context, employees: &[Employee]) {
        let Some(emp) = self.selected.and_then(|id| employees.iter().find(|e| e.id == id)) else {
            return;
        };

        let mut open = true;
        egui::Window::new(emp.full_name.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                detail_grid(
                    ui,
                    "employee_detail_grid",
                    &[
                        ("Code", emp.employee_code.clone()),
                        ("Department", emp.department.clone().unwrap_or_else(|| "-".to_string())),
                        ("Role", emp.role.clone()),
                        ("Email", emp.email.clone()),
                        ("Start date", emp.start_date.to_string()),
                        ("Active", if emp.is_active { "Yes" } else { "No" }.to_string()),
                    ],
                );
            });

        if !open {
            self.selected = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_search_is_not_a_filter() {
        let mut panel = StaffPanel::new(&TableOptions::default());
        panel.search = "   ".to_string();
        panel.apply_filters();
        assert!(!panel.has_filters());
        assert!(panel.table.filter().is_pass_through());

        panel.search = " emp0 ".to_string();
        panel.apply_filters();
        assert!(panel.has_filters());
        assert!(!panel.table.filter().is_pass_through());
    }
}
