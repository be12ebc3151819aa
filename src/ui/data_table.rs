//! egui rendering for [`DataTable`].

use std::hash::Hash;

use eframe::egui::{self, Align, Layout, Sense, Ui};
use egui_extras::{Column as ColumnSize, TableBuilder};
use egui_phosphor::regular::{CARET_DOUBLE_LEFT, CARET_DOUBLE_RIGHT, CARET_LEFT, CARET_RIGHT};

use super::components::{SpinnerSize, empty_state, loading_indicator};
use crate::table::{DataTable, Presentation, TableView};

const HEADER_HEIGHT: f32 = 26.0;
const ROW_HEIGHT: f32 = 24.0;
const CONTROLS_HEIGHT: f32 = 44.0;

/// Outcome of one frame of table rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableResponse {
    /// Source index of the row clicked this frame.
    pub clicked_row: Option<usize>,
    /// Filtered row count, `None` while loading or empty.
    pub total_rows: Option<usize>,
}

/// Pagination button pressed this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageAction {
    First,
    Previous,
    Next,
    Last,
}

impl<T> DataTable<T> {
    /// Render the table.
    ///
    /// With a row-click handler every row is clickable, and the handler gets
    /// the row straight from `rows`.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        id_salt: impl Hash,
        rows: &[T],
        loading: bool,
        on_row_click: Option<&mut dyn FnMut(&T)>,
    ) -> TableResponse {
        if !loading {
            self.sync(rows);
        }

        let view = match self.present(rows, loading) {
            Presentation::Loading => {
                loading_indicator(ui, SpinnerSize::Medium);
                return TableResponse::default();
            }
            Presentation::Empty => {
                empty_state(ui, &self.options().empty_title, &self.options().empty_description);
                return TableResponse::default();
            }
            Presentation::Rows(view) => view,
        };

        let clickable = on_row_click.is_some();
        let mut header_clicked: Option<String> = None;
        let mut clicked_row: Option<usize> = None;
        let mut page_action: Option<PageAction> = None;

        ui.push_id(id_salt, |ui| {
            let reserved = if view.show_controls() { CONTROLS_HEIGHT } else { 0.0 };
            let max_height = (ui.available_height() - reserved).max(ROW_HEIGHT * 4.0);

            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .vscroll(true)
                .max_scroll_height(max_height)
                .cell_layout(Layout::left_to_right(Align::Center));
            if clickable {
                builder = builder.sense(Sense::click());
            }

            let last = self.columns().len().saturating_sub(1);
            for (i, column) in self.columns().iter().enumerate() {
                let size = if i == last {
                    ColumnSize::remainder().at_least(column.width())
                } else {
                    ColumnSize::auto().at_least(column.width())
                };
                builder = builder.column(size);
            }

            let sorting = self.options().sorting;
            builder
                .header(HEADER_HEIGHT, |mut header| {
                    for column in self.columns() {
                        header.col(|ui| {
                            let direction = self.sort_state().direction_of(column.id());
                            let response = column.render_header(ui, direction);
                            if sorting && column.is_sortable() && response.clicked() {
                                header_clicked = Some(column.id().to_string());
                            }
                        });
                    }
                })
                .body(|mut body| {
                    for &idx in view.page_indices() {
                        let row = &rows[idx];
                        body.row(ROW_HEIGHT, |mut table_row| {
                            for column in self.columns() {
                                table_row.col(|ui| column.render_cell(ui, row));
                            }
                            if clickable && table_row.response().clicked() {
                                clicked_row = Some(idx);
                            }
                        });
                    }
                });

            if view.show_controls() {
                ui.add_space(8.0);
                page_action = pagination_controls(ui, &view);
            }
        });

        if let Some(column_id) = header_clicked {
            self.toggle_sort(&column_id);
        }

        let total = view.total_rows();
        match page_action {
            Some(PageAction::First) => self.first_page(),
            Some(PageAction::Previous) => self.previous_page(total),
            Some(PageAction::Next) => self.next_page(total),
            Some(PageAction::Last) => self.last_page(total),
            None => {}
        }

        if let (Some(idx), Some(handler)) = (clicked_row, on_row_click) {
            handler(&rows[idx]);
        }

        TableResponse {
            clicked_row,
            total_rows: Some(total),
        }
    }
}

/// Range label plus first/previous/next/last buttons.
fn pagination_controls(ui: &mut Ui, view: &TableView) -> Option<PageAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(view.range().to_string());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            // right-to-left, so buttons are added last to first
            if ui
                .add_enabled(view.can_next(), egui::Button::new(CARET_DOUBLE_RIGHT))
                .on_hover_text("Last page")
                .clicked()
            {
                action = Some(PageAction::Last);
            }
            if ui
                .add_enabled(view.can_next(), egui::Button::new(CARET_RIGHT))
                .on_hover_text("Next page")
                .clicked()
            {
                action = Some(PageAction::Next);
            }

            ui.label(format!(
                "Page {page} of {total}",
                page = view.page_index() + 1,
                total = view.page_count()
            ));

            if ui
                .add_enabled(view.can_previous(), egui::Button::new(CARET_LEFT))
                .on_hover_text("Previous page")
                .clicked()
            {
                action = Some(PageAction::Previous);
            }
            if ui
                .add_enabled(view.can_previous(), egui::Button::new(CARET_DOUBLE_LEFT))
                .on_hover_text("First page")
                .clicked()
            {
                action = Some(PageAction::First);
            }
        });
    });

    action
}
