//! Generic tabular data presenter.
//!
//! [`DataTable`] owns the column specification plus the sort and pagination
//! state for one table instance. Rows stay with the caller and are passed in
//! on every call; the derived [`TableView`] only stores indices into them.

pub mod column;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod view;

#[cfg(test)]
mod tests;

pub use column::{Column, HeaderContext};
pub use filter::RowFilter;
pub use pagination::{PaginationState, RowRange};
pub use sort::{SortDirection, SortSpec, SortState};
pub use view::{Presentation, TableView};

use crate::config::TableConfig;

/// Per-instance presenter settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub sorting: bool,
    pub pagination: bool,
    pub page_size: usize,
    pub empty_title: String,
    pub empty_description: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            sorting: true,
            pagination: true,
            page_size: 10,
            empty_title: "No records".to_string(),
            empty_description: "There is nothing to show yet.".to_string(),
        }
    }
}

impl TableOptions {
    pub fn sorting(mut self, enabled: bool) -> Self {
        self.sorting = enabled;
        self
    }

    pub fn pagination(mut self, enabled: bool) -> Self {
        self.pagination = enabled;
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    pub fn empty_state(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.empty_title = title.into();
        self.empty_description = description.into();
        self
    }
}

impl From<&TableConfig> for TableOptions {
    fn from(config: &TableConfig) -> Self {
        Self::default()
            .sorting(config.sorting)
            .pagination(config.pagination)
            .page_size(config.page_size)
    }
}

/// Column spec plus interaction state for one table.
pub struct DataTable<T> {
    columns: Vec<Column<T>>,
    options: TableOptions,
    sort: SortState,
    pagination: PaginationState,
    filter: RowFilter<T>,
}

impl<T> DataTable<T> {
    pub fn new(columns: Vec<Column<T>>, options: TableOptions) -> Self {
        let pagination = PaginationState::new(options.page_size);
        Self {
            columns,
            options,
            sort: SortState::new(),
            pagination,
            filter: RowFilter::default(),
        }
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn filter(&self) -> &RowFilter<T> {
        &self.filter
    }

    fn paging_enabled(&self) -> bool {
        self.options.pagination && self.pagination.page_size > 0
    }

    /// Header click on `column_id`. Ignored when sorting is off or the column
    /// cannot be sorted.
    pub fn toggle_sort(&mut self, column_id: &str) {
        if !self.options.sorting {
            return;
        }
        let sortable = self
            .columns
            .iter()
            .any(|c| c.id() == column_id && c.is_sortable());
        if !sortable {
            return;
        }
        self.sort.toggle(column_id);
        tracing::debug!(column = column_id, sort = ?self.sort.direction_of(column_id), "Sort changed");
    }

    /// Install a multi-column sort directly.
    pub fn set_sort(&mut self, specs: Vec<SortSpec>) {
        self.sort.set(specs);
    }

    /// `total` is the filtered row count, as reported by [`TableView::total_rows`].
    pub fn next_page(&mut self, total: usize) {
        if self.paging_enabled() {
            self.pagination.next_page(total);
        }
    }

    pub fn previous_page(&mut self, total: usize) {
        if self.paging_enabled() {
            self.pagination.previous_page(total);
        }
    }

    pub fn first_page(&mut self) {
        if self.paging_enabled() {
            self.pagination.first_page();
        }
    }

    pub fn last_page(&mut self, total: usize) {
        if self.paging_enabled() {
            self.pagination.last_page(total);
        }
    }

    /// Change rows per page. The page index is clamped to the new last page.
    pub fn set_page_size(&mut self, page_size: usize, total: usize) {
        self.options.page_size = page_size;
        self.pagination.set_page_size(page_size, total);
        tracing::debug!(page_size, page = self.pagination.page_index, "Page size changed");
    }

    /// Install a row predicate. Resets to the first page.
    pub fn set_filter(&mut self, filter: RowFilter<T>) {
        self.filter = filter;
        self.pagination.first_page();
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(RowFilter::PassThrough);
    }

    /// Compute the current view of `rows` without touching any state.
    pub fn derive(&self, rows: &[T]) -> TableView {
        let sort = self.options.sorting.then_some(self.sort.specs());
        let pagination = self.options.pagination.then_some(&self.pagination);
        view::derive(rows, &self.columns, &self.filter, sort, pagination)
    }

    /// Clamp the stored page index against the current data.
    pub fn sync(&mut self, rows: &[T]) {
        let total = rows.iter().filter(|row| self.filter.matches(row)).count();
        self.pagination.clamp(total);
    }

    /// Decide what to draw. Loading wins over everything; an empty source
    /// slice shows the empty state.
    pub fn present(&self, rows: &[T], loading: bool) -> Presentation {
        if loading {
            Presentation::Loading
        } else if rows.is_empty() {
            Presentation::Empty
        } else {
            Presentation::Rows(self.derive(rows))
        }
    }
}
