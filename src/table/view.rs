//! Derived table view: filter, sort and paginate over source indices.

use std::cmp::Ordering;

use super::column::Column;
use super::filter::RowFilter;
use super::pagination::{PaginationState, RowRange};
use super::sort::SortSpec;

/// What the presenter should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    Loading,
    Empty,
    Rows(TableView),
}

/// Result of one derivation. Holds indices into the caller's row slice so that
/// rows handed back out are always the originals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    ordered: Vec<usize>,
    start: usize,
    end: usize,
    page_index: usize,
    page_count: usize,
    page_size: usize,
    paginated: bool,
}

impl TableView {
    /// Source indices of the rows on the current page, in display order.
    pub fn page_indices(&self) -> &[usize] {
        &self.ordered[self.start..self.end]
    }

    /// Source indices of every row that passed the filter, sorted, ignoring pages.
    pub fn ordered_indices(&self) -> &[usize] {
        &self.ordered
    }

    /// Rows on the current page, borrowed from `source`.
    pub fn rows<'a, T>(&'a self, source: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        self.page_indices().iter().map(move |&idx| &source[idx])
    }

    /// Row count after filtering.
    pub fn total_rows(&self) -> usize {
        self.ordered.len()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    /// Controls are hidden when paging is off or everything fits on one page.
    pub fn show_controls(&self) -> bool {
        self.paginated && self.total_rows() > self.page_size
    }

    pub fn range(&self) -> RowRange {
        RowRange {
            first: if self.start == self.end { 0 } else { self.start + 1 },
            last: self.end,
            total: self.total_rows(),
        }
    }
}

/// Derive the view for `rows`.
///
/// `sort` and `pagination` are `None` when the respective feature is off.
/// Pure: the same inputs always give the same view.
pub fn derive<T>(
    rows: &[T],
    columns: &[Column<T>],
    filter: &RowFilter<T>,
    sort: Option<&[SortSpec]>,
    pagination: Option<&PaginationState>,
) -> TableView {
    let mut ordered: Vec<usize> = (0..rows.len()).filter(|&idx| filter.matches(&rows[idx])).collect();

    if let Some(specs) = sort
        && !specs.is_empty()
    {
        // sort_by is stable, so ties keep source order
        ordered.sort_by(|&a, &b| compare_rows(&rows[a], &rows[b], columns, specs));
    }

    let total = ordered.len();
    let paging = pagination.filter(|p| p.page_size > 0);
    let (start, end, page_index, page_count, page_size) = match paging {
        Some(p) => {
            let (start, end) = p.bounds(total);
            (start, end, p.clamped_index(total), p.page_count(total), p.page_size)
        }
        None => (0, total, 0, 1, total),
    };

    TableView {
        ordered,
        start,
        end,
        page_index,
        page_count,
        page_size,
        paginated: paging.is_some(),
    }
}

fn compare_rows<T>(a: &T, b: &T, columns: &[Column<T>], specs: &[SortSpec]) -> Ordering {
    for spec in specs {
        let Some(column) = columns.iter().find(|c| c.id() == spec.column_id) else {
            continue;
        };
        let ordering = spec.direction.apply(column.compare(a, b));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::sort::SortDirection;

    type Row = (u32, &'static str);

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("num", "Num", |r: &Row| r.0.to_string()).sortable_by(|r: &Row| r.0),
            Column::new("tag", "Tag", |r: &Row| r.1.to_string()).sortable_by(|r: &Row| r.1),
        ]
    }

    fn spec(id: &str, direction: SortDirection) -> SortSpec {
        SortSpec {
            column_id: id.to_string(),
            direction,
        }
    }

    #[test]
    fn test_multi_key_sort() {
        let rows = vec![(2, "b"), (1, "b"), (3, "a"), (1, "a")];
        let specs = [spec("tag", SortDirection::Ascending), spec("num", SortDirection::Descending)];
        let view = derive(&rows, &columns(), &RowFilter::default(), Some(&specs[..]), None);
        assert_eq!(view.page_indices(), &[2, 3, 0, 1]);
    }

    #[test]
    fn test_unknown_sort_column_is_ignored() {
        let rows = vec![(2, "b"), (1, "a")];
        let specs = [spec("missing", SortDirection::Ascending)];
        let view = derive(&rows, &columns(), &RowFilter::default(), Some(&specs[..]), None);
        assert_eq!(view.page_indices(), &[0, 1]);
    }

    #[test]
    fn test_filter_runs_before_paging() {
        let rows: Vec<Row> = (0..30).map(|n| (n, if n % 2 == 0 { "even" } else { "odd" })).collect();
        let filter = RowFilter::predicate(|r: &Row| r.1 == "even");
        let pagination = PaginationState::new(10);
        let view = derive(&rows, &columns(), &filter, None, Some(&pagination));
        assert_eq!(view.total_rows(), 15);
        assert_eq!(view.page_count(), 2);
        assert_eq!(view.page_indices().len(), 10);
        assert!(view.page_indices().iter().all(|&idx| idx % 2 == 0));
    }

    #[test]
    fn test_derive_is_idempotent() {
        let rows = vec![(3, "c"), (1, "a"), (2, "b")];
        let specs = [spec("num", SortDirection::Ascending)];
        let pagination = PaginationState::new(2);
        let first = derive(&rows, &columns(), &RowFilter::default(), Some(&specs[..]), Some(&pagination));
        let second = derive(&rows, &columns(), &RowFilter::default(), Some(&specs[..]), Some(&pagination));
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_page_size_disables_paging() {
        let rows: Vec<Row> = (0..7).map(|n| (n, "x")).collect();
        let pagination = PaginationState::new(0);
        let view = derive(&rows, &columns(), &RowFilter::default(), None, Some(&pagination));
        assert_eq!(view.page_indices().len(), 7);
        assert!(!view.show_controls());
    }
}
