//! Behavioral tests for the data table presenter.

use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Account {
    id: u32,
    name: String,
    balance: i64,
}

fn accounts(count: u32) -> Vec<Account> {
    (1..=count)
        .map(|id| Account {
            id,
            name: format!("Account {id:02}"),
            // few distinct values so ties are common
            balance: i64::from(id % 3) * 100,
        })
        .collect()
}

fn account_table(options: TableOptions) -> DataTable<Account> {
    DataTable::new(
        vec![
            Column::new("id", "ID", |a: &Account| a.id.to_string()).sortable_by(|a: &Account| a.id),
            Column::new("name", "Name", |a: &Account| a.name.clone()).sortable_by(|a: &Account| a.name.clone()),
            Column::new("balance", "Balance", |a: &Account| a.balance.to_string()).sortable_by(|a: &Account| a.balance),
            Column::new("note", "Note", |_: &Account| String::new()),
        ],
        options,
    )
}

fn ids<'a>(rows: impl Iterator<Item = &'a Account>) -> Vec<u32> {
    rows.map(|a| a.id).collect()
}

/// Walk every page from the first, collecting ids.
fn all_pages(table: &mut DataTable<Account>, rows: &[Account]) -> Vec<u32> {
    table.first_page();
    let mut seen = Vec::new();
    loop {
        let view = table.derive(rows);
        seen.extend(ids(view.rows(rows)));
        if !view.can_next() {
            break;
        }
        table.next_page(view.total_rows());
    }
    seen
}

#[test]
fn test_twenty_five_rows_three_pages() {
    let rows = accounts(25);
    let mut table = account_table(TableOptions::default().page_size(10));

    let view = table.derive(&rows);
    assert_eq!(view.page_count(), 3);
    assert_eq!(ids(view.rows(&rows)), (1..=10).collect::<Vec<_>>());
    assert!(!view.can_previous());
    assert!(view.can_next());
    assert!(view.show_controls());

    table.next_page(25);
    table.next_page(25);
    let view = table.derive(&rows);
    assert_eq!(view.page_index(), 2);
    assert_eq!(ids(view.rows(&rows)), (21..=25).collect::<Vec<_>>());
    assert!(!view.can_next());
    assert!(view.can_previous());
    assert_eq!(view.range().to_string(), "Showing 21 to 25 of 25");

    // next on the last page is a no-op
    table.next_page(25);
    assert_eq!(table.pagination().page_index, 2);
}

#[test]
fn test_pages_concatenate_to_sorted_permutation() {
    let rows = accounts(23);
    let mut table = account_table(TableOptions::default().page_size(4));

    table.toggle_sort("balance");
    let collected = all_pages(&mut table, &rows);
    assert_eq!(collected.len(), rows.len());

    let mut expected = rows.clone();
    expected.sort_by_key(|a| a.balance);
    assert_eq!(collected, ids(expected.iter()));
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let rows = accounts(9);
    let mut table = account_table(TableOptions::default().pagination(false));

    table.toggle_sort("balance");
    let view = table.derive(&rows);
    assert_eq!(ids(view.rows(&rows)), vec![3, 6, 9, 1, 4, 7, 2, 5, 8]);

    table.toggle_sort("balance");
    let view = table.derive(&rows);
    assert_eq!(ids(view.rows(&rows)), vec![2, 5, 8, 1, 4, 7, 3, 6, 9]);
}

#[test]
fn test_third_click_restores_insertion_order() {
    let rows = vec![
        Account { id: 2, name: "b".into(), balance: 0 },
        Account { id: 3, name: "c".into(), balance: 0 },
        Account { id: 1, name: "a".into(), balance: 0 },
    ];
    let mut table = account_table(TableOptions::default());

    table.toggle_sort("id");
    assert_eq!(ids(table.derive(&rows).rows(&rows)), vec![1, 2, 3]);
    table.toggle_sort("id");
    assert_eq!(ids(table.derive(&rows).rows(&rows)), vec![3, 2, 1]);
    table.toggle_sort("id");
    assert_eq!(ids(table.derive(&rows).rows(&rows)), vec![2, 3, 1]);
    assert!(table.sort_state().is_empty());
}

#[test]
fn test_new_column_resets_previous_sort() {
    let mut table = account_table(TableOptions::default());
    table.toggle_sort("id");
    table.toggle_sort("id");
    table.toggle_sort("name");
    assert_eq!(table.sort_state().direction_of("id"), None);
    assert_eq!(table.sort_state().direction_of("name"), Some(SortDirection::Ascending));
}

#[test]
fn test_unsortable_column_and_disabled_sorting_ignore_clicks() {
    let mut table = account_table(TableOptions::default());
    table.toggle_sort("note");
    table.toggle_sort("nope");
    assert!(table.sort_state().is_empty());

    let rows = vec![
        Account { id: 2, name: "b".into(), balance: 0 },
        Account { id: 1, name: "a".into(), balance: 0 },
    ];
    let mut table = account_table(TableOptions::default().sorting(false));
    table.toggle_sort("id");
    assert!(table.sort_state().is_empty());
    assert_eq!(ids(table.derive(&rows).rows(&rows)), vec![2, 1]);
}

#[test]
fn test_loading_and_empty_presentation() {
    let table = account_table(TableOptions::default());
    let rows = accounts(5);

    assert_eq!(table.present(&rows, true), Presentation::Loading);
    assert_eq!(table.present(&[], false), Presentation::Empty);
    assert!(matches!(table.present(&rows, false), Presentation::Rows(_)));

    let unpaged = account_table(TableOptions::default().pagination(false));
    assert_eq!(unpaged.present(&[], false), Presentation::Empty);
}

#[test]
fn test_rows_are_original_references() {
    let rows = accounts(25);
    let mut table = account_table(TableOptions::default().page_size(10));
    table.toggle_sort("name");
    table.toggle_sort("name");

    table.first_page();
    loop {
        let view = table.derive(&rows);
        for (row, &idx) in view.rows(&rows).zip(view.page_indices()) {
            assert!(std::ptr::eq(row, &rows[idx]));
            assert!(rows.iter().any(|r| std::ptr::eq(r, row)));
        }
        if !view.can_next() {
            break;
        }
        table.next_page(view.total_rows());
    }
}

#[test]
fn test_page_size_change_clamps_index() {
    let rows = accounts(25);
    let mut table = account_table(TableOptions::default().page_size(5));
    table.last_page(25);
    assert_eq!(table.pagination().page_index, 4);

    table.set_page_size(20, rows.len());
    assert_eq!(table.pagination().page_index, 1);
    let view = table.derive(&rows);
    assert_eq!(ids(view.rows(&rows)), (21..=25).collect::<Vec<_>>());
}

#[test]
fn test_data_shrink_clamps_on_derive_and_sync() {
    let mut table = account_table(TableOptions::default().page_size(10));
    table.last_page(40);
    assert_eq!(table.pagination().page_index, 3);

    let rows = accounts(12);
    let view = table.derive(&rows);
    assert_eq!(view.page_index(), 1);
    assert_eq!(ids(view.rows(&rows)), vec![11, 12]);

    table.sync(&rows);
    assert_eq!(table.pagination().page_index, 1);
}

#[test]
fn test_controls_hidden_when_rows_fit() {
    let table = account_table(TableOptions::default().page_size(10));
    let rows = accounts(10);
    assert!(!table.derive(&rows).show_controls());

    let disabled = account_table(TableOptions::default().pagination(false).page_size(3));
    let rows = accounts(10);
    let view = disabled.derive(&rows);
    assert!(!view.show_controls());
    assert_eq!(view.page_indices().len(), 10);
}

#[test]
fn test_zero_page_size_shows_all_rows() {
    let rows = accounts(13);
    let mut table = account_table(TableOptions::default().page_size(0));
    table.next_page(13);
    let view = table.derive(&rows);
    assert_eq!(view.page_count(), 1);
    assert_eq!(view.page_indices().len(), 13);
    assert!(!view.show_controls());
}

#[test]
fn test_filter_hook_resets_page() {
    let rows = accounts(30);
    let mut table = account_table(TableOptions::default().page_size(5));
    table.next_page(30);
    table.set_filter(RowFilter::predicate(|a: &Account| a.balance == 0));
    assert_eq!(table.pagination().page_index, 0);

    let view = table.derive(&rows);
    assert_eq!(view.total_rows(), 10);
    assert!(view.rows(&rows).all(|a| a.balance == 0));

    table.clear_filter();
    assert_eq!(table.derive(&rows).total_rows(), 30);
}

#[test]
fn test_set_sort_with_two_keys() {
    let rows = accounts(6);
    let mut table = account_table(TableOptions::default().pagination(false));
    table.set_sort(vec![
        SortSpec {
            column_id: "balance".to_string(),
            direction: SortDirection::Ascending,
        },
        SortSpec {
            column_id: "id".to_string(),
            direction: SortDirection::Descending,
        },
    ]);

    assert_eq!(table.sort_state().specs().len(), 2);
    assert_eq!(ids(table.derive(&rows).rows(&rows)), vec![6, 3, 4, 1, 5, 2]);

    // a header click collapses it back to a single-column sort
    table.toggle_sort("name");
    assert_eq!(table.sort_state().specs().len(), 1);
    assert_eq!(table.sort_state().direction_of("balance"), None);
}

#[test]
fn test_comparator_column_sorts_through_table() {
    let rows = accounts(5);
    let mut table = DataTable::new(
        vec![
            Column::new("name", "Name", |a: &Account| a.name.clone())
                .sortable_with(|a: &Account, b: &Account| b.name.cmp(&a.name)),
        ],
        TableOptions::default(),
    );

    table.toggle_sort("name");
    assert_eq!(ids(table.derive(&rows).rows(&rows)), vec![5, 4, 3, 2, 1]);
    table.toggle_sort("name");
    assert_eq!(ids(table.derive(&rows).rows(&rows)), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_first_page_ignored_without_paging() {
    let mut table = account_table(TableOptions::default().page_size(5));
    table.last_page(20);
    assert_eq!(table.pagination().page_index, 3);
    table.first_page();
    assert_eq!(table.pagination().page_index, 0);

    let mut unpaged = account_table(TableOptions::default().page_size(0));
    unpaged.first_page();
    unpaged.next_page(20);
    assert_eq!(unpaged.pagination().page_index, 0);
}
