//! Column descriptors: identity, renderers, and optional sort comparator.

use std::cmp::Ordering;
use std::fmt;

use eframe::egui::{self, Response, Ui};

use super::sort::SortDirection;

/// Header renderer. Receives the column's title and sort status; the returned
/// response is what the table checks for clicks.
pub type HeaderRenderer = Box<dyn Fn(&mut Ui, &HeaderContext<'_>) -> Response>;

/// Cell renderer, invoked once per row for this column.
pub type CellRenderer<T> = Box<dyn Fn(&mut Ui, &T)>;

/// Plain-text projection of a row, used by default rendering and export.
pub type TextAccessor<T> = Box<dyn Fn(&T) -> String>;

/// Ascending comparison of two rows.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// What a header renderer gets to work with.
#[derive(Debug, Clone, Copy)]
pub struct HeaderContext<'a> {
    pub title: &'a str,
    pub sortable: bool,
    pub direction: Option<SortDirection>,
}

/// One displayable, optionally sortable facet of `T`.
pub struct Column<T> {
    id: String,
    title: String,
    text: Option<TextAccessor<T>>,
    header: Option<HeaderRenderer>,
    cell: Option<CellRenderer<T>>,
    compare: Option<Comparator<T>>,
    min_width: f32,
}

impl<T> Column<T> {
    /// Column rendered as plain text.
    pub fn new(id: impl Into<String>, title: impl Into<String>, text: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: Some(Box::new(text)),
            header: None,
            cell: None,
            compare: None,
            min_width: 60.0,
        }
    }

    /// Column with a custom cell renderer and no text projection.
    ///
    /// Such a column is not exported.
    pub fn custom(id: impl Into<String>, title: impl Into<String>, cell: impl Fn(&mut Ui, &T) + 'static) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: None,
            header: None,
            cell: Some(Box::new(cell)),
            compare: None,
            min_width: 60.0,
        }
    }

    /// Make the column sortable by a key projection.
    pub fn sortable_by<K: Ord>(mut self, key: impl Fn(&T) -> K + 'static) -> Self {
        self.compare = Some(Box::new(move |a, b| key(a).cmp(&key(b))));
        self
    }

    /// Make the column sortable with an explicit comparator.
    pub fn sortable_with(mut self, compare: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.compare = Some(Box::new(compare));
        self
    }

    /// Override the cell renderer.
    pub fn cell(mut self, cell: impl Fn(&mut Ui, &T) + 'static) -> Self {
        self.cell = Some(Box::new(cell));
        self
    }

    /// Override the header renderer.
    pub fn header(mut self, header: impl Fn(&mut Ui, &HeaderContext<'_>) -> Response + 'static) -> Self {
        self.header = Some(Box::new(header));
        self
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> f32 {
        self.min_width
    }

    pub fn is_sortable(&self) -> bool {
        self.compare.is_some()
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    /// Text for a row, `None` when the column only has a custom renderer.
    pub fn text(&self, row: &T) -> Option<String> {
        self.text.as_ref().map(|text| text(row))
    }

    /// Ascending comparison. Unsortable columns treat all rows as equal.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.compare.as_ref().map_or(Ordering::Equal, |compare| compare(a, b))
    }

    pub fn render_header(&self, ui: &mut Ui, direction: Option<SortDirection>) -> Response {
        let ctx = HeaderContext {
            title: &self.title,
            sortable: self.is_sortable(),
            direction,
        };
        match &self.header {
            Some(header) => header(ui, &ctx),
            None => default_header(ui, &ctx),
        }
    }

    pub fn render_cell(&self, ui: &mut Ui, row: &T) {
        if let Some(cell) = &self.cell {
            cell(ui, row);
        } else if let Some(text) = &self.text {
            ui.label(text(row));
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("sortable", &self.is_sortable())
            .finish_non_exhaustive()
    }
}

/// Bold title, with a sort indicator on sortable columns.
pub fn default_header(ui: &mut Ui, ctx: &HeaderContext<'_>) -> Response {
    use egui_phosphor::regular::{ARROWS_DOWN_UP, CARET_DOWN, CARET_UP};

    if !ctx.sortable {
        return ui.strong(ctx.title);
    }

    let icon = match ctx.direction {
        None => ARROWS_DOWN_UP,
        Some(SortDirection::Ascending) => CARET_UP,
        Some(SortDirection::Descending) => CARET_DOWN,
    };
    let hint = match ctx.direction {
        None => "Sort ascending",
        Some(SortDirection::Ascending) => "Sort descending",
        Some(SortDirection::Descending) => "Clear sort",
    };

    ui.add(egui::Button::new(egui::RichText::new(format!("{} {icon}", ctx.title)).strong()).frame(false))
        .on_hover_text(hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: &'static str,
        qty: u32,
    }

    #[test]
    fn test_text_column() {
        let column: Column<Item> = Column::new("name", "Name", |i: &Item| i.name.to_string());
        let item = Item { name: "bolt", qty: 3 };
        assert_eq!(column.text(&item).as_deref(), Some("bolt"));
        assert!(!column.is_sortable());
        assert_eq!(column.compare(&item, &item), Ordering::Equal);
    }

    #[test]
    fn test_sortable_by_key() {
        let column: Column<Item> = Column::new("qty", "Qty", |i: &Item| i.qty.to_string()).sortable_by(|i: &Item| i.qty);
        let a = Item { name: "a", qty: 1 };
        let b = Item { name: "b", qty: 2 };
        assert!(column.is_sortable());
        assert_eq!(column.compare(&a, &b), Ordering::Less);
        assert_eq!(column.compare(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_sortable_with_comparator() {
        let column: Column<Item> = Column::new("name", "Name", |i: &Item| i.name.to_string())
            .sortable_with(|a: &Item, b: &Item| a.name.len().cmp(&b.name.len()).then_with(|| a.name.cmp(b.name)));
        let short = Item { name: "zz", qty: 0 };
        let long = Item { name: "aaa", qty: 0 };
        assert!(column.is_sortable());
        assert_eq!(column.compare(&short, &long), Ordering::Less);
        assert_eq!(column.compare(&long, &short), Ordering::Greater);
    }

    #[test]
    fn test_custom_column_has_no_text() {
        let column: Column<Item> = Column::custom("badge", "Badge", |ui: &mut Ui, i: &Item| {
            ui.label(i.name);
        });
        assert!(!column.has_text());
        assert_eq!(column.text(&Item { name: "x", qty: 0 }), None);
    }
}
