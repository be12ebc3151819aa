//! Sort state and the per-column sort cycle.

use std::cmp::Ordering;

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// One entry of the sort state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column_id: String,
    pub direction: SortDirection,
}

/// Ordered list of active sorts. Earlier entries take precedence.
///
/// Header clicks only ever produce zero or one entry; longer lists can be
/// installed with [`SortState::set`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    specs: Vec<SortSpec>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active sort entries in precedence order.
    pub fn specs(&self) -> &[SortSpec] {
        &self.specs
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Current direction for a column, `None` when it is unsorted.
    pub fn direction_of(&self, column_id: &str) -> Option<SortDirection> {
        self.specs
            .iter()
            .find(|spec| spec.column_id == column_id)
            .map(|spec| spec.direction)
    }

    /// Advance `column_id` through unsorted -> ascending -> descending -> unsorted.
    ///
    /// Any other column loses its sort: a click on a new column always starts
    /// it at ascending.
    pub fn toggle(&mut self, column_id: &str) {
        let next = match self.direction_of(column_id) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };

        self.specs.clear();
        if let Some(direction) = next {
            self.specs.push(SortSpec {
                column_id: column_id.to_string(),
                direction,
            });
        }
    }

    /// Replace the whole sort state.
    pub fn set(&mut self, specs: Vec<SortSpec>) {
        self.specs = specs;
    }
}
