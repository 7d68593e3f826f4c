//! Column sorting.
//!
//! Strings are ordered by [`collate`]: the Unicode root collation (CLDR root
//! locale, default options) from `icu_collator`, with code point order as the
//! final tie-break so distinct strings never compare equal.
//!
//! Sorting is stable in both directions: rows with equal keys keep their input
//! order.

use std::cmp::Ordering;
use std::sync::LazyLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use log::error;
use thiserror::Error;

use crate::column::ColumnKey;
use crate::user::User;

static ROOT_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .inspect_err(|e| error!("failed to load root collation data: {e}"))
        .ok()
});

/// Compares two strings under the root locale collation.
pub fn collate(a: &str, b: &str) -> Ordering {
    let collated = match ROOT_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => Ordering::Equal,
    };
    collated.then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("column {0} is not sortable")]
    NotSortable(ColumnKey),
}

/// Ascending comparison of `a` and `b` on `column`. Absent values sort first.
pub fn compare(column: ColumnKey, a: &User, b: &User) -> Ordering {
    match (column.text(a), column.text(b)) {
        (Some(x), Some(y)) => collate(&x, &y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort of `rows` on `column`.
pub fn sort_users(rows: &mut [&User], column: ColumnKey, order: SortOrder) {
    rows.sort_by(|a, b| order.apply(compare(column, a, b)));
}

/// Which column, if any, the table is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(ColumnKey, SortOrder)>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<(ColumnKey, SortOrder)> {
        self.active
    }

    pub fn order_of(&self, column: ColumnKey) -> Option<SortOrder> {
        self.active
            .and_then(|(active, order)| (active == column).then_some(order))
    }

    /// Sets or removes the sort. Sorting a new column replaces the old one.
    pub fn set(&mut self, column: ColumnKey, order: Option<SortOrder>) -> Result<(), SortError> {
        if !column.is_sortable() {
            return Err(SortError::NotSortable(column));
        }

        self.active = match order {
            Some(order) => Some((column, order)),
            None if self.order_of(column).is_some() => None,
            None => self.active,
        };
        Ok(())
    }

    /// Header click: none, then ascending, then descending, then none again.
    pub fn toggle(&mut self, column: ColumnKey) -> Result<(), SortError> {
        let next = match self.order_of(column) {
            None => Some(SortOrder::Ascending),
            Some(SortOrder::Ascending) => Some(SortOrder::Descending),
            Some(SortOrder::Descending) => None,
        };
        self.set(column, next)
    }

    /// Sorts `rows` in place; a no-op when no sort is active.
    pub fn sort(&self, rows: &mut [&User]) {
        if let Some((column, order)) = self.active {
            sort_users(rows, column, order);
        }
    }
}
