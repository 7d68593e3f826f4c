//! The users table query: filter, then sort, then page.

use std::ops::Range;

use log::debug;
use thiserror::Error;

use crate::column::ColumnKey;
use crate::filter::{FilterCommand, FilterError, FilterState};
use crate::pagination::Pagination;
use crate::sort::{SortError, SortOrder, SortState};
use crate::user::User;

/// Commands the view issues against [`UsersTableState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCommand {
    Filter(FilterCommand),
    /// Header click on a sortable column.
    ToggleSort(ColumnKey),
    /// Sort `column` in `order`, or drop its sort when `order` is `None`.
    SetSort {
        column: ColumnKey,
        order: Option<SortOrder>,
    },
    GoToPage(usize),
    NextPage,
    PreviousPage,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Sort(#[from] SortError),
}

/// One rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    /// Rows of the current page, in display order.
    pub rows: Vec<&'a User>,
    /// Rows left after filtering, across all pages.
    pub filtered_total: usize,
    /// Current page, 1-based, already clamped.
    pub page: usize,
    pub page_count: usize,
    /// Position of `rows` within the filtered and sorted list.
    pub range: Range<usize>,
}

/// View state of the users table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersTableState {
    filters: FilterState,
    sort: SortState,
    pagination: Pagination,
}

impl UsersTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Rows matching every applied filter, sorted.
    pub fn filtered<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        let mut rows: Vec<&User> = users.iter().filter(|u| self.filters.matches(u)).collect();
        self.sort.sort(&mut rows);
        rows
    }

    pub fn view<'a>(&self, users: &'a [User]) -> TableView<'a> {
        let filtered = self.filtered(users);
        let filtered_total = filtered.len();
        let range = self.pagination.range(filtered_total);
        let page_count = self.pagination.page_count(filtered_total);
        let page = self.pagination.page().clamp(1, page_count);

        TableView {
            rows: filtered[range.clone()].to_vec(),
            filtered_total,
            page,
            page_count,
            range,
        }
    }

    /// Runs `command` against `users`. Filter and sort changes go back to page 1.
    pub fn handle(&mut self, command: TableCommand, users: &[User]) -> Result<(), TableError> {
        debug!("Table command: {command:?}");

        match command {
            TableCommand::Filter(filter) => {
                if self.filters.apply_command(filter)? {
                    self.pagination.reset();
                }
            }
            TableCommand::ToggleSort(column) => {
                self.sort.toggle(column)?;
                self.pagination.reset();
            }
            TableCommand::SetSort { column, order } => {
                self.sort.set(column, order)?;
                self.pagination.reset();
            }
            TableCommand::GoToPage(page) => {
                let total = self.filtered_count(users);
                self.pagination.go_to(page, total);
            }
            TableCommand::NextPage => {
                let total = self.filtered_count(users);
                self.pagination.next(total);
            }
            TableCommand::PreviousPage => {
                let total = self.filtered_count(users);
                self.pagination.previous(total);
            }
        }

        Ok(())
    }

    fn filtered_count(&self, users: &[User]) -> usize {
        users.iter().filter(|u| self.filters.matches(u)).count()
    }
}
