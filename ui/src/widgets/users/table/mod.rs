//! Table components for the users view.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Header cells with the search and sort controls
//! - `row`: One user row
//! - `cells`: Cell rendering per column kind

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Frame, Layout, Margin, Stroke, Ui};
use egui_extras::TableBuilder;
use roster_business::{ColumnKey, TableCommand, TableView, UsersTableState};

use self::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use self::header::{HeaderAction, render_table_header};
use self::row::render_user_row;
use crate::utils::colors::TABLE_BORDER_COLOR;

/// Renders the rows of `view` and returns the commands the header produced.
///
/// Opening a search popup is view-only state and is written to `open_filter`.
pub fn users_table(
    table: &UsersTableState,
    view: &TableView<'_>,
    open_filter: &mut Option<ColumnKey>,
    ui: &mut Ui,
) -> Vec<TableCommand> {
    let mut commands = Vec::new();

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .id_salt("users_table")
                .striped(true)
                .resizable(false)
                .cell_layout(Layout::left_to_right(Align::Center));
            for column in table_columns() {
                builder = builder.column(column);
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    match render_table_header(&mut header, table) {
                        Some(HeaderAction::OpenFilter(column)) => *open_filter = Some(column),
                        Some(HeaderAction::Command(command)) => commands.push(command),
                        None => {}
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, view.rows.len(), |mut row| {
                        if let Some(user) = view.rows.get(row.index()) {
                            render_user_row(&mut row, user);
                        }
                    });
                });
        });

    if view.rows.is_empty() {
        ui.add_space(8.0);
        ui.label("No users match the current search");
    }

    commands
}
