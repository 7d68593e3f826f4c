//! Table header rendering for the users table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use roster_business::{ColumnKey, SortOrder, TableCommand, UsersTableState};

use crate::utils::colors::COLOR_ACTIVE;

/// What a header click asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    OpenFilter(ColumnKey),
    Command(TableCommand),
}

/// Arrow shown next to a sorted column title.
pub fn sort_indicator(order: Option<SortOrder>) -> &'static str {
    match order {
        Some(SortOrder::Ascending) => "⏶",
        Some(SortOrder::Descending) => "⏷",
        None => "",
    }
}

/// Renders one header cell per column.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    table: &UsersTableState,
) -> Option<HeaderAction> {
    let mut action = None;
    for column in ColumnKey::ALL {
        header.col(|ui| {
            if let Some(clicked) = render_header_cell(ui, column, table) {
                action = Some(clicked);
            }
        });
    }
    action
}

fn render_header_cell(
    ui: &mut Ui,
    column: ColumnKey,
    table: &UsersTableState,
) -> Option<HeaderAction> {
    let title = column.title();

    if column.is_sortable() {
        let order = table.sort().order_of(column);
        let label = match sort_indicator(order) {
            "" => title.to_owned(),
            arrow => format!("{title} {arrow}"),
        };
        let clicked = ui
            .add(Button::new(RichText::new(label).strong()).frame(false))
            .on_hover_text("Click to sort")
            .clicked();
        return clicked.then_some(HeaderAction::Command(TableCommand::ToggleSort(column)));
    }

    ui.strong(title);

    if column.is_filterable() {
        let mut icon = RichText::new("🔍");
        if table.filters().applied(column).is_some() {
            icon = icon.color(COLOR_ACTIVE);
        }
        let clicked = ui
            .add(Button::new(icon).frame(false))
            .on_hover_text(format!("Search {title}"))
            .clicked();
        return clicked.then_some(HeaderAction::OpenFilter(column));
    }

    None
}
