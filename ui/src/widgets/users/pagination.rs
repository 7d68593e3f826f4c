//! Page footer: range label, page buttons and the page counter.

use egui::{Button, RichText, Ui};
use roster_business::{TableCommand, TableView};

use crate::utils::colors::COLOR_ACTIVE;

/// `start-end of N` for the rows on screen, 1-based.
pub fn range_label(view: &TableView<'_>) -> String {
    if view.filtered_total == 0 {
        return "0 of 0".to_owned();
    }
    format!(
        "{}-{} of {}",
        view.range.start + 1,
        view.range.end,
        view.filtered_total
    )
}

/// Renders the footer and returns the page commands it produced.
pub fn pagination_footer(view: &TableView<'_>, ui: &mut Ui) -> Vec<TableCommand> {
    let mut commands = Vec::new();

    ui.horizontal(|ui| {
        ui.label(range_label(view));
        ui.separator();

        if ui
            .add_enabled(view.page > 1, Button::new("‹ Prev"))
            .on_hover_text("Previous page")
            .clicked()
        {
            commands.push(TableCommand::PreviousPage);
        }

        for page in 1..=view.page_count {
            let current = page == view.page;
            let mut text = RichText::new(page.to_string()).monospace();
            if current {
                text = text.strong().color(COLOR_ACTIVE);
            }
            if ui.add(Button::new(text).selected(current)).clicked() && !current {
                commands.push(TableCommand::GoToPage(page));
            }
        }

        if ui
            .add_enabled(view.page < view.page_count, Button::new("Next ›"))
            .on_hover_text("Next page")
            .clicked()
        {
            commands.push(TableCommand::NextPage);
        }

        ui.separator();
        ui.label(format!("Page {} of {}", view.page, view.page_count));
    });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_business::{User, UsersTableState};

    fn users(count: u64) -> Vec<User> {
        (1..=count).map(|id| User::builder().id(id).build()).collect()
    }

    #[test]
    fn test_range_label() {
        let all = users(25);
        let mut table = UsersTableState::new();
        assert_eq!(range_label(&table.view(&all)), "1-13 of 25");

        table.handle(TableCommand::NextPage, &all).unwrap();
        assert_eq!(range_label(&table.view(&all)), "14-25 of 25");

        assert_eq!(range_label(&table.view(&[])), "0 of 0");
    }
}
