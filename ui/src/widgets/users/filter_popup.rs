//! Search popup of a filterable column.

use egui::{Context, Id, Key, TextEdit};
use roster_business::{ColumnKey, FilterCommand, FilterState, TableCommand};

/// What the popup did this frame.
#[derive(Debug, Default)]
pub struct FilterPopupOutcome {
    pub commands: Vec<TableCommand>,
    /// The popup should be closed (applied, reset or dismissed).
    pub close: bool,
}

/// Shows the search popup for `column`.
///
/// Typing issues `Edit`; Search (or Enter) issues `Apply` with the typed text;
/// Reset issues `Clear`. Both Search and Reset close the popup.
pub fn filter_popup(filters: &FilterState, column: ColumnKey, ctx: &Context) -> FilterPopupOutcome {
    let mut outcome = FilterPopupOutcome::default();
    let mut input = filters
        .get(column)
        .map(|filter| filter.draft().to_owned())
        .unwrap_or_default();
    let mut open = true;

    egui::Window::new(format!("Search {}", column.title()))
        .id(Id::new(("users_filter_popup", column)))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            let response = ui.add(
                TextEdit::singleline(&mut input)
                    .hint_text(format!("Search {}", column.key()))
                    .desired_width(188.0),
            );
            if response.changed() {
                outcome.commands.push(TableCommand::Filter(FilterCommand::Edit {
                    column,
                    input: input.clone(),
                }));
            }
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Search").clicked() || submitted {
                    outcome.commands.push(TableCommand::Filter(FilterCommand::Apply {
                        column,
                        value: input.clone(),
                    }));
                    outcome.close = true;
                }
                if ui.button("Reset").clicked() {
                    outcome
                        .commands
                        .push(TableCommand::Filter(FilterCommand::Clear { column }));
                    outcome.close = true;
                }
            });
        });

    if !open {
        outcome.close = true;
    }

    outcome
}
