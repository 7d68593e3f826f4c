//! Main panel of the users view.

use egui::{Frame, Margin, Response, RichText, Stroke, Ui};
use log::warn;
use roster_business::{ColumnKey, FetchUsersResult, NetworkError, User, UsersTableState};

use super::filter_popup::filter_popup;
use super::pagination::pagination_footer;
use super::table::users_table;
use crate::state::State;
use crate::utils::colors::COLOR_RED;

/// Displays the users view for the current request state.
///
/// While a request is pending only the loading indicator is shown; a failed
/// request shows the error and a Retry button, never an empty table.
pub fn users_panel(state: &mut State, ui: &mut Ui) -> Response {
    let mut retry = false;

    let response = ui.vertical(|ui| match state.query.result() {
        FetchUsersResult::Idle | FetchUsersResult::Pending => render_loading(ui),
        FetchUsersResult::Failed(err) => retry = render_failure(ui, err),
        FetchUsersResult::Loaded { users, total } => {
            if let Some(total) = total {
                ui.label(format!("{} of {total} users loaded", users.len()));
            }
            render_loaded(&mut state.table, &mut state.open_filter, users, ui);
        }
    });

    if retry {
        state.reload(ui.ctx());
    }

    response.response
}

fn render_loading(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label("Loading...");
    });
}

/// Returns `true` when Retry was clicked.
fn render_failure(ui: &mut Ui, err: &NetworkError) -> bool {
    Frame::NONE
        .stroke(Stroke::new(1.0, COLOR_RED))
        .inner_margin(Margin::same(12))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.label(RichText::new("Failed to load users").strong().color(COLOR_RED));
            ui.label(err.to_string());
            ui.add_space(8.0);
            ui.button("Retry").clicked()
        })
        .inner
}

fn render_loaded(
    table: &mut UsersTableState,
    open_filter: &mut Option<ColumnKey>,
    users: &[User],
    ui: &mut Ui,
) {
    let mut commands = Vec::new();

    {
        let view = table.view(users);
        commands.extend(users_table(table, &view, open_filter, ui));
        ui.add_space(8.0);
        commands.extend(pagination_footer(&view, ui));
    }

    if let Some(column) = *open_filter {
        let outcome = filter_popup(table.filters(), column, ui.ctx());
        if outcome.close {
            *open_filter = None;
        }
        commands.extend(outcome.commands);
    }

    for command in commands {
        if let Err(err) = table.handle(command, users) {
            warn!("Rejected table command: {err}");
        }
    }
}
