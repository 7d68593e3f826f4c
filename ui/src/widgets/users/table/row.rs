//! Row rendering for the users table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use roster_business::{ColumnKey, User};

use super::cells::{render_id_cell, render_image_cell, render_text_cell};

/// Renders a single user row, one cell per column in display order.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &User) {
    for column in ColumnKey::ALL {
        row.col(|ui| {
            match column {
                ColumnKey::Id => render_id_cell(ui, user.id),
                ColumnKey::Image => render_image_cell(ui, user.image.as_deref()),
                ColumnKey::FirstName | ColumnKey::LastName | ColumnKey::Name | ColumnKey::Email => {
                    render_text_cell(ui, column.text(user).as_deref());
                }
            }
            draw_cell_bottom_border(ui);
        });
    }
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
