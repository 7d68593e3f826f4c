//! Cell rendering functions for the users table.

use egui::{Image, RichText, Ui, vec2};

use super::columns::IMAGE_SIZE;

/// Renders the ID cell with a left border indicator.
#[inline]
pub fn render_id_cell(ui: &mut Ui, id: u64) {
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().vline(
        rect.left(),
        rect.top()..=rect.bottom(),
        egui::Stroke::new(2.0, border_color),
    );

    ui.label(RichText::new(id.to_string()).monospace());
}

/// Renders a text cell. An absent value renders as an empty cell.
#[inline]
pub fn render_text_cell(ui: &mut Ui, text: Option<&str>) {
    ui.label(text.unwrap_or_default());
}

/// Renders the avatar at 50×50, loaded from `url` by the installed image loaders.
#[inline]
pub fn render_image_cell(ui: &mut Ui, url: Option<&str>) {
    match url {
        Some(url) => {
            ui.add(
                Image::new(url)
                    .fit_to_exact_size(vec2(IMAGE_SIZE, IMAGE_SIZE))
                    .corner_radius(4.0),
            );
        }
        None => {
            ui.allocate_space(vec2(IMAGE_SIZE, IMAGE_SIZE));
        }
    }
}
