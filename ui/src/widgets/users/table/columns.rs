//! Column definitions for the users table.

use egui_extras::Column;
use roster_business::ColumnKey;

/// Fixed column widths for consistent table layout
pub const ID_WIDTH: f32 = 50.0;
pub const NAME_WIDTH: f32 = 130.0;
pub const FULL_NAME_WIDTH: f32 = 170.0;
pub const IMAGE_WIDTH: f32 = 70.0;
/// Avatars are drawn at this exact size.
pub const IMAGE_SIZE: f32 = 50.0;
pub const ROW_HEIGHT: f32 = 58.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Table column configuration, in [`ColumnKey::ALL`] order.
#[inline]
pub fn table_columns() -> Vec<Column> {
    ColumnKey::ALL.into_iter().map(column_for).collect()
}

fn column_for(key: ColumnKey) -> Column {
    match key {
        ColumnKey::Id => Column::exact(ID_WIDTH),
        ColumnKey::FirstName | ColumnKey::LastName => Column::initial(NAME_WIDTH).at_least(90.0),
        ColumnKey::Name => Column::initial(FULL_NAME_WIDTH).at_least(100.0),
        ColumnKey::Email => Column::remainder().at_least(180.0),
        ColumnKey::Image => Column::exact(IMAGE_WIDTH),
    }
}
