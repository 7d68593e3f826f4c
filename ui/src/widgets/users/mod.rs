//! Users table widget.
//!
//! - `panel`: loading, failure and loaded states, applies the collected commands
//! - `table`: the table itself (columns, header, row, cells)
//! - `filter_popup`: search popup of a filterable column
//! - `pagination`: page footer

mod filter_popup;
mod pagination;
mod panel;
pub mod table;

pub use panel::users_panel;
pub use table::users_table;
