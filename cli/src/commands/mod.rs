//! Command implementations for the roster CLI.

pub mod list;

pub use list::{ListOptions, PageReport, UserRow, page_report, render_footer, render_table, run_list};
