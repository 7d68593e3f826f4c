//! Command-line front-end of the users table.
//!
//! `roster` fetches the users list once, runs it through the same search, sort
//! and paging as the desktop table, and prints one page.

pub mod cli;
pub mod commands;
pub mod output;
pub mod timing;
