#![warn(clippy::all, rust_2018_idioms)]

//! Desktop front-end: an eframe app showing the users table.

pub mod app;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::RosterApp;
