mod users;

pub use users::{users_panel, users_table};
