//! Business layer of the roster users table.
//!
//! Everything here is UI-independent: the user model, the users endpoint client
//! and its fetch lifecycle, and the table query (per-column search, email sort,
//! fixed-size pages). The desktop app and the CLI both render what
//! [`UsersTableState::view`] returns.

pub mod api;
pub mod column;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod http;
pub mod pagination;
pub mod sort;
pub mod table;
pub mod user;

pub use api::fetch_users;
pub use column::{ColumnConfig, ColumnKey};
pub use config::{BusinessConfig, DEFAULT_USERS_URL};
pub use error::NetworkError;
pub use fetch::{FetchUsersResult, UsersQuery};
pub use filter::{ColumnFilter, FilterCommand, FilterError, FilterPhase, FilterState};
pub use pagination::{PAGE_SIZE, Pagination};
pub use sort::{SortError, SortOrder, SortState, collate};
pub use table::{TableCommand, TableError, TableView, UsersTableState};
pub use user::{ListUsersResponse, User};
