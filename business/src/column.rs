//! Column registry for the users table.
//!
//! The table has a fixed set of columns. Which of them can be searched or sorted
//! is static data ([`ColumnConfig`]); the predicate and comparator that act on a
//! column live in [`crate::filter`] and [`crate::sort`].

use std::borrow::Cow;
use std::fmt;

use crate::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnKey {
    Id,
    FirstName,
    LastName,
    /// Derived: first and last name.
    Name,
    Email,
    Image,
}

/// What a column supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnConfig {
    pub title: &'static str,
    pub is_filterable: bool,
    pub is_sortable: bool,
}

impl ColumnKey {
    /// All columns in display order.
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::FirstName,
        Self::LastName,
        Self::Name,
        Self::Email,
        Self::Image,
    ];

    pub const fn config(self) -> ColumnConfig {
        match self {
            Self::Id => ColumnConfig {
                title: "ID",
                is_filterable: false,
                is_sortable: false,
            },
            Self::FirstName => ColumnConfig {
                title: "First Name",
                is_filterable: true,
                is_sortable: false,
            },
            Self::LastName => ColumnConfig {
                title: "Last Name",
                is_filterable: true,
                is_sortable: false,
            },
            Self::Name => ColumnConfig {
                title: "Name",
                is_filterable: false,
                is_sortable: false,
            },
            Self::Email => ColumnConfig {
                title: "Email",
                is_filterable: false,
                is_sortable: true,
            },
            Self::Image => ColumnConfig {
                title: "Image",
                is_filterable: false,
                is_sortable: false,
            },
        }
    }

    pub const fn title(self) -> &'static str {
        self.config().title
    }

    pub const fn is_filterable(self) -> bool {
        self.config().is_filterable
    }

    pub const fn is_sortable(self) -> bool {
        self.config().is_sortable
    }

    /// Field name on the wire (`firstName`, ...). `name` has no wire field.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Name => "name",
            Self::Email => "email",
            Self::Image => "image",
        }
    }

    /// String form of the column value for `user`, `None` when absent.
    pub fn text(self, user: &User) -> Option<Cow<'_, str>> {
        match self {
            Self::Id => Some(Cow::Owned(user.id.to_string())),
            Self::FirstName => user.first_name.as_deref().map(Cow::Borrowed),
            Self::LastName => user.last_name.as_deref().map(Cow::Borrowed),
            Self::Name => Some(Cow::Owned(user.full_name())),
            Self::Email => user.email.as_deref().map(Cow::Borrowed),
            Self::Image => user.image.as_deref().map(Cow::Borrowed),
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
