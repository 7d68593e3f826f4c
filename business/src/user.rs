//! User records as returned by the users endpoint.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// One user row.
///
/// Only the fields the table shows are decoded; the endpoint returns many more
/// and those are ignored. Text fields are optional because the endpoint may send
/// `null` or leave them out, and an absent value never matches a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Row key, unique within a fetched batch.
    pub id: u64,
    #[serde(default)]
    #[builder(into)]
    pub first_name: Option<String>,
    #[serde(default)]
    #[builder(into)]
    pub last_name: Option<String>,
    #[serde(default)]
    #[builder(into)]
    pub email: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    #[builder(into)]
    pub image: Option<String>,
}

impl User {
    /// First and last name joined by a single space. Missing parts render empty.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }
}

/// Body of `GET /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
    /// Total number of users the endpoint knows about (may exceed `users.len()`).
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}
