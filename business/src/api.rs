//! Users endpoint client.

use log::{error, info};

use crate::config::BusinessConfig;
use crate::error::NetworkError;
use crate::http::Client;
use crate::user::ListUsersResponse;

/// GET the configured users endpoint.
///
/// One request, no retries. Any non-2xx status is a failure, as is a body that
/// does not decode as `{ "users": [...] }`.
pub async fn fetch_users(config: &BusinessConfig) -> Result<ListUsersResponse, NetworkError> {
    let url = config.users_url();

    info!("Fetching users from {url}");

    let response = Client::get(url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| {
            error!("Users request to {url} failed: {e}");
            NetworkError::Transport {
                url: url.to_owned(),
                message: e.message,
            }
        })?;

    if !response.is_success() {
        error!("Users endpoint {url} returned status {}", response.status);
        return Err(NetworkError::Status {
            url: url.to_owned(),
            status: response.status,
        });
    }

    let list: ListUsersResponse = response.json().map_err(|e| {
        error!("Failed to parse ListUsersResponse from {url}: {e}");
        NetworkError::Decode {
            url: url.to_owned(),
            message: e.to_string(),
        }
    })?;

    info!(
        "Fetched {} users (total {:?}) from {url}",
        list.users.len(),
        list.total
    );

    Ok(list)
}
