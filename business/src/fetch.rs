//! Users fetch lifecycle.
//!
//! [`UsersQuery`] owns the result of the one users request a view makes. The
//! request runs on a tokio runtime and reports back through a `flume` channel;
//! the owner drains it with [`UsersQuery::poll`] (once per frame in the UI).
//!
//! Each dispatch gets a generation number. A result whose generation is not the
//! current one belongs to a superseded or cancelled request and is dropped, so a
//! late response can never overwrite newer state.

use flume::{Receiver, Sender};
use log::{info, warn};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::api::fetch_users;
use crate::config::BusinessConfig;
use crate::error::NetworkError;
use crate::user::{ListUsersResponse, User};

/// Status/result of the users request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchUsersResult {
    /// No request has been made yet (or the last one was cancelled).
    #[default]
    Idle,

    /// A request is in flight.
    Pending,

    /// The request succeeded with these users.
    Loaded {
        users: Vec<User>,
        /// Total reported by the endpoint, if any.
        total: Option<u64>,
    },

    /// The request failed.
    Failed(NetworkError),
}

impl FetchUsersResult {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn users(&self) -> Option<&[User]> {
        match self {
            Self::Loaded { users, .. } => Some(users.as_slice()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&NetworkError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Result<ListUsersResponse, NetworkError>> for FetchUsersResult {
    fn from(result: Result<ListUsersResponse, NetworkError>) -> Self {
        match result {
            Ok(list) => Self::Loaded {
                users: list.users,
                total: list.total,
            },
            Err(err) => Self::Failed(err),
        }
    }
}

type Delivery = (u64, Result<ListUsersResponse, NetworkError>);

/// Owner of the users request and its latest result.
#[derive(Debug)]
pub struct UsersQuery {
    config: BusinessConfig,
    result: FetchUsersResult,
    generation: u64,
    in_flight: Option<CancellationToken>,
    send: Sender<Delivery>,
    recv: Receiver<Delivery>,
}

impl UsersQuery {
    pub fn new(config: BusinessConfig) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            config,
            result: FetchUsersResult::Idle,
            generation: 0,
            in_flight: None,
            send,
            recv,
        }
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    /// Points later dispatches at another endpoint. Does not touch the current result.
    pub fn set_config(&mut self, config: BusinessConfig) {
        self.config = config;
    }

    pub fn result(&self) -> &FetchUsersResult {
        &self.result
    }

    /// Starts a request on `runtime`, cancelling any request still in flight.
    pub fn dispatch(&mut self, runtime: &Handle) {
        self.dispatch_with(runtime, || {});
    }

    /// Like [`Self::dispatch`]; `on_done` runs on the runtime once the result is sent.
    pub fn dispatch_with(&mut self, runtime: &Handle, on_done: impl FnOnce() + Send + 'static) {
        self.cancel();

        self.generation += 1;
        let generation = self.generation;
        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());
        self.result = FetchUsersResult::Pending;

        let config = self.config.clone();
        let send = self.send.clone();

        info!(
            "Dispatching users request {generation} to {}",
            config.users_url()
        );

        runtime.spawn(async move {
            tokio::select! {
                () = token.cancelled() => {
                    info!("Users request {generation} cancelled");
                }
                result = fetch_users(&config) => {
                    if send.send((generation, result)).is_err() {
                        warn!("Users request {generation} finished after its query was dropped");
                    }
                    on_done();
                }
            }
        });
    }

    /// Applies delivered results. Returns true if the result changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        while let Ok((generation, result)) = self.recv.try_recv() {
            if generation != self.generation {
                warn!(
                    "Dropping late users response from request {generation} (current {})",
                    self.generation
                );
                continue;
            }

            self.in_flight = None;
            self.result = result.into();
            changed = true;
        }

        changed
    }

    /// Cancels the in-flight request, if any. A pending result goes back to idle.
    pub fn cancel(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
            // Anything already queued for this request is now stale.
            self.generation += 1;
            if self.result.is_pending() {
                self.result = FetchUsersResult::Idle;
            }
        }
    }
}

impl Default for UsersQuery {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl Drop for UsersQuery {
    fn drop(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}
