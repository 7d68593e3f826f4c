use roster_business::{BusinessConfig, ColumnKey, UsersQuery, UsersTableState};
use tokio::runtime::Handle;

/// The main application state.
///
/// The users request runs on the tokio runtime behind `runtime`; everything
/// else is owned by the UI thread.
pub struct State {
    /// The users request and its latest result.
    pub query: UsersQuery,
    /// Search, sort and page of the users table.
    pub table: UsersTableState,
    /// Column whose search popup is open.
    pub open_filter: Option<ColumnKey>,
    runtime: Handle,
    started: bool,
}

impl State {
    pub fn new(config: BusinessConfig, runtime: Handle) -> Self {
        Self {
            query: UsersQuery::new(config),
            table: UsersTableState::new(),
            open_filter: None,
            runtime,
            started: false,
        }
    }

    /// State pointed at `users_url`, running requests on the current tokio runtime.
    ///
    /// Must be called from within a runtime (e.g. a `#[tokio::test]`).
    pub fn test(users_url: String) -> Self {
        Self::new(BusinessConfig::new(users_url), Handle::current())
    }

    /// Starts the first request. Later calls are no-ops; use [`Self::reload`].
    pub fn ensure_loaded(&mut self, ctx: &egui::Context) {
        if !self.started {
            self.started = true;
            self.reload(ctx);
        }
    }

    /// Re-fetches the users. The view state (search, sort, page) is kept.
    pub fn reload(&mut self, ctx: &egui::Context) {
        self.started = true;
        let ctx = ctx.clone();
        self.query
            .dispatch_with(&self.runtime, move || ctx.request_repaint());
    }

    /// Applies a finished request, if any. Returns `true` when the result changed.
    pub fn poll(&mut self) -> bool {
        self.query.poll()
    }
}
