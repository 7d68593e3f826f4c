use std::time::Duration;

use egui_kittest::Harness;
use roster_business::TableCommand;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// How long the tests give a mocked request to complete.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 200;

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// App pointed at `{mock_server}/users`; the caller mounts the mocks.
    pub fn new(mock_server: MockServer) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let state = State::test(format!("{}/users", mock_server.uri()));
        let app = RosterApp::new(state);
        // Tall enough for a full page of rows plus the footer.
        let harness = Harness::builder()
            .with_size(egui::vec2(1024.0, 1100.0))
            .build_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    /// App whose users endpoint answers with `template`.
    pub async fn with_response(template: ResponseTemplate) -> Self {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        Self::new(mock_server)
    }

    pub async fn with_users(count: u64) -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(users_body(count))).await
    }
}

/// Steps once, lets the request task run, then steps until the result is shown.
pub async fn yield_wait_for_network(harness: &mut Harness<'_, RosterApp>, wait_ms: u64) {
    harness.step();
    tokio::time::sleep(Duration::from_millis(wait_ms)).await;
    for _ in 0..5 {
        harness.step();
    }
}

/// Runs `command` against the loaded users, as a click in the table would.
#[allow(unused)]
pub fn handle(harness: &mut Harness<'_, RosterApp>, command: TableCommand) {
    let state = harness.state_mut().state_mut();
    let users = state
        .query
        .result()
        .users()
        .expect("users should be loaded before table commands");
    state
        .table
        .handle(command, users)
        .expect("table command should be accepted");
}

/// A dummyjson-shaped body with users `1..=count`.
///
/// Emails count down as ids go up, so an ascending email sort reverses the ids.
pub fn users_body(count: u64) -> serde_json::Value {
    let users: Vec<_> = (1..=count)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "firstName": format!("First{id:02}"),
                "lastName": if id % 2 == 0 { "Even" } else { "Odd" },
                "email": format!("user{:02}@x.com", 100 - id),
                "image": format!("https://dummyjson.com/icon/user{id}/128"),
            })
        })
        .collect();

    serde_json::json!({
        "users": users,
        "total": count,
        "skip": 0,
        "limit": count
    })
}
