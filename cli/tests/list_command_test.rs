//! CLI integration tests using mock servers.
//!
//! Most tests run the list command and its page computation in-process
//! against a wiremock users endpoint; the `--json` output test spawns the
//! `roster` binary to check what lands on stdout.

use roster_business::{BusinessConfig, SortOrder, fetch_users};
use roster_cli::commands::{ListOptions, page_report, render_footer, run_list};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// 25 users; emails count down as ids go up.
fn users_body() -> serde_json::Value {
    let users: Vec<_> = (1..=25u64)
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
    serde_json::json!({ "users": users, "total": 25, "skip": 0, "limit": 25 })
}

async fn users_server(template: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(template)
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test]
async fn test_second_page_of_even_last_names_sorted_desc() {
    let server = users_server(ResponseTemplate::new(200).set_body_json(users_body())).await;
    let config = BusinessConfig::new(format!("{}/users", server.uri()));
    let list = fetch_users(&config).await.unwrap();

    let options = ListOptions {
        last_name: Some("EVEN".to_owned()),
        sort_email: Some(SortOrder::Descending),
        page: 1,
        ..ListOptions::default()
    };
    let report = page_report(&list.users, &options).unwrap();

    // Even ids 2..=24, descending email puts the smallest id first.
    let ids: Vec<u64> = report.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24]);
    assert_eq!(render_footer(&report), "Page 1 of 1 (12 matching users)");
}

#[tokio::test]
async fn test_out_of_range_page_is_clamped() {
    let server = users_server(ResponseTemplate::new(200).set_body_json(users_body())).await;
    let config = BusinessConfig::new(format!("{}/users", server.uri()));
    let list = fetch_users(&config).await.unwrap();

    let options = ListOptions {
        page: 9,
        ..ListOptions::default()
    };
    let report = page_report(&list.users, &options).unwrap();

    assert_eq!(report.page, 2);
    assert_eq!(report.range, 13..25);
    assert_eq!(report.rows.first().map(|r| r.id), Some(14));
}

#[tokio::test]
async fn test_run_list_succeeds_in_json_mode() {
    let server = users_server(ResponseTemplate::new(200).set_body_json(users_body())).await;
    let config = BusinessConfig::new(format!("{}/users", server.uri()));

    run_list(&config, &ListOptions::default(), true)
        .await
        .expect("list should succeed");
}

#[tokio::test]
async fn test_run_list_reports_server_error() {
    let server = users_server(ResponseTemplate::new(500)).await;
    let url = format!("{}/users", server.uri());

    let err = run_list(&BusinessConfig::new(url.clone()), &ListOptions::default(), false)
        .await
        .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains(&url), "error should name the URL: {message}");
    assert!(message.contains("500"), "error should name the status: {message}");
}

#[tokio::test]
async fn test_json_output_stays_parseable_when_page_is_clamped() {
    let server = users_server(ResponseTemplate::new(200).set_body_json(users_body())).await;

    let output = tokio::process::Command::new(env!("CARGO_BIN_EXE_roster"))
        .args(["--url", &format!("{}/users", server.uri())])
        .args(["--json", "--page", "99"])
        .env_remove("RUST_LOG")
        .output()
        .await
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let ids: Vec<u64> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, (14..=25).collect::<Vec<u64>>());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Page 99 does not exist, showing page 2"));
}
