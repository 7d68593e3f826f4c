//! List users command.

use std::ops::Range;

use anyhow::{Context as _, Result};
use roster_business::{
    BusinessConfig, ColumnKey, FilterCommand, SortOrder, TableCommand, User, UsersTableState,
    fetch_users,
};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::{debug, info, instrument};

use crate::output::Output;

/// Search, sort and page requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub sort_email: Option<SortOrder>,
    /// 1-based; clamped to the last page.
    pub page: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            first_name: None,
            last_name: None,
            sort_email: None,
            page: 1,
        }
    }
}

impl ListOptions {
    /// Table state with the requested searches and sort applied.
    fn table_state(&self) -> Result<UsersTableState> {
        let mut table = UsersTableState::new();

        let searches = [
            (ColumnKey::FirstName, &self.first_name),
            (ColumnKey::LastName, &self.last_name),
        ];
        for (column, value) in searches {
            if let Some(value) = value {
                table.handle(
                    TableCommand::Filter(FilterCommand::Apply {
                        column,
                        value: value.clone(),
                    }),
                    &[],
                )?;
            }
        }

        if let Some(order) = self.sort_email {
            table.handle(
                TableCommand::SetSort {
                    column: ColumnKey::Email,
                    order: Some(order),
                },
                &[],
            )?;
        }

        Ok(table)
    }
}

/// One printed row. Absent values print as empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    #[tabled(rename = "ID")]
    pub id: u64,
    #[tabled(rename = "First Name")]
    pub first_name: String,
    #[tabled(rename = "Last Name")]
    pub last_name: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Image")]
    pub image: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        let text = |column: ColumnKey| column.text(user).map(Into::into).unwrap_or_default();
        Self {
            id: user.id,
            first_name: text(ColumnKey::FirstName),
            last_name: text(ColumnKey::LastName),
            name: text(ColumnKey::Name),
            email: text(ColumnKey::Email),
            image: text(ColumnKey::Image),
        }
    }
}

/// The page that gets printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub rows: Vec<UserRow>,
    pub page: usize,
    pub page_count: usize,
    pub filtered_total: usize,
    pub range: Range<usize>,
}

/// Filters, sorts and pages `users` as the desktop table would.
pub fn page_report(users: &[User], options: &ListOptions) -> Result<PageReport> {
    let mut table = options.table_state()?;
    table.handle(TableCommand::GoToPage(options.page), users)?;

    let view = table.view(users);
    debug!(
        filtered = view.filtered_total,
        page = view.page,
        "Computed page"
    );

    Ok(PageReport {
        rows: view.rows.iter().copied().map(UserRow::from).collect(),
        page: view.page,
        page_count: view.page_count,
        filtered_total: view.filtered_total,
        range: view.range,
    })
}

pub fn render_table(rows: &[UserRow]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// `Page x of y (N matching users)`.
pub fn render_footer(report: &PageReport) -> String {
    format!(
        "Page {} of {} ({} matching users)",
        report.page, report.page_count, report.filtered_total
    )
}

#[instrument(skip_all, name = "list", fields(url = config.users_url(), page = options.page))]
pub async fn run_list(config: &BusinessConfig, options: &ListOptions, json: bool) -> Result<()> {
    let out = Output::new();

    let list = fetch_users(config)
        .await
        .with_context(|| format!("Failed to load users from {}", config.users_url()))?;
    info!(count = list.users.len(), total = ?list.total, "Fetched users");

    let report = page_report(&list.users, options)?;

    // Stdout carries only the rows, so `--json` stays parseable.
    if options.page > report.page_count {
        Output::stderr().warning(format!(
            "Page {} does not exist, showing page {}",
            options.page, report.page
        ));
    }

    if json {
        let body = serde_json::to_string_pretty(&report.rows).context("Failed to encode rows")?;
        out.print(body);
        return Ok(());
    }

    if report.rows.is_empty() {
        out.dim("No users match.");
    } else {
        out.newline();
        out.print(render_table(&report.rows));
    }
    out.footer(render_footer(&report));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<User> {
        vec![
            User::builder()
                .id(1)
                .first_name("Ann")
                .last_name("Lee")
                .email("b@x.com")
                .build(),
            User::builder()
                .id(2)
                .first_name("Bob")
                .last_name("Ann")
                .email("a@x.com")
                .build(),
        ]
    }

    #[test]
    fn test_first_name_search_only_matches_first_name() {
        let options = ListOptions {
            first_name: Some("ann".to_owned()),
            ..ListOptions::default()
        };
        let report = page_report(&scenario(), &options).unwrap();
        let ids: Vec<u64> = report.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(render_footer(&report), "Page 1 of 1 (1 matching users)");
    }

    #[test]
    fn test_sort_email_ascending() {
        let options = ListOptions {
            sort_email: Some(SortOrder::Ascending),
            ..ListOptions::default()
        };
        let report = page_report(&scenario(), &options).unwrap();
        let ids: Vec<u64> = report.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_row_from_user_with_missing_fields() {
        let user = User::builder().id(7).last_name("Lee").build();
        let row = UserRow::from(&user);
        assert_eq!(row.first_name, "");
        assert_eq!(row.name, " Lee");
        assert_eq!(row.email, "");
    }

    #[test]
    fn test_render_table_has_all_headers() {
        let rows: Vec<UserRow> = scenario().iter().map(UserRow::from).collect();
        let table = render_table(&rows);
        for header in ["ID", "First Name", "Last Name", "Name", "Email", "Image"] {
            assert!(table.contains(header), "missing header {header}");
        }
        assert!(table.contains("b@x.com"));
    }
}
