use clap::{Parser, ValueEnum};
use roster_business::{BusinessConfig, SortOrder};

use crate::commands::ListOptions;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Search, sort and page the users list", long_about = None)]
pub struct Cli {
    /// Users endpoint (defaults to https://dummyjson.com/users)
    #[arg(long, env = "ROSTER_USERS_URL")]
    pub url: Option<String>,

    /// Keep users whose first name contains this text (case-insensitive)
    #[arg(long, short = 'f')]
    pub first_name: Option<String>,

    /// Keep users whose last name contains this text (case-insensitive)
    #[arg(long, short = 'l')]
    pub last_name: Option<String>,

    /// Sort by email
    #[arg(long, short = 's', value_enum)]
    pub sort_email: Option<SortArg>,

    /// Page to print, 1-based (13 users per page)
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: usize,

    /// Print the page as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => Self::Ascending,
            SortArg::Desc => Self::Descending,
        }
    }
}

impl Cli {
    /// `--url` wins; otherwise the environment config (or its default).
    pub fn config(&self) -> BusinessConfig {
        match &self.url {
            Some(url) if !url.trim().is_empty() => BusinessConfig::new(url.trim()),
            _ => BusinessConfig::from_env(),
        }
    }

    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            sort_email: self.sort_email.map(SortOrder::from),
            page: self.page,
        }
    }
}
