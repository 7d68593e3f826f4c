//! Per-column search.
//!
//! [`matches`] is the predicate: case-insensitive substring containment on the
//! column's string value, never matching an absent value. [`FilterState`] holds
//! the search string of every filterable column and changes only through
//! [`FilterCommand`]s, each of which is idempotent.

use std::collections::BTreeMap;

use log::debug;
use thiserror::Error;

use crate::column::ColumnKey;
use crate::user::User;

/// Does `user`'s value in `column` contain `needle`, ignoring case?
///
/// Lowercasing is plain `str::to_lowercase`: no locale rules, no normalization.
pub fn matches(column: ColumnKey, needle: &str, user: &User) -> bool {
    column
        .text(user)
        .is_some_and(|value| value.to_lowercase().contains(&needle.to_lowercase()))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("column {0} is not filterable")]
    NotFilterable(ColumnKey),
}

/// Where a column's search UI stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPhase {
    /// Nothing typed, nothing applied.
    Inactive,
    /// The typed text differs from what is applied.
    Editing,
    /// A search is applied and the input shows it.
    Applied,
}

/// Search input and applied value of one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilter {
    draft: String,
    applied: Option<String>,
}

impl ColumnFilter {
    pub fn phase(&self) -> FilterPhase {
        match &self.applied {
            Some(applied) if *applied == self.draft => FilterPhase::Applied,
            None if self.draft.is_empty() => FilterPhase::Inactive,
            _ => FilterPhase::Editing,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn applied(&self) -> Option<&str> {
        self.applied.as_deref()
    }
}

/// Commands the view issues against [`FilterState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCommand {
    /// Replace the typed text without applying it.
    Edit { column: ColumnKey, input: String },
    /// Apply `value` as the column's search. An empty value clears it.
    Apply { column: ColumnKey, value: String },
    /// Drop the column's search and empty its input.
    Clear { column: ColumnKey },
}

impl FilterCommand {
    pub fn column(&self) -> ColumnKey {
        match self {
            Self::Edit { column, .. } | Self::Apply { column, .. } | Self::Clear { column } => {
                *column
            }
        }
    }
}

/// Search state of every filterable column. Applied searches combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    filters: BTreeMap<ColumnKey, ColumnFilter>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: ColumnKey) -> Option<&ColumnFilter> {
        self.filters.get(&column)
    }

    pub fn phase(&self, column: ColumnKey) -> FilterPhase {
        self.get(column)
            .map(ColumnFilter::phase)
            .unwrap_or(FilterPhase::Inactive)
    }

    pub fn applied(&self, column: ColumnKey) -> Option<&str> {
        self.get(column).and_then(ColumnFilter::applied)
    }

    /// Runs `command`. Returns true when the set of applied searches changed.
    pub fn apply_command(&mut self, command: FilterCommand) -> Result<bool, FilterError> {
        let column = command.column();
        ensure_filterable(column)?;

        let changed = match command {
            FilterCommand::Edit { input, .. } => {
                self.filters.entry(column).or_default().draft = input;
                false
            }
            FilterCommand::Apply { value, .. } if value.is_empty() => self.clear_column(column),
            FilterCommand::Apply { value, .. } => {
                let filter = self.filters.entry(column).or_default();
                filter.draft.clone_from(&value);
                let changed = filter.applied.as_deref() != Some(value.as_str());
                filter.applied = Some(value);
                changed
            }
            FilterCommand::Clear { .. } => self.clear_column(column),
        };

        if changed {
            debug!("Filter on {column} changed: {:?}", self.applied(column));
        }

        Ok(changed)
    }

    pub fn edit(&mut self, column: ColumnKey, input: impl Into<String>) -> Result<bool, FilterError> {
        self.apply_command(FilterCommand::Edit {
            column,
            input: input.into(),
        })
    }

    pub fn apply(&mut self, column: ColumnKey, value: impl Into<String>) -> Result<bool, FilterError> {
        self.apply_command(FilterCommand::Apply {
            column,
            value: value.into(),
        })
    }

    /// Applies whatever is currently typed for `column`.
    pub fn apply_draft(&mut self, column: ColumnKey) -> Result<bool, FilterError> {
        let value = self
            .get(column)
            .map(|f| f.draft.clone())
            .unwrap_or_default();
        self.apply(column, value)
    }

    pub fn clear(&mut self, column: ColumnKey) -> Result<bool, FilterError> {
        self.apply_command(FilterCommand::Clear { column })
    }

    fn clear_column(&mut self, column: ColumnKey) -> bool {
        self.filters
            .remove(&column)
            .is_some_and(|filter| filter.applied.is_some())
    }

    /// Applied searches, in column order.
    pub fn active(&self) -> impl Iterator<Item = (ColumnKey, &str)> + '_ {
        self.filters
            .iter()
            .filter_map(|(column, filter)| filter.applied().map(|value| (*column, value)))
    }

    pub fn has_active(&self) -> bool {
        self.active().next().is_some()
    }

    /// True if `user` passes every applied search.
    pub fn matches(&self, user: &User) -> bool {
        self.active()
            .all(|(column, needle)| matches(column, needle, user))
    }
}

fn ensure_filterable(column: ColumnKey) -> Result<(), FilterError> {
    if column.is_filterable() {
        Ok(())
    } else {
        Err(FilterError::NotFilterable(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann_and_bob() -> Vec<User> {
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

    fn ids<'a>(users: impl IntoIterator<Item = &'a User>) -> Vec<u64> {
        users.into_iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let user = User::builder().id(1).first_name("Annabel").build();

        assert!(matches(ColumnKey::FirstName, "ann", &user));
        assert!(matches(ColumnKey::FirstName, "NAB", &user));
        assert!(matches(ColumnKey::FirstName, "annabel", &user));
        assert!(!matches(ColumnKey::FirstName, "annabelle", &user));
        assert!(!matches(ColumnKey::FirstName, "bel ", &user));
    }

    #[test]
    fn test_empty_needle_matches_present_values() {
        let user = User::builder().id(1).first_name("").build();
        assert!(matches(ColumnKey::FirstName, "", &user));
    }

    #[test]
    fn test_absent_value_never_matches() {
        let user = User::builder().id(1).last_name("Lee").build();

        for needle in ["", "a", "lee"] {
            assert!(!matches(ColumnKey::FirstName, needle, &user));
        }
    }

    #[test]
    fn test_non_ascii_lowercase() {
        let user = User::builder().id(1).last_name("ÖZTÜRK").build();
        assert!(matches(ColumnKey::LastName, "öztürk", &user));
        assert!(matches(ColumnKey::LastName, "Tür", &user));
    }

    #[test]
    fn test_first_name_filter_ignores_last_name() {
        let users = ann_and_bob();
        let mut state = FilterState::new();
        state.apply(ColumnKey::FirstName, "ann").unwrap();

        let hits: Vec<_> = users.iter().filter(|u| state.matches(u)).collect();
        assert_eq!(ids(hits), vec![1]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let users = ann_and_bob();
        let mut state = FilterState::new();
        state.apply(ColumnKey::LastName, "ann").unwrap();
        state.apply(ColumnKey::FirstName, "b").unwrap();

        let hits: Vec<_> = users.iter().filter(|u| state.matches(u)).collect();
        assert_eq!(ids(hits), vec![2]);

        state.apply(ColumnKey::FirstName, "ann").unwrap();
        assert!(users.iter().all(|u| !state.matches(u)));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let users = ann_and_bob();
        let mut state = FilterState::new();

        assert_eq!(state.apply(ColumnKey::FirstName, "o"), Ok(true));
        let once: Vec<_> = ids(users.iter().filter(|u| state.matches(u)));

        assert_eq!(state.apply(ColumnKey::FirstName, "o"), Ok(false));
        let twice: Vec<_> = ids(users.iter().filter(|u| state.matches(u)));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = FilterState::new();
        let column = ColumnKey::LastName;
        assert_eq!(state.phase(column), FilterPhase::Inactive);

        state.edit(column, "le").unwrap();
        assert_eq!(state.phase(column), FilterPhase::Editing);
        assert_eq!(state.applied(column), None);

        assert_eq!(state.apply_draft(column), Ok(true));
        assert_eq!(state.phase(column), FilterPhase::Applied);
        assert_eq!(state.applied(column), Some("le"));

        // Typing again keeps the old search applied until confirmed.
        state.edit(column, "lee").unwrap();
        assert_eq!(state.phase(column), FilterPhase::Editing);
        assert_eq!(state.applied(column), Some("le"));

        assert_eq!(state.clear(column), Ok(true));
        assert_eq!(state.phase(column), FilterPhase::Inactive);
        assert_eq!(state.get(column), None);

        assert_eq!(state.clear(column), Ok(false));
    }

    #[test]
    fn test_clear_while_editing_reports_no_change() {
        let mut state = FilterState::new();
        state.edit(ColumnKey::FirstName, "bo").unwrap();

        assert_eq!(state.clear(ColumnKey::FirstName), Ok(false));
        assert_eq!(state.phase(ColumnKey::FirstName), FilterPhase::Inactive);
    }

    #[test]
    fn test_apply_empty_value_clears() {
        let mut state = FilterState::new();
        state.apply(ColumnKey::FirstName, "ann").unwrap();

        assert_eq!(state.apply(ColumnKey::FirstName, ""), Ok(true));
        assert!(!state.has_active());
    }

    #[test]
    fn test_rejects_non_filterable_columns() {
        let mut state = FilterState::new();

        for column in [ColumnKey::Id, ColumnKey::Name, ColumnKey::Email, ColumnKey::Image] {
            assert_eq!(
                state.apply(column, "x"),
                Err(FilterError::NotFilterable(column))
            );
            assert!(state.edit(column, "x").is_err());
        }
        assert!(!state.has_active());
    }
}
