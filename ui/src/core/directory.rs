//! Directory of tracked individuals, loaded once at startup.

use std::fmt;
use std::str::FromStr;

use api::{DirectoryEntry, PresenceApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndividualId(pub u32);

impl fmt::Display for IndividualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for IndividualId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(IndividualId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub id: IndividualId,
    pub name: String,
    pub avatar: Option<String>,
}

impl From<DirectoryEntry> for Individual {
    fn from(entry: DirectoryEntry) -> Self {
        Self {
            id: IndividualId(entry.user_id),
            name: entry.name,
            avatar: entry.avatar.filter(|url| !url.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DirectoryState {
    #[default]
    Loading,
    Ready(Vec<Individual>),
    Failed(String),
}

impl DirectoryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DirectoryState::Loading)
    }

    /// Listing to offer in the selection control; empty unless loaded.
    pub fn individuals(&self) -> &[Individual] {
        match self {
            DirectoryState::Ready(list) => list,
            _ => &[],
        }
    }

    pub fn find(&self, id: IndividualId) -> Option<&Individual> {
        self.individuals().iter().find(|individual| individual.id == id)
    }

    /// Resolve a selection-control value (`""` means no selection).
    pub fn lookup(&self, value: &str) -> Option<&Individual> {
        if value.trim().is_empty() {
            return None;
        }
        match value.parse::<IndividualId>() {
            Ok(id) => self.find(id),
            Err(err) => {
                tracing::warn!(value, %err, "selection value is not an individual id");
                None
            }
        }
    }
}

/// Fetch the directory. Failures are folded into [`DirectoryState::Failed`].
pub async fn load_directory<A: PresenceApi>(api: &A) -> DirectoryState {
    match api.fetch_directory().await {
        Ok(entries) => {
            let individuals: Vec<Individual> = entries.into_iter().map(Individual::from).collect();
            tracing::info!(count = individuals.len(), "directory loaded");
            DirectoryState::Ready(individuals)
        }
        Err(err) => {
            tracing::error!(%err, "directory load failed");
            DirectoryState::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiError, ReportKind};
    use futures::executor::block_on;
    use serde_json::Value;

    struct StaticDirectory(Option<Vec<DirectoryEntry>>);

    impl PresenceApi for StaticDirectory {
        async fn fetch_directory(&self) -> Result<Vec<DirectoryEntry>, ApiError> {
            self.0.clone().ok_or(ApiError::Status {
                url: "/api/v1/users".into(),
                status: 500,
            })
        }

        async fn fetch_report(&self, _: ReportKind, _: u32) -> Result<Value, ApiError> {
            Err(ApiError::Unsupported)
        }
    }

    fn entry(user_id: u32, name: &str, avatar: Option<&str>) -> DirectoryEntry {
        DirectoryEntry {
            user_id,
            name: name.into(),
            avatar: avatar.map(str::to_string),
        }
    }

    #[test]
    fn loads_individuals_in_listing_order() {
        let api = StaticDirectory(Some(vec![
            entry(2, "Bob", None),
            entry(1, "Alice", Some("/a.png")),
        ]));

        let state = block_on(load_directory(&api));
        let names: Vec<_> = state.individuals().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Bob", "Alice"]);
        assert_eq!(
            state.find(IndividualId(1)).and_then(|i| i.avatar.as_deref()),
            Some("/a.png")
        );
    }

    #[test]
    fn failure_leaves_an_empty_listing() {
        let state = block_on(load_directory(&StaticDirectory(None)));
        assert!(matches!(state, DirectoryState::Failed(_)));
        assert!(state.individuals().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn blank_avatar_is_treated_as_missing() {
        let individual = Individual::from(entry(3, "Carol", Some("  ")));
        assert_eq!(individual.avatar, None);
    }

    #[test]
    fn lookup_resolves_control_values() {
        let state = DirectoryState::Ready(vec![Individual::from(entry(7, "Dan", None))]);
        assert_eq!(state.lookup("7").map(|i| i.id), Some(IndividualId(7)));
        assert!(state.lookup("").is_none());
        assert!(state.lookup("8").is_none());
        assert!(state.lookup("seven").is_none());
    }
}
