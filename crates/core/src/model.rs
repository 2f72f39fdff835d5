use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do record as the remote store sees it.
///
/// The serde names pin the persistence-boundary field names (`userUid`,
/// `timestamp`); everything else in the workspace uses the Rust names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub favourite: bool,
    #[serde(rename = "userUid")]
    pub owner_uid: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Fields a client supplies when creating a task. The store assigns the
/// id and the creation timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub owner_uid: String,
}

/// Partial update carried by a toggle mutation. `None` fields are left
/// untouched by the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub completed: Option<bool>,
    pub favourite: Option<bool>,
}

impl TaskPatch {
    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            favourite: None,
        }
    }

    pub fn favourite(value: bool) -> Self {
        Self {
            completed: None,
            favourite: Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_none() && self.favourite.is_none()
    }
}

/// The signed-in account the visible task collection is keyed off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: String,
    pub display_name: String,
}

/// Mutually exclusive list filter, applied after the title search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Favourite,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [
        FilterMode::All,
        FilterMode::Completed,
        FilterMode::Favourite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Completed => "completed",
            FilterMode::Favourite => "favourite",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Completed => "Completed",
            FilterMode::Favourite => "Favourite",
        }
    }

    pub fn retains(&self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Completed => task.completed,
            FilterMode::Favourite => task.favourite,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FilterMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "all" | "none" => Ok(FilterMode::All),
            "completed" | "done" => Ok(FilterMode::Completed),
            "favourite" | "favorite" => Ok(FilterMode::Favourite),
            other => Err(anyhow!(
                "Unknown filter '{}': expected all|completed|favourite",
                other
            )),
        }
    }
}
