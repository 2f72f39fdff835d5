//! Pure derivation of the visible task slice from the full collection.
//!
//! The pipeline runs in a fixed order — search, filter, paginate — and
//! never reorders: the input collection is already sorted by descending
//! creation time and survivors keep their relative positions.

use crate::model::{FilterMode, Task};

/// Fixed page size for the dashboard list.
pub const TASKS_PER_PAGE: usize = 5;

/// The view-state triple the pipeline is keyed on. Search and filter
/// are independent; changing one never resets the other, and neither
/// resets the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub filter: FilterMode,
    /// 1-indexed. Out-of-range pages degrade to an empty slice.
    pub page: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewQuery {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            filter: FilterMode::All,
            page: 1,
        }
    }

    fn page_or_first(&self) -> usize {
        self.page.max(1)
    }
}

/// One renderable page plus the pager facts derived alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub total_pages: usize,
    pub matching: usize,
}

impl TaskPage {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether the pager control should be rendered at all.
    pub fn needs_pager(&self) -> bool {
        self.matching > TASKS_PER_PAGE
    }
}

/// Derive the visible slice for `query` from the full ordered
/// collection. Pure: identical inputs give identical outputs.
pub fn derive_page(tasks: &[Task], query: &ViewQuery) -> TaskPage {
    let needle = query.search.to_lowercase();
    let matching: Vec<&Task> = tasks
        .iter()
        .filter(|task| needle.is_empty() || task.title.to_lowercase().contains(&needle))
        .filter(|task| query.filter.retains(task))
        .collect();

    let total_pages = matching.len().div_ceil(TASKS_PER_PAGE).max(1);
    let offset = (query.page_or_first() - 1).saturating_mul(TASKS_PER_PAGE);
    let visible = matching
        .iter()
        .skip(offset)
        .take(TASKS_PER_PAGE)
        .map(|task| (*task).clone())
        .collect();

    TaskPage {
        tasks: visible,
        total_pages,
        matching: matching.len(),
    }
}
