//! ui/viewdata.rs — the closed set of render states.
//!
//! One sidebar entry per view: overview, demographics, seven category views
//! and six pair-comparison views. Dispatch is an exhaustive match on this
//! enum; labels exist only at the selector edge.

use crate::data::record::{Category, GroupPair};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Overview,
    Subjects,
    Category(Category),
    Pair(GroupPair),
}

impl View {
    /// Every view in sidebar order: 2 fixed entries + 7 categories + 6 pairs.
    pub fn all() -> Vec<View> {
        let mut views = vec![View::Overview, View::Subjects];
        views.extend(Category::ALL.into_iter().map(View::Category));
        views.extend(GroupPair::ALL.into_iter().map(View::Pair));
        views
    }

    pub fn label(self) -> String {
        match self {
            View::Overview => "Overview".to_string(),
            View::Subjects => "Subject Characteristics".to_string(),
            View::Category(category) => category.label().to_string(),
            View::Pair(pair) => pair.label(),
        }
    }

    /// Defensive parse for callers that select by label. The sidebar only
    /// offers valid labels, so `None` means the input came from elsewhere.
    pub fn from_label(label: &str) -> Option<View> {
        Self::all().into_iter().find(|view| view.label() == label)
    }
}
