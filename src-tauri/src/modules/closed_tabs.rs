use serde::Serialize;
use std::collections::VecDeque;

use crate::modules::tabs::Tab;

const MAX_CLOSED_TABS: usize = 25;

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClosedTab {
    pub title: String,
    pub url: String,
    pub closed_at: String,
}

impl From<&Tab> for ClosedTab {
    fn from(tab: &Tab) -> Self {
        Self {
            title: tab.title.clone(),
            url: tab.url.clone(),
            closed_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Recently closed tabs, newest at the back.
#[derive(Debug, Default)]
pub struct ClosedTabs {
    tabs: VecDeque<ClosedTab>,
}

impl ClosedTabs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Archives a tab, dropping the oldest entry past the limit.
    pub fn archive(&mut self, tab: &Tab) {
        self.tabs.push_back(ClosedTab::from(tab));
        if self.tabs.len() > MAX_CLOSED_TABS {
            self.tabs.pop_front();
        }
        log::debug!("[ClosedTabs] Archived tab '{}' at URL: {}", tab.title, tab.url);
    }

    /// Retrieves last closed tab (LIFO)
    pub fn pop(&mut self) -> Option<ClosedTab> {
        self.tabs.pop_back()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
