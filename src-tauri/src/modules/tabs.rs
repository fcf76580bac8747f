// Tab model - pure logic, no Tauri imports.
// The browser glue owns the webviews; this owns order, labels and the active tab.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{BrowserError, Result};
use crate::modules::layout;

pub const DEFAULT_TAB_TITLE: &str = "New Tab";

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: String,
    pub webview_label: String,
    pub title: String,
    pub url: String,
    pub is_loading: bool,
}

/// Payload of the `update-tabs` event.
#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TabsSnapshot {
    pub tabs: Vec<Tab>,
    pub active_tab_id: Option<String>,
    pub tab_width: f64,
}

#[derive(Debug, Default)]
pub struct TabSet {
    tabs: Vec<Tab>,
    active: Option<String>,
    next_id: u64,
}

impl TabSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn find_by_label(&self, label: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.webview_label == label)
    }

    pub fn active(&self) -> Option<&Tab> {
        let id = self.active.as_deref()?;
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Appends a tab and makes it active.
    pub fn open(&mut self, url: String, title: Option<String>) -> &Tab {
        self.next_id += 1;
        let id = format!("tab-{}", self.next_id);
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TAB_TITLE.to_string());

        self.tabs.push(Tab {
            webview_label: id.clone(),
            id: id.clone(),
            title,
            url,
            is_loading: true,
        });
        self.active = Some(id);

        let last = self.tabs.len() - 1;
        &self.tabs[last]
    }

    /// Makes `id` the active tab. Returns false if it already was.
    pub fn activate(&mut self, id: &str) -> Result<bool> {
        if self.index_of(id).is_none() {
            return Err(BrowserError::UnknownTab(id.to_string()));
        }
        if self.active.as_deref() == Some(id) {
            return Ok(false);
        }
        self.active = Some(id.to_string());
        Ok(true)
    }

    /// Removes the tab at `index`. The last remaining tab is never closed:
    /// that case returns `Ok(None)` and changes nothing.
    pub fn close(&mut self, index: usize) -> Result<Option<Tab>> {
        if index >= self.tabs.len() {
            return Err(BrowserError::TabIndexOutOfRange {
                index,
                len: self.tabs.len(),
            });
        }
        if self.tabs.len() <= 1 {
            return Ok(None);
        }

        let removed = self.tabs.remove(index);
        if self.active.as_deref() == Some(removed.id.as_str()) {
            let next = index.min(self.tabs.len() - 1);
            self.active = Some(self.tabs[next].id.clone());
        }
        Ok(Some(removed))
    }

    /// Drops a tab whose webview never came up. Unlike `close`, this may
    /// empty the set.
    pub fn discard(&mut self, id: &str) -> Option<Tab> {
        let index = self.index_of(id)?;
        let removed = self.tabs.remove(index);
        if self.active.as_deref() == Some(id) {
            self.active = self.tabs.last().map(|t| t.id.clone());
        }
        Some(removed)
    }

    /// Sets the label at `index` to the trimmed `text`.
    /// Blank text is ignored and reported as `Ok(false)`.
    pub fn rename(&mut self, index: usize, text: &str) -> Result<bool> {
        let len = self.tabs.len();
        let tab = self
            .tabs
            .get_mut(index)
            .ok_or(BrowserError::TabIndexOutOfRange { index, len })?;

        let name = text.trim();
        if name.is_empty() {
            return Ok(false);
        }
        tab.title = name.to_string();
        Ok(true)
    }

    /// Mirrors a webview's current URL into its tab. Returns true if it changed.
    pub fn set_url(&mut self, label: &str, url: &str) -> bool {
        match self.tabs.iter_mut().find(|t| t.webview_label == label) {
            Some(tab) if tab.url != url => {
                tab.url = url.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn set_loading(&mut self, label: &str, loading: bool) -> bool {
        match self.tabs.iter_mut().find(|t| t.webview_label == label) {
            Some(tab) if tab.is_loading != loading => {
                tab.is_loading = loading;
                true
            }
            _ => false,
        }
    }

    /// Rebuilds the order from `new_order`. Returns true if the order changed.
    ///
    /// Unknown ids are skipped and tabs missing from `new_order` are appended,
    /// so a stale order from the toolbar never drops a tab.
    pub fn reorder(&mut self, new_order: &[String]) -> bool {
        if self.tabs.is_empty() || new_order.is_empty() {
            return false;
        }

        let old_order: Vec<String> = self.tabs.iter().map(|t| t.id.clone()).collect();
        let mut tab_map: HashMap<String, Tab> =
            self.tabs.drain(..).map(|t| (t.id.clone(), t)).collect();

        let mut reordered = Vec::with_capacity(old_order.len());
        for id in new_order {
            if let Some(tab) = tab_map.remove(id) {
                reordered.push(tab);
            }
        }

        // Keep leftovers in their previous relative order
        for id in &old_order {
            if let Some(tab) = tab_map.remove(id) {
                reordered.push(tab);
            }
        }

        let changed = reordered.iter().map(|t| &t.id).ne(old_order.iter());
        self.tabs = reordered;
        changed
    }

    pub fn snapshot(&self, strip_width: f64) -> TabsSnapshot {
        TabsSnapshot {
            tabs: self.tabs.clone(),
            active_tab_id: self.active.clone(),
            tab_width: layout::tab_width(strip_width, self.tabs.len()),
        }
    }
}
