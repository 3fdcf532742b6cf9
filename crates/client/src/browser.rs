//! Catalog browsing state: one fetch, reactive filters, single expansion.
//!
//! [`CatalogBrowser`] models the browse page. It fetches the full entry
//! list exactly once, derives the visible subset through the pure filter in
//! `aniop-core`, and tracks which single entry (if any) has its inline
//! player expanded.

use aniop_core::filter::{self, FilterSet};
use aniop_core::model::VideoEntry;
use aniop_core::store::RecordStore;

/// Page-level state for the catalog listing.
pub struct CatalogBrowser {
    all_entries: Vec<VideoEntry>,
    /// The four filter predicates. Mutate freely; `visible()` recomputes.
    pub filter: FilterSet,
    expanded: Option<String>,
    is_loading: bool,
    has_mounted: bool,
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBrowser {
    /// A fresh browser: nothing fetched, loading until [`load`](Self::load)
    /// completes, nothing expanded.
    pub fn new() -> Self {
        Self {
            all_entries: Vec::new(),
            filter: FilterSet::default(),
            expanded: None,
            is_loading: true,
            has_mounted: false,
        }
    }

    /// Mark the page as running in an interactive client context.
    ///
    /// The inline player depends on interactive rendering; until this is
    /// called, [`can_mount_player`](Self::can_mount_player) is always false.
    pub fn mark_mounted(&mut self) {
        self.has_mounted = true;
    }

    /// Fetch the full entry list. Exactly one attempt: on failure the list
    /// stays empty and the error is logged -- no retry, no user-facing
    /// error state.
    pub async fn load(&mut self, source: &dyn RecordStore) {
        self.is_loading = true;
        match source.list_entries().await {
            Ok(entries) => {
                tracing::debug!(count = entries.len(), "Fetched catalog entries");
                self.all_entries = entries;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch catalog entries");
            }
        }
        self.is_loading = false;
    }

    /// Whether the initial fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The last fetched entry set, unfiltered.
    pub fn all_entries(&self) -> &[VideoEntry] {
        &self.all_entries
    }

    /// The entries passing the current filter, in fetch order.
    pub fn visible(&self) -> Vec<&VideoEntry> {
        filter::compute_visible(&self.all_entries, &self.filter)
    }

    /// Year choices for the selector: distinct years over the FULL entry
    /// set, newest first, unaffected by the active filters.
    pub fn year_options(&self) -> Vec<i32> {
        filter::year_options(&self.all_entries)
    }

    /// The id of the entry whose inline player is expanded, if any.
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// Whether `id` is the currently expanded entry.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    /// Toggle the inline player of `id`.
    ///
    /// Expanding one entry implicitly collapses whichever entry was
    /// expanded before -- at most one player is ever open.
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    /// Whether `entry`'s inline player should be mounted right now.
    ///
    /// Requires an interactive client, the entry being the expanded one,
    /// and a plausibly absolute media URL. Nothing else gates playback.
    pub fn can_mount_player(&self, entry: &VideoEntry) -> bool {
        self.has_mounted
            && self.is_expanded(&entry.id)
            && entry
                .fields
                .url
                .as_deref()
                .is_some_and(|url| url.starts_with("http"))
    }
}
