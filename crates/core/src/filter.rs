//! Pure filtering logic for the catalog browser.
//!
//! The browse page recomputes its visible list whenever a filter predicate
//! or the fetched entry set changes. That recomputation is the pure function
//! [`compute_visible`], so it can be exercised directly in tests without a
//! UI harness.

use crate::model::{Season, VideoEntry};

// ---------------------------------------------------------------------------
// Filter predicates
// ---------------------------------------------------------------------------

/// The four browse-page filter predicates.
///
/// All predicates are ANDed; an empty/unset predicate passes every entry.
/// Evaluation order does not matter -- no predicate has side effects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    /// Case-insensitive substring matched against `name` and `song`.
    pub search: String,
    /// Substring matched against the entry kind (e.g. `"OP"`, `"ED"`).
    pub kind: String,
    /// Exact numeric match against the entry year.
    pub year: Option<i32>,
    /// Exact match against the entry season.
    pub season: Option<Season>,
}

impl FilterSet {
    /// Whether `entry` passes all four predicates.
    pub fn matches(&self, entry: &VideoEntry) -> bool {
        self.matches_search(entry)
            && self.matches_kind(entry)
            && self.matches_year(entry)
            && self.matches_season(entry)
    }

    fn matches_search(&self, entry: &VideoEntry) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        entry.fields.name.to_lowercase().contains(&needle)
            || entry
                .fields
                .song
                .as_deref()
                .is_some_and(|song| song.to_lowercase().contains(&needle))
    }

    fn matches_kind(&self, entry: &VideoEntry) -> bool {
        if self.kind.is_empty() {
            return true;
        }
        entry
            .fields
            .kind
            .as_deref()
            .is_some_and(|kind| kind.contains(&self.kind))
    }

    fn matches_year(&self, entry: &VideoEntry) -> bool {
        self.year.is_none_or(|year| entry.fields.year == Some(year))
    }

    fn matches_season(&self, entry: &VideoEntry) -> bool {
        self.season
            .is_none_or(|season| entry.fields.season == Some(season))
    }
}

// ---------------------------------------------------------------------------
// Derived state
// ---------------------------------------------------------------------------

/// Compute the visible subset of `entries` under `filter`.
///
/// Pure and deterministic: same inputs, same output, preserving the input
/// order of the surviving entries.
pub fn compute_visible<'a>(entries: &'a [VideoEntry], filter: &FilterSet) -> Vec<&'a VideoEntry> {
    entries.iter().filter(|entry| filter.matches(entry)).collect()
}

/// The distinct years present in `entries`, newest first.
///
/// Always derived from the full entry set, never the filtered subset, so
/// narrowing other filters cannot remove a year from the selector.
pub fn year_options(entries: &[VideoEntry]) -> Vec<i32> {
    let mut years: Vec<i32> = entries.iter().filter_map(|entry| entry.fields.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VideoFields;

    fn entry(id: &str, name: &str, song: Option<&str>, kind: Option<&str>, year: Option<i32>, season: Option<Season>) -> VideoEntry {
        VideoEntry {
            id: id.into(),
            fields: VideoFields {
                name: name.into(),
                song: song.map(Into::into),
                kind: kind.map(Into::into),
                year,
                season,
                ..Default::default()
            },
        }
    }

    fn sample_entries() -> Vec<VideoEntry> {
        vec![
            entry("1", "Frieren", Some("Yuusha"), Some("OP"), Some(2023), Some(Season::Fall)),
            entry("2", "Bocchi the Rock!", Some("Seishun Complex"), Some("OP"), Some(2022), Some(Season::Fall)),
            entry("3", "Frieren", Some("Anytime Anywhere"), Some("ED"), Some(2023), Some(Season::Fall)),
            entry("4", "Sousou no Frieren", None, Some("OP2"), Some(2024), Some(Season::Winter)),
            entry("5", "Undated Show", None, None, None, None),
        ]
    }

    // -- identity ------------------------------------------------------------

    #[test]
    fn empty_filter_passes_everything() {
        let entries = sample_entries();
        let visible = compute_visible(&entries, &FilterSet::default());
        assert_eq!(visible.len(), entries.len());
    }

    // -- search --------------------------------------------------------------

    #[test]
    fn search_matches_name_case_insensitively() {
        let entries = sample_entries();
        let filter = FilterSet {
            search: "frieren".into(),
            ..Default::default()
        };

        let visible = compute_visible(&entries, &filter);
        let ids: Vec<&str> = visible.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "3", "4"]);
    }

    #[test]
    fn search_matches_song_as_well() {
        let entries = sample_entries();
        let filter = FilterSet {
            search: "seishun".into(),
            ..Default::default()
        };

        let visible = compute_visible(&entries, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn search_excludes_entries_failing_both_fields() {
        let entries = sample_entries();
        let filter = FilterSet {
            search: "nonexistent".into(),
            ..Default::default()
        };

        assert!(compute_visible(&entries, &filter).is_empty());
    }

    #[test]
    fn search_treats_absent_song_as_no_match() {
        // Entry 5 has no song; a search hitting only songs must exclude it.
        let entries = sample_entries();
        let filter = FilterSet {
            search: "anytime".into(),
            ..Default::default()
        };

        let visible = compute_visible(&entries, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "3");
    }

    // -- kind ----------------------------------------------------------------

    #[test]
    fn kind_filter_is_a_substring_match() {
        let entries = sample_entries();
        let filter = FilterSet {
            kind: "OP".into(),
            ..Default::default()
        };

        // "OP" matches both "OP" and "OP2", not "ED".
        let visible = compute_visible(&entries, &filter);
        let ids: Vec<&str> = visible.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "4"]);
    }

    #[test]
    fn kind_filter_excludes_entries_without_a_kind() {
        let entries = sample_entries();
        let filter = FilterSet {
            kind: "OP".into(),
            ..Default::default()
        };

        assert!(!filter.matches(&entries[4]));
    }

    // -- year ----------------------------------------------------------------

    #[test]
    fn year_filter_matches_numerically() {
        let entries = sample_entries();
        let filter = FilterSet {
            year: Some(2023),
            ..Default::default()
        };

        let visible = compute_visible(&entries, &filter);
        assert!(visible.iter().all(|e| e.fields.year == Some(2023)));
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn year_filter_excludes_entries_without_a_year() {
        let entries = sample_entries();
        let filter = FilterSet {
            year: Some(2023),
            ..Default::default()
        };

        assert!(!filter.matches(&entries[4]));
    }

    // -- season --------------------------------------------------------------

    #[test]
    fn season_filter_is_an_exact_match() {
        let entries = sample_entries();
        let filter = FilterSet {
            season: Some(Season::Winter),
            ..Default::default()
        };

        let visible = compute_visible(&entries, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "4");
    }

    // -- conjunction ---------------------------------------------------------

    #[test]
    fn predicates_are_anded() {
        let entries = sample_entries();
        let filter = FilterSet {
            search: "frieren".into(),
            kind: "OP".into(),
            year: Some(2023),
            season: Some(Season::Fall),
            ..Default::default()
        };

        let visible = compute_visible(&entries, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    // -- year options --------------------------------------------------------

    #[test]
    fn year_options_are_distinct_and_newest_first() {
        let entries = sample_entries();
        assert_eq!(year_options(&entries), vec![2024, 2023, 2022]);
    }

    #[test]
    fn year_options_ignore_the_active_filters() {
        // Options come from the full entry set; a narrowing search must not
        // shrink the year selector.
        let entries = sample_entries();
        let filter = FilterSet {
            search: "bocchi".into(),
            ..Default::default()
        };

        let visible = compute_visible(&entries, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(year_options(&entries), vec![2024, 2023, 2022]);
    }

    #[test]
    fn year_options_skip_entries_without_a_year() {
        let entries = vec![entry("1", "A", None, None, None, None)];
        assert!(year_options(&entries).is_empty());
    }
}
