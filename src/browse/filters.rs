//! Filter selections for the listing browser.
//!
//! Three independent toggle groups (house type, region, guest count) plus the
//! stay-duration constraint. Each group serializes to the comma-joined string
//! the listings API expects, containing exactly the labels whose toggle is on,
//! in declaration order.

use serde::{Deserialize, Serialize};

/// House-type labels, in the order they appear in the sidebar.
pub const HOUSE_TYPES: [&str; 4] = [
    "Private room",
    "Entire home/apt",
    "Hotel room",
    "Shared room",
];

/// Region labels (short forms; the listings API maps them to full names).
pub const REGIONS: [&str; 5] = ["Central", "East", "North", "North-East", "West"];

/// Guest-count buckets.
pub const ACCOMMODATES: [&str; 4] = ["1-2", "3-4", "5-6", "7 +"];

/// The house type a short-term stay is restricted to.
pub const SHORT_TERM_HOUSE_TYPE: &str = "Hotel room";

/// An ordered set of label toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGroup {
    entries: Vec<(&'static str, bool)>,
}

impl FilterGroup {
    /// Build a group with every toggle on.
    #[must_use]
    pub fn all_on(labels: &[&'static str]) -> Self {
        Self {
            entries: labels.iter().map(|l| (*l, true)).collect(),
        }
    }

    /// Build a group from the subset of labels that should be on.
    #[must_use]
    pub fn from_selected(labels: &[&'static str], selected: &[String]) -> Self {
        Self {
            entries: labels
                .iter()
                .map(|l| (*l, selected.iter().any(|s| s == l)))
                .collect(),
        }
    }

    /// Turn a single label on or off. Unknown labels are ignored.
    pub fn set(&mut self, label: &str, on: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| *l == label) {
            entry.1 = on;
        }
    }

    /// Whether the given label is toggled on.
    #[must_use]
    pub fn is_on(&self, label: &str) -> bool {
        self.entries.iter().any(|(l, on)| *l == label && *on)
    }

    /// Iterate `(label, on)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.entries.iter().copied()
    }

    /// Comma-joined labels whose toggle is on, in declaration order.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .filter(|(_, on)| *on)
            .map(|(l, _)| *l)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Stay-duration choice constraining allowable house types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StayDuration {
    /// Under three months.
    ShortTerm,
    /// Three months or longer.
    #[default]
    LongTerm,
}

impl StayDuration {
    /// Form value for round-tripping through fragment requests.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShortTerm => "short-term",
            Self::LongTerm => "long-term",
        }
    }
}

/// The complete sidebar selection: three groups plus the duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub house_types: FilterGroup,
    pub regions: FilterGroup,
    pub accommodates: FilterGroup,
    pub duration: StayDuration,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            house_types: FilterGroup::all_on(&HOUSE_TYPES),
            regions: FilterGroup::all_on(&REGIONS),
            accommodates: FilterGroup::all_on(&ACCOMMODATES),
            duration: StayDuration::LongTerm,
        }
    }
}

impl FilterSelection {
    /// Rebuild a selection from the raw multi-value form parameters.
    ///
    /// The duration constraint is enforced here so no caller can submit a
    /// short-term selection with anything but the hotel-room type.
    #[must_use]
    pub fn from_params(
        types: &[String],
        regions: &[String],
        accommodates: &[String],
        duration: StayDuration,
    ) -> Self {
        let mut selection = Self {
            house_types: FilterGroup::from_selected(&HOUSE_TYPES, types),
            regions: FilterGroup::from_selected(&REGIONS, regions),
            accommodates: FilterGroup::from_selected(&ACCOMMODATES, accommodates),
            duration,
        };
        selection.enforce_duration();
        selection
    }

    /// Apply the stay-duration invariant: short-term forces the house-type
    /// group to exactly the hotel-room entry.
    pub fn enforce_duration(&mut self) {
        if self.duration == StayDuration::ShortTerm {
            for label in HOUSE_TYPES {
                self.house_types.set(label, label == SHORT_TERM_HOUSE_TYPE);
            }
        }
    }

    /// Whether the house-type checkboxes are read-only.
    #[must_use]
    pub fn house_types_locked(&self) -> bool {
        self.duration == StayDuration::ShortTerm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_contains_exactly_the_on_labels_in_order() {
        let mut group = FilterGroup::all_on(&REGIONS);
        group.set("East", false);
        group.set("West", false);
        assert_eq!(group.to_query_string(), "Central,North,North-East");

        let none = FilterGroup::from_selected(&REGIONS, &[]);
        assert_eq!(none.to_query_string(), "");
    }

    #[test]
    fn declaration_order_survives_out_of_order_selection() {
        let selected = vec!["West".to_string(), "Central".to_string()];
        let group = FilterGroup::from_selected(&REGIONS, &selected);
        assert_eq!(group.to_query_string(), "Central,West");
    }

    #[test]
    fn unknown_labels_are_ignored() {
        let mut group = FilterGroup::all_on(&ACCOMMODATES);
        group.set("9000+", false);
        assert_eq!(group.to_query_string(), "1-2,3-4,5-6,7 +");

        let selected = vec!["3-4".to_string(), "penthouse".to_string()];
        let group = FilterGroup::from_selected(&ACCOMMODATES, &selected);
        assert_eq!(group.to_query_string(), "3-4");
    }

    #[test]
    fn short_term_forces_hotel_room_only() {
        let all: Vec<String> = HOUSE_TYPES.iter().map(ToString::to_string).collect();
        let selection = FilterSelection::from_params(&all, &[], &[], StayDuration::ShortTerm);

        assert_eq!(selection.house_types.to_query_string(), "Hotel room");
        assert!(selection.house_types_locked());
    }

    #[test]
    fn long_term_leaves_house_types_alone() {
        let picked = vec!["Shared room".to_string()];
        let selection = FilterSelection::from_params(&picked, &[], &[], StayDuration::LongTerm);

        assert_eq!(selection.house_types.to_query_string(), "Shared room");
        assert!(!selection.house_types_locked());
    }

    #[test]
    fn default_selection_has_everything_on() {
        let selection = FilterSelection::default();
        assert_eq!(
            selection.house_types.to_query_string(),
            HOUSE_TYPES.join(",")
        );
        assert_eq!(selection.regions.to_query_string(), REGIONS.join(","));
        assert_eq!(
            selection.accommodates.to_query_string(),
            ACCOMMODATES.join(",")
        );
    }
}
