//! Mutually-exclusive option groups.
//!
//! Each interactive card/button group on the form (mood, age, style,
//! length, plan, ...) is one [`SelectionGroup`]: an ordered list of options
//! of which at most one is active. Groups are created once when the form is
//! initialized and live for the page session; clicking an option activates
//! it and deactivates every other one in the same group.

use serde::{Deserialize, Serialize};

/// One selectable option inside a group.
///
/// The payload value is the explicit `value` when the option carries one,
/// otherwise the trimmed display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub value: Option<String>,
    pub label: String,
}

impl OptionItem {
    /// An option identified by its display text alone.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: None,
            label: label.into(),
        }
    }

    /// An option with an explicit stable value independent of its label.
    pub fn with_value(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            label: label.into(),
        }
    }

    /// The value this option contributes to the order payload.
    pub fn effective_value(&self) -> &str {
        self.value.as_deref().unwrap_or(self.label.trim())
    }
}

/// A named group of options with at most one active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionGroup {
    key: String,
    options: Vec<OptionItem>,
    active: Option<usize>,
}

impl SelectionGroup {
    /// Bind a group to its options. An empty option list is a valid state
    /// (the group is simply not present on this page) reported by
    /// [`SelectionGroup::is_empty`]; every operation on an empty group is a
    /// no-op.
    pub fn attach(key: impl Into<String>, options: Vec<OptionItem>) -> Self {
        let key = key.into();
        if options.is_empty() {
            log::warn!("no options found for selection group {key:?}");
        }
        Self {
            key,
            options,
            active: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn options(&self) -> &[OptionItem] {
        &self.options
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Activate the option at `index`, deactivating every other one.
    /// Clicking the already-active option changes nothing; an out-of-range
    /// index is ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.active = Some(index);
        } else {
            log::debug!(
                "ignoring selection of option {index} in group {:?} ({} options)",
                self.key,
                self.options.len()
            );
        }
    }

    /// Activate the option whose effective value is `value`. Returns false
    /// when no option matches.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self
            .options
            .iter()
            .position(|option| option.effective_value() == value)
        {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => {
                log::warn!("no option {value:?} in selection group {:?}", self.key);
                false
            }
        }
    }

    /// Value of the active option. `None` until the user picks one, which
    /// is the expected state before any interaction.
    pub fn active_value(&self) -> Option<&str> {
        self.active
            .and_then(|index| self.options.get(index))
            .map(OptionItem::effective_value)
    }
}

/// Ordered registry of the form's selection groups, keyed by group key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    groups: Vec<SelectionGroup>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group, replacing any previous group with the same key.
    pub fn insert(&mut self, group: SelectionGroup) {
        match self.groups.iter_mut().find(|g| g.key() == group.key()) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
    }

    pub fn group(&self, key: &str) -> Option<&SelectionGroup> {
        self.groups.iter().find(|g| g.key() == key)
    }

    pub fn group_mut(&mut self, key: &str) -> Option<&mut SelectionGroup> {
        self.groups.iter_mut().find(|g| g.key() == key)
    }

    /// Activate `value` in the group named `key`. An unknown key is a
    /// markup mismatch: the operation is skipped and logged.
    pub fn select(&mut self, key: &str, value: &str) -> bool {
        match self.group_mut(key) {
            Some(group) => group.select_value(value),
            None => {
                log::warn!("selection for unknown group {key:?}");
                false
            }
        }
    }

    /// Active value of the group named `key`, if the group exists and the
    /// user has picked something.
    pub fn selected(&self, key: &str) -> Option<&str> {
        self.group(key).and_then(SelectionGroup::active_value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectionGroup> {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moods() -> SelectionGroup {
        SelectionGroup::attach(
            "mood",
            vec![
                OptionItem::new("Happy"),
                OptionItem::new("Sad"),
                OptionItem::new("Energetic"),
            ],
        )
    }

    #[test]
    fn nothing_active_before_first_click() {
        let group = moods();
        assert_eq!(group.active_value(), None);
        assert_eq!(group.active_index(), None);
    }

    #[test]
    fn most_recent_click_wins() {
        let mut group = moods();
        group.select(0);
        assert_eq!(group.active_value(), Some("Happy"));
        group.select(1);
        assert_eq!(group.active_value(), Some("Sad"));

        let active: Vec<usize> = (0..3).filter(|i| group.is_active(*i)).collect();
        assert_eq!(active, vec![1]);
    }

    #[test]
    fn reclicking_the_active_option_changes_nothing() {
        let mut group = moods();
        group.select(2);
        let before = group.clone();
        group.select(2);
        assert_eq!(group, before);
    }

    #[test]
    fn at_most_one_active_after_any_click_sequence() {
        let mut group = moods();
        for index in [2, 0, 0, 1, 2, 1] {
            group.select(index);
            assert!((0..3).filter(|i| group.is_active(*i)).count() <= 1);
        }
        assert_eq!(group.active_value(), Some("Sad"));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut group = moods();
        group.select(0);
        group.select(17);
        assert_eq!(group.active_value(), Some("Happy"));
    }

    #[test]
    fn explicit_value_preferred_over_label() {
        let mut group = SelectionGroup::attach(
            "videoLength",
            vec![
                OptionItem::with_value("30", "30 seconds"),
                OptionItem::with_value("60", "  1 minute  "),
            ],
        );
        group.select(1);
        assert_eq!(group.active_value(), Some("60"));
    }

    #[test]
    fn label_fallback_is_trimmed() {
        let mut group =
            SelectionGroup::attach("mood", vec![OptionItem::new("  Epic  ")]);
        group.select(0);
        assert_eq!(group.active_value(), Some("Epic"));
    }

    #[test]
    fn empty_group_is_valid_and_inert() {
        let mut group = SelectionGroup::attach("pricing", Vec::new());
        assert!(group.is_empty());
        group.select(0);
        assert!(!group.select_value("basic"));
        assert_eq!(group.active_value(), None);
    }

    #[test]
    fn select_by_value_matches_effective_values() {
        let mut group = moods();
        assert!(group.select_value("Sad"));
        assert_eq!(group.active_value(), Some("Sad"));
        assert!(!group.select_value("Furious"));
        assert_eq!(group.active_value(), Some("Sad"));
    }

    #[test]
    fn set_routes_to_the_named_group() {
        let mut set = SelectionSet::new();
        set.insert(moods());
        set.insert(SelectionGroup::attach(
            "pricing",
            vec![OptionItem::with_value("basic", "Basic")],
        ));

        assert!(set.select("mood", "Happy"));
        assert!(set.select("pricing", "basic"));
        assert_eq!(set.selected("mood"), Some("Happy"));
        assert_eq!(set.selected("pricing"), Some("basic"));
    }

    #[test]
    fn unknown_group_key_is_skipped() {
        let mut set = SelectionSet::new();
        set.insert(moods());
        assert!(!set.select("plan", "basic"));
        assert_eq!(set.selected("plan"), None);
    }

    #[test]
    fn inserting_a_group_twice_replaces_it() {
        let mut set = SelectionSet::new();
        set.insert(moods());
        set.select("mood", "Happy");
        set.insert(moods());
        assert_eq!(set.selected("mood"), None);
        assert_eq!(set.iter().count(), 1);
    }
}
