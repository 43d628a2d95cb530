//! Form description and the collected order aggregate.
//!
//! The set of fields on the order form - which selection groups exist,
//! which inputs are free text, which are add-on toggles - is configuration
//! supplied by the page that renders the form, not something the
//! controllers hardcode. [`FormSpec`] carries that configuration;
//! [`OrderForm`] bundles it with the live navigation and selection state
//! for one page session; [`OrderSelection`] is the on-demand snapshot
//! handed to the submission layer.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{OptionItem, SelectionGroup, SelectionSet, StepWizard};

/// One field of the order form, as declared by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldSpec {
    /// Mutually-exclusive option group rendered as a card/button grid.
    Selection {
        key: String,
        options: Vec<OptionItem>,
    },
    /// Free-form text input.
    FreeText { key: String },
    /// Boolean add-on flag.
    Toggle { key: String },
}

impl FieldSpec {
    pub fn selection(key: impl Into<String>, options: Vec<OptionItem>) -> Self {
        Self::Selection {
            key: key.into(),
            options,
        }
    }

    pub fn free_text(key: impl Into<String>) -> Self {
        Self::FreeText { key: key.into() }
    }

    pub fn toggle(key: impl Into<String>) -> Self {
        Self::Toggle { key: key.into() }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Selection { key, .. } | Self::FreeText { key } | Self::Toggle { key } => key,
        }
    }
}

/// Declarative description of the whole form: step count plus the ordered
/// field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSpec {
    pub steps: u32,
    pub fields: Vec<FieldSpec>,
}

impl FormSpec {
    pub fn new(steps: u32, fields: Vec<FieldSpec>) -> Self {
        Self { steps, fields }
    }

    /// Build the selection-group registry for every `Selection` field.
    pub fn selection_set(&self) -> SelectionSet {
        let mut set = SelectionSet::new();
        for field in &self.fields {
            if let FieldSpec::Selection { key, options } = field {
                set.insert(SelectionGroup::attach(key.clone(), options.clone()));
            }
        }
        set
    }

    fn kind_of(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.key() == key)
    }

    /// The five-step music-video order form shipped with the app. The
    /// rendering layer may hand any other [`FormSpec`] to
    /// [`OrderForm::new`]; this one matches the page contract of the Muvio
    /// order flow.
    pub fn music_video() -> Self {
        Self::new(
            5,
            vec![
                FieldSpec::selection(
                    "mood",
                    vec![
                        OptionItem::new("Happy"),
                        OptionItem::new("Sad"),
                        OptionItem::new("Energetic"),
                        OptionItem::new("Chill"),
                    ],
                ),
                FieldSpec::selection(
                    "age",
                    vec![
                        OptionItem::with_value("kids", "Kids (3-8)"),
                        OptionItem::with_value("teens", "Teens (9-17)"),
                        OptionItem::with_value("adults", "Adults (18+)"),
                        OptionItem::with_value("everyone", "Everyone"),
                    ],
                ),
                FieldSpec::selection(
                    "style",
                    vec![
                        OptionItem::with_value("similar", "Similar to an Artist"),
                        OptionItem::with_value("unique", "My Own Vision"),
                    ],
                ),
                FieldSpec::free_text("artist"),
                FieldSpec::free_text("vision"),
                FieldSpec::selection(
                    "lyricTheme",
                    vec![
                        OptionItem::with_value("love", "Love"),
                        OptionItem::with_value("party", "Party"),
                        OptionItem::with_value("story", "Tell a Story"),
                        OptionItem::with_value("custom", "My Own Lyrics"),
                    ],
                ),
                FieldSpec::free_text("customLyrics"),
                FieldSpec::selection(
                    "videoLength",
                    vec![
                        OptionItem::with_value("30", "30 seconds"),
                        OptionItem::with_value("60", "1 minute"),
                        OptionItem::with_value("180", "3 minutes"),
                    ],
                ),
                FieldSpec::selection(
                    "pricing",
                    vec![
                        OptionItem::with_value("basic", "Basic"),
                        OptionItem::with_value("pro", "Pro"),
                        OptionItem::with_value("premium", "Premium"),
                    ],
                ),
                FieldSpec::toggle("branding"),
                FieldSpec::free_text("brandName"),
            ],
        )
    }
}

/// A value collected from one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Selected option value or free text.
    Text(String),
    /// Add-on toggle state.
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Flag(true) => f.write_str("yes"),
            Self::Flag(false) => f.write_str("no"),
        }
    }
}

/// The collected order: field key to provided value, in form order.
/// Unanswered selection groups and empty text fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSelection {
    fields: Vec<(String, FieldValue)>,
}

impl OrderSelection {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// One page-session's worth of form state: navigation, option groups, and
/// free-text/toggle values. Mutated only from event handlers on the UI
/// thread; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderForm {
    spec: FormSpec,
    wizard: StepWizard,
    selections: SelectionSet,
    texts: HashMap<String, String>,
    toggles: HashMap<String, bool>,
}

impl OrderForm {
    pub fn new(spec: FormSpec) -> Self {
        let wizard = StepWizard::new(spec.steps);
        let selections = spec.selection_set();
        Self {
            spec,
            wizard,
            selections,
            texts: HashMap::new(),
            toggles: HashMap::new(),
        }
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn wizard(&self) -> &StepWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut StepWizard {
        &mut self.wizard
    }

    pub fn selections(&self) -> &SelectionSet {
        &self.selections
    }

    /// Activate `value` in the selection group named `key`.
    pub fn select(&mut self, key: &str, value: &str) -> bool {
        self.selections.select(key, value)
    }

    pub fn selected(&self, key: &str) -> Option<&str> {
        self.selections.selected(key)
    }

    /// Store the current content of the free-text field `key`. Writes to
    /// keys the spec does not declare as free text are skipped.
    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        match self.spec.kind_of(key) {
            Some(FieldSpec::FreeText { .. }) => {
                self.texts.insert(key.to_string(), value.into());
            }
            _ => log::warn!("text input for unknown field {key:?}"),
        }
    }

    pub fn text(&self, key: &str) -> &str {
        self.texts.get(key).map(String::as_str).unwrap_or("")
    }

    /// Flip the add-on toggle `key`. Writes to keys the spec does not
    /// declare as toggles are skipped.
    pub fn set_toggle(&mut self, key: &str, on: bool) {
        match self.spec.kind_of(key) {
            Some(FieldSpec::Toggle { .. }) => {
                self.toggles.insert(key.to_string(), on);
            }
            _ => log::warn!("toggle for unknown field {key:?}"),
        }
    }

    pub fn toggle(&self, key: &str) -> bool {
        self.toggles.get(key).copied().unwrap_or(false)
    }

    /// Snapshot of everything the user has provided so far, in form
    /// order. Unanswered groups, empty text fields and off toggles are
    /// omitted rather than sent as empty values.
    pub fn selection(&self) -> OrderSelection {
        let mut fields = Vec::new();
        for field in &self.spec.fields {
            match field {
                FieldSpec::Selection { key, .. } => {
                    if let Some(value) = self.selections.selected(key) {
                        fields.push((key.clone(), FieldValue::Text(value.to_string())));
                    }
                }
                FieldSpec::FreeText { key } => {
                    let text = self.text(key).trim();
                    if !text.is_empty() {
                        fields.push((key.clone(), FieldValue::Text(text.to_string())));
                    }
                }
                FieldSpec::Toggle { key } => {
                    if self.toggle(key) {
                        fields.push((key.clone(), FieldValue::Flag(true)));
                    }
                }
            }
        }
        OrderSelection { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_form_is_on_step_one_with_nothing_collected() {
        let form = OrderForm::new(FormSpec::music_video());
        assert_eq!(form.wizard().current_step(), 1);
        assert_eq!(form.wizard().progress_percent(), 0.0);
        assert!(form.selection().is_empty());
    }

    #[test]
    fn collected_fields_follow_form_order() {
        let mut form = OrderForm::new(FormSpec::music_video());
        form.select("pricing", "pro");
        form.select("mood", "Happy");
        form.set_text("vision", "neon skyline at dusk");

        let selection = form.selection();
        let keys: Vec<&str> = selection.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["mood", "vision", "pricing"]);
    }

    #[test]
    fn most_recent_mood_click_is_collected() {
        let mut form = OrderForm::new(FormSpec::music_video());
        form.select("mood", "Happy");
        form.select("mood", "Sad");
        assert_eq!(form.selected("mood"), Some("Sad"));
        assert_eq!(
            form.selection().get("mood").and_then(FieldValue::as_text),
            Some("Sad")
        );
    }

    #[test]
    fn video_length_uses_the_explicit_value() {
        let mut form = OrderForm::new(FormSpec::music_video());
        form.select("videoLength", "60");
        assert_eq!(
            form.selection()
                .get("videoLength")
                .and_then(FieldValue::as_text),
            Some("60")
        );
        assert!(form.selection().get("length").is_none());
    }

    #[test]
    fn blank_free_text_is_omitted() {
        let mut form = OrderForm::new(FormSpec::music_video());
        form.set_text("vision", "   ");
        assert!(form.selection().is_empty());

        form.set_text("vision", "  underwater concert  ");
        assert_eq!(
            form.selection().get("vision").and_then(FieldValue::as_text),
            Some("underwater concert")
        );
    }

    #[test]
    fn toggle_appears_only_when_enabled() {
        let mut form = OrderForm::new(FormSpec::music_video());
        assert!(form.selection().get("branding").is_none());

        form.set_toggle("branding", true);
        assert_eq!(
            form.selection().get("branding"),
            Some(&FieldValue::Flag(true))
        );

        form.set_toggle("branding", false);
        assert!(form.selection().get("branding").is_none());
    }

    #[test]
    fn writes_to_undeclared_fields_are_skipped() {
        let mut form = OrderForm::new(FormSpec::music_video());
        form.set_text("mood", "not a text field");
        form.set_toggle("vision", true);
        assert!(form.selection().is_empty());
    }

    #[test]
    fn wizard_walks_to_the_last_step() {
        let mut form = OrderForm::new(FormSpec::music_video());
        for _ in 0..4 {
            form.wizard_mut().next();
        }
        assert_eq!(form.wizard().current_step(), 5);
        assert_eq!(form.wizard().progress_percent(), 100.0);
    }

    #[test]
    fn field_values_hit_the_wire_untagged() {
        let text = FieldValue::Text("Sad".to_string());
        let flag = FieldValue::Flag(true);
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"Sad\"");
        assert_eq!(serde_json::to_string(&flag).unwrap(), "true");
    }

    #[test]
    fn shipped_spec_declares_the_expected_groups() {
        let spec = FormSpec::music_video();
        let set = spec.selection_set();
        for key in ["mood", "age", "style", "lyricTheme", "videoLength", "pricing"] {
            assert!(set.group(key).is_some(), "missing group {key}");
            assert!(!set.group(key).unwrap().is_empty());
        }
        assert!(set.group("length").is_none());
    }
}
