//! Reactive handle to the order form, provided through Leptos context.

use leptos::prelude::*;
use leptos::task::spawn_local;

use order_core::{FormSpec, OptionItem, OrderForm, OrderSelection};
use web_common::{CreateOrderRequest, SubmitOutcome};

use crate::api;

/// Signal bundle shared by every component of the wizard.
///
/// All navigation and selection state lives in one [`OrderForm`] value;
/// components mutate it synchronously from their event handlers. The only
/// asynchronous operation is [`OrderFormManager::submit`], which keeps the
/// submit control disabled while exactly one request is in flight.
#[derive(Clone, Copy)]
pub struct OrderFormManager {
    form: RwSignal<OrderForm>,
    pub is_submitting: ReadSignal<bool>,
    set_is_submitting: WriteSignal<bool>,
    pub submit_result: ReadSignal<Option<SubmitOutcome>>,
    set_submit_result: WriteSignal<Option<SubmitOutcome>>,
}

impl OrderFormManager {
    pub fn new(spec: FormSpec) -> Self {
        let (is_submitting, set_is_submitting) = signal(false);
        let (submit_result, set_submit_result) = signal(None);
        Self {
            form: RwSignal::new(OrderForm::new(spec)),
            is_submitting,
            set_is_submitting,
            submit_result,
            set_submit_result,
        }
    }

    // ===== Navigation =====

    pub fn current_step(&self) -> u32 {
        self.form.with(|form| form.wizard().current_step())
    }

    /// Fixed at construction; safe to read untracked.
    pub fn total_steps(&self) -> u32 {
        self.form.with_untracked(|form| form.wizard().total_steps())
    }

    pub fn is_step_visible(&self, step: u32) -> bool {
        self.form.with(|form| form.wizard().is_visible(step))
    }

    pub fn is_first_step(&self) -> bool {
        self.form.with(|form| form.wizard().is_first())
    }

    pub fn is_last_step(&self) -> bool {
        self.form.with(|form| form.wizard().is_last())
    }

    pub fn progress_percent(&self) -> f64 {
        self.form.with(|form| form.wizard().progress_percent())
    }

    pub fn go_to_step(&self, step: u32) {
        self.form.update(|form| {
            form.wizard_mut().go_to_step(step);
        });
    }

    pub fn next(&self) {
        self.form.update(|form| {
            form.wizard_mut().next();
        });
    }

    pub fn previous(&self) {
        self.form.update(|form| {
            form.wizard_mut().previous();
        });
    }

    // ===== Selection groups, free text, toggles =====

    /// Options of the group named `key`. Groups are static once the form
    /// is built, so this reads untracked.
    pub fn group_options(&self, key: &str) -> Vec<OptionItem> {
        self.form.with_untracked(|form| {
            form.selections()
                .group(key)
                .map(|group| group.options().to_vec())
                .unwrap_or_default()
        })
    }

    pub fn select(&self, key: &str, value: &str) {
        self.form.update(|form| {
            form.select(key, value);
        });
    }

    pub fn selected(&self, key: &str) -> Option<String> {
        self.form
            .with(|form| form.selected(key).map(str::to_string))
    }

    pub fn is_option_active(&self, key: &str, value: &str) -> bool {
        self.form
            .with(|form| form.selected(key) == Some(value))
    }

    pub fn text(&self, key: &str) -> String {
        self.form.with(|form| form.text(key).to_string())
    }

    pub fn set_text(&self, key: &str, value: String) {
        self.form.update(|form| form.set_text(key, value));
    }

    pub fn toggle(&self, key: &str) -> bool {
        self.form.with(|form| form.toggle(key))
    }

    pub fn set_toggle(&self, key: &str, on: bool) {
        self.form.update(|form| form.set_toggle(key, on));
    }

    /// Snapshot of everything answered so far.
    pub fn selection(&self) -> OrderSelection {
        self.form.with(|form| form.selection())
    }

    // ===== Submission =====

    /// Send the collected order. At most one request is in flight per
    /// control: the flag below disables the initiating button until the
    /// response or failure arrives, and both arms re-enable it so the
    /// user may retry manually.
    pub fn submit(&self) {
        if self.is_submitting.get_untracked() {
            return;
        }

        let order = CreateOrderRequest::new(self.selection());
        let set_is_submitting = self.set_is_submitting;
        let set_submit_result = self.set_submit_result;

        set_is_submitting.set(true);
        set_submit_result.set(None);

        spawn_local(async move {
            let outcome = SubmitOutcome::from(api::create_order(&order).await);
            if let SubmitOutcome::Failed { ref message } = outcome {
                log::warn!("order submission failed: {message}");
            }
            set_submit_result.set(Some(outcome));
            set_is_submitting.set(false);
        });
    }
}
