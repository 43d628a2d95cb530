//! Step navigation for the order wizard.
//!
//! One [`StepWizard`] value owns the current step for a page session.
//! Navigation controls call [`StepWizard::go_to_step`] (or the
//! `next`/`previous` wrappers); requests outside the valid range are
//! ignored, so generically-built controls can over-ask without breaking
//! the form.

use serde::{Deserialize, Serialize};

/// Bounded step state machine. Steps are numbered `1..=total_steps`.
///
/// Invariants: `current_step` stays inside `1..=total_steps`, exactly one
/// step is visible (the current one), and the progress fraction is
/// `(current_step - 1) / (total_steps - 1)` clamped to `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepWizard {
    total_steps: u32,
    current_step: u32,
}

impl StepWizard {
    /// A wizard positioned on step 1. A zero step count is a configuration
    /// mistake and is treated as a single-step form.
    pub fn new(total_steps: u32) -> Self {
        if total_steps == 0 {
            log::warn!("wizard configured with zero steps, using one");
        }
        Self {
            total_steps: total_steps.max(1),
            current_step: 1,
        }
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// Jump directly to `step`, as the numbered indicator controls do.
    /// Out-of-range requests leave the wizard where it is. Returns the
    /// current step after the move.
    pub fn go_to_step(&mut self, step: u32) -> u32 {
        if (1..=self.total_steps).contains(&step) {
            self.current_step = step;
        } else {
            log::debug!(
                "ignoring navigation to step {step} (valid range 1..={})",
                self.total_steps
            );
        }
        self.current_step
    }

    /// Advance one step. A no-op on the last step.
    pub fn next(&mut self) -> u32 {
        self.go_to_step(self.current_step.saturating_add(1))
    }

    /// Go back one step. A no-op on the first step.
    pub fn previous(&mut self) -> u32 {
        self.go_to_step(self.current_step.saturating_sub(1))
    }

    /// Whether panel `step` should be shown. True for exactly one value.
    pub fn is_visible(&self, step: u32) -> bool {
        step == self.current_step
    }

    pub fn is_first(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last(&self) -> bool {
        self.current_step == self.total_steps
    }

    /// Completed share of the form: 0.0 on the first step, 1.0 on the
    /// last. A single-step form is always complete.
    pub fn progress_fraction(&self) -> f64 {
        if self.total_steps <= 1 {
            return 1.0;
        }
        let fraction =
            f64::from(self.current_step - 1) / f64::from(self.total_steps - 1);
        fraction.clamp(0.0, 1.0)
    }

    /// Progress as a 0-100 percentage for width-based indicators.
    pub fn progress_percent(&self) -> f64 {
        self.progress_fraction() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_wizard_starts_on_step_one() {
        let wizard = StepWizard::new(5);
        assert_eq!(wizard.current_step(), 1);
        assert!(wizard.is_visible(1));
        assert!(wizard.is_first());
        assert_eq!(wizard.progress_percent(), 0.0);
    }

    #[test]
    fn go_to_step_moves_within_bounds() {
        let mut wizard = StepWizard::new(5);
        assert_eq!(wizard.go_to_step(3), 3);
        assert_eq!(wizard.current_step(), 3);
        assert!(wizard.is_visible(3));
        assert!(!wizard.is_visible(1));
    }

    #[test]
    fn out_of_range_requests_are_ignored() {
        let mut wizard = StepWizard::new(5);
        wizard.go_to_step(3);
        assert_eq!(wizard.go_to_step(0), 3);
        assert_eq!(wizard.go_to_step(6), 3);
        assert_eq!(wizard.go_to_step(u32::MAX), 3);
        assert_eq!(wizard.current_step(), 3);
    }

    #[test]
    fn exactly_one_panel_visible_after_any_jump() {
        let mut wizard = StepWizard::new(5);
        for target in [2, 5, 1, 4] {
            wizard.go_to_step(target);
            let visible: Vec<u32> = (1..=5).filter(|s| wizard.is_visible(*s)).collect();
            assert_eq!(visible, vec![target]);
        }
    }

    #[test]
    fn progress_is_proportional_to_step_index() {
        let mut wizard = StepWizard::new(5);
        assert_eq!(wizard.progress_fraction(), 0.0);
        wizard.go_to_step(3);
        assert_eq!(wizard.progress_fraction(), 0.5);
        wizard.go_to_step(5);
        assert_eq!(wizard.progress_fraction(), 1.0);
        assert_eq!(wizard.progress_percent(), 100.0);
    }

    #[test]
    fn next_and_previous_saturate_at_the_ends() {
        let mut wizard = StepWizard::new(5);
        assert_eq!(wizard.previous(), 1);

        for expected in 2..=5 {
            assert_eq!(wizard.next(), expected);
        }
        assert_eq!(wizard.next(), 5);
        assert!(wizard.is_last());
        assert_eq!(wizard.progress_percent(), 100.0);

        assert_eq!(wizard.previous(), 4);
    }

    #[test]
    fn last_step_is_not_absorbing() {
        let mut wizard = StepWizard::new(2);
        wizard.next();
        assert!(wizard.is_last());
        assert_eq!(wizard.previous(), 1);
    }

    #[test]
    fn zero_step_configuration_degrades_to_one() {
        let wizard = StepWizard::new(0);
        assert_eq!(wizard.total_steps(), 1);
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.progress_fraction(), 1.0);
    }
}
