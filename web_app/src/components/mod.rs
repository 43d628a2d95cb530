mod option_grid;
mod order_wizard;
mod result_panel;
mod steps;

pub use order_wizard::OrderWizard;

pub(crate) use option_grid::OptionGrid;
pub(crate) use result_panel::ResultPanel;
