//! Domain state for the Muvio multi-step order form.
//!
//! This crate holds the framework-free core of the order wizard:
//!
//! - `wizard` - bounded step navigation and progress ([`StepWizard`])
//! - `selection` - mutually-exclusive option groups ([`SelectionGroup`],
//!   [`SelectionSet`])
//! - `form` - the form description supplied by the rendering layer
//!   ([`FormSpec`]) and the collected order aggregate ([`OrderSelection`])
//!
//! Nothing in here touches the DOM. The `web_app` crate wraps these types
//! in reactive signals and event handlers; `web_common` turns the collected
//! [`OrderSelection`] into the `/create` wire payload.

mod form;
mod selection;
mod wizard;

pub use form::*;
pub use selection::*;
pub use wizard::*;
