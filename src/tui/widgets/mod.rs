//! Reusable TUI widgets.

pub mod alert;
pub mod form;
pub mod result_panel;
pub mod selector;

pub use alert::{AlertState, draw_alert};
pub use form::{FieldGroupPanel, FormField, draw_group};
pub use result_panel::{ResultPanel, draw_result_panel};
pub use selector::{SystemTypeSelector, draw_selector};
