//! Form behavior: field-group toggling, submission, and result rendering.
//!
//! Page elements are reached only through the traits defined here, so the
//! same handlers drive the terminal UI and the tests.

mod render;
mod submission;
mod visibility;

pub use render::{RESULT_HEADING, RenderedResult, ResultLine, render_result};
pub use submission::{
    ALERT_MESSAGE, Alerter, ResultView, SubmissionHandler, SubmitOutcome, present_outcome,
};
pub use visibility::{FieldGroupView, Visibility, on_system_type_change};
