use tracing::{error, info};

use crate::client::{CalculationEndpoint, SubmitError};
use crate::model::{ConfigurationPayload, FormData};

use super::render::{RenderedResult, render_result};

/// The one message users see for any failed request.
pub const ALERT_MESSAGE: &str = "Не вдалося отримати відповідь від сервера.";

/// Outcome of one submission, ready to be presented.
pub type SubmitOutcome = Result<RenderedResult, SubmitError>;

/// Where rendered results go.
pub trait ResultView {
    /// Replaces the displayed result.
    fn set_content(&mut self, result: RenderedResult);
    /// Makes the result visible.
    fn show(&mut self);
}

/// Shows a modal message to the user.
pub trait Alerter {
    fn alert(&mut self, message: &str);
}

/// Turns submitted forms into requests and requests into rendered results.
#[derive(Debug)]
pub struct SubmissionHandler<E> {
    endpoint: E,
}

impl<E: CalculationEndpoint> SubmissionHandler<E> {
    pub fn new(endpoint: E) -> Self {
        Self { endpoint }
    }

    /// Returns the endpoint requests go to.
    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// Builds the payload for `form`, sends it, and renders the response.
    pub async fn submit(&self, form: &FormData) -> SubmitOutcome {
        let payload = ConfigurationPayload::from_form(form);
        info!(?payload, "sending configuration");
        let result = self.endpoint.configure(&payload).await?;
        info!(?result, "received calculation result");
        Ok(render_result(&result))
    }

    /// Runs [`submit`](Self::submit) and presents its outcome.
    pub async fn handle_submit(
        &self,
        form: &FormData,
        view: &mut impl ResultView,
        alerts: &mut impl Alerter,
    ) {
        let outcome = self.submit(form).await;
        present_outcome(outcome, view, alerts);
    }
}

/// Shows a successful result, or alerts and logs a failure.
///
/// On failure the result view is left untouched.
pub fn present_outcome(
    outcome: SubmitOutcome,
    view: &mut impl ResultView,
    alerts: &mut impl Alerter,
) {
    match outcome {
        Ok(rendered) => {
            view.set_content(rendered);
            view.show();
        }
        Err(e) => {
            alerts.alert(ALERT_MESSAGE);
            error!(error = %e, "configuration request failed");
        }
    }
}
