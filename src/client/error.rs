/// Errors that can occur while requesting a calculation.
///
/// The user sees the same alert for every variant; the variant only shows up
/// in the log.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The server answered with a status outside 200–299.
    #[error("server error: {0}")]
    Server(u16),

    /// The request could not be sent or the response body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not a valid calculation result.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}
