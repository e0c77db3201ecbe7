use thiserror::Error;

/// Failures surfaced by the weather provider layer.
///
/// These travel inside `anyhow::Error`; callers that need to branch on the
/// cause can `downcast_ref::<ProviderError>()`.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(
        "No OpenWeatherMap API key configured.\n\
         Hint: run `weather configure` or set the OWM_API_KEY environment variable."
    )]
    MissingApiKey,

    #[error("City name must not be empty")]
    EmptyCity,

    #[error("OpenWeatherMap {endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("OpenWeatherMap {endpoint} response is malformed: {reason}")]
    MalformedPayload {
        endpoint: &'static str,
        reason: String,
    },
}

/// Shorten a response body for inclusion in an error message.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
