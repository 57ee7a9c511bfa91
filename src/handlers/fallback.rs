use crate::error::ApiError;

/// Answers every unmatched path, and matched paths with an unsupported method
pub async fn not_found_handler() -> ApiError {
    tracing::debug!("No route matched");
    ApiError::RouteNotFound
}
