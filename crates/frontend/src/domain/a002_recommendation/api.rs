use crate::shared::api_utils::{self, read_json, send_json};
use contracts::domain::a002_recommendation::{RecommendationLink, RecommendationRequest};
use contracts::shared::api_error::ApiError;

/// `POST /recommendations`. The request is validated before anything is sent.
pub async fn create_link(request: &RecommendationRequest) -> Result<RecommendationLink, ApiError> {
    request.validate()?;
    let response = send_json(api_utils::post("/recommendations"), request).await?;
    let link: RecommendationLink = read_json(response).await?;
    log::debug!(
        "recommendation link for {} with {} records",
        request.user_id,
        request.maid_ids.len()
    );
    Ok(link)
}
