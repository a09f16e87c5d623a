use serde::{Deserialize, Serialize};

use crate::shared::api_error::ApiError;

/// Body of `POST /recommendations`: a shortlist of maids for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub user_id: String,
    pub maid_ids: Vec<String>,
}

/// Shareable link returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationLink {
    pub url: String,
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl RecommendationRequest {
    /// Trims the user id and drops blank or repeated maid ids, keeping the
    /// admin's selection order.
    pub fn new(user_id: &str, maid_ids: impl IntoIterator<Item = String>) -> Self {
        let mut ids: Vec<String> = Vec::new();
        for id in maid_ids {
            let id = id.trim().to_string();
            if !id.is_empty() && !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self {
            user_id: user_id.trim().to_string(),
            maid_ids: ids,
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.user_id.is_empty() {
            return Err(ApiError::Validation("User is required".to_string()));
        }
        if self.maid_ids.is_empty() {
            return Err(ApiError::Validation(
                "Select at least one maid to recommend".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_dedupes_ids() {
        let req = RecommendationRequest::new(
            " u-7 ",
            vec!["b".to_string(), "a".to_string(), "b".to_string(), " ".to_string()],
        );
        assert_eq!(req.user_id, "u-7");
        assert_eq!(req.maid_ids, vec!["b", "a"]);
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn test_request_validation() {
        let no_user = RecommendationRequest::new("", vec!["a".to_string()]);
        assert_eq!(
            no_user.validate(),
            Err(ApiError::Validation("User is required".into()))
        );

        let no_maids = RecommendationRequest::new("u-1", Vec::new());
        assert!(matches!(no_maids.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_string(&RecommendationRequest::new("u", vec!["m".into()])).unwrap();
        assert_eq!(json, r#"{"userId":"u","maidIds":["m"]}"#);

        let link: RecommendationLink =
            serde_json::from_str(r#"{"url":"https://example.org/r/abc"}"#).unwrap();
        assert_eq!(link.expires_at, None);
    }
}
