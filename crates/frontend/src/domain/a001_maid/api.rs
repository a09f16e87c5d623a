//! REST calls for maid records.
//!
//! Every function returns the raw wire shape; normalize with
//! `contracts::domain::a001_maid::normalize_all` before filtering.

use crate::shared::api_utils::{self, read_json, send, send_json};
use chrono::Local;
use contracts::domain::a001_maid::{MaidDto, MaidWriteDto};
use contracts::shared::api_error::ApiError;
use contracts::shared::search::SearchRequest;
use serde::{Deserialize, Serialize};

/// The list endpoints answer with a bare array; some deployments wrap it.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordList {
    Bare(Vec<MaidDto>),
    Wrapped { data: Vec<MaidDto> },
}

impl RecordList {
    fn into_vec(self) -> Vec<MaidDto> {
        match self {
            RecordList::Bare(items) | RecordList::Wrapped { data: items } => items,
        }
    }
}

#[derive(Serialize)]
struct SearchParams<'a> {
    query: &'a str,
}

fn record_path(id: &str) -> String {
    format!("/records/{}", urlencoding::encode(id))
}

pub async fn fetch_maids() -> Result<Vec<MaidDto>, ApiError> {
    let response = send(api_utils::get("/records")).await?;
    Ok(read_json::<RecordList>(response).await?.into_vec())
}

/// Server-side substring search on name/id. A blank query never reaches the
/// search endpoint.
pub async fn search_maids(query: &str) -> Result<Vec<MaidDto>, ApiError> {
    let query = query.trim();
    if query.is_empty() {
        return fetch_maids().await;
    }
    let params = serde_qs::to_string(&SearchParams { query })
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = send(api_utils::get(&format!("/records/search?{}", params))).await?;
    Ok(read_json::<RecordList>(response).await?.into_vec())
}

/// Run whatever the search controller dispatched.
pub async fn run_search(request: &SearchRequest) -> Result<Vec<MaidDto>, ApiError> {
    match request {
        SearchRequest::FetchAll => fetch_maids().await,
        SearchRequest::Search(query) => search_maids(query).await,
    }
}

/// Successful writes may answer with the stored record or with an empty 2xx.
async fn read_optional_record(response: gloo_net::http::Response) -> Option<MaidDto> {
    let text = response.text().await.ok()?;
    if text.trim().is_empty() {
        return None;
    }
    serde_json::from_str(&text).ok()
}

pub async fn create_maid(dto: MaidWriteDto) -> Result<Option<MaidDto>, ApiError> {
    let dto = dto.normalized();
    dto.validate(Local::now().date_naive())?;
    let response = send_json(api_utils::post("/records"), &dto).await?;
    log::debug!("created maid record {}", dto.name);
    Ok(read_optional_record(response).await)
}

pub async fn update_maid(id: &str, dto: MaidWriteDto) -> Result<Option<MaidDto>, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::Validation("Record id is required".to_string()));
    }
    let dto = dto.normalized();
    dto.validate(Local::now().date_naive())?;
    let response = send_json(api_utils::put(&record_path(id)), &dto).await?;
    log::debug!("updated maid record {}", id);
    Ok(read_optional_record(response).await)
}

pub async fn delete_maid(id: &str) -> Result<(), ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::Validation("Record id is required".to_string()));
    }
    send(api_utils::delete(&record_path(id))).await?;
    log::debug!("deleted maid record {}", id);
    Ok(())
}
