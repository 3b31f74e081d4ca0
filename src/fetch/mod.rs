//! Outbound read requests.
//!
//! ```text
//! endpoint + param ──→ Url ──→ HttpClient::get ──→ status check ──→ decode
//! ```
//!
//! Every failure along the way is a [`FetchError`]; callers surface it as a
//! message and never propagate it further.

mod client;
mod error;

pub use client::{HttpClient, HttpResponse, ReqwestClient};
pub use error::FetchError;

use reqwest::Url;

use crate::model::{ListItem, ResponseShape};

/// Build the request URL: `{endpoint}` or `{endpoint}/{param}`.
///
/// The parameter is appended as one percent-encoded path segment. A trailing
/// slash on the endpoint is tolerated.
pub fn build_url(endpoint: &str, param: Option<&str>) -> Result<Url, FetchError> {
    let mut url = Url::parse(endpoint).map_err(|e| FetchError::InvalidUrl {
        url: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    if let Some(param) = param {
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl {
                url: endpoint.to_string(),
                reason: "endpoint cannot take a path segment".to_string(),
            })?
            .pop_if_empty()
            .push(param);
    }

    Ok(url)
}

/// Issue one GET and decode the body into items.
pub async fn fetch_items<C>(
    client: &C,
    endpoint: &str,
    param: Option<&str>,
) -> Result<Vec<ListItem>, FetchError>
where
    C: HttpClient + ?Sized,
{
    let url = build_url(endpoint, param)?;
    tracing::debug!(%url, "GET");

    let response = client.get(&url).await?;
    if !response.is_success() {
        return Err(FetchError::HttpStatus {
            status: response.status,
        });
    }

    ResponseShape::for_param(param).decode(&response.body)
}
