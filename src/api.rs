use log::info;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{AppError, Result};

/// Decode failures (bad or truncated JSON) are reported apart from transport
/// failures; everything else, including non-2xx statuses, is transport.
fn classify(url: &str, err: reqwest::Error) -> AppError {
    if err.is_decode() {
        AppError::Decode {
            url: url.to_string(),
            source: err,
        }
    } else {
        AppError::Network {
            url: url.to_string(),
            source: err,
        }
    }
}

/// GET a JSON collection from the backend.
pub async fn fetch_collection<T: DeserializeOwned>(
    http_client: &Client,
    url: &str,
) -> Result<Vec<T>> {
    info!("Fetching collection from {}", url);
    let response = http_client
        .get(url)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(|err| classify(url, err))?;
    response.json().await.map_err(|err| classify(url, err))
}

/// POST a JSON payload and decode the created record out of the answer.
pub async fn submit_record<B: Serialize, T: DeserializeOwned>(
    http_client: &Client,
    url: &str,
    payload: &B,
) -> Result<T> {
    info!("Submitting record to {}", url);
    let response = http_client
        .post(url)
        .json(payload)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(|err| classify(url, err))?;
    response.json().await.map_err(|err| classify(url, err))
}

/// DELETE a record; the backend answers with a status only.
pub async fn delete_record(http_client: &Client, url: &str) -> Result<()> {
    info!("Deleting record at {}", url);
    http_client
        .delete(url)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(|err| classify(url, err))?;
    Ok(())
}
