use crate::error::FetchError;
use crate::portal::key_resolver::DownloadKey;
use crate::portal::session::Session;

/// Downloads the raw Green Button XML behind `key`.
///
/// The key is consumed; a new one must be requested for every run.
pub async fn fetch(session: &Session, key: DownloadKey) -> Result<Vec<u8>, FetchError> {
    let response = session.post_path(key.as_str()).await?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::bad_status(status, body));
    }

    let body = response.bytes().await?;
    tracing::info!("Downloaded XML ({} bytes)", body.len());
    Ok(body.to_vec())
}
