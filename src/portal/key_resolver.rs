//! Resolves the session-scoped download path for the Green Button export.
//!
//! The portal renders a form named `downloadXml` whose `action` attribute is a
//! freshly generated path for the requested date window. That path is only
//! valid inside the session that requested it.

use crate::error::KeyError;
use crate::portal::date_window::DateWindow;
use crate::portal::session::Session;
use scraper::{Html, Selector};

/// Selector for the export form on the key-request page.
pub const DOWNLOAD_FORM_SELECTOR: &str = "[name=\"downloadXml\"]";

/// Opaque, single-use path of a session-scoped feed export.
///
/// Not `Clone`: fetching the feed consumes the key.
#[derive(Debug, Eq, PartialEq)]
pub struct DownloadKey(String);

impl DownloadKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Asks the portal to prepare an hourly consumption export for `window`.
pub async fn request_key(session: &Session, window: &DateWindow) -> Result<DownloadKey, KeyError> {
    let mut params: Vec<(&str, String)> = vec![
        ("para", "greenButtonDownload".to_string()),
        ("downloadConsumption", String::new()),
        ("tab", "GBDL".to_string()),
        ("hourlyOrDaily", "Hourly".to_string()),
    ];
    params.extend(window.form_fields());

    let response = session.post_form(&params).await?;
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(KeyError::Rejected {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    let key = extract_download_key(&body)?;
    tracing::info!("Found download key");
    Ok(key)
}

/// Pulls the export form's action attribute out of the key-request page.
pub fn extract_download_key(html: &str) -> Result<DownloadKey, KeyError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(DOWNLOAD_FORM_SELECTOR)
        .map_err(|_| KeyError::not_found(DOWNLOAD_FORM_SELECTOR))?;

    document
        .select(&selector)
        .next()
        .and_then(|form| form.value().attr("action"))
        .map(str::trim)
        .filter(|action| !action.is_empty())
        .map(|action| DownloadKey(action.to_string()))
        .ok_or_else(|| KeyError::not_found(DOWNLOAD_FORM_SELECTOR))
}
