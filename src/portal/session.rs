use crate::error::AuthError;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Certificate, Client as HttpClient, Response};

/// The single multiplexed endpoint behind every portal form.
pub const CAPRICORN_PATH: &str = "/app/capricorn";

/// Text the portal renders (with a 200 status) when it refuses a login.
pub const LOGIN_FAILURE_MARKER: &str = "We encountered a problem";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Immutable login material for one portal account.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub base_url: String,
    pub email: String,
    pub password: String,
}

/// A cookie-bearing portal session, valid for one pipeline run.
///
/// The cookie jar lives inside the HTTP client, so dropping the session
/// discards every cookie the portal handed out.
pub struct Session {
    http_client: HttpClient,
    base_url: String,
}

impl Session {
    /// Builds a session with an empty cookie jar, trusting `root_certificates`
    /// on top of the platform roots.
    pub fn new(
        credentials: &Credentials,
        root_certificates: &[Certificate],
    ) -> Result<Self, AuthError> {
        let mut builder = HttpClient::builder().cookie_store(true);
        for certificate in root_certificates {
            builder = builder.add_root_certificate(certificate.clone());
        }
        Ok(Self {
            http_client: builder.build()?,
            base_url: credentials.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Logs in with the account email and password.
    ///
    /// The portal answers 200 even for bad credentials, so the body is checked
    /// for the failure marker as well as the status.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let params = [
            ("para", "index"),
            ("password", credentials.password.as_str()),
            ("loginBy", "email"),
            ("accessEmail", credentials.email.as_str()),
            ("password1", credentials.password.as_str()),
            ("rememberMyEmail", "N"),
        ];
        let response = self.post_form(&params).await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(AuthError::rejected(format!("status {}", status)));
        }

        let body = response.text().await?;
        if body.contains(LOGIN_FAILURE_MARKER) {
            return Err(AuthError::rejected("portal reported a login problem"));
        }

        tracing::info!("Login success");
        Ok(())
    }

    /// Posts form parameters to the capricorn endpoint.
    ///
    /// Parameters travel in the query string under a form content type with
    /// an empty body, which is the shape the portal accepts.
    pub(crate) async fn post_form<T>(&self, params: &T) -> reqwest::Result<Response>
    where
        T: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, CAPRICORN_PATH);
        self.http_client
            .post(&url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header("user-agent", "reqwest")
            .query(params)
            .send()
            .await
    }

    /// Posts an empty request to a portal-relative path.
    pub(crate) async fn post_path(&self, path: &str) -> reqwest::Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        self.http_client
            .post(&url)
            .header("user-agent", "reqwest")
            .send()
            .await
    }
}
