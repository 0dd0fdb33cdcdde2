use crate::error::{AppError, Result};
use hyper_util::client::legacy::connect::HttpConnector;
use std::path::Path;
use tracing::debug;
use yup_oauth2::{
    ServiceAccountAuthenticator, authenticator::Authenticator, hyper_rustls::HttpsConnector,
};

pub(crate) type AuthType = Authenticator<HttpsConnector<HttpConnector>>;

pub(super) struct ServiceAccount {
    pub email: String,
    pub auth: AuthType,
}

/// Build an authenticator from a service account key file.
///
/// No token is requested here; the first API call triggers the exchange.
pub(super) async fn from_service_account_file(path: &Path) -> Result<ServiceAccount> {
    let key = yup_oauth2::read_service_account_key(path)
        .await
        .map_err(|e| {
            AppError::Auth(format!(
                "Failed to read service account key {:?}: {}",
                path, e
            ))
        })?;

    if key.client_email.is_empty() || key.private_key.is_empty() {
        return Err(AppError::Auth(format!(
            "Service account key {:?} is missing client_email or private_key",
            path
        )));
    }

    let email = key.client_email.clone();
    debug!(client_email = %email, "Parsed service account key");

    let auth = ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .map_err(|e| AppError::Auth(format!("Failed to build authenticator: {}", e)))?;

    Ok(ServiceAccount { email, auth })
}
