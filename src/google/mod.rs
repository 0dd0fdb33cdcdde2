mod auth;

use crate::config::GoogleConfig;
use crate::drive::DriveClient;
use crate::error::{AppError, Result};
use crate::sheets::SheetsClient;
use google_drive3::api::DriveHub;
use google_sheets4::api::Sheets;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use tracing::{info, instrument};

pub(crate) type Connector = HttpsConnector<HttpConnector>;

/// Service account credentials bound to one client per API (drive v3, sheets v4).
pub struct Session {
    drive: DriveClient,
    sheets: SheetsClient,
}

impl Session {
    #[instrument(name = "Loading service account", skip_all, fields(key_file = ?config.key_file))]
    pub async fn new(config: &GoogleConfig) -> Result<Self> {
        let account = auth::from_service_account_file(&config.key_file).await?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()?
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(connector);

        let drive = DriveClient::new(DriveHub::new(client.clone(), account.auth.clone()));
        let sheets = SheetsClient::new(Sheets::new(client, account.auth));

        info!(service_account = %account.email, "Session ready");

        Ok(Self { drive, sheets })
    }

    pub fn drive(&self) -> &DriveClient {
        &self.drive
    }

    pub fn sheets(&self) -> &SheetsClient {
        &self.sheets
    }
}

/// Convert a client library error into `AppError::Remote`, keeping the HTTP status if known.
pub(crate) fn api_error(operation: &str, err: google_drive3::Error) -> AppError {
    let status = match &err {
        google_drive3::Error::Failure(response) => Some(response.status().as_u16()),
        google_drive3::Error::BadRequest(body) => body["error"]["code"]
            .as_u64()
            .and_then(|code| u16::try_from(code).ok()),
        _ => None,
    };
    AppError::remote(operation, status, err.to_string())
}
