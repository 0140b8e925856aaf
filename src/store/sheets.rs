//! Google Sheets implementation of the record store.
//!
//! Talks to the Sheets v4 REST API with a bearer token. Reads fetch the
//! whole worksheet and drop the header row; writes append a single row with
//! `valueInputOption=RAW` so cell values are stored verbatim. The service
//! serializes concurrent appends on its side - this client adds no
//! coordination of its own.

use super::{Collection, RecordStore, Row};
use crate::errors::{Error, Result};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Record store backed by one Google spreadsheet, one worksheet per
/// collection.
#[derive(Debug, Clone)]
pub struct SheetsStore {
    client: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    token: String,
}

/// Response shape of `GET .../values/{range}`. `values` is absent entirely
/// for an empty worksheet.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsStore {
    /// Creates a store for the given spreadsheet.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(spreadsheet_id: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Store {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
            spreadsheet_id: spreadsheet_id.into(),
            token: token.into(),
        })
    }

    /// Overrides the API base URL (for tests against a local stub).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Ensures every collection's worksheet exists with its header row.
    ///
    /// Safe to call on every startup: existing worksheets are left alone.
    ///
    /// # Errors
    /// Returns an error if a missing worksheet cannot be created.
    pub async fn initialize(&self) -> Result<()> {
        for collection in Collection::ALL {
            match self.read_values(collection).await {
                Ok(values) if !values.is_empty() => {}
                Ok(_) => {
                    // Worksheet exists but is empty - write the header.
                    self.append_values(collection, header_row(collection)).await?;
                    info!(collection = collection.title(), "wrote header row");
                }
                Err(_) => {
                    self.add_worksheet(collection).await?;
                    self.append_values(collection, header_row(collection)).await?;
                    info!(collection = collection.title(), "created worksheet");
                }
            }
        }
        Ok(())
    }

    async fn read_values(&self, collection: Collection) -> Result<Vec<Vec<String>>> {
        let url = format!(
            "{}/{}/values/{}",
            self.base_url,
            self.spreadsheet_id,
            collection.title()
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| Error::Store {
                message: format!("read request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read response body".to_string());
            return Err(Error::Store {
                message: format!("read rejected: HTTP {status}: {body}"),
            });
        }

        let range: ValueRange = response.json().await.map_err(|e| Error::Store {
            message: format!("unexpected read payload: {e}"),
        })?;

        Ok(range.values)
    }

    async fn append_values(&self, collection: Collection, row: Row) -> Result<()> {
        let url = format!(
            "{}/{}/values/{}:append?valueInputOption=RAW",
            self.base_url,
            self.spreadsheet_id,
            collection.title()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "values": [row] }))
            .send()
            .await
            .map_err(|e| Error::Store {
                message: format!("append request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read response body".to_string());
            return Err(Error::Store {
                message: format!("append rejected: HTTP {status}: {body}"),
            });
        }

        debug!(collection = collection.title(), "appended row");
        Ok(())
    }

    async fn add_worksheet(&self, collection: Collection) -> Result<()> {
        let url = format!("{}/{}:batchUpdate", self.base_url, self.spreadsheet_id);

        let body = json!({
            "requests": [{
                "addSheet": { "properties": { "title": collection.title() } }
            }]
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Store {
                message: format!("addSheet request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read response body".to_string());
            return Err(Error::Store {
                message: format!("addSheet rejected: HTTP {status}: {text}"),
            });
        }

        Ok(())
    }
}

fn header_row(collection: Collection) -> Row {
    collection.header().iter().map(ToString::to_string).collect()
}

impl RecordStore for SheetsStore {
    async fn append(&self, collection: Collection, row: Row) -> Result<()> {
        self.append_values(collection, row).await
    }

    async fn read_all(&self, collection: Collection) -> Result<Vec<Row>> {
        let mut values = self.read_values(collection).await?;
        // First row is the header.
        if !values.is_empty() {
            values.remove(0);
        }
        Ok(values)
    }
}
