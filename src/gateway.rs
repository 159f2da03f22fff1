//! Remote Sync Gateway
//!
//! Access to the remote `/pricescheme` collection. The collection is always
//! replaced wholesale: clear, then one bulk insert.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{SyncError, SyncResult, ValidationError};
use crate::editor::validate_amounts;
use crate::models::{new_id, SchemeEntry, SchemeRow};

/// Remote pricing scheme collection
///
/// Futures are not `Send`: the browser executor is single-threaded.
#[async_trait(?Send)]
pub trait SchemeCollection {
    /// Delete every row. An already empty collection is not an error.
    /// Returns the number of deleted rows when the store reports it.
    async fn clear(&self) -> SyncResult<Option<usize>>;

    /// Insert all rows in one request
    async fn insert(&self, rows: &[SchemeRow]) -> SyncResult<()>;

    /// Read the whole collection in store order
    async fn fetch_all(&self) -> SyncResult<Vec<SchemeRow>>;
}

/// Give every entry a fresh id and a numeric amount
pub fn prepare_rows(entries: &[SchemeEntry]) -> Result<Vec<SchemeRow>, ValidationError> {
    let amounts = validate_amounts(entries)?;
    Ok(entries
        .iter()
        .zip(amounts)
        .map(|(entry, amount)| SchemeRow {
            id: new_id(),
            scheme_type: entry.scheme_type.as_str().to_string(),
            amount,
        })
        .collect())
}

/// Send the whole list as one bulk insert, with fresh ids and numeric
/// amounts. Callers clear the collection first.
pub async fn replace_all<C>(collection: &C, entries: &[SchemeEntry]) -> SyncResult<Vec<SchemeRow>>
where
    C: SchemeCollection + ?Sized,
{
    let rows = prepare_rows(entries)?;
    collection.insert(&rows).await?;
    Ok(rows)
}

// ========================
// HTTP Implementation
// ========================

#[derive(Serialize)]
struct InsertRequest<'a> {
    #[serde(rename = "schemeList")]
    scheme_list: &'a [SchemeRow],
}

#[derive(Deserialize)]
struct DeleteResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Collection served over HTTP
#[derive(Debug, Clone)]
pub struct HttpSchemeCollection {
    client: reqwest::Client,
    url: String,
}

impl HttpSchemeCollection {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.collection_url(),
        }
    }

    /// Turn a non-2xx response into `SyncError::Remote`
    async fn check(response: reqwest::Response) -> SyncResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        Err(SyncError::Remote {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait(?Send)]
impl SchemeCollection for HttpSchemeCollection {
    async fn clear(&self) -> SyncResult<Option<usize>> {
        let response = Self::check(self.client.delete(&self.url).send().await?).await?;
        let body = response.text().await?;
        // Any 2xx means cleared; the body only tells how many rows went away
        let deleted = serde_json::from_str::<DeleteResponse>(&body)
            .ok()
            .and_then(|parsed| {
                if let Some(message) = &parsed.message {
                    log::debug!("clear: {}", message);
                }
                parsed.data
            })
            .and_then(|data| data.as_array().map(Vec::len));
        Ok(deleted)
    }

    async fn insert(&self, rows: &[SchemeRow]) -> SyncResult<()> {
        let request = InsertRequest { scheme_list: rows };
        Self::check(self.client.post(&self.url).json(&request).send().await?).await?;
        Ok(())
    }

    async fn fetch_all(&self) -> SyncResult<Vec<SchemeRow>> {
        let response = Self::check(self.client.get(&self.url).send().await?).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SyncError::Decode(e.to_string()))
    }
}

// ========================
// In-memory collection for tests
// ========================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Request recorded by `MemoryCollection`
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Delete,
        Post(Value),
        Get,
    }

    /// Collection backed by a `Vec` that records each request it serves
    #[derive(Default)]
    pub struct MemoryCollection {
        pub rows: RefCell<Vec<SchemeRow>>,
        pub calls: RefCell<Vec<Call>>,
        pub fail_insert: bool,
        pub fail_fetch: bool,
    }

    impl MemoryCollection {
        pub fn with_rows(rows: Vec<SchemeRow>) -> Self {
            Self { rows: RefCell::new(rows), ..Default::default() }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl SchemeCollection for MemoryCollection {
        async fn clear(&self) -> SyncResult<Option<usize>> {
            self.calls.borrow_mut().push(Call::Delete);
            let removed = self.rows.borrow_mut().drain(..).count();
            Ok(Some(removed))
        }

        async fn insert(&self, rows: &[SchemeRow]) -> SyncResult<()> {
            let body = serde_json::to_value(InsertRequest { scheme_list: rows })
                .map_err(|e| SyncError::Decode(e.to_string()))?;
            self.calls.borrow_mut().push(Call::Post(body));
            if self.fail_insert {
                return Err(SyncError::Remote {
                    status: 400,
                    message: "insert rejected".to_string(),
                });
            }
            self.rows.borrow_mut().extend_from_slice(rows);
            Ok(())
        }

        async fn fetch_all(&self) -> SyncResult<Vec<SchemeRow>> {
            self.calls.borrow_mut().push(Call::Get);
            if self.fail_fetch {
                return Err(SyncError::Transport("connection refused".to_string()));
            }
            Ok(self.rows.borrow().clone())
        }
    }
}
