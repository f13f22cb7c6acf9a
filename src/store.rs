use anyhow::Context;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};
use serde::{Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use uuid::Uuid;

/// Hard cap on how many records a single list returns.
pub const LIST_LIMIT: i64 = 1000;

const COLLECTION: &str = "status_checks";

/// A recorded client heartbeat. Append-only; never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl StatusCheck {
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name,
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

/// Persisted shape of a status check: the id as a hyphenated UUID string and
/// the timestamp as an RFC 3339 string. Mongo's own `_id` never crosses this
/// boundary in either direction.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusCheckDocument {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

impl StatusCheckDocument {
    fn from_domain(check: &StatusCheck) -> anyhow::Result<Self> {
        Ok(Self {
            id: check.id.to_string(),
            client_name: check.client_name.clone(),
            timestamp: check
                .timestamp
                .format(&Rfc3339)
                .context("format status check timestamp")?,
        })
    }

    fn into_domain(self) -> anyhow::Result<StatusCheck> {
        Ok(StatusCheck {
            id: self.id.parse().context("parse status check id")?,
            client_name: self.client_name,
            timestamp: OffsetDateTime::parse(&self.timestamp, &Rfc3339)
                .context("parse status check timestamp")?,
        })
    }
}

#[async_trait]
pub trait StatusStore: Send + Sync {
    async fn insert(&self, check: &StatusCheck) -> anyhow::Result<()>;
    async fn list(&self, limit: i64) -> anyhow::Result<Vec<StatusCheck>>;
}

#[derive(Clone)]
pub struct MongoStatusStore {
    client: Client,
    collection: Collection<StatusCheckDocument>,
}

impl MongoStatusStore {
    pub async fn connect(url: &str, db_name: &str) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(url)
            .await
            .context("connect to document store")?;
        let collection = client.database(db_name).collection(COLLECTION);
        Ok(Self { client, collection })
    }

    /// Release the process-wide connection on graceful termination.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl StatusStore for MongoStatusStore {
    async fn insert(&self, check: &StatusCheck) -> anyhow::Result<()> {
        let document = StatusCheckDocument::from_domain(check)?;
        self.collection
            .insert_one(document)
            .await
            .context("insert status check")?;
        Ok(())
    }

    async fn list(&self, limit: i64) -> anyhow::Result<Vec<StatusCheck>> {
        let documents: Vec<StatusCheckDocument> = self
            .collection
            .find(doc! {})
            .projection(doc! { "_id": 0 })
            .limit(limit)
            .await
            .context("query status checks")?
            .try_collect()
            .await
            .context("read status checks")?;

        documents
            .into_iter()
            .map(StatusCheckDocument::into_domain)
            .collect()
    }
}
