use crate::config::StoreConfig;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::{ClientOptions, FindOptions},
    Client as MongoClient, Database,
};
use serde::Serialize;
use service_core::error::AppError;
use std::time::Duration;
use thiserror::Error;

/// Page size used when a caller gives no limit.
pub const DEFAULT_LIMIT: i64 = 100;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store is not connected")]
    Unavailable,

    #[error("collection name must not be empty")]
    InvalidCollection,

    #[error("write failed: {0}")]
    Write(#[source] mongodb::error::Error),

    #[error("read failed: {0}")]
    Read(#[source] mongodb::error::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable => AppError::ServiceUnavailable,
            other @ StoreError::InvalidCollection => {
                AppError::InternalError(anyhow::Error::new(other))
            }
            other => AppError::DatabaseError(anyhow::Error::new(other)),
        }
    }
}

#[derive(Clone)]
struct Connection {
    client: MongoClient,
    db: Database,
}

/// Collection-agnostic handle over the MongoDB database.
///
/// A store built without a usable `DATABASE_URL`/`DATABASE_NAME` pair is
/// disconnected: every operation fails with [`StoreError::Unavailable`]
/// instead of the process refusing to start.
#[derive(Clone, Default)]
pub struct DocumentStore {
    conn: Option<Connection>,
}

impl DocumentStore {
    pub async fn connect(config: &StoreConfig) -> Self {
        let (Some(url), Some(database)) = (config.url.as_deref(), config.database.as_deref())
        else {
            tracing::warn!(
                database_url_set = config.url.is_some(),
                database_name_set = config.database.is_some(),
                "Document store not configured; running without database"
            );
            return Self::disconnected();
        };

        match Self::open(url, database, config.server_selection_timeout()).await {
            Ok(conn) => {
                tracing::info!(database = %database, "Document store client initialised");
                Self { conn: Some(conn) }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialise document store; running without database");
                Self::disconnected()
            }
        }
    }

    pub fn disconnected() -> Self {
        Self { conn: None }
    }

    async fn open(
        url: &str,
        database: &str,
        server_selection_timeout: Duration,
    ) -> Result<Connection, mongodb::error::Error> {
        let mut options = ClientOptions::parse(url).await?;
        options.server_selection_timeout = Some(server_selection_timeout);
        options
            .app_name
            .get_or_insert_with(|| "polaroid-service".to_string());

        let client = MongoClient::with_options(options)?;
        let db = client.database(database);
        Ok(Connection { client, db })
    }

    pub fn is_available(&self) -> bool {
        self.conn.is_some()
    }

    pub fn database_name(&self) -> Option<&str> {
        self.conn.as_ref().map(|c| c.db.name())
    }

    pub fn database(&self) -> Option<&Database> {
        self.conn.as_ref().map(|c| &c.db)
    }

    fn connection(&self) -> Result<&Connection, StoreError> {
        self.conn.as_ref().ok_or(StoreError::Unavailable)
    }

    /// Inserts `record` into `collection` and returns the store-assigned id.
    pub async fn create_document<T>(&self, collection: &str, record: &T) -> Result<Bson, StoreError>
    where
        T: Serialize + Send + Sync,
    {
        check_collection_name(collection)?;
        let conn = self.connection()?;

        let result = conn
            .db
            .collection::<T>(collection)
            .insert_one(record, None)
            .await
            .map_err(StoreError::Write)?;

        Ok(result.inserted_id)
    }

    /// Returns up to `limit` records matching `filter`, newest first. A
    /// collection that does not exist yields an empty list.
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError> {
        check_collection_name(collection)?;
        let conn = self.connection()?;

        // Mongo reads a zero limit as "no limit".
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let find_options = FindOptions::builder()
            .sort(doc! { "_id": -1 })
            .limit(limit)
            .build();

        let cursor = conn
            .db
            .collection::<Document>(collection)
            .find(filter, find_options)
            .await
            .map_err(StoreError::Read)?;

        cursor.try_collect().await.map_err(StoreError::Read)
    }

    pub async fn list_collection_names(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        let conn = self.connection()?;

        let mut names = conn
            .db
            .list_collection_names(None)
            .await
            .map_err(StoreError::Read)?;
        names.sort();
        names.truncate(limit);
        Ok(names)
    }

    pub async fn health_check(&self) -> Result<(), StoreError> {
        let conn = self.connection()?;
        conn.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                StoreError::Read(e)
            })?;
        Ok(())
    }

    pub async fn close(self) {
        if let Some(conn) = self.conn {
            conn.client.shutdown().await;
            tracing::info!("Document store connection closed");
        }
    }
}

fn check_collection_name(collection: &str) -> Result<(), StoreError> {
    if collection.trim().is_empty() {
        return Err(StoreError::InvalidCollection);
    }
    Ok(())
}
