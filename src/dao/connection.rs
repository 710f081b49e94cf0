use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use tokio::time::timeout;
use tracing::debug;

use super::error::{StoreError, StoreResult};

/// Bounded wait applied to the acquisition ping.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// Hands out datastore connections scoped to a single request.
///
/// The connection string is parsed once at startup; each request then gets
/// its own client, verified by a ping before any handler logic runs. No
/// handle is ever shared across requests.
pub struct ConnectionProvider {
    options: ClientOptions,
    database_name: String,
    live: Arc<AtomicUsize>,
}

impl ConnectionProvider {
    /// Parse the connection string and prepare the provider.
    pub async fn new(uri: &str, database_name: &str) -> StoreResult<Self> {
        let options = ClientOptions::parse(uri)
            .await
            .map_err(|source| StoreError::InvalidUri {
                uri: uri.to_owned(),
                source,
            })?;

        Ok(Self {
            options,
            database_name: database_name.to_owned(),
            live: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Acquire a connection for one request.
    ///
    /// Fails fast when the store is unreachable; retry and backoff belong to
    /// the driver, not this layer.
    pub async fn acquire(&self) -> StoreResult<ScopedHandle> {
        let client = Client::with_options(self.options.clone())
            .map_err(|source| StoreError::ClientConstruction { source })?;
        let database = client.database(&self.database_name);

        match timeout(ACQUIRE_TIMEOUT, database.run_command(doc! { "ping": 1 })).await {
            Ok(Ok(_)) => {}
            Ok(Err(source)) => return Err(StoreError::Ping { source }),
            Err(_) => {
                return Err(StoreError::AcquireTimeout {
                    seconds: ACQUIRE_TIMEOUT.as_secs(),
                });
            }
        }

        debug!(database = %self.database_name, "acquired scoped connection");
        Ok(self.checkout(client, database))
    }

    /// Register a verified client as a live handle.
    fn checkout(&self, client: Client, database: Database) -> ScopedHandle {
        self.live.fetch_add(1, Ordering::AcqRel);
        ScopedHandle {
            client: Some(client),
            database,
            live: Arc::clone(&self.live),
        }
    }

    /// Run `op` against a freshly acquired database handle, releasing the
    /// connection on every exit path before the result is returned.
    pub async fn with_database<T, F, Fut>(&self, op: F) -> StoreResult<T>
    where
        F: FnOnce(Database) -> Fut,
        Fut: Future<Output = StoreResult<T>>,
    {
        let handle = self.acquire().await?;
        let result = op(handle.database().clone()).await;
        handle.release().await;
        result
    }

    /// Number of handles currently checked out.
    pub fn live_handles(&self) -> usize {
        self.live.load(Ordering::Acquire)
    }
}

/// Connection valid for the duration of one request.
pub struct ScopedHandle {
    client: Option<Client>,
    database: Database,
    live: Arc<AtomicUsize>,
}

impl ScopedHandle {
    /// Database this handle is scoped to.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Shut the underlying client down explicitly.
    pub async fn release(mut self) {
        if let Some(client) = self.client.take() {
            client.shutdown().await;
        }
    }
}

impl Drop for ScopedHandle {
    fn drop(&mut self) {
        // Runs on release and on abandonment alike (e.g. the caller
        // disconnected mid-request); a client still present here is torn
        // down by the driver in the background.
        self.live.fetch_sub(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failed_acquire_leaves_no_live_handle() {
        // Nothing listens on this port; the short server selection timeout
        // keeps the test fast.
        let provider =
            ConnectionProvider::new("mongodb://127.0.0.1:9/?serverselectiontimeoutms=200", "test")
                .await
                .expect("parse uri");

        assert_eq!(provider.live_handles(), 0);
        let outcome = provider.acquire().await;
        assert!(outcome.is_err());
        assert_eq!(provider.live_handles(), 0);
    }

    #[tokio::test]
    async fn with_database_fails_fast_when_acquire_fails() {
        let provider =
            ConnectionProvider::new("mongodb://127.0.0.1:9/?serverselectiontimeoutms=200", "test")
                .await
                .expect("parse uri");

        // The op must never run when no connection could be acquired.
        let outcome: StoreResult<()> = provider
            .with_database(|_db| async { panic!("op ran without a connection") })
            .await;
        assert!(outcome.is_err());
        assert_eq!(provider.live_handles(), 0);
    }

    #[tokio::test]
    async fn op_error_still_releases_handle() {
        let provider = ConnectionProvider::new("mongodb://127.0.0.1:9", "test")
            .await
            .expect("parse uri");

        // Client construction is lazy, so a handle can be checked out
        // without a reachable store.
        let client = Client::with_options(provider.options.clone()).expect("build client");
        let database = client.database("test");
        let handle = provider.checkout(client, database);
        assert_eq!(provider.live_handles(), 1);

        // Same sequence as `with_database`: the op fails, release still runs.
        let op = |_db: Database| async {
            Err::<(), _>(StoreError::MissingInsertedId {
                collection: "sprites",
            })
        };
        let result = op(handle.database().clone()).await;
        handle.release().await;

        assert!(result.is_err());
        assert_eq!(provider.live_handles(), 0);
    }
}
