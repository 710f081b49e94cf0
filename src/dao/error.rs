use mongodb::error::Error as MongoError;
use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the connection provider and the resource store.
///
/// Not-found is never an error here; lookups signal it through their return
/// value so callers can treat it as a first-class outcome.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configured connection string could not be parsed.
    #[error("failed to parse MongoDB connection URI `{uri}`")]
    InvalidUri {
        /// The offending connection string.
        uri: String,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// The driver rejected the prepared client options.
    #[error("failed to build MongoDB client from options")]
    ClientConstruction {
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// The store did not answer the acquisition ping in time.
    #[error("MongoDB connection acquisition timed out after {seconds}s")]
    AcquireTimeout {
        /// Bounded wait that elapsed.
        seconds: u64,
    },
    /// The acquisition ping reached the store but failed.
    #[error("MongoDB ping failed while acquiring a connection")]
    Ping {
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// An insert failed.
    #[error("failed to insert document into `{collection}`")]
    Insert {
        /// Target collection.
        collection: &'static str,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// The store accepted an insert but returned no object id.
    #[error("insert into `{collection}` returned no object id")]
    MissingInsertedId {
        /// Target collection.
        collection: &'static str,
    },
    /// A lookup failed.
    #[error("failed to load document from `{collection}`")]
    Find {
        /// Target collection.
        collection: &'static str,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// A replace failed.
    #[error("failed to replace document in `{collection}`")]
    Replace {
        /// Target collection.
        collection: &'static str,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
    /// A delete failed.
    #[error("failed to delete document from `{collection}`")]
    Delete {
        /// Target collection.
        collection: &'static str,
        /// Driver-level cause.
        #[source]
        source: MongoError,
    },
}
