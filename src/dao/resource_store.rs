use mongodb::{
    Collection, Database,
    bson::{doc, error, oid::ObjectId},
};
use serde::{Serialize, de::DeserializeOwned};

use super::error::{StoreError, StoreResult};

/// Parse an external identifier (a path segment) into the store's native id.
///
/// A syntactically invalid identifier is a client error distinct from
/// not-found and must be rejected before any store access.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, error::Error> {
    ObjectId::parse_str(raw)
}

/// Generic CRUD over one resource collection.
///
/// The same four operations back every resource kind; only the collection
/// name and the document shape vary. Lookups signal not-found through their
/// return value rather than an error.
pub struct ResourceStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    collection: Collection<T>,
    name: &'static str,
}

impl<T> ResourceStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    /// Bind the store to a collection within the scoped database.
    pub fn new(database: &Database, name: &'static str) -> Self {
        Self {
            collection: database.collection::<T>(name),
            name,
        }
    }

    /// Insert a new document and return the store-assigned identifier.
    pub async fn create(&self, document: T) -> StoreResult<ObjectId> {
        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(|source| StoreError::Insert {
                collection: self.name,
                source,
            })?;

        result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::MissingInsertedId {
                collection: self.name,
            })
    }

    /// Look a document up by identifier; `None` means not-found.
    pub async fn fetch(&self, id: ObjectId) -> StoreResult<Option<T>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|source| StoreError::Find {
                collection: self.name,
                source,
            })
    }

    /// Replace every field of the document matching `id`, preserving the
    /// identifier. Never an upsert: zero matched documents yields `false`
    /// and nothing is written.
    pub async fn replace(&self, id: ObjectId, document: T) -> StoreResult<bool> {
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, document)
            .await
            .map_err(|source| StoreError::Replace {
                collection: self.name,
                source,
            })?;

        Ok(result.matched_count > 0)
    }

    /// Delete the document matching `id`; `false` when nothing was removed.
    pub async fn delete(&self, id: ObjectId) -> StoreResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|source| StoreError::Delete {
                collection: self.name,
                source,
            })?;

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_parsing_accepts_canonical_hex() {
        let id = parse_object_id("65a8f0e2c4d7b93f01234567").expect("valid id");
        assert_eq!(id.to_hex(), "65a8f0e2c4d7b93f01234567");
    }

    #[test]
    fn object_id_parsing_rejects_malformed_input() {
        assert!(parse_object_id("").is_err());
        assert!(parse_object_id("not-an-id").is_err());
        // Right length, invalid hex digit.
        assert!(parse_object_id("65a8f0e2c4d7b93f0123456z").is_err());
        // One character short.
        assert!(parse_object_id("65a8f0e2c4d7b93f0123456").is_err());
    }
}
