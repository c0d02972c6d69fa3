#![allow(async_fn_in_trait)]

use fieldops_core::error::FetchError;
use fieldops_domain::{Entity, RecordId};

/// Resource client: list/create/update/delete against an entity's endpoint.
///
/// Mutations do not consume the server response; callers reload the list
/// afterwards to observe server-assigned identifiers.
pub trait ResourcePort: Send + Sync {
    async fn list<E: Entity>(&self) -> Result<Vec<E>, FetchError>;

    async fn create<E: Entity>(&self, record: &E) -> Result<(), FetchError>;

    /// Full replace of the record stored under `id`.
    async fn update<E: Entity>(&self, id: &RecordId, record: &E) -> Result<(), FetchError>;

    async fn remove<E: Entity>(&self, id: &RecordId) -> Result<(), FetchError>;
}

impl<P: ResourcePort> ResourcePort for &P {
    async fn list<E: Entity>(&self) -> Result<Vec<E>, FetchError> {
        (**self).list::<E>().await
    }

    async fn create<E: Entity>(&self, record: &E) -> Result<(), FetchError> {
        (**self).create(record).await
    }

    async fn update<E: Entity>(&self, id: &RecordId, record: &E) -> Result<(), FetchError> {
        (**self).update(id, record).await
    }

    async fn remove<E: Entity>(&self, id: &RecordId) -> Result<(), FetchError> {
        (**self).remove::<E>(id).await
    }
}
