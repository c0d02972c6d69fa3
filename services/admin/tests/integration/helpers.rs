use std::sync::Arc;

use fieldops_admin::domain::repository::ResourcePort;
use fieldops_admin::usecase::page::{EntityPage, PageSpec};
use fieldops_core::error::FetchError;
use fieldops_domain::{
    Address, Customer, Entity, Invoice, Part, RecordId, ServiceRequest, ServiceTechnician,
    Supplier,
};
use fieldops_testing::MemoryStore;
use fieldops_testing::fixture::records;

// ── MemoryApi ────────────────────────────────────────────────────────────────

/// [`ResourcePort`] backed by a shared [`MemoryStore`], so a test can keep a
/// handle for seeding, fault injection and inspection.
#[derive(Clone)]
pub struct MemoryApi(pub Arc<MemoryStore>);

impl ResourcePort for MemoryApi {
    async fn list<E: Entity>(&self) -> Result<Vec<E>, FetchError> {
        self.0.list().await
    }

    async fn create<E: Entity>(&self, record: &E) -> Result<(), FetchError> {
        self.0.create(record).await.map(|_| ())
    }

    async fn update<E: Entity>(&self, id: &RecordId, record: &E) -> Result<(), FetchError> {
        self.0.update(id, record).await
    }

    async fn remove<E: Entity>(&self, id: &RecordId) -> Result<(), FetchError> {
        self.0.remove::<E>(id).await
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

/// A store holding every record under `fixtures/`.
pub fn seeded_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store.seed(records::<Address>("addresses"));
    store.seed(records::<Supplier>("suppliers"));
    store.seed(records::<Part>("parts"));
    store.seed(records::<ServiceTechnician>("technicians"));
    store.seed(records::<ServiceRequest>("service_requests"));
    store.seed(records::<Customer>("customers"));
    store.seed(records::<Invoice>("invoices"));
    Arc::new(store)
}

pub fn page<S: PageSpec>(store: &Arc<MemoryStore>) -> EntityPage<S, MemoryApi> {
    EntityPage::new(MemoryApi(Arc::clone(store)))
}

/// Find a loaded record by id.
pub fn loaded<S: PageSpec>(page: &EntityPage<S, MemoryApi>, id: i64) -> Option<S::Entity> {
    let id = RecordId::from(id);
    page.records()
        .items()
        .iter()
        .find(|r| r.id() == Some(&id))
        .cloned()
}
