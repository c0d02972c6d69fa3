//! In-memory emulation of the remote REST API.
//!
//! `MemoryStore` keeps every collection as JSON values, assigns identifiers on
//! create, answers 404 for unknown ids, and can be told to fail a call or to
//! hold a list request until the test releases it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use serde_json::Value;
use tokio::sync::watch;

use fieldops_core::error::FetchError;
use fieldops_domain::{Entity, EntityKind, RecordId};

/// Which API call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Create,
    Update,
    Remove,
}

impl Op {
    pub fn method(self) -> &'static str {
        match self {
            Self::List => "GET",
            Self::Create => "POST",
            Self::Update => "PUT",
            Self::Remove => "DELETE",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

/// One recorded call against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub op: Op,
    pub kind: EntityKind,
    pub id: Option<RecordId>,
}

#[derive(Default)]
struct Inner {
    tables: HashMap<EntityKind, Vec<Value>>,
    next_id: i64,
    failures: HashMap<(EntityKind, Op), u16>,
    gates: HashMap<EntityKind, watch::Receiver<bool>>,
    calls: Vec<Call>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert records as if the server already held them. Records without an
    /// identifier are assigned one.
    pub fn seed<E: Entity>(&self, records: Vec<E>) {
        let mut inner = self.inner.lock().unwrap();
        for record in records {
            let id = match record.id() {
                Some(id) => id.clone(),
                None => inner.allocate_id(),
            };
            if let Some(n) = id.as_i64() {
                inner.next_id = inner.next_id.max(n);
            }
            let row = to_row(&record, &id);
            inner.tables.entry(E::KIND).or_default().push(row);
        }
    }

    /// Make the next `op` on `kind` fail with `status`.
    pub fn fail_next(&self, kind: EntityKind, op: Op, status: u16) {
        self.inner
            .lock()
            .unwrap()
            .failures
            .insert((kind, op), status);
    }

    /// Hold list requests for `kind` until `true` is sent on the returned channel
    /// (or the sender is dropped).
    pub fn hold(&self, kind: EntityKind) -> watch::Sender<bool> {
        let (tx, rx) = watch::channel(false);
        self.inner.lock().unwrap().gates.insert(kind, rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.inner
            .lock()
            .unwrap()
            .tables
            .get(&kind)
            .map_or(0, Vec::len)
    }

    pub async fn list<E: Entity>(&self) -> Result<Vec<E>, FetchError> {
        let gate = {
            let mut inner = self.inner.lock().unwrap();
            inner.record(Op::List, E::KIND, None);
            inner.gates.get(&E::KIND).cloned()
        };
        if let Some(mut gate) = gate {
            let _ = gate.wait_for(|open| *open).await;
        }

        let mut inner = self.inner.lock().unwrap();
        inner.take_failure(Op::List, E::KIND, None)?;
        let rows = inner.tables.get(&E::KIND).cloned().unwrap_or_default();
        let url = url_for(E::KIND, None);
        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(|e| FetchError::decode(&url, e)))
            .collect()
    }

    pub async fn create<E: Entity>(&self, record: &E) -> Result<RecordId, FetchError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record(Op::Create, E::KIND, None);
        inner.take_failure(Op::Create, E::KIND, None)?;
        let id = inner.allocate_id();
        let row = to_row(record, &id);
        inner.tables.entry(E::KIND).or_default().push(row);
        Ok(id)
    }

    pub async fn update<E: Entity>(&self, id: &RecordId, record: &E) -> Result<(), FetchError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record(Op::Update, E::KIND, Some(id));
        inner.take_failure(Op::Update, E::KIND, Some(id))?;
        let rows = inner.tables.entry(E::KIND).or_default();
        let slot = rows
            .iter_mut()
            .find(|row| row_id(row).as_ref() == Some(id))
            .ok_or_else(|| not_found(Op::Update, E::KIND, id))?;
        *slot = to_row(record, id);
        Ok(())
    }

    pub async fn remove<E: Entity>(&self, id: &RecordId) -> Result<(), FetchError> {
        let mut inner = self.inner.lock().unwrap();
        inner.record(Op::Remove, E::KIND, Some(id));
        inner.take_failure(Op::Remove, E::KIND, Some(id))?;
        let rows = inner.tables.entry(E::KIND).or_default();
        let before = rows.len();
        rows.retain(|row| row_id(row).as_ref() != Some(id));
        if rows.len() == before {
            return Err(not_found(Op::Remove, E::KIND, id));
        }
        Ok(())
    }
}

impl Inner {
    fn allocate_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId::from(self.next_id)
    }

    fn record(&mut self, op: Op, kind: EntityKind, id: Option<&RecordId>) {
        self.calls.push(Call {
            op,
            kind,
            id: id.cloned(),
        });
    }

    fn take_failure(
        &mut self,
        op: Op,
        kind: EntityKind,
        id: Option<&RecordId>,
    ) -> Result<(), FetchError> {
        match self.failures.remove(&(kind, op)) {
            Some(status) => Err(FetchError::status(op.method(), &url_for(kind, id), status)),
            None => Ok(()),
        }
    }
}

fn to_row<E: Entity>(record: &E, id: &RecordId) -> Value {
    let mut row = serde_json::to_value(record).expect("entity serializes to JSON");
    if let Value::Object(map) = &mut row {
        map.insert(
            "id".to_owned(),
            serde_json::to_value(id).expect("id serializes to JSON"),
        );
    }
    row
}

fn row_id(row: &Value) -> Option<RecordId> {
    row.get("id")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
}

fn url_for(kind: EntityKind, id: Option<&RecordId>) -> String {
    match id {
        Some(id) => format!("memory://{}{id}/", kind.endpoint()),
        None => format!("memory://{}", kind.endpoint()),
    }
}

fn not_found(op: Op, kind: EntityKind, id: &RecordId) -> FetchError {
    FetchError::status(op.method(), &url_for(kind, Some(id)), 404)
}
