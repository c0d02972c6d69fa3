//! Generic entity page controller.
//!
//! One page manages one entity kind: the primary list, the reference lists
//! its rows resolve against, and a single in-progress form record. Lists are
//! never patched locally; every successful mutation is followed by a full
//! reload of the primary list.

#![allow(async_fn_in_trait)]

use std::cell::{Ref, RefCell};

use tracing::{debug, info, warn};

use fieldops_domain::{Entity, EntityKind, RecordId};

use crate::domain::repository::ResourcePort;
use crate::error::PageError;
use crate::usecase::lifetime::PageLifetime;

// ── List state ───────────────────────────────────────────────────────────────

/// A locally held copy of one remote list.
///
/// Until the first successful fetch the list is pending and empty, so lookups
/// against it resolve to nothing. A failed refresh keeps the previous items
/// and marks the list stale.
#[derive(Debug, Clone)]
pub struct ListState<E> {
    items: Vec<E>,
    loaded: bool,
    stale: bool,
}

impl<E> Default for ListState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
            stale: false,
        }
    }
}

impl<E> ListState<E> {
    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn replace(&mut self, items: Vec<E>) {
        self.items = items;
        self.loaded = true;
        self.stale = false;
    }

    pub fn mark_stale(&mut self) {
        self.stale = true;
    }
}

impl<E: Entity> ListState<E> {
    /// The list's kind when its contents cannot be trusted: never fetched,
    /// or the last refresh failed.
    pub fn unavailable_kind(&self) -> Option<EntityKind> {
        (!self.loaded || self.stale).then_some(E::KIND)
    }
}

// ── Page configuration ───────────────────────────────────────────────────────

/// Per-entity page configuration: which entity, which reference lists it
/// depends on, and how a row is displayed.
pub trait PageSpec {
    type Entity: Entity;
    /// Reference lists, one [`ListState`] field per dependency. `()` when none.
    type Refs: Default;

    /// Column titles, matching the cells returned by [`PageSpec::row`].
    const HEADERS: &'static [&'static str];

    /// Fetch every reference list. Implementations issue the loads
    /// concurrently so each applies as soon as it resolves.
    async fn load_references<P: ResourcePort>(loader: RefLoader<'_, P, Self::Refs>);

    fn row(record: &Self::Entity, refs: &Self::Refs) -> Vec<String>;

    /// Reference lists whose labels may currently render blank.
    fn unavailable_references(_refs: &Self::Refs) -> Vec<EntityKind> {
        Vec::new()
    }

    /// Apply one form input by wire field name.
    fn set_input(
        draft: &mut Self::Entity,
        _refs: &Self::Refs,
        name: &str,
        value: &str,
    ) -> Result<(), PageError> {
        Ok(draft.set_field(name, value)?)
    }
}

/// Handle given to [`PageSpec::load_references`] for filling reference lists.
pub struct RefLoader<'a, P, R> {
    port: &'a P,
    refs: &'a RefCell<R>,
    lifetime: &'a PageLifetime,
}

impl<P: ResourcePort, R> RefLoader<'_, P, R> {
    /// Fetch the list of `E` and store it in the field selected by `pick`.
    pub async fn load<E: Entity>(&self, pick: fn(&mut R) -> &mut ListState<E>) {
        match self.lifetime.scope(self.port.list::<E>()).await {
            None => debug!(kind = %E::KIND, "reference list discarded after page end"),
            Some(Ok(items)) => {
                let mut refs = self.refs.borrow_mut();
                pick(&mut refs).replace(items);
            }
            Some(Err(err)) => {
                warn!(kind = %E::KIND, error = %err, "reference list refresh failed");
                let mut refs = self.refs.borrow_mut();
                pick(&mut refs).mark_stale();
            }
        }
    }
}

// ── Form state ───────────────────────────────────────────────────────────────

/// The single form-bound record of a page.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState<E> {
    /// No existing record is being edited; `draft` is a new record.
    Idle { draft: E },
    /// An existing record was copied into the form.
    Editing { id: RecordId, draft: E, original: E },
}

impl<E: Entity> Default for FormState<E> {
    fn default() -> Self {
        Self::Idle { draft: E::default() }
    }
}

impl<E: Entity> FormState<E> {
    pub fn draft(&self) -> &E {
        match self {
            Self::Idle { draft } | Self::Editing { draft, .. } => draft,
        }
    }

    pub fn draft_mut(&mut self) -> &mut E {
        match self {
            Self::Idle { draft } | Self::Editing { draft, .. } => draft,
        }
    }

    pub fn editing_id(&self) -> Option<&RecordId> {
        match self {
            Self::Idle { .. } => None,
            Self::Editing { id, .. } => Some(id),
        }
    }

    /// Whether the form holds input that would be lost by replacing it.
    pub fn is_dirty(&self) -> bool {
        match self {
            Self::Idle { draft } => *draft != E::default(),
            Self::Editing {
                draft, original, ..
            } => draft != original,
        }
    }
}

/// Result of [`EntityPage::begin_edit`].
#[derive(Debug, Clone, PartialEq)]
pub enum EditTransition<E> {
    Started,
    /// The form held unsaved input, which was dropped.
    Replaced { discarded: E },
}

// ── Controller ───────────────────────────────────────────────────────────────

pub struct EntityPage<S: PageSpec, P> {
    port: P,
    lifetime: PageLifetime,
    records: RefCell<ListState<S::Entity>>,
    refs: RefCell<S::Refs>,
    form: FormState<S::Entity>,
}

impl<S: PageSpec, P: ResourcePort> EntityPage<S, P> {
    pub fn new(port: P) -> Self {
        Self::with_lifetime(port, PageLifetime::new())
    }

    pub fn with_lifetime(port: P, lifetime: PageLifetime) -> Self {
        Self {
            port,
            lifetime,
            records: RefCell::new(ListState::default()),
            refs: RefCell::new(S::Refs::default()),
            form: FormState::default(),
        }
    }

    pub fn lifetime(&self) -> &PageLifetime {
        &self.lifetime
    }

    /// Load the primary list and every reference list concurrently.
    ///
    /// Fetch failures are recovered: they are logged and leave the affected
    /// list stale. Only an ended lifetime is reported.
    pub async fn activate(&self) -> Result<(), PageError> {
        self.ensure_active()?;
        futures::join!(self.reload(), self.refresh_references());
        Ok(())
    }

    /// Re-fetch the primary list.
    pub async fn reload(&self) {
        let kind = <S::Entity as Entity>::KIND;
        match self.lifetime.scope(self.port.list::<S::Entity>()).await {
            None => debug!(%kind, "list discarded after page end"),
            Some(Ok(items)) => {
                debug!(%kind, count = items.len(), "list loaded");
                self.records.borrow_mut().replace(items);
            }
            Some(Err(err)) => {
                warn!(%kind, error = %err, "list refresh failed; keeping previous data");
                self.records.borrow_mut().mark_stale();
            }
        }
    }

    pub async fn refresh_references(&self) {
        S::load_references(RefLoader {
            port: &self.port,
            refs: &self.refs,
            lifetime: &self.lifetime,
        })
        .await;
    }

    pub fn records(&self) -> Ref<'_, ListState<S::Entity>> {
        self.records.borrow()
    }

    pub fn references(&self) -> Ref<'_, S::Refs> {
        self.refs.borrow()
    }

    pub fn is_loaded(&self) -> bool {
        self.records.borrow().is_loaded()
    }

    pub fn unavailable_references(&self) -> Vec<EntityKind> {
        S::unavailable_references(&self.refs.borrow())
    }

    pub fn is_stale(&self) -> bool {
        self.records.borrow().is_stale()
    }

    /// Display rows for the primary list, resolved against the reference
    /// lists as currently loaded.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let records = self.records.borrow();
        let refs = self.refs.borrow();
        records
            .items()
            .iter()
            .map(|record| S::row(record, &refs))
            .collect()
    }

    pub fn form(&self) -> &FormState<S::Entity> {
        &self.form
    }

    pub fn draft_mut(&mut self) -> &mut S::Entity {
        self.form.draft_mut()
    }

    pub fn set_input(&mut self, name: &str, value: &str) -> Result<(), PageError> {
        let refs = self.refs.borrow();
        S::set_input(self.form.draft_mut(), &refs, name, value)
    }

    /// Copy the loaded record `id` wholesale into the form.
    ///
    /// Replacing a form with unsaved input is allowed but reported through
    /// [`EditTransition::Replaced`].
    pub fn begin_edit(&mut self, id: &RecordId) -> Result<EditTransition<S::Entity>, PageError> {
        let record = self
            .records
            .borrow()
            .items()
            .iter()
            .find(|record| record.id() == Some(id))
            .cloned()
            .ok_or_else(|| PageError::NotLoaded(id.clone()))?;

        let dirty = self.form.is_dirty();
        let previous = std::mem::replace(
            &mut self.form,
            FormState::Editing {
                id: id.clone(),
                draft: record.clone(),
                original: record,
            },
        );
        if !dirty {
            return Ok(EditTransition::Started);
        }
        warn!(
            kind = %<S::Entity as Entity>::KIND,
            replaced = ?previous.editing_id(),
            %id,
            "discarding unsaved form input"
        );
        let discarded = match previous {
            FormState::Idle { draft } | FormState::Editing { draft, .. } => draft,
        };
        Ok(EditTransition::Replaced { discarded })
    }

    /// Return to an empty new-record form.
    pub fn cancel_edit(&mut self) {
        self.form = FormState::default();
    }

    /// Create the draft (idle form) or update the edited record.
    ///
    /// On success the form is reset and the primary list reloaded. On failure
    /// the form keeps its input and the error is returned.
    pub async fn submit(&mut self) -> Result<(), PageError> {
        self.ensure_active()?;
        let kind = <S::Entity as Entity>::KIND;
        let outcome = match &self.form {
            FormState::Idle { draft } => self.lifetime.scope(self.port.create(draft)).await,
            FormState::Editing { id, draft, .. } => {
                self.lifetime.scope(self.port.update(id, draft)).await
            }
        };
        match outcome {
            None => return Err(PageError::Cancelled),
            Some(Err(err)) => {
                warn!(%kind, error = %err, "submit failed; form retained");
                return Err(err.into());
            }
            Some(Ok(())) => {}
        }
        match self.form.editing_id() {
            Some(id) => info!(%kind, %id, "record updated"),
            None => info!(%kind, "record created"),
        }
        self.form = FormState::default();
        self.reload().await;
        Ok(())
    }

    /// Delete `id` on the server, then reload. If the form was editing that
    /// record it returns to idle.
    pub async fn remove(&mut self, id: &RecordId) -> Result<(), PageError> {
        self.ensure_active()?;
        let kind = <S::Entity as Entity>::KIND;
        match self
            .lifetime
            .scope(self.port.remove::<S::Entity>(id))
            .await
        {
            None => return Err(PageError::Cancelled),
            Some(Err(err)) => {
                warn!(%kind, %id, error = %err, "remove failed");
                return Err(err.into());
            }
            Some(Ok(())) => info!(%kind, %id, "record removed"),
        }
        if self.form.editing_id() == Some(id) {
            self.form = FormState::default();
        }
        self.reload().await;
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), PageError> {
        if self.lifetime.is_ended() {
            return Err(PageError::Cancelled);
        }
        Ok(())
    }
}
