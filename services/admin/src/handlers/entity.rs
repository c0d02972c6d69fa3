//! Generic `<entity> list|create|update|delete` command handling.

use std::str::FromStr;

use clap::Subcommand;
use tracing::{debug, warn};

use fieldops_domain::{Entity, RecordId};

use crate::domain::repository::ResourcePort;
use crate::error::PageError;
use crate::handlers::table;
use crate::usecase::page::{EntityPage, PageSpec};

#[derive(Debug, Clone, Subcommand)]
pub enum EntityAction {
    /// List records with references shown by label
    List,
    /// Create a record
    Create {
        /// Field assignment by wire name, e.g. `--set city=Dover`. Repeatable.
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<Assignment>,
    },
    /// Replace a record, keeping every field not assigned
    Update {
        id: RecordId,
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<Assignment>,
    },
    /// Delete a record
    Delete { id: RecordId },
}

/// One `FIELD=VALUE` form input. Many-valued fields take comma-separated ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub field: String,
    pub value: String,
}

#[derive(Debug, thiserror::Error)]
#[error("expected FIELD=VALUE, got {0:?}")]
pub struct InvalidAssignment(String);

impl FromStr for Assignment {
    type Err = InvalidAssignment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s
            .split_once('=')
            .ok_or_else(|| InvalidAssignment(s.to_owned()))?;
        let field = field.trim();
        if field.is_empty() {
            return Err(InvalidAssignment(s.to_owned()));
        }
        Ok(Self {
            field: field.to_owned(),
            value: value.to_owned(),
        })
    }
}

/// Execute `action` against `page` and return the text to print.
pub async fn run<S: PageSpec, P: ResourcePort>(
    page: &mut EntityPage<S, P>,
    action: EntityAction,
) -> Result<String, PageError> {
    let kind = <S::Entity as Entity>::KIND;
    match action {
        EntityAction::List => {
            page.activate().await?;
            ensure_loaded(page)?;
            let mut out = table::render(S::HEADERS, &page.rows());
            let unavailable = page.unavailable_references();
            if !unavailable.is_empty() {
                out.push('\n');
            }
            for reference in unavailable {
                warn!(%kind, %reference, "rendering with unavailable reference list");
                out.push_str(&format!("{reference} list unavailable; labels may be blank\n"));
            }
            Ok(out)
        }
        EntityAction::Create { set } => {
            // Inputs given by label need the reference lists.
            page.refresh_references().await;
            apply(page, &set)?;
            page.submit().await?;
            Ok(format!("Created {kind}"))
        }
        EntityAction::Update { id, set } => {
            page.activate().await?;
            ensure_loaded(page)?;
            page.begin_edit(&id)?;
            apply(page, &set)?;
            page.submit().await?;
            Ok(format!("Updated {kind} {id}"))
        }
        EntityAction::Delete { id } => {
            page.remove(&id).await?;
            Ok(format!("Deleted {kind} {id}"))
        }
    }
}

fn ensure_loaded<S: PageSpec, P: ResourcePort>(page: &EntityPage<S, P>) -> Result<(), PageError> {
    if page.is_loaded() {
        Ok(())
    } else {
        Err(PageError::Unavailable(<S::Entity as Entity>::KIND))
    }
}

fn apply<S: PageSpec, P: ResourcePort>(
    page: &mut EntityPage<S, P>,
    assignments: &[Assignment],
) -> Result<(), PageError> {
    for Assignment { field, value } in assignments {
        debug!(%field, "applying form input");
        page.set_input(field, value)?;
    }
    Ok(())
}
