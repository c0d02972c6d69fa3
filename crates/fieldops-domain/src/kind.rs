//! Entity kinds and their REST endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One CRUD-managed record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Address,
    Customer,
    ServiceRequest,
    ServiceTechnician,
    Part,
    Supplier,
    Invoice,
}

impl EntityKind {
    pub const ALL: [Self; 7] = [
        Self::Address,
        Self::Customer,
        Self::ServiceRequest,
        Self::ServiceTechnician,
        Self::Part,
        Self::Supplier,
        Self::Invoice,
    ];

    /// Collection path relative to the API base URL, always with a trailing slash.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Address => "/api/address/",
            Self::Customer => "/api/customers/",
            Self::ServiceRequest => "/api/service-requests/",
            Self::ServiceTechnician => "/api/service-technicians/",
            Self::Part => "/api/parts/",
            Self::Supplier => "/api/supplier/",
            Self::Invoice => "/api/invoices/",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Address => "address",
            Self::Customer => "customer",
            Self::ServiceRequest => "service-request",
            Self::ServiceTechnician => "service-technician",
            Self::Part => "part",
            Self::Supplier => "supplier",
            Self::Invoice => "invoice",
        };
        f.write_str(s)
    }
}

/// Error returned when a string cannot be parsed as an [`EntityKind`].
#[derive(Debug, Error)]
#[error("unknown entity kind: {0:?}")]
pub struct UnknownEntityKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "address" => Ok(Self::Address),
            "customer" => Ok(Self::Customer),
            "service-request" => Ok(Self::ServiceRequest),
            "service-technician" => Ok(Self::ServiceTechnician),
            "part" => Ok(Self::Part),
            "supplier" => Ok(Self::Supplier),
            "invoice" => Ok(Self::Invoice),
            other => Err(UnknownEntityKind(other.to_owned())),
        }
    }
}
