//! Per-entity page configuration.

use fieldops_domain::{
    Address, Customer, Entity, EntityKind, Invoice, Part, ServiceRequest, ServiceTechnician,
    Supplier,
};

use crate::domain::repository::ResourcePort;
use crate::error::PageError;
use crate::usecase::page::{ListState, PageSpec, RefLoader};
use crate::usecase::resolve::{find_by_label, resolve_label, resolve_labels};

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_owned()
}

// ── Address ──────────────────────────────────────────────────────────────────

pub struct AddressPage;

impl PageSpec for AddressPage {
    type Entity = Address;
    type Refs = ();

    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Line 1",
        "Line 2",
        "City",
        "State",
        "Country",
        "Postal code",
    ];

    async fn load_references<P: ResourcePort>(_loader: RefLoader<'_, P, ()>) {}

    fn row(a: &Address, _refs: &()) -> Vec<String> {
        vec![
            a.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            a.address_line1.clone(),
            a.address_line2.clone(),
            a.city.clone(),
            a.state.clone(),
            a.country.clone(),
            a.postal_code.clone(),
        ]
    }
}

// ── Customer ─────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct CustomerRefs {
    pub addresses: ListState<Address>,
    pub service_requests: ListState<ServiceRequest>,
}

pub struct CustomerPage;

impl PageSpec for CustomerPage {
    type Entity = Customer;
    type Refs = CustomerRefs;

    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Surname",
        "Email",
        "Phone",
        "Address",
        "Service requests",
    ];

    async fn load_references<P: ResourcePort>(loader: RefLoader<'_, P, CustomerRefs>) {
        futures::join!(
            loader.load(|r| &mut r.addresses),
            loader.load(|r| &mut r.service_requests),
        );
    }

    fn row(c: &Customer, refs: &CustomerRefs) -> Vec<String> {
        vec![
            c.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            c.name.clone(),
            c.surname.clone(),
            c.email.clone(),
            c.phone_number.clone(),
            resolve_label(refs.addresses.items(), c.address.as_ref()),
            resolve_labels(refs.service_requests.items(), &c.service_requests),
        ]
    }

    fn unavailable_references(refs: &CustomerRefs) -> Vec<EntityKind> {
        [
            refs.addresses.unavailable_kind(),
            refs.service_requests.unavailable_kind(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

// ── Service technician ───────────────────────────────────────────────────────

pub struct TechnicianPage;

impl PageSpec for TechnicianPage {
    type Entity = ServiceTechnician;
    type Refs = ();

    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Username",
        "First name",
        "Last name",
        "Specialization",
        "Email",
        "Phone",
    ];

    async fn load_references<P: ResourcePort>(_loader: RefLoader<'_, P, ()>) {}

    // The credential is never displayed.
    fn row(t: &ServiceTechnician, _refs: &()) -> Vec<String> {
        vec![
            t.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            t.username.clone(),
            t.first_name.clone(),
            t.last_name.clone(),
            t.specialization.clone(),
            t.email.clone(),
            t.phone_number.clone(),
        ]
    }
}

// ── Supplier ─────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct SupplierRefs {
    pub addresses: ListState<Address>,
}

pub struct SupplierPage;

impl PageSpec for SupplierPage {
    type Entity = Supplier;
    type Refs = SupplierRefs;

    const HEADERS: &'static [&'static str] = &["ID", "Name", "Contact email", "Phone", "Address"];

    async fn load_references<P: ResourcePort>(loader: RefLoader<'_, P, SupplierRefs>) {
        loader.load(|r| &mut r.addresses).await;
    }

    fn row(s: &Supplier, refs: &SupplierRefs) -> Vec<String> {
        vec![
            s.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            s.name.clone(),
            s.contact_person_email.clone(),
            s.phone_number.clone(),
            resolve_label(refs.addresses.items(), s.address.as_ref()),
        ]
    }

    fn unavailable_references(refs: &SupplierRefs) -> Vec<EntityKind> {
        refs.addresses.unavailable_kind().into_iter().collect()
    }
}

// ── Part ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct PartRefs {
    pub suppliers: ListState<Supplier>,
}

pub struct PartPage;

impl PageSpec for PartPage {
    type Entity = Part;
    type Refs = PartRefs;

    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Price",
        "Tax",
        "Description",
        "In stock",
        "Supplier",
    ];

    async fn load_references<P: ResourcePort>(loader: RefLoader<'_, P, PartRefs>) {
        loader.load(|r| &mut r.suppliers).await;
    }

    fn row(p: &Part, refs: &PartRefs) -> Vec<String> {
        vec![
            p.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            p.name.clone(),
            p.price.clone(),
            p.tax.clone(),
            p.description.clone(),
            p.quantity_in_stock.clone(),
            resolve_label(refs.suppliers.items(), p.supplier.as_ref()),
        ]
    }

    fn unavailable_references(refs: &PartRefs) -> Vec<EntityKind> {
        refs.suppliers.unavailable_kind().into_iter().collect()
    }

    /// The supplier is entered by name and stored by id.
    fn set_input(
        draft: &mut Part,
        refs: &PartRefs,
        name: &str,
        value: &str,
    ) -> Result<(), PageError> {
        if name != "supplier" {
            return Ok(draft.set_field(name, value)?);
        }
        if value.trim().is_empty() {
            draft.supplier = None;
            return Ok(());
        }
        let supplier = find_by_label(refs.suppliers.items(), value).ok_or_else(|| {
            PageError::UnknownReference {
                kind: EntityKind::Supplier,
                label: value.trim().to_owned(),
            }
        })?;
        draft.supplier = supplier.id.clone();
        Ok(())
    }
}

// ── Service request ──────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct ServiceRequestRefs {
    pub customers: ListState<Customer>,
    pub technicians: ListState<ServiceTechnician>,
    pub addresses: ListState<Address>,
}

pub struct ServiceRequestPage;

impl PageSpec for ServiceRequestPage {
    type Entity = ServiceRequest;
    type Refs = ServiceRequestRefs;

    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Price",
        "Tax",
        "Requested at",
        "Deadline",
        "Priority",
        "State",
        "Requested by",
        "Owned by",
        "Billing address",
        "Shipping address",
    ];

    async fn load_references<P: ResourcePort>(loader: RefLoader<'_, P, ServiceRequestRefs>) {
        futures::join!(
            loader.load(|r| &mut r.customers),
            loader.load(|r| &mut r.technicians),
            loader.load(|r| &mut r.addresses),
        );
    }

    fn row(s: &ServiceRequest, refs: &ServiceRequestRefs) -> Vec<String> {
        let addresses = refs.addresses.items();
        vec![
            s.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            s.name.clone(),
            s.price.clone(),
            s.tax.clone(),
            s.requested_at.clone(),
            s.completion_deadline.clone(),
            s.priority.clone(),
            s.state.clone(),
            resolve_label(refs.customers.items(), s.requested_by.as_ref()),
            resolve_label(refs.technicians.items(), s.owned_by.as_ref()),
            resolve_label(addresses, s.billing_address.as_ref()),
            resolve_label(addresses, s.shipping_address.as_ref()),
        ]
    }

    fn unavailable_references(refs: &ServiceRequestRefs) -> Vec<EntityKind> {
        [
            refs.customers.unavailable_kind(),
            refs.technicians.unavailable_kind(),
            refs.addresses.unavailable_kind(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

// ── Invoice ──────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct InvoiceRefs {
    pub service_requests: ListState<ServiceRequest>,
    pub parts: ListState<Part>,
    pub addresses: ListState<Address>,
}

pub struct InvoicePage;

impl PageSpec for InvoicePage {
    type Entity = Invoice;
    type Refs = InvoiceRefs;

    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Total",
        "Paid",
        "Service requests",
        "Parts",
        "Billing address",
        "Shipping address",
    ];

    async fn load_references<P: ResourcePort>(loader: RefLoader<'_, P, InvoiceRefs>) {
        futures::join!(
            loader.load(|r| &mut r.service_requests),
            loader.load(|r| &mut r.parts),
            loader.load(|r| &mut r.addresses),
        );
    }

    fn row(i: &Invoice, refs: &InvoiceRefs) -> Vec<String> {
        let addresses = refs.addresses.items();
        vec![
            i.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            i.name.clone(),
            i.total_amount.clone(),
            yes_no(i.payment_status),
            resolve_labels(refs.service_requests.items(), &i.service_requests),
            resolve_labels(refs.parts.items(), &i.parts),
            resolve_label(addresses, i.billing_address.as_ref()),
            resolve_label(addresses, i.shipping_address.as_ref()),
        ]
    }

    fn unavailable_references(refs: &InvoiceRefs) -> Vec<EntityKind> {
        [
            refs.service_requests.unavailable_kind(),
            refs.parts.unavailable_kind(),
            refs.addresses.unavailable_kind(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
