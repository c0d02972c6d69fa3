use fieldops_admin::error::PageError;
use fieldops_admin::usecase::page::{EditTransition, FormState};
use fieldops_admin::usecase::pages::{
    CustomerPage, InvoicePage, PartPage, SupplierPage, TechnicianPage,
};
use fieldops_core::error::FetchError;
use fieldops_domain::{Entity, EntityKind, RecordId};
use fieldops_testing::Op;

use crate::helpers::{loaded, page, seeded_store};

// ── Create / update / remove ─────────────────────────────────────────────────

#[tokio::test]
async fn should_show_created_customer_with_server_id_after_reload() {
    let store = seeded_store();
    let mut page = page::<CustomerPage>(&store);
    page.activate().await.unwrap();
    assert_eq!(page.records().items().len(), 1);

    page.set_input("name", "Ana").unwrap();
    page.set_input("surname", "Lee").unwrap();
    page.set_input("address", "2").unwrap();
    page.submit().await.unwrap();

    let records = page.records();
    assert_eq!(records.items().len(), 2);
    let created = records
        .items()
        .iter()
        .find(|c| c.name == "Ana")
        .expect("created customer should be listed");
    assert!(created.id().is_some(), "server id should replace the placeholder");
    assert_eq!(created.surname, "Lee");
    drop(records);

    assert_eq!(page.form(), &FormState::default());
    let row = page
        .rows()
        .into_iter()
        .find(|row| row[1] == "Ana")
        .unwrap();
    assert_eq!(row[5], "88 Mill St, , Dover, US");
}

#[tokio::test]
async fn should_update_payment_status_and_keep_other_fields() {
    let store = seeded_store();
    let mut page = page::<InvoicePage>(&store);
    page.activate().await.unwrap();
    let before = loaded(&page, 5).unwrap();
    assert!(!before.payment_status);

    page.begin_edit(&RecordId::from(5)).unwrap();
    page.set_input("payment_status", "true").unwrap();
    page.submit().await.unwrap();

    let after = loaded(&page, 5).unwrap();
    assert!(after.payment_status);
    assert_eq!(after.total_amount, before.total_amount);
    assert_eq!(after.parts, before.parts);
    assert_eq!(after.service_requests, before.service_requests);
    assert!(page.form().editing_id().is_none());

    let update = store
        .calls()
        .into_iter()
        .find(|c| c.op == Op::Update)
        .unwrap();
    assert_eq!(update.kind, EntityKind::Invoice);
    assert_eq!(update.id, Some(RecordId::from(5)));
}

#[tokio::test]
async fn should_resolve_deleted_supplier_to_empty_label() {
    let store = seeded_store();
    let mut suppliers = page::<SupplierPage>(&store);
    suppliers.remove(&RecordId::from(2)).await.unwrap();
    assert!(loaded(&suppliers, 2).is_none());

    let parts = page::<PartPage>(&store);
    parts.activate().await.unwrap();
    let rows = parts.rows();
    assert_eq!(rows[0][6], "Acme Components");
    assert_eq!(rows[1][0], "2");
    assert_eq!(rows[1][6], "", "dangling supplier id renders empty, not an error");
}

#[tokio::test]
async fn should_surface_not_found_when_removing_twice() {
    let store = seeded_store();
    let mut page = page::<SupplierPage>(&store);
    page.activate().await.unwrap();

    page.remove(&RecordId::from(2)).await.unwrap();
    let result = page.remove(&RecordId::from(2)).await;

    assert!(
        matches!(
            result,
            Err(PageError::Fetch(FetchError::Status { status: 404, .. }))
        ),
        "expected 404, got {result:?}"
    );
    assert!(loaded(&page, 2).is_none());
    assert!(loaded(&page, 1).is_some());
}

#[tokio::test]
async fn should_return_to_idle_when_edited_record_is_removed() {
    let store = seeded_store();
    let mut page = page::<SupplierPage>(&store);
    page.activate().await.unwrap();
    page.begin_edit(&RecordId::from(1)).unwrap();

    page.remove(&RecordId::from(1)).await.unwrap();

    assert!(page.form().editing_id().is_none());
}

#[tokio::test]
async fn should_store_supplier_id_for_part_entered_by_name() {
    let store = seeded_store();
    let mut page = page::<PartPage>(&store);
    page.activate().await.unwrap();

    page.set_input("name", "Gasket").unwrap();
    page.set_input("supplier", "Bolt & Co").unwrap();
    page.submit().await.unwrap();

    let created = page
        .records()
        .items()
        .iter()
        .find(|p| p.name == "Gasket")
        .cloned()
        .unwrap();
    assert_eq!(created.supplier, Some(RecordId::from(2)));
}

// ── Failure policy ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_keep_form_input_when_submit_fails() {
    let store = seeded_store();
    let mut page = page::<CustomerPage>(&store);
    page.activate().await.unwrap();
    page.set_input("name", "Ana").unwrap();
    store.fail_next(EntityKind::Customer, Op::Create, 500);

    let err = page.submit().await.unwrap_err();

    assert!(err.is_transient());
    assert_eq!(page.form().draft().name, "Ana");
    assert_eq!(store.count(EntityKind::Customer), 1);

    page.submit().await.unwrap();
    assert_eq!(store.count(EntityKind::Customer), 2);
}

#[tokio::test]
async fn should_mark_list_stale_and_keep_data_when_refresh_fails() {
    let store = seeded_store();
    let page = page::<PartPage>(&store);
    page.activate().await.unwrap();
    assert!(!page.is_stale());

    store.fail_next(EntityKind::Part, Op::List, 503);
    page.reload().await;

    assert!(page.is_stale());
    assert_eq!(page.records().items().len(), 2);

    page.reload().await;
    assert!(!page.is_stale());
}

#[tokio::test]
async fn should_recover_failed_reference_fetch_on_activation() {
    let store = seeded_store();
    store.fail_next(EntityKind::Supplier, Op::List, 500);
    let page = page::<PartPage>(&store);

    page.activate().await.unwrap();

    assert!(page.is_loaded());
    let refs = page.references();
    assert!(refs.suppliers.is_stale());
    assert!(!refs.suppliers.is_loaded());
    drop(refs);
    assert!(page.rows().iter().all(|row| row[6].is_empty()));
}

// ── Editing ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_discarded_input_when_edit_is_replaced() {
    let store = seeded_store();
    let mut page = page::<TechnicianPage>(&store);
    page.activate().await.unwrap();

    page.set_input("first_name", "Unsaved").unwrap();
    let transition = page.begin_edit(&RecordId::from(1)).unwrap();

    match transition {
        EditTransition::Replaced { discarded } => assert_eq!(discarded.first_name, "Unsaved"),
        other => panic!("expected Replaced, got {other:?}"),
    }
    assert_eq!(page.form().draft().first_name, "Maria");
}

#[tokio::test]
async fn should_reject_unknown_field_input() {
    let store = seeded_store();
    let mut page = page::<TechnicianPage>(&store);
    let err = page.set_input("last_login", "2024-01-01").unwrap_err();
    assert_eq!(err.kind(), "INVALID_FIELD");
}

// ── Concurrency ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_render_rows_before_every_reference_list_arrives() {
    let store = seeded_store();
    let gate = store.hold(EntityKind::Address);
    let page = page::<CustomerPage>(&store);

    let observe = async {
        while !page.is_loaded() || !page.references().service_requests.is_loaded() {
            tokio::task::yield_now().await;
        }
        let row = page.rows().remove(0);
        assert_eq!(row[5], "", "address pending: label renders empty");
        assert_eq!(row[6], "Boiler inspection");
        gate.send_replace(true);
    };
    let (activated, ()) = tokio::join!(page.activate(), observe);
    activated.unwrap();

    let row = page.rows().remove(0);
    assert_eq!(row[5], "4 Elm Ct, Apt 9, Keene, US");
}

#[tokio::test]
async fn should_discard_results_arriving_after_page_end() {
    let store = seeded_store();
    let gate = store.hold(EntityKind::Customer);
    let mut page = page::<CustomerPage>(&store);

    let end_early = async {
        tokio::task::yield_now().await;
        page.lifetime().end();
        gate.send_replace(true);
    };
    let (activated, ()) = tokio::join!(page.activate(), end_early);

    assert!(activated.is_ok());
    assert!(!page.is_loaded(), "late primary list must not be applied");
    assert!(matches!(page.submit().await, Err(PageError::Cancelled)));
}
