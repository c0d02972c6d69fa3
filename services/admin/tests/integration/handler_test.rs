use fieldops_admin::error::PageError;
use fieldops_admin::handlers::entity::{Assignment, EntityAction, run};
use fieldops_admin::usecase::pages::{AddressPage, InvoicePage, PartPage, SupplierPage};
use fieldops_domain::{EntityKind, RecordId};
use fieldops_testing::Op;

use crate::helpers::{loaded, page, seeded_store};

fn set(pairs: &[&str]) -> Vec<Assignment> {
    pairs.iter().map(|p| p.parse().unwrap()).collect()
}

#[tokio::test]
async fn should_list_parts_with_supplier_names() {
    let store = seeded_store();
    let mut page = page::<PartPage>(&store);

    let out = run(&mut page, EntityAction::List).await.unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[2].contains("Pressure valve") && lines[2].ends_with("Acme Components"));
    assert!(lines[3].ends_with("Bolt & Co"));
}

#[tokio::test]
async fn should_flag_blank_labels_when_reference_list_fails() {
    let store = seeded_store();
    store.fail_next(EntityKind::Supplier, Op::List, 500);
    let mut page = page::<PartPage>(&store);

    let out = run(&mut page, EntityAction::List).await.unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[2].ends_with("12"), "supplier column blank: {:?}", lines[2]);
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], "supplier list unavailable; labels may be blank");
    assert_eq!(lines.len(), 6);
}

#[tokio::test]
async fn should_fail_list_when_primary_fetch_fails() {
    let store = seeded_store();
    store.fail_next(EntityKind::Address, Op::List, 502);
    let mut page = page::<AddressPage>(&store);

    let err = run(&mut page, EntityAction::List).await.unwrap_err();

    assert!(matches!(err, PageError::Unavailable(EntityKind::Address)));
}

#[tokio::test]
async fn should_create_part_with_supplier_given_by_name() {
    let store = seeded_store();
    let mut page = page::<PartPage>(&store);

    let out = run(
        &mut page,
        EntityAction::Create {
            set: set(&["name=Gasket", "price=2.50", "supplier=Acme Components"]),
        },
    )
    .await
    .unwrap();

    assert_eq!(out, "Created part");
    assert_eq!(store.count(EntityKind::Part), 3);
}

#[tokio::test]
async fn should_update_only_assigned_fields() {
    let store = seeded_store();
    let mut page = page::<InvoicePage>(&store);

    run(
        &mut page,
        EntityAction::Update {
            id: RecordId::from(5),
            set: set(&["payment_status=yes"]),
        },
    )
    .await
    .unwrap();

    let invoice = loaded(&page, 5).unwrap();
    assert!(invoice.payment_status);
    assert_eq!(invoice.name, "INV-2024-005");
    assert_eq!(invoice.parts, vec![RecordId::from(1), RecordId::from(2)]);
}

#[tokio::test]
async fn should_refuse_update_of_unlisted_record() {
    let store = seeded_store();
    let mut page = page::<SupplierPage>(&store);

    let err = run(
        &mut page,
        EntityAction::Update {
            id: RecordId::from(99),
            set: set(&["name=Nobody"]),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, PageError::NotLoaded(_)));
    assert!(!store.calls().iter().any(|c| c.op == Op::Update));
}

#[tokio::test]
async fn should_delete_and_report_id() {
    let store = seeded_store();
    let mut page = page::<SupplierPage>(&store);

    let out = run(
        &mut page,
        EntityAction::Delete {
            id: RecordId::from("2"),
        },
    )
    .await
    .unwrap();

    assert_eq!(out, "Deleted supplier 2");
    assert_eq!(store.count(EntityKind::Supplier), 1);
}
