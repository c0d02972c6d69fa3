use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fieldops_admin::domain::repository::ResourcePort;
use fieldops_admin::infra::form::WriteEncoding;
use fieldops_admin::infra::http::HttpApi;
use fieldops_admin::infra::session::StaticSession;
use fieldops_admin::usecase::page::EntityPage;
use fieldops_admin::usecase::pages::PartPage;
use fieldops_core::error::FetchError;
use fieldops_domain::{Address, Customer, Invoice, RecordId, Supplier};
use fieldops_testing::fixture;

fn api(
    server: &MockServer,
    session: StaticSession,
    encoding: WriteEncoding,
) -> HttpApi<StaticSession> {
    HttpApi::new(&server.uri(), session, encoding, Duration::from_secs(5)).unwrap()
}

fn invoice_5() -> Invoice {
    fixture::records::<Invoice>("invoices").remove(0)
}

// ── Reads ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_send_token_header_and_decode_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/address/"))
        .and(header("Authorization", "Token abc123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixture::load("fixtures/addresses.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server, StaticSession::new("abc123"), WriteEncoding::default());
    let addresses: Vec<Address> = api.list().await.unwrap();

    assert_eq!(addresses.len(), 3);
    assert_eq!(addresses[2].city, "Keene");
}

#[tokio::test]
async fn should_send_request_without_auth_header_when_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/supplier/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let api = api(&server, StaticSession::anonymous(), WriteEncoding::default());
    let suppliers: Vec<Supplier> = api.list().await.unwrap();

    assert!(suppliers.is_empty());
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
    assert_eq!(
        requests[0].headers.get("accept").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
}

#[tokio::test]
async fn should_map_non_success_status_to_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let api = api(&server, StaticSession::anonymous(), WriteEncoding::default());
    let err = api.list::<Customer>().await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 503, .. }), "got {err:?}");
    assert!(err.is_transient());
}

#[tokio::test]
async fn should_report_decode_error_for_unexpected_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let api = api(&server, StaticSession::anonymous(), WriteEncoding::default());
    let err = api.list::<Customer>().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }), "got {err:?}");
    assert!(!err.is_transient());
}

#[tokio::test]
async fn should_report_transport_error_when_server_is_unreachable() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let api = HttpApi::new(
        &format!("http://127.0.0.1:{port}"),
        StaticSession::anonymous(),
        WriteEncoding::default(),
        Duration::from_secs(5),
    )
    .unwrap();
    let err = api.list::<Address>().await.unwrap_err();

    assert!(matches!(err, FetchError::Transport { .. }), "got {err:?}");
    assert!(err.is_transient());
}

#[tokio::test]
async fn should_render_rows_from_loosely_typed_list_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/parts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Pressure valve", "price": 24.9, "tax": 5,
             "description": null, "quantity_in_stock": 12, "supplier": 1},
            {"id": 2, "name": "Thermostat", "price": "59.00", "tax": "11.80",
             "description": "Programmable", "quantity_in_stock": 0, "supplier": null}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/supplier/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Acme Components", "contact_person_email": null,
             "phone_number": 5550100, "address": 1}
        ])))
        .mount(&server)
        .await;

    let page = EntityPage::<PartPage, _>::new(api(
        &server,
        StaticSession::anonymous(),
        WriteEncoding::default(),
    ));
    page.activate().await.unwrap();

    assert!(page.is_loaded());
    assert!(!page.is_stale());
    assert!(page.references().suppliers.is_loaded());
    let rows = page.rows();
    assert_eq!(
        rows[0],
        ["1", "Pressure valve", "24.9", "5", "", "12", "Acme Components"]
    );
    assert_eq!(rows[1][5], "0");
    assert_eq!(rows[1][6], "");
}

// ── Writes ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_post_multipart_form_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customers/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server, StaticSession::new("t"), WriteEncoding::Multipart);
    let customer = Customer {
        id: Some(RecordId::placeholder()),
        name: "Ana".to_owned(),
        surname: "Lee".to_owned(),
        service_requests: vec![RecordId::from(7), RecordId::from(8)],
        ..Customer::default()
    };
    api.create(&customer).await.unwrap();

    let request = &server.received_requests().await.unwrap()[0];
    let content_type = request.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"), "got {content_type}");
    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"surname\"\r\n\r\nLee"));
    assert_eq!(body.matches("name=\"service_requests\"").count(), 2);
    assert!(!body.contains("name=\"id\""));
}

#[tokio::test]
async fn should_put_urlencoded_form_to_record_url() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/invoices/5/"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server, StaticSession::new("t"), WriteEncoding::Urlencoded);
    let mut invoice = invoice_5();
    invoice.payment_status = true;
    api.update(&RecordId::from(5), &invoice).await.unwrap();

    let request = &server.received_requests().await.unwrap()[0];
    let body = String::from_utf8_lossy(&request.body);
    assert_eq!(
        body,
        "name=INV-2024-005&total_amount=168.70&payment_status=true\
         &service_requests=7&parts=1&parts=2&billing_address=3&shipping_address=3"
    );
}

#[tokio::test]
async fn should_delete_record_url_and_surface_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/supplier/2/"))
        .respond_with(ResponseTemplate::new(204))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/supplier/2/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = api(&server, StaticSession::new("t"), WriteEncoding::default());
    api.remove::<Supplier>(&RecordId::from(2)).await.unwrap();
    let err = api.remove::<Supplier>(&RecordId::from(2)).await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 404, .. }), "got {err:?}");
    assert!(!err.is_transient());
}
