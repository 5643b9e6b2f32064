//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: Client → signed HTTP requests → lazy pages → typed items

use gdax_rest::auth::{ACCESS_KEY, ACCESS_PASSPHRASE, ACCESS_SIGN, ACCESS_TIMESTAMP};
use gdax_rest::{
    Client, ClientConfig, Credentials, Error, Order, OrderType, PagerState, Report, ReportFormat,
    ReportStatus, Side,
};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::matchers::{
    body_partial_json, header, header_exists, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LEDGER_ACCOUNT: &str = "6cf2b1ba-3705-40e6-a41e-69be033514f7";
const HOLDS_ACCOUNT: &str = "e0b3f39a-183d-453e-b754-0c13e5bab0b3";

fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig {
        endpoint: server.uri(),
        ..Default::default()
    };
    Client::from_config(&config).unwrap()
}

fn ledger_entry(order_id: &str, created_at: &str, balance: &str) -> Value {
    json!({
        "id": 100,
        "created_at": created_at,
        "amount": "0.001",
        "balance": balance,
        "type": "fee",
        "details": {
            "order_id": order_id,
            "trade_id": "74",
            "product_id": "BTC-USD"
        }
    })
}

fn hold(id: &str, amount: &str) -> Value {
    json!({
        "id": id,
        "account_id": HOLDS_ACCOUNT,
        "created_at": "2014-11-06T10:34:47.123456Z",
        "updated_at": "2014-11-06T10:40:47.123456Z",
        "amount": amount,
        "type": "order",
        "ref": "ba2a968c-17f9-4fcb-90d7-eb6f2ac49538"
    })
}

// ============================================================================
// Cursor Pagination
// ============================================================================

#[tokio::test]
async fn test_account_history_follows_cursor() {
    let server = MockServer::start().await;
    let ledger_path = format!("/accounts/{LEDGER_ACCOUNT}/ledger");

    Mock::given(method("GET"))
        .and(path(ledger_path.as_str()))
        .and(query_param_is_missing("after"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([ledger_entry(
                    "d50ec984-77a8-460a-b958-66f114b0de9b",
                    "2014-11-07T08:19:27.028459Z",
                    "239.669"
                )]))
                .insert_header("CB-AFTER", "10"),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(ledger_path.as_str()))
        .and(query_param("after", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([ledger_entry(
                    "62087add-1eea-47fc-b79f-8cde52b458d6",
                    "2014-11-07T08:19:29.028459Z",
                    "170.322"
                )]))
                .insert_header("CB-AFTER", "20"),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(ledger_path.as_str()))
        .and(query_param("after", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut ledger = client.get_account_history(Uuid::parse_str(LEDGER_ACCOUNT).unwrap());

    let mut order_ids = Vec::new();
    while ledger.has_more().await {
        let entry = ledger.take_next().unwrap();
        order_ids.push(entry.details.order_id.unwrap().to_string());
    }

    assert_eq!(
        order_ids,
        vec![
            "d50ec984-77a8-460a-b958-66f114b0de9b",
            "62087add-1eea-47fc-b79f-8cde52b458d6"
        ]
    );
    assert_eq!(ledger.requests_made(), 3);
    assert_eq!(ledger.state(), PagerState::Exhausted);
    assert!(ledger.take_next().unwrap_err().is_exhausted());
}

#[tokio::test]
async fn test_account_holds_amounts_across_pages() {
    let server = MockServer::start().await;
    let holds_path = format!("/accounts/{HOLDS_ACCOUNT}/holds");

    Mock::given(method("GET"))
        .and(path(holds_path.as_str()))
        .and(query_param_is_missing("after"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([
                    hold("82dcd140-c3c7-4507-8de4-2c529cd1a28f", "4.23"),
                    hold("1fa18826-8f96-4640-b73a-752d85c69326", "5.25")
                ]))
                .insert_header("CB-AFTER", "10"),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(holds_path.as_str()))
        .and(query_param("after", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([hold("e6b60c60-42ed-4329-a311-694d6c897d9b", "6.34")]))
                .insert_header("CB-AFTER", "20"),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(holds_path.as_str()))
        .and(query_param("after", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let holds = client_for(&server)
        .get_account_holds(Uuid::parse_str(HOLDS_ACCOUNT).unwrap())
        .collect_all()
        .await
        .unwrap();

    let amounts: Vec<f64> = holds.iter().map(|h| h.amount).collect();
    assert_eq!(amounts, vec![4.23, 5.25, 6.34]);
    assert_eq!(
        holds[2].id,
        Uuid::parse_str("e6b60c60-42ed-4329-a311-694d6c897d9b").unwrap()
    );
}

#[tokio::test]
async fn test_accounts_single_page_without_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "71452118-efc7-4cc4-8780-a5e22d4baa53",
                "currency": "BTC",
                "balance": "0.0000000000000000",
                "available": "0.0000000000000000",
                "hold": "0.0000000000000000",
                "profile_id": "75da88c5-05bf-4f54-bc85-5c775bd68254"
            },
            {
                "id": "e316cb9a-0808-4fd7-8914-97829c1925de",
                "currency": "USD",
                "balance": "80.2301373066930000",
                "available": "79.2266348066930000",
                "hold": "1.0035025000000000",
                "profile_id": "75da88c5-05bf-4f54-bc85-5c775bd68254"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut accounts = client.get_accounts();

    let mut currencies = Vec::new();
    while accounts.has_more().await {
        currencies.push(accounts.take_next().unwrap().currency);
    }
    assert!(!accounts.has_more().await);
    assert_eq!(currencies, vec!["BTC", "USD"]);
}

#[tokio::test]
async fn test_failure_on_second_page_surfaces_after_first_page_items() {
    let server = MockServer::start().await;
    let holds_path = format!("/accounts/{HOLDS_ACCOUNT}/holds");

    Mock::given(method("GET"))
        .and(path(holds_path.as_str()))
        .and(query_param_is_missing("after"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([hold("82dcd140-c3c7-4507-8de4-2c529cd1a28f", "4.23")]))
                .insert_header("CB-AFTER", "10"),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(holds_path.as_str()))
        .and(query_param("after", "10"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut holds = client.get_account_holds(Uuid::parse_str(HOLDS_ACCOUNT).unwrap());

    assert!(holds.has_more().await);
    assert_eq!(holds.take_next().unwrap().amount, 4.23);

    assert!(!holds.has_more().await);
    assert_eq!(holds.state(), PagerState::Failed);

    for _ in 0..2 {
        let err = holds.take_next().unwrap_err();
        assert!(matches!(err, Error::PagerFailed { .. }));
        match err.root() {
            Error::HttpStatus { status, body } => {
                assert_eq!(*status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("Expected HttpStatus, got {other:?}"),
        }
        assert!(err.is_transport());
    }
}

#[tokio::test]
async fn test_orders_listing_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(query_param("status", "all"))
        .and(query_param("product_id", "BTC-USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "d0c5340b-6d6c-49d9-b567-48c4bfca13d2", "side": "buy", "status": "open"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let orders = client_for(&server)
        .get_orders_for_product("BTC-USD", &[])
        .collect_all()
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].side, Some(Side::Buy));
}

// ============================================================================
// Single-page collections
// ============================================================================

#[tokio::test]
async fn test_cancel_all_orders_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/orders"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([
                    "144c6f8e-713f-4682-8435-5280fbe8b2b4",
                    "debe4907-95dc-442f-af3b-cec12f42ebda"
                ]))
                .insert_header("CB-AFTER", "ignored"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut cancelled = client.cancel_all_orders();

    let mut ids = Vec::new();
    while cancelled.has_more().await {
        ids.push(cancelled.take_next().unwrap());
    }
    assert_eq!(ids.len(), 2);
    assert_eq!(cancelled.requests_made(), 1);
}

// ============================================================================
// Creation and reconciliation
// ============================================================================

#[tokio::test]
async fn test_market_order_keeps_generated_client_oid() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({"type": "market", "side": "buy"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "d0c5340b-6d6c-49d9-b567-48c4bfca13d2",
            "product_id": "BTC-USD",
            "side": "buy",
            "type": "market",
            "status": "pending",
            "created_at": "2016-12-08T20:02:28.53864Z",
            "settled": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let order = Order::market(Side::Buy, "BTC-USD", 0.01);
    let placed = client_for(&server).place_market_order(order).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let sent_oid = Uuid::parse_str(sent["client_oid"].as_str().unwrap()).unwrap();

    assert_eq!(sent_oid.get_version_num(), 4);
    assert_eq!(placed.client_oid, Some(sent_oid));
    assert_eq!(placed.size, Some(0.01));
    assert_eq!(placed.order_type, Some(OrderType::Market));
    assert_eq!(
        placed.id,
        Some(Uuid::parse_str("d0c5340b-6d6c-49d9-b567-48c4bfca13d2").unwrap())
    );
    assert_eq!(placed.settled, Some(false));
}

#[tokio::test]
async fn test_create_report_reconciles_request_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reports"))
        .and(body_partial_json(json!({"type": "fills", "product_id": "BTC-USD"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "0428b97b-bec1-429e-a94c-59232926778d",
            "type": "fills",
            "status": "pending",
            "created_at": "2015-01-06T10:34:47.000Z",
            "file_url": null
        })))
        .mount(&server)
        .await;

    let start = Utc.with_ymd_and_hms(2014, 11, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2014, 11, 30, 23, 59, 59).unwrap();
    let request = Report::fills("BTC-USD", start, end)
        .format(ReportFormat::Csv)
        .email("ops@example.com");

    let report = client_for(&server).create_report(&request).await.unwrap();

    assert_eq!(report.status, Some(ReportStatus::Pending));
    assert_eq!(report.start_date, Some(start));
    assert_eq!(report.end_date, Some(end));
    assert_eq!(report.format, Some(ReportFormat::Csv));
    assert_eq!(report.email.as_deref(), Some("ops@example.com"));
    assert_eq!(report.file_url, None);
}

#[tokio::test]
async fn test_report_status() {
    let server = MockServer::start().await;
    let id = "0428b97b-bec1-429e-a94c-59232926778d";

    Mock::given(method("GET"))
        .and(path(format!("/reports/{id}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "type": "account",
            "status": "ready",
            "file_url": "https://example.com/report.pdf"
        })))
        .mount(&server)
        .await;

    let report = client_for(&server)
        .get_report_status(Uuid::parse_str(id).unwrap())
        .await
        .unwrap();
    assert!(report.is_ready());
    assert_eq!(report.file_url.as_deref(), Some("https://example.com/report.pdf"));
}

// ============================================================================
// Configuration and signing
// ============================================================================

#[tokio::test]
async fn test_client_from_yaml_config_signs_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .and(header(ACCESS_KEY, "test-key"))
        .and(header(ACCESS_PASSPHRASE, "test-pass"))
        .and(header_exists(ACCESS_SIGN))
        .and(header_exists(ACCESS_TIMESTAMP))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let yaml = format!(
        r#"
endpoint: "{}"
timeout_secs: 5
rate_limit:
  requests_per_second: 50
  burst_size: 50
credentials:
  key: "test-key"
  secret: "Z2RheC10ZXN0LXNlY3JldC0wMTIzNDU2Nzg5YWJjZGVm"
  passphrase: "test-pass"
"#,
        server.uri()
    );
    let config = ClientConfig::from_yaml_str(&yaml).unwrap();
    let client = Client::from_config(&config).unwrap();

    let accounts = client.get_accounts().collect_all().await.unwrap();
    assert!(accounts.is_empty());
}

#[tokio::test]
async fn test_invalid_secret_fails_client_construction() {
    let config = ClientConfig::default().with_credentials(Credentials::new("k", "%%%", "p"));
    let err = Client::from_config(&config).unwrap_err();
    assert!(matches!(err, Error::Auth { .. }));
}
