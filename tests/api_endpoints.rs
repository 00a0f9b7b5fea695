//! Endpoint methods against a mock wallet service.

use std::time::Duration;

use serde_json::{json, Map};

use onewallet_client::client::{OneWalletApi, TransactionRequest};
use onewallet_client::config::parse_config;
use onewallet_client::http::ReqwestTransport;
use onewallet_client::ClientError;

mod common;

use common::Reply;

fn api(base_url: &str) -> OneWalletApi {
    let config = parse_config(
        &format!(
            r#"
            base_url = "{}"
            access_id = "TEST"
            secret_key = "123456Seven"
            timeout_ms = 300
            backoff_initial_delay_ms = 20

            [retries]
            transactions = 2
            "#,
            base_url
        ),
        None,
    )
    .unwrap();
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    OneWalletApi::with_transport(config, ReqwestTransport::with_client(client))
}

#[tokio::test]
async fn test_user_info_round_trip() {
    let backend = common::start_backend(|_| async {
        Reply::new(200, r#"{"balance":500,"currency":"EUR"}"#)
    })
    .await;

    let info = api(&backend.base_url())
        .get_user_info("1", Some(&["balance", "currency"][..]))
        .await
        .unwrap();

    assert_eq!(info, json!({"balance": 500, "currency": "EUR"}));
    let request = &backend.requests()[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.target, "/users/1?fields=balance%2Ccurrency");
    assert!(request.header("authorization").unwrap().starts_with("OW TEST:"));
}

#[tokio::test]
async fn test_debit_retries_timeouts_then_succeeds() {
    let backend = common::start_backend(|hit| async move {
        if hit < 2 {
            Reply::new(200, "{}").delayed(Duration::from_millis(600))
        } else {
            Reply::new(200, r#"{"balance":90}"#)
        }
    })
    .await;

    let mut details = Map::new();
    details.insert("amount".into(), json!("10.00"));

    let result = api(&backend.base_url())
        .debit(TransactionRequest {
            user_id: "1".into(),
            session_id: "s1".into(),
            round_id: Some("r1".into()),
            transaction_id: Some("t1".into()),
            details,
        })
        .await
        .unwrap();

    assert_eq!(result, json!({"balance": 90}));
    assert_eq!(backend.hits(), 3);
    for request in backend.requests() {
        assert_eq!(request.method, "PUT");
        assert_eq!(request.target, "/users/1/rounds/r1/transactions/t1?type=DEBIT&sessionId=s1");
        assert_eq!(request.body, r#"{"amount":"10.00"}"#);
    }
}

#[tokio::test]
async fn test_authenticate_rejection() {
    let backend = common::start_backend(|_| async {
        Reply::new(400, r#"{"code":"ERR_INVALID_CREDENTIALS","message":"Invalid username or password"}"#)
    })
    .await;

    let err = api(&backend.base_url())
        .authenticate_user("zenoan", "wrong")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Application { status: 400, .. }));
    assert_eq!(err.code(), "ERR_INVALID_CREDENTIALS");
    assert_eq!(err.to_string(), "ERR_INVALID_CREDENTIALS: Invalid username or password");
    assert_eq!(backend.hits(), 1);
}
