//! End-to-end checks of every endpoint method against a recording transport:
//! configuration gate → request building → transport → body passthrough.

use std::sync::Arc;
use std::time::Duration;

use zum_client::{ClientConfig, FailureMode, HttpMethod, ServiceClient, TransportError, ZumError};
use zum_nullables::NullTransport;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.test";

fn client() -> ServiceClient<NullTransport> {
    ServiceClient::with_transport(ClientConfig::new(TOKEN), NullTransport::new())
}

fn client_with(config: ClientConfig) -> ServiceClient<NullTransport> {
    ServiceClient::with_transport(config, NullTransport::new())
}

/// Call every endpoint method once, collecting the results.
fn call_all(client: &ServiceClient<NullTransport>) -> Vec<Result<Vec<u8>, ZumError>> {
    vec![
        client.create_address(),
        client.delete_address("Zum1abc"),
        client.get_address("Zum1abc"),
        client.get_addresses(),
        client.scan_address("Zum1abc", 42),
        client.get_address_keys("Zum1abc"),
        client.integrate_address("Zum1abc", "pay1"),
        client.get_integrated_addresses("Zum1abc"),
        client.get_fee(12.5),
        client.create_transfer("Zum1from", "Zum1to", 1.0, 0.1, "", ""),
        client.get_transfer("ff00"),
        client.get_wallet(),
        client.get_status(),
    ]
}

fn body_pairs(body: &str) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = body
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k.to_string(), v.to_string())
        })
        .collect();
    pairs.sort();
    pairs
}

// ---------------------------------------------------------------------------
// Configuration gate
// ---------------------------------------------------------------------------

#[test]
fn empty_token_blocks_every_endpoint_without_network() {
    let client = client_with(ClientConfig::new(""));

    for result in call_all(&client) {
        let err = result.expect_err("missing token must be rejected");
        assert!(matches!(err, ZumError::Configuration(_)), "got {err:?}");
    }
    assert_eq!(client.transport().call_count(), 0);
}

#[test]
fn configuration_error_is_surfaced_even_in_collapse_mode() {
    let client =
        client_with(ClientConfig::new("").with_failure_mode(FailureMode::Collapse));
    let err = client.get_status().unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(client.transport().call_count(), 0);
}

#[test]
fn zero_timeout_sends_default_timeout() {
    let client = client_with(ClientConfig::new(TOKEN).with_timeout_ms(0));
    client.get_wallet().unwrap();
    let request = client.transport().last_request().unwrap();
    assert_eq!(request.timeout, Duration::from_millis(2000));
}

#[test]
fn configured_timeout_is_sent_per_request() {
    let client = client_with(ClientConfig::new(TOKEN).with_timeout_ms(125));
    client.get_wallet().unwrap();
    client.create_address().unwrap();
    for request in client.transport().requests() {
        assert_eq!(request.timeout, Duration::from_millis(125));
    }
}

// ---------------------------------------------------------------------------
// Route table
// ---------------------------------------------------------------------------

#[test]
fn every_endpoint_hits_its_route() {
    let client = client();
    for result in call_all(&client) {
        result.expect("null transport succeeds");
    }

    let base = "https://api.zum.services/v1";
    let expected = [
        (HttpMethod::Post, "address"),
        (HttpMethod::Delete, "address/Zum1abc"),
        (HttpMethod::Get, "address/Zum1abc"),
        (HttpMethod::Get, "address/all"),
        (HttpMethod::Get, "address/scan/Zum1abc/42"),
        (HttpMethod::Get, "address/keys/Zum1abc"),
        (HttpMethod::Post, "address/integrate"),
        (HttpMethod::Get, "address/integrate/Zum1abc"),
        (HttpMethod::Get, "transfer/fee/12.50"),
        (HttpMethod::Post, "transfer"),
        (HttpMethod::Get, "transfer/ff00"),
        (HttpMethod::Get, "wallet"),
        (HttpMethod::Get, "status"),
    ];

    let requests = client.transport().requests();
    assert_eq!(requests.len(), expected.len());
    for (request, (method, path)) in requests.iter().zip(expected.iter()) {
        assert_eq!(request.method, *method);
        assert_eq!(request.url, format!("{base}/{path}"));
    }
}

#[test]
fn path_parameters_pass_through_unescaped() {
    let client = client();
    client.get_address("Zum 1/abc").unwrap();
    assert_eq!(
        client.transport().last_request().unwrap().url,
        "https://api.zum.services/v1/address/Zum 1/abc"
    );
}

#[test]
fn fee_amount_is_rendered_with_two_decimals() {
    let client = client();
    client.get_fee(0.0).unwrap();
    client.get_fee(3.14159).unwrap();
    let urls: Vec<_> = client
        .transport()
        .requests()
        .into_iter()
        .map(|r| r.url)
        .collect();
    assert!(urls[0].ends_with("/transfer/fee/0.00"));
    assert!(urls[1].ends_with("/transfer/fee/3.14"));
}

// ---------------------------------------------------------------------------
// Headers and bodies
// ---------------------------------------------------------------------------

#[test]
fn get_and_delete_send_bare_token() {
    let client = client();
    client.get_status().unwrap();
    client.delete_address("Zum1abc").unwrap();

    for request in client.transport().requests() {
        assert_eq!(request.header("Authorization"), Some(TOKEN));
        assert!(request.body.is_none());
    }
}

#[test]
fn post_sends_bearer_token_and_form_content_type() {
    let client = client();
    client.create_address().unwrap();

    let request = client.transport().last_request().unwrap();
    assert_eq!(
        request.header("Authorization"),
        Some(format!("Bearer {TOKEN}").as_str())
    );
    assert_eq!(
        request.header("Content-Type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(request.body.as_deref(), Some(""));
}

#[test]
fn integrate_address_body() {
    let client = client();
    client.integrate_address("addr1", "pay1").unwrap();

    let request = client.transport().last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Post);
    assert!(request.url.ends_with("/address/integrate"));
    assert_eq!(
        body_pairs(request.body.as_deref().unwrap()),
        vec![
            ("address".to_string(), "addr1".to_string()),
            ("paymentId".to_string(), "pay1".to_string()),
        ]
    );
}

#[test]
fn transfer_without_optionals_omits_them() {
    let client = client();
    client
        .create_transfer("Zum1from", "Zum1to", 12.5, 0.1, "", "")
        .unwrap();

    let body = client.transport().last_request().unwrap().body.unwrap();
    assert_eq!(body, "amount=12.50&fee=0.10&from=Zum1from&to=Zum1to");
}

#[test]
fn transfer_with_optionals_includes_them() {
    let client = client();
    client
        .create_transfer("Zum1from", "Zum1to", 5.0, 0.25, "abcd", "memo")
        .unwrap();

    let body = client.transport().last_request().unwrap().body.unwrap();
    let pairs = body_pairs(&body);
    assert!(pairs.contains(&("paymentId".to_string(), "abcd".to_string())));
    assert!(pairs.contains(&("extra".to_string(), "memo".to_string())));
    assert!(pairs.contains(&("amount".to_string(), "5.00".to_string())));
    assert!(pairs.contains(&("fee".to_string(), "0.25".to_string())));
    assert_eq!(pairs.len(), 6);
}

// ---------------------------------------------------------------------------
// Responses and failures
// ---------------------------------------------------------------------------

#[test]
fn response_body_is_returned_verbatim() {
    let client = client();
    let raw = br#"{"address":"Zum1abc","balance":0}"#.to_vec();
    client.transport().enqueue_body(raw.clone());
    assert_eq!(client.get_address("Zum1abc").unwrap(), raw);
}

#[test]
fn non_utf8_body_is_passed_through() {
    let client = client();
    client.transport().enqueue_body(vec![0xff, 0x00, 0xfe]);
    assert_eq!(client.get_status().unwrap(), vec![0xff, 0x00, 0xfe]);
}

#[test]
fn transport_failure_is_surfaced_by_default() {
    let client = client();
    client
        .transport()
        .enqueue_error(TransportError::Timeout("deadline elapsed".into()));

    let err = client.get_wallet().unwrap_err();
    assert!(matches!(
        err,
        ZumError::Transport(TransportError::Timeout(_))
    ));
}

#[test]
fn collapse_mode_turns_transport_failure_into_empty_body() {
    let client =
        client_with(ClientConfig::new(TOKEN).with_failure_mode(FailureMode::Collapse));
    client
        .transport()
        .enqueue_error(TransportError::Connect("refused".into()));

    let body = client.get_wallet().expect("collapsed to empty");
    assert!(body.is_empty());
    assert_eq!(client.transport().call_count(), 1);
}

#[test]
fn client_is_shareable_across_threads() {
    let client = Arc::new(client());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = Arc::clone(&client);
            std::thread::spawn(move || client.scan_address("Zum1abc", i * 100))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }
    assert_eq!(client.transport().call_count(), 4);
}
