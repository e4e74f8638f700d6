//! Integration tests for the HTTP fetcher against a local mock server.

use tote_transport::{Fetch, HttpFetcher, Transport, TransportError};

#[test]
fn test_fetches_bytes_over_http() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/config.yaml")
        .with_status(200)
        .with_body("test:\n  foo: 1\n")
        .create();

    let location = format!("{}/config.yaml", server.url());
    let bytes = HttpFetcher::new().fetch(&location).unwrap();

    assert_eq!(bytes, b"test:\n  foo: 1\n");
    mock.assert();
}

#[test]
fn test_missing_remote_source_is_not_found() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/missing.yaml")
        .with_status(404)
        .create();

    let location = format!("{}/missing.yaml", server.url());
    let result = HttpFetcher::new().fetch(&location);

    assert!(matches!(result, Err(TransportError::NotFound { .. })));
}

#[test]
fn test_server_error_reports_status() {
    let mut server = mockito::Server::new();
    server.mock("GET", "/broken.yaml").with_status(503).create();

    let location = format!("{}/broken.yaml", server.url());
    let result = HttpFetcher::new().fetch(&location);

    match result {
        Err(TransportError::HttpStatus { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn test_transport_dispatches_http_scheme() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/config.yaml")
        .with_status(200)
        .with_body("name: Joe\n")
        .create();

    let transport = Transport::new().with_http();
    let location = format!("{}/config.yaml", server.url());

    assert_eq!(transport.fetch(&location).unwrap(), b"name: Joe\n");
}
