mod common;

use chrono::Utc;
use common::{BASIC_AUTH, Fixture};
use mockito::Matcher;
use serde_json::json;
use spotq::{config::Config, management::{TokenManager, record}};

fn token_body(access: &str, refresh: Option<&str>, expires_in: i64) -> String {
    let mut body = json!({
        "access_token": access,
        "token_type": "Bearer",
        "scope": "user-top-read",
        "expires_in": expires_in
    });
    if let Some(refresh) = refresh {
        body["refresh_token"] = json!(refresh);
    }
    body.to_string()
}

#[test]
fn test_unexpired_token_is_reused_without_network() {
    let mut fixture = Fixture::new();
    fixture.write_record("access-1", Some("refresh-1"), 3600);
    let token_mock = fixture.server.mock("POST", "/api/token").expect(0).create();
    let authorize_mock = fixture
        .server
        .mock("GET", "/authorize")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let mut tokens = fixture.token_manager();
    assert_eq!(tokens.get_valid_access_token().unwrap(), "access-1");
    assert_eq!(tokens.get_valid_access_token().unwrap(), "access-1");

    token_mock.assert();
    authorize_mock.assert();
    assert!(fixture.prompt.opened.borrow().is_empty());
}

#[test]
fn test_expired_token_is_refreshed_and_persisted() {
    let mut fixture = Fixture::new();
    fixture.write_record("access-1", Some("refresh-1"), -60);
    let refresh_mock = fixture
        .server
        .mock("POST", "/api/token")
        .match_header("authorization", BASIC_AUTH)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
            Matcher::UrlEncoded("refresh_token".into(), "refresh-1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body("access-2", Some("refresh-2"), 3600))
        .expect(1)
        .create();

    let mut tokens = fixture.token_manager();
    assert_eq!(tokens.get_valid_access_token().unwrap(), "access-2");
    // a second call is served from memory
    assert_eq!(tokens.get_valid_access_token().unwrap(), "access-2");
    refresh_mock.assert();

    let held = tokens.current_credentials();
    assert_eq!(held.access_token.as_deref(), Some("access-2"));
    assert_eq!(held.refresh_token.as_deref(), Some("refresh-1"));
    assert!(held.access_token_expires > Utc::now());

    let saved = record::load_record(&fixture.record_path()).unwrap();
    assert_eq!(saved.access_token.as_deref(), Some("access-2"));
    assert_eq!(saved.refresh_token.as_deref(), Some("refresh-1"));
    assert_eq!(saved.authorization_code.as_deref(), Some("old-code"));
    assert!(saved.access_token_expires > Utc::now());
}

#[test]
fn test_malformed_record_runs_interactive_flow() {
    let mut fixture = Fixture::new();
    fixture.write_raw_record(r#"["old-code","access-1","refresh-1"]"#);

    let authorize_mock = fixture
        .server
        .mock("GET", "/authorize")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("client_id".into(), "client".into()),
            Matcher::UrlEncoded("response_type".into(), "code".into()),
            Matcher::UrlEncoded(
                "redirect_uri".into(),
                "http://localhost:8888/callback".into(),
            ),
            Matcher::UrlEncoded("scope".into(), "user-top-read".into()),
        ]))
        .with_status(200)
        .expect(1)
        .create();
    let exchange_mock = fixture
        .server
        .mock("POST", "/api/token")
        .match_header("authorization", BASIC_AUTH)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
            Matcher::UrlEncoded("code".into(), "the-code".into()),
            Matcher::UrlEncoded(
                "redirect_uri".into(),
                "http://localhost:8888/callback".into(),
            ),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body("access-new", Some("refresh-new"), 3600))
        .expect(1)
        .create();

    let mut tokens = fixture.token_manager();
    assert_eq!(tokens.get_valid_access_token().unwrap(), "access-new");
    authorize_mock.assert();
    exchange_mock.assert();

    let opened = fixture.prompt.opened.borrow();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].starts_with(&format!("{}/authorize?", fixture.server.url())));
    assert!(opened[0].contains("scope=user-top-read"));

    let saved = record::load_record(&fixture.record_path()).unwrap();
    assert_eq!(saved.authorization_code.as_deref(), Some("the-code"));
    assert_eq!(saved.access_token.as_deref(), Some("access-new"));
    assert_eq!(saved.refresh_token.as_deref(), Some("refresh-new"));
}

#[test]
fn test_missing_record_runs_interactive_flow() {
    let mut fixture = Fixture::new();
    let authorize_mock = fixture
        .server
        .mock("GET", "/authorize")
        .match_query(Matcher::Any)
        .with_status(200)
        .expect(1)
        .create();
    let exchange_mock = fixture
        .server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body("access-new", Some("refresh-new"), 3600))
        .expect(1)
        .create();

    let mut tokens = fixture.token_manager();
    assert_eq!(tokens.get_valid_access_token().unwrap(), "access-new");
    authorize_mock.assert();
    exchange_mock.assert();
    assert!(fixture.record_path().is_file());
}

#[test]
fn test_missing_client_secret_fails_before_network() {
    let mut fixture = Fixture::new();
    let authorize_mock = fixture
        .server
        .mock("GET", "/authorize")
        .match_query(Matcher::Any)
        .expect(0)
        .create();
    let token_mock = fixture.server.mock("POST", "/api/token").expect(0).create();

    let config = Config {
        client_secret: String::new(),
        ..fixture.config()
    };
    let mut tokens = TokenManager::with_prompt(config, fixture.prompt.clone());

    let err = tokens.get_valid_access_token().unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "You must set client id and client secret!");
    authorize_mock.assert();
    token_mock.assert();
}

#[test]
fn test_missing_client_secret_fails_refresh_before_network() {
    let mut fixture = Fixture::new();
    fixture.write_record("access-1", Some("refresh-1"), -60);
    let token_mock = fixture.server.mock("POST", "/api/token").expect(0).create();

    let config = Config {
        client_id: String::new(),
        ..fixture.config()
    };
    let mut tokens = TokenManager::with_prompt(config, fixture.prompt.clone());

    let err = tokens.get_valid_access_token().unwrap_err();
    assert_eq!(err.to_string(), "You must set client id and client secret!");
    token_mock.assert();
}

#[test]
fn test_authorization_page_error_fails_authentication() {
    let mut fixture = Fixture::new();
    fixture
        .server
        .mock("GET", "/authorize")
        .match_query(Matcher::Any)
        .with_status(500)
        .create();
    let token_mock = fixture.server.mock("POST", "/api/token").expect(0).create();

    let mut tokens = fixture.token_manager();
    let err = tokens.get_valid_access_token().unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Authentication failed!");
    assert!(fixture.prompt.opened.borrow().is_empty());
    token_mock.assert();
}

#[test]
fn test_rejected_code_exchange_is_an_error() {
    let mut fixture = Fixture::new();
    fixture
        .server
        .mock("GET", "/authorize")
        .match_query(Matcher::Any)
        .with_status(200)
        .create();
    fixture
        .server
        .mock("POST", "/api/token")
        .with_status(400)
        .with_body(r#"{"error":"invalid_grant"}"#)
        .create();

    let mut tokens = fixture.token_manager();
    let err = tokens.get_valid_access_token().unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("400"));
    assert!(!fixture.record_path().exists());
}

#[test]
fn test_expired_record_without_refresh_token_authorizes_again() {
    let mut fixture = Fixture::new();
    fixture.write_record("access-1", None, -60);
    let authorize_mock = fixture
        .server
        .mock("GET", "/authorize")
        .match_query(Matcher::Any)
        .with_status(200)
        .expect(1)
        .create();
    let exchange_mock = fixture
        .server
        .mock("POST", "/api/token")
        .match_body(Matcher::UrlEncoded(
            "grant_type".into(),
            "authorization_code".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body("access-new", Some("refresh-new"), 3600))
        .expect(1)
        .create();

    let mut tokens = fixture.token_manager();
    assert_eq!(tokens.get_valid_access_token().unwrap(), "access-new");
    authorize_mock.assert();
    exchange_mock.assert();
    assert_eq!(fixture.prompt.opened.borrow().len(), 1);

    // the dead record is replaced, the next run restores the new one
    let saved = record::load_record(&fixture.record_path()).unwrap();
    assert_eq!(saved.access_token.as_deref(), Some("access-new"));
    assert_eq!(saved.refresh_token.as_deref(), Some("refresh-new"));
}

#[test]
fn test_unexpired_record_without_refresh_token_is_reused() {
    let mut fixture = Fixture::new();
    fixture.write_record("access-1", None, 3600);
    let token_mock = fixture.server.mock("POST", "/api/token").expect(0).create();

    let mut tokens = fixture.token_manager();
    assert_eq!(tokens.get_valid_access_token().unwrap(), "access-1");
    token_mock.assert();
    assert!(fixture.prompt.opened.borrow().is_empty());
}

#[test]
fn test_token_retrieval_gives_up_after_one_retry() {
    let mut fixture = Fixture::new();
    fixture
        .server
        .mock("GET", "/authorize")
        .match_query(Matcher::Any)
        .with_status(200)
        .expect(1)
        .create();
    // every issued token is already expired
    let token_mock = fixture
        .server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body("access-stale", Some("refresh-1"), 0))
        .expect(2)
        .create();

    let mut tokens = fixture.token_manager();
    let err = tokens.get_valid_access_token().unwrap_err();
    assert_eq!(err.to_string(), "Spotify did not issue a usable access token");
    token_mock.assert();
}

#[test]
fn test_refresh_without_held_token_is_an_error() {
    let fixture = Fixture::new();
    let mut tokens = fixture.token_manager();
    assert!(tokens.refresh().unwrap_err().is_validation());
}
