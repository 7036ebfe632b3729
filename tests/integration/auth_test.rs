//! Integration tests for the authentication flow.

use std::sync::Arc;

use http::StatusCode;

use cpfauth_auth::jwt::JwtDecoder;
use cpfauth_core::config::AppConfig;
use cpfauth_core::error::AppError;
use cpfauth_core::types::{DirectoryAttribute, DirectoryUser};
use cpfauth_directory::providers::MemoryDirectory;

use crate::helpers::{
    self, FailingDirectory, FailingSigner, StaticDirectory, TEST_SECRET, TestApp,
};

#[tokio::test]
async fn test_end_to_end_example() {
    let app = TestApp::new();

    let response = app.post(r#"{"cpf":"12345678900"}"#).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        "Authentication successful! JWT token generated."
    );
    assert_eq!(response.body["username"], "u-123");
    assert_eq!(response.body["cpf"], "12345678900");
    assert_eq!(response.body["attributes"]["email"], "a@b.com");
    assert_eq!(response.body["expiresIn"], "24h");

    let token = response.body["token"].as_str().expect("token");
    let claims = JwtDecoder::from_secret(TEST_SECRET.as_bytes())
        .decode(token)
        .expect("valid token");
    assert_eq!(claims.sub, "u-123");
    assert_eq!(claims.cpf, "12345678900");
    assert_eq!(claims.exp - claims.iat, 86_400);
}

#[tokio::test]
async fn test_token_lifetime_is_fixed() {
    let config = AppConfig::load_from(
        "test-none",
        [
            ("CPFAUTH__AUTH__TOKEN_TTL_HOURS", "48"),
            ("COGNITO_USER_POOL_ID", "us-east-1_TestPool"),
            ("JWT_SECRET", TEST_SECRET),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string())),
    )
    .expect("config");
    let app = TestApp::build(config, Arc::new(helpers::example_directory()), None);

    let response = app.post(r#"{"cpf":"12345678900"}"#).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["expiresIn"], "24h");
    let claims = JwtDecoder::from_secret(TEST_SECRET.as_bytes())
        .decode(response.body["token"].as_str().expect("token"))
        .expect("valid token");
    assert_eq!(claims.exp - claims.iat, 86_400);
}

#[tokio::test]
async fn test_attributes_map_every_named_attribute() {
    let directory = StaticDirectory::new(vec![DirectoryUser::new(
        "u-9",
        vec![
            DirectoryAttribute::new("preferred_username", "999"),
            DirectoryAttribute::new("email", "old@b.com"),
            DirectoryAttribute::new("", "dropped"),
            DirectoryAttribute::new("email", "new@b.com"),
            DirectoryAttribute::new("name", "Maria"),
        ],
    )]);
    let app = TestApp::with_directory(Arc::new(directory));

    let response = app.post(r#"{"cpf":"12345678900"}"#).await;

    assert_eq!(response.status, StatusCode::OK);
    let attributes = response.body["attributes"].as_object().expect("attributes");
    assert_eq!(attributes.len(), 3);
    assert_eq!(attributes["email"], "new@b.com");
    assert_eq!(attributes["name"], "Maria");
    // The echoed CPF is the submitted one, not the directory attribute.
    assert_eq!(response.body["cpf"], "12345678900");
    assert_eq!(attributes["preferred_username"], "999");
}

#[tokio::test]
async fn test_directory_query_shape() {
    let directory = Arc::new(StaticDirectory::new(vec![helpers::example_user()]));
    let app = TestApp::with_directory(directory.clone());

    app.post(r#"{"cpf":"12345678900"}"#).await;

    let queries = directory.queries.lock().expect("lock");
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].pool_id, "us-east-1_TestPool");
    assert_eq!(queries[0].limit, 1);
    assert_eq!(
        queries[0].filter_expression(),
        r#"preferred_username = "12345678900""#
    );
}

#[tokio::test]
async fn test_first_match_wins() {
    let directory = StaticDirectory::new(vec![
        DirectoryUser::new("first", vec![]),
        DirectoryUser::new("second", vec![]),
    ]);
    let app = TestApp::with_directory(Arc::new(directory));

    let response = app.post(r#"{"cpf":"1"}"#).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], "first");
    assert!(response.body["attributes"].as_object().expect("map").is_empty());
}

#[tokio::test]
async fn test_malformed_body() {
    let app = TestApp::new();

    for body in ["", "{", "not json", r#"{"cpf":12345678900}"#] {
        let response = app.post(body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body {body:?}");
        assert_eq!(response.body["code"], "INVALID_BODY");
        assert_eq!(response.body["error"], "Invalid request body");
        assert!(response.body["details"].is_string());
    }
}

#[tokio::test]
async fn test_missing_cpf() {
    let app = TestApp::new();

    for body in ["{}", r#"{"cpf":""}"#, r#"{"cpf":null}"#, r#"{"other":"x"}"#] {
        let response = app.post(body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(response.body["code"], "MISSING_CPF");
        assert_eq!(response.body["error"], "CPF é obrigatório.");
        assert!(response.body.get("details").is_none());
    }
}

#[tokio::test]
async fn test_missing_user_pool() {
    let mut config = helpers::test_config();
    config.directory.user_pool_id = None;
    let app = TestApp::build(config, Arc::new(helpers::example_directory()), None);

    let response = app.post(r#"{"cpf":"12345678900"}"#).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["code"], "SERVER_CONFIG_ERROR");
    assert_eq!(response.body["error"], "Configuração do servidor inválida.");
}

#[tokio::test]
async fn test_body_checked_before_server_config() {
    let app = TestApp::build(
        AppConfig::default(),
        Arc::new(MemoryDirectory::new()),
        None,
    );

    let response = app.post("{}").await;
    assert_eq!(response.body["code"], "MISSING_CPF");
}

#[tokio::test]
async fn test_user_not_found() {
    let app = TestApp::new();

    let response = app.post(r#"{"cpf":"00000000000"}"#).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["code"], "USER_NOT_FOUND");
    assert_eq!(response.body["error"], "CPF não encontrado no sistema.");
}

#[tokio::test]
async fn test_aws_config_error() {
    let app = TestApp::with_directory(Arc::new(FailingDirectory(AppError::aws_config(
        "no AWS region resolved",
    ))));

    let response = app.post(r#"{"cpf":"12345678900"}"#).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["code"], "AWS_CONFIG_ERROR");
    assert_eq!(response.body["details"], "no AWS region resolved");
}

#[tokio::test]
async fn test_directory_failure() {
    let app = TestApp::with_directory(Arc::new(FailingDirectory(AppError::directory_lookup(
        "AccessDeniedException",
    ))));

    let response = app.post(r#"{"cpf":"12345678900"}"#).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["code"], "COGNITO_LIST_USERS_FAILED");
    assert_eq!(response.body["error"], "Falha ao buscar usuário.");
    assert_eq!(response.body["details"], "AccessDeniedException");
}

#[tokio::test]
async fn test_sign_failure() {
    let app = TestApp::build(
        helpers::test_config(),
        Arc::new(helpers::example_directory()),
        Some(Arc::new(FailingSigner)),
    );

    let response = app.post(r#"{"cpf":"12345678900"}"#).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["code"], "JWT_SIGN_ERROR");
    assert_eq!(response.body["details"], "key rejected");
}

#[tokio::test]
async fn test_classification_is_repeatable() {
    let app = TestApp::new();

    for body in [
        r#"{"cpf":"12345678900"}"#,
        r#"{"cpf":"00000000000"}"#,
        "{}",
        "garbage",
    ] {
        let first = app.post(body).await;
        let second = app.post(body).await;
        assert_eq!(first.status, second.status, "body {body}");
        assert_eq!(first.body["code"], second.body["code"], "body {body}");
    }

    let decoder = JwtDecoder::from_secret(TEST_SECRET.as_bytes());
    let a = app.post(r#"{"cpf":"12345678900"}"#).await;
    let b = app.post(r#"{"cpf":"12345678900"}"#).await;
    let ca = decoder.decode(a.body["token"].as_str().expect("token")).expect("a");
    let cb = decoder.decode(b.body["token"].as_str().expect("token")).expect("b");
    assert_eq!((ca.sub, ca.cpf), (cb.sub, cb.cpf));
}

#[tokio::test]
async fn test_non_options_methods_run_the_flow() {
    let app = TestApp::new();

    let response = app
        .request("PUT", "/", r#"{"cpf":"12345678900"}"#)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/", "").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "INVALID_BODY");
}

#[tokio::test]
async fn test_any_path_is_served() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/prod/auth", r#"{"cpf":"12345678900"}"#)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], "u-123");
    helpers::assert_cors_headers(&response);

    let response = app
        .request("POST", "/prod/auth", r#"{"cpf":"00000000000"}"#)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["code"], "USER_NOT_FOUND");
    helpers::assert_cors_headers(&response);
}

#[tokio::test]
async fn test_cpf_key_matches_any_case() {
    let app = TestApp::new();

    let response = app.post(r#"{"CPF":"12345678900"}"#).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["cpf"], "12345678900");

    let response = app
        .post(r#"{"cpf":"00000000000","Cpf":"12345678900"}"#)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], "u-123");
}
