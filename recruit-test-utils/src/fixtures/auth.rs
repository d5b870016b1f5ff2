//! EVE SSO JWT fixtures.
//!
//! A fresh RSA key pair signs the access token served by the mock token endpoint, and its
//! public half is served by the mock JWKS endpoint so the ESI client can validate it.

use std::time::Duration;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::Utc;
use eve_esi::model::oauth2::{EveJwtClaims, EveJwtKey, EveJwtKeys};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use mockito::Mock;
use oauth2::{
    basic::BasicTokenType, AccessToken, EmptyExtraTokenFields, RefreshToken,
    StandardTokenResponse,
};
use openssl::rsa::Rsa;

use crate::{constant::TEST_ESI_CLIENT_ID, TestContext};

pub static RSA_KEY_ID: &str = "JWT-Signature-Key-1";

impl TestContext {
    pub fn auth(&mut self) -> AuthFixtures<'_> {
        AuthFixtures { context: self }
    }
}

pub struct AuthFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// Create mock HTTP endpoints for the JWT authentication flow.
    ///
    /// 1. GET `/oauth/jwks` - JWT public keys for signature verification
    /// 2. POST `/v2/oauth/token` - signed JWT access token for the authorization code
    pub fn create_jwt_endpoints(&mut self, character_id: i64, owner_hash: &str) -> Vec<Mock> {
        let rsa = Rsa::generate(2048).expect("Failed to generate RSA key");
        let keys = mock_jwt_keys(&rsa);
        let token = mock_jwt_token(&rsa, mock_jwt_claims(character_id, owner_hash));

        let jwt_key_endpoint = self
            .context
            .server
            .mock("GET", "/oauth/jwks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&keys).expect("Failed to serialize JWT keys"))
            .create();

        let jwt_token_endpoint = self
            .context
            .server
            .mock("POST", "/v2/oauth/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&token).expect("Failed to serialize token"))
            .create();

        vec![jwt_key_endpoint, jwt_token_endpoint]
    }
}

/// Claims of an SSO login for a character named `Character {character_id}`.
pub fn mock_jwt_claims(character_id: i64, owner_hash: &str) -> EveJwtClaims {
    let now = Utc::now();
    EveJwtClaims {
        iss: "https://login.eveonline.com".to_string(),
        sub: format!("CHARACTER:EVE:{}", character_id),
        aud: vec![TEST_ESI_CLIENT_ID.to_string(), "EVE Online".to_string()],
        jti: "test_jti".to_string(),
        kid: RSA_KEY_ID.to_string(),
        tenant: "tranquility".to_string(),
        region: "world".to_string(),
        exp: now + chrono::Duration::seconds(900),
        iat: now,
        scp: vec![],
        name: format!("Character {}", character_id),
        owner: owner_hash.to_string(),
        azp: TEST_ESI_CLIENT_ID.to_string(),
    }
}

/// JWKS containing the public half of `rsa`, alongside the ES256 key EVE also publishes.
fn mock_jwt_keys(rsa: &Rsa<openssl::pkey::Private>) -> EveJwtKeys {
    let n = URL_SAFE_NO_PAD.encode(rsa.n().to_vec());
    let e = URL_SAFE_NO_PAD.encode(rsa.e().to_vec());

    EveJwtKeys {
        skip_unresolved_json_web_keys: false,
        keys: vec![
            EveJwtKey::RS256 {
                e,
                kid: RSA_KEY_ID.to_string(),
                kty: "RSA".to_string(),
                n,
                r#use: "sig".to_string(),
            },
            EveJwtKey::ES256 {
                crv: "P-256".to_string(),
                kid: "JWT-Signature-Key-2".to_string(),
                kty: "EC".to_string(),
                r#use: "sig".to_string(),
                x: "ITcDYJ8WVpDO4QtZ169xXUt7GB1Y6-oMKIwJ3nK1tFU".to_string(),
                y: "ZAJr0f4V2Eu7xBgLMgQBdJ2DZ2mp8JykOhX4XgU_UEY".to_string(),
            },
        ],
    }
}

/// Token response whose access token is `claims` signed with `rsa`.
fn mock_jwt_token(
    rsa: &Rsa<openssl::pkey::Private>,
    claims: EveJwtClaims,
) -> StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType> {
    let private_key = rsa
        .private_key_to_pem()
        .expect("Failed to export RSA private key");
    let encoding_key =
        EncodingKey::from_rsa_pem(&private_key).expect("Failed to create encoding key");

    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(RSA_KEY_ID.to_string());

    let access_token_secret =
        encode(&header, &claims, &encoding_key).expect("Failed to encode token");

    let mut token = StandardTokenResponse::new(
        AccessToken::new(access_token_secret),
        BasicTokenType::Bearer,
        EmptyExtraTokenFields {},
    );
    token.set_expires_in(Some(&Duration::from_secs(3600)));
    token.set_refresh_token(Some(RefreshToken::new("mock_refresh_token".to_string())));

    token
}
