// src/infrastructure/security/token.rs
use crate::application::{
    dto::Session,
    error::{ApplicationError, ApplicationResult},
    ports::security::SessionVerifier,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Verifies Ed25519-signed biscuit session tokens.
///
/// Tokens carry `user`, optional `email`, `issued_at` and `expires_at` facts
/// plus time checks enforced at authorization.
#[derive(Clone)]
pub struct BiscuitSessionVerifier {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitSessionVerifier {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }

    /// Mints a token for `session`. Production tokens come from the
    /// authentication service; this exists for local tooling and tests.
    pub fn issue(&self, session: &Session) -> ApplicationResult<String> {
        self.issue_at(session, SystemTime::now())
    }

    fn issue_at(&self, session: &Session, issued_at: SystemTime) -> ApplicationResult<String> {
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = build_code_and_params(session, issued_at, expires_at);

        let token = Biscuit::builder()
            .code_with_params(&code, params, HashMap::new())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(self.root.as_ref())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        token
            .seal()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .to_base64()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

fn build_code_and_params(
    session: &Session,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (String, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), session.user_id.to_string().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());

    let mut code = String::from(
        r"
        user({uid});
        issued_at({issued});
        expires_at({exp});
        check if time($now), $now >= {issued};
        check if time($now), $now <= {exp};
        ",
    );

    if let Some(email) = session.email.as_ref() {
        code.push_str("email({email});\n");
        params.insert("email".to_string(), email.clone().into());
    }

    (code, params)
}

#[async_trait]
impl SessionVerifier for BiscuitSessionVerifier {
    async fn authenticate(&self, token: &str) -> ApplicationResult<Session> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let (facts, _, _, _) = authorizer.dump();
        super::claims::parse_session(facts)
    }
}
