// src/presentation/http/extractors.rs
use crate::{
    application::{
        context::{ClientInfo, RequestContext},
        dto::Session,
        error::ApplicationError,
    },
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, header::USER_AGENT, request::Parts},
};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};
use std::net::SocketAddr;
use tracing::debug;

use super::error::HttpError;

/// Per-request view handed to the application layer.
///
/// Never rejects for authentication reasons: a missing or invalid bearer
/// token yields an anonymous context, which the services then deny.
#[derive(Debug, Clone)]
pub struct Context(pub RequestContext);

impl<S> FromRequestParts<S> for Context
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let session = match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(header) => authenticate(&app_state, header.token()).await,
            None => None,
        };

        let active_organization = parts
            .headers
            .typed_get::<Cookie>()
            .and_then(|cookies| cookies.get(app_state.cookie.name()).map(str::to_string));

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self(RequestContext {
            session,
            active_organization,
            client: client_info(&parts.headers, peer),
        }))
    }
}

async fn authenticate(state: &HttpState, token: &str) -> Option<Session> {
    match state.services.session_verifier().authenticate(token).await {
        Ok(session) => Some(session),
        Err(err) => {
            debug!(error = %err, "rejected bearer token");
            None
        }
    }
}

fn client_info(headers: &HeaderMap, peer: Option<SocketAddr>) -> ClientInfo {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let ip_address = header("x-forwarded-for")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| header("x-real-ip"))
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()));

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    ClientInfo {
        ip_address,
        user_agent,
    }
}
