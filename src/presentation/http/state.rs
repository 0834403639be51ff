// src/presentation/http/state.rs
use super::cookies::ActiveOrgCookie;
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub cookie: ActiveOrgCookie,
    pub allowed_origins: Vec<String>,
}
