// src/infrastructure/security/claims.rs
use crate::application::{
    dto::Session,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::tenant::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};

pub fn parse_session(facts: Vec<Fact>) -> ApplicationResult<Session> {
    let ctx = ClaimsContext::from_facts(facts);

    let raw_user_id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let user_id: UserId = raw_user_id
        .parse()
        .map_err(|_| ApplicationError::unauthorized("malformed user id"))?;

    Ok(Session::new(user_id, ctx.email))
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<String>,
    email: Option<String>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: Predicate) {
        let target = match predicate.name.as_str() {
            "user" => &mut self.user_id,
            "email" => &mut self.email,
            _ => return,
        };
        if let [Term::Str(value)] = predicate.terms.as_slice() {
            *target = Some(value.clone());
        }
    }
}
