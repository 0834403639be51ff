use crate::domain::errors::DomainError;

const CNT_COMPANY_ORGANIZATION: &str = "companies_organization_id_fkey";
const CNT_COMPANY_DOMAIN: &str = "companies_organization_id_domain_key";
const CNT_PLATFORM_ROLE_USER: &str = "platform_roles_user_id_fkey";
const CNT_AUDIT_ENTITY_TYPE: &str = "audit_logs_entity_type_check";
const CNT_AUDIT_ACTION: &str = "audit_logs_action_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_COMPANY_DOMAIN => {
                        DomainError::Conflict("a company with this domain already exists".into())
                    }
                    CNT_COMPANY_ORGANIZATION => {
                        DomainError::NotFound("organization not found".into())
                    }
                    CNT_PLATFORM_ROLE_USER => DomainError::NotFound("user not found".into()),
                    CNT_AUDIT_ENTITY_TYPE | CNT_AUDIT_ACTION => {
                        DomainError::Validation(format!("audit entry rejected by {constraint}"))
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
