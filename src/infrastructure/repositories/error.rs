use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_SUBSCRIPTION_EMAIL: &str = "subscriptions_email_key";
const CNT_USER_EMAIL: &str = "users_email_key";

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG => {
                        DomainError::Conflict("an article with this slug already exists".into())
                    }
                    CNT_SUBSCRIPTION_EMAIL => {
                        DomainError::Conflict("email is already subscribed".into())
                    }
                    CNT_USER_EMAIL => DomainError::Conflict("email is already registered".into()),
                    CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
                    other => map_code(db_err.code().as_deref(), || {
                        format!("database constraint violation: {other}")
                    }),
                };
            }

            map_code(db_err.code().as_deref(), || db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_code(code: Option<&str>, fallback: impl FnOnce() -> String) -> DomainError {
    match code {
        Some(UNIQUE_VIOLATION) => DomainError::Conflict("unique constraint violated".into()),
        Some(FOREIGN_KEY_VIOLATION) => {
            DomainError::NotFound("referenced record not found".into())
        }
        Some(CHECK_VIOLATION) => DomainError::Validation("check constraint violated".into()),
        _ => DomainError::Persistence(fallback()),
    }
}
