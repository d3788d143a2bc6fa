// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_ROLE: &str = "users_role_min_length_chk";
const CNT_PUBLISHER_NAME: &str = "publishers_name_key";
const CNT_CATEGORY_NAME: &str = "categories_name_key";
const CNT_MEMBER_PUBLISHER: &str = "publisher_members_publisher_id_fkey";
const CNT_MEMBER_USER: &str = "publisher_members_user_id_fkey";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_ARTICLE_PUBLISHER: &str = "articles_publisher_id_fkey";
const CNT_ARTICLE_CATEGORY: &str = "articles_category_id_fkey";
const CNT_ARTICLE_APPROVER: &str = "articles_approved_by_fkey";
const CNT_NEWSLETTER_AUTHOR: &str = "newsletters_author_id_fkey";
const CNT_NEWSLETTER_PUBLISHER: &str = "newsletters_publisher_id_fkey";
const CNT_SUBSCRIPTION_PUBLISHER: &str = "subscriptions_publisher_id_fkey";
const CNT_SUBSCRIPTION_JOURNALIST: &str = "subscriptions_journalist_id_fkey";
const CNT_SUBSCRIPTION_USER_PUBLISHER: &str = "subscriptions_user_publisher_key";
const CNT_SUBSCRIPTION_USER_JOURNALIST: &str = "subscriptions_user_journalist_key";
const CNT_SUBSCRIPTION_TARGET: &str = "subscriptions_single_target_chk";
const CNT_RESET_TOKEN: &str = "password_reset_tokens_token_key";

fn map_constraint(constraint: &str) -> Option<DomainError> {
    let err = match constraint {
        CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
        CNT_USER_ROLE => DomainError::Validation("role must be at least 3 characters".into()),
        CNT_PUBLISHER_NAME => DomainError::Conflict("publisher name already exists".into()),
        CNT_CATEGORY_NAME => DomainError::Conflict("category name already exists".into()),
        CNT_MEMBER_PUBLISHER | CNT_ARTICLE_PUBLISHER | CNT_NEWSLETTER_PUBLISHER
        | CNT_SUBSCRIPTION_PUBLISHER => DomainError::NotFound("publisher not found".into()),
        CNT_MEMBER_USER | CNT_ARTICLE_AUTHOR | CNT_ARTICLE_APPROVER | CNT_NEWSLETTER_AUTHOR => {
            DomainError::NotFound("user not found".into())
        }
        CNT_SUBSCRIPTION_JOURNALIST => DomainError::NotFound("journalist not found".into()),
        CNT_ARTICLE_CATEGORY => DomainError::NotFound("category not found".into()),
        CNT_SUBSCRIPTION_USER_PUBLISHER => {
            DomainError::Conflict("already subscribed to this publisher".into())
        }
        CNT_SUBSCRIPTION_USER_JOURNALIST => {
            DomainError::Conflict("already subscribed to this journalist".into())
        }
        CNT_SUBSCRIPTION_TARGET => DomainError::Validation(
            "subscription must target exactly one publisher or journalist".into(),
        ),
        CNT_RESET_TOKEN => DomainError::Conflict("reset token already exists".into()),
        _ => return None,
    };
    Some(err)
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(mapped) = db_err.constraint().and_then(map_constraint) {
                return mapped;
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
        _ => DomainError::Persistence(err.to_string()),
    }
}
