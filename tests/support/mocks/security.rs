// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use newsdesk::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use newsdesk::domain::user::{Role, UserId};

use super::time::fixed_now;

pub const READER_TOKEN: &str = "reader-token";
pub const JOURNALIST_TOKEN: &str = "journalist-token";
pub const EDITOR_TOKEN: &str = "editor-token";

pub const READER_ID: i64 = 1;
pub const JOURNALIST_ID: i64 = 2;
pub const EDITOR_ID: i64 = 3;

/* -------------------------------- PasswordHasher -------------------------------- */

/// Stores `hashed:<password>` so fixtures can be written by hand.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

pub fn plain_hash(password: &str) -> String {
    format!("hashed:{password}")
}

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(plain_hash(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if plain_hash(password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/* -------------------------------- TokenManager -------------------------------- */

/// Resolves the three fixed role tokens; issued tokens are `issued-<id>`
/// and are accepted only as opaque strings.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

fn fixture_user(id: i64, username: &str, role: Role) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        username: username.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        Ok(AuthTokenDto {
            token: format!("issued-{}", subject.user_id),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            READER_TOKEN => Ok(fixture_user(READER_ID, "alice", Role::Reader)),
            JOURNALIST_TOKEN => Ok(fixture_user(JOURNALIST_ID, "jane", Role::Journalist)),
            EDITOR_TOKEN => Ok(fixture_user(EDITOR_ID, "ed", Role::Editor)),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
