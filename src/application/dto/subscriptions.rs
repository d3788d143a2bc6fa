use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{catalog::PublisherDto, serde_time, users::UserDto};

/// One subscription edge. Exactly one of `publisher` and `journalist` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionDto {
    pub id: i64,
    pub user: UserDto,
    pub publisher: Option<PublisherDto>,
    pub journalist: Option<UserDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}
