// src/domain/publisher/entity.rs
use crate::domain::publisher::value_objects::{PublisherId, PublisherName, Website};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Which member list of a publisher a user is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MembershipKind {
    Editor,
    Journalist,
}

impl MembershipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipKind::Editor => "editor",
            MembershipKind::Journalist => "journalist",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Publisher {
    pub id: PublisherId,
    pub name: PublisherName,
    pub description: String,
    pub website: Option<Website>,
    pub created_at: DateTime<Utc>,
    pub editors: Vec<UserId>,
    pub journalists: Vec<UserId>,
}

impl Publisher {
    pub fn has_editor(&self, user_id: UserId) -> bool {
        self.editors.contains(&user_id)
    }

    pub fn has_journalist(&self, user_id: UserId) -> bool {
        self.journalists.contains(&user_id)
    }

    /// Attach a member. No role check happens here; the member list only
    /// records association.
    pub fn add_member(&mut self, user_id: UserId, kind: MembershipKind) -> bool {
        let members = match kind {
            MembershipKind::Editor => &mut self.editors,
            MembershipKind::Journalist => &mut self.journalists,
        };
        if members.contains(&user_id) {
            return false;
        }
        members.push(user_id);
        true
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct NewPublisher {
    pub name: PublisherName,
    pub description: String,
    pub website: Option<Website>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_member_is_idempotent_per_list() {
        let mut publisher = Publisher {
            id: PublisherId::new(1).unwrap(),
            name: PublisherName::new("Daily Planet").unwrap(),
            description: String::new(),
            website: None,
            created_at: Utc::now(),
            editors: vec![],
            journalists: vec![],
        };
        let user = UserId::new(3).unwrap();
        assert!(publisher.add_member(user, MembershipKind::Journalist));
        assert!(!publisher.add_member(user, MembershipKind::Journalist));
        assert!(publisher.add_member(user, MembershipKind::Editor));
        assert!(publisher.has_editor(user) && publisher.has_journalist(user));
    }
}
