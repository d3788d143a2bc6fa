use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::{Capability, UserId};

/// "`<verb>:any`, or `<verb>:own` on something you own" check shared by
/// articles and newsletters.
pub struct OwnershipSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    resource: &'a str,
    verb: &'a str,
    owner: UserId,
    user_id: UserId,
}

impl<'a> OwnershipSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        resource: &'a str,
        verb: &'a str,
        owner: UserId,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            resource,
            verb,
            owner,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.has_capability(&format!("{}:any", self.verb))
            || (self.has_capability(&format!("{}:own", self.verb)) && self.owner == self.user_id)
    }

    fn has_capability(&self, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(self.resource, action))
    }
}

pub struct CanUpdateArticleSpec<'a> {
    inner: OwnershipSpec<'a>,
}

impl<'a> CanUpdateArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            inner: OwnershipSpec::new(capabilities, "articles", "update", article.author_id, user_id),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.inner.is_satisfied()
    }
}

pub struct CanDeleteArticleSpec<'a> {
    inner: OwnershipSpec<'a>,
}

impl<'a> CanDeleteArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            inner: OwnershipSpec::new(capabilities, "articles", "delete", article.author_id, user_id),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.inner.is_satisfied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Role;

    #[test]
    fn journalists_update_only_their_own() {
        let caps = Role::Journalist.default_capabilities();
        let owner = UserId::new(1).unwrap();
        let other = UserId::new(2).unwrap();
        assert!(OwnershipSpec::new(&caps, "articles", "update", owner, owner).is_satisfied());
        assert!(!OwnershipSpec::new(&caps, "articles", "update", owner, other).is_satisfied());
    }

    #[test]
    fn editors_update_anything() {
        let caps = Role::Editor.default_capabilities();
        let owner = UserId::new(1).unwrap();
        let editor = UserId::new(2).unwrap();
        assert!(OwnershipSpec::new(&caps, "articles", "update", owner, editor).is_satisfied());
        assert!(OwnershipSpec::new(&caps, "newsletters", "delete", owner, editor).is_satisfied());
    }

    #[test]
    fn readers_modify_nothing() {
        let caps = Role::Reader.default_capabilities();
        let me = UserId::new(1).unwrap();
        assert!(!OwnershipSpec::new(&caps, "articles", "delete", me, me).is_satisfied());
    }
}
