use super::UserQueryService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::Role,
};

impl UserQueryService {
    /// Users currently holding `role`, ordered by username. Used to offer
    /// choices; it never constrains stored relationships.
    pub async fn list_by_role(&self, role: Role) -> ApplicationResult<Vec<UserDto>> {
        let users = self.user_repo.list_by_role(role).await?;
        Ok(users
            .into_iter()
            .filter(|user| user.is_active)
            .map(UserDto::from)
            .collect())
    }

    pub async fn list_journalists(&self) -> ApplicationResult<Vec<UserDto>> {
        self.list_by_role(Role::Journalist).await
    }
}
