use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, Role, Username},
};

const NAME_MAX_LENGTH: usize = 30;

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        for (field, value) in [
            ("first name", &command.first_name),
            ("last name", &command.last_name),
        ] {
            if value.chars().count() > NAME_MAX_LENGTH {
                return Err(ApplicationError::validation(format!(
                    "{field} must be at most {NAME_MAX_LENGTH} characters"
                )));
            }
        }
        validate_password(&command.password)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict(
                "a user with that username already exists",
            ));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let new_user = NewUser::new(username, email, password_hash, command.role, self.clock.now())
            .with_names(command.first_name, command.last_name);

        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, role = %user.role, "registered user");
        Ok(user.into())
    }
}
