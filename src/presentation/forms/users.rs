use super::FormErrors;
use super::fields::{check_max_length, domain_field, required_text};
use super::password::clean_password_pair;
use super::widgets::{ChoiceOption, ChoiceScope, FieldDescription, FormDescription, WidgetKind};
use crate::application::commands::users::{MIN_PASSWORD_LENGTH, RegisterUserCommand};
use crate::domain::user::{Email, Role, Username};
use serde::Deserialize;

const NAME_MAX_LENGTH: usize = 30;
const USERNAME_MAX_LENGTH: usize = 150;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRegistrationForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub password1: String,
    #[serde(default)]
    pub password2: String,
}

impl UserRegistrationForm {
    pub fn clean(&self) -> Result<RegisterUserCommand, FormErrors> {
        let mut errors = FormErrors::new();

        let username = required_text(&mut errors, "username", &self.username)
            .and_then(|value| domain_field(&mut errors, "username", Username::new(value)));
        let email = required_text(&mut errors, "email", &self.email)
            .and_then(|value| domain_field(&mut errors, "email", Email::new(value)));
        let first_name = required_text(&mut errors, "first_name", &self.first_name)
            .filter(|value| check_max_length(&mut errors, "first_name", value, NAME_MAX_LENGTH));
        let last_name = required_text(&mut errors, "last_name", &self.last_name)
            .filter(|value| check_max_length(&mut errors, "last_name", value, NAME_MAX_LENGTH));
        let role = required_text(&mut errors, "role", &self.role).and_then(|value| {
            match value.parse::<Role>() {
                Ok(role) => Some(role),
                Err(_) => {
                    errors.add(
                        "role",
                        format!("Select a valid choice. {value} is not one of the available choices."),
                    );
                    None
                }
            }
        });
        let password = clean_password_pair(
            &mut errors,
            ("password1", &self.password1),
            ("password2", &self.password2),
        );

        match (username, email, first_name, last_name, role, password) {
            (
                Some(username),
                Some(email),
                Some(first_name),
                Some(last_name),
                Some(role),
                Some(password),
            ) if errors.is_empty() => Ok(RegisterUserCommand {
                username: username.into(),
                email: email.into(),
                first_name,
                last_name,
                role,
                password,
            }),
            _ => Err(errors),
        }
    }

    pub fn describe() -> FormDescription {
        let roles = Role::ALL
            .iter()
            .map(|role| ChoiceOption::new(role.as_str(), role.label()))
            .collect();
        FormDescription::new(
            "user_registration",
            vec![
                FieldDescription::new("username", "Username", WidgetKind::Text)
                    .max_length(USERNAME_MAX_LENGTH),
                FieldDescription::new("email", "Email", WidgetKind::Email),
                FieldDescription::new("first_name", "First name", WidgetKind::Text)
                    .max_length(NAME_MAX_LENGTH),
                FieldDescription::new("last_name", "Last name", WidgetKind::Text)
                    .max_length(NAME_MAX_LENGTH),
                FieldDescription::new("role", "Role", WidgetKind::Select)
                    .fixed(ChoiceScope::Roles, roles),
                FieldDescription::new("password1", "Password", WidgetKind::Password)
                    .min_length(MIN_PASSWORD_LENGTH),
                FieldDescription::new("password2", "Password confirmation", WidgetKind::Password),
            ],
        )
    }
}
