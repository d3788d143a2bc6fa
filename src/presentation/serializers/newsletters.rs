use super::{max_chars, not_blank};
use crate::application::commands::newsletters::{CreateNewsletterCommand, UpdateNewsletterCommand};
use crate::application::error::FieldErrors;
use crate::domain::content::TITLE_MAX_LENGTH;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewsletterWrite {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub publisher_id: Option<i64>,
}

impl NewsletterWrite {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        not_blank(&mut errors, "title", &self.title);
        max_chars(&mut errors, "title", &self.title, TITLE_MAX_LENGTH);
        not_blank(&mut errors, "content", &self.content);
        errors.into_result(())
    }

    pub fn into_create_command(self) -> CreateNewsletterCommand {
        CreateNewsletterCommand {
            title: self.title,
            content: self.content,
            publisher_id: self.publisher_id,
        }
    }

    pub fn into_update_command(self, id: i64) -> UpdateNewsletterCommand {
        UpdateNewsletterCommand {
            id,
            title: Some(self.title),
            content: Some(self.content),
            publisher_id: self.publisher_id,
        }
    }
}
