use super::{max_chars, not_blank};
use crate::application::commands::articles::{CreateArticleCommand, UpdateArticleCommand};
use crate::application::error::FieldErrors;
use crate::domain::article::ArticleStatus;
use crate::domain::content::TITLE_MAX_LENGTH;
use serde::Deserialize;
use utoipa::ToSchema;

const SUMMARY_MAX_LENGTH: usize = 500;

/// Article body accepted by create and update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ArticleWrite {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub publisher_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl ArticleWrite {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        not_blank(&mut errors, "title", &self.title);
        max_chars(&mut errors, "title", &self.title, TITLE_MAX_LENGTH);
        not_blank(&mut errors, "content", &self.content);
        max_chars(&mut errors, "summary", &self.summary, SUMMARY_MAX_LENGTH);
        errors.into_result(())
    }

    pub fn into_create_command(self) -> CreateArticleCommand {
        CreateArticleCommand {
            title: self.title,
            content: self.content,
            summary: self.summary,
            status: self.status,
            author_id: self.author_id,
            publisher_id: self.publisher_id,
            category_id: self.category_id,
        }
    }
}

/// Article body accepted by update. Only the fields that are sent change.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ArticleUpdateWrite {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub status: Option<ArticleStatus>,
    /// Ignored. The author never changes.
    pub author_id: Option<i64>,
    pub publisher_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl ArticleUpdateWrite {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Some(title) = &self.title {
            not_blank(&mut errors, "title", title);
            max_chars(&mut errors, "title", title, TITLE_MAX_LENGTH);
        }
        if let Some(content) = &self.content {
            not_blank(&mut errors, "content", content);
        }
        if let Some(summary) = &self.summary {
            max_chars(&mut errors, "summary", summary, SUMMARY_MAX_LENGTH);
        }
        errors.into_result(())
    }

    pub fn into_update_command(self, id: i64) -> UpdateArticleCommand {
        UpdateArticleCommand {
            id,
            title: self.title,
            content: self.content,
            summary: self.summary,
            status: self.status,
            publisher_id: self.publisher_id,
            category_id: self.category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn omitted_fields_stay_unset_on_update() {
        let write: ArticleUpdateWrite = serde_json::from_value(json!({
            "title": "Storm",
            "content": "Heavy rain",
            "author_id": 3
        }))
        .unwrap();
        assert!(write.validate().is_ok());
        let command = write.into_update_command(8);
        assert_eq!(command.id, 8);
        assert_eq!(command.title.as_deref(), Some("Storm"));
        assert_eq!(command.publisher_id, None);
        assert_eq!(command.summary, None);
        assert_eq!(command.status, None);
    }

    #[test]
    fn update_validates_only_sent_fields() {
        let write: ArticleUpdateWrite =
            serde_json::from_value(json!({ "content": "" })).unwrap();
        let errors = write.validate().unwrap_err();
        assert!(errors.has("content"));
        assert!(!errors.has("title"));
    }

    #[test]
    fn blank_title_is_reported_by_field() {
        let write: ArticleWrite = serde_json::from_value(json!({
            "title": " ",
            "content": "Heavy rain",
            "summary": "s".repeat(501)
        }))
        .unwrap();
        let errors = write.validate().unwrap_err();
        assert!(errors.has("title"));
        assert!(errors.has("summary"));
        assert!(!errors.has("content"));
    }
}
