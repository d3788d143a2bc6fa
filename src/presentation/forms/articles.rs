use super::FormErrors;
use super::fields::{FormChoices, check_max_length, checkbox, optional_choice, required_text};
use super::widgets::{ChoiceOption, ChoiceScope, FieldDescription, FormDescription, WidgetKind};
use crate::application::commands::articles::{CreateArticleCommand, ReviewArticleCommand};
use crate::domain::article::ArticleStatus;
use crate::domain::content::TITLE_MAX_LENGTH;
use serde::Deserialize;

const SUMMARY_MAX_LENGTH: usize = 500;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedArticle {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub publisher_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl CleanedArticle {
    /// New articles start as drafts.
    pub fn into_create_command(self) -> CreateArticleCommand {
        CreateArticleCommand {
            title: self.title,
            content: self.content,
            summary: self.summary,
            status: ArticleStatus::Draft,
            author_id: None,
            publisher_id: self.publisher_id,
            category_id: self.category_id,
        }
    }
}

impl ArticleForm {
    pub fn clean(&self, choices: &FormChoices) -> Result<CleanedArticle, FormErrors> {
        let mut errors = FormErrors::new();

        let title = required_text(&mut errors, "title", &self.title)
            .filter(|value| check_max_length(&mut errors, "title", value, TITLE_MAX_LENGTH));
        let content = required_text(&mut errors, "content", &self.content);
        let summary = self.summary.trim().to_string();
        check_max_length(&mut errors, "summary", &summary, SUMMARY_MAX_LENGTH);
        let publisher_id = optional_choice(
            &mut errors,
            "publisher",
            &self.publisher,
            choices.ids(ChoiceScope::Publishers),
        );
        let category_id = optional_choice(
            &mut errors,
            "category",
            &self.category,
            choices.ids(ChoiceScope::Categories),
        );

        match (title, content) {
            (Some(title), Some(content)) if errors.is_empty() => Ok(CleanedArticle {
                title,
                content,
                summary,
                publisher_id,
                category_id,
            }),
            _ => Err(errors),
        }
    }

    pub fn describe() -> FormDescription {
        FormDescription::new(
            "article",
            vec![
                FieldDescription::new("title", "Title", WidgetKind::Text)
                    .max_length(TITLE_MAX_LENGTH)
                    .placeholder("Enter article title"),
                FieldDescription::new("content", "Content", WidgetKind::Textarea)
                    .rows(10)
                    .placeholder("Enter article content"),
                FieldDescription::new("summary", "Summary", WidgetKind::Textarea)
                    .optional()
                    .rows(3)
                    .max_length(SUMMARY_MAX_LENGTH)
                    .placeholder("Enter article summary (optional)"),
                FieldDescription::new("publisher", "Publisher", WidgetKind::Select)
                    .optional()
                    .scoped(ChoiceScope::Publishers, None),
                FieldDescription::new("category", "Category", WidgetKind::Select)
                    .optional()
                    .scoped(ChoiceScope::Categories, None),
            ],
        )
    }
}

/// Editor review of an article: the status and the approval flag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleApprovalForm {
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "checkbox")]
    pub is_approved: bool,
}

impl ArticleApprovalForm {
    pub fn clean(&self, article_id: i64) -> Result<ReviewArticleCommand, FormErrors> {
        let mut errors = FormErrors::new();
        let status = required_text(&mut errors, "status", &self.status).and_then(|value| {
            match value.parse::<ArticleStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    errors.add(
                        "status",
                        format!("Select a valid choice. {value} is not one of the available choices."),
                    );
                    None
                }
            }
        });

        match status {
            Some(status) => Ok(ReviewArticleCommand {
                id: article_id,
                status,
                is_approved: self.is_approved,
            }),
            None => Err(errors),
        }
    }

    pub fn describe() -> FormDescription {
        let statuses = ArticleStatus::ALL
            .iter()
            .map(|status| ChoiceOption::new(status.as_str(), status.label()))
            .collect();
        FormDescription::new(
            "article_approval",
            vec![
                FieldDescription::new("status", "Status", WidgetKind::Select)
                    .fixed(ChoiceScope::Statuses, statuses),
                FieldDescription::new("is_approved", "Is approved", WidgetKind::Checkbox).optional(),
            ],
        )
    }
}
