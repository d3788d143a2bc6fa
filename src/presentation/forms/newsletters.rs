use super::FormErrors;
use super::fields::{FormChoices, check_max_length, optional_choice, required_text};
use super::widgets::{ChoiceScope, FieldDescription, FormDescription, WidgetKind};
use crate::application::commands::newsletters::CreateNewsletterCommand;
use crate::domain::content::TITLE_MAX_LENGTH;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsletterForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub publisher: String,
}

impl NewsletterForm {
    pub fn clean(&self, choices: &FormChoices) -> Result<CreateNewsletterCommand, FormErrors> {
        let mut errors = FormErrors::new();
        let title = required_text(&mut errors, "title", &self.title)
            .filter(|value| check_max_length(&mut errors, "title", value, TITLE_MAX_LENGTH));
        let content = required_text(&mut errors, "content", &self.content);
        let publisher_id = optional_choice(
            &mut errors,
            "publisher",
            &self.publisher,
            choices.ids(ChoiceScope::Publishers),
        );

        match (title, content) {
            (Some(title), Some(content)) if errors.is_empty() => Ok(CreateNewsletterCommand {
                title,
                content,
                publisher_id,
            }),
            _ => Err(errors),
        }
    }

    pub fn describe() -> FormDescription {
        FormDescription::new(
            "newsletter",
            vec![
                FieldDescription::new("title", "Title", WidgetKind::Text)
                    .max_length(TITLE_MAX_LENGTH)
                    .placeholder("Enter newsletter title"),
                FieldDescription::new("content", "Content", WidgetKind::Textarea)
                    .rows(10)
                    .placeholder("Enter newsletter content"),
                FieldDescription::new("publisher", "Publisher", WidgetKind::Select)
                    .optional()
                    .scoped(ChoiceScope::Publishers, None),
            ],
        )
    }
}
