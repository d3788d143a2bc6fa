use super::FormErrors;
use super::fields::{FormChoices, check_max_length, optional_choice};
use super::widgets::{ChoiceScope, FieldDescription, FormDescription, WidgetKind};
use serde::Deserialize;

const QUERY_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub publisher: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedSearch {
    pub query: Option<String>,
    pub category_id: Option<i64>,
    pub publisher_id: Option<i64>,
}

impl SearchForm {
    pub fn clean(&self, choices: &FormChoices) -> Result<CleanedSearch, FormErrors> {
        let mut errors = FormErrors::new();
        let query = Some(self.query.trim().to_string())
            .filter(|value| !value.is_empty())
            .filter(|value| check_max_length(&mut errors, "query", value, QUERY_MAX_LENGTH));
        let category_id = optional_choice(
            &mut errors,
            "category",
            &self.category,
            choices.ids(ChoiceScope::Categories),
        );
        let publisher_id = optional_choice(
            &mut errors,
            "publisher",
            &self.publisher,
            choices.ids(ChoiceScope::Publishers),
        );
        errors.into_result(CleanedSearch {
            query,
            category_id,
            publisher_id,
        })
    }

    pub fn describe() -> FormDescription {
        FormDescription::new(
            "search",
            vec![
                FieldDescription::new("query", "Query", WidgetKind::Text)
                    .optional()
                    .max_length(QUERY_MAX_LENGTH)
                    .placeholder("Search articles..."),
                FieldDescription::new("category", "Category", WidgetKind::Select)
                    .optional()
                    .scoped(ChoiceScope::Categories, Some("All Categories")),
                FieldDescription::new("publisher", "Publisher", WidgetKind::Select)
                    .optional()
                    .scoped(ChoiceScope::Publishers, Some("All Publishers")),
            ],
        )
    }
}
