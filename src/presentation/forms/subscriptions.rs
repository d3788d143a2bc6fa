use super::FormErrors;
use super::fields::{FormChoices, optional_choice};
use super::widgets::{ChoiceScope, FieldDescription, FormDescription, WidgetKind};
use crate::application::commands::subscriptions::SubscribeCommand;
use crate::application::error::FORM_NON_FIELD_ERRORS;
use serde::Deserialize;

pub const NEITHER_TARGET: &str = "You must subscribe to either a publisher or a journalist.";
pub const BOTH_TARGETS: &str = "You cannot subscribe to both a publisher and a journalist.";

/// Follow a publisher or a journalist. Each select is optional on its own;
/// exactly one of them has to be filled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionForm {
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub journalist: String,
}

impl SubscriptionForm {
    pub fn clean(&self, choices: &FormChoices) -> Result<SubscribeCommand, FormErrors> {
        let mut errors = FormErrors::new();
        let publisher_id = optional_choice(
            &mut errors,
            "publisher",
            &self.publisher,
            choices.ids(ChoiceScope::Publishers),
        );
        let journalist_id = optional_choice(
            &mut errors,
            "journalist",
            &self.journalist,
            choices.ids(ChoiceScope::Journalists),
        );
        if !errors.is_empty() {
            return Err(errors);
        }

        match (publisher_id, journalist_id) {
            (None, None) => errors.add(FORM_NON_FIELD_ERRORS, NEITHER_TARGET),
            (Some(_), Some(_)) => errors.add(FORM_NON_FIELD_ERRORS, BOTH_TARGETS),
            _ => {}
        }
        errors.into_result(SubscribeCommand {
            publisher_id,
            journalist_id,
        })
    }

    pub fn describe() -> FormDescription {
        FormDescription::new(
            "subscription",
            vec![
                FieldDescription::new("publisher", "Publisher", WidgetKind::Select)
                    .optional()
                    .scoped(ChoiceScope::Publishers, None),
                FieldDescription::new("journalist", "Journalist", WidgetKind::Select)
                    .optional()
                    .scoped(ChoiceScope::Journalists, None),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> FormChoices {
        FormChoices {
            publishers: vec![1, 2],
            categories: vec![],
            journalists: vec![10],
        }
    }

    fn form(publisher: &str, journalist: &str) -> SubscriptionForm {
        SubscriptionForm {
            publisher: publisher.into(),
            journalist: journalist.into(),
        }
    }

    #[test]
    fn exactly_one_target_is_accepted() {
        let command = form("2", "").clean(&choices()).unwrap();
        assert_eq!(command.publisher_id, Some(2));
        assert_eq!(command.journalist_id, None);

        let command = form("", "10").clean(&choices()).unwrap();
        assert_eq!(command.journalist_id, Some(10));
    }

    #[test]
    fn neither_target_is_a_non_field_error() {
        let errors = form("", "").clean(&choices()).unwrap_err();
        assert_eq!(errors.get(FORM_NON_FIELD_ERRORS), [NEITHER_TARGET]);
    }

    #[test]
    fn both_targets_are_rejected() {
        let errors = form("1", "10").clean(&choices()).unwrap_err();
        assert_eq!(errors.get(FORM_NON_FIELD_ERRORS), [BOTH_TARGETS]);
    }

    #[test]
    fn non_journalist_choice_is_invalid() {
        let errors = form("", "1").clean(&choices()).unwrap_err();
        assert!(errors.has("journalist"));
        assert!(!errors.has(FORM_NON_FIELD_ERRORS));
    }

    #[test]
    fn describe_scopes_journalist_choices() {
        let description = SubscriptionForm::describe();
        let journalist = description.field("journalist").unwrap();
        assert!(!journalist.required);
        assert_eq!(
            journalist.choices.as_ref().map(|c| c.scope),
            Some(ChoiceScope::Journalists)
        );
    }
}
