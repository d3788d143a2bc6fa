use crate::application::commands::subscriptions::SubscribeCommand;
use crate::application::error::{FieldErrors, NON_FIELD_ERRORS};
use serde::Deserialize;
use utoipa::ToSchema;

pub const NEITHER_TARGET: &str = "Either publisher or journalist must be selected";
pub const BOTH_TARGETS: &str = "Cannot subscribe to both publisher and journalist";

/// Subscription body. The subscriber is always the caller, so a submitted
/// `user_id` is accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SubscriptionWrite {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub publisher_id: Option<i64>,
    #[serde(default)]
    pub journalist_id: Option<i64>,
}

impl SubscriptionWrite {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        match (self.publisher_id, self.journalist_id) {
            (None, None) => errors.add(NON_FIELD_ERRORS, NEITHER_TARGET),
            (Some(_), Some(_)) => errors.add(NON_FIELD_ERRORS, BOTH_TARGETS),
            _ => {}
        }
        errors.into_result(())
    }

    pub fn into_command(self) -> SubscribeCommand {
        SubscribeCommand {
            publisher_id: self.publisher_id,
            journalist_id: self.journalist_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(publisher_id: Option<i64>, journalist_id: Option<i64>) -> SubscriptionWrite {
        SubscriptionWrite {
            user_id: None,
            publisher_id,
            journalist_id,
        }
    }

    #[test]
    fn one_target_validates() {
        assert!(write(Some(1), None).validate().is_ok());
        assert!(write(None, Some(2)).validate().is_ok());
    }

    #[test]
    fn neither_or_both_fail_with_a_message() {
        let errors = write(None, None).validate().unwrap_err();
        assert_eq!(errors.get(NON_FIELD_ERRORS), [NEITHER_TARGET]);

        let errors = write(Some(1), Some(2)).validate().unwrap_err();
        assert_eq!(errors.get(NON_FIELD_ERRORS), [BOTH_TARGETS]);
    }
}
