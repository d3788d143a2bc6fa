use crate::application::ports::util::ResetTokenGenerator;
use uuid::Uuid;

/// Random v4 UUIDs in simple (32 hex character) form.
#[derive(Default, Clone)]
pub struct UuidResetTokenGenerator;

impl ResetTokenGenerator for UuidResetTokenGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
