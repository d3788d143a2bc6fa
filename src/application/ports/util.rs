// src/application/ports/util.rs
pub trait ResetTokenGenerator: Send + Sync {
    /// A fresh, unguessable token string of at most 100 characters.
    fn generate(&self) -> String;
}
