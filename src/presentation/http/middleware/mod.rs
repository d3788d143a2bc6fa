pub mod require_capabilities;

pub use require_capabilities::require_capability;
