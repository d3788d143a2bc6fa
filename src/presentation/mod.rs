pub mod forms;
pub mod http;
pub mod serializers;
