pub mod database;
pub mod notification;
pub mod repositories;
pub mod security;
pub mod time;
pub mod util;
