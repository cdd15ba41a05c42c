pub mod fallback;
pub mod health;
pub mod info;
pub mod users;
