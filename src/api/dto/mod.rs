pub mod info;
pub mod users;
