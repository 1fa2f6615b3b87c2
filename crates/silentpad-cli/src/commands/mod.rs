pub mod add;
pub mod auth_cmd;
pub mod common;
pub mod delete;
pub mod edit;
pub mod list;
pub mod profile;
pub mod reset;
pub mod search;
pub mod settings;
pub mod show;
