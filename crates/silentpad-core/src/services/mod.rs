//! Shared service layer used by clients.

mod app;

pub use app::AppServices;
