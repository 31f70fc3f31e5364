pub mod app_state;
pub mod connection;
pub mod fetch_state;
pub mod messages;
pub mod spec_summary;
pub mod tab_router;
pub mod ui_state;
