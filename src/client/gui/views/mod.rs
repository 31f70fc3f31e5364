pub mod actuator;
pub mod config_dialog;
pub mod dashboard;
pub mod layout;
pub mod logger;
pub mod openapi_spec;
