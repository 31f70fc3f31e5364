pub mod actuator_client;
pub mod json_format;
