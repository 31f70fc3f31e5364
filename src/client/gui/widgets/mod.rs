pub mod alert;
pub mod json_viewer;
pub mod matrix_rain;
pub mod typewriter;
