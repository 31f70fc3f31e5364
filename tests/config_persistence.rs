use nodeboot_admin::client::config::AppSettings;
use nodeboot_admin::client::models::app_state::{DashboardState, Effect};
use nodeboot_admin::client::models::connection::{Configuration, LaunchParams, Route};
use nodeboot_admin::client::models::messages::Message;
use nodeboot_admin::client::utils::config_store::{ConfigSource, ConfigStore, FileSlot};
use nodeboot_admin::common::endpoints::Endpoint;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn saved_configuration_survives_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let (mut store, source) = ConfigStore::initialize(Box::new(FileSlot::new(&path)), &LaunchParams::default());
    assert_eq!(source, ConfigSource::Missing);
    assert!(store.needs_setup());
    store.save(Configuration::new("http://localhost:8080", "/api/v1")).unwrap();

    let (reloaded, source) = ConfigStore::initialize(Box::new(FileSlot::new(&path)), &LaunchParams::default());
    assert_eq!(source, ConfigSource::Persisted);
    assert!(!reloaded.needs_setup());
    assert_eq!(reloaded.config(), Some(Configuration::new("http://localhost:8080", "/api/v1")));
}

#[test]
fn launch_link_configures_and_persists_without_dialog() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let launch = LaunchParams::parse("/actuator?localAppUrl=http%3A%2F%2Flocalhost%3A9000&apiBasePath=%2Fapi");

    let (state, effects) = DashboardState::new(AppSettings::default(), Box::new(FileSlot::new(&path)), &launch);

    assert!(!state.form.open);
    assert_eq!(state.route, Route::Actuator);
    assert_eq!(state.config(), Some(Configuration::new("http://localhost:9000", "/api")));
    assert!(effects.iter().any(|e| matches!(e, Effect::Fetch(t) if t.endpoint == Endpoint::Info)));

    let stored: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(stored["baseUrl"], "http://localhost:9000");
    assert_eq!(stored["apiBasePath"], "/api");
}

#[test]
fn corrupt_record_falls_back_to_setup() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();

    let (store, source) = ConfigStore::initialize(Box::new(FileSlot::new(&path)), &LaunchParams::default());
    assert_eq!(source, ConfigSource::Missing);
    assert!(store.needs_setup());
    assert!(store.config().is_none());
}

#[test]
fn reset_removes_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"baseUrl":"http://h:8080","apiBasePath":"/api"}"#).unwrap();

    let (mut state, _) = DashboardState::new(AppSettings::default(), Box::new(FileSlot::new(&path)), &LaunchParams::default());
    assert!(state.config().is_some());

    state.update(Message::ResetConfig);
    assert!(state.config().is_none());
    assert!(state.form.open);
    assert!(!path.exists());
}
