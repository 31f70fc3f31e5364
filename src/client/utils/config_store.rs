use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use log::{info, warn};

use crate::client::models::connection::{Configuration, LaunchParams};

/// Single named slot holding the serialized configuration record.
pub trait ConfigSlot: Send {
    fn load(&self) -> anyhow::Result<Option<String>>;
    fn store(&self, record: &str) -> anyhow::Result<()>;
    fn clear(&self) -> anyhow::Result<()>;
}

/// Slot backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSlot for FileSlot {
    fn load(&self) -> anyhow::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let record = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        if record.trim().is_empty() { Ok(None) } else { Ok(Some(record)) }
    }

    fn store(&self, record: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(&self.path, record).with_context(|| format!("writing {}", self.path.display()))
    }

    fn clear(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("removing {}", self.path.display()))?;
        }
        Ok(())
    }
}

/// In-process slot, used by tests and headless tools.
#[derive(Debug, Default)]
pub struct MemorySlot {
    record: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn with_record(record: impl Into<String>) -> Self {
        Self { record: Mutex::new(Some(record.into())) }
    }
}

impl ConfigSlot for MemorySlot {
    fn load(&self) -> anyhow::Result<Option<String>> {
        let guard = self.record.lock().map_err(|_| anyhow::anyhow!("config slot poisoned"))?;
        Ok(guard.clone())
    }

    fn store(&self, record: &str) -> anyhow::Result<()> {
        let mut guard = self.record.lock().map_err(|_| anyhow::anyhow!("config slot poisoned"))?;
        *guard = Some(record.to_string());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        let mut guard = self.record.lock().map_err(|_| anyhow::anyhow!("config slot poisoned"))?;
        *guard = None;
        Ok(())
    }
}

/// Where the active configuration came from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    LaunchLink,
    Persisted,
    Missing,
}

/// Owner of the backend configuration. Views get snapshots through
/// [`ConfigStore::config`]; `save` and `reset` are the only mutators.
pub struct ConfigStore {
    slot: Box<dyn ConfigSlot>,
    config: Option<Configuration>,
    needs_setup: bool,
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("config", &self.config)
            .field("needs_setup", &self.needs_setup)
            .finish()
    }
}

impl ConfigStore {
    /// Resolves the startup configuration: launch link first, then the
    /// persisted slot, else the setup prompt.
    pub fn initialize(slot: Box<dyn ConfigSlot>, launch: &LaunchParams) -> (Self, ConfigSource) {
        let mut store = Self { slot, config: None, needs_setup: false };

        if let Some(config) = launch.configuration() {
            info!("Configuration provided by launch link: {}", config.base_url);
            if let Err(e) = store.persist(&config) {
                warn!("Could not persist launch configuration: {:#}", e);
            }
            store.config = Some(config);
            return (store, ConfigSource::LaunchLink);
        }

        match store.slot.load() {
            Ok(Some(record)) => match serde_json::from_str::<Configuration>(&record) {
                Ok(config) if config.is_complete() => {
                    info!("Loaded saved configuration for {}", config.base_url);
                    store.config = Some(config);
                    return (store, ConfigSource::Persisted);
                }
                Ok(_) => warn!("Saved configuration is incomplete, asking for setup"),
                Err(e) => warn!("Error parsing saved configuration: {}", e),
            },
            Ok(None) => info!("No saved configuration found"),
            Err(e) => warn!("Could not read saved configuration: {:#}", e),
        }

        store.needs_setup = true;
        (store, ConfigSource::Missing)
    }

    pub fn config(&self) -> Option<Configuration> {
        self.config.clone()
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    pub fn needs_setup(&self) -> bool {
        self.needs_setup
    }

    pub fn dismiss_setup(&mut self) {
        self.needs_setup = false;
    }

    /// Replaces the configuration and persists it. The in-memory value is
    /// replaced even when the slot write fails.
    pub fn save(&mut self, config: Configuration) -> anyhow::Result<()> {
        let persisted = self.persist(&config);
        info!("Configuration saved for {}", config.base_url);
        self.config = Some(config);
        self.needs_setup = false;
        persisted
    }

    pub fn reset(&mut self) -> anyhow::Result<()> {
        self.config = None;
        self.needs_setup = true;
        info!("Configuration reset");
        self.slot.clear()
    }

    /// Request URL for a logical path; unchanged when unconfigured.
    pub fn resolve(&self, logical_path: &str) -> String {
        match &self.config {
            Some(config) => config.resolve(logical_path),
            None => logical_path.to_string(),
        }
    }

    fn persist(&self, config: &Configuration) -> anyhow::Result<()> {
        let record = serde_json::to_string(config).context("serializing configuration")?;
        self.slot.store(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::connection::LaunchParams;

    fn launch(link: &str) -> LaunchParams {
        LaunchParams::parse(link)
    }

    #[test]
    fn unconfigured_without_sources() {
        let (store, source) = ConfigStore::initialize(Box::new(MemorySlot::default()), &LaunchParams::default());
        assert_eq!(source, ConfigSource::Missing);
        assert!(!store.is_configured());
        assert!(store.needs_setup());
        assert_eq!(store.resolve("/actuator/info"), "/actuator/info");
    }

    #[test]
    fn corrupt_record_prompts_for_setup() {
        let slot = MemorySlot::with_record("{not json");
        let (store, source) = ConfigStore::initialize(Box::new(slot), &LaunchParams::default());
        assert_eq!(source, ConfigSource::Missing);
        assert!(store.needs_setup());
        assert!(store.config().is_none());
    }

    #[test]
    fn launch_link_wins_over_saved_record() {
        let slot = MemorySlot::with_record(r#"{"baseUrl":"http://old:1","apiBasePath":"/v0"}"#);
        let (store, source) = ConfigStore::initialize(
            Box::new(slot),
            &launch("?localAppUrl=http%3A%2F%2Fnew%3A2&apiBasePath=%2Fv2"),
        );
        assert_eq!(source, ConfigSource::LaunchLink);
        assert_eq!(store.config(), Some(Configuration::new("http://new:2", "/v2")));
        assert!(!store.needs_setup());
    }

    #[test]
    fn partial_launch_link_falls_back_to_saved_record() {
        let slot = MemorySlot::with_record(r#"{"baseUrl":"http://old:1","apiBasePath":"/v0"}"#);
        let (store, source) = ConfigStore::initialize(Box::new(slot), &launch("?apiBasePath=%2Fv2"));
        assert_eq!(source, ConfigSource::Persisted);
        assert_eq!(store.config(), Some(Configuration::new("http://old:1", "/v0")));
    }

    #[test]
    fn reset_clears_slot_and_flags_setup() {
        let (mut store, _) = ConfigStore::initialize(Box::new(MemorySlot::default()), &LaunchParams::default());
        store.save(Configuration::new("http://h:8080", "/api/v1")).unwrap();
        assert!(store.is_configured());
        assert!(!store.needs_setup());

        store.reset().unwrap();
        assert!(!store.is_configured());
        assert!(store.needs_setup());
        assert_eq!(store.slot.load().unwrap(), None);
    }

    #[test]
    fn resolve_uses_current_config() {
        let (mut store, _) = ConfigStore::initialize(Box::new(MemorySlot::default()), &LaunchParams::default());
        store.save(Configuration::new("http://h:8080", "/api/v1")).unwrap();
        assert_eq!(store.resolve("/status"), "http://h:8080/api/v1/status");
    }
}
