use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use log::{info, warn};

use crate::client::config::AppSettings;
use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::gui::widgets::matrix_rain::MatrixRain;
use crate::client::gui::widgets::typewriter::Typewriter;
use crate::client::models::connection::{Configuration, LaunchParams, Route};
use crate::client::models::fetch_state::{FetchCache, FetchResult, FetchTicket};
use crate::client::models::messages::Message;
use crate::client::models::tab_router::TabRouter;
use crate::client::models::ui_state::{ConfigForm, CopyIndicator, COPY_FEEDBACK};
use crate::client::utils::config_store::{ConfigSlot, ConfigSource, ConfigStore};
use crate::common::endpoints::Endpoint;

pub const HERO_LINE: &str = "$ Your API is running...";
const NOTICE_TTL: Duration = Duration::from_millis(3000);
const RAIN_WIDTH: usize = 120;
const RAIN_HEIGHT: usize = 6;

/// Side effects requested by [`DashboardState::update`]; the GUI layer turns
/// them into iced commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch(FetchTicket),
    CopyToClipboard(String),
    ExpireCopy { endpoint: Endpoint, generation: u64, after: Duration },
    ClearLogAfter { generation: u64, after: Duration },
    WriteFile { path: PathBuf, contents: String },
}

/// Checks the dialog input and normalizes it into a configuration.
pub fn validate_form(base_url: &str, api_base_path: &str) -> Result<Configuration, String> {
    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err("Base URL is required".to_string());
    }
    let parsed = url::Url::parse(base)
        .map_err(|_| "Base URL must be an absolute URL (e.g. http://localhost:8080)".to_string())?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err("Base URL must use http or https".to_string());
    }

    let path = api_base_path.trim();
    if path.is_empty() {
        return Err("API base path is required".to_string());
    }
    let path = if path.starts_with('/') { path.to_string() } else { format!("/{path}") };
    Ok(Configuration::new(base, path))
}

pub struct DashboardState {
    pub settings: AppSettings,
    pub store: ConfigStore,
    pub route: Route,
    pub router: TabRouter,
    pub spec: FetchCache,
    pub copy: CopyIndicator,
    pub form: ConfigForm,
    pub logger: Vec<LogMessage>,
    notice_generation: u64,
    pub started: Instant,
    pub now: DateTime<Local>,
    pub typewriter: Typewriter,
    pub rain: MatrixRain,
}

impl DashboardState {
    pub fn new(settings: AppSettings, slot: Box<dyn ConfigSlot>, launch: &LaunchParams) -> (Self, Vec<Effect>) {
        let (store, source) = ConfigStore::initialize(slot, launch);
        let typewriter = if settings.animations {
            Typewriter::new(HERO_LINE)
        } else {
            Typewriter::finished(HERO_LINE)
        };
        let seed = Local::now().timestamp_millis() as u64;
        let mut state = Self {
            route: launch.route.unwrap_or_default(),
            router: TabRouter::actuator(),
            spec: FetchCache::default(),
            copy: CopyIndicator::default(),
            form: ConfigForm::default(),
            logger: Vec::new(),
            notice_generation: 0,
            started: Instant::now(),
            now: Local::now(),
            typewriter,
            rain: MatrixRain::new(RAIN_WIDTH, RAIN_HEIGHT, 0.1, seed),
            store,
            settings,
        };

        let mut effects = Vec::new();
        if state.store.needs_setup() {
            state.open_form();
        }
        if source == ConfigSource::LaunchLink {
            effects.extend(state.notice(LogLevel::Info, "Configuration loaded from launch link"));
        }
        effects.extend(state.on_configured());
        (state, effects)
    }

    pub fn config(&self) -> Option<Configuration> {
        self.store.config()
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    /// Result shown by the viewer of the given endpoint.
    pub fn result(&self, endpoint: Endpoint) -> Option<&FetchResult> {
        if endpoint.is_actuator() {
            self.router.result(endpoint)
        } else {
            self.spec.get(endpoint)
        }
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Navigate(route) => {
                info!("Navigating to {}", route.path());
                self.route = route;
                if route == Route::OpenApiSpec && self.store.is_configured() {
                    vec![Effect::Fetch(self.spec.begin(Endpoint::SwaggerJson))]
                } else {
                    Vec::new()
                }
            }
            Message::OpenConfigDialog => {
                self.open_form();
                Vec::new()
            }
            Message::CloseConfigDialog => {
                self.form.open = false;
                self.store.dismiss_setup();
                Vec::new()
            }
            Message::ConfigBaseUrlChanged(value) => {
                self.form.base_url = value;
                self.form.error = None;
                Vec::new()
            }
            Message::ConfigApiBasePathChanged(value) => {
                self.form.api_base_path = value;
                self.form.error = None;
                Vec::new()
            }
            Message::SaveConfig => self.save_form(),
            Message::ResetConfig => {
                let effects = match self.store.reset() {
                    Ok(()) => self.notice(LogLevel::Info, "Configuration cleared"),
                    Err(e) => {
                        warn!("Could not clear saved configuration: {:#}", e);
                        self.notice(LogLevel::Warning, format!("Could not clear saved configuration: {e}"))
                    }
                };
                self.router.reset();
                self.spec.clear_all();
                self.open_form();
                effects
            }
            Message::SelectTab(endpoint) => self.router.activate(endpoint).map(Effect::Fetch).into_iter().collect(),
            Message::RefreshActiveTab => vec![Effect::Fetch(self.router.refresh())],
            Message::RefreshSpec => vec![Effect::Fetch(self.spec.begin(Endpoint::SwaggerJson))],
            Message::FetchCompleted { ticket, outcome } => {
                if let Err(e) = &outcome {
                    warn!("{} failed: {}", ticket.endpoint.path(), e);
                }
                if ticket.endpoint.is_actuator() {
                    self.router.complete(ticket, outcome);
                } else {
                    self.spec.complete(ticket, outcome);
                }
                Vec::new()
            }
            Message::CopyDocument(endpoint) => {
                let text = match self.result(endpoint) {
                    Some(FetchResult::Ready(doc)) => doc.text().to_string(),
                    _ => return Vec::new(),
                };
                let generation = self.copy.trigger(endpoint);
                vec![
                    Effect::CopyToClipboard(text),
                    Effect::ExpireCopy { endpoint, generation, after: COPY_FEEDBACK },
                ]
            }
            Message::CopyIndicatorExpired { endpoint, generation } => {
                self.copy.expire(endpoint, generation);
                Vec::new()
            }
            Message::CopyUrl(endpoint) => match self.store.config() {
                Some(config) => {
                    let url = config.resolve(endpoint.path());
                    let mut effects = vec![Effect::CopyToClipboard(url.clone())];
                    effects.extend(self.notice(LogLevel::Success, format!("Copied {url}")));
                    effects
                }
                None => self.notice(LogLevel::Warning, "Configure the backend first"),
            },
            Message::DownloadSpec => match self.spec.get(Endpoint::SwaggerJson) {
                Some(FetchResult::Ready(doc)) => vec![Effect::WriteFile {
                    path: self.settings.download_dir.join("openapi-spec.json"),
                    contents: doc.text().to_string(),
                }],
                _ => Vec::new(),
            },
            Message::SpecDownloaded(Ok(path)) => {
                self.notice(LogLevel::Success, format!("Saved {}", path.display()))
            }
            Message::SpecDownloaded(Err(e)) => self.notice(LogLevel::Error, format!("Download failed: {e}")),
            Message::ClearLog { generation } => {
                // Only the timer of the latest notice clears the bar.
                if generation == self.notice_generation {
                    self.logger.clear();
                }
                Vec::new()
            }
            Message::Tick(_) => {
                self.now = Local::now();
                if self.settings.animations {
                    self.typewriter.tick();
                    self.rain.tick();
                }
                Vec::new()
            }
        }
    }

    fn open_form(&mut self) {
        let (base_url, api_base_path) = match self.store.config() {
            Some(config) => (config.base_url, config.api_base_path),
            None => (
                self.settings.default_base_url.clone(),
                self.settings.default_api_base_path.clone(),
            ),
        };
        self.form = ConfigForm { open: true, base_url, api_base_path, error: None };
    }

    fn save_form(&mut self) -> Vec<Effect> {
        let config = match validate_form(&self.form.base_url, &self.form.api_base_path) {
            Ok(config) => config,
            Err(e) => {
                self.form.error = Some(e);
                return Vec::new();
            }
        };
        let changed = self.store.config().as_ref() != Some(&config);
        let mut effects = match self.store.save(config) {
            Ok(()) => self.notice(LogLevel::Success, "Configuration saved"),
            Err(e) => {
                warn!("Could not persist configuration: {:#}", e);
                self.notice(LogLevel::Warning, format!("Configuration applied but not saved: {e}"))
            }
        };
        self.form.open = false;
        if changed {
            // Cached results belong to the previous backend.
            self.router.reset();
            self.spec.clear_all();
            effects.extend(self.on_configured());
        }
        effects
    }

    fn on_configured(&mut self) -> Vec<Effect> {
        if !self.store.is_configured() {
            return Vec::new();
        }
        let mut effects: Vec<Effect> = self.router.prime().map(Effect::Fetch).into_iter().collect();
        if self.route == Route::OpenApiSpec {
            effects.push(Effect::Fetch(self.spec.begin(Endpoint::SwaggerJson)));
        }
        effects
    }

    fn notice(&mut self, level: LogLevel, message: impl Into<String>) -> Vec<Effect> {
        self.logger.push(LogMessage::new(level, message));
        self.notice_generation += 1;
        vec![Effect::ClearLogAfter { generation: self.notice_generation, after: NOTICE_TTL }]
    }
}
