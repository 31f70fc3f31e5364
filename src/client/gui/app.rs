use std::time::Duration;

use anyhow::Context;
use iced::{Application, Command, Element, Subscription, Theme};
use iced_aw::Modal;
use log::{error, info};

use crate::client::config::AppSettings;
use crate::client::gui::views::{actuator, config_dialog, dashboard, openapi_spec};
use crate::client::models::app_state::{DashboardState, Effect};
use crate::client::models::connection::{LaunchParams, Route};
use crate::client::models::messages::Message;
use crate::client::services::actuator_client::ActuatorClient;
use crate::client::utils::config_store::FileSlot;

const FRAME: Duration = Duration::from_millis(80);

/// Startup inputs handed over by `main`.
#[derive(Debug, Clone, Default)]
pub struct AppFlags {
    pub settings: AppSettings,
    pub launch: LaunchParams,
}

pub struct AdminApp {
    pub state: DashboardState,
    pub client: ActuatorClient,
}

impl AdminApp {
    fn run_effects(&self, effects: Vec<Effect>) -> Command<Message> {
        Command::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
    }

    fn run_effect(&self, effect: Effect) -> Command<Message> {
        match effect {
            Effect::Fetch(ticket) => {
                // Snapshot so a later config change cannot leak into this request.
                let config = self.state.config();
                let client = self.client.clone();
                Command::perform(
                    async move { client.fetch(config.as_ref(), ticket.endpoint).await },
                    move |outcome| Message::FetchCompleted { ticket, outcome },
                )
            }
            Effect::CopyToClipboard(text) => iced::clipboard::write(text),
            Effect::ExpireCopy { endpoint, generation, after } => Command::perform(tokio::time::sleep(after), move |_| {
                Message::CopyIndicatorExpired { endpoint, generation }
            }),
            Effect::ClearLogAfter { generation, after } => {
                Command::perform(tokio::time::sleep(after), move |_| Message::ClearLog { generation })
            }
            Effect::WriteFile { path, contents } => Command::perform(
                async move {
                    tokio::fs::write(&path, contents)
                        .await
                        .with_context(|| format!("writing {}", path.display()))
                        .map(|_| path)
                        .map_err(|e| {
                            error!("{:#}", e);
                            format!("{:#}", e)
                        })
                },
                Message::SpecDownloaded,
            ),
        }
    }
}

impl Application for AdminApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        let AppFlags { settings, launch } = flags;
        let client = ActuatorClient::new(settings.request_timeout);
        let slot = FileSlot::new(settings.config_path.clone());
        info!("Using configuration file {}", slot.path().display());

        let (state, effects) = DashboardState::new(settings, Box::new(slot), &launch);
        let app = AdminApp { state, client };
        let cmd = app.run_effects(effects);
        (app, cmd)
    }

    fn title(&self) -> String {
        match self.state.route {
            Route::Dashboard => "Nodeboot Admin".to_string(),
            Route::Actuator => "Nodeboot Admin - Actuator".to_string(),
            Route::OpenApiSpec => "Nodeboot Admin - OpenAPI Specification".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        let effects = self.state.update(message);
        self.run_effects(effects)
    }

    fn view(&self) -> Element<Message> {
        let page = match self.state.route {
            Route::Dashboard => dashboard::view(&self.state),
            Route::Actuator => actuator::view(&self.state),
            Route::OpenApiSpec => openapi_spec::view(&self.state),
        };
        let dialog = self
            .state
            .form
            .open
            .then(|| config_dialog::view(&self.state.form, self.state.store.is_configured()));

        Modal::new(page, dialog)
            .backdrop(Message::CloseConfigDialog)
            .on_esc(Message::CloseConfigDialog)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Without animations only the clock needs refreshing.
        let period = if self.state.settings.animations { FRAME } else { Duration::from_secs(1) };
        iced::time::every(period).map(Message::Tick)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
