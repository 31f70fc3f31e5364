use iced::{window, Application, Size};
use nodeboot_admin::client::config::AppSettings;
use nodeboot_admin::client::gui::app::{AdminApp, AppFlags};
use nodeboot_admin::client::models::connection::LaunchParams;
use nodeboot_admin::utils::logger::AdminLogger;

fn main() -> iced::Result {
    let settings = AppSettings::from_env();
    if let Err(e) = AdminLogger::init(&settings.log_level) {
        eprintln!("Logger already initialized: {}", e);
    }

    // A launch link such as `/actuator?localAppUrl=...&apiBasePath=...` can be
    // passed as first argument or through NODEBOOT_LAUNCH_URL.
    let launch = LaunchParams::from_sources(std::env::args().nth(1), settings.launch_url.clone());

    AdminApp::run(iced::Settings {
        window: window::Settings {
            size: Size::new(1200.0, 820.0),
            min_size: Some(Size::new(900.0, 600.0)),
            ..Default::default()
        },
        ..iced::Settings::with_flags(AppFlags { settings, launch })
    })
}
