use nodeboot_admin::client::config::AppSettings;
use nodeboot_admin::client::models::connection::LaunchParams;
use nodeboot_admin::client::services::actuator_client::ActuatorClient;
use nodeboot_admin::client::services::json_format::JsonDocument;
use nodeboot_admin::client::utils::config_store::{ConfigStore, FileSlot};
use nodeboot_admin::common::endpoints::Endpoint;
use nodeboot_admin::utils::logger::AdminLogger;

/// Headless check of every monitored endpoint against the saved (or
/// launch-link) configuration.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::from_env();
    AdminLogger::init(&settings.log_level)?;

    let launch = LaunchParams::from_sources(std::env::args().nth(1), settings.launch_url.clone());
    let (store, source) = ConfigStore::initialize(Box::new(FileSlot::new(settings.config_path.clone())), &launch);
    println!("Configuration source: {:?}", source);

    let client = ActuatorClient::new(settings.request_timeout);
    println!("Request timeout: {:?}", client.timeout());
    let config = store.config();
    let endpoints = Endpoint::ACTUATOR.iter().chain([Endpoint::SwaggerJson].iter());

    let mut failures = 0;
    for &endpoint in endpoints {
        match client.fetch(config.as_ref(), endpoint).await {
            Ok(value) => {
                let doc = JsonDocument::from_value(value);
                println!("OK   {:<24} {} lines", endpoint.label(), doc.line_count());
            }
            Err(e) => {
                failures += 1;
                println!("FAIL {:<24} {}", endpoint.label(), e);
            }
        }
    }

    println!("{} endpoints probed, {} failed", Endpoint::ACTUATOR.len() + 1, failures);
    Ok(())
}
