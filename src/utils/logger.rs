use chrono::Local;
use log::info;
use std::io::Write;

/// Process-wide logger setup for the dashboard binaries.
pub struct AdminLogger;

impl AdminLogger {
    /// Installs the env_logger backend. `RUST_LOG` takes precedence over
    /// the `LOG_LEVEL` setting when both are present.
    pub fn init(log_level: &str) -> anyhow::Result<()> {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
        env_logger::Builder::new()
            .parse_filters(&filter)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] [{}] [{}:{}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .try_init()?;

        info!("Nodeboot admin logger initialized ({})", filter);
        Ok(())
    }
}
