use crate::config::LoggingConfig;
use crate::error::AppError;
use tracing_subscriber::{
    fmt, prelude::*, registry, EnvFilter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    /// 未识别的取值回退到 pretty
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }
}

/// RUST_LOG 优先于配置中的日志级别
pub fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    let from_env = EnvFilter::try_from_default_env().ok();
    let filter_source = if from_env.is_some() { "RUST_LOG" } else { "config" };
    let env_filter = from_env.unwrap_or_else(|| EnvFilter::new(&config.level));

    let format = LogFormat::parse(&config.format);
    let formatting_layer = match format {
        LogFormat::Json => fmt::layer().json().boxed(),
        LogFormat::Compact => fmt::layer().compact().boxed(),
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
    };

    registry()
        .with(env_filter)
        .with(formatting_layer)
        .try_init()
        .map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(?format, filter_source, "logging initialized");

    Ok(())
}
