use config::{Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 前端静态文件目录
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty`、`compact` 或 `json`
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub seed_sample_items: bool,
}

impl Config {
    /// 优先级：默认值 < default.toml < APP__* 环境变量 < 命令行 / PORT
    pub fn load(cli: &Cli) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("server.static_dir", "./catalog-api/public")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("store.seed_sample_items", true)?
            .add_source(File::from(cli.config_dir.join("default")).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", cli.host.clone())?
            .set_override_option("server.port", cli.port.map(i64::from))?;

        if cli.no_seed {
            builder = builder.set_override("store.seed_sample_items", false)?;
        }

        let config: Config = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
