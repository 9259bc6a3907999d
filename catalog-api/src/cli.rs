use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "In-memory catalog REST service", long_about = None)]
pub struct Cli {
    /// 配置目录，读取其中的 default.toml
    #[arg(long, env = "CONFIG_PATH", default_value = "./catalog-api/config")]
    pub config_dir: PathBuf,

    /// 监听地址
    #[arg(long)]
    pub host: Option<String>,

    /// 监听端口
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// 启动时不预置示例数据
    #[arg(long)]
    pub no_seed: bool,
}
