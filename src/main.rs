use anyhow::{Context, Result};
use clap::Parser;
use receipt_charge::{api, AppConfig, ChargeCalculator};
use std::io::Read;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(long, help = "(Optional) Reads the charge request JSON from this file instead of stdin.")]
    pub input: Option<String>,

    #[arg(long, help = "(Optional) Sets the configuration file path.")]
    pub config: Option<String>,

    #[arg(long, help = "(Optional) Pretty-prints the response JSON.")]
    pub pretty: bool,
}

fn init_tracing(config: &AppConfig) {
    // 日志输出到 stderr，stdout 只输出响应
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new(config.log.time_format.clone()))
        .with_env_filter(EnvFilter::new(&config.log.level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn read_request(input: Option<&str>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read charge request from {path}")),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("failed to read charge request from stdin")?;
            Ok(body)
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // 加载配置
    let config = AppConfig::load(args.config.as_deref())?;
    init_tracing(&config);
    info!("Starting with config: {:?}", config);

    let calculator = ChargeCalculator::new(config.policy);
    let body = read_request(args.input.as_deref())?;
    let response = api::handle_charge_json(&calculator, &body);

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{output}");

    if response.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
