// src/main.rs

use axum::serve;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use ad_selector::api;
use ad_selector::config::config_manager::ConfigManager;
use ad_selector::logging::init_tracing;
use ad_selector::selection::logic::AdvertisementSelectionLogic;
use ad_selector::AppState;

#[derive(Parser, Debug)]
#[command(author = "whiteCcinn", version = "1.0", about = "Targeting-based advertisement selection server")]
struct CliArgs {
    #[arg(short, long, default_value_t = 8080)]
    port: u16,
    #[arg(long, default_value = "logs")]
    log_dir: String,
    #[arg(long, default_value = "static/advertisement_content.json")]
    content_file: String,
    #[arg(long, default_value = "static/targeting_groups.json")]
    targeting_file: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    let config = ConfigManager::new(args.port, &args.log_dir, &args.content_file, &args.targeting_file);

    // 初始化全局 tracing 日志，guard 持有到进程退出
    let _guard = match init_tracing(&config.log_dir, "ad_selector") {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Unable to set global tracing subscriber: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("ad selector server failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ConfigManager) -> Result<(), Box<dyn std::error::Error>> {
    // 从 JSON 文件加载创意和定向组
    let catalog = config.catalog_adapter().load()?;
    info!(
        marketplaces = catalog.content_dao.marketplace_count(),
        contents = catalog.content_count,
        targeting_groups = catalog.targeting_group_count,
        "catalog ready"
    );

    let selection_logic = AdvertisementSelectionLogic::new(
        Arc::new(catalog.content_dao),
        Arc::new(catalog.targeting_group_dao),
    );
    let state = Arc::new(AppState::new(selection_logic));
    let app = api::router(state);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("ad selector server running at http://{}", addr);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("ad selector server shut down.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutting down gracefully...");
}
