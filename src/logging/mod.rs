// src/logging/mod.rs

pub mod selection_log;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// **初始化全局 tracing 日志**
///
/// - JSON 格式按小时滚动写入 `log_dir/<file_prefix>.json`
/// - 同时输出到 stdout
/// - 日志级别由 `RUST_LOG` 控制，默认 `info`
///
/// 返回的 guard 必须在进程退出前一直持有，否则后台写线程会提前停止。
pub fn init_tracing(log_dir: &str, file_prefix: &str) -> Result<WorkerGuard, TryInitError> {
    let log_file = rolling::hourly(log_dir, format!("{}.json", file_prefix));
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    Registry::default()
        .with(filter)
        .with(fmt::layer().json().with_writer(non_blocking))
        .with(fmt::layer().with_target(true))
        .try_init()?;

    Ok(guard)
}
