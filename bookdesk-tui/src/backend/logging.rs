//! 日志初始化
//!
//! TUI 占用终端，日志写入 `<data_local_dir>/bookdesk/bookdesk.log`。
//! 库 crate 使用 `log` 门面，由 `tracing-log` 桥接收集。

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件路径
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("bookdesk").join("bookdesk.log"))
}

/// `RUST_LOG` 优先，未设置或无法解析时为 `info`
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 安装全局 subscriber，返回日志文件路径
///
/// 无法确定数据目录时不记录日志。
pub fn init_logging() -> Result<Option<PathBuf>> {
    let Some(path) = log_file_path() else {
        return Ok(None);
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(env_filter())
        .try_init()
        .context("installing log subscriber")?;
    tracing::debug!(path = %path.display(), "log subscriber installed");

    Ok(Some(path))
}
