//! bookdesk TUI
//!
//! Library Management System 的终端客户端。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与日志 (`backend/`)
//!
//! 书目状态和所有网络请求由 `bookdesk_core::BookController` 管理。
//!
//!
//! main.rs 的执行顺序：
//!
//!     init_logging()              // 日志写入文件
//!     LocalConfigService::load()  // 读取配置（文件 + 环境变量）
//!     create_gateway()            // 创建 REST 网关
//!     BookController::on_load()   // 清空表单，加载全部图书
//!     init_terminal()             // 原始模式 + 备用屏幕
//!     app::run()                  // 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use bookdesk_core::{BookController, Notifier};
use bookdesk_gateway::create_gateway;

use backend::{ConfigService, LocalConfigService};
use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 日志（失败不影响运行）
    match backend::init_logging() {
        Ok(Some(path)) => log::info!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("bookdesk: logging disabled: {e:#}"),
    }

    // 2. 配置与网关
    let config_service = LocalConfigService::new();
    if let Err(e) = config_service.ensure_file() {
        log::warn!("Cannot write default config: {e:#}");
    }
    let config = config_service.load()?;
    let gateway = create_gateway(&config.gateway_config()).context("creating book gateway")?;

    // 3. 控制器：启动时加载全部图书
    let (notifier, notifications) = Notifier::channel();
    let mut controller = BookController::new(gateway, notifier);
    controller.on_load();

    let mut app = model::App::new(controller, notifications, config.api_base_url.clone());

    // 4. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    log::info!("bookdesk exited");
    result
}
