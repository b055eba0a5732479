//!
//! src/backend/mod.rs
//! Backend 层：运行环境
//!
//! 业务逻辑全部位于 bookdesk-core，本层只负责把它接入终端程序：
//!
//!     config_service.rs       配置文件与环境变量 → GatewayConfig
//!     logging.rs              日志写入文件（终端被 TUI 占用）
//!
//!
//! 启动流程（见 main.rs）：
//!
//!     LocalConfigService::new().load()      // 读取配置
//!         ↓
//!     bookdesk_gateway::create_gateway()    // 创建 REST 网关
//!         ↓
//!     BookController::new(gateway, notifier)
//!

mod config_service;
mod logging;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use logging::init_logging;
