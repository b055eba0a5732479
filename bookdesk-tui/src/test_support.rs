//! 测试辅助

#![allow(clippy::expect_used)]

use bookdesk_core::{BookController, Notifier};
use bookdesk_gateway::{create_gateway, GatewayConfig};

use crate::model::App;

/// 指向不可达地址的应用实例
///
/// 测试只检查同步状态，派发出去的请求最终以网络错误结束。
pub fn test_app() -> App {
    let gateway = create_gateway(&GatewayConfig::new("http://127.0.0.1:9/api/books"))
        .expect("gateway");
    let (notifier, notifications) = Notifier::channel();
    App::new(
        BookController::new(gateway, notifier),
        notifications,
        "http://127.0.0.1:9/api/books",
    )
}
