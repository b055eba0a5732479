//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     app.pump()                                      // 应用已完成的网络请求，收取通知
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此最多等待 100ms
//!         let msg = handle_event(event, &app);            // 接收原始事件并分发消息
//!         update::update(&mut app, msg)                   // 更新状态
//!     }
//! }
//!
//! 网络请求由控制器派发到 tokio 任务中执行，主循环从不等待它们；
//! 请求完成后，结果在下一轮 pump 中应用。

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
///
/// `poll_event` 会阻塞当前线程，需在多线程运行时中调用，
/// 以便网络请求在其他工作线程上推进。
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 应用已完成的请求
        let applied = app.pump();
        if applied > 0 {
            log::debug!("Applied {applied} completion(s)");
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件
        if let Some(event) = event::poll_event(TICK)? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
