use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Book, BookDraft, BookId};

/// 图书远程数据网关 Trait
///
/// 每个方法恰好对应一次网络往返，成功返回值，失败返回 [`GatewayError`](crate::GatewayError)。
/// 本层不做任何重试，也不持有任何 UI 可见状态。
#[async_trait]
pub trait BookGateway: Send + Sync {
    /// 获取全部图书
    async fn list_all(&self) -> Result<Vec<Book>>;

    /// 按 ID 获取单本图书（实体已不存在时返回 `NotFound`）
    async fn get_by_id(&self, id: BookId) -> Result<Book>;

    /// 按关键字搜索
    ///
    /// 调用方负责拒绝空白查询（改用 [`list_all`](Self::list_all)）。
    async fn search(&self, query: &str) -> Result<Vec<Book>>;

    /// 创建图书，返回带有服务端分配 ID 的记录
    async fn create(&self, draft: &BookDraft) -> Result<Book>;

    /// 更新图书，返回服务端确认后的记录
    async fn update(&self, book: &Book) -> Result<Book>;

    /// 删除图书
    async fn delete(&self, id: BookId) -> Result<()>;
}
