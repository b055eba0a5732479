//! Book resource HTTP request methods

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::types::{BookId, BookPayload};

use super::RestBookGateway;

impl RestBookGateway {
    /// 执行 GET 请求，返回响应文本
    pub(crate) async fn get(&self, url: &str, target: Option<BookId>) -> Result<String> {
        HttpUtils::execute_request(self.client.get(url), "GET", url, target).await
    }

    /// 执行 POST 请求（JSON body）
    pub(crate) async fn post(&self, url: &str, body: &BookPayload) -> Result<String> {
        HttpUtils::execute_request(self.client.post(url).json(body), "POST", url, None).await
    }

    /// 执行 PUT 请求（JSON body）
    pub(crate) async fn put(&self, url: &str, id: BookId, body: &BookPayload) -> Result<String> {
        HttpUtils::execute_request(self.client.put(url).json(body), "PUT", url, Some(id)).await
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete_request(&self, url: &str, id: BookId) -> Result<String> {
        HttpUtils::execute_request(self.client.delete(url), "DELETE", url, Some(id)).await
    }
}
