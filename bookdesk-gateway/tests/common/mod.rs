//! 共享测试工具：进程内 HTTP 模拟服务器

#![allow(dead_code, clippy::expect_used)]

use std::io::Read;
use std::thread::{self, JoinHandle};

use bookdesk_gateway::{BookGateway, GatewayConfig, RestBookGateway};
use tiny_http::{Header, Response, Server};

/// 模拟服务器收到的一次请求
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub body: String,
}

/// 预设的响应
pub struct Canned {
    pub status: u16,
    pub body: String,
}

impl Canned {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self::json(status, "")
    }
}

/// 按顺序应答 `responses` 的一次性模拟服务器
pub struct MockServer {
    pub base_url: String,
    handle: JoinHandle<Vec<RecordedRequest>>,
}

impl MockServer {
    pub fn start(responses: Vec<Canned>) -> Self {
        let server = Server::http("127.0.0.1:0").expect("start mock server");
        let base_url = format!("http://{}/api/books", server.server_addr());

        let handle = thread::spawn(move || {
            let mut seen = Vec::new();
            for canned in responses {
                let mut request = server.recv().expect("request expected");
                let mut body = String::new();
                request
                    .as_reader()
                    .read_to_string(&mut body)
                    .expect("readable request body");
                seen.push(RecordedRequest {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    body,
                });
                let response = Response::from_string(canned.body)
                    .with_status_code(canned.status)
                    .with_header(
                        Header::from_bytes("Content-Type", "application/json")
                            .expect("valid content type header"),
                    );
                request.respond(response).expect("response should succeed");
            }
            seen
        });

        Self { base_url, handle }
    }

    pub fn gateway(&self) -> impl BookGateway {
        RestBookGateway::new(&GatewayConfig::new(self.base_url.clone())).expect("gateway")
    }

    /// 等待服务器线程结束并返回收到的请求
    pub fn finish(self) -> Vec<RecordedRequest> {
        self.handle.join().expect("server thread should join")
    }
}

pub const DUNE_JSON: &str =
    r#"{"id":1,"title":"Dune","author":"Herbert","isbn":"123","publishedDate":"1965-08-01"}"#;
