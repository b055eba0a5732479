//! 测试辅助模块
//!
//! 提供可编排的 mock 网关和便捷的测试工厂方法。

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use bookdesk_gateway::{Book, BookDraft, BookGateway, BookId, GatewayError, Result};
use chrono::NaiveDate;
use tokio::sync::{oneshot, Mutex};

use crate::services::BookController;
use crate::types::{NotificationReceiver, Notifier};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn book(id: i64, title: &str, author: &str) -> Book {
    Book {
        id: BookId::new(id),
        title: title.to_string(),
        author: author.to_string(),
        isbn: format!("isbn-{id}"),
        published_date: date(2000, 1, 1),
    }
}

// ===== MockGateway =====

/// A gateway call as the mock received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListAll,
    GetById(BookId),
    Search(String),
    Create(BookDraft),
    Update(Book),
    Delete(BookId),
}

/// Gateway operation, for failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    ListAll,
    GetById,
    Search,
    Create,
    Update,
    Delete,
}

impl Call {
    fn op(&self) -> Op {
        match self {
            Self::ListAll => Op::ListAll,
            Self::GetById(_) => Op::GetById,
            Self::Search(_) => Op::Search,
            Self::Create(_) => Op::Create,
            Self::Update(_) => Op::Update,
            Self::Delete(_) => Op::Delete,
        }
    }
}

/// Holds back the response to one call until released.
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    pub fn release(self) {
        let _ = self.0.send(());
    }
}

/// In-memory gateway with call recording, failure injection and gates.
///
/// Failures are taken when a call starts, before it waits on a gate.
pub struct MockGateway {
    books: Mutex<BTreeMap<BookId, Book>>,
    calls: Mutex<Vec<Call>>,
    /// 每个操作的下一次调用返回的错误（先进先出）
    failures: Mutex<HashMap<Op, VecDeque<GatewayError>>>,
    gates: Mutex<Vec<(Call, oneshot::Receiver<()>)>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(BTreeMap::new()),
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
            gates: Mutex::new(Vec::new()),
        }
    }

    /// Insert or overwrite stored books.
    pub async fn seed(&self, books: Vec<Book>) {
        let mut store = self.books.lock().await;
        for book in books {
            store.insert(book.id, book);
        }
    }

    /// Remove a book behind the client's back.
    pub async fn remove(&self, id: BookId) {
        self.books.lock().await.remove(&id);
    }

    pub async fn fail_next(&self, op: Op, error: GatewayError) {
        self.failures
            .lock()
            .await
            .entry(op)
            .or_default()
            .push_back(error);
    }

    /// Hold the response to the next call equal to `call`.
    pub async fn hold(&self, call: Call) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().await.push((call, rx));
        Gate(tx)
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    async fn enter(&self, call: Call) -> Result<()> {
        self.calls.lock().await.push(call.clone());
        let failure = self
            .failures
            .lock()
            .await
            .get_mut(&call.op())
            .and_then(VecDeque::pop_front);

        let gate = {
            let mut gates = self.gates.lock().await;
            gates
                .iter()
                .position(|(held, _)| *held == call)
                .map(|index| gates.remove(index).1)
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        failure.map_or(Ok(()), Err)
    }
}

#[async_trait]
impl BookGateway for MockGateway {
    async fn list_all(&self) -> Result<Vec<Book>> {
        self.enter(Call::ListAll).await?;
        Ok(self.books.lock().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: BookId) -> Result<Book> {
        self.enter(Call::GetById(id)).await?;
        self.books
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or(GatewayError::NotFound { id: Some(id) })
    }

    async fn search(&self, query: &str) -> Result<Vec<Book>> {
        self.enter(Call::Search(query.to_string())).await?;
        let needle = query.to_lowercase();
        Ok(self
            .books
            .lock()
            .await
            .values()
            .filter(|b| {
                b.title.to_lowercase().contains(&needle)
                    || b.author.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn create(&self, draft: &BookDraft) -> Result<Book> {
        self.enter(Call::Create(draft.clone())).await?;
        let mut store = self.books.lock().await;
        let next = store.keys().next_back().map_or(1, |id| id.get() + 1);
        let book = draft.clone().with_id(BookId::new(next));
        store.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, book: &Book) -> Result<Book> {
        self.enter(Call::Update(book.clone())).await?;
        let mut store = self.books.lock().await;
        if !store.contains_key(&book.id) {
            return Err(GatewayError::NotFound { id: Some(book.id) });
        }
        store.insert(book.id, book.clone());
        Ok(book.clone())
    }

    async fn delete(&self, id: BookId) -> Result<()> {
        self.enter(Call::Delete(id)).await?;
        self.books
            .lock()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(GatewayError::NotFound { id: Some(id) })
    }
}

// ===== 工厂方法 =====

/// Controller wired to a fresh [`MockGateway`], plus the notification receiver.
pub fn create_test_controller() -> (BookController, Arc<MockGateway>, NotificationReceiver) {
    let gateway = Arc::new(MockGateway::new());
    let (notifier, notes) = Notifier::channel();
    let controller = BookController::new(gateway.clone(), notifier);
    (controller, gateway, notes)
}
