//! `BookGateway` trait implementation

use async_trait::async_trait;

use crate::codec::{decode_book, decode_book_list};
use crate::error::Result;
use crate::traits::BookGateway;
use crate::types::{Book, BookDraft, BookId, BookPayload};

use super::RestBookGateway;

#[async_trait]
impl BookGateway for RestBookGateway {
    async fn list_all(&self) -> Result<Vec<Book>> {
        let body = self.get(&self.collection_url(), None).await?;
        decode_book_list(&body)
    }

    async fn get_by_id(&self, id: BookId) -> Result<Book> {
        let body = self.get(&self.item_url(id), Some(id)).await?;
        decode_book(&body)
    }

    async fn search(&self, query: &str) -> Result<Vec<Book>> {
        let body = self.get(&self.search_url(query), None).await?;
        decode_book_list(&body)
    }

    async fn create(&self, draft: &BookDraft) -> Result<Book> {
        let body = self
            .post(&self.collection_url(), &BookPayload::from(draft))
            .await?;
        decode_book(&body)
    }

    async fn update(&self, book: &Book) -> Result<Book> {
        let body = self
            .put(&self.item_url(book.id), book.id, &BookPayload::from(book))
            .await?;
        // Some servers acknowledge PUT with an empty body
        if body.trim().is_empty() {
            return Ok(book.clone());
        }
        decode_book(&body)
    }

    async fn delete(&self, id: BookId) -> Result<()> {
        self.delete_request(&self.item_url(id), id).await?;
        Ok(())
    }
}
