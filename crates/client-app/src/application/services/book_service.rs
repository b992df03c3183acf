//! Book Service - list, fetch and create books

use storymaker_client_ports::outbound::ApiError;
use storymaker_domain::Book;
use storymaker_protocol::{routes, ApiResponse, BookCreated, CreateBookRequest};

use super::DEV_AUTHORIZATION;
use crate::application::Api;

#[derive(Clone)]
pub struct BookService {
    api: Api,
}

impl BookService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn list_books(&self) -> Result<ApiResponse<Vec<Book>>, ApiError> {
        self.api.get(routes::BOOKS, Some(DEV_AUTHORIZATION)).await
    }

    pub async fn get_book(&self, book_id: &str) -> Result<ApiResponse<Book>, ApiError> {
        self.api
            .get(&routes::book(book_id), Some(DEV_AUTHORIZATION))
            .await
    }

    /// Submit a book. The request is sent as given.
    pub async fn create_book(
        &self,
        request: &CreateBookRequest,
    ) -> Result<ApiResponse<BookCreated>, ApiError> {
        self.api
            .post(routes::BOOKS, request, Some(DEV_AUTHORIZATION))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;
    use storymaker_client_ports::outbound::{HttpMethod, MockRawApiPort};

    #[tokio::test]
    async fn create_book_posts_the_payload_with_the_dev_credential() {
        let mut raw = MockRawApiPort::new();
        raw.expect_request_json()
            .times(1)
            .withf(|path, opts| {
                path == "/api/books"
                    && opts.method == HttpMethod::Post
                    && opts.header("Authorization") == Some("DEV")
                    && opts.body.as_ref().is_some_and(|b| b["name"] == "Dawn")
            })
            .returning(|_, _| Ok(json!({"status": "ok", "data": {"book_id": "b9"}})));

        let service = BookService::new(Api::new(Arc::new(raw)));
        let request = CreateBookRequest {
            name: "Dawn".into(),
            description: String::new(),
            main_character: None,
            side_characters: Vec::new(),
            chapters: Vec::new(),
        };
        let created = service.create_book(&request).await.unwrap();
        assert_eq!(created.data.book_id.as_str(), "b9");
    }

    #[tokio::test]
    async fn get_book_targets_the_book_path() {
        let mut raw = MockRawApiPort::new();
        raw.expect_request_json()
            .withf(|path, opts| path == "/api/books/b1" && opts.method == HttpMethod::Get)
            .returning(|_, _| Err(ApiError::http(404, "Book not found")));

        let service = BookService::new(Api::new(Arc::new(raw)));
        let err = service.get_book("b1").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
