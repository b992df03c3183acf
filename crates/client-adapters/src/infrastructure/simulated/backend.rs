//! In-memory stand-in for the Storymaker backend.
//!
//! Answers the same routes with the same status codes and bodies as the live
//! server, so the transport on top of it can share response normalization
//! with the HTTP transport.

use std::collections::HashMap;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use storymaker_client_ports::outbound::{HttpMethod, RequestOptions};
use storymaker_domain::{Book, BookId, Character, CharacterId, DomainError, UserProfile};
use storymaker_protocol::{
    ApiResponse, BookCreated, CharacterCreated, CreateBookRequest, CreateCharacterRequest,
    ErrorResponse, HealthResponse, LoginRequest, LoginResponse,
};

use super::fixtures;

/// Status and JSON body of a simulated answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedResponse {
    pub status: u16,
    pub body: Value,
}

impl SimulatedResponse {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(body) => Self { status, body },
            Err(e) => {
                tracing::error!(error = %e, "simulated backend failed to encode a response");
                Self::error(500, "Internal Server Error")
            }
        }
    }

    fn ok<T: Serialize>(data: T) -> Self {
        Self::json(200, &ApiResponse::ok(data))
    }

    fn created<T: Serialize>(data: T) -> Self {
        Self::json(201, &ApiResponse::ok(data))
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        let ErrorResponse {
            status: label,
            error,
            code,
        } = ErrorResponse::new(status, message);
        Self {
            status,
            body: json!({ "status": label, "error": error, "code": code }),
        }
    }
}

impl From<DomainError> for SimulatedResponse {
    fn from(e: DomainError) -> Self {
        Self::error(400, e.to_string())
    }
}

/// Server-side storage: books, characters, and issued session tokens.
#[derive(Debug, Clone, Default)]
pub struct SimulatedBackend {
    books: Vec<Book>,
    characters: Vec<Character>,
    sessions: HashMap<String, UserProfile>,
}

impl SimulatedBackend {
    /// Backend seeded with the deterministic fixtures.
    pub fn seeded() -> Self {
        let characters = fixtures::characters();
        let books = fixtures::books(&characters);
        Self::with_data(books, characters)
    }

    pub fn with_data(books: Vec<Book>, characters: Vec<Character>) -> Self {
        Self {
            books,
            characters,
            sessions: HashMap::new(),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id.as_str() == id)
    }

    /// Route one request.
    pub fn handle(&mut self, path: &str, options: &RequestOptions) -> SimulatedResponse {
        let path = path.split('?').next().unwrap_or_default();
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match (options.method, segments.as_slice()) {
            (HttpMethod::Get, ["api", "health"]) => SimulatedResponse::json(
                200,
                &HealthResponse {
                    status: "ok".to_string(),
                },
            ),

            (HttpMethod::Get, ["api", "books"]) => self
                .authorize(options)
                .map(|_| SimulatedResponse::ok(&self.books))
                .unwrap_or_else(|denied| denied),
            (HttpMethod::Post, ["api", "books"]) => self.create_book(options),
            (HttpMethod::Get, ["api", "books", id]) => self.get_book(options, id),

            (HttpMethod::Get, ["api", "characters"]) => self
                .authorize(options)
                .map(|_| SimulatedResponse::ok(&self.characters))
                .unwrap_or_else(|denied| denied),
            (HttpMethod::Post, ["api", "characters"]) => self.create_character(options),
            (HttpMethod::Get, ["api", "characters", id]) => self.get_character(options, id),

            (HttpMethod::Post, ["api", "login"]) => self.login(options),
            (HttpMethod::Get, ["api", "me"]) => self.me(options),

            (_, segs) if is_known_route(segs) => {
                SimulatedResponse::error(405, "Method Not Allowed")
            }
            _ => SimulatedResponse::error(404, "Not Found"),
        }
    }

    /// `DEV` or a bearer token issued by login.
    fn authorize(&self, options: &RequestOptions) -> Result<UserProfile, SimulatedResponse> {
        let header = options.header("Authorization").unwrap_or_default().trim();
        if header == fixtures::DEV_CREDENTIAL {
            return Ok(fixtures::dev_user());
        }
        let token = header.strip_prefix("Bearer ").map(str::trim).unwrap_or_default();
        if token.is_empty() {
            return Err(SimulatedResponse::error(401, "Missing bearer token"));
        }
        self.sessions
            .get(token)
            .cloned()
            .ok_or_else(|| SimulatedResponse::error(401, "Invalid token"))
    }

    fn create_book(&mut self, options: &RequestOptions) -> SimulatedResponse {
        let result = self.authorize(options).and_then(|_| {
            let request: CreateBookRequest = parse_body(options)?;
            let main_character = request
                .main_character
                .ok_or_else(|| SimulatedResponse::error(400, "main_character: field required"))?;

            let book = Book {
                id: BookId::generate(),
                name: request.name,
                description: request.description,
                main_character,
                side_characters: request.side_characters,
                chapters: request.chapters,
                created_at: Utc::now(),
            };
            book.validate()?;
            Ok(book)
        });

        match result {
            Ok(book) => {
                let book_id = book.id.clone();
                tracing::debug!(%book_id, name = %book.name, "simulated backend stored book");
                self.books.push(book);
                SimulatedResponse::created(BookCreated { book_id })
            }
            Err(denied) => denied,
        }
    }

    fn get_book(&self, options: &RequestOptions, id: &str) -> SimulatedResponse {
        if let Err(denied) = self.authorize(options) {
            return denied;
        }
        match self.book(id) {
            Some(book) => SimulatedResponse::ok(book),
            None => SimulatedResponse::error(404, "Book not found"),
        }
    }

    fn create_character(&mut self, options: &RequestOptions) -> SimulatedResponse {
        let result = self.authorize(options).and_then(|_| {
            let request: CreateCharacterRequest = parse_body(options)?;
            let character = Character::new(CharacterId::generate(), request.name, request.kind)
                .with_description(request.description)
                .with_created_at(Utc::now());
            character.validate()?;
            Ok(character)
        });

        match result {
            Ok(character) => {
                let character_id = character.id.clone();
                self.characters.push(character);
                SimulatedResponse::created(CharacterCreated { character_id })
            }
            Err(denied) => denied,
        }
    }

    fn get_character(&self, options: &RequestOptions, id: &str) -> SimulatedResponse {
        if let Err(denied) = self.authorize(options) {
            return denied;
        }
        match self.characters.iter().find(|c| c.id.as_str() == id) {
            Some(character) => SimulatedResponse::ok(character),
            None => SimulatedResponse::error(404, "Character not found"),
        }
    }

    fn login(&mut self, options: &RequestOptions) -> SimulatedResponse {
        let request: LoginRequest = match parse_body(options) {
            Ok(request) => request,
            Err(denied) => return denied,
        };
        if !request.email.trim().eq_ignore_ascii_case(fixtures::DEV_EMAIL) {
            return SimulatedResponse::error(401, "Invalid credentials");
        }

        let token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(token.clone(), fixtures::dev_user());
        SimulatedResponse::ok(LoginResponse {
            access_token: token,
            token_type: "bearer".to_string(),
        })
    }

    fn me(&self, options: &RequestOptions) -> SimulatedResponse {
        match self.authorize(options) {
            Ok(profile) => SimulatedResponse::ok(profile),
            Err(denied) => denied,
        }
    }
}

fn is_known_route(segments: &[&str]) -> bool {
    matches!(
        segments,
        ["api", "health"]
            | ["api", "books"]
            | ["api", "books", _]
            | ["api", "characters"]
            | ["api", "characters", _]
            | ["api", "login"]
            | ["api", "me"]
    )
}

/// Request bodies must be JSON objects of the expected shape.
fn parse_body<T: DeserializeOwned>(options: &RequestOptions) -> Result<T, SimulatedResponse> {
    match &options.body {
        Some(body @ Value::Object(map)) if !map.is_empty() => serde_json::from_value(body.clone())
            .map_err(|e| SimulatedResponse::error(400, e.to_string())),
        _ => Err(SimulatedResponse::error(400, "JSON body required")),
    }
}
