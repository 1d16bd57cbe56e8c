//! Request builder, response parser and async client for the character API.
//!
//! # Design
//! `CharacterApi` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`, so
//! the core stays deterministic and testable without I/O.
//!
//! `ApiClient` joins the two halves through a [`Transport`]: build, execute,
//! parse. It never retries and never caches; every call is one outbound
//! request.

use std::sync::Arc;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Character, CharacterPage};

/// Stateless builder/parser for the character endpoints.
#[derive(Debug, Clone)]
pub struct CharacterApi {
    base_url: String,
}

impl CharacterApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET {base}/character/?page={page}`. Pages are numbered from 1.
    pub fn build_character_page(&self, page: u32) -> Result<HttpRequest, ApiError> {
        if page == 0 {
            return Err(ApiError::InvalidArgument("page numbers start at 1".to_string()));
        }
        Ok(get(format!("{}/character/?page={page}", self.base_url)))
    }

    /// `GET {base}/character/{id}`. Character ids start at 1.
    pub fn build_character(&self, id: u32) -> Result<HttpRequest, ApiError> {
        if id == 0 {
            return Err(ApiError::InvalidArgument("character ids start at 1".to_string()));
        }
        Ok(get(format!("{}/character/{id}", self.base_url)))
    }

    pub fn parse_character_page(&self, response: HttpResponse) -> Result<CharacterPage, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_character(&self, response: HttpResponse) -> Result<Character, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

fn get(path: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        path,
        headers: vec![("accept".to_string(), "application/json".to_string())],
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Async client: one network round-trip per call, failures propagated.
#[derive(Clone)]
pub struct ApiClient {
    api: CharacterApi,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            api: CharacterApi::new(base_url),
            transport,
        }
    }

    /// Fetch one page of the character listing.
    pub async fn fetch_character_page(&self, page: u32) -> Result<CharacterPage, ApiError> {
        let request = self.api.build_character_page(page)?;
        tracing::debug!(page, path = %request.path, "fetching character page");
        let response = self.transport.execute(request).await?;
        self.api.parse_character_page(response)
    }

    /// Fetch a single character by id.
    pub async fn fetch_character_by_id(&self, id: u32) -> Result<Character, ApiError> {
        let request = self.api.build_character(id)?;
        tracing::debug!(id, path = %request.path, "fetching character");
        let response = self.transport.execute(request).await?;
        self.api.parse_character(response)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("api", &self.api).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{character_json, page_json, ScriptedTransport};

    fn api() -> CharacterApi {
        CharacterApi::new("http://localhost:3000/api")
    }

    #[test]
    fn build_character_page_produces_correct_request() {
        let req = api().build_character_page(1).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/character/?page=1");
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_character_produces_correct_request() {
        let req = api().build_character(42).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/character/42");
    }

    #[test]
    fn zero_page_and_zero_id_are_rejected() {
        assert!(matches!(
            api().build_character_page(0).unwrap_err(),
            ApiError::InvalidArgument(_)
        ));
        assert!(matches!(
            api().build_character(0).unwrap_err(),
            ApiError::InvalidArgument(_)
        ));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let api = CharacterApi::new("http://localhost:3000/api/");
        let req = api.build_character(1).unwrap();
        assert_eq!(req.path, "http://localhost:3000/api/character/1");
    }

    #[test]
    fn parse_character_page_success() {
        let response = HttpResponse::ok(page_json(3, 3));
        let page = api().parse_character_page(response).unwrap();
        assert_eq!(page.info.count, 3);
        assert_eq!(page.results.len(), 3);
        assert_eq!(page.results[2].id, 3);
    }

    #[test]
    fn parse_character_success() {
        let response = HttpResponse::ok(character_json(7).to_string());
        let character = api().parse_character(response).unwrap();
        assert_eq!(character.id, 7);
        assert_eq!(character.name, "Character 7");
    }

    #[test]
    fn parse_character_not_found() {
        let response = HttpResponse::with_status(404, r#"{"error":"Character not found"}"#);
        let err = api().parse_character(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_character_page_server_error() {
        let response = HttpResponse::with_status(500, "internal error");
        let err = api().parse_character_page(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_character_page_bad_json() {
        let response = HttpResponse::ok("not json");
        let err = api().parse_character_page(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_character_wrong_shape() {
        // A page envelope is not a character.
        let response = HttpResponse::ok(page_json(1, 1));
        let err = api().parse_character(response).unwrap_err();
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn fetch_character_page_issues_one_request() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push(Ok(HttpResponse::ok(page_json(2, 2))));
        let client = ApiClient::new("http://api.test", transport.clone());

        let page = client.fetch_character_page(3).await.unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(transport.paths(), vec!["http://api.test/character/?page=3"]);
    }

    #[tokio::test]
    async fn fetch_character_by_id_propagates_transport_failure() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push(Err(ApiError::Transport("connection refused".to_string())));
        let client = ApiClient::new("http://api.test", transport.clone());

        let err = client.fetch_character_by_id(5).await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(transport.paths(), vec!["http://api.test/character/5"]);
    }

    #[tokio::test]
    async fn invalid_id_never_reaches_the_transport() {
        let transport = Arc::new(ScriptedTransport::new());
        let client = ApiClient::new("http://api.test", transport.clone());

        let err = client.fetch_character_by_id(0).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
        assert!(transport.paths().is_empty());
    }
}
