//! In-memory stand-in for the public character API.
//!
//! Serves a deterministic fixture under `/api` with the same paging rules as
//! the real service: 20 characters per page, 404 with an `error` body for
//! unknown ids and out-of-range pages.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub const PAGE_SIZE: usize = 20;

/// Fixture size used by [`app`].
pub const DEFAULT_FIXTURE_SIZE: u32 = 30;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: Place,
    pub location: Place,
    pub image: String,
    pub episode: Vec<String>,
    pub url: String,
    pub created: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Info {
    pub count: usize,
    pub pages: usize,
    pub next: Option<String>,
    pub prev: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page {
    pub info: Info,
    pub results: Vec<Character>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<usize>,
}

type Db = Arc<Vec<Character>>;

const STATUSES: [&str; 3] = ["Alive", "Dead", "unknown"];
const GENDERS: [&str; 4] = ["Female", "Male", "Genderless", "unknown"];
const PLACES: [&str; 3] = ["Earth (C-137)", "Citadel of Ricks", "Interdimensional Cable"];
const BASE: &str = "https://rickandmortyapi.com/api";

/// `count` generated characters with ids `1..=count`.
pub fn fixture(count: u32) -> Vec<Character> {
    (1..=count).map(generate).collect()
}

fn generate(id: u32) -> Character {
    let i = id as usize;
    let place = |n: usize| Place {
        name: PLACES[n % PLACES.len()].to_string(),
        url: format!("{BASE}/location/{}", n % PLACES.len() + 1),
    };
    Character {
        id,
        name: format!("Character {id}"),
        status: STATUSES[i % STATUSES.len()].to_string(),
        species: if i % 3 == 0 { "Alien" } else { "Human" }.to_string(),
        kind: if i % 5 == 0 { "Parasite".to_string() } else { String::new() },
        gender: GENDERS[i % GENDERS.len()].to_string(),
        origin: place(i),
        location: place(i + 1),
        image: format!("{BASE}/character/avatar/{id}.jpeg"),
        episode: (1..=(i % 4 + 1)).map(|e| format!("{BASE}/episode/{e}")).collect(),
        url: format!("{BASE}/character/{id}"),
        created: "2017-11-04T18:48:46.250Z".to_string(),
    }
}

/// Router over the default fixture.
pub fn app() -> Router {
    app_with(fixture(DEFAULT_FIXTURE_SIZE))
}

/// Router over an explicit set of characters.
pub fn app_with(characters: Vec<Character>) -> Router {
    let db: Db = Arc::new(characters);
    Router::new()
        .route("/api/character", get(list_characters))
        .route("/api/character/", get(list_characters))
        .route("/api/character/{id}", get(get_character))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found(error: &'static str) -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody { error }))
}

fn page_link(page: usize) -> String {
    format!("/api/character/?page={page}")
}

async fn list_characters(
    State(db): State<Db>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page>, (StatusCode, Json<ErrorBody>)> {
    let page = query.page.unwrap_or(1);
    let pages = db.len().div_ceil(PAGE_SIZE);
    if page == 0 || page > pages {
        return Err(not_found("There is nothing here"));
    }
    let start = (page - 1) * PAGE_SIZE;
    let results = db.iter().skip(start).take(PAGE_SIZE).cloned().collect();
    tracing::debug!(page, "serving character page");
    Ok(Json(Page {
        info: Info {
            count: db.len(),
            pages,
            next: (page < pages).then(|| page_link(page + 1)),
            prev: (page > 1).then(|| page_link(page - 1)),
        },
        results,
    }))
}

async fn get_character(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Character>, (StatusCode, Json<ErrorBody>)> {
    db.iter()
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Character not found"))
}
