//! Test doubles shared by the unit tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

pub fn character_json(id: u32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": format!("Character {id}"),
        "status": if id % 2 == 0 { "Dead" } else { "Alive" },
        "species": "Human",
        "type": "",
        "gender": "Female",
        "origin": {"name": "Earth", "url": "https://rickandmortyapi.com/api/location/1"},
        "location": {"name": "Citadel", "url": "https://rickandmortyapi.com/api/location/3"},
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": ["https://rickandmortyapi.com/api/episode/1"],
        "url": format!("https://rickandmortyapi.com/api/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z",
    })
}

/// A page envelope reporting `count` characters in total and carrying
/// `results` of them (ids `1..=results`).
pub fn page_json(count: u32, results: u32) -> String {
    let characters: Vec<_> = (1..=results).map(character_json).collect();
    serde_json::json!({
        "info": {"count": count, "pages": count.div_ceil(20).max(1), "next": null, "prev": null},
        "results": characters,
    })
    .to_string()
}

/// Replays queued results in order and records every requested path.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    paths: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, result: Result<HttpResponse, ApiError>) {
        self.script.lock().push_back(result);
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.paths.lock().push(request.path);
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("script exhausted".to_string())))
    }
}

/// Holds every request open until the test releases it, so tests decide
/// the order in which overlapping calls complete.
#[derive(Default)]
pub struct GatedTransport {
    gates: Mutex<Vec<Option<oneshot::Sender<Result<HttpResponse, ApiError>>>>>,
}

impl GatedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.gates.lock().len()
    }

    /// Yield to the runtime until at least `n` requests are parked.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }

    /// Complete the `index`-th request (in arrival order).
    pub fn release(&self, index: usize, result: Result<HttpResponse, ApiError>) {
        let sender = self.gates.lock()[index].take().expect("request already released");
        let _ = sender.send(result);
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().push(Some(tx));
        rx.await
            .unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".to_string())))
    }
}
