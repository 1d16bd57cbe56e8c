//! Client core for the Rick and Morty character API.
//!
//! # Overview
//! Three layers, leaf first:
//! - `CharacterApi` / `ApiClient` build requests, run them through a
//!   [`Transport`] and parse typed responses. Failures propagate.
//! - `CharacterRepository` is the error boundary: it logs failures and
//!   returns an empty list or `None` instead.
//! - `ListController` / `DetailController` own observable screen state
//!   (`data` + `loading`) and mutate it only through their `load`.
//!
//! # Design
//! - The request builder is stateless and I/O free; `Transport` is the one
//!   seam that touches the network, so tests can script responses and their
//!   completion order.
//! - Overlapping loads on one controller are sequenced; the newest result
//!   that resolves is the one that sticks.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod repository;
pub mod state;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use app::AppGraph;
pub use client::{ApiClient, CharacterApi};
pub use config::ClientConfig;
pub use controller::{DetailController, ListController};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use repository::{CharacterRepository, LIST_LIMIT};
pub use state::{ScreenState, StateController};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Character, CharacterPage, LifeStatus, PageInfo, Place};
