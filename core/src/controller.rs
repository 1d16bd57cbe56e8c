//! Screen controllers for the character list and character detail screens.
//!
//! Both wrap a [`StateController`] and a shared [`CharacterRepository`].
//! Their state is readable by anyone and written only by their own `load`.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::repository::CharacterRepository;
use crate::state::{ScreenState, StateController};
use crate::types::Character;

/// State holder for the list screen. Loads once on construction.
#[derive(Debug)]
pub struct ListController {
    state: StateController<Vec<Character>>,
    repository: Arc<CharacterRepository>,
}

impl ListController {
    /// Create the controller and immediately start loading the list.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn new(repository: Arc<CharacterRepository>) -> Self {
        let controller = Self {
            state: StateController::new(),
            repository,
        };
        controller.load();
        controller
    }

    /// Reload the first page, capped at the repository's list limit.
    pub fn load(&self) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        self.state
            .launch(async move { repository.list_characters().await })
    }

    pub fn state(&self) -> ScreenState<Vec<Character>> {
        self.state.state()
    }

    pub fn characters(&self) -> Vec<Character> {
        self.state.state().data
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn subscribe(&self) -> watch::Receiver<ScreenState<Vec<Character>>> {
        self.state.subscribe()
    }

    pub async fn settled(&self) -> ScreenState<Vec<Character>> {
        self.state.settled().await
    }
}

/// State holder for the detail screen. Construction does not load anything;
/// the host calls [`load`](Self::load) whenever the selected id changes.
#[derive(Debug)]
pub struct DetailController {
    state: StateController<Option<Character>>,
    repository: Arc<CharacterRepository>,
}

impl DetailController {
    pub fn new(repository: Arc<CharacterRepository>) -> Self {
        Self {
            state: StateController::new(),
            repository,
        }
    }

    /// Fetch character `id` and publish it, or `None` if it is unavailable.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn load(&self, id: u32) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        self.state
            .launch(async move { repository.get_character(id).await })
    }

    pub fn state(&self) -> ScreenState<Option<Character>> {
        self.state.state()
    }

    pub fn character(&self) -> Option<Character> {
        self.state.state().data
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn subscribe(&self) -> watch::Receiver<ScreenState<Option<Character>>> {
        self.state.subscribe()
    }

    pub async fn settled(&self) -> ScreenState<Option<Character>> {
        self.state.settled().await
    }
}
