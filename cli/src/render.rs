//! Plain-text views of the two screens, and the loop that redraws them.

use std::fmt::Write as _;
use std::io;

use rickmorty_core::{Character, LifeStatus, ScreenState};
use tokio::sync::watch;

pub const LOADING: &str = "Loading...";

fn status_marker(character: &Character) -> &'static str {
    match character.life_status() {
        LifeStatus::Alive => "+",
        LifeStatus::Dead => "x",
        LifeStatus::Unknown => "?",
    }
}

pub fn list(state: &ScreenState<Vec<Character>>) -> String {
    if state.loading && state.data.is_empty() {
        return LOADING.to_string();
    }
    if state.data.is_empty() {
        return "No characters found.".to_string();
    }

    let mut out = String::new();
    for character in &state.data {
        let _ = writeln!(
            out,
            "[{}] #{:<4} {} — {} - {} @ {}",
            status_marker(character),
            character.id,
            character.name,
            character.status,
            character.species,
            character.location.name,
        );
    }
    out
}

pub fn detail(state: &ScreenState<Option<Character>>) -> String {
    let Some(character) = &state.data else {
        return if state.loading {
            LOADING.to_string()
        } else {
            "Character not found.".to_string()
        };
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", character.name, character.id);
    let _ = writeln!(out, "  Status:     [{}] {}", status_marker(character), character.status);
    let _ = writeln!(out, "  Species:    {}", character.species);
    if !character.kind.is_empty() {
        let _ = writeln!(out, "  Type:       {}", character.kind);
    }
    let _ = writeln!(out, "  Gender:     {}", character.gender);
    let _ = writeln!(out, "  Origin:     {}", character.origin.name);
    let _ = writeln!(out, "  Location:   {}", character.location.name);
    let _ = writeln!(out, "  Episodes:   {} appearances", character.appearances());
    let _ = writeln!(out, "  Image:      {}", character.image);
    out
}

/// Write a frame on every state transition until the screen stops loading.
/// Transitions that render to the same text are not written again.
pub async fn present<T, F, W>(
    mut updates: watch::Receiver<ScreenState<T>>,
    view: F,
    out: &mut W,
) -> io::Result<()>
where
    F: Fn(&ScreenState<T>) -> String,
    W: io::Write,
{
    let mut last = String::new();
    loop {
        let (frame, loading) = {
            let state = updates.borrow_and_update();
            (view(&*state), state.loading)
        };
        if frame != last {
            writeln!(out, "{}", frame.trim_end())?;
            last = frame;
        }
        if !loading || updates.changed().await.is_err() {
            return Ok(());
        }
    }
}
