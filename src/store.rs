// In-memory game record store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single game entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: u64,
    pub title: String,
    pub platform: String,
    pub release_year: Option<i32>,
    pub image_url: Option<String>,
}

/// Fields accepted when creating a game.
///
/// `title` and `platform` are optional at the type level so that a missing
/// value is reported by [`GameStore::create`] as a validation error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    pub title: Option<String>,
    pub platform: Option<String>,
    pub release_year: Option<i32>,
    pub image_url: Option<String>,
}

/// Partial update for an existing game.
///
/// A field is applied only when it is present and truthy: `None`, an empty
/// string and a release year of `0` all mean "leave unchanged". There is no
/// way to clear a field back to empty through a patch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePatch {
    pub title: Option<String>,
    pub platform: Option<String>,
    pub release_year: Option<i32>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
    #[error("Game not found")]
    NotFound(u64),
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn non_zero(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v != 0)
}

/// Process-lifetime collection of games plus the id generator.
///
/// Ids start at 1 and are never reused, even after a delete. Records keep
/// their insertion order.
#[derive(Debug)]
pub struct GameStore {
    games: Vec<Game>,
    next_id: u64,
}

impl GameStore {
    pub fn new() -> Self {
        Self {
            games: Vec::new(),
            next_id: 1,
        }
    }

    pub fn create(&mut self, new: NewGame) -> Result<Game, StoreError> {
        let (title, platform) = match (non_empty(new.title), non_empty(new.platform)) {
            (Some(title), Some(platform)) => (title, platform),
            _ => {
                return Err(StoreError::Validation(
                    "Title and platform are required".to_string(),
                ))
            }
        };

        let game = Game {
            id: self.next_id,
            title,
            platform,
            release_year: non_zero(new.release_year),
            image_url: non_empty(new.image_url),
        };
        self.next_id += 1;
        self.games.push(game.clone());
        Ok(game)
    }

    pub fn list(&self) -> &[Game] {
        &self.games
    }

    pub fn get(&self, id: u64) -> Result<&Game, StoreError> {
        self.games
            .iter()
            .find(|g| g.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    pub fn update(&mut self, id: u64, patch: GamePatch) -> Result<&Game, StoreError> {
        let game = self
            .games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(title) = non_empty(patch.title) {
            game.title = title;
        }
        if let Some(platform) = non_empty(patch.platform) {
            game.platform = platform;
        }
        if let Some(year) = non_zero(patch.release_year) {
            game.release_year = Some(year);
        }
        if let Some(url) = non_empty(patch.image_url) {
            game.image_url = Some(url);
        }
        Ok(&*game)
    }

    pub fn delete(&mut self, id: u64) -> Result<Game, StoreError> {
        let index = self
            .games
            .iter()
            .position(|g| g.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.games.remove(index))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
