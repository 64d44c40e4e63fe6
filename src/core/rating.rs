use crate::config::PluginSettings;
use crate::models::game::Game;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

pub const MAX_STARS: usize = 5;
const POINTS_PER_STAR: i32 = 20;
pub const RATING_MENU_SECTION: &str = "Theme Extras | Ratings | Set User Rating";

#[derive(Serialize, Deserialize, Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RatingSource {
    User,
    Community,
    Critic,
}

impl RatingSource {
    pub fn score(self, game: &Game) -> Option<i32> {
        match self {
            RatingSource::User => game.user_score,
            RatingSource::Community => game.community_score,
            RatingSource::Critic => game.critic_score,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Half,
    Empty,
}

/// A 0..=100 score shown as five stars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarRating {
    pub score: Option<i32>,
    pub stars: [StarFill; MAX_STARS],
}

impl StarRating {
    pub fn from_score(score: Option<i32>) -> Self {
        let mut stars = [StarFill::Empty; MAX_STARS];
        if let Some(score) = score {
            let clamped = score.clamp(0, 100);
            let full = (clamped / POINTS_PER_STAR) as usize;
            for star in stars.iter_mut().take(full) {
                *star = StarFill::Full;
            }
            if full < MAX_STARS && clamped % POINTS_PER_STAR >= POINTS_PER_STAR / 2 {
                stars[full] = StarFill::Half;
            }
        }
        Self { score, stars }
    }

    pub fn for_game(source: RatingSource, game: &Game) -> Self {
        Self::from_score(source.score(game))
    }

    pub fn filled(&self) -> f32 {
        self.stars
            .iter()
            .map(|s| match s {
                StarFill::Full => 1.0,
                StarFill::Half => 0.5,
                StarFill::Empty => 0.0,
            })
            .sum()
    }
}

/// A "Set User Rating" game menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatingMenuItem {
    pub description: String,
    pub section: &'static str,
    pub user_score: i32,
}

impl RatingMenuItem {
    /// Sets the user score on each distinct game. Returns the ids that changed.
    pub fn apply(&self, games: &mut [Game]) -> Vec<Uuid> {
        let mut seen = HashSet::new();
        let mut changed = Vec::new();
        for game in games.iter_mut() {
            if !seen.insert(game.id) {
                continue;
            }
            if game.user_score != Some(self.user_score) {
                game.user_score = Some(self.user_score);
                changed.push(game.id);
            }
        }
        changed
    }
}

pub fn set_user_rating_menu(settings: &PluginSettings) -> Vec<RatingMenuItem> {
    if !settings.enable_game_menu_rating {
        return Vec::new();
    }

    (1..=MAX_STARS as i32)
        .map(|stars| RatingMenuItem {
            description: if stars == 1 {
                "1 Star".to_string()
            } else {
                format!("{stars} Stars")
            },
            section: RATING_MENU_SECTION,
            user_score: stars * POINTS_PER_STAR,
        })
        .collect()
}
