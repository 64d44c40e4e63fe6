use crate::models::game::Game;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameProperty {
    Favorite,
    Hidden,
    UserScore,
    CompletionStatus,
}

impl GameProperty {
    pub fn from_name(name: &str) -> Option<Self> {
        SYNCED_PROPERTIES
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.property)
    }

    pub fn synced(self) -> Option<&'static SyncedProperty> {
        SYNCED_PROPERTIES.iter().find(|p| p.property == self)
    }
}

/// Settings-side mirror of the selected game, bound to by theme elements.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameProperties {
    pub game_id: Option<Uuid>,
    pub favorite: bool,
    pub hidden: bool,
    pub user_score: Option<i32>,
    pub completion_status_id: Option<Uuid>,
}

/// One field kept in sync between [`Game`] and [`GameProperties`].
/// `load` and `apply` return whether the target changed.
pub struct SyncedProperty {
    pub property: GameProperty,
    pub name: &'static str,
    pub load: fn(&Game, &mut GameProperties) -> bool,
    pub apply: fn(&GameProperties, &mut Game) -> bool,
}

fn sync_field<T: PartialEq + Clone>(source: &T, target: &mut T) -> bool {
    if source == target {
        return false;
    }
    *target = source.clone();
    true
}

macro_rules! synced_properties {
    ($($property:ident ($name:literal) => $field:ident),* $(,)?) => {
        pub static SYNCED_PROPERTIES: &[SyncedProperty] = &[
            $(SyncedProperty {
                property: GameProperty::$property,
                name: $name,
                load: |game, props| sync_field(&game.$field, &mut props.$field),
                apply: |props, game| sync_field(&props.$field, &mut game.$field),
            },)*
        ];
    };
}

synced_properties! {
    Favorite("Favorite") => favorite,
    Hidden("Hidden") => hidden,
    UserScore("UserScore") => user_score,
    CompletionStatus("CompletionStatusId") => completion_status_id,
}

impl GameProperties {
    /// Mirrors every synced field of `game`. Returns the properties that changed.
    pub fn load_from(&mut self, game: &Game) -> Vec<GameProperty> {
        self.game_id = Some(game.id);
        SYNCED_PROPERTIES
            .iter()
            .filter_map(|p| (p.load)(game, self).then_some(p.property))
            .collect()
    }

    /// Writes one property to every game whose value differs.
    /// Returns the ids of the games that changed and need saving.
    pub fn apply_property(&self, property: GameProperty, games: &mut [Game]) -> Vec<Uuid> {
        let Some(synced) = property.synced() else {
            return Vec::new();
        };
        games
            .iter_mut()
            .filter_map(|game| (synced.apply)(self, game).then_some(game.id))
            .collect()
    }

    /// Refreshes from a database update, but only for the game currently mirrored.
    pub fn on_game_updated(&mut self, game: &Game) -> Vec<GameProperty> {
        if self.game_id != Some(game.id) {
            return Vec::new();
        }
        self.load_from(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_property_has_one_table_entry() {
        for property in [
            GameProperty::Favorite,
            GameProperty::Hidden,
            GameProperty::UserScore,
            GameProperty::CompletionStatus,
        ] {
            let count = SYNCED_PROPERTIES.iter().filter(|p| p.property == property).count();
            assert_eq!(count, 1, "{property}");
            let name = property.synced().unwrap().name;
            assert_eq!(GameProperty::from_name(name), Some(property));
        }
        assert_eq!(GameProperty::from_name("Name"), None);
    }

    #[test]
    fn test_load_reports_changed_properties() {
        let mut game = Game::new("Portal");
        game.favorite = true;
        game.user_score = Some(80);

        let mut props = GameProperties::default();
        let changed = props.load_from(&game);

        assert_eq!(changed, vec![GameProperty::Favorite, GameProperty::UserScore]);
        assert_eq!(props.game_id, Some(game.id));
        assert!(props.favorite);
        assert_eq!(props.user_score, Some(80));
        assert!(props.load_from(&game).is_empty());
    }

    #[test]
    fn test_apply_only_touches_differing_games() {
        let mut games = vec![Game::new("A"), Game::new("B")];
        games[1].hidden = true;

        let props = GameProperties {
            hidden: true,
            ..Default::default()
        };
        let changed = props.apply_property(GameProperty::Hidden, &mut games);

        assert_eq!(changed, vec![games[0].id]);
        assert!(games.iter().all(|g| g.hidden));
    }

    #[test]
    fn test_updates_for_other_games_are_ignored() {
        let selected = Game::new("Selected");
        let mut other = Game::new("Other");
        other.favorite = true;

        let mut props = GameProperties::default();
        props.load_from(&selected);

        assert!(props.on_game_updated(&other).is_empty());
        assert!(!props.favorite);

        let mut edited = selected.clone();
        edited.favorite = true;
        assert_eq!(props.on_game_updated(&edited), vec![GameProperty::Favorite]);
        assert!(props.favorite);
    }
}
