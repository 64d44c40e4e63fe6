use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The subset of a launcher game record the plugin reads and writes.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    pub id: Uuid,
    pub name: String,
    pub favorite: bool,
    pub hidden: bool,
    pub user_score: Option<i32>,
    pub community_score: Option<i32>,
    pub critic_score: Option<i32>,
    pub completion_status_id: Option<Uuid>,
}

impl Game {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplicationMode {
    Desktop,
    Fullscreen,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DesktopView {
    Details,
    Grid,
    List,
}
