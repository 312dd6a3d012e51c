use models::data::teams::Team;

/// Element the app is mounted into.
pub const ROOT_ID: &str = "all-players-container";

pub const PLAYERS_CONTAINER_ID: &str = "players-container";
pub const PLAYER_DETAIL_CONTAINER_ID: &str = "player-detail-container";
pub const NEW_PLAYER_FORM_ID: &str = "new-player-form";
pub const TITLE_ID: &str = "title";
pub const NEW_PLAYER_BUTTON_ID: &str = "newPlayerBtn";

pub const ROSTER_TITLE: &str = "Puppy Roster";
pub const DETAIL_TITLE: &str = "Puppy Detail";
pub const NEW_PLAYER_TITLE: &str = "Add a new Player";

/// Teams offered by the creation form.
pub fn teams() -> Vec<Team> {
    vec![Team::new(375, "Ruff"), Team::new(376, "Fluff")]
}
