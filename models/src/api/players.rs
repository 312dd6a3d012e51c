use crate::data::{
    players::{Player, PlayerStatus},
    teams::TeamId,
};
use serde::{Deserialize, Serialize};

/// `data` of `GET /players`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayersData {
    pub players: Vec<Player>,
}

/// `data` of `GET /players/:id`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerData {
    pub player: Player,
}

/// `data` of `POST /players`. The API names the record `newPlayer`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreatedPlayerData {
    #[serde(rename = "newPlayer", alias = "player")]
    pub player: Player,
}

/// Body of `POST /players`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewPlayer {
    pub name: String,
    pub breed: String,
    pub status: PlayerStatus,
    pub url: String,
    pub team: TeamId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiResponse;
    use serde_json::json;

    #[test]
    fn list_response() {
        let response: ApiResponse<PlayersData> = serde_json::from_value(json!({
            "success": true,
            "error": null,
            "data": {
                "players": [
                    {
                        "id": 4821,
                        "name": "Crumpet",
                        "breed": "American Staffordshire Terrier",
                        "status": "bench",
                        "imageUrl": "http://r.ddmcdn.com/s_f/o_1/cx_0/cy_0/cw_300/ch_300/w_300/APL/uploads/2019/12/Crumpet-PuppyBowlXIV.jpg",
                        "createdAt": "2023-03-08T21:14:42.513Z",
                        "updatedAt": "2023-03-08T21:14:42.513Z",
                        "teamId": 375,
                        "cohortId": 214
                    },
                    {
                        "id": 4822,
                        "name": "Pumpkin",
                        "breed": "Beagle",
                        "status": "field",
                        "imageUrl": "http://example.com/pumpkin.png",
                        "teamId": null
                    }
                ]
            }
        }))
        .unwrap();

        let players = response.into_result().unwrap().unwrap().players;
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].name, "Crumpet");
        assert_eq!(players[0].status, PlayerStatus::Bench);
        assert_eq!(players[0].team_id, Some(375));
        assert!(players[0].created_at.is_some());
        assert_eq!(players[1].team_id, None);
        assert_eq!(players[1].created_at, None);
    }

    #[test]
    fn created_player_accepts_both_keys() {
        let player = json!({
            "id": 1,
            "name": "Rufus",
            "breed": "Pug",
            "status": "field",
            "imageUrl": "https://example.com/rufus.jpg"
        });

        let created: CreatedPlayerData =
            serde_json::from_value(json!({ "newPlayer": player.clone() })).unwrap();
        assert_eq!(created.player.name, "Rufus");

        let created: CreatedPlayerData =
            serde_json::from_value(json!({ "player": player })).unwrap();
        assert_eq!(created.player.id, 1);
    }

    #[test]
    fn new_player_body() {
        let body = NewPlayer {
            name: String::from("Rufus"),
            breed: String::from("Pug"),
            status: PlayerStatus::Field,
            url: String::from("https://example.com/rufus.jpg"),
            team: 376,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "name": "Rufus",
                "breed": "Pug",
                "status": "field",
                "url": "https://example.com/rufus.jpg",
                "team": 376
            })
        );
    }
}
