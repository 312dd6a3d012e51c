use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use time::OffsetDateTime;

pub type PlayerId = i64;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    pub status: PlayerStatus,
    pub image_url: String,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub cohort_id: Option<i64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Field,
    Bench,
}

impl PlayerStatus {
    pub const ALL: [PlayerStatus; 2] = [PlayerStatus::Field, PlayerStatus::Bench];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Field => "field",
            PlayerStatus::Bench => "bench",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayerStatus::Field => "Field",
            PlayerStatus::Bench => "Bench",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for PlayerStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "field" => Ok(PlayerStatus::Field),
            "bench" => Ok(PlayerStatus::Bench),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_wire_values_only() {
        assert_eq!("field".parse(), Ok(PlayerStatus::Field));
        assert_eq!("bench".parse(), Ok(PlayerStatus::Bench));
        assert!("Bench".parse::<PlayerStatus>().is_err());
        assert!("".parse::<PlayerStatus>().is_err());
    }

    #[test]
    fn created_at_is_rfc3339() {
        let player: Player = serde_json::from_str(
            r#"{"id":7,"name":"Biscuit","breed":"Corgi","status":"field",
                "imageUrl":"https://example.com/biscuit.png",
                "createdAt":"2023-03-08T21:14:42.513Z"}"#,
        )
        .unwrap();

        let created_at = player.created_at.unwrap();
        assert_eq!(created_at.date().to_string(), "2023-03-08");
    }
}
