use crate::{
    config::ApiConfig,
    error::{ApiError, Result},
};
use models::{
    api::{
        players::{CreatedPlayerData, NewPlayer, PlayerData, PlayersData},
        ApiResponse,
    },
    data::players::{Player, PlayerId},
};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Thin wrapper over the four players endpoints.
///
/// Every call is a single request. There are no retries and no timeouts.
#[derive(Debug, Clone)]
pub struct PlayerApiClient {
    base_url: String,
    client: Client,
}

impl PlayerApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url())
    }

    fn players_url(&self) -> String {
        format!("{}/players", self.base_url)
    }

    fn player_url(&self, id: PlayerId) -> String {
        format!("{}/players/{}", self.base_url, id)
    }

    pub async fn fetch_all_players(&self) -> Result<Vec<Player>> {
        let url = self.players_url();
        let response = self.send(Method::GET, &url, None).await?;

        let data: PlayersData = required(&url, decode(&url, response).await?)?;

        Ok(data.players)
    }

    pub async fn fetch_single_player(&self, id: PlayerId) -> Result<Player> {
        let url = self.player_url(id);
        let response = self.send(Method::GET, &url, None).await?;

        let data: PlayerData = required(&url, decode(&url, response).await?)?;

        Ok(data.player)
    }

    pub async fn add_new_player(&self, new_player: &NewPlayer) -> Result<Player> {
        let url = self.players_url();
        let response = self.send(Method::POST, &url, Some(new_player)).await?;

        let data: CreatedPlayerData = required(&url, decode(&url, response).await?)?;

        Ok(data.player)
    }

    pub async fn remove_player(&self, id: PlayerId) -> Result<()> {
        let url = self.player_url(id);
        let response = self.send(Method::DELETE, &url, None).await?;

        decode::<serde_json::Value>(&url, response).await?;

        Ok(())
    }

    async fn send(&self, method: Method, url: &str, body: Option<&NewPlayer>) -> Result<Response> {
        debug!(%method, url, "players api request");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        request.send().await.map_err(|source| ApiError::Http {
            url: url.to_string(),
            source,
        })
    }
}

/// Reads the body as an envelope and unwraps it.
///
/// The API reports failures inside the envelope, often with a 4xx/5xx status,
/// so the body is parsed before the status is looked at.
async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<Option<T>> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| ApiError::ResponseBody {
            url: url.to_string(),
            source,
        })?;

    let envelope = match serde_json::from_str::<ApiResponse<T>>(&body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            return Err(ApiError::UnexpectedStatus {
                url: url.to_string(),
                status,
            })
        }
        Err(source) => {
            return Err(ApiError::Decode {
                url: url.to_string(),
                source,
            })
        }
    };

    let data = envelope
        .into_result()
        .map_err(|error| ApiError::Rejected {
            url: url.to_string(),
            error,
        })?;

    if !status.is_success() {
        return Err(ApiError::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }

    Ok(data)
}

fn required<T>(url: &str, data: Option<T>) -> Result<T> {
    data.ok_or_else(|| ApiError::MissingData {
        url: url.to_string(),
    })
}
