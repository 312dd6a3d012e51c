//! Validation of the "new player" form before anything is sent to the API.

use crate::{
    api::players::NewPlayer,
    data::{players::PlayerStatus, teams::TeamId},
};
use once_cell::sync::Lazy;
use regex::bytes::{Regex, RegexBuilder};

/// Only absolute http(s) links to a JPEG or PNG file are accepted.
///
/// Matching is done on bytes with Unicode off, so case folding stays ASCII
/// and `[^/]` still accepts non-ASCII path segments.
static IMAGE_URL: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r"^https?://(?:[a-z]+\.)?[a-z0-9-]+\.[a-z]{2,}(?:/[^/]+)*/[^/]+\.(?:jpe?g|png)$",
    )
    .case_insensitive(true)
    .unicode(false)
    .build()
    .expect("image url pattern is valid")
});

/// Raw values as read from the form inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerForm {
    pub name: String,
    pub breed: String,
    pub status: String,
    pub url: String,
    pub team: String,
}

/// The `Display` text is what the user is shown in an alert.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill all information.")]
    MissingFields,

    #[error("Please enter a valid URL. Only JPEG and PNG files are accepted.")]
    InvalidImageUrl,

    #[error("Unknown status \"{0}\".")]
    UnknownStatus(String),

    #[error("Unknown team \"{0}\".")]
    UnknownTeam(String),
}

impl PlayerForm {
    pub fn validate(&self) -> Result<NewPlayer, FormError> {
        let fields = [&self.name, &self.breed, &self.status, &self.url, &self.team];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(FormError::MissingFields);
        }

        if !is_valid_image_url(&self.url) {
            return Err(FormError::InvalidImageUrl);
        }

        let status: PlayerStatus = self
            .status
            .parse()
            .map_err(|_| FormError::UnknownStatus(self.status.clone()))?;

        let team: TeamId = self
            .team
            .parse()
            .map_err(|_| FormError::UnknownTeam(self.team.clone()))?;

        Ok(NewPlayer {
            name: self.name.clone(),
            breed: self.breed.clone(),
            status,
            url: self.url.clone(),
            team,
        })
    }
}

pub fn is_valid_image_url(url: &str) -> bool {
    IMAGE_URL.is_match(url.as_bytes())
}
