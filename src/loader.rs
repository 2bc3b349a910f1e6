//! Fetches the constellation catalogue and the member roster.
//!
//! The two loads are independent and may finish in any order. Callers fall
//! back to an empty catalogue or roster on error; see `components::app`.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::error::{Result, StarMapError};
use crate::model::{Constellations, RosterMember};

async fn fetch_text(url: &str) -> Result<String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|source| StarMapError::Fetch {
            url: url.to_string(),
            source,
        })?;
    if !response.ok() {
        return Err(StarMapError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    response.text().await.map_err(|source| StarMapError::Fetch {
        url: url.to_string(),
        source,
    })
}

fn parse<T: DeserializeOwned>(raw: &str, what: &'static str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| StarMapError::Decode { what, source })
}

pub fn parse_catalogue(raw: &str) -> Result<Constellations> {
    parse(raw, "catalogue")
}

pub fn parse_roster(raw: &str) -> Result<Vec<RosterMember>> {
    parse(raw, "roster")
}

pub async fn load_catalogue(url: &str) -> Result<Constellations> {
    let catalogue = parse_catalogue(&fetch_text(url).await?)?;
    log::info!(
        "loaded {} constellations ({} stars) from {url}",
        catalogue.len(),
        catalogue.values().map(|c| c.stars.len()).sum::<usize>()
    );
    Ok(catalogue)
}

pub async fn load_roster(url: &str) -> Result<Vec<RosterMember>> {
    let roster = parse_roster(&fetch_text(url).await?)?;
    log::info!("loaded {} roster members from {url}", roster.len());
    Ok(roster)
}
