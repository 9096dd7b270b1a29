use super::{Candidate, LocationResolver, Place, candidates_from_places, normalize_query};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use std::time::Duration;

/// OpenStreetMap Nominatim search endpoint (or any server speaking its JSON format).
#[derive(Debug, Clone)]
pub struct NominatimResolver {
    client: Client,
    url: String,
}

impl NominatimResolver {
    pub fn new(url: &str, user_agent: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(
            &cfg.resolver_url,
            &cfg.user_agent,
            Duration::from_secs(cfg.resolver_timeout_secs),
        )
    }
}

impl LocationResolver for NominatimResolver {
    fn resolve(&self, query: &str, limit: usize) -> AppResult<Vec<Candidate>> {
        let q = normalize_query(query)?;
        let limit = limit.max(1).to_string();

        log::debug!("geocoding '{}' via {}", q, self.url);

        let resp = self
            .client
            .get(&self.url)
            .query(&[("format", "json"), ("q", q), ("limit", limit.as_str())])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Network(format!(
                "geocoder returned HTTP {} for '{}'",
                status, q
            )));
        }

        let places: Vec<Place> = resp.json()?;
        let candidates = candidates_from_places(places);

        if candidates.is_empty() {
            return Err(AppError::NotFound(q.to_string()));
        }

        Ok(candidates)
    }
}
