//! Outbound geocoding client: parameter merging, URL construction, and the
//! Mapbox HTTP call.

use serde_json::Value;
use url::Url;

use super::types::GeocodeError;
use crate::config::Config;

const USER_AGENT: &str = concat!("geocode-relay/", env!("CARGO_PKG_VERSION"));

/// A forward-geocoding backend.
///
/// Implementations block until the upstream call completes; the server runs
/// them on tokio's blocking pool.
pub trait GeocodeProvider: Send + Sync {
    /// Search for `query`, forwarding the inbound query-string pairs.
    /// Returns the provider's JSON document untouched.
    fn search(&self, query: &str, params: &[(String, String)]) -> Result<Value, GeocodeError>;
}

/// Merge the credential with inbound pairs.
///
/// `access_token` goes first. Each inbound pair overwrites any earlier pair
/// with the same key, keeping that key's original position.
pub fn merge_params<I>(api_key: &str, inbound: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut params = vec![("access_token".to_string(), api_key.to_string())];
    for (key, value) in inbound {
        match params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => params.push((key, value)),
        }
    }
    params
}

/// `{api_base}/{query}.json?{params}` with the place name as one escaped path segment.
pub fn build_url(api_base: &str, query: &str, params: &[(String, String)]) -> Result<Url, GeocodeError> {
    let mut url = Url::parse(api_base)?;
    url.path_segments_mut()
        .map_err(|_| GeocodeError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .push(&format!("{}.json", query));
    url.query_pairs_mut().extend_pairs(params.iter());
    Ok(url)
}

// ─── Mapbox ──────────────────────────────────────────────────────

pub struct MapboxProvider {
    agent: ureq::Agent,
    api_key: String,
    api_base: String,
}

impl MapboxProvider {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();
        Self {
            agent,
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
        }
    }
}

impl GeocodeProvider for MapboxProvider {
    fn search(&self, query: &str, params: &[(String, String)]) -> Result<Value, GeocodeError> {
        let params = merge_params(&self.api_key, params.iter().cloned());
        let url = build_url(&self.api_base, query, &params)?;

        let response = self.agent.get(url.as_str()).call()?;

        response
            .into_json()
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))
    }
}
