//! Geocoding subsystem for geocode-relay.
//!
//! Provides the outbound Mapbox client and the feature enrichment pass
//! applied to every successful response.

pub mod enrich;
pub mod provider;
pub mod types;

pub use enrich::enrich_features;
pub use provider::{build_url, merge_params, GeocodeProvider, MapboxProvider};
pub use types::{Category, GeocodeError};
