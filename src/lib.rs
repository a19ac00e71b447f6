//! geocode-relay — forwards place searches to the Mapbox geocoding API and
//! annotates each returned feature with `city` / `state`.

pub mod config;
pub mod geocode;
pub mod server;
