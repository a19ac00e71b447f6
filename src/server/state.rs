use crate::geocode::GeocodeProvider;

pub struct AppState {
    pub provider: Box<dyn GeocodeProvider>,
}
