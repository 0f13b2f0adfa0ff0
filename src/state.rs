use std::sync::Arc;

use crate::config::Config;
use crate::pathways::Pathways;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pathways: Arc<Pathways>,
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<Pathways> {
    fn from_ref(state: &AppState) -> Self {
        state.pathways.clone()
    }
}
