use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::SpotSource;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub spot_source: Arc<dyn SpotSource>,
}
