use std::sync::Arc;

use crate::canvas::CanvasClient;
use crate::config::OutputSettings;
use crate::jex::JexClient;

#[derive(Clone)]
pub struct AppState {
    pub jex: Arc<dyn JexClient>,
    pub canvas: Arc<dyn CanvasClient>,
    pub output: Arc<OutputSettings>,
}
