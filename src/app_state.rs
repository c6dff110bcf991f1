use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use crate::{config::AppConfig, models::BusinessInsight};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// Insight de la sesión actual. Único valor mutable compartido: lo
    /// escribe el handler de la operación en curso y se descarta al
    /// empezar una consulta nueva.
    pub current_insight: Arc<Mutex<Option<BusinessInsight>>>,
    pub shutdown_sender: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl AppState {
    pub fn new(config: AppConfig, shutdown_tx: oneshot::Sender<()>) -> Self {
        Self {
            config,
            current_insight: Arc::new(Mutex::new(None)),
            shutdown_sender: Arc::new(Mutex::new(Some(shutdown_tx))),
        }
    }
}
