//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Se construye una sola vez en `main`.

use std::sync::Arc;

use crate::repositories::BoardingRepository;
use crate::services::BoardingService;

#[derive(Clone)]
pub struct AppState {
    pub boardings: BoardingService,
}

impl AppState {
    pub fn new(repository: Arc<dyn BoardingRepository>) -> Self {
        Self {
            boardings: BoardingService::new(repository),
        }
    }
}
