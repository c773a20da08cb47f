//! Repositorio en memoria
//!
//! Implementación de `BoardingRepository` sobre un HashMap protegido por
//! un RwLock. Pensado para desarrollo local (`STORAGE_BACKEND=memory`) y tests;
//! los datos se pierden al reiniciar el proceso.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::boarding_repository::BoardingRepository;
use crate::models::boarding::Boarding;
use crate::utils::errors::AppError;

#[derive(Clone, Default)]
pub struct InMemoryBoardingRepository {
    boardings: Arc<RwLock<HashMap<Uuid, Boarding>>>,
}

impl InMemoryBoardingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de registros almacenados
    pub async fn len(&self) -> usize {
        self.boardings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.boardings.read().await.is_empty()
    }
}

#[async_trait]
impl BoardingRepository for InMemoryBoardingRepository {
    async fn save(&self, boarding: &Boarding) -> Result<Boarding, AppError> {
        let mut boardings = self.boardings.write().await;
        let previous = boardings.insert(boarding.id, boarding.clone());
        debug!(
            "💾 Boarding {} almacenado en memoria (sobrescrito: {}). Total: {}",
            boarding.id,
            previous.is_some(),
            boardings.len()
        );
        Ok(boarding.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Boarding>, AppError> {
        Ok(self.boardings.read().await.get(&id).cloned())
    }
}
