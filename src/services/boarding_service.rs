//! Servicio de Boardings
//!
//! Orquesta la validación, la asignación de identificador y la delegación
//! al repositorio configurado.

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::dto::boarding_dto::BoardingRequest;
use crate::models::boarding::Boarding;
use crate::repositories::BoardingRepository;
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct BoardingService {
    repository: Arc<dyn BoardingRepository>,
}

impl BoardingService {
    pub fn new(repository: Arc<dyn BoardingRepository>) -> Self {
        Self { repository }
    }

    /// Validar y persistir un boarding usando la hora actual
    pub async fn save(&self, request: BoardingRequest) -> AppResult<Boarding> {
        self.save_at(request, Utc::now().naive_utc()).await
    }

    /// Validar contra `now` y persistir; nada se escribe si la validación falla
    pub async fn save_at(&self, request: BoardingRequest, now: NaiveDateTime) -> AppResult<Boarding> {
        debug!("saving {:?}", request);

        let boarding = request.validate_at(now)?;
        let saved = self.repository.save(&boarding).await?;

        info!("✅ Boarding {} guardado", saved.id);
        Ok(saved)
    }

    /// Buscar un boarding por id; el UUID nulo nunca llega al repositorio
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Boarding>> {
        debug!("finding by id: {}", id);

        if id.is_nil() {
            return Ok(None);
        }

        self.repository.find_by_id(id).await
    }
}
