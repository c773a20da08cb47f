use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::models::boarding::{Boarding, BoardingRow};
use crate::utils::errors::{storage_error, AppError};

/// Operaciones de persistencia de boardings
///
/// El almacenamiento es un mapa puro id -> registro: `save` sobrescribe si la
/// clave ya existe y no hay consultas por rango ni índices secundarios.
#[async_trait]
pub trait BoardingRepository: Send + Sync {
    /// Persistir (upsert) un boarding y devolver el registro guardado
    async fn save(&self, boarding: &Boarding) -> Result<Boarding, AppError>;

    /// Buscar un boarding por su id exacto
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Boarding>, AppError>;
}

pub struct PgBoardingRepository {
    pool: PgPool,
}

impl PgBoardingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardingRepository for PgBoardingRepository {
    async fn save(&self, boarding: &Boarding) -> Result<Boarding, AppError> {
        debug!("💾 Upsert boarding {}", boarding.id);

        let row = sqlx::query_as::<_, BoardingRow>(
            r#"
            INSERT INTO boardings (id, shipper, origin, destiny, mileage, category, weight, collection_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE
            SET shipper = EXCLUDED.shipper,
                origin = EXCLUDED.origin,
                destiny = EXCLUDED.destiny,
                mileage = EXCLUDED.mileage,
                category = EXCLUDED.category,
                weight = EXCLUDED.weight,
                collection_date = EXCLUDED.collection_date
            RETURNING id, shipper, origin, destiny, mileage, category, weight, collection_date
            "#
        )
        .bind(boarding.id)
        .bind(&boarding.shipper)
        .bind(&boarding.origin)
        .bind(&boarding.destiny)
        .bind(boarding.mileage)
        .bind(boarding.category.as_str())
        .bind(boarding.weight)
        .bind(boarding.collection_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("saving boarding", e))?;

        Boarding::try_from(row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Boarding>, AppError> {
        let row = sqlx::query_as::<_, BoardingRow>(
            r#"
            SELECT id, shipper, origin, destiny, mileage, category, weight, collection_date
            FROM boardings
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("finding boarding", e))?;

        row.map(Boarding::try_from).transpose()
    }
}
