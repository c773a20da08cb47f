//! Conexión a PostgreSQL
//!
//! Este módulo abre el pool una sola vez al arrancar y prepara la tabla
//! `boardings` si todavía no existe.

use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

const CREATE_BOARDINGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS boardings (
    id UUID PRIMARY KEY,
    shipper TEXT NOT NULL,
    origin TEXT NOT NULL,
    destiny TEXT NOT NULL,
    mileage BIGINT NOT NULL,
    category TEXT NOT NULL,
    weight BIGINT NOT NULL,
    collection_date TIMESTAMP NOT NULL
)
"#;

/// Conexión compartida a la base de datos
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear el pool de conexiones a partir de la configuración
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!("🔗 Conectando a PostgreSQL: {}", mask_database_url(&config.url));
        let pool = config.create_pool().await?;
        info!("✅ PostgreSQL conectado exitosamente");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_BOARDINGS_TABLE).execute(&self.pool).await?;
        info!("✅ Tabla boardings lista");
        Ok(())
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(at_pos) = url.rfind('@') else {
        return url.to_string();
    };
    let scheme_end = url.find("://").map(|pos| pos + 3).unwrap_or(0);
    if scheme_end > at_pos {
        return url.to_string();
    }
    format!("{}***:***@{}", &url[..scheme_end], &url[at_pos + 1..])
}
