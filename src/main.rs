use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use boarding_api::config::{DatabaseConfig, EnvironmentConfig, StorageBackend};
use boarding_api::database::DatabaseConnection;
use boarding_api::repositories::{BoardingRepository, InMemoryBoardingRepository, PgBoardingRepository};
use boarding_api::routes::create_app;
use boarding_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,boarding_api=debug")),
        )
        .init();

    info!("🚚 Boarding API");
    info!("================================================");

    let config = EnvironmentConfig::from_env().context("Error cargando la configuración")?;
    info!("⚙️ Entorno: {} | almacenamiento: {:?}", config.environment, config.storage_backend);

    // El backend de almacenamiento se construye una sola vez
    let repository = build_repository(config.storage_backend).await?;
    let app = create_app(AppState::new(repository), &config.cors_origins);

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("   POST /boardings - Registrar boarding");
    info!("   GET  /boardings/:id - Obtener boarding");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

async fn build_repository(backend: StorageBackend) -> Result<Arc<dyn BoardingRepository>> {
    match backend {
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let connection = DatabaseConnection::new(&db_config).await.map_err(|e| {
                error!("❌ Error conectando a la base de datos: {}", e);
                anyhow::anyhow!("Error de base de datos: {}", e)
            })?;
            connection.run_migrations().await?;
            Ok(Arc::new(PgBoardingRepository::new(connection.pool().clone())))
        }
        StorageBackend::Memory => {
            info!("🧠 Usando almacenamiento en memoria (los datos no persisten)");
            Ok(Arc::new(InMemoryBoardingRepository::new()))
        }
    }
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
