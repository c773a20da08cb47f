//! Repositorios de persistencia
//!
//! Contrato de almacenamiento de boardings y sus implementaciones
//! (PostgreSQL y memoria).

pub mod boarding_repository;
pub mod memory_repository;

pub use boarding_repository::{BoardingRepository, PgBoardingRepository};
pub use memory_repository::InMemoryBoardingRepository;
