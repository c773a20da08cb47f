//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación.
//! Los servicios encapsulan la validación y delegan la persistencia
//! en los repositorios.

pub mod boarding_service;

pub use boarding_service::*;
