//! Boarding API
//!
//! API HTTP para registrar embarques (boardings), validarlos, asignarles
//! identificador y consultarlos por id.

pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
