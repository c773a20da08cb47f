//! DTOs de la API
//!
//! Payloads de entrada tal como llegan por HTTP, antes de validar.

pub mod boarding_dto;
