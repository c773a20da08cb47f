//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de campos
//! y conversión de tipos. Cada función devuelve un `ValidationError`
//! con su mensaje listo para el cliente.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::ValidationError;

use crate::models::boarding::Category;

/// Formatos aceptados para fechas locales (sin zona horaria)
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

fn error_with_message(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value.trim()).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar que un campo de texto esté presente y no esté en blanco
pub fn validate_not_blank(
    value: Option<String>,
    message: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(error_with_message("not_blank", message)),
    }
}

/// Validar que un valor numérico esté presente y sea estrictamente positivo
pub fn validate_positive<T>(
    value: Option<T>,
    missing: &'static str,
    not_positive: &'static str,
) -> Result<T, ValidationError>
where
    T: PartialOrd + num_traits::Zero + Serialize,
{
    let value = value.ok_or_else(|| error_with_message("required", missing))?;
    if value <= T::zero() {
        let mut error = error_with_message("positive", not_positive);
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(value)
}

/// Validar que la categoría esté presente y pertenezca al conjunto cerrado
pub fn validate_category(value: Option<&str>) -> Result<Category, ValidationError> {
    let raw = value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| error_with_message("required", "Category is mandatory"))?;

    raw.parse::<Category>().map_err(|_| {
        let allowed = Category::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let mut error = error_with_message("enum", format!("Category must be one of {}", allowed));
        error.add_param("value".into(), &raw.to_string());
        error
    })
}

/// Validar y convertir string a datetime
///
/// Acepta fechas locales ISO-8601 (`2099-01-01T00:00:00`) y RFC3339 con
/// offset, que se normalizan a UTC. El resultado se trunca a microsegundos,
/// la precisión de la columna `TIMESTAMP`.
pub fn validate_datetime(value: Option<&str>) -> Result<NaiveDateTime, ValidationError> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| error_with_message("required", "Collection date is mandatory"))?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc).naive_utc().trunc_subsecs(6));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.trunc_subsecs(6))
        .ok_or_else(|| {
            let mut error = error_with_message("datetime", "Collection date must be a valid timestamp");
            error.add_param("value".into(), &raw.to_string());
            error.add_param("format".into(), &"YYYY-MM-DDTHH:MM:SS".to_string());
            error
        })
}

/// Validar que un instante sea estrictamente posterior a `now`
pub fn validate_future(value: NaiveDateTime, now: NaiveDateTime) -> Result<NaiveDateTime, ValidationError> {
    if value <= now {
        let mut error = error_with_message("future", "Collection date must be a future timestamp");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(value)
}
