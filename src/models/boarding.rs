//! Modelo de Boarding
//!
//! Este módulo contiene el struct Boarding, la categoría cerrada y la fila
//! que mapea exactamente a la tabla `boardings` con primary key 'id'.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Categoría del embarque - conjunto cerrado
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Standard,
    Express,
    Fragile,
    Refrigerated,
    Hazardous,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Standard,
        Category::Express,
        Category::Fragile,
        Category::Refrigerated,
        Category::Hazardous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Express => "EXPRESS",
            Category::Fragile => "FRAGILE",
            Category::Refrigerated => "REFRIGERATED",
            Category::Hazardous => "HAZARDOUS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error al interpretar una categoría desconocida
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Boarding principal - registro validado listo para persistir
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Boarding {
    pub id: Uuid,
    pub shipper: String,
    pub origin: String,
    pub destiny: String,
    pub mileage: i64,
    pub category: Category,
    pub weight: i64,
    pub collection_date: NaiveDateTime,
}

/// Fila de la tabla boardings tal como la devuelve PostgreSQL
#[derive(Debug, FromRow)]
pub struct BoardingRow {
    pub id: Uuid,
    pub shipper: String,
    pub origin: String,
    pub destiny: String,
    pub mileage: i64,
    pub category: String,
    pub weight: i64,
    pub collection_date: NaiveDateTime,
}

impl TryFrom<BoardingRow> for Boarding {
    type Error = AppError;

    fn try_from(row: BoardingRow) -> Result<Self, Self::Error> {
        let category = row.category.parse::<Category>().map_err(|e| {
            AppError::Storage(format!("Unknown category '{}' stored for boarding {}", e.0, row.id))
        })?;

        Ok(Self {
            id: row.id,
            shipper: row.shipper,
            origin: row.origin,
            destiny: row.destiny,
            mileage: row.mileage,
            category,
            weight: row.weight,
            collection_date: row.collection_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(category: &str) -> BoardingRow {
        BoardingRow {
            id: Uuid::new_v4(),
            shipper: "Acme".to_string(),
            origin: "NYC".to_string(),
            destiny: "LA".to_string(),
            mileage: 2800,
            category: category.to_string(),
            weight: 500,
            collection_date: NaiveDate::from_ymd_opt(2099, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_category_parse_requires_exact_name() {
        assert_eq!("FRAGILE".parse::<Category>().unwrap(), Category::Fragile);
        assert!("standard".parse::<Category>().is_err());
        assert!(" FRAGILE ".parse::<Category>().is_err());
        assert!("BULK".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_upper_case() {
        let json = serde_json::to_string(&Category::Refrigerated).unwrap();
        assert_eq!(json, "\"REFRIGERATED\"");
    }

    #[test]
    fn test_boarding_serializes_collection_date_without_offset() {
        let boarding = Boarding::try_from(row("STANDARD")).unwrap();
        let json = serde_json::to_value(&boarding).unwrap();
        assert_eq!(json["collection_date"], "2099-01-01T00:00:00");
        assert_eq!(json["category"], "STANDARD");
    }

    #[test]
    fn test_row_with_unknown_category_is_storage_error() {
        let err = Boarding::try_from(row("TELEPORT")).unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
