use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use crate::models::boarding::Boarding;
use crate::utils::errors::AppError;
use crate::utils::validation::{
    validate_category, validate_datetime, validate_future, validate_not_blank, validate_positive,
};

// Request para registrar un embarque. Todos los campos son opcionales para
// poder reportar la ausencia como error de validación del campo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardingRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub shipper: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destiny: Option<String>,
    #[serde(default)]
    pub mileage: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub weight: Option<i64>,
    #[serde(default)]
    pub collection_date: Option<String>,
}

/// Registrar el resultado de un campo en el acumulador de errores
fn check<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    result: Result<T, ValidationError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.add(field, error);
            None
        }
    }
}

impl BoardingRequest {
    /// Validar todos los campos contra `now` y construir el Boarding
    ///
    /// Cada campo se valida de forma independiente y todas las violaciones se
    /// acumulan. Si no llega `id` se genera uno nuevo; uno recibido se respeta.
    pub fn validate_at(self, now: NaiveDateTime) -> Result<Boarding, AppError> {
        let mut errors = ValidationErrors::new();

        let shipper = check(
            &mut errors,
            "shipper",
            validate_not_blank(self.shipper, "Shipper is mandatory"),
        );
        let origin = check(
            &mut errors,
            "origin",
            validate_not_blank(self.origin, "Origin is mandatory"),
        );
        let destiny = check(
            &mut errors,
            "destiny",
            validate_not_blank(self.destiny, "Destiny is mandatory"),
        );
        let mileage = check(
            &mut errors,
            "mileage",
            validate_positive(self.mileage, "Mileage is mandatory", "Mileage must be positive"),
        );
        let category = check(
            &mut errors,
            "category",
            validate_category(self.category.as_deref()),
        );
        let weight = check(
            &mut errors,
            "weight",
            validate_positive(self.weight, "Weight is mandatory", "Weight must be positive"),
        );
        let collection_date = check(
            &mut errors,
            "collection_date",
            validate_datetime(self.collection_date.as_deref())
                .and_then(|date| validate_future(date, now)),
        );

        match (shipper, origin, destiny, mileage, category, weight, collection_date) {
            (
                Some(shipper),
                Some(origin),
                Some(destiny),
                Some(mileage),
                Some(category),
                Some(weight),
                Some(collection_date),
            ) if errors.errors().is_empty() => Ok(Boarding {
                id: self.id.unwrap_or_else(Uuid::new_v4),
                shipper,
                origin,
                destiny,
                mileage,
                category,
                weight,
                collection_date,
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::boarding::Category;
    use crate::utils::errors::field_messages;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 6, 1)
            .unwrap()
            .and_hms_micro_opt(12, 0, 0, 250)
            .unwrap()
    }

    fn valid_request() -> BoardingRequest {
        BoardingRequest {
            id: None,
            shipper: Some("Acme".to_string()),
            origin: Some("NYC".to_string()),
            destiny: Some("LA".to_string()),
            mileage: Some(2800),
            category: Some("STANDARD".to_string()),
            weight: Some(500),
            collection_date: Some("2099-01-01T00:00:00".to_string()),
        }
    }

    fn violations(request: BoardingRequest) -> std::collections::BTreeMap<String, String> {
        match request.validate_at(now()) {
            Err(AppError::Validation(errors)) => field_messages(&errors),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request_builds_boarding() {
        let boarding = valid_request().validate_at(now()).unwrap();
        assert!(!boarding.id.is_nil());
        assert_eq!(boarding.shipper, "Acme");
        assert_eq!(boarding.category, Category::Standard);
        assert_eq!(boarding.mileage, 2800);
        assert_eq!(boarding.weight, 500);
    }

    #[test]
    fn test_provided_id_is_kept() {
        let id = Uuid::new_v4();
        let request = BoardingRequest { id: Some(id), ..valid_request() };
        assert_eq!(request.validate_at(now()).unwrap().id, id);
    }

    #[test]
    fn test_each_invalid_field_is_reported_alone() {
        let cases: Vec<(&str, BoardingRequest)> = vec![
            ("shipper", BoardingRequest { shipper: Some("  ".into()), ..valid_request() }),
            ("origin", BoardingRequest { origin: None, ..valid_request() }),
            ("destiny", BoardingRequest { destiny: Some(String::new()), ..valid_request() }),
            ("mileage", BoardingRequest { mileage: Some(0), ..valid_request() }),
            ("category", BoardingRequest { category: Some("BULK".into()), ..valid_request() }),
            ("category", BoardingRequest { category: Some("standard".into()), ..valid_request() }),
            ("weight", BoardingRequest { weight: Some(-1), ..valid_request() }),
            (
                "collection_date",
                BoardingRequest { collection_date: Some("2000-01-01T00:00:00".into()), ..valid_request() },
            ),
        ];

        for (field, request) in cases {
            let messages = violations(request);
            assert_eq!(messages.len(), 1, "field {}: {:?}", field, messages);
            assert!(messages.contains_key(field), "field {}: {:?}", field, messages);
        }
    }

    #[test]
    fn test_all_violations_are_aggregated() {
        let messages = violations(BoardingRequest::default());
        assert_eq!(messages.len(), 7);
        assert_eq!(messages["shipper"], "Shipper is mandatory");
        assert_eq!(messages["origin"], "Origin is mandatory");
        assert_eq!(messages["destiny"], "Destiny is mandatory");
        assert_eq!(messages["mileage"], "Mileage is mandatory");
        assert_eq!(messages["category"], "Category is mandatory");
        assert_eq!(messages["weight"], "Weight is mandatory");
        assert_eq!(messages["collection_date"], "Collection date is mandatory");
    }

    #[test]
    fn test_non_positive_numbers_have_positive_message() {
        let messages = violations(BoardingRequest {
            mileage: Some(-10),
            weight: Some(0),
            ..valid_request()
        });
        assert_eq!(messages["mileage"], "Mileage must be positive");
        assert_eq!(messages["weight"], "Weight must be positive");
    }

    #[test]
    fn test_collection_date_boundary() {
        let at_now = now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
        let messages = violations(BoardingRequest {
            collection_date: Some(at_now),
            ..valid_request()
        });
        assert_eq!(messages["collection_date"], "Collection date must be a future timestamp");

        let later = (now() + Duration::microseconds(1))
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string();
        let boarding = BoardingRequest {
            collection_date: Some(later),
            ..valid_request()
        }
        .validate_at(now())
        .unwrap();
        assert_eq!(boarding.collection_date, now() + Duration::microseconds(1));
    }

    #[test]
    fn test_sub_microsecond_offset_is_not_future() {
        // now() termina en .000250; 500ns más tarde se almacena como el mismo instante
        let messages = violations(BoardingRequest {
            collection_date: Some("2030-06-01T12:00:00.0002505".into()),
            ..valid_request()
        });
        assert_eq!(messages["collection_date"], "Collection date must be a future timestamp");

        let boarding = BoardingRequest {
            collection_date: Some("2030-06-01T12:00:00.000251".into()),
            ..valid_request()
        }
        .validate_at(now())
        .unwrap();
        assert_eq!(boarding.collection_date, now() + Duration::microseconds(1));
    }

    #[test]
    fn test_malformed_collection_date() {
        let messages = violations(BoardingRequest {
            collection_date: Some("tomorrow".into()),
            ..valid_request()
        });
        assert_eq!(messages["collection_date"], "Collection date must be a valid timestamp");
    }
}
