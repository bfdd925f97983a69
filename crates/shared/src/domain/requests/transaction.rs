use crate::{domain::requests::YearMonth, errors::ServiceError};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// Query string accepted by the transaction listing.
///
/// Both filters are optional and kept as raw text here. The handler resolves
/// them through [`FindTransactions::parsed_customer_id`] and
/// [`FindTransactions::parsed_month`], so a malformed value surfaces as a
/// validation error instead of a generic query rejection.
#[derive(Debug, Default, Clone, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FindTransactions {
    /// Restrict the listing to a single customer.
    #[param(value_type = Option<i64>, example = 103)]
    pub customer_id: Option<String>,

    /// Calendar month in `YYYY-MM` form.
    #[param(example = "2025-07")]
    pub month: Option<String>,
}

impl FindTransactions {
    pub fn parsed_customer_id(&self) -> Result<Option<i64>, ServiceError> {
        self.customer_id
            .as_deref()
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|_| {
                    ServiceError::Validation(vec![format!(
                        "customerId: '{raw}' is not a valid customer id"
                    )])
                })
            })
            .transpose()
    }

    pub fn parsed_month(&self) -> Result<Option<YearMonth>, ServiceError> {
        self.month
            .as_deref()
            .map(str::parse::<YearMonth>)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(customer_id: Option<&str>, month: Option<&str>) -> FindTransactions {
        FindTransactions {
            customer_id: customer_id.map(String::from),
            month: month.map(String::from),
        }
    }

    #[test]
    fn absent_filters_resolve_to_none() {
        let find = params(None, None);

        assert_eq!(find.parsed_customer_id().unwrap(), None);
        assert_eq!(find.parsed_month().unwrap(), None);
    }

    #[test]
    fn numeric_customer_id_is_parsed() {
        assert_eq!(params(Some("103"), None).parsed_customer_id().unwrap(), Some(103));
    }

    #[test]
    fn non_numeric_customer_id_is_a_validation_error() {
        for raw in ["abc", "12x", "", "1.5"] {
            match params(Some(raw), None).parsed_customer_id() {
                Err(ServiceError::Validation(errors)) => {
                    assert_eq!(errors.len(), 1);
                    assert!(errors[0].contains("customerId"));
                }
                other => panic!("expected Validation for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn month_is_parsed_into_year_month() {
        let month = params(None, Some("2025-07")).parsed_month().unwrap().unwrap();

        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 7);
    }

    #[test]
    fn malformed_month_is_a_validation_error() {
        assert!(matches!(
            params(None, Some("July")).parsed_month(),
            Err(ServiceError::Validation(_))
        ));
    }
}
