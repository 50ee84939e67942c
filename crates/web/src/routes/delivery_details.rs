//! Delivery details form handlers.
//!
//! Presence checks only - full address validation is owned by the upstream
//! API, which rejects malformed delivery details on checkout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use company_orders_core::DeliveryDetails;

use crate::error::Result;
use crate::state::AppState;

/// Delivery details form template.
#[derive(Template, WebTemplate)]
#[template(path = "delivery_details.html")]
pub struct DeliveryDetailsTemplate {
    pub details: DeliveryDetails,
    pub errors: Vec<String>,
}

/// Delivery details form data.
#[derive(Debug, Deserialize)]
pub struct DeliveryDetailsForm {
    #[serde(default)]
    pub forename: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub address_line_1: String,
    #[serde(default)]
    pub address_line_2: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

impl DeliveryDetailsForm {
    fn missing_fields(&self) -> Vec<String> {
        [
            ("forename", &self.forename),
            ("surname", &self.surname),
            ("address_line_1", &self.address_line_1),
            ("locality", &self.locality),
            ("country", &self.country),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field.to_string())
        .collect()
    }

    fn into_delivery_details(self) -> DeliveryDetails {
        DeliveryDetails {
            forename: self.forename.trim().to_string(),
            surname: self.surname.trim().to_string(),
            address_line_1: self.address_line_1.trim().to_string(),
            address_line_2: optional(self.address_line_2),
            locality: self.locality.trim().to_string(),
            region: optional(self.region),
            postal_code: optional(self.postal_code),
            country: self.country.trim().to_string(),
            po_box: None,
        }
    }
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Display the delivery details form, prefilled from the basket when an
/// address is already on file.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<DeliveryDetailsTemplate> {
    let basket = state.api().get_basket().await?;
    Ok(DeliveryDetailsTemplate {
        details: basket.delivery_details.unwrap_or_default(),
        errors: Vec::new(),
    })
}

/// Save the delivery details and return to the basket.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<DeliveryDetailsForm>,
) -> Result<Response> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Ok(DeliveryDetailsTemplate {
            details: form.into_delivery_details(),
            errors: missing,
        }
        .into_response());
    }

    let details = form.into_delivery_details();
    state.api().add_delivery_details(&details).await?;
    Ok(Redirect::to("/basket").into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> DeliveryDetailsForm {
        DeliveryDetailsForm {
            forename: "Jane".to_string(),
            surname: "Smith".to_string(),
            address_line_1: "10 Main Street".to_string(),
            address_line_2: String::new(),
            locality: "Cardiff".to_string(),
            region: "  ".to_string(),
            postal_code: "CF14 3UZ".to_string(),
            country: "Wales".to_string(),
        }
    }

    #[test]
    fn test_missing_fields_names_required_fields_only() {
        let form = DeliveryDetailsForm {
            forename: String::new(),
            country: " ".to_string(),
            ..complete_form()
        };
        assert_eq!(form.missing_fields(), ["forename", "country"]);
    }

    #[test]
    fn test_into_delivery_details_blanks_become_none() {
        let details = complete_form().into_delivery_details();
        assert_eq!(details.address_line_2, None);
        assert_eq!(details.region, None);
        assert_eq!(details.postal_code.as_deref(), Some("CF14 3UZ"));
    }
}
