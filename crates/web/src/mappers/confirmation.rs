//! Item to confirmation-page mapping.
//!
//! `map_item` dispatches on item kind and assembles the full data bag for
//! the confirmation page. Every branch returns the same shape so the
//! template treats all kinds uniformly.
//!
//! The `id` attributes embedded in the HTML value fragments
//! (`id='companyNameValue'` and friends) are part of the rendered-page
//! contract; tests and front-end hooks select on them.

use serde::Serialize;

use company_orders_core::{
    DeliveryDetails, Item, CERTIFICATE_TYPE_INCORPORATION, KIND_CERTIFICATE, KIND_CERTIFIED_COPY,
    KIND_MISSING_IMAGE_DELIVERY,
};

use super::factory::CertificateMapperFactory;
use super::filing_history::FilingHistoryDescriptions;
use super::formatting::{
    escape_html, map_certificate_type, map_currency, map_delivery_method,
    map_filing_history_date, map_to_html,
};
use super::MapperError;
use crate::views::{SummaryListRow, TableCell};

/// Confirmation page data bag, one shape for every item kind.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationView {
    pub service_url: String,
    pub service_name: String,
    pub title_text: String,
    pub page_title: String,
    /// Pre-built HTML paragraphs describing what happens after the order.
    pub happens_next_html: String,
    pub fee: String,
    pub order_details_table: Vec<SummaryListRow>,
    /// Certified copies only: one row per filing history document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_details_table: Option<Vec<DocumentDetailsRow>>,
}

/// One resolved filing history document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetailsRow {
    pub date: String,
    #[serde(rename = "type")]
    pub document_type: String,
    pub description: String,
    pub cost: String,
}

/// Map one ordered item to its confirmation page data.
///
/// # Errors
///
/// `MapperError::UnknownItemType` for kinds this service does not sell, and
/// `MapperError::MissingItemOptions` when the item options do not match the
/// kind.
pub fn map_item(
    item: &Item,
    delivery_details: Option<&DeliveryDetails>,
    factory: &CertificateMapperFactory,
    descriptions: &FilingHistoryDescriptions,
    dispatch_days: &str,
) -> Result<ConfirmationView, MapperError> {
    match item.kind.as_str() {
        KIND_CERTIFICATE => map_certificate(item, delivery_details, factory, dispatch_days),
        KIND_CERTIFIED_COPY => {
            map_certified_copy(item, delivery_details, descriptions, dispatch_days)
        }
        KIND_MISSING_IMAGE_DELIVERY => map_missing_image_delivery(item, descriptions),
        kind => Err(MapperError::UnknownItemType(kind.to_string())),
    }
}

fn map_certificate(
    item: &Item,
    delivery_details: Option<&DeliveryDetails>,
    factory: &CertificateMapperFactory,
    dispatch_days: &str,
) -> Result<ConfirmationView, MapperError> {
    let options = item
        .certificate_options()
        .ok_or(MapperError::MissingItemOptions)?;

    let delivery_method =
        map_delivery_method(options.delivery_timescale, dispatch_days).unwrap_or_default();
    let email_copy = if options.include_email_copy == Some(true) {
        "Yes"
    } else {
        "No"
    };
    let address_html = delivery_address_html(delivery_details);

    let order_details_table = if options.certificate_type == CERTIFICATE_TYPE_INCORPORATION {
        // The full option layout comes from the mapper family; delivery
        // metadata rows are appended behind it.
        let mapper = factory.mapper(options.company_type, options.company_status);
        let mut rows = mapper.map_certificate_details(item)?;
        rows.push(SummaryListRow::detail_text("Delivery method", &delivery_method));
        rows.push(SummaryListRow::detail_text("Email copy required", email_copy));
        rows.push(SummaryListRow::detail_html("Delivery address", &address_html));
        rows
    } else {
        // Reduced certificate types get a fixed table; deliberately not
        // routed through the factory.
        vec![
            id_row(
                "Company name",
                "companyNameValue",
                &escape_html(&item.company_name),
            ),
            id_row("Company number", "companyNumberValue", &item.company_number),
            id_row(
                "Certificate type",
                "certificateTypeValue",
                &map_certificate_type(Some(options.certificate_type.as_str())).unwrap_or_default(),
            ),
            id_row("Delivery method", "deliveryMethodValue", &delivery_method),
            id_row("Email copy required", "emailCopyRequiredValue", email_copy),
            id_row("Delivery address", "deliveryAddressValue", &address_html),
        ]
    };

    let happens_next_html = if delivery_method == "Same Day" {
        "<p>Orders received before 11am will be dispatched the same working day. \
         Orders received after 11am will be dispatched the next working day.</p>"
            .to_string()
    } else {
        format!("<p>We aim to dispatch the certificate within {dispatch_days} working days.</p>")
    };

    Ok(ConfirmationView {
        service_url: format!("/company/{}/orderable/certificates", item.company_number),
        service_name: "Order a certificate".to_string(),
        title_text: "Certificate ordered".to_string(),
        page_title: "Certificate ordered confirmation".to_string(),
        happens_next_html,
        fee: map_currency(&item.total_item_cost),
        order_details_table,
        document_details_table: None,
    })
}

fn map_certified_copy(
    item: &Item,
    delivery_details: Option<&DeliveryDetails>,
    descriptions: &FilingHistoryDescriptions,
    dispatch_days: &str,
) -> Result<ConfirmationView, MapperError> {
    let options = item
        .certified_copy_options()
        .ok_or(MapperError::MissingItemOptions)?;

    let delivery_method =
        map_delivery_method(options.delivery_timescale, dispatch_days).unwrap_or_default();

    let order_details_table = vec![
        id_row(
            "Company name",
            "companyNameValue",
            &escape_html(&item.company_name),
        ),
        id_row("Company number", "companyNumberValue", &item.company_number),
        id_row("Delivery method", "deliveryMethodValue", &delivery_method),
        id_row(
            "Delivery address",
            "deliveryAddressValue",
            &delivery_address_html(delivery_details),
        ),
    ];

    let document_details_table = options
        .filing_history_documents
        .iter()
        .map(|document| DocumentDetailsRow {
            date: map_filing_history_date(&document.filing_history_date),
            document_type: document.filing_history_type.clone(),
            description: descriptions.resolve(
                &document.filing_history_description,
                document.filing_history_description_values.as_ref(),
            ),
            cost: map_currency(&document.filing_history_cost),
        })
        .collect();

    let happens_next_html = if delivery_method == "Same Day" {
        "<p>Orders received before 11am will be sent out the same working day. \
         Orders received after 11am will be sent out the next working day.</p>"
            .to_string()
    } else {
        format!(
            "<p>We aim to send out certified documents within {dispatch_days} working days.</p>"
        )
    };

    Ok(ConfirmationView {
        service_url: format!(
            "/company/{}/orderable/certified-copies",
            item.company_number
        ),
        service_name: "Order a certified document".to_string(),
        title_text: "Certified document order confirmed".to_string(),
        page_title: "Certified document order confirmation".to_string(),
        happens_next_html,
        fee: map_currency(&item.total_item_cost),
        order_details_table,
        document_details_table: Some(document_details_table),
    })
}

fn map_missing_image_delivery(
    item: &Item,
    descriptions: &FilingHistoryDescriptions,
) -> Result<ConfirmationView, MapperError> {
    let options = item
        .missing_image_delivery_options()
        .ok_or(MapperError::MissingItemOptions)?;

    let description = descriptions.resolve(
        &options.filing_history_description,
        options.filing_history_description_values.as_ref(),
    );

    let order_details_table = vec![
        id_row(
            "Company name",
            "companyNameValue",
            &escape_html(&item.company_name),
        ),
        id_row("Company number", "companyNumberValue", &item.company_number),
        id_row(
            "Date",
            "filingHistoryDateValue",
            &map_filing_history_date(&options.filing_history_date),
        ),
        id_row("Type", "filingHistoryTypeValue", &options.filing_history_type),
        id_row(
            "Description",
            "filingHistoryDescriptionValue",
            &escape_html(&description),
        ),
    ];

    // Document retrieval is a manual back-office process with its own SLAs.
    let happens_next_html = "<p>It can take us several hours to check the availability of a \
         document. We will aim to add it to the company's filing history the same working day \
         if the request is received between 9am and 3pm, Monday to Friday (excluding bank \
         holidays).</p>\
         <p>Requests received after 3pm will be processed the next working day.</p>\
         <p>We will send you an email to let you know whether the document can be added to \
         the filing history.</p>"
        .to_string();

    Ok(ConfirmationView {
        service_url: format!("/company/{}/filing-history", item.company_number),
        service_name: "Request a document".to_string(),
        title_text: "Document Requested".to_string(),
        page_title: "Document Requested".to_string(),
        happens_next_html,
        fee: map_currency(&item.total_item_cost),
        order_details_table,
        document_details_table: None,
    })
}

/// Confirmation table row whose value carries an identified HTML fragment.
fn id_row(key: &str, id: &str, value_html: &str) -> SummaryListRow {
    SummaryListRow::new(
        TableCell::text(key),
        TableCell::html(format!("<p id='{id}'>{value_html}</p>")),
    )
}

fn delivery_address_html(delivery_details: Option<&DeliveryDetails>) -> String {
    delivery_details.map_or_else(String::new, |details| {
        let mut lines = vec![
            format!("{} {}", details.forename, details.surname),
            details.address_line_1.clone(),
        ];
        if let Some(line_2) = &details.address_line_2 {
            lines.push(line_2.clone());
        }
        lines.push(details.locality.clone());
        if let Some(region) = &details.region {
            lines.push(region.clone());
        }
        if let Some(postal_code) = &details.postal_code {
            lines.push(postal_code.clone());
        }
        lines.push(details.country.clone());
        map_to_html(lines)
    })
}
