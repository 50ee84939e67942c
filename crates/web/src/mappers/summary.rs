//! Basket, order summary, and order item summary mapping.
//!
//! The basket and order summary pages share one traversal: classify each
//! item by kind into per-kind row buckets, accumulate the running total and
//! the delivery booleans, and populate the delivery details table exactly
//! once. An unrecognized kind aborts the whole batch - partial view models
//! are never returned.

use serde::Serialize;

use company_orders_core::{
    Basket, DeliveryDetails, DeliveryTimescale, Item, Order, KIND_CERTIFICATE,
    KIND_CERTIFIED_COPY, KIND_MISSING_IMAGE_DELIVERY,
};

use super::confirmation::DocumentDetailsRow;
use super::factory::CertificateMapperFactory;
use super::filing_history::FilingHistoryDescriptions;
use super::formatting::{
    map_certificate_type, map_currency, map_date, map_delivery_method, map_filing_history_date,
    map_to_html,
};
use super::MapperError;
use crate::views::{ActionLink, Actions, SummaryListRow, TableCell};

/// Per-kind row buckets plus the accumulated basket facts.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemGroups {
    pub certificates: Vec<Vec<TableCell>>,
    pub certified_copies: Vec<Vec<TableCell>>,
    pub missing_image_deliveries: Vec<Vec<TableCell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_details_table: Option<Vec<SummaryListRow>>,
    /// Integer sum over the leading digits of each item's cost string.
    pub total_item_cost: i64,
    pub has_standard_delivery: bool,
    pub has_same_day_delivery: bool,
    pub has_deliverable_items: bool,
}

/// Basket page view model.
pub type BasketView = ItemGroups;

/// Order summary page view model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryView {
    pub order_reference: String,
    #[serde(flatten)]
    pub groups: ItemGroups,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,
    pub total_order_cost: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered_at: Option<String>,
}

/// Order item summary page view model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemSummaryView {
    pub item_id: String,
    pub company_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<String>,
    pub fee: String,
    pub table: Vec<SummaryListRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_details_table: Option<Vec<DocumentDetailsRow>>,
}

/// Map the basket page view model.
///
/// # Errors
///
/// `MapperError::UnknownItemType` when any item carries an unrecognized
/// kind.
pub fn map_basket(
    basket: &Basket,
    descriptions: &FilingHistoryDescriptions,
    dispatch_days: &str,
) -> Result<BasketView, MapperError> {
    group_items(
        &basket.items,
        basket.delivery_details.as_ref(),
        descriptions,
        dispatch_days,
    )
}

/// Map the order summary page view model.
///
/// # Errors
///
/// `MapperError::UnknownItemType` when any item carries an unrecognized
/// kind.
pub fn map_order_summary(
    order: &Order,
    descriptions: &FilingHistoryDescriptions,
    dispatch_days: &str,
) -> Result<OrderSummaryView, MapperError> {
    let groups = group_items(
        &order.items,
        order.delivery_details.as_ref(),
        descriptions,
        dispatch_days,
    )?;
    Ok(OrderSummaryView {
        order_reference: order.reference.clone(),
        groups,
        payment_reference: order.payment_reference.clone(),
        total_order_cost: map_currency(&order.total_order_cost),
        ordered_at: order.ordered_at.as_deref().map(map_date),
    })
}

/// Map a single ordered item for the order item summary page.
///
/// Certificates resolve their detail table through the summary mode of the
/// mapper factory; a combination without a mapper fails with
/// `MapperError::MapperNotFound`.
///
/// # Errors
///
/// `MapperError::MapperNotFound`, `MapperError::UnknownItemType`, or
/// `MapperError::MissingItemOptions`.
pub fn map_order_item_summary(
    item: &Item,
    factory: &CertificateMapperFactory,
    descriptions: &FilingHistoryDescriptions,
    dispatch_days: &str,
) -> Result<OrderItemSummaryView, MapperError> {
    let (delivery_method, table, document_details_table) = match item.kind.as_str() {
        KIND_CERTIFICATE => {
            let options = item
                .certificate_options()
                .ok_or(MapperError::MissingItemOptions)?;
            let mapper = factory.summary_mapper(options.company_type, options.company_status);
            (
                map_delivery_method(options.delivery_timescale, dispatch_days),
                mapper.map_certificate_details(item)?,
                None,
            )
        }
        KIND_CERTIFIED_COPY => {
            let options = item
                .certified_copy_options()
                .ok_or(MapperError::MissingItemOptions)?;
            let table = vec![
                SummaryListRow::detail_text("Company name", &item.company_name),
                SummaryListRow::detail_text("Company number", &item.company_number),
            ];
            let documents = options
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
            (
                map_delivery_method(options.delivery_timescale, dispatch_days),
                table,
                Some(documents),
            )
        }
        KIND_MISSING_IMAGE_DELIVERY => {
            let options = item
                .missing_image_delivery_options()
                .ok_or(MapperError::MissingItemOptions)?;
            let table = vec![
                SummaryListRow::detail_text("Company name", &item.company_name),
                SummaryListRow::detail_text("Company number", &item.company_number),
                SummaryListRow::detail_text(
                    "Date",
                    map_filing_history_date(&options.filing_history_date),
                ),
                SummaryListRow::detail_text("Type", &options.filing_history_type),
                SummaryListRow::detail_text(
                    "Description",
                    descriptions.resolve(
                        &options.filing_history_description,
                        options.filing_history_description_values.as_ref(),
                    ),
                ),
            ];
            (None, table, None)
        }
        kind => return Err(MapperError::UnknownItemType(kind.to_string())),
    };

    Ok(OrderItemSummaryView {
        item_id: item.id.clone(),
        company_number: item.company_number.clone(),
        delivery_method,
        fee: map_currency(&item.total_item_cost),
        table,
        document_details_table,
    })
}

fn group_items(
    items: &[Item],
    delivery_details: Option<&DeliveryDetails>,
    descriptions: &FilingHistoryDescriptions,
    dispatch_days: &str,
) -> Result<ItemGroups, MapperError> {
    let mut groups = ItemGroups::default();

    for item in items {
        match item.kind.as_str() {
            KIND_CERTIFICATE => {
                let timescale = item
                    .certificate_options()
                    .and_then(|options| options.delivery_timescale);
                groups.certificates.push(vec![
                    TableCell::text(
                        item.certificate_options()
                            .and_then(|options| {
                                map_certificate_type(Some(options.certificate_type.as_str()))
                            })
                            .unwrap_or_default(),
                    ),
                    TableCell::text(&item.company_number),
                    TableCell::text(
                        map_delivery_method(timescale, dispatch_days).unwrap_or_default(),
                    ),
                    TableCell::text(map_currency(&item.total_item_cost)),
                ]);
                note_deliverable(&mut groups, timescale, delivery_details);
            }
            KIND_CERTIFIED_COPY => {
                let timescale = item
                    .certified_copy_options()
                    .and_then(|options| options.delivery_timescale);
                if let Some(options) = item.certified_copy_options() {
                    for document in &options.filing_history_documents {
                        groups.certified_copies.push(vec![
                            TableCell::text(map_filing_history_date(
                                &document.filing_history_date,
                            )),
                            TableCell::text(&document.filing_history_type),
                            TableCell::text(descriptions.resolve(
                                &document.filing_history_description,
                                document.filing_history_description_values.as_ref(),
                            )),
                            TableCell::text(&item.company_number),
                            TableCell::text(map_currency(&document.filing_history_cost)),
                        ]);
                    }
                }
                note_deliverable(&mut groups, timescale, delivery_details);
            }
            KIND_MISSING_IMAGE_DELIVERY => {
                if let Some(options) = item.missing_image_delivery_options() {
                    groups.missing_image_deliveries.push(vec![
                        TableCell::text(map_filing_history_date(&options.filing_history_date)),
                        TableCell::text(&options.filing_history_type),
                        TableCell::text(descriptions.resolve(
                            &options.filing_history_description,
                            options.filing_history_description_values.as_ref(),
                        )),
                        TableCell::text(&item.company_number),
                        TableCell::text(map_currency(&item.total_item_cost)),
                    ]);
                }
            }
            kind => return Err(MapperError::UnknownItemType(kind.to_string())),
        }

        groups.total_item_cost += int_prefix(&item.total_item_cost);
    }

    Ok(groups)
}

/// Record a deliverable item: delivery booleans, and the delivery details
/// table on the first one only.
fn note_deliverable(
    groups: &mut ItemGroups,
    timescale: Option<DeliveryTimescale>,
    delivery_details: Option<&DeliveryDetails>,
) {
    let first_deliverable = !groups.has_deliverable_items;
    groups.has_deliverable_items = true;
    match timescale {
        Some(DeliveryTimescale::Standard) => groups.has_standard_delivery = true,
        Some(DeliveryTimescale::SameDay) => groups.has_same_day_delivery = true,
        _ => {}
    }
    if first_deliverable {
        groups.delivery_details_table = delivery_details.map(delivery_details_table);
    }
}

fn delivery_details_table(details: &DeliveryDetails) -> Vec<SummaryListRow> {
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

    vec![SummaryListRow::new(
        TableCell::text("Delivery address"),
        TableCell::html(map_to_html(lines)),
    )
    .with_actions(Actions {
        items: vec![ActionLink::new(
            "/delivery-details",
            "Change",
            Some("delivery address"),
        )],
    })]
}

/// Leading-integer parse of an opaque cost string.
///
/// Reproduces the upstream's integer summation: "15.50" contributes 15. A
/// string with no leading digits contributes 0.
fn int_prefix(value: &str) -> i64 {
    let trimmed = value.trim();
    let (sign, digits) = trimmed.strip_prefix('-').map_or_else(
        || (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        |rest| (-1, rest),
    );
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits
        .get(..end)
        .and_then(|prefix| prefix.parse::<i64>().ok())
        .map_or(0, |n| sign * n)
}
