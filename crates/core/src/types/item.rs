//! Items and item options.
//!
//! An item is a single purchasable line in a basket or order. The `kind`
//! field stays a plain string: unknown kinds must survive deserialization so
//! the mapping layer can report them in its error message rather than the
//! wire layer rejecting the whole resource.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::company::{
    AddressDetails, BasicInformationDetails, CompanyStatus, CompanyType, DeliveryTimescale,
    DirectorOrSecretaryDetails, MemberDetails,
};

/// Item kind for certificates.
pub const KIND_CERTIFICATE: &str = "certificate";
/// Item kind for certified copies of filing history documents.
pub const KIND_CERTIFIED_COPY: &str = "certified-copy";
/// Item kind for missing-image delivery requests.
pub const KIND_MISSING_IMAGE_DELIVERY: &str = "missing-image-delivery";

/// Certificate type code with a reduced detail set.
pub const CERTIFICATE_TYPE_DISSOLUTION: &str = "dissolution";
/// Certificate type code routed through the company-type mapper factory.
pub const CERTIFICATE_TYPE_INCORPORATION: &str = "incorporation-with-all-name-changes";

/// A purchasable unit within a basket, checkout, or order.
///
/// Immutable once fetched from the upstream API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: String,
    pub kind: String,
    pub company_name: String,
    pub company_number: String,
    /// Opaque decimal string; never parsed into a numeric type for display.
    pub total_item_cost: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub item_options: ItemOptions,
}

const fn default_quantity() -> u32 {
    1
}

impl Item {
    /// Certificate options, when this item is a certificate.
    #[must_use]
    pub const fn certificate_options(&self) -> Option<&CertificateItemOptions> {
        match &self.item_options {
            ItemOptions::Certificate(options) => Some(options),
            _ => None,
        }
    }

    /// Certified copy options, when this item is a certified copy.
    #[must_use]
    pub const fn certified_copy_options(&self) -> Option<&CertifiedCopyItemOptions> {
        match &self.item_options {
            ItemOptions::CertifiedCopy(options) => Some(options),
            _ => None,
        }
    }

    /// Missing image delivery options, when this item is one.
    #[must_use]
    pub const fn missing_image_delivery_options(
        &self,
    ) -> Option<&MissingImageDeliveryItemOptions> {
        match &self.item_options {
            ItemOptions::MissingImageDelivery(options) => Some(options),
            _ => None,
        }
    }
}

/// Kind-specific item options.
///
/// Untagged: the variants are discriminated by their required fields
/// (`certificateType`, `filingHistoryDocuments`, and the flattened filing
/// history fields respectively). Anything else lands in `Unknown` so items
/// of unrecognized kinds still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemOptions {
    Certificate(CertificateItemOptions),
    CertifiedCopy(CertifiedCopyItemOptions),
    MissingImageDelivery(MissingImageDeliveryItemOptions),
    Unknown(serde_json::Value),
}

/// Options present when `kind = certificate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CertificateItemOptions {
    /// Free string; `dissolution` and `incorporation-with-all-name-changes`
    /// have dedicated handling, everything else is formatted generically.
    pub certificate_type: String,
    pub company_type: CompanyType,
    #[serde(default)]
    pub company_status: CompanyStatus,
    #[serde(default)]
    pub delivery_timescale: Option<DeliveryTimescale>,
    #[serde(default)]
    pub include_email_copy: Option<bool>,
    #[serde(default)]
    pub registered_office_address_details: Option<AddressDetails>,
    #[serde(default)]
    pub principal_place_of_business_details: Option<AddressDetails>,
    #[serde(default)]
    pub director_details: Option<DirectorOrSecretaryDetails>,
    #[serde(default)]
    pub secretary_details: Option<DirectorOrSecretaryDetails>,
    #[serde(default)]
    pub designated_member_details: Option<MemberDetails>,
    #[serde(default)]
    pub member_details: Option<MemberDetails>,
    #[serde(default)]
    pub general_partner_details: Option<BasicInformationDetails>,
    #[serde(default)]
    pub limited_partner_details: Option<BasicInformationDetails>,
    #[serde(default)]
    pub administrators_details: Option<BasicInformationDetails>,
    #[serde(default)]
    pub liquidators_details: Option<BasicInformationDetails>,
    #[serde(default)]
    pub include_good_standing_information: Option<bool>,
    #[serde(default)]
    pub include_company_objects_information: Option<bool>,
    #[serde(default)]
    pub include_general_nature_of_business_information: Option<bool>,
}

/// Options present when `kind = certified-copy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CertifiedCopyItemOptions {
    #[serde(default)]
    pub delivery_timescale: Option<DeliveryTimescale>,
    pub filing_history_documents: Vec<FilingHistoryDocument>,
}

/// Options present when `kind = missing-image-delivery`: a single filing
/// history entry, flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MissingImageDeliveryItemOptions {
    #[serde(default)]
    pub filing_history_id: String,
    pub filing_history_date: String,
    pub filing_history_type: String,
    pub filing_history_description: String,
    #[serde(default)]
    pub filing_history_description_values: Option<HashMap<String, serde_json::Value>>,
}

/// A historical company filing referenced by certified-copy and
/// missing-image-delivery items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FilingHistoryDocument {
    pub filing_history_id: String,
    pub filing_history_date: String,
    pub filing_history_type: String,
    /// Templated description code, resolved against the description
    /// enumeration at mapping time.
    pub filing_history_description: String,
    pub filing_history_description_values: Option<HashMap<String, serde_json::Value>>,
    pub filing_history_cost: String,
}

/// Postal delivery address captured during checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetails {
    pub forename: String,
    pub surname: String,
    pub address_line_1: String,
    #[serde(default)]
    pub address_line_2: Option<String>,
    pub locality: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country: String,
    #[serde(default)]
    pub po_box: Option<String>,
}
