//! Company classification enums and certificate option detail groups.
//!
//! The upstream registry data uses open enum sets that grow over time, so
//! every enum here carries a catch-all variant rather than failing
//! deserialization on values this crate does not know about yet.

use serde::{Deserialize, Serialize};

/// Company type, as recorded against the company profile.
///
/// Only the types with a dedicated certificate schema are distinguished;
/// everything else (plc, unlimited, overseas entities, ...) maps to `Other`
/// and receives the default certificate layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CompanyType {
    #[default]
    Ltd,
    Llp,
    LimitedPartnership,
    #[serde(other)]
    Other,
}

/// Company status at the time the certificate was ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CompanyStatus {
    #[default]
    Active,
    Liquidation,
    Administration,
    #[serde(other)]
    Other,
}

/// Requested dispatch speed for a deliverable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryTimescale {
    Standard,
    SameDay,
    #[serde(other)]
    Unknown,
}

/// Which address records a certificate should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressRecordsType {
    Current,
    CurrentAndPrevious,
    CurrentPreviousAndPrior,
    All,
    #[serde(other)]
    Unknown,
}

/// Date-of-birth disclosure level for officer details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncludeDobType {
    Partial,
    Full,
    #[serde(other)]
    Unknown,
}

/// Address inclusion options (registered office / principal place of
/// business).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressDetails {
    pub include_address_records_type: Option<AddressRecordsType>,
    pub include_dates: Option<bool>,
}

/// Director or secretary inclusion options.
///
/// `include_basic_information` gates the whole group; the sub-flags select
/// extra fields to print against each officer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectorOrSecretaryDetails {
    pub include_basic_information: Option<bool>,
    pub include_address: Option<bool>,
    pub include_appointment_date: Option<bool>,
    pub include_country_of_residence: Option<bool>,
    pub include_dob_type: Option<IncludeDobType>,
    pub include_nationality: Option<bool>,
    pub include_occupation: Option<bool>,
}

/// Member / designated member inclusion options (LLP certificates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberDetails {
    pub include_basic_information: Option<bool>,
    pub include_address: Option<bool>,
    pub include_appointment_date: Option<bool>,
    pub include_country_of_residence: Option<bool>,
    pub include_dob_type: Option<IncludeDobType>,
}

/// Basic-information-only option group (partners, liquidators,
/// administrators).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInformationDetails {
    pub include_basic_information: Option<bool>,
}
