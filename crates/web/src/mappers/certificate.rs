//! Certificate detail mapper family.
//!
//! One variant per company-type/status combination the service renders a
//! dedicated certificate layout for. The variants form a closed set selected
//! by [`super::factory::CertificateMapperFactory`]; each produces the
//! ordered key/value rows describing the certificate options of one item.
//!
//! Row count and order are deterministic functions of (company type, company
//! status, feature flags, populated option fields).

use company_orders_core::{
    CertificateItemOptions, Item, CERTIFICATE_TYPE_DISSOLUTION,
};

use super::formatting::{
    director_or_secretary_options_text, item_options_selected_text, map_address_options,
    map_certificate_type, member_options_text,
};
use super::MapperError;
use crate::views::SummaryListRow;

/// Certificate detail mapper, selected per company type and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateMapper {
    /// Limited companies and any company type without a dedicated layout.
    Other,
    /// Limited liability partnerships.
    Llp,
    /// Limited partnerships.
    Lp,
    /// Companies in liquidation.
    LiquidatedOther,
    /// LLPs in liquidation.
    LiquidatedLlp,
    /// Companies in administration.
    AdministratedOther,
    /// LLPs in administration.
    AdministratedLlp,
    /// Lookup failure sentinel: every operation fails.
    Null,
}

impl CertificateMapper {
    /// Build the ordered certificate detail table for an item.
    ///
    /// # Errors
    ///
    /// `MapperError::MapperNotFound` for the `Null` variant, and
    /// `MapperError::MissingItemOptions` when the item does not carry
    /// certificate options.
    pub fn map_certificate_details(
        self,
        item: &Item,
    ) -> Result<Vec<SummaryListRow>, MapperError> {
        if self == Self::Null {
            return Err(MapperError::MapperNotFound);
        }
        let options = item
            .certificate_options()
            .ok_or(MapperError::MissingItemOptions)?;

        let mut rows = vec![
            SummaryListRow::detail_text("Company name", &item.company_name),
            SummaryListRow::detail_text("Company number", &item.company_number),
            SummaryListRow::detail_text(
                "Certificate type",
                map_certificate_type(Some(options.certificate_type.as_str())).unwrap_or_default(),
            ),
        ];

        // Dissolution certificates carry no option rows at all.
        if options.certificate_type == CERTIFICATE_TYPE_DISSOLUTION {
            return Ok(rows);
        }

        match self {
            Self::Other => {
                rows.push(good_standing_row(options));
                rows.push(registered_office_row(options));
                rows.extend(officer_rows(options));
                rows.push(company_objects_row(options));
            }
            Self::Llp => {
                rows.push(good_standing_row(options));
                rows.push(registered_office_row(options));
                rows.extend(member_rows(options));
            }
            Self::Lp => {
                rows.push(good_standing_row(options));
                rows.push(SummaryListRow::detail_text(
                    "Principal place of business",
                    map_address_options(options.principal_place_of_business_details.as_ref()),
                ));
                rows.push(SummaryListRow::detail_text(
                    "The names of all current general partners",
                    item_options_selected_text(
                        options
                            .general_partner_details
                            .as_ref()
                            .and_then(|details| details.include_basic_information),
                    ),
                ));
                rows.push(SummaryListRow::detail_text(
                    "The names of all current limited partners",
                    item_options_selected_text(
                        options
                            .limited_partner_details
                            .as_ref()
                            .and_then(|details| details.include_basic_information),
                    ),
                ));
                rows.push(SummaryListRow::detail_text(
                    "General nature of business",
                    item_options_selected_text(
                        options.include_general_nature_of_business_information,
                    ),
                ));
            }
            Self::LiquidatedOther => {
                rows.push(registered_office_row(options));
                rows.extend(officer_rows(options));
                rows.push(company_objects_row(options));
                rows.push(liquidators_row(options));
            }
            Self::LiquidatedLlp => {
                rows.push(registered_office_row(options));
                rows.extend(member_rows(options));
                rows.push(liquidators_row(options));
            }
            Self::AdministratedOther => {
                rows.push(good_standing_row(options));
                rows.push(registered_office_row(options));
                rows.extend(officer_rows(options));
                rows.push(company_objects_row(options));
                rows.push(administrators_row(options));
            }
            Self::AdministratedLlp => {
                rows.push(good_standing_row(options));
                rows.push(registered_office_row(options));
                rows.extend(member_rows(options));
                rows.push(administrators_row(options));
            }
            Self::Null => unreachable!("handled above"),
        }

        Ok(rows)
    }
}

fn good_standing_row(options: &CertificateItemOptions) -> SummaryListRow {
    SummaryListRow::detail_text(
        "Statement of good standing",
        item_options_selected_text(options.include_good_standing_information),
    )
}

fn registered_office_row(options: &CertificateItemOptions) -> SummaryListRow {
    SummaryListRow::detail_text(
        "Registered office address",
        map_address_options(options.registered_office_address_details.as_ref()),
    )
}

fn company_objects_row(options: &CertificateItemOptions) -> SummaryListRow {
    SummaryListRow::detail_text(
        "Company objects",
        item_options_selected_text(options.include_company_objects_information),
    )
}

fn officer_rows(options: &CertificateItemOptions) -> [SummaryListRow; 2] {
    [
        SummaryListRow::detail_html(
            "The names of all current company directors",
            director_or_secretary_options_text(options.director_details.as_ref(), "directors"),
        ),
        SummaryListRow::detail_html(
            "The names of all current company secretaries",
            director_or_secretary_options_text(
                options.secretary_details.as_ref(),
                "secretaries",
            ),
        ),
    ]
}

fn member_rows(options: &CertificateItemOptions) -> [SummaryListRow; 2] {
    [
        SummaryListRow::detail_html(
            "The names of all current designated members",
            member_options_text(
                options.designated_member_details.as_ref(),
                "designated members",
            ),
        ),
        SummaryListRow::detail_html(
            "The names of all current members",
            member_options_text(options.member_details.as_ref(), "members"),
        ),
    ]
}

fn liquidators_row(options: &CertificateItemOptions) -> SummaryListRow {
    SummaryListRow::detail_text(
        "Liquidators' details",
        item_options_selected_text(
            options
                .liquidators_details
                .as_ref()
                .and_then(|details| details.include_basic_information),
        ),
    )
}

fn administrators_row(options: &CertificateItemOptions) -> SummaryListRow {
    SummaryListRow::detail_text(
        "Administrators' details",
        item_options_selected_text(
            options
                .administrators_details
                .as_ref()
                .and_then(|details| details.include_basic_information),
        ),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use company_orders_core::{
        CompanyStatus, CompanyType, ItemOptions, MemberDetails, KIND_CERTIFICATE,
    };

    use super::*;
    use crate::mappers::formatting::map_to_html;

    fn certificate_item(options: CertificateItemOptions) -> Item {
        Item {
            id: "CRT-123456-789012".to_string(),
            kind: KIND_CERTIFICATE.to_string(),
            company_name: "THE GIRLS' DAY SCHOOL TRUST".to_string(),
            company_number: "00006400".to_string(),
            total_item_cost: "15".to_string(),
            quantity: 1,
            item_options: ItemOptions::Certificate(options),
        }
    }

    fn keys(rows: &[SummaryListRow]) -> Vec<String> {
        rows.iter()
            .map(|row| row.key.text.clone().unwrap())
            .collect()
    }

    #[test]
    fn test_shared_rows_head_every_table() {
        let item = certificate_item(CertificateItemOptions {
            certificate_type: "incorporation-with-all-name-changes".to_string(),
            company_type: CompanyType::Ltd,
            ..Default::default()
        });
        let rows = CertificateMapper::Other.map_certificate_details(&item).unwrap();

        assert_eq!(rows[0].key.text.as_deref(), Some("Company name"));
        assert_eq!(
            rows[0].value.text.as_deref(),
            Some("THE GIRLS' DAY SCHOOL TRUST")
        );
        assert_eq!(rows[1].value.text.as_deref(), Some("00006400"));
        assert_eq!(
            rows[2].value.text.as_deref(),
            Some("Incorporation with all company name changes")
        );
    }

    #[test]
    fn test_other_mapper_row_order() {
        let item = certificate_item(CertificateItemOptions {
            certificate_type: "incorporation-with-all-name-changes".to_string(),
            ..Default::default()
        });
        let rows = CertificateMapper::Other.map_certificate_details(&item).unwrap();
        assert_eq!(
            keys(&rows),
            [
                "Company name",
                "Company number",
                "Certificate type",
                "Statement of good standing",
                "Registered office address",
                "The names of all current company directors",
                "The names of all current company secretaries",
                "Company objects",
            ]
        );
    }

    #[test]
    fn test_dissolution_stops_after_certificate_type_row() {
        let item = certificate_item(CertificateItemOptions {
            certificate_type: CERTIFICATE_TYPE_DISSOLUTION.to_string(),
            include_good_standing_information: Some(true),
            ..Default::default()
        });
        // Every non-Null variant takes the early return.
        for mapper in [
            CertificateMapper::Other,
            CertificateMapper::Llp,
            CertificateMapper::Lp,
        ] {
            let rows = mapper.map_certificate_details(&item).unwrap();
            assert_eq!(rows.len(), 3);
            assert_eq!(
                rows[2].value.text.as_deref(),
                Some("Dissolution with all company name changes")
            );
        }
    }

    #[test]
    fn test_llp_members_with_basic_information_only_render_yes() {
        let basic_only = MemberDetails {
            include_basic_information: Some(true),
            include_address: Some(false),
            include_appointment_date: Some(false),
            include_country_of_residence: Some(false),
            include_dob_type: None,
        };
        let item = certificate_item(CertificateItemOptions {
            certificate_type: "incorporation-with-all-name-changes".to_string(),
            company_type: CompanyType::Llp,
            company_status: CompanyStatus::Active,
            designated_member_details: Some(basic_only.clone()),
            member_details: Some(basic_only),
            ..Default::default()
        });

        let rows = CertificateMapper::Llp.map_certificate_details(&item).unwrap();
        assert_eq!(rows[5].value.html.as_deref(), Some("Yes"));
        assert_eq!(rows[6].value.html.as_deref(), Some("Yes"));
    }

    #[test]
    fn test_llp_designated_members_full_options_render_list() {
        let full = MemberDetails {
            include_basic_information: Some(true),
            include_address: Some(true),
            include_appointment_date: Some(true),
            include_country_of_residence: Some(true),
            include_dob_type: Some(company_orders_core::IncludeDobType::Partial),
        };
        let item = certificate_item(CertificateItemOptions {
            certificate_type: "incorporation-with-all-name-changes".to_string(),
            company_type: CompanyType::Llp,
            designated_member_details: Some(full),
            ..Default::default()
        });

        let rows = CertificateMapper::Llp.map_certificate_details(&item).unwrap();
        assert_eq!(
            rows[5].value.html.as_deref().unwrap(),
            map_to_html([
                "Including designated members':",
                "Correspondence address",
                "Appointment date",
                "Country of residence",
                "Date of birth (month and year)",
            ])
        );
    }

    #[test]
    fn test_lp_mapper_row_order() {
        let item = certificate_item(CertificateItemOptions {
            certificate_type: "incorporation-with-all-name-changes".to_string(),
            company_type: CompanyType::LimitedPartnership,
            ..Default::default()
        });
        let rows = CertificateMapper::Lp.map_certificate_details(&item).unwrap();
        assert_eq!(
            keys(&rows)[3..],
            [
                "Statement of good standing",
                "Principal place of business",
                "The names of all current general partners",
                "The names of all current limited partners",
                "General nature of business",
            ]
        );
    }

    #[test]
    fn test_liquidated_mappers_drop_good_standing_and_append_liquidators() {
        let item = certificate_item(CertificateItemOptions {
            certificate_type: "incorporation-with-all-name-changes".to_string(),
            company_status: CompanyStatus::Liquidation,
            ..Default::default()
        });

        let rows = CertificateMapper::LiquidatedOther
            .map_certificate_details(&item)
            .unwrap();
        let row_keys = keys(&rows);
        assert!(!row_keys.contains(&"Statement of good standing".to_string()));
        assert_eq!(row_keys.last().unwrap(), "Liquidators' details");

        let llp_rows = CertificateMapper::LiquidatedLlp
            .map_certificate_details(&item)
            .unwrap();
        assert_eq!(
            keys(&llp_rows)[3..],
            [
                "Registered office address",
                "The names of all current designated members",
                "The names of all current members",
                "Liquidators' details",
            ]
        );
    }

    #[test]
    fn test_administrated_mappers_append_administrators_row() {
        let item = certificate_item(CertificateItemOptions {
            certificate_type: "incorporation-with-all-name-changes".to_string(),
            company_status: CompanyStatus::Administration,
            ..Default::default()
        });

        let rows = CertificateMapper::AdministratedOther
            .map_certificate_details(&item)
            .unwrap();
        assert_eq!(
            rows.last().unwrap().key.text.as_deref(),
            Some("Administrators' details")
        );
        // Base Other rows are preserved in front of the appended row.
        assert_eq!(rows.len(), 9);

        let llp_rows = CertificateMapper::AdministratedLlp
            .map_certificate_details(&item)
            .unwrap();
        assert_eq!(llp_rows.len(), 8);
    }

    #[test]
    fn test_null_mapper_fails() {
        let item = certificate_item(CertificateItemOptions {
            certificate_type: "incorporation-with-all-name-changes".to_string(),
            ..Default::default()
        });
        let err = CertificateMapper::Null
            .map_certificate_details(&item)
            .unwrap_err();
        assert_eq!(err.to_string(), "Mapper not found");
    }
}
