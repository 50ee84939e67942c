//! Certificate mapper selection.
//!
//! The selection table is built once, as plain data, from the feature flags
//! in force at startup. Feature flags gate the *availability* of the
//! specialized layouts, never the validity of input: a combination whose
//! flag is off silently falls through to the default layout.

use std::collections::HashMap;

use company_orders_core::{CompanyStatus, CompanyType};

use super::certificate::CertificateMapper;
use crate::config::FeatureFlags;

/// Selects the certificate detail mapper for a company type and status.
#[derive(Debug, Clone)]
pub struct CertificateMapperFactory {
    by_type: HashMap<CompanyType, CertificateMapper>,
    overrides: HashMap<(CompanyType, CompanyStatus), CertificateMapper>,
    status_defaults: HashMap<CompanyStatus, CertificateMapper>,
}

impl CertificateMapperFactory {
    /// Build the selection table from the feature flags in force.
    #[must_use]
    pub fn new(flags: FeatureFlags) -> Self {
        let mut by_type = HashMap::new();
        by_type.insert(CompanyType::Ltd, CertificateMapper::Other);
        if flags.llp_certificate_orders_enabled {
            by_type.insert(CompanyType::Llp, CertificateMapper::Llp);
        }
        if flags.lp_certificate_orders_enabled {
            by_type.insert(CompanyType::LimitedPartnership, CertificateMapper::Lp);
        }

        let mut overrides = HashMap::new();
        let mut status_defaults = HashMap::new();
        if flags.liquidation_enabled {
            overrides.insert(
                (CompanyType::Ltd, CompanyStatus::Liquidation),
                CertificateMapper::LiquidatedOther,
            );
            status_defaults.insert(CompanyStatus::Liquidation, CertificateMapper::LiquidatedOther);
            if flags.llp_certificate_orders_enabled {
                overrides.insert(
                    (CompanyType::Llp, CompanyStatus::Liquidation),
                    CertificateMapper::LiquidatedLlp,
                );
            }
        }
        if flags.administration_enabled {
            overrides.insert(
                (CompanyType::Ltd, CompanyStatus::Administration),
                CertificateMapper::AdministratedOther,
            );
            status_defaults.insert(
                CompanyStatus::Administration,
                CertificateMapper::AdministratedOther,
            );
            if flags.llp_certificate_orders_enabled {
                overrides.insert(
                    (CompanyType::Llp, CompanyStatus::Administration),
                    CertificateMapper::AdministratedLlp,
                );
            }
        }

        Self {
            by_type,
            overrides,
            status_defaults,
        }
    }

    fn lookup(
        &self,
        company_type: CompanyType,
        company_status: CompanyStatus,
    ) -> Option<CertificateMapper> {
        self.overrides
            .get(&(company_type, company_status))
            .or_else(|| self.by_type.get(&company_type))
            .or_else(|| self.status_defaults.get(&company_status))
            .copied()
    }

    /// Mapper for the confirmation page. Always resolves to a concrete
    /// mapper; unmatched combinations get the default layout.
    #[must_use]
    pub fn mapper(
        &self,
        company_type: CompanyType,
        company_status: CompanyStatus,
    ) -> CertificateMapper {
        self.lookup(company_type, company_status)
            .unwrap_or(CertificateMapper::Other)
    }

    /// Mapper for the order item summary page. Unmatched combinations get
    /// the `Null` mapper, whose operations fail with "Mapper not found".
    #[must_use]
    pub fn summary_mapper(
        &self,
        company_type: CompanyType,
        company_status: CompanyStatus,
    ) -> CertificateMapper {
        self.lookup(company_type, company_status)
            .unwrap_or(CertificateMapper::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ON: FeatureFlags = FeatureFlags {
        lp_certificate_orders_enabled: true,
        llp_certificate_orders_enabled: true,
        liquidation_enabled: true,
        administration_enabled: true,
    };

    const ALL_OFF: FeatureFlags = FeatureFlags {
        lp_certificate_orders_enabled: false,
        llp_certificate_orders_enabled: false,
        liquidation_enabled: false,
        administration_enabled: false,
    };

    #[test]
    fn test_default_combination_resolves_to_other() {
        let factory = CertificateMapperFactory::new(ALL_OFF);
        assert_eq!(
            factory.mapper(CompanyType::Ltd, CompanyStatus::Active),
            CertificateMapper::Other
        );
    }

    #[test]
    fn test_llp_flag_gates_llp_mapper() {
        let on = CertificateMapperFactory::new(FeatureFlags {
            llp_certificate_orders_enabled: true,
            ..ALL_OFF
        });
        assert_eq!(
            on.mapper(CompanyType::Llp, CompanyStatus::Active),
            CertificateMapper::Llp
        );

        let off = CertificateMapperFactory::new(ALL_OFF);
        assert_eq!(
            off.mapper(CompanyType::Llp, CompanyStatus::Active),
            CertificateMapper::Other
        );
    }

    #[test]
    fn test_lp_flag_gates_lp_mapper() {
        let on = CertificateMapperFactory::new(FeatureFlags {
            lp_certificate_orders_enabled: true,
            ..ALL_OFF
        });
        assert_eq!(
            on.mapper(CompanyType::LimitedPartnership, CompanyStatus::Active),
            CertificateMapper::Lp
        );

        let off = CertificateMapperFactory::new(ALL_OFF);
        assert_eq!(
            off.mapper(CompanyType::LimitedPartnership, CompanyStatus::Active),
            CertificateMapper::Other
        );
    }

    #[test]
    fn test_liquidation_flag_gates_liquidated_mappers() {
        let on = CertificateMapperFactory::new(ALL_ON);
        assert_eq!(
            on.mapper(CompanyType::Ltd, CompanyStatus::Liquidation),
            CertificateMapper::LiquidatedOther
        );
        assert_eq!(
            on.mapper(CompanyType::Llp, CompanyStatus::Liquidation),
            CertificateMapper::LiquidatedLlp
        );

        let off = CertificateMapperFactory::new(FeatureFlags {
            llp_certificate_orders_enabled: true,
            ..ALL_OFF
        });
        assert_eq!(
            off.mapper(CompanyType::Ltd, CompanyStatus::Liquidation),
            CertificateMapper::Other
        );
        assert_eq!(
            off.mapper(CompanyType::Llp, CompanyStatus::Liquidation),
            CertificateMapper::Llp
        );
    }

    #[test]
    fn test_administration_flag_gates_administrated_mappers() {
        let on = CertificateMapperFactory::new(ALL_ON);
        assert_eq!(
            on.mapper(CompanyType::Ltd, CompanyStatus::Administration),
            CertificateMapper::AdministratedOther
        );
        assert_eq!(
            on.mapper(CompanyType::Llp, CompanyStatus::Administration),
            CertificateMapper::AdministratedLlp
        );

        let off = CertificateMapperFactory::new(ALL_OFF);
        assert_eq!(
            off.mapper(CompanyType::Ltd, CompanyStatus::Administration),
            CertificateMapper::Other
        );
    }

    #[test]
    fn test_unknown_type_in_flagged_status_uses_status_default() {
        let factory = CertificateMapperFactory::new(ALL_ON);
        assert_eq!(
            factory.mapper(CompanyType::Other, CompanyStatus::Liquidation),
            CertificateMapper::LiquidatedOther
        );
        assert_eq!(
            factory.mapper(CompanyType::Other, CompanyStatus::Administration),
            CertificateMapper::AdministratedOther
        );
    }

    #[test]
    fn test_unknown_combination_never_errors_for_confirmation() {
        let factory = CertificateMapperFactory::new(ALL_OFF);
        assert_eq!(
            factory.mapper(CompanyType::Other, CompanyStatus::Other),
            CertificateMapper::Other
        );
    }

    #[test]
    fn test_summary_lookup_failure_resolves_to_null() {
        let factory = CertificateMapperFactory::new(ALL_OFF);
        assert_eq!(
            factory.summary_mapper(CompanyType::Other, CompanyStatus::Active),
            CertificateMapper::Null
        );
        // Known combinations behave identically in both modes.
        assert_eq!(
            factory.summary_mapper(CompanyType::Ltd, CompanyStatus::Active),
            CertificateMapper::Other
        );
    }
}
