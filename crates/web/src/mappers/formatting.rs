//! Formatting utilities shared by every mapper.
//!
//! These are pure functions over already-fetched domain values. Output
//! strings are part of the rendered-page contract and are pinned by the
//! tests below; reword them only together with the templates.
//!
//! Cost values are opaque decimal strings throughout - `map_currency` is
//! string concatenation, never numeric formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::error;

use company_orders_core::{
    AddressDetails, AddressRecordsType, DeliveryTimescale, DirectorOrSecretaryDetails,
    IncludeDobType, MemberDetails, CERTIFICATE_TYPE_DISSOLUTION, CERTIFICATE_TYPE_INCORPORATION,
};

/// Human-readable certificate type text.
///
/// `None` for absent or empty codes. The two compound certificate types get
/// fixed phrases; any other code is formatted generically (hyphens to
/// spaces, first letter capitalized).
#[must_use]
pub fn map_certificate_type(certificate_type: Option<&str>) -> Option<String> {
    let certificate_type = certificate_type.filter(|value| !value.is_empty())?;
    if certificate_type == CERTIFICATE_TYPE_INCORPORATION {
        return Some("Incorporation with all company name changes".to_string());
    }
    if certificate_type == CERTIFICATE_TYPE_DISSOLUTION {
        return Some("Dissolution with all company name changes".to_string());
    }

    let spaced = certificate_type.replace('-', " ");
    let mut chars = spaced.chars();
    Some(chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    }))
}

/// "Yes" when an option group was sent at all, "No" when it is absent.
///
/// Defined-ness, not truthiness: `Some(false)` is still "Yes".
#[must_use]
pub const fn item_options_selected_text(option: Option<bool>) -> &'static str {
    match option {
        Some(_) => "Yes",
        None => "No",
    }
}

/// Address option text for registered office / principal place of business
/// rows.
///
/// Unmapped enum values are a data-quality issue, not a request failure:
/// they are logged and rendered as an empty string so upstream enum growth
/// degrades gracefully.
#[must_use]
pub fn map_address_options(details: Option<&AddressDetails>) -> String {
    let Some(records_type) = details.and_then(|d| d.include_address_records_type) else {
        return "No".to_string();
    };
    match records_type {
        AddressRecordsType::Current => "Current address".to_string(),
        AddressRecordsType::CurrentAndPrevious => {
            "Current address and the one previous".to_string()
        }
        AddressRecordsType::CurrentPreviousAndPrior => {
            "Current address and the two previous".to_string()
        }
        AddressRecordsType::All => "All current and previous addresses".to_string(),
        AddressRecordsType::Unknown => {
            error!("Unmapped include_address_records_type value");
            String::new()
        }
    }
}

/// Delivery method text. `dispatch_days` is interpolated verbatim from
/// configuration.
#[must_use]
pub fn map_delivery_method(
    timescale: Option<DeliveryTimescale>,
    dispatch_days: &str,
) -> Option<String> {
    match timescale {
        Some(DeliveryTimescale::Standard) => Some(format!(
            "Standard delivery (aim to dispatch within {dispatch_days} working days)"
        )),
        Some(DeliveryTimescale::SameDay) => Some("Same Day".to_string()),
        _ => None,
    }
}

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape each line and join with `<br>` terminators.
///
/// Used both for safety (free text such as names and addresses) and for
/// layout (bulleted option lists).
#[must_use]
pub fn map_to_html<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut html = String::new();
    for line in lines {
        html.push_str(&escape_html(line.as_ref()));
        html.push_str("<br>");
    }
    html
}

/// Director or secretary row text.
///
/// "No" when the group is absent or basic information is not requested,
/// "Yes" when only basic information is requested, otherwise an HTML list
/// headed `Including {role}':` naming the extra fields in fixed order.
#[must_use]
pub fn director_or_secretary_options_text(
    details: Option<&DirectorOrSecretaryDetails>,
    role: &str,
) -> String {
    let Some(details) = details else {
        return "No".to_string();
    };
    if !details.include_basic_information.unwrap_or(false) {
        return "No".to_string();
    }

    let mut fields = Vec::new();
    if details.include_address.unwrap_or(false) {
        fields.push("Correspondence address");
    }
    if details.include_occupation.unwrap_or(false) {
        fields.push("Occupation");
    }
    if details.include_dob_type == Some(IncludeDobType::Partial) {
        fields.push("Date of birth (month and year)");
    }
    if details.include_appointment_date.unwrap_or(false) {
        fields.push("Appointment date");
    }
    if details.include_nationality.unwrap_or(false) {
        fields.push("Nationality");
    }
    if details.include_country_of_residence.unwrap_or(false) {
        fields.push("Country of residence");
    }

    options_list_text(fields, role)
}

/// Member or designated member row text. Same shape as the director
/// variant, different fixed field order.
#[must_use]
pub fn member_options_text(details: Option<&MemberDetails>, role: &str) -> String {
    let Some(details) = details else {
        return "No".to_string();
    };
    if !details.include_basic_information.unwrap_or(false) {
        return "No".to_string();
    }

    let mut fields = Vec::new();
    if details.include_address.unwrap_or(false) {
        fields.push("Correspondence address");
    }
    if details.include_appointment_date.unwrap_or(false) {
        fields.push("Appointment date");
    }
    if details.include_country_of_residence.unwrap_or(false) {
        fields.push("Country of residence");
    }
    if details.include_dob_type == Some(IncludeDobType::Partial) {
        fields.push("Date of birth (month and year)");
    }

    options_list_text(fields, role)
}

fn options_list_text(fields: Vec<&str>, role: &str) -> String {
    if fields.is_empty() {
        return "Yes".to_string();
    }
    let mut lines = vec![format!("Including {role}':")];
    lines.extend(fields.iter().map(ToString::to_string));
    map_to_html(lines)
}

/// Prefix a raw cost string with a pound sign. No rounding, no thousands
/// separators, no decimal normalization.
#[must_use]
pub fn map_currency(amount: &str) -> String {
    format!("£{amount}")
}

/// Confirmation timestamp text: `16 December 2019 - 09:16:17`.
#[must_use]
pub fn map_date(value: &str) -> String {
    parse_date_time(value).map_or_else(
        || pass_through(value),
        |date_time| date_time.format("%-d %B %Y - %H:%M:%S").to_string(),
    )
}

/// Filing history table date text: `12 Feb 2010`.
#[must_use]
pub fn map_filing_history_date(value: &str) -> String {
    parse_date(value).map_or_else(
        || pass_through(value),
        |date| date.format("%-d %b %Y").to_string(),
    )
}

/// Long-month date text used in resolved filing history descriptions:
/// `12 February 2010`.
#[must_use]
pub fn map_full_date(value: &str) -> String {
    parse_date(value).map_or_else(
        || pass_through(value),
        |date| date.format("%-d %B %Y").to_string(),
    )
}

fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.naive_utc());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_date_time(value).map(|date_time| date_time.date()))
}

fn pass_through(value: &str) -> String {
    tracing::warn!(value, "Unparseable date passed through unformatted");
    value.to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_map_certificate_type_none_for_absent_or_empty() {
        assert_eq!(map_certificate_type(None), None);
        assert_eq!(map_certificate_type(Some("")), None);
    }

    #[test]
    fn test_map_certificate_type_special_cases() {
        assert_eq!(
            map_certificate_type(Some("incorporation-with-all-name-changes")).unwrap(),
            "Incorporation with all company name changes"
        );
        assert_eq!(
            map_certificate_type(Some("dissolution")).unwrap(),
            "Dissolution with all company name changes"
        );
    }

    #[test]
    fn test_map_certificate_type_generic_formatting() {
        assert_eq!(
            map_certificate_type(Some("supervisory-body")).unwrap(),
            "Supervisory body"
        );
    }

    #[test]
    fn test_map_certificate_type_idempotent_on_formatted_text() {
        let once = map_certificate_type(Some("supervisory-body")).unwrap();
        let twice = map_certificate_type(Some(once.as_str())).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_item_options_selected_text_defined_ness() {
        assert_eq!(item_options_selected_text(None), "No");
        assert_eq!(item_options_selected_text(Some(true)), "Yes");
        // Explicit false is still defined, so still "Yes".
        assert_eq!(item_options_selected_text(Some(false)), "Yes");
    }

    #[test]
    fn test_map_address_options_no_when_absent() {
        assert_eq!(map_address_options(None), "No");
        assert_eq!(
            map_address_options(Some(&AddressDetails::default())),
            "No"
        );
    }

    #[test]
    fn test_map_address_options_fixed_phrases() {
        for (records_type, expected) in [
            (AddressRecordsType::Current, "Current address"),
            (
                AddressRecordsType::CurrentAndPrevious,
                "Current address and the one previous",
            ),
            (
                AddressRecordsType::CurrentPreviousAndPrior,
                "Current address and the two previous",
            ),
            (AddressRecordsType::All, "All current and previous addresses"),
        ] {
            let details = AddressDetails {
                include_address_records_type: Some(records_type),
                include_dates: None,
            };
            assert_eq!(map_address_options(Some(&details)), expected);
        }
    }

    #[test]
    fn test_map_address_options_unknown_value_degrades_to_empty() {
        let details = AddressDetails {
            include_address_records_type: Some(AddressRecordsType::Unknown),
            include_dates: None,
        };
        assert_eq!(map_address_options(Some(&details)), "");
    }

    #[test]
    fn test_map_delivery_method() {
        assert_eq!(
            map_delivery_method(Some(DeliveryTimescale::Standard), "10").unwrap(),
            "Standard delivery (aim to dispatch within 10 working days)"
        );
        assert_eq!(
            map_delivery_method(Some(DeliveryTimescale::SameDay), "10").unwrap(),
            "Same Day"
        );
        assert_eq!(map_delivery_method(None, "10"), None);
        assert_eq!(
            map_delivery_method(Some(DeliveryTimescale::Unknown), "10"),
            None
        );
    }

    #[test]
    fn test_map_to_html_escapes_and_terminates_lines() {
        assert_eq!(
            map_to_html(["Bob & Sons <Ltd>", "O'Brien \"House\""]),
            "Bob &amp; Sons &lt;Ltd&gt;<br>O&#39;Brien &quot;House&quot;<br>"
        );
    }

    #[test]
    fn test_map_to_html_round_trips_modulo_escaping() {
        let lines = ["10 Main Street", "Cardiff", "CF14 3UZ"];
        let html = map_to_html(lines);
        let recovered: Vec<&str> = html.split_terminator("<br>").collect();
        assert_eq!(recovered, lines);
    }

    #[test]
    fn test_director_options_no_without_basic_information() {
        assert_eq!(director_or_secretary_options_text(None, "directors"), "No");
        let details = DirectorOrSecretaryDetails {
            include_basic_information: Some(false),
            include_address: Some(true),
            ..Default::default()
        };
        assert_eq!(
            director_or_secretary_options_text(Some(&details), "directors"),
            "No"
        );
    }

    #[test]
    fn test_director_options_yes_with_basic_information_only() {
        let details = DirectorOrSecretaryDetails {
            include_basic_information: Some(true),
            ..Default::default()
        };
        assert_eq!(
            director_or_secretary_options_text(Some(&details), "directors"),
            "Yes"
        );
    }

    #[test]
    fn test_director_options_full_list_in_fixed_order() {
        let details = DirectorOrSecretaryDetails {
            include_basic_information: Some(true),
            include_address: Some(true),
            include_appointment_date: Some(true),
            include_country_of_residence: Some(true),
            include_dob_type: Some(IncludeDobType::Partial),
            include_nationality: Some(true),
            include_occupation: Some(true),
        };
        assert_eq!(
            director_or_secretary_options_text(Some(&details), "directors"),
            map_to_html([
                "Including directors':",
                "Correspondence address",
                "Occupation",
                "Date of birth (month and year)",
                "Appointment date",
                "Nationality",
                "Country of residence",
            ])
        );
    }

    #[test]
    fn test_director_options_dob_line_requires_partial() {
        let details = DirectorOrSecretaryDetails {
            include_basic_information: Some(true),
            include_dob_type: Some(IncludeDobType::Full),
            include_nationality: Some(true),
            ..Default::default()
        };
        assert_eq!(
            director_or_secretary_options_text(Some(&details), "directors"),
            map_to_html(["Including directors':", "Nationality"])
        );
    }

    #[test]
    fn test_member_options_list_in_fixed_order() {
        let details = MemberDetails {
            include_basic_information: Some(true),
            include_address: Some(true),
            include_appointment_date: Some(true),
            include_country_of_residence: Some(true),
            include_dob_type: Some(IncludeDobType::Partial),
        };
        assert_eq!(
            member_options_text(Some(&details), "designated members"),
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
    fn test_map_currency_is_string_concatenation() {
        assert_eq!(map_currency("15"), "£15");
        assert_eq!(map_currency("15.50"), "£15.50");
        assert_eq!(map_currency("15000"), "£15000");
    }

    #[test]
    fn test_map_date_long_month_with_time() {
        assert_eq!(
            map_date("2019-12-16T09:16:17"),
            "16 December 2019 - 09:16:17"
        );
        assert_eq!(
            map_date("2019-12-16T09:16:17.791Z"),
            "16 December 2019 - 09:16:17"
        );
    }

    #[test]
    fn test_map_filing_history_date_short_month() {
        assert_eq!(map_filing_history_date("2010-02-12"), "12 Feb 2010");
        assert_eq!(map_filing_history_date("2015-05-06"), "6 May 2015");
    }

    #[test]
    fn test_map_full_date_long_month() {
        assert_eq!(map_full_date("2010-02-12"), "12 February 2010");
    }

    #[test]
    fn test_unparseable_dates_pass_through() {
        assert_eq!(map_date("not-a-date"), "not-a-date");
        assert_eq!(map_filing_history_date(""), "");
    }
}
