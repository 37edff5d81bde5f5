//! Respondent identity and consent.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Who answered the assessment, and whether results may be kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentProfile {
    pub name: String,
    pub company: String,
    pub sector: String,
    pub country: String,
    /// Consent to store results for later benchmarking.
    #[serde(default)]
    pub consent: bool,
}

impl RespondentProfile {
    /// Creates a profile. Company is required; other fields are trimmed.
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        sector: impl Into<String>,
        country: impl Into<String>,
        consent: bool,
    ) -> Result<Self, ValidationError> {
        let company = company.into().trim().to_string();
        if company.is_empty() {
            return Err(ValidationError::empty_field("company"));
        }
        Ok(Self {
            name: name.into().trim().to_string(),
            company,
            sector: sector.into().trim().to_string(),
            country: country.into().trim().to_string(),
            consent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_is_required() {
        let err = RespondentProfile::new("Sam", "   ", "Logistics", "Egypt", true).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("company"));
    }

    #[test]
    fn fields_are_trimmed() {
        let p = RespondentProfile::new(" Sam ", " Acme ", "Logistics ", " Egypt", false).unwrap();
        assert_eq!(p.name, "Sam");
        assert_eq!(p.company, "Acme");
        assert_eq!(p.sector, "Logistics");
        assert_eq!(p.country, "Egypt");
        assert!(!p.consent);
    }

    #[test]
    fn consent_defaults_to_false_when_missing() {
        let p: RespondentProfile = serde_json::from_str(
            r#"{"name":"Sam","company":"Acme","sector":"Retail","country":"Oman"}"#,
        )
        .unwrap();
        assert!(!p.consent);
    }
}
