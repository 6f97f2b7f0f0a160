//! Validating builder that turns raw form text into a [`Profile`].
//!
//! Comma-separated fields are split, trimmed, lower-cased and deduplicated
//! (first occurrence wins). Incomplete submissions are rejected here so no
//! other module ever sees a profile without interests or strengths.

use thiserror::Error;

use crate::catalog::ProgramType;
use crate::profile::models::{FormInput, LocationPreference, Preferences, Profile};

/// Sentinel accepted in either preference slot to mean "no constraint".
pub const ANY_SENTINEL: &str = "any";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter valid interests and strengths.")]
    MissingInterestsOrStrengths,

    #[error("Unknown program type '{given}'. Expected one of: {expected}, or 'any'.")]
    UnknownProgramType { given: String, expected: String },
}

#[derive(Debug, Default, Clone)]
pub struct ProfileBuilder {
    interests: Vec<String>,
    strengths: Vec<String>,
    location: Option<String>,
    program_type: Option<String>,
    legacy_preferences: Option<String>,
    name: Option<String>,
    email: Option<String>,
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a profile straight from the submitted form.
    pub fn from_form(form: &FormInput) -> Result<Profile, ValidationError> {
        let mut builder = Self::new()
            .interests(&form.interests_input)
            .strengths(&form.strengths_input)
            .location(&form.location_input)
            .program_type(&form.program_type_input)
            .legacy_preferences(&form.preferences_input);
        if let Some(name) = &form.name {
            builder = builder.name(name);
        }
        if let Some(email) = &form.email {
            builder = builder.email(email);
        }
        builder.build()
    }

    pub fn interests(mut self, raw: &str) -> Self {
        self.interests = split_tokens(raw);
        self
    }

    pub fn strengths(mut self, raw: &str) -> Self {
        self.strengths = split_tokens(raw);
        self
    }

    pub fn location(mut self, raw: &str) -> Self {
        self.location = non_empty(raw);
        self
    }

    pub fn program_type(mut self, raw: &str) -> Self {
        self.program_type = non_empty(raw);
        self
    }

    /// Single free-text preference (deprecated form). Ignored when either
    /// explicit slot is set.
    pub fn legacy_preferences(mut self, raw: &str) -> Self {
        self.legacy_preferences = non_empty(raw);
        self
    }

    pub fn name(mut self, raw: &str) -> Self {
        self.name = non_empty(raw).map(|_| raw.trim().to_string());
        self
    }

    pub fn email(mut self, raw: &str) -> Self {
        self.email = non_empty(raw).map(|_| raw.trim().to_string());
        self
    }

    pub fn build(self) -> Result<Profile, ValidationError> {
        if self.interests.is_empty() || self.strengths.is_empty() {
            return Err(ValidationError::MissingInterestsOrStrengths);
        }

        let preferences = if self.location.is_some() || self.program_type.is_some() {
            Preferences {
                location: parse_location(self.location.as_deref()),
                program_type: parse_program_type(self.program_type.as_deref())?,
            }
        } else if let Some(text) = self.legacy_preferences.as_deref() {
            parse_legacy_preferences(text)?
        } else {
            Preferences::default()
        };

        Ok(Profile {
            interests: self.interests,
            strengths: self.strengths,
            preferences,
            name: self.name,
            email: self.email,
        })
    }
}

/// Splits a comma-separated field into lower-case tokens.
pub fn split_tokens(raw: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in raw.split(',') {
        let token = token.trim().to_lowercase();
        if !token.is_empty() && !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

fn is_any(value: &str) -> bool {
    value.eq_ignore_ascii_case(ANY_SENTINEL)
}

fn parse_location(value: Option<&str>) -> LocationPreference {
    match value {
        Some(v) if !is_any(v) => LocationPreference::Within(v.to_string()),
        _ => LocationPreference::Any,
    }
}

fn parse_program_type(value: Option<&str>) -> Result<Option<ProgramType>, ValidationError> {
    match value {
        None => Ok(None),
        Some(v) if is_any(v) => Ok(None),
        Some(v) => v
            .parse::<ProgramType>()
            .map(Some)
            .map_err(|e| ValidationError::UnknownProgramType {
                given: e.0,
                expected: ProgramType::valid_values(),
            }),
    }
}

/// Degree words that are not catalog program types. Seen as the last token of
/// the free-text preference they are rejected rather than read as a place.
const UNSUPPORTED_PROGRAM_TYPES: &[&str] = &[
    "phd",
    "doctorate",
    "doctoral",
    "mba",
    "masters",
    "bachelor",
    "bachelors",
    "associate",
    "diploma",
    "graduate",
];

/// Reads `"<location>, <program type>"`. The last comma-separated token is
/// the program type when it names one, is `any`, or is a known degree word
/// (rejected). Anything else stays part of the location, so `"berkeley, ca"`
/// is a single location.
fn parse_legacy_preferences(text: &str) -> Result<Preferences, ValidationError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let (location_parts, program_type) = match parts.split_last() {
        Some((last, rest)) if is_any(last) => (rest, None),
        Some((last, rest)) => match last.parse::<ProgramType>() {
            Ok(t) => (rest, Some(t)),
            Err(e) if UNSUPPORTED_PROGRAM_TYPES.contains(&e.0.as_str()) => {
                return Err(ValidationError::UnknownProgramType {
                    given: e.0,
                    expected: ProgramType::valid_values(),
                });
            }
            Err(_) => (parts.as_slice(), None),
        },
        None => (parts.as_slice(), None),
    };

    let location = location_parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ");

    Ok(Preferences {
        location: parse_location(Some(location.as_str()).filter(|l| !l.is_empty())),
        program_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ProfileBuilder {
        ProfileBuilder::new()
            .interests("AI, Data Science")
            .strengths("strong in math")
    }

    #[test]
    fn test_tokens_are_trimmed_lowercased_and_deduplicated() {
        assert_eq!(
            split_tokens(" AI , Web Development,,ai,  "),
            vec!["ai".to_string(), "web development".to_string()]
        );
    }

    #[test]
    fn test_empty_interests_rejected() {
        let err = ProfileBuilder::new()
            .interests(" , ")
            .strengths("math")
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingInterestsOrStrengths);
        assert_eq!(err.to_string(), "Please enter valid interests and strengths.");
    }

    #[test]
    fn test_empty_strengths_rejected() {
        let err = ProfileBuilder::new().interests("ai").build().unwrap_err();
        assert_eq!(err, ValidationError::MissingInterestsOrStrengths);
    }

    #[test]
    fn test_no_preferences_means_unconstrained() {
        let profile = base().build().unwrap();
        assert!(profile.preferences().is_unconstrained());
        assert_eq!(profile.interests(), ["ai", "data science"]);
    }

    #[test]
    fn test_explicit_slots_are_normalized() {
        let profile = base()
            .location("  Berkeley, CA ")
            .program_type("Certificate")
            .build()
            .unwrap();
        assert_eq!(
            profile.preferences().location,
            LocationPreference::Within("berkeley, ca".to_string())
        );
        assert_eq!(profile.preferences().program_type, Some(ProgramType::Certificate));
    }

    #[test]
    fn test_any_sentinel_clears_slot() {
        let profile = base().location("ANY").program_type("any").build().unwrap();
        assert!(profile.preferences().is_unconstrained());
    }

    #[test]
    fn test_unknown_program_type_rejected() {
        let err = base().program_type("PhD").build().unwrap_err();
        match &err {
            ValidationError::UnknownProgramType { given, expected } => {
                assert_eq!(given, "phd");
                assert!(expected.contains("certificate"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("'phd'"));
    }

    #[test]
    fn test_legacy_preferences_split_location_and_type() {
        let profile = base()
            .legacy_preferences("California, postgraduate")
            .build()
            .unwrap();
        assert_eq!(
            profile.preferences().location,
            LocationPreference::Within("california".to_string())
        );
        assert_eq!(profile.preferences().program_type, Some(ProgramType::Postgraduate));
    }

    #[test]
    fn test_legacy_preferences_keep_comma_in_location() {
        let profile = base().legacy_preferences("Berkeley, CA").build().unwrap();
        assert_eq!(
            profile.preferences().location,
            LocationPreference::Within("berkeley, ca".to_string())
        );
        assert_eq!(profile.preferences().program_type, None);
    }

    #[test]
    fn test_legacy_preferences_type_only() {
        let profile = base().legacy_preferences("bootcamp").build().unwrap();
        assert_eq!(profile.preferences().location, LocationPreference::Any);
        assert_eq!(profile.preferences().program_type, Some(ProgramType::Bootcamp));
    }

    #[test]
    fn test_legacy_preferences_any_type_drops_constraint() {
        let profile = base()
            .legacy_preferences("California, any")
            .build()
            .unwrap();
        assert_eq!(
            profile.preferences().location,
            LocationPreference::Within("california".to_string())
        );
        assert_eq!(profile.preferences().program_type, None);

        let matches = crate::matching::match_programs(&profile, crate::catalog::catalog());
        assert!(matches.iter().any(|p| p.program == "Master in Data Science"));
    }

    #[test]
    fn test_legacy_preferences_any_alone_is_unconstrained() {
        let profile = base().legacy_preferences("ANY").build().unwrap();
        assert!(profile.preferences().is_unconstrained());
    }

    #[test]
    fn test_legacy_preferences_reject_unsupported_degree() {
        let err = base()
            .legacy_preferences("California, PhD")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownProgramType {
                given: "phd".to_string(),
                expected: ProgramType::valid_values(),
            }
        );
    }

    #[test]
    fn test_explicit_slots_win_over_legacy_text() {
        let profile = base()
            .legacy_preferences("new york, undergraduate")
            .location("california")
            .build()
            .unwrap();
        assert_eq!(
            profile.preferences().location,
            LocationPreference::Within("california".to_string())
        );
        assert_eq!(profile.preferences().program_type, None);
    }

    #[test]
    fn test_from_form_keeps_display_fields_verbatim() {
        let form = FormInput {
            interests_input: "AI".to_string(),
            strengths_input: "Good Communicator".to_string(),
            name: Some("  Ada Lovelace ".to_string()),
            email: Some("   ".to_string()),
            ..FormInput::default()
        };
        let profile = ProfileBuilder::from_form(&form).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(profile.email, None);
        assert_eq!(profile.strengths(), ["good communicator"]);
    }
}
