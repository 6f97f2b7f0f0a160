use serde::{Deserialize, Serialize};

use crate::catalog::ProgramType;

/// Location slot of the preferences. `Any` is the "no constraint" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LocationPreference {
    #[default]
    Any,
    /// Lower-cased, trimmed location fragment.
    Within(String),
}

impl LocationPreference {
    pub fn as_filter(&self) -> Option<&str> {
        match self {
            LocationPreference::Any => None,
            LocationPreference::Within(loc) => Some(loc.as_str()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub location: LocationPreference,
    /// `None` means any program type.
    pub program_type: Option<ProgramType>,
}

impl Preferences {
    pub fn is_unconstrained(&self) -> bool {
        self.location == LocationPreference::Any && self.program_type.is_none()
    }

    /// Human-readable summary, e.g. `"location: california; program type: any"`.
    pub fn describe(&self) -> String {
        let location = self.location.as_filter().unwrap_or("any");
        let program_type = self.program_type.map(|t| t.as_str()).unwrap_or("any");
        format!("location: {location}; program type: {program_type}")
    }
}

/// A validated profile. Only constructible through `ProfileBuilder`, so
/// `interests` and `strengths` are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub(crate) interests: Vec<String>,
    pub(crate) strengths: Vec<String>,
    pub(crate) preferences: Preferences,
    // Display-only.
    pub(crate) name: Option<String>,
    pub(crate) email: Option<String>,
}

impl Profile {
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }
}

/// Raw form fields exactly as submitted. Kept on the session so the front end
/// can re-populate the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub interests_input: String,
    #[serde(default)]
    pub strengths_input: String,
    /// Deprecated single free-text preference, e.g. `"California, postgraduate"`.
    /// Only consulted when both explicit slots are empty.
    #[serde(default)]
    pub preferences_input: String,
    #[serde(default)]
    pub location_input: String,
    #[serde(default)]
    pub program_type_input: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
