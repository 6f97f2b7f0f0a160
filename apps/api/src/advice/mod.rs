//! Advice Generator — boundary to the external text-completion service.
//!
//! `AppState` holds an `Arc<dyn AdviceGenerator>`; the default backend is
//! `LlmAdviceGenerator`. Handlers call [`advise`], which never fails: any
//! service error is rendered as an `Error: ...` string for the user.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::advice::prompts::{ADVICE_PROMPT_TEMPLATE, ADVICE_SYSTEM, NO_PROGRAMS_LINE};
use crate::catalog::ProgramRecord;
use crate::llm_client::{LlmClient, LlmError};
use crate::profile::Profile;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Llm(#[from] LlmError),
}

#[async_trait]
pub trait AdviceGenerator: Send + Sync {
    async fn generate_advice(
        &self,
        profile: &Profile,
        matches: &[&ProgramRecord],
    ) -> Result<String, ServiceError>;

    /// Short label for logs and responses, e.g. `"llm"`.
    fn backend(&self) -> &'static str;
}

/// Default backend: one prompt to the completion API per request, no caching.
pub struct LlmAdviceGenerator(pub LlmClient);

#[async_trait]
impl AdviceGenerator for LlmAdviceGenerator {
    async fn generate_advice(
        &self,
        profile: &Profile,
        matches: &[&ProgramRecord],
    ) -> Result<String, ServiceError> {
        let prompt = build_prompt(profile, matches);
        Ok(self.0.complete(&prompt, ADVICE_SYSTEM).await?)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Advice text or the rendered error, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub text: String,
    pub is_error: bool,
}

/// Runs the generator and degrades any failure to a visible error string.
pub async fn advise(
    generator: &dyn AdviceGenerator,
    profile: &Profile,
    matches: &[&ProgramRecord],
) -> Advice {
    match generator.generate_advice(profile, matches).await {
        Ok(text) => {
            info!(
                backend = generator.backend(),
                matches = matches.len(),
                "Advice generated"
            );
            Advice {
                text,
                is_error: false,
            }
        }
        Err(e) => {
            warn!(backend = generator.backend(), "Advice generation failed: {e}");
            Advice {
                text: format!("Error: {e}"),
                is_error: true,
            }
        }
    }
}

/// Builds the natural-language prompt from the profile and its matches.
pub fn build_prompt(profile: &Profile, matches: &[&ProgramRecord]) -> String {
    let programs = if matches.is_empty() {
        NO_PROGRAMS_LINE.to_string()
    } else {
        matches
            .iter()
            .map(|p| {
                format!(
                    "- {} at {} in {}",
                    p.program,
                    p.university,
                    p.display_location()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    render_template(
        ADVICE_PROMPT_TEMPLATE,
        &[
            ("interests", profile.interests().join(", ")),
            ("strengths", profile.strengths().join(", ")),
            ("preferences", profile.preferences().describe()),
            ("programs", programs),
        ],
    )
}

/// Fills `{name}` placeholders in one pass over the template. Substituted
/// values are never scanned again, so user text containing braces is kept
/// verbatim. Unknown placeholders are left as written.
fn render_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, v)| (v, close))
        });
        match value {
            Some((v, close)) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
