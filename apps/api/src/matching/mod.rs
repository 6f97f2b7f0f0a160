//! Profile matcher: filters the catalog down to programs a profile qualifies for.
//!
//! Three gates, applied per entry in catalog order:
//! 1. interest: some profile interest is an exact catalog keyword
//! 2. location (if set): preference is a substring of the entry's location
//! 3. program type (if set): preference equals the entry's type
//!
//! No ranking. An empty result is a normal outcome, not an error.

pub mod handlers;

use crate::catalog::ProgramRecord;
use crate::profile::Profile;

pub const NO_MATCHES_MESSAGE: &str = "No matching programs found. Try adjusting your profile.";

pub fn match_programs<'a>(profile: &Profile, catalog: &'a [ProgramRecord]) -> Vec<&'a ProgramRecord> {
    let location = profile.preferences().location.as_filter();
    let program_type = profile.preferences().program_type;

    catalog
        .iter()
        .filter(|p| profile.interests().iter().any(|i| p.has_keyword(i)))
        .filter(|p| location.map_or(true, |loc| p.location.contains(loc)))
        .filter(|p| program_type.map_or(true, |t| p.program_type == t))
        .collect()
}
