//! Profile: the user's self-reported interests, strengths and preferences for
//! a single session, built from raw form input by [`builder::ProfileBuilder`].

pub mod builder;
pub mod handlers;
pub mod models;

pub use builder::{ProfileBuilder, ValidationError};
pub use models::{FormInput, LocationPreference, Preferences, Profile};
