//! Test helpers shared across transync crates.

pub mod locales;
pub mod schema;

pub use locales::LocaleFixture;
pub use schema::{animal_schema, sample_schema};
