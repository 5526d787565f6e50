//! Placeholder and candidate-filtering policy for field-value inputs
//!
//! Given a field descriptor from the metadata layer, this crate decides
//! which hint an empty input shows, whether a candidate value stays visible
//! for the typed query, and when the host should fetch the field's values.

pub mod config;
pub mod error;
pub mod fetch;
pub mod field;
pub mod filter;
pub mod placeholder;
pub mod values_input;


pub use error::{FieldValuesError, Result};
pub use fetch::{FetchTrigger, FieldValuesFetcher, should_fetch};
pub use field::{BaseType, FieldDescriptor, FieldId, SemanticType, ValueMode, ValueRow};
pub use filter::{CandidateFilter, MatchMode};
pub use placeholder::{Placeholder, select_placeholder};
pub use values_input::FieldValuesInput;
