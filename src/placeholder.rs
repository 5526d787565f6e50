//! Placeholder selection
//!
//! Picks the hint shown in an empty field-value input from the field's
//! value mode, whether it is id-like, and the field used for searching.

use std::fmt;

use crate::error::{FieldValuesError, Result};
use crate::field::{FieldDescriptor, ValueMode};

/// Hint text for a field-value input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    EnterId,
    EnterText,
    SearchList,
    SearchBy { name: String },
    SearchByOrEnterId { name: String },
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::EnterId => f.write_str("Enter an ID"),
            Placeholder::EnterText => f.write_str("Enter some text"),
            Placeholder::SearchList => f.write_str("Search the list"),
            Placeholder::SearchBy { name } => write!(f, "Search by {}", name),
            Placeholder::SearchByOrEnterId { name } => {
                write!(f, "Search by {} or enter an ID", name)
            }
        }
    }
}

/// Select the placeholder for `field`
///
/// `search_field` is required in search mode and ignored otherwise. When an
/// id-like field searches through itself, the "or enter an ID" suffix is
/// dropped since searching already covers its values.
pub fn select_placeholder(
    field: &FieldDescriptor,
    search_field: Option<&FieldDescriptor>,
) -> Result<Placeholder> {
    let placeholder = match field.value_mode() {
        ValueMode::None if field.is_id_like() => Placeholder::EnterId,
        ValueMode::None => Placeholder::EnterText,
        ValueMode::List => Placeholder::SearchList,
        ValueMode::Search => {
            let search_field = search_field
                .ok_or(FieldValuesError::MissingSearchField { field: field.id() })?;
            let name = search_field.display_name().to_string();

            if field.is_id_like() && !is_self_search(field, search_field) {
                Placeholder::SearchByOrEnterId { name }
            } else {
                Placeholder::SearchBy { name }
            }
        }
    };

    Ok(placeholder)
}

fn is_self_search(field: &FieldDescriptor, search_field: &FieldDescriptor) -> bool {
    field.id() == search_field.id()
}

#[cfg(test)]
#[path = "placeholder_tests.rs"]
mod placeholder_tests;
