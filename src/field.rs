//! Field metadata
//!
//! Immutable descriptors for the field an input is bound to, plus the value
//! rows offered as candidates in list mode.

mod descriptor;
mod value_row;

pub use descriptor::{BaseType, FieldDescriptor, FieldId, SemanticType, ValueMode};
pub use value_row::ValueRow;
