use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::value_row::ValueRow;
use crate::error::{FieldValuesError, Result};

/// Identity of a field in the metadata layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(pub u64);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a field's values are offered to the user
///
/// Serialized as the metadata layer's `has_field_values` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ValueMode {
    /// Free-form entry, no suggestions
    #[default]
    None,
    /// A bounded list of known values
    List,
    /// Remote search through a (possibly different) search field
    Search,
}

impl ValueMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueMode::None => "none",
            ValueMode::List => "list",
            ValueMode::Search => "search",
        }
    }
}

impl fmt::Display for ValueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueMode {
    type Err = FieldValuesError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(ValueMode::None),
            "list" => Ok(ValueMode::List),
            "search" => Ok(ValueMode::Search),
            other => Err(FieldValuesError::UnknownValueMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for ValueMode {
    type Error = FieldValuesError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Primitive kind of a field's values
///
/// Serialized as the metadata layer's `type/...` strings. Unrecognized
/// strings are kept verbatim in `Other` so they serialize back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BaseType {
    #[default]
    Text,
    Integer,
    BigInteger,
    Float,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Other(String),
}

impl BaseType {
    pub fn as_str(&self) -> &str {
        match self {
            BaseType::Text => "type/Text",
            BaseType::Integer => "type/Integer",
            BaseType::BigInteger => "type/BigInteger",
            BaseType::Float => "type/Float",
            BaseType::Decimal => "type/Decimal",
            BaseType::Boolean => "type/Boolean",
            BaseType::Date => "type/Date",
            BaseType::DateTime => "type/DateTime",
            BaseType::Other(raw) => raw,
        }
    }
}

impl From<String> for BaseType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "type/Text" => BaseType::Text,
            "type/Integer" => BaseType::Integer,
            "type/BigInteger" => BaseType::BigInteger,
            "type/Float" => BaseType::Float,
            "type/Decimal" => BaseType::Decimal,
            "type/Boolean" => BaseType::Boolean,
            "type/Date" => BaseType::Date,
            "type/DateTime" => BaseType::DateTime,
            _ => BaseType::Other(raw),
        }
    }
}

impl From<BaseType> for String {
    fn from(base_type: BaseType) -> Self {
        match base_type {
            BaseType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Semantic role of a field
///
/// Like [`BaseType`], unrecognized `type/...` strings survive in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SemanticType {
    PrimaryKey,
    ForeignKey,
    Category,
    Name,
    Other(String),
}

impl SemanticType {
    pub fn as_str(&self) -> &str {
        match self {
            SemanticType::PrimaryKey => "type/PK",
            SemanticType::ForeignKey => "type/FK",
            SemanticType::Category => "type/Category",
            SemanticType::Name => "type/Name",
            SemanticType::Other(raw) => raw,
        }
    }

    pub fn is_id(&self) -> bool {
        matches!(self, SemanticType::PrimaryKey | SemanticType::ForeignKey)
    }
}

impl From<String> for SemanticType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "type/PK" => SemanticType::PrimaryKey,
            "type/FK" => SemanticType::ForeignKey,
            "type/Category" => SemanticType::Category,
            "type/Name" => SemanticType::Name,
            _ => SemanticType::Other(raw),
        }
    }
}

impl From<SemanticType> for String {
    fn from(semantic_type: SemanticType) -> Self {
        match semantic_type {
            SemanticType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Metadata for the field an input is bound to
///
/// Descriptors are immutable values. Variants are derived with the
/// `with_*` methods, each of which returns a modified copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    id: FieldId,
    display_name: String,
    #[serde(default)]
    base_type: BaseType,
    #[serde(default, alias = "special_type")]
    semantic_type: Option<SemanticType>,
    #[serde(default, rename = "has_field_values")]
    value_mode: ValueMode,
    #[serde(default)]
    values: Vec<ValueRow>,
}

impl FieldDescriptor {
    pub fn new(id: FieldId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            base_type: BaseType::default(),
            semantic_type: None,
            value_mode: ValueMode::default(),
            values: Vec::new(),
        }
    }

    /// Parse a descriptor from the metadata layer's JSON shape
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_display_name(&self, display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..self.clone()
        }
    }

    pub fn with_base_type(&self, base_type: BaseType) -> Self {
        Self {
            base_type,
            ..self.clone()
        }
    }

    pub fn with_semantic_type(&self, semantic_type: Option<SemanticType>) -> Self {
        Self {
            semantic_type,
            ..self.clone()
        }
    }

    pub fn with_value_mode(&self, value_mode: ValueMode) -> Self {
        Self {
            value_mode,
            ..self.clone()
        }
    }

    pub fn with_values(&self, values: Vec<ValueRow>) -> Self {
        Self {
            values,
            ..self.clone()
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn base_type(&self) -> &BaseType {
        &self.base_type
    }

    pub fn semantic_type(&self) -> Option<&SemanticType> {
        self.semantic_type.as_ref()
    }

    pub fn value_mode(&self) -> ValueMode {
        self.value_mode
    }

    pub fn values(&self) -> &[ValueRow] {
        &self.values
    }

    /// True when the field identifies a record (primary or foreign key)
    pub fn is_id_like(&self) -> bool {
        self.semantic_type.as_ref().is_some_and(SemanticType::is_id)
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod descriptor_tests;
