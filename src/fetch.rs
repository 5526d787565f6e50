//! Field value fetch trigger
//!
//! List-mode fields need their values loaded by the host. The trigger
//! decides when to ask: whenever a field becomes bound in list mode, either
//! a new field or the same field switching into list mode. It never fires
//! for free-form or search fields.

use crate::field::{FieldDescriptor, FieldId, ValueMode};

/// Host capability that loads a field's values
pub trait FieldValuesFetcher {
    fn fetch_field_values(&mut self, field_id: FieldId);
}

impl<F: FnMut(FieldId)> FieldValuesFetcher for F {
    fn fetch_field_values(&mut self, field_id: FieldId) {
        self(field_id)
    }
}

/// True when the field's values must be fetched before they can be listed
pub fn should_fetch(field: &FieldDescriptor) -> bool {
    field.value_mode() == ValueMode::List
}

#[derive(Debug, Default)]
pub struct FetchTrigger {
    // Bound field and whether it was bound in list mode
    current: Option<(FieldId, bool)>,
}

impl FetchTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field most recently passed to [`FetchTrigger::on_field`]
    pub fn current(&self) -> Option<FieldId> {
        self.current.map(|(id, _)| id)
    }

    /// Record `field` as the bound field, fetching its values if needed
    ///
    /// Returns whether the fetcher was called.
    pub fn on_field<F>(&mut self, field: &FieldDescriptor, fetcher: &mut F) -> bool
    where
        F: FieldValuesFetcher + ?Sized,
    {
        let listed = should_fetch(field);
        let already_fetched = self.current == Some((field.id(), true));
        self.current = Some((field.id(), listed));

        if listed && !already_fetched {
            log::debug!("Fetching values for field {}", field.id());
            fetcher.fetch_field_values(field.id());
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod fetch_tests;
