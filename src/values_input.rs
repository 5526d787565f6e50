//! Headless field-value input
//!
//! Binds a field (and its search field) to the placeholder, filter and
//! fetch policies, following the input's lifecycle: mount, filter options
//! as the user types, rebind when the field changes.

use crate::config::{Config, FilterConfig};
use crate::error::Result;
use crate::fetch::{FetchTrigger, FieldValuesFetcher};
use crate::field::{FieldDescriptor, ValueRow};
use crate::filter::CandidateFilter;
use crate::placeholder::{Placeholder, select_placeholder};

#[derive(Debug)]
pub struct FieldValuesInput {
    field: FieldDescriptor,
    search_field: Option<FieldDescriptor>,
    placeholder: Placeholder,
    placeholder_override: Option<String>,
    filter: CandidateFilter,
    filter_config: FilterConfig,
    max_results: usize,
    trigger: FetchTrigger,
}

impl FieldValuesInput {
    /// Bind the input to `field`
    ///
    /// Fails when the field is in search mode without a search field. Fires
    /// the fetch trigger for list-mode fields.
    pub fn mount<F>(
        field: FieldDescriptor,
        search_field: Option<FieldDescriptor>,
        config: &Config,
        fetcher: &mut F,
    ) -> Result<Self>
    where
        F: FieldValuesFetcher + ?Sized,
    {
        let placeholder = select_placeholder(&field, search_field.as_ref())?;
        let filter = CandidateFilter::for_field(&field, &config.filter);
        let mut trigger = FetchTrigger::new();
        trigger.on_field(&field, fetcher);

        log::debug!(
            "Mounted input for field {} ({} mode, {:?} matching)",
            field.id(),
            field.value_mode(),
            filter.mode()
        );

        Ok(Self {
            field,
            search_field,
            placeholder,
            placeholder_override: None,
            filter,
            filter_config: config.filter,
            max_results: config.options.max_results,
            trigger,
        })
    }

    /// Use `text` instead of the computed placeholder; empty text is ignored
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.placeholder_override = (!text.is_empty()).then_some(text);
        self
    }

    pub fn placeholder(&self) -> String {
        match &self.placeholder_override {
            Some(text) => text.clone(),
            None => self.placeholder.to_string(),
        }
    }

    pub fn field(&self) -> &FieldDescriptor {
        &self.field
    }

    pub fn search_field(&self) -> Option<&FieldDescriptor> {
        self.search_field.as_ref()
    }

    pub fn filter_option<S: AsRef<str>>(&self, tokens: &[S], query: &str) -> bool {
        self.filter.matches(tokens, query)
    }

    /// Known values of the bound field that match `query`
    pub fn visible_options(&self, query: &str) -> Vec<&ValueRow> {
        self.filter
            .filter_rows(self.field.values(), query, self.max_results)
    }

    /// Rebind to a new or updated field
    ///
    /// On error the input keeps its previous binding.
    pub fn set_field<F>(
        &mut self,
        field: FieldDescriptor,
        search_field: Option<FieldDescriptor>,
        fetcher: &mut F,
    ) -> Result<()>
    where
        F: FieldValuesFetcher + ?Sized,
    {
        let placeholder = select_placeholder(&field, search_field.as_ref()).inspect_err(|e| {
            log::warn!("Rejected field {}: {}", field.id(), e);
        })?;

        self.filter = CandidateFilter::for_field(&field, &self.filter_config);
        self.trigger.on_field(&field, fetcher);
        self.placeholder = placeholder;
        self.field = field;
        self.search_field = search_field;
        Ok(())
    }
}

#[cfg(test)]
#[path = "values_input_tests.rs"]
mod values_input_tests;
