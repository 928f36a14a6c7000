//! In-memory form host
//!
//! Stands in for a page: input values are set up front, and everything the
//! calculator writes back is recorded for inspection.

use std::collections::BTreeMap;

use tally_ports::{FieldId, FormSurface};

#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    values: BTreeMap<FieldId, String>,
    text: BTreeMap<FieldId, String>,
    html: BTreeMap<FieldId, String>,
    alerts: Vec<String>,
    focused: Option<FieldId>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form with the three inputs filled in
    pub fn with_inputs(principal: &str, rate: &str, years: &str) -> Self {
        let mut form = Self::new();
        form.set_value(FieldId::Principal, principal);
        form.set_value(FieldId::Rate, rate);
        form.set_value(FieldId::Years, years);
        form
    }

    /// Simulate the user editing an input
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn remove_value(&mut self, field: FieldId) {
        self.values.remove(&field);
    }

    pub fn text(&self, field: FieldId) -> Option<&str> {
        self.text.get(&field).map(String::as_str)
    }

    pub fn html(&self, field: FieldId) -> Option<&str> {
        self.html.get(&field).map(String::as_str)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }
}

impl FormSurface for MemoryForm {
    fn value(&self, field: FieldId) -> Option<String> {
        self.values.get(&field).cloned()
    }

    fn set_inner_text(&mut self, field: FieldId, text: &str) {
        self.text.insert(field, text.to_string());
    }

    fn set_inner_html(&mut self, field: FieldId, html: &str) {
        self.html.insert(field, html.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn focus(&mut self, field: FieldId) {
        self.focused = Some(field);
    }
}
