//! # Money Input Field
//!
//! This module contains the reusable money input field component.
//!
//! ## Responsibilities:
//! - Own the displayed text for one field instance
//! - Run the formatter transition on every edit, within the same frame
//! - Expose the canonical amount in minor units to the host
//!
//! ## Purpose:
//! This component keeps the on-screen text human-friendly while the user
//! types (grouping, fraction truncation, trailing-punctuation
//! preservation) and hands the host an integer cents value it can consume
//! directly.

use eframe::egui;
use log::debug;
use shared::{FormatterConfig, MoneyFormatter};

/// Text field whose content is kept in canonical money form.
///
/// The displayed string is the source of truth while editing; the
/// minor-units amount is re-derived from it after every accepted edit.
pub struct MoneyInputField {
    formatter: MoneyFormatter,
    displayed_text: String,
    amount_in_minor_units: i64,
}

impl MoneyInputField {
    /// Create a field with the reference formatting behavior, seeded from
    /// an externally supplied minor-units amount.
    pub fn new(initial_minor_units: i64) -> Self {
        Self::with_config(initial_minor_units, FormatterConfig::default())
    }

    /// Create a field with a custom formatting configuration.
    pub fn with_config(initial_minor_units: i64, config: FormatterConfig) -> Self {
        let formatter = MoneyFormatter::new(config);
        // Mount-time rendering uses the fixed two-digit form ("1.50") and
        // is injected directly, not run through the transition.
        let displayed_text = formatter.initial_display(initial_minor_units);
        Self {
            formatter,
            displayed_text,
            amount_in_minor_units: initial_minor_units,
        }
    }

    /// Canonical amount in minor units (e.g. cents) for the current text.
    pub fn amount_in_minor_units(&self) -> i64 {
        self.amount_in_minor_units
    }

    /// The text currently shown in the field.
    pub fn displayed_text(&self) -> &str {
        &self.displayed_text
    }

    /// Render the field and process any edit made this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let previous = self.displayed_text.clone();

        let response = ui.add(
            egui::TextEdit::singleline(&mut self.displayed_text)
                .hint_text("Enter amount")
                .desired_width(120.0)
                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional)),
        );

        if response.changed() {
            self.normalize_after_edit(&previous);
        }

        response
    }

    /// Run the transition against the pre-edit text and re-derive the
    /// amount; called synchronously whenever the widget reports a change.
    fn normalize_after_edit(&mut self, previous: &str) {
        self.displayed_text = self.formatter.transition(previous, &self.displayed_text);
        self.amount_in_minor_units = self.formatter.derive_minor_units(&self.displayed_text);
        debug!(
            "Money input now {:?} ({} minor units)",
            self.displayed_text, self.amount_in_minor_units
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_initializes_from_minor_units() {
        let field = MoneyInputField::new(150);
        assert_eq!(field.displayed_text(), "1.50");
        assert_eq!(field.amount_in_minor_units(), 150);
    }

    #[test]
    fn test_edit_normalizes_text_and_amount() {
        let mut field = MoneyInputField::new(0);
        let previous = field.displayed_text.clone();

        // Simulate the TextEdit replacing the content with a long fraction
        field.displayed_text = "12.3456".to_string();
        field.normalize_after_edit(&previous);

        assert_eq!(field.displayed_text(), "12.34");
        assert_eq!(field.amount_in_minor_units(), 1234);
    }

    #[test]
    fn test_rejected_edit_keeps_previous_text() {
        let mut field = MoneyInputField::new(500);
        let previous = field.displayed_text.clone();

        field.displayed_text = "..".to_string();
        field.normalize_after_edit(&previous);

        assert_eq!(field.displayed_text(), "5.00");
        assert_eq!(field.amount_in_minor_units(), 500);
    }

    #[test]
    fn test_clearing_the_field_resets_to_zero() {
        let mut field = MoneyInputField::new(150);
        let previous = field.displayed_text.clone();

        field.displayed_text = String::new();
        field.normalize_after_edit(&previous);

        assert_eq!(field.displayed_text(), "0");
        assert_eq!(field.amount_in_minor_units(), 0);
    }
}
