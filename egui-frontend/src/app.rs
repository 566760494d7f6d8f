//! # App Module
//!
//! This module contains the demo application that hosts the money input
//! field component.
//!
//! ## Responsibilities:
//! - Application state (the hosted field and the last reported amount)
//! - Reading the externally supplied starting amount at initialization
//! - Logging amount changes as they are derived from the field

use anyhow::Context;
use eframe::egui;
use log::info;

use crate::ui::MoneyInputField;

/// Environment variable holding the starting amount in minor units (cents)
const INITIAL_CENTS_VAR: &str = "MONEY_INPUT_INITIAL_CENTS";

pub struct MoneyInputApp {
    money_input: MoneyInputField,
    last_amount: i64,
}

impl MoneyInputApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("Initializing MoneyInputApp");

        // The field is seeded from an externally supplied minor-units
        // value, defaulting to zero when none is given.
        let initial_cents = match std::env::var(INITIAL_CENTS_VAR) {
            Ok(raw) => raw
                .parse::<i64>()
                .with_context(|| format!("invalid {} value: {}", INITIAL_CENTS_VAR, raw))?,
            Err(_) => 0,
        };

        Ok(Self {
            money_input: MoneyInputField::new(initial_cents),
            last_amount: initial_cents,
        })
    }
}

impl eframe::App for MoneyInputApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);

                ui.label(egui::RichText::new("💵 Money Input")
                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                    .strong());

                ui.add_space(20.0);

                // Amount input with static dollar sign
                ui.horizontal(|ui| {
                    ui.add_space(130.0);
                    ui.label(egui::RichText::new("$")
                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional)));
                    self.money_input.show(ui);
                });

                ui.add_space(10.0);

                ui.label(egui::RichText::new(
                    format!("{} cents", self.money_input.amount_in_minor_units()))
                    .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                    .color(egui::Color32::from_rgb(80, 80, 80)));
            });
        });

        let amount = self.money_input.amount_in_minor_units();
        if amount != self.last_amount {
            info!("Amount changed from {} to {}", self.last_amount, amount);
            self.last_amount = amount;
        }
    }
}
