//! Dashboard panel with record counts, navigation cards, and activity log.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{CREDIT_CARD, FILE_TEXT, USERS, USERS_THREE};

use super::app::{ActivityLog, LogLevel, Panel};
use super::components::{SpinnerSize, colors, dashboard_card, loading_indicator, stat_card};
use crate::dataset::DatasetCounts;

/// Show the dashboard panel.
///
/// `counts` is `None` while data is loading. Returns `Some(panel)` if
/// navigation is requested.
pub fn show(ui: &mut Ui, counts: Option<DatasetCounts>, log: &ActivityLog) -> Option<Panel> {
    let mut next_panel = None;

    ui.vertical_centered(|ui| {
        ui.add_space(30.0);

        ui.label(RichText::new("Business Dashboard").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("Customers, billing and staff at a glance").size(14.0).weak());

        ui.add_space(30.0);

        // Stat cards row
        ui.horizontal(|ui| {
            let available = ui.available_width();
            let start_offset = ((available - 720.0) / 2.0).max(0.0);
            ui.add_space(start_offset);

            let value = |n: Option<usize>| n.map_or_else(|| "-".to_string(), |n| n.to_string());
            stat_card(ui, "Customers", &value(counts.map(|c| c.customers)), "Accounts on file");
            stat_card(ui, "Invoices", &value(counts.map(|c| c.invoices)), "Issued invoices");
            stat_card(ui, "Payments", &value(counts.map(|c| c.payments)), "Received");
            stat_card(ui, "Employees", &value(counts.map(|c| c.employees)), "Staff records");
        });

        if counts.is_none() {
            loading_indicator(ui, SpinnerSize::Large);
        }

        ui.add_space(30.0);

        // Navigation cards row
        let available = ui.available_width();
        let num_cards = 4.0;
        let spacing = 30.0;
        let total_spacing = spacing * (num_cards - 1.0);
        let card_width = ((available - total_spacing) / num_cards).clamp(150.0, 250.0);
        let card_height = card_width * 0.75;
        let card_size = egui::vec2(card_width, card_height);
        let total_width = card_width * num_cards + total_spacing;
        let start_offset = ((available - total_width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(start_offset);

            if dashboard_card(ui, "Customers", "Accounts and contacts", USERS, card_size).clicked() {
                next_panel = Some(Panel::Customers);
            }

            ui.add_space(spacing);

            if dashboard_card(ui, "Invoices", "Billing and due dates", FILE_TEXT, card_size).clicked() {
                next_panel = Some(Panel::Invoices);
            }

            ui.add_space(spacing);

            if dashboard_card(ui, "Payments", "Received payments", CREDIT_CARD, card_size).clicked() {
                next_panel = Some(Panel::Payments);
            }

            ui.add_space(spacing);

            if dashboard_card(ui, "Staff", "Employee records", USERS_THREE, card_size).clicked() {
                next_panel = Some(Panel::Staff);
            }
        });

        ui.add_space(30.0);
    });

    // Recent Activity
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::symmetric(10, 0))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Recent Activity").strong());
            ui.add_space(10.0);

            ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                if log.is_empty() {
                    ui.label(RichText::new("No recent activity").weak());
                    return;
                }
                for entry in log.recent(10) {
                    let color = match entry.level {
                        LogLevel::Info => Color32::GRAY,
                        LogLevel::Success => colors::SUCCESS,
                        LogLevel::Warning => colors::WARNING,
                        LogLevel::Error => colors::ERROR,
                    };

                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                .small()
                                .color(Color32::DARK_GRAY),
                        );
                        ui.label(RichText::new(&entry.message).color(color));
                    });
                }
            });
        });

    next_panel
}
