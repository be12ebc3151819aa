//! Main application UI.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc;

use chrono::{DateTime, Local};
use eframe::egui::{self, Align, Layout};

use crate::config::AppConfig;
use crate::dataset::{self, Dataset};
use crate::export;
use crate::table::TableOptions;

use super::components::{SpinnerSize, colors};
use super::theme::{ThemeMode, ThemeStore};
use super::{CustomersPanel, InvoicesPanel, PaymentsPanel, StaffPanel, dashboard};

/// Entries kept in the activity log.
const MAX_LOG_ENTRIES: usize = 100;

const TOGGLE_THEME: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::T);

/// Current panel being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Dashboard,
    Customers,
    Invoices,
    Payments,
    Staff,
}

impl Panel {
    /// Get the display name for the panel.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Customers => "Customers",
            Panel::Invoices => "Invoices",
            Panel::Payments => "Payments",
            Panel::Staff => "Staff",
        }
    }
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Bounded in-app activity log, newest last.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) {
        self.entries.push_back(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });
        while self.entries.len() > MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Up to `n` entries, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev().take(n)
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }
}

/// Main application state.
pub struct MainApp {
    config: AppConfig,
    theme: ThemeStore,

    // UI navigation
    current_panel: Panel,

    // Data
    dataset: Dataset,
    load_rx: Option<mpsc::Receiver<Result<Dataset, String>>>,

    // Pages
    customers: CustomersPanel,
    invoices: InvoicesPanel,
    payments: PaymentsPanel,
    staff: StaffPanel,

    log: ActivityLog,
}

impl MainApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let options = TableOptions::from(&config.table);
        let theme = ThemeStore::new(config.ui.dark_mode);

        let mut app = Self {
            config,
            theme,
            current_panel: Panel::default(),
            dataset: Dataset::default(),
            load_rx: None,
            customers: CustomersPanel::new(&options),
            invoices: InvoicesPanel::new(&options),
            payments: PaymentsPanel::new(&options),
            staff: StaffPanel::new(&options),
            log: ActivityLog::default(),
        };

        app.reload();
        app
    }

    fn is_loading(&self) -> bool {
        self.load_rx.is_some()
    }

    /// Start loading the dataset in the background.
    fn reload(&mut self) {
        if self.is_loading() {
            return;
        }
        let fixtures: Option<PathBuf> = self.config.data.fixtures.clone();
        self.load_rx = Some(dataset::spawn_load(fixtures));
        self.log.push(LogLevel::Info, "Loading data...");
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        let Some(rx) = &self.load_rx else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(dataset)) => {
                let counts = dataset.counts();
                self.dataset = dataset;
                self.log.push(
                    LogLevel::Success,
                    format!(
                        "Loaded {} customers, {} invoices, {} payments, {} employees",
                        counts.customers, counts.invoices, counts.payments, counts.employees
                    ),
                );
                self.load_rx = None;
            }
            Ok(Err(e)) => {
                self.log.push(LogLevel::Error, format!("Failed to load data: {e}"));
                self.load_rx = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                tracing::error!("Data loader exited without a result");
                self.log.push(LogLevel::Error, "Data loader stopped unexpectedly");
                self.load_rx = None;
            }
        }
    }

    /// Export the table on the current panel.
    fn export_current(&mut self) {
        let result = match self.current_panel {
            Panel::Dashboard => return,
            Panel::Customers => {
                export::export_with_dialog(&self.customers.table, &self.dataset.customers, "customers", "Customers")
            }
            Panel::Invoices => {
                export::export_with_dialog(&self.invoices.table, &self.dataset.invoices, "invoices", "Invoices")
            }
            Panel::Payments => {
                export::export_with_dialog(&self.payments.table, &self.dataset.payments, "payments", "Payments")
            }
            Panel::Staff => {
                export::export_with_dialog(&self.staff.table, &self.dataset.employees, "employees", "Employees")
            }
        };

        match result {
            Ok(Some((path, rows))) => {
                self.log
                    .push(LogLevel::Success, format!("Exported {rows} rows to {}", path.display()));
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.log.push(LogLevel::Error, format!("Export failed: {e}"));
            }
        }
    }

    /// Render menu bar.
    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let can_export = self.current_panel != Panel::Dashboard && !self.is_loading();
                    if ui
                        .add_enabled(can_export, egui::Button::new("Export to Excel..."))
                        .clicked()
                    {
                        self.export_current();
                        ui.close();
                    }
                    if ui
                        .add_enabled(!self.is_loading(), egui::Button::new("Reload Data"))
                        .clicked()
                    {
                        self.reload();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    for mode in [ThemeMode::Light, ThemeMode::Dark] {
                        if ui
                            .selectable_label(self.theme.mode() == mode, format!("{} Theme", mode.name()))
                            .clicked()
                        {
                            self.theme.set(mode);
                            ui.close();
                        }
                    }
                });
                ui.menu_button("Go", |ui| {
                    for panel in [
                        Panel::Dashboard,
                        Panel::Customers,
                        Panel::Invoices,
                        Panel::Payments,
                        Panel::Staff,
                    ] {
                        if ui
                            .selectable_label(self.current_panel == panel, panel.name())
                            .clicked()
                        {
                            self.current_panel = panel;
                            ui.close();
                        }
                    }
                });
            });
        });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if self.is_loading() {
                        ui.add(egui::Spinner::new().size(SpinnerSize::Small.points()));
                        ui.colored_label(colors::WARNING, "Loading data...");
                    } else if let Some(entry) = self.log.latest() {
                        let color = match entry.level {
                            LogLevel::Info => colors::NEUTRAL,
                            LogLevel::Success => colors::SUCCESS,
                            LogLevel::Warning => colors::WARNING,
                            LogLevel::Error => colors::ERROR,
                        };
                        ui.colored_label(color, &entry.message);
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!("{} | {} theme", self.current_panel.name(), self.theme.mode().name()));
                    });
                });
            });
    }
}

impl eframe::App for MainApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        // Request repaint while loading
        if self.is_loading() {
            ctx.request_repaint();
        }

        if ctx.input_mut(|i| i.consume_shortcut(&TOGGLE_THEME)) {
            self.theme.toggle();
        }
        self.theme.apply(ctx);

        // Menu bar
        self.show_menu_bar(ctx);

        // Status bar
        self.show_status_bar(ctx);

        let loading = self.is_loading();

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| {
            let go_back = match self.current_panel {
                Panel::Dashboard => {
                    let counts = (!loading).then(|| self.dataset.counts());
                    if let Some(next) = dashboard::show(ui, counts, &self.log) {
                        self.current_panel = next;
                    }
                    false
                }
                Panel::Customers => self.customers.show(ui, &self.dataset.customers, loading),
                Panel::Invoices => self.invoices.show(ui, &self.dataset.invoices, loading),
                Panel::Payments => self.payments.show(ui, &self.dataset.payments, loading),
                Panel::Staff => self.staff.show(ui, &self.dataset.employees, loading),
            };
            if go_back {
                self.current_panel = Panel::Dashboard;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_log_is_bounded() {
        let mut log = ActivityLog::default();
        for i in 0..(MAX_LOG_ENTRIES + 20) {
            log.push(LogLevel::Info, format!("entry {i}"));
        }
        assert_eq!(log.len(), MAX_LOG_ENTRIES);
        assert_eq!(log.latest().map(|e| e.message.as_str()), Some("entry 119"));
    }

    #[test]
    fn test_activity_log_recent_is_newest_first() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Info, "first");
        log.push(LogLevel::Success, "second");
        log.push(LogLevel::Error, "third");

        let recent: Vec<_> = log.recent(2).map(|e| e.message.as_str()).collect();
        assert_eq!(recent, vec!["third", "second"]);
    }

    #[test]
    fn test_panel_names() {
        assert_eq!(Panel::default(), Panel::Dashboard);
        assert_eq!(Panel::Staff.name(), "Staff");
    }
}
