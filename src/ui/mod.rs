//! GUI panels and application state.

pub mod app;
pub mod components;
pub mod customers_panel;
pub mod dashboard;
pub mod data_table;
pub mod invoices_panel;
pub mod payments_panel;
pub mod staff_panel;
pub mod theme;

pub use app::MainApp;
pub use customers_panel::CustomersPanel;
pub use data_table::TableResponse;
pub use invoices_panel::InvoicesPanel;
pub use payments_panel::PaymentsPanel;
pub use staff_panel::StaffPanel;
