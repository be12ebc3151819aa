//! Record source for the dashboard: built-in sample data or a JSON fixture file.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Customer, CustomerStatus, Employee, Invoice, InvoiceStatus, Payment, PaymentMethod};
use crate::{AppError, Result};

/// Every record collection the dashboard displays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub invoices: Vec<Invoice>,
    pub payments: Vec<Payment>,
    pub employees: Vec<Employee>,
}

/// Record counts per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetCounts {
    pub customers: usize,
    pub invoices: usize,
    pub payments: usize,
    pub employees: usize,
}

const CUSTOMER_NAMES: &[&str] = &[
    "Ava Thompson",
    "Liam Carter",
    "Mia Robinson",
    "Noah Bennett",
    "Sofia Ramirez",
    "Ethan Brooks",
    "Chloe Nguyen",
    "Lucas Fischer",
    "Isabella Moreau",
    "Mason Clarke",
    "Harper Jensen",
    "Logan Patel",
    "Amelia Rossi",
    "Elijah Kim",
    "Grace Sullivan",
    "James O'Connor",
    "Zoe Andersen",
    "Henry Walsh",
    "Lily Tanaka",
    "Owen Schultz",
    "Emma Duarte",
    "Jack Morgan",
    "Nora Hughes",
    "Leo Novak",
    "Ella Price",
    "Caleb Ward",
    "Ruby Castillo",
    "Isaac Byrne",
];

const COMPANIES: &[&str] = &[
    "Northwind Facilities",
    "Bluepeak Dental",
    "Harbor Logistics",
    "Maple & Finch Legal",
    "Summit Property Group",
    "Riverside Clinic",
    "Copperline Studios",
];

const EMPLOYEES: &[(&str, &str, &str)] = &[
    ("Daniel Reyes", "Operations", "Operations Manager"),
    ("Hannah Cole", "Operations", "Field Technician"),
    ("Marcus Lee", "Operations", "Field Technician"),
    ("Priya Shah", "Finance", "Accountant"),
    ("Tomasz Nowak", "Finance", "Billing Specialist"),
    ("Olivia Grant", "Sales", "Account Executive"),
    ("Samuel Ortiz", "Sales", "Sales Representative"),
    ("Yuki Sato", "Support", "Support Lead"),
    ("Fatima Khan", "Support", "Support Agent"),
    ("George Adams", "Support", "Support Agent"),
    ("Elena Petrova", "Operations", "Dispatcher"),
    ("Victor Hugo Lima", "Operations", "Field Technician"),
    ("Rachel Stein", "Administration", "Office Manager"),
    ("Kwame Mensah", "Operations", "Field Technician"),
    ("Laura Becker", "Finance", "Controller"),
    ("Omar Haddad", "Sales", "Sales Representative"),
    ("Nina Larsen", "Support", "Support Agent"),
    ("Peter Quinn", "Administration", "Receptionist"),
];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap_or_default()
}

fn email_for(name: &str, domain: &str) -> String {
    let local: String = name
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".");
    format!("{local}@{domain}")
}

impl Dataset {
    /// Deterministic built-in data set.
    pub fn sample() -> Self {
        let base = base_date();

        let customers: Vec<Customer> = CUSTOMER_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let id = i as i32 + 1;
                let status = match i % 7 {
                    0 | 3 => CustomerStatus::Lead,
                    5 => CustomerStatus::Inactive,
                    _ => CustomerStatus::Active,
                };
                Customer {
                    id,
                    name: name.to_string(),
                    company: (i % 3 != 1).then(|| COMPANIES[i % COMPANIES.len()].to_string()),
                    email: email_for(name, "example.com"),
                    phone: (i % 4 != 2).then(|| format!("+1 555 01{:02}", i)),
                    status,
                    created_on: base + Duration::days((i as i64 * 11) % 300),
                    total_spent: 0,
                }
            })
            .collect();

        let mut invoices = Vec::new();
        for n in 0..42usize {
            let customer = &customers[(n * 5 + 3) % customers.len()];
            let issue_date = base + Duration::days(n as i64 * 8);
            let status = match n % 6 {
                0 => InvoiceStatus::Draft,
                1 | 4 => InvoiceStatus::Pending,
                2 => InvoiceStatus::Overdue,
                _ => InvoiceStatus::Paid,
            };
            invoices.push(Invoice {
                id: n as i32 + 1,
                number: format!("INV-2024-{:04}", n + 1),
                customer_id: customer.id,
                customer_name: customer.name.clone(),
                issue_date,
                due_date: issue_date + Duration::days(30),
                amount: 12_500 + ((n as i64 * 7_919) % 180_000),
                status,
            });
        }

        let methods = [PaymentMethod::Card, PaymentMethod::BankTransfer, PaymentMethod::Cash];
        let payments: Vec<Payment> = invoices
            .iter()
            .filter(|inv| inv.status == InvoiceStatus::Paid)
            .enumerate()
            .map(|(i, inv)| {
                let method = methods[i % methods.len()];
                Payment {
                    id: i as i32 + 1,
                    invoice_number: inv.number.clone(),
                    customer_name: inv.customer_name.clone(),
                    paid_on: inv.issue_date + Duration::days(3 + (i as i64 * 4) % 25),
                    amount: inv.amount,
                    method,
                    reference: (method != PaymentMethod::Cash).then(|| format!("TX{:06}", 104_729 * (i + 1) % 1_000_000)),
                }
            })
            .collect();

        let customers = customers
            .into_iter()
            .map(|mut customer| {
                customer.total_spent = payments
                    .iter()
                    .filter(|p| p.customer_name == customer.name)
                    .map(|p| p.amount)
                    .sum();
                customer
            })
            .collect();

        let employees = EMPLOYEES
            .iter()
            .enumerate()
            .map(|(i, (name, department, role))| Employee {
                id: i as i32 + 1,
                employee_code: format!("EMP{:03}", i + 1),
                full_name: name.to_string(),
                department: (*department != "Administration" || i % 2 == 0).then(|| department.to_string()),
                role: role.to_string(),
                email: email_for(name, "servicecompany.example"),
                start_date: base - Duration::days(90 * (EMPLOYEES.len() - i) as i64),
                is_active: i % 8 != 6,
            })
            .collect();

        Self {
            customers,
            invoices,
            payments,
            employees,
        }
    }

    /// Parse a JSON fixture file. Missing collections default to empty.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&content)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load from `fixtures` when given, otherwise return sample data.
    pub fn load_or_sample(fixtures: Option<&Path>) -> Result<Self> {
        match fixtures {
            Some(path) => {
                tracing::info!("Loading fixtures from {:?}", path);
                Self::load(path)
            }
            None => Ok(Self::sample()),
        }
    }

    /// Write the dataset as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject duplicate ids within a collection.
    pub fn validate(&self) -> Result<()> {
        fn unique(kind: &str, ids: impl Iterator<Item = i32>) -> Result<()> {
            let mut seen = std::collections::HashSet::new();
            for id in ids {
                if !seen.insert(id) {
                    return Err(AppError::validation(format!("Duplicate {kind} id {id}")));
                }
            }
            Ok(())
        }

        unique("customer", self.customers.iter().map(|c| c.id))?;
        unique("invoice", self.invoices.iter().map(|i| i.id))?;
        unique("payment", self.payments.iter().map(|p| p.id))?;
        unique("employee", self.employees.iter().map(|e| e.id))?;
        Ok(())
    }

    pub fn counts(&self) -> DatasetCounts {
        DatasetCounts {
            customers: self.customers.len(),
            invoices: self.invoices.len(),
            payments: self.payments.len(),
            employees: self.employees.len(),
        }
    }
}

/// Load the dataset on a background thread.
///
/// The receiver yields exactly one message.
pub fn spawn_load(fixtures: Option<PathBuf>) -> mpsc::Receiver<std::result::Result<Dataset, String>> {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let result = Dataset::load_or_sample(fixtures.as_deref()).map_err(|e| e.to_string());
        match &result {
            Ok(dataset) => {
                let counts = dataset.counts();
                tracing::info!(
                    "Loaded {} customers, {} invoices, {} payments, {} employees",
                    counts.customers,
                    counts.invoices,
                    counts.payments,
                    counts.employees
                );
            }
            Err(e) => tracing::error!("Failed to load data: {}", e),
        }
        let _ = tx.send(result);
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bizdash-{name}-{}.json", std::process::id()))
    }

    #[test]
    fn test_sample_is_deterministic() {
        assert_eq!(Dataset::sample(), Dataset::sample());
    }

    #[test]
    fn test_sample_counts() {
        let counts = Dataset::sample().counts();
        assert_eq!(counts.customers, CUSTOMER_NAMES.len());
        assert_eq!(counts.invoices, 42);
        assert_eq!(counts.employees, EMPLOYEES.len());
        assert!(counts.payments > 0);
    }

    #[test]
    fn test_sample_payments_match_paid_invoices() {
        let data = Dataset::sample();
        for payment in &data.payments {
            let invoice = data
                .invoices
                .iter()
                .find(|inv| inv.number == payment.invoice_number)
                .unwrap();
            assert_eq!(invoice.status, InvoiceStatus::Paid);
            assert_eq!(invoice.amount, payment.amount);
        }
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_email_for() {
        assert_eq!(email_for("James O'Connor", "example.com"), "james.oconnor@example.com");
    }

    #[test]
    fn test_save_and_load_fixtures() {
        let path = temp_path("fixtures");
        let data = Dataset::sample();
        data.save(&path).unwrap();

        let loaded = Dataset::load(&path).unwrap();
        assert_eq!(loaded, data);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_partial_fixture_file() {
        let path = temp_path("partial");
        std::fs::write(
            &path,
            r#"{"employees": [{"id": 1, "employee_code": "E1", "full_name": "A B", "department": null,
                "role": "Tech", "email": "a@b.c", "start_date": "2023-05-01", "is_active": true}]}"#,
        )
        .unwrap();

        let loaded = Dataset::load(&path).unwrap();
        assert_eq!(loaded.employees.len(), 1);
        assert!(loaded.customers.is_empty());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut data = Dataset::sample();
        let dup = data.customers[0].clone();
        data.customers.push(dup);
        assert!(matches!(data.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_spawn_load_sample() {
        let rx = spawn_load(None);
        let result = rx.recv().unwrap();
        assert_eq!(result.unwrap().counts(), Dataset::sample().counts());
    }

    #[test]
    fn test_spawn_load_missing_file() {
        let rx = spawn_load(Some(temp_path("does-not-exist")));
        assert!(rx.recv().unwrap().is_err());
    }
}
