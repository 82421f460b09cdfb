//! Fixtures
//!
//! YAML-backed data sets for demos and tests, loaded from
//! `<base>/<kind>/<name>.yml`. A fixture set is single-currency: the first
//! parsed price pins the currency and later mismatches are rejected.

use std::{fs, path::PathBuf};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use slotmap::{Key, SlotMap};
use thiserror::Error;
use time::{Date, macros::format_description};

use crate::{
    domain::{Client, ClientKey, Invoice, InvoiceKey, Payment, PaymentKey, SuspendedUser, UserKey},
    page::Pager,
    view::TableView,
};

pub mod clients;
pub mod invoices;
pub mod payments;
pub mod users;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Unknown status value
    #[error("Unknown status value: {0}")]
    UnknownStatus(String),

    /// Invalid date format
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    /// Duplicate record reference within a collection
    #[error("Duplicate record reference: {0}")]
    DuplicateReference(String),

    /// Client not found
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    /// Invoice not found
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(String),

    /// Payment not found
    #[error("Payment not found: {0}")]
    PaymentNotFound(String),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Currency mismatch within a fixture set
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No prices loaded yet
    #[error("No prices loaded yet; currency unknown")]
    NoCurrency,
}

/// Parses a `"12.50 GBP"` style price into money.
///
/// # Errors
///
/// Returns an error if the amount is not a decimal number or the currency
/// code is unknown.
pub(crate) fn parse_price(raw: &str) -> Result<Money<'static, Currency>, FixtureError> {
    let (amount, code) = raw
        .trim()
        .split_once(' ')
        .ok_or_else(|| FixtureError::InvalidPrice(raw.to_string()))?;

    let currency = iso::find(code.trim())
        .ok_or_else(|| FixtureError::UnknownCurrency(code.trim().to_string()))?;

    let amount: Decimal = amount
        .trim()
        .parse()
        .map_err(|_err| FixtureError::InvalidPrice(raw.to_string()))?;

    let scale = Decimal::from(10_i64.pow(currency.exponent));
    let minor = (amount * scale)
        .round()
        .to_i64()
        .ok_or_else(|| FixtureError::InvalidPrice(raw.to_string()))?;

    Ok(Money::from_minor(minor, currency))
}

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub(crate) fn parse_date(raw: &str) -> Result<Date, FixtureError> {
    let format = format_description!("[year]-[month]-[day]");

    Date::parse(raw.trim(), &format).map_err(|_err| FixtureError::InvalidDate(raw.to_string()))
}

/// One record kind's collection: keyed storage, load order, reference index.
#[derive(Debug)]
struct Catalog<K: Key, R> {
    records: SlotMap<K, Option<R>>,
    order: Vec<K>,
    refs: FxHashMap<String, K>,
}

impl<K: Key, R: Clone> Catalog<K, R> {
    fn new() -> Self {
        Self {
            records: SlotMap::with_key(),
            order: Vec::new(),
            refs: FxHashMap::default(),
        }
    }

    /// Inserts a record built from its freshly generated key.
    fn insert(
        &mut self,
        reference: &str,
        build: impl FnOnce(K) -> Result<R, FixtureError>,
    ) -> Result<(), FixtureError> {
        if self.refs.contains_key(reference) {
            return Err(FixtureError::DuplicateReference(reference.to_string()));
        }

        let mut result = Ok(());

        let key = self.records.insert_with_key(|key| match build(key) {
            Ok(record) => Some(record),
            Err(err) => {
                result = Err(err);
                None
            }
        });

        // A build error leaves an empty slot behind; drop it again.
        if result.is_err() {
            self.records.remove(key);
        } else {
            self.order.push(key);
            self.refs.insert(reference.to_string(), key);
        }

        result
    }

    fn get(&self, reference: &str) -> Option<&R> {
        self.refs
            .get(reference)
            .and_then(|key| self.records.get(*key))
            .and_then(Option::as_ref)
    }

    /// Clones the records in load order.
    fn in_order(&self) -> Vec<R> {
        self.order
            .iter()
            .filter_map(|key| self.records.get(*key))
            .filter_map(|slot| slot.as_ref().cloned())
            .collect()
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    clients: Catalog<ClientKey, Client>,
    invoices: Catalog<InvoiceKey, Invoice>,
    payments: Catalog<PaymentKey, Payment>,
    users: Catalog<UserKey, SuspendedUser>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            clients: Catalog::new(),
            invoices: Catalog::new(),
            payments: Catalog::new(),
            users: Catalog::new(),
            currency: None,
        }
    }

    fn read(&self, kind: &str, name: &str) -> Result<String, FixtureError> {
        let file_path = self.base_path.join(kind).join(format!("{name}.yml"));

        Ok(fs::read_to_string(&file_path)?)
    }

    /// Pins the set currency on first use, rejects mismatches afterwards.
    fn ensure_currency(&mut self, currency: &'static Currency) -> Result<(), FixtureError> {
        if let Some(existing) = self.currency {
            if existing != currency {
                return Err(FixtureError::CurrencyMismatch(
                    existing.iso_alpha_code.to_string(),
                    currency.iso_alpha_code.to_string(),
                ));
            }
        } else {
            self.currency = Some(currency);
        }

        Ok(())
    }

    /// Load clients from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, a reference is
    /// duplicated, or a price is in a different currency than the set.
    pub fn load_clients(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("clients", name)?;
        let fixture: clients::ClientsFixture = serde_norway::from_str(&contents)?;

        for client_fixture in fixture.clients {
            let total_amount = parse_price(&client_fixture.total_amount)?;
            let pending_amount = parse_price(&client_fixture.pending_amount)?;

            self.ensure_currency(total_amount.currency())?;
            self.ensure_currency(pending_amount.currency())?;

            let reference = client_fixture.reference.clone();

            self.clients.insert(&reference, |key| {
                client_fixture.into_client(key, total_amount, pending_amount)
            })?;
        }

        Ok(self)
    }

    /// Load invoices from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, a reference is
    /// duplicated, or a price is in a different currency than the set.
    pub fn load_invoices(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("invoices", name)?;
        let fixture: invoices::InvoicesFixture = serde_norway::from_str(&contents)?;

        for invoice_fixture in fixture.invoices {
            let amount = parse_price(&invoice_fixture.amount)?;

            self.ensure_currency(amount.currency())?;

            let reference = invoice_fixture.reference.clone();

            self.invoices
                .insert(&reference, |key| invoice_fixture.into_invoice(key, amount))?;
        }

        Ok(self)
    }

    /// Load payments from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, a reference is
    /// duplicated, or a price is in a different currency than the set.
    pub fn load_payments(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("payments", name)?;
        let fixture: payments::PaymentsFixture = serde_norway::from_str(&contents)?;

        for payment_fixture in fixture.payments {
            let amount = parse_price(&payment_fixture.amount)?;

            self.ensure_currency(amount.currency())?;

            let reference = payment_fixture.reference.clone();

            self.payments
                .insert(&reference, |key| payment_fixture.into_payment(key, amount))?;
        }

        Ok(self)
    }

    /// Load suspended users from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or an email is
    /// duplicated.
    pub fn load_users(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("users", name)?;
        let fixture: users::UsersFixture = serde_norway::from_str(&contents)?;

        for user_fixture in fixture.users {
            // Users have no reference code; the email is the stable handle.
            let email = user_fixture.email.clone();

            self.users.insert(&email, |key| user_fixture.into_user(key))?;
        }

        Ok(self)
    }

    /// Load a complete fixture set (clients, invoices, payments and users
    /// with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_clients(name)?
            .load_invoices(name)?
            .load_payments(name)?
            .load_users(name)?;

        Ok(fixture)
    }

    /// Get a client by its reference
    ///
    /// # Errors
    ///
    /// Returns an error if the client is not found.
    pub fn client(&self, reference: &str) -> Result<&Client, FixtureError> {
        self.clients
            .get(reference)
            .ok_or_else(|| FixtureError::ClientNotFound(reference.to_string()))
    }

    /// Get an invoice by its reference
    ///
    /// # Errors
    ///
    /// Returns an error if the invoice is not found.
    pub fn invoice(&self, reference: &str) -> Result<&Invoice, FixtureError> {
        self.invoices
            .get(reference)
            .ok_or_else(|| FixtureError::InvoiceNotFound(reference.to_string()))
    }

    /// Get a payment by its reference
    ///
    /// # Errors
    ///
    /// Returns an error if the payment is not found.
    pub fn payment(&self, reference: &str) -> Result<&Payment, FixtureError> {
        self.payments
            .get(reference)
            .ok_or_else(|| FixtureError::PaymentNotFound(reference.to_string()))
    }

    /// Get a suspended user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found.
    pub fn user(&self, email: &str) -> Result<&SuspendedUser, FixtureError> {
        self.users
            .get(email)
            .ok_or_else(|| FixtureError::UserNotFound(email.to_string()))
    }

    /// All clients, in load order
    pub fn clients(&self) -> Vec<Client> {
        self.clients.in_order()
    }

    /// All invoices, in load order
    pub fn invoices(&self) -> Vec<Invoice> {
        self.invoices.in_order()
    }

    /// All payments, in load order
    pub fn payments(&self) -> Vec<Payment> {
        self.payments.in_order()
    }

    /// All suspended users, in load order
    pub fn users(&self) -> Vec<SuspendedUser> {
        self.users.in_order()
    }

    /// Create a table view over the loaded clients
    pub fn client_view(&self, pager: Pager) -> TableView<Client> {
        TableView::new(self.clients(), pager)
    }

    /// Create a table view over the loaded invoices
    pub fn invoice_view(&self, pager: Pager) -> TableView<Invoice> {
        TableView::new(self.invoices(), pager)
    }

    /// Create a table view over the loaded payments
    pub fn payment_view(&self, pager: Pager) -> TableView<Payment> {
        TableView::new(self.payments(), pager)
    }

    /// Create a table view over the loaded suspended users
    pub fn user_view(&self, pager: Pager) -> TableView<SuspendedUser> {
        TableView::new(self.users(), pager)
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no prices have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use super::*;

    fn write_fixture(base: &Path, category: &str, name: &str, contents: &str) -> TestResult {
        let dir = base.join(category);

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn parse_price_reads_major_units_and_currency() -> TestResult {
        let price = parse_price("12.50 GBP")?;

        assert_eq!(price.to_minor_units(), 1250);
        assert_eq!(price.currency(), GBP);

        Ok(())
    }

    #[test]
    fn parse_price_rejects_missing_currency() {
        assert!(matches!(
            parse_price("12.50"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        assert!(matches!(
            parse_price("12.50 ZZZ"),
            Err(FixtureError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn parse_date_reads_iso_dates() -> TestResult {
        let date = parse_date("2026-08-01")?;

        assert_eq!(date.to_string(), "2026-08-01");

        Ok(())
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(matches!(
            parse_date("01/08/2026"),
            Err(FixtureError::InvalidDate(_))
        ));
    }

    #[test]
    fn fixture_loads_the_demo_set() -> TestResult {
        let fixture = Fixture::from_set("demo")?;

        assert_eq!(fixture.clients.len(), 5);
        assert_eq!(fixture.invoices.len(), 8);
        assert_eq!(fixture.payments.len(), 6);
        assert_eq!(fixture.users.len(), 3);
        assert_eq!(fixture.currency()?, GBP);

        Ok(())
    }

    #[test]
    fn fixture_lookup_by_reference() -> TestResult {
        let mut fixture = Fixture::new();

        fixture.load_clients("demo")?;

        let client = fixture.client("CLI-001")?;

        assert_eq!(client.name, "June Okafor");
        assert_eq!(client.company, "Acme Ltd");

        Ok(())
    }

    #[test]
    fn fixture_preserves_load_order() -> TestResult {
        let mut fixture = Fixture::new();

        fixture.load_invoices("demo")?;

        let references: Vec<String> = fixture
            .invoices()
            .into_iter()
            .map(|invoice| invoice.reference)
            .collect();

        let mut sorted = references.clone();
        sorted.sort();

        assert_eq!(references, sorted, "demo references load in order");

        Ok(())
    }

    #[test]
    fn missing_record_returns_an_error() {
        let fixture = Fixture::new();

        assert!(matches!(
            fixture.client("nonexistent"),
            Err(FixtureError::ClientNotFound(_))
        ));
        assert!(matches!(
            fixture.user("nobody@example.test"),
            Err(FixtureError::UserNotFound(_))
        ));
    }

    #[test]
    fn no_currency_before_any_prices_load() {
        let fixture = Fixture::new();

        assert!(matches!(fixture.currency(), Err(FixtureError::NoCurrency)));
    }

    #[test]
    fn currency_mismatch_across_files_is_rejected() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "clients",
            "usd_set",
            "clients:\n  - reference: CLI-001\n    name: A\n    company: A Co\n    email: a@a.test\n    status: active\n    total_amount: 1.00 USD\n    pending_amount: 0.00 USD\n",
        )?;

        write_fixture(
            dir.path(),
            "clients",
            "gbp_set",
            "clients:\n  - reference: CLI-002\n    name: B\n    company: B Co\n    email: b@b.test\n    status: active\n    total_amount: 1.00 GBP\n    pending_amount: 0.00 GBP\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());

        fixture.load_clients("usd_set")?;

        let result = fixture.load_clients("gbp_set");

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));

        Ok(())
    }

    #[test]
    fn duplicate_references_are_rejected() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "clients",
            "dupes",
            "clients:\n  - reference: CLI-001\n    name: A\n    company: A Co\n    email: a@a.test\n    status: active\n    total_amount: 1.00 GBP\n    pending_amount: 0.00 GBP\n  - reference: CLI-001\n    name: B\n    company: B Co\n    email: b@b.test\n    status: active\n    total_amount: 1.00 GBP\n    pending_amount: 0.00 GBP\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_clients("dupes");

        assert!(matches!(result, Err(FixtureError::DuplicateReference(_))));

        Ok(())
    }

    #[test]
    fn unknown_status_is_rejected() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "clients",
            "bad_status",
            "clients:\n  - reference: CLI-001\n    name: A\n    company: A Co\n    email: a@a.test\n    status: dormant\n    total_amount: 1.00 GBP\n    pending_amount: 0.00 GBP\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_clients("bad_status");

        assert!(matches!(result, Err(FixtureError::UnknownStatus(_))));

        Ok(())
    }

    #[test]
    fn view_builders_wrap_the_loaded_collections() -> TestResult {
        let fixture = Fixture::from_set("demo")?;
        let view = fixture.invoice_view(Pager::default());

        assert_eq!(view.records().len(), 8);

        Ok(())
    }

    #[test]
    fn fixture_default_matches_new() {
        let fixture = Fixture::default();

        assert_eq!(fixture.base_path, PathBuf::from("./fixtures"));
        assert_eq!(fixture.clients.len(), 0);
        assert_eq!(fixture.users.len(), 0);
    }
}
