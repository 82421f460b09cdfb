//! Client Fixtures

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    domain::{Client, ClientKey, ClientStatus},
    fixtures::FixtureError,
};

/// Wrapper for clients in YAML
#[derive(Debug, Deserialize)]
pub struct ClientsFixture {
    /// Client rows, in display order
    pub clients: Vec<ClientFixture>,
}

/// Client fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ClientFixture {
    /// Display reference, e.g. `CLI-001`
    pub reference: String,

    /// Contact name
    pub name: String,

    /// Company name
    pub company: String,

    /// Billing email
    pub email: String,

    /// Account status (`active`, `inactive`, `overdue`)
    pub status: String,

    /// Lifetime billed amount, e.g. `1250.00 GBP`
    pub total_amount: String,

    /// Amount awaiting payment
    pub pending_amount: String,
}

impl ClientFixture {
    /// Convert to a [`Client`] with pre-parsed amounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the status string is unknown.
    pub(super) fn into_client(
        self,
        key: ClientKey,
        total_amount: Money<'static, Currency>,
        pending_amount: Money<'static, Currency>,
    ) -> Result<Client, FixtureError> {
        Ok(Client {
            key,
            reference: self.reference,
            name: self.name,
            company: self.company,
            email: self.email,
            status: parse_status(&self.status)?,
            total_amount,
            pending_amount,
        })
    }
}

fn parse_status(raw: &str) -> Result<ClientStatus, FixtureError> {
    match raw {
        "active" => Ok(ClientStatus::Active),
        "inactive" => Ok(ClientStatus::Inactive),
        "overdue" => Ok(ClientStatus::Overdue),
        other => Err(FixtureError::UnknownStatus(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_fixture_parses_from_yaml() -> Result<(), serde_norway::Error> {
        let yaml = "
clients:
  - reference: CLI-001
    name: June Okafor
    company: Acme Ltd
    email: june@acme.test
    status: active
    total_amount: 1250.00 GBP
    pending_amount: 150.00 GBP
";
        let fixture: ClientsFixture = serde_norway::from_str(yaml)?;

        assert_eq!(fixture.clients.len(), 1);
        assert_eq!(
            fixture.clients.first().map(|c| c.status.as_str()),
            Some("active")
        );

        Ok(())
    }

    #[test]
    fn status_strings_map_to_variants() -> Result<(), FixtureError> {
        assert_eq!(parse_status("active")?, ClientStatus::Active);
        assert_eq!(parse_status("inactive")?, ClientStatus::Inactive);
        assert_eq!(parse_status("overdue")?, ClientStatus::Overdue);

        Ok(())
    }

    #[test]
    fn unknown_status_string_is_rejected() {
        assert!(matches!(
            parse_status("dormant"),
            Err(FixtureError::UnknownStatus(_))
        ));
    }
}
