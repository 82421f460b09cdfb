//! Suspended User Fixtures

use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    domain::{SuspendedUser, SuspensionType, UserKey, Violation},
    fixtures::{FixtureError, parse_date},
};

/// Wrapper for suspended users in YAML
#[derive(Debug, Deserialize)]
pub struct UsersFixture {
    /// Suspended user rows, in display order
    pub users: Vec<UserFixture>,
}

/// Suspended user fixture from YAML
#[derive(Debug, Deserialize)]
pub struct UserFixture {
    /// Display name
    pub name: String,

    /// Account email (the stable handle for lookups)
    pub email: String,

    /// Suspension kind (`temporary`, `permanent`)
    pub suspension: String,

    /// Recorded violations, oldest first
    #[serde(default)]
    pub violations: Vec<ViolationFixture>,
}

/// One violation entry from YAML
#[derive(Debug, Deserialize)]
pub struct ViolationFixture {
    /// What was violated
    pub kind: String,

    /// How many times it was recorded
    pub count: u32,

    /// Date of the most recent occurrence, `YYYY-MM-DD`
    pub last_occurrence: String,
}

impl UserFixture {
    /// Convert to a [`SuspendedUser`].
    ///
    /// # Errors
    ///
    /// Returns an error if the suspension string is unknown or a violation
    /// date is invalid.
    pub(super) fn into_user(self, key: UserKey) -> Result<SuspendedUser, FixtureError> {
        let violations = self
            .violations
            .into_iter()
            .map(|violation| {
                Ok(Violation {
                    kind: violation.kind,
                    count: violation.count,
                    last_occurrence: parse_date(&violation.last_occurrence)?,
                })
            })
            .collect::<Result<SmallVec<[Violation; 3]>, FixtureError>>()?;

        Ok(SuspendedUser {
            key,
            name: self.name,
            email: self.email,
            suspension: parse_suspension(&self.suspension)?,
            violations,
        })
    }
}

fn parse_suspension(raw: &str) -> Result<SuspensionType, FixtureError> {
    match raw {
        "temporary" => Ok(SuspensionType::Temporary),
        "permanent" => Ok(SuspensionType::Permanent),
        other => Err(FixtureError::UnknownStatus(other.to_string())),
    }
}
