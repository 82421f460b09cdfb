//! Suspended users

use std::cmp::Ordering;

use slotmap::new_key_type;
use smallvec::{SmallVec, smallvec};
use time::Date;

use crate::{
    records::{Record, Searchable},
    render::TableRow,
    sort::Sortable,
    status::{Status, Tone},
};

new_key_type! {
    /// User Key
    pub struct UserKey;
}

/// Kind of suspension applied to a user.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SuspensionType {
    /// Lifts automatically or on review.
    Temporary,

    /// Requires an explicit reactivation.
    Permanent,
}

impl Status for SuspensionType {
    const ALL: &'static [Self] = &[Self::Temporary, Self::Permanent];

    fn label(&self) -> &'static str {
        match self {
            Self::Temporary => "Temporary",
            Self::Permanent => "Permanent",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            Self::Temporary => Tone::Warning,
            Self::Permanent => Tone::Critical,
        }
    }
}

/// One recorded violation of a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// What was violated ("spam", "chargeback abuse", ...).
    pub kind: String,

    /// How many times it was recorded.
    pub count: u32,

    /// Date of the most recent occurrence.
    pub last_occurrence: Date,
}

/// A suspended user row.
///
/// The only record kind without a monetary amount; its summaries are
/// count-only ([`crate::summary::count_by_status`]).
#[derive(Debug, Clone, PartialEq)]
pub struct SuspendedUser {
    /// Collection key.
    pub key: UserKey,

    /// Display name.
    pub name: String,

    /// Account email.
    pub email: String,

    /// Kind of suspension.
    pub suspension: SuspensionType,

    /// Recorded violations, oldest first.
    pub violations: SmallVec<[Violation; 3]>,
}

impl SuspendedUser {
    /// Total number of recorded violations across all kinds.
    #[must_use]
    pub fn total_violations(&self) -> u32 {
        self.violations.iter().map(|v| v.count).sum()
    }

    /// Date of the most recent violation, if any are recorded.
    #[must_use]
    pub fn last_violation(&self) -> Option<Date> {
        self.violations.iter().map(|v| v.last_occurrence).max()
    }
}

impl Record for SuspendedUser {
    type Id = UserKey;
    type Status = SuspensionType;

    fn id(&self) -> UserKey {
        self.key
    }

    fn status(&self) -> SuspensionType {
        self.suspension
    }
}

impl Searchable for SuspendedUser {
    fn search_fields(&self) -> SmallVec<[&str; 4]> {
        smallvec![self.name.as_str(), self.email.as_str()]
    }
}

/// Sortable suspended-user columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UserColumn {
    /// Display name.
    Name,

    /// Account email.
    Email,

    /// Kind of suspension.
    Suspension,

    /// Total violation count.
    Violations,

    /// Most recent violation date.
    LastViolation,
}

impl Sortable for SuspendedUser {
    type Key = UserColumn;

    fn compare_by(&self, other: &Self, key: UserColumn) -> Ordering {
        match key {
            UserColumn::Name => self.name.cmp(&other.name),
            UserColumn::Email => self.email.cmp(&other.email),
            UserColumn::Suspension => self.suspension.cmp(&other.suspension),
            UserColumn::Violations => self.total_violations().cmp(&other.total_violations()),
            UserColumn::LastViolation => self.last_violation().cmp(&other.last_violation()),
        }
    }
}

impl TableRow for SuspendedUser {
    const HEADERS: &'static [&'static str] =
        &["Name", "Email", "Suspension", "Violations", "Last violation"];

    const STATUS_COLUMN: usize = 2;

    const RIGHT_ALIGNED: &'static [usize] = &[3];

    fn cells(&self) -> Vec<String> {
        let last = self
            .last_violation()
            .map_or_else(|| "\u{2014}".to_string(), |date| date.to_string());

        vec![
            self.name.clone(),
            self.email.clone(),
            self.suspension.label().to_string(),
            self.total_violations().to_string(),
            last,
        ]
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn user(name: &str, suspension: SuspensionType, violations: &[(u32, Date)]) -> SuspendedUser {
        SuspendedUser {
            key: UserKey::default(),
            name: name.to_string(),
            email: format!("{}@example.test", name.to_lowercase()),
            suspension,
            violations: violations
                .iter()
                .map(|&(count, last_occurrence)| Violation {
                    kind: "spam".to_string(),
                    count,
                    last_occurrence,
                })
                .collect(),
        }
    }

    #[test]
    fn total_violations_sums_all_kinds() {
        let user = user(
            "Mallory",
            SuspensionType::Temporary,
            &[(2, date!(2026 - 03 - 01)), (3, date!(2026 - 05 - 12))],
        );

        assert_eq!(user.total_violations(), 5);
    }

    #[test]
    fn last_violation_is_the_most_recent_date() {
        let user = user(
            "Mallory",
            SuspensionType::Temporary,
            &[(1, date!(2026 - 05 - 12)), (1, date!(2026 - 03 - 01))],
        );

        assert_eq!(user.last_violation(), Some(date!(2026 - 05 - 12)));
    }

    #[test]
    fn user_without_violations_renders_a_placeholder() {
        let user = user("Quiet", SuspensionType::Permanent, &[]);
        let cells = user.cells();

        assert_eq!(user.last_violation(), None);
        assert_eq!(cells.last().map(String::as_str), Some("\u{2014}"));
    }

    #[test]
    fn violations_compare_by_total_count() {
        let few = user("A", SuspensionType::Temporary, &[(1, date!(2026 - 01 - 01))]);
        let many = user("B", SuspensionType::Temporary, &[(7, date!(2026 - 01 - 01))]);

        assert_eq!(few.compare_by(&many, UserColumn::Violations), Ordering::Less);
    }
}
