//! Homework records and the status catalog.

use std::fmt;
use std::str::FromStr;

/// Review status of a submitted homework.
///
/// The set is closed: every status the review API may report has a verdict
/// text, and anything else is rejected while formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Every status in the catalog.
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Status code as sent by the API.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict shown to the student.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = ();

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or(())
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A homework whose name and status have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    /// Homework identifier as reported by the API
    pub name: String,

    /// Current review status
    pub status: HomeworkStatus,
}

impl Homework {
    /// Notification text announcing the current status.
    pub fn status_message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        assert_eq!("approved".parse(), Ok(HomeworkStatus::Approved));
        assert_eq!("reviewing".parse(), Ok(HomeworkStatus::Reviewing));
        assert_eq!("rejected".parse(), Ok(HomeworkStatus::Rejected));
        assert_eq!("Approved".parse::<HomeworkStatus>(), Err(()));
        assert_eq!("".parse::<HomeworkStatus>(), Err(()));
    }

    #[test]
    fn test_codes_round_trip_through_display() {
        for status in HomeworkStatus::ALL {
            assert_eq!(status.to_string().parse(), Ok(status));
        }
    }

    #[test]
    fn test_status_message() {
        let homework = Homework {
            name: "proj1".to_string(),
            status: HomeworkStatus::Approved,
        };
        assert_eq!(
            homework.status_message(),
            "Изменился статус проверки работы \"proj1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }
}
