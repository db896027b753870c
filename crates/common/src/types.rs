use serde::{Deserialize, Serialize};

/// Review status reported by the homework API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Every known status, in table order.
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Look up a status by its wire name. Returns `None` for anything outside the table.
    pub fn from_api(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the chat.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single homework entry from the `homeworks` list.
///
/// Every field is optional: a field that is absent or has an unexpected JSON
/// type reads as `None`. `homework_name` and `status` are required for a
/// notification, and the extractor reports which one is missing. The
/// remaining fields are informational.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub homework_name: Option<String>,
    pub status: Option<String>,
    pub id: Option<u64>,
    pub lesson_name: Option<String>,
    pub reviewer_comment: Option<String>,
    pub date_updated: Option<String>,
}

/// "From" point for the next fetch, in seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollCursor(u64);

impl PollCursor {
    pub fn new(timestamp: u64) -> Self {
        Self(timestamp)
    }

    /// Cursor at the current wall-clock time.
    pub fn now() -> Self {
        // Pre-epoch clocks clamp to zero.
        Self(chrono::Utc::now().timestamp().max(0) as u64)
    }

    pub fn timestamp(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PollCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
