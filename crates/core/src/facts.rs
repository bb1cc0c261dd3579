/// Reading state of a book as the host tracks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
    Reading,
    Complete,
    OnHold,
    Abandoned,
}

impl ReadStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReadStatus::Reading => "reading",
            ReadStatus::Complete => "complete",
            ReadStatus::OnHold => "on_hold",
            ReadStatus::Abandoned => "abandoned",
        }
    }

    /// Parse a host status string.  Unknown values map to `None` so callers
    /// fall back to the `default` color-table entry.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "reading" => Some(ReadStatus::Reading),
            "complete" => Some(ReadStatus::Complete),
            "on_hold" => Some(ReadStatus::OnHold),
            "abandoned" => Some(ReadStatus::Abandoned),
            _ => None,
        }
    }
}

/// Per-item facts supplied by the host for one paint call.
///
/// Constructed fresh from host widget state before every paint; the engine
/// never stores these across calls.
#[derive(Debug, Clone, Default)]
pub struct ItemFacts {
    pub is_directory: bool,
    pub file_path: Option<String>,
    /// Completion in `[0, 1]`; absent when the host has no progress record.
    pub percent_finished: Option<f32>,
    pub status: Option<ReadStatus>,
    pub been_opened: bool,
    /// Directory display name (directories only).
    pub directory_name: Option<String>,
    /// Host summary string, e.g. `"24 books, 3 folders"` (directories only).
    pub directory_summary: Option<String>,
}

impl ItemFacts {
    /// Facts for a book entry at `path`.
    pub fn book(path: impl Into<String>) -> Self {
        Self {
            file_path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Facts for a directory entry named `name`.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            is_directory: true,
            directory_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Whether the facts imply the item was opened even when the host did
    /// not record an explicit opened flag.
    pub fn hint_opened(&self) -> bool {
        self.percent_finished.is_some() || self.status.is_some()
    }

    /// Whether this item is the single most-recently-opened one.
    pub fn is_last_opened(&self, last_path: Option<&str>) -> bool {
        match (&self.file_path, last_path) {
            (Some(p), Some(l)) => p == l,
            _ => false,
        }
    }
}
