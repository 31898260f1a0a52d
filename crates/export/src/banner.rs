use chrono::{DateTime, Duration, Utc};

/// How long an export message stays visible.
const BANNER_TTL_SECS: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// The transient message shown after an export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStatus {
    pub kind: BannerKind,
    pub text: String,
}

impl ExportStatus {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }
}

/// Holder of the export message with its auto-dismiss clock:
/// idle → success/error → idle after 4 seconds, or immediately replaced by
/// the next export attempt. Time is passed in explicitly so expiry is
/// deterministic under test.
#[derive(Debug, Clone, Default)]
pub struct ExportBanner {
    shown: Option<(ExportStatus, DateTime<Utc>)>,
}

impl ExportBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a status, replacing whatever was on screen.
    pub fn show(&mut self, status: ExportStatus, now: DateTime<Utc>) {
        self.shown = Some((status, now));
    }

    /// The status currently visible at `now`, if it has not expired.
    pub fn current(&self, now: DateTime<Utc>) -> Option<&ExportStatus> {
        let (status, shown_at) = self.shown.as_ref()?;
        if now - *shown_at >= Duration::seconds(BANNER_TTL_SECS) {
            None
        } else {
            Some(status)
        }
    }

    pub fn clear(&mut self) {
        self.shown = None;
    }
}
