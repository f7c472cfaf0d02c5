use regex::Regex;
use std::fmt;

/// Label shown wherever a volume name does not follow the archive convention.
pub const UNRECOGNIZED_DRIVE: &str = "Unknown Drive";

const CANONICAL_PREFIX: &str = "Audio Archive";

lazy_static::lazy_static! {
    // Anchored at both ends: text may precede "Audio Archive" but nothing may follow the digits.
    static ref ARCHIVE_PATTERN: Regex = Regex::new(r"(?i)^.*?\bAudio Archive\s+0*([0-9]+)\b$")
        .expect("archive name pattern is valid");
}

/// Canonical identifier of an archive drive, e.g. `Audio Archive 7`.
///
/// The number is kept as its decimal text without leading zeros so that
/// arbitrarily long digit runs never overflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriveId {
    number: String,
}

impl DriveId {
    fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        let number = if trimmed.is_empty() { "0" } else { trimmed };
        Self {
            number: number.to_string(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn canonical_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DriveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", CANONICAL_PREFIX, self.number)
    }
}

/// Map a raw volume name to its canonical drive identifier.
///
/// Returns `None` for names that are not archive drives.
pub fn normalize(volume_name: &str) -> Option<DriveId> {
    ARCHIVE_PATTERN
        .captures(volume_name.trim())
        .and_then(|caps| caps.get(1))
        .map(|digits| DriveId::from_digits(digits.as_str()))
}

/// Canonical name, or the unrecognized label.
pub fn display_name(volume_name: &str) -> String {
    match normalize(volume_name) {
        Some(id) => id.canonical_name(),
        None => UNRECOGNIZED_DRIVE.to_string(),
    }
}
