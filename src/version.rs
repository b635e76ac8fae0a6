use crate::error::{CmverError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Dotted-numeric version string, e.g. `3.18` or `3.1.0`
#[derive(Debug, Clone)]
pub struct Version {
    pub original: String,
    segments: Vec<u64>,
}

impl Version {
    /// Parse a dotted-numeric version string.
    ///
    /// Empty segments are skipped (`3..18` parses the same as `3.18`);
    /// any other non-numeric segment is an error.
    pub fn parse(version: &str) -> Result<Self> {
        let mut segments = Vec::new();

        for part in version.split('.') {
            if part.is_empty() {
                continue;
            }
            let value = part.parse::<u64>().map_err(|_| {
                CmverError::VersionParse(format!(
                    "'{version}' contains non-numeric segment '{part}'"
                ))
            })?;
            segments.push(value);
        }

        if segments.is_empty() {
            return Err(CmverError::VersionParse(format!(
                "'{version}' contains no numeric segments"
            )));
        }

        Ok(Version {
            original: version.to_string(),
            segments,
        })
    }

    fn segment(&self, index: usize) -> u64 {
        self.segments.get(index).copied().unwrap_or(0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // Shorter side is padded with trailing zeros, so 3.18 == 3.18.0.
        let length = self.segments.len().max(other.segments.len());

        for i in 0..length {
            match self.segment(i).cmp(&other.segment(i)) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality follows the padded ordering: `[3, 18]` and `[3, 18, 0]`
// are equal, so it cannot be derived from the segment vectors.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_integer_segments() {
        let old = Version::parse("3.1").unwrap();
        let target = Version::parse("3.18").unwrap();
        assert!(old < target);
    }

    #[test]
    fn multi_digit_segments_are_not_compared_as_strings() {
        assert!(Version::parse("3.9").unwrap() < Version::parse("3.10").unwrap());
    }

    #[test]
    fn trailing_zero_segments_compare_equal() {
        let short = Version::parse("3.18").unwrap();
        let long = Version::parse("3.18.0").unwrap();
        assert_eq!(short, long);
        assert!(!(short < long));
        assert!(!(long < short));
    }

    #[test]
    fn newer_version_is_not_below_target() {
        assert!(!(Version::parse("3.20").unwrap() < Version::parse("3.18").unwrap()));
    }

    #[test]
    fn empty_segments_are_skipped() {
        assert_eq!(
            Version::parse("3..18").unwrap(),
            Version::parse("3.18").unwrap()
        );
    }

    #[test]
    fn rejects_non_numeric_segment() {
        let err = Version::parse("3.x").unwrap_err();
        assert!(matches!(err, CmverError::VersionParse(_)));
    }

    #[test]
    fn rejects_string_without_segments() {
        assert!(Version::parse("").is_err());
        assert!(Version::parse("..").is_err());
    }

    #[test]
    fn display_keeps_original_text() {
        assert_eq!(Version::parse("3.18.0").unwrap().to_string(), "3.18.0");
    }
}
