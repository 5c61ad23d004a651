//! Station identifier type.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// The name of a station, used as its key in the network.
///
/// Names are stored trimmed and are never empty. Comparison is exact and
/// case-sensitive, so `"Rajiv Chowk"` and `"rajiv chowk"` are different
/// stations. Cloning is cheap: the name is shared behind an `Arc`.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationId;
///
/// let station = StationId::parse("  Rajiv Chowk ").unwrap();
/// assert_eq!(station.as_str(), "Rajiv Chowk");
///
/// // Blank names are rejected
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(Arc<str>);

impl StationId {
    /// Parse a station name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        Ok(StationId(Arc::from(trimmed)))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.as_str())
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_names() {
        assert!(StationId::parse("Rajiv Chowk").is_ok());
        assert!(StationId::parse("Kashmere Gate").is_ok());
        assert!(StationId::parse("A").is_ok());
    }

    #[test]
    fn trims_whitespace() {
        let station = StationId::parse("\t Civil Lines  \n").unwrap();
        assert_eq!(station.as_str(), "Civil Lines");
    }

    #[test]
    fn reject_empty() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse("   ").is_err());
        assert!(StationId::parse("\t\n").is_err());
    }

    #[test]
    fn case_sensitive() {
        let a = StationId::parse("Rajiv Chowk").unwrap();
        let b = StationId::parse("rajiv chowk").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn display() {
        let station = StationId::parse("Kashmere Gate").unwrap();
        assert_eq!(format!("{}", station), "Kashmere Gate");
    }

    #[test]
    fn debug() {
        let station = StationId::parse("Civil Lines").unwrap();
        assert_eq!(format!("{:?}", station), "StationId(Civil Lines)");
    }

    #[test]
    fn map_lookup_by_str() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(StationId::parse("Rajiv Chowk").unwrap(), 1);
        assert_eq!(map.get("Rajiv Chowk"), Some(&1));
        assert_eq!(map.get("Civil Lines"), None);
    }

    #[test]
    fn error_display() {
        let err = StationId::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid station name: must not be empty");
    }
}
