//! Station and line name types.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// A station name as it appears in the network data.
///
/// Names are case-sensitive and matched exactly; no normalization is
/// performed, so `"Piccadilly"` and `"piccadilly"` are different stations.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Station;
///
/// let station = Station::new("Piccadilly");
/// assert_eq!(station.as_str(), "Piccadilly");
/// assert_ne!(station, Station::new("piccadilly"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Station(String);

impl Station {
    /// Create a station from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Station {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Station {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A line label (the line colour in the network data).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Line(String);

impl Line {
    /// Create a line from its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the line label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({})", self.0)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Line {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Line {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Line {
    fn from(label: String) -> Self {
        Self(label)
    }
}
