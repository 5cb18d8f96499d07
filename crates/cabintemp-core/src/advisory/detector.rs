//! Supported-aircraft detection.
//!
//! The loaded model is identified by a substring of its file path. The
//! table is ordered: the first matching entry wins.

/// A supported aircraft model and the path substring that identifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AircraftSpec {
    pub id: &'static str,
    pub path_substring: &'static str,
}

/// Models the advisory engine supports, in priority order.
pub const SUPPORTED_AIRCRAFT: &[AircraftSpec] = &[AircraftSpec {
    id: "zibo",
    path_substring: "B737-800X",
}];

/// Resolves the loaded aircraft against the supported table.
///
/// Keeps the last-seen path and only re-scans when it changes, so the
/// per-tick cost on an unchanged path is one string comparison.
#[derive(Debug, Clone)]
pub struct AircraftDetector {
    table: &'static [AircraftSpec],
    last_path: Option<String>,
    detected: Option<&'static str>,
}

impl Default for AircraftDetector {
    fn default() -> Self {
        Self::new(SUPPORTED_AIRCRAFT)
    }
}

impl AircraftDetector {
    pub fn new(table: &'static [AircraftSpec]) -> Self {
        Self {
            table,
            last_path: None,
            detected: None,
        }
    }

    /// Identifier resolved by the most recent `detect` call.
    pub fn detected(&self) -> Option<&'static str> {
        self.detected
    }

    /// Resolve `path` to a supported-aircraft identifier, or `None`.
    pub fn detect(&mut self, path: &str) -> Option<&'static str> {
        if self.last_path.as_deref() != Some(path) {
            self.detected = self
                .table
                .iter()
                .find(|spec| path.contains(spec.path_substring))
                .map(|spec| spec.id);
            self.last_path = Some(path.to_string());
        }
        self.detected
    }
}
