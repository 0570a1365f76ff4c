//! Metro station type.

use serde::Serialize;

use super::LatLng;

/// A metro station: unique name, location and the lines serving it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    /// Unique station name; used as the identifier throughout the planner.
    pub name: String,

    pub location: LatLng,

    /// Names of the lines calling here, in line-table order.
    pub lines: Vec<String>,
}

impl Station {
    pub fn new(name: impl Into<String>, location: LatLng, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            location,
            lines,
        }
    }

    /// Whether more than one line calls here.
    pub fn is_interchange(&self) -> bool {
        self.lines.len() > 1
    }

    /// Display label: the first serving line, or `"Unknown"`.
    pub fn line_label(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_label_falls_back_to_unknown() {
        let loc = LatLng::new(12.97, 77.59).unwrap();
        let orphan = Station::new("Nowhere", loc, vec![]);
        assert_eq!(orphan.line_label(), "Unknown");
        assert!(!orphan.is_interchange());

        let majestic = Station::new(
            "Majestic",
            loc,
            vec!["Purple Line".into(), "Green Line".into()],
        );
        assert_eq!(majestic.line_label(), "Purple Line");
        assert!(majestic.is_interchange());
    }
}
