//! Report types printed by the CLI.
//!
//! Both reports implement `Display` for the text output and `Serialize`
//! for `--output json`.

use serde::Serialize;
use std::fmt;

use crate::bbox::{ImageSize, Route};

/// The result of a single conversion.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConversionReport {
    /// Source format tag.
    pub from: String,
    /// Target format tag.
    pub to: String,
    /// Coordinates as given.
    pub input: Vec<f64>,
    /// Image size, if one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,
    /// Converted coordinates in the target format's field order.
    pub output: [f64; 4],
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.output;
        writeln!(f, "[{a}, {b}, {c}, {d}]")
    }
}

/// One row of the `routes` listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub from: &'static str,
    pub to: &'static str,
    pub requires_size: bool,
}

impl From<Route> for RouteEntry {
    fn from(route: Route) -> Self {
        Self {
            from: route.from_format().name(),
            to: route.to_format().name(),
            requires_size: route.requires_size(),
        }
    }
}

/// All supported routes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteListing {
    pub routes: Vec<RouteEntry>,
}

impl RouteListing {
    pub fn new() -> Self {
        Self {
            routes: Route::ALL.into_iter().map(RouteEntry::from).collect(),
        }
    }
}

impl Default for RouteListing {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RouteListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Supported conversions:")?;
        for entry in &self.routes {
            let note = if entry.requires_size {
                "  (requires --size)"
            } else {
                ""
            };
            writeln!(f, "  {:<6} -> {:<6}{}", entry.from, entry.to, note)?;
        }
        Ok(())
    }
}
