use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;

use crate::components::NavShell;
use crate::pages::{Dashboard, NotFound, RunningExperiment, Visualizer};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavShell)]
    #[route("/")]
    Visualizer {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/dashboard/experiment/:name")]
    RunningExperiment { name: ExperimentName },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Which navigation bar sits above a routed page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    /// A single link back to the dashboard.
    BackLink,
    /// Logo plus the gradient "Magentic Marketplace" title.
    BrandTitle,
}

impl Route {
    /// Nav bar for this route, `None` for pages rendered without one.
    pub fn nav_variant(&self) -> Option<NavVariant> {
        match self {
            Route::Visualizer {} => Some(NavVariant::BackLink),
            Route::Dashboard {} => Some(NavVariant::BrandTitle),
            Route::RunningExperiment { .. } => Some(NavVariant::BackLink),
            Route::NotFound { .. } => None,
        }
    }

    pub fn experiment(name: impl Into<String>) -> Self {
        Route::RunningExperiment { name: ExperimentName::new(name) }
    }
}

/// Experiment name carried in a single path segment.
///
/// Names may contain `/`, so the segment is percent-encoded as a whole.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExperimentName(String);

impl ExperimentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ExperimentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&urlencoding::encode(&self.0))
    }
}

impl FromStr for ExperimentName {
    type Err = Infallible;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        // Invalid UTF-8 after decoding keeps the raw segment
        let name = urlencoding::decode(segment)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| segment.to_string());
        Ok(Self(name))
    }
}
