//! Typed parameter values for the Webmaster API.
//!
//! The API selects metrics and filters through uppercase indicator constants;
//! these enums carry the documented sets. Host, sitemap, query and task
//! identifiers stay opaque strings; the service owns their format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Host verification method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationType {
    /// DNS record verification.
    Dns,
    /// HTML file placed in the site root.
    HtmlFile,
    /// Meta tag on the main page.
    MetaTag,
    /// WHOIS record verification.
    Whois,
}

impl VerificationType {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dns => "DNS",
            Self::HtmlFile => "HTML_FILE",
            Self::MetaTag => "META_TAG",
            Self::Whois => "WHOIS",
        }
    }
}

impl fmt::Display for VerificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering of the popular-queries listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryOrderBy {
    /// Order by total clicks.
    #[default]
    TotalClicks,
    /// Order by total shows.
    TotalShows,
}

impl QueryOrderBy {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TotalClicks => "TOTAL_CLICKS",
            Self::TotalShows => "TOTAL_SHOWS",
        }
    }
}

impl fmt::Display for QueryOrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metric reported for search-query statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryIndicator {
    /// Total number of shows.
    TotalShows,
    /// Total number of clicks.
    TotalClicks,
    /// Average position of the shown page.
    AvgShowPosition,
    /// Average position of the clicked page.
    AvgClickPosition,
}

impl QueryIndicator {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TotalShows => "TOTAL_SHOWS",
            Self::TotalClicks => "TOTAL_CLICKS",
            Self::AvgShowPosition => "AVG_SHOW_POSITION",
            Self::AvgClickPosition => "AVG_CLICK_POSITION",
        }
    }
}

impl fmt::Display for QueryIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device class filter for search-query statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceType {
    /// No device filtering.
    All,
    /// Desktop browsers.
    Desktop,
    /// Mobile phones and tablets combined.
    MobileAndTablet,
    /// Mobile phones.
    Mobile,
    /// Tablets.
    Tablet,
}

impl DeviceType {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Desktop => "DESKTOP",
            Self::MobileAndTablet => "MOBILE_AND_TABLET",
            Self::Mobile => "MOBILE",
            Self::Tablet => "TABLET",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
