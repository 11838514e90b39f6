//! Query parameter encoding and request pre-validation.
//!
//! Parameters are kept as an ordered list of key/value pairs. A list-valued
//! parameter contributes one pair per element in original order, so the same
//! key appears on the wire once per element (the API reads repeated keys for
//! indicator filters).

use std::fmt;

use chrono::{DateTime, Months, SecondsFormat, Utc};

use crate::error::Error;

/// Upper page-size bound shared by the sample/listing endpoints.
pub(crate) const PAGE_LIMIT_MAX: u32 = 100;

/// Upper page-size bound of the popular-queries endpoint.
pub(crate) const POPULAR_QUERIES_LIMIT_MAX: u32 = 500;

/// Ordered query-string parameters for one request.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a single scalar parameter.
    pub(crate) fn push(&mut self, key: &'static str, value: impl fmt::Display) {
        self.pairs.push((key, value.to_string()));
    }

    /// Appends a scalar parameter if a value is present.
    pub(crate) fn push_opt(&mut self, key: &'static str, value: Option<impl fmt::Display>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Appends one pair per element, preserving element order.
    pub(crate) fn push_all<I>(&mut self, key: &'static str, values: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        for value in values {
            self.push(key, value);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

/// Formats a timestamp the way the API expects date bounds.
pub(crate) fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, false)
}

fn month_before(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .checked_sub_months(Months::new(1))
        .unwrap_or(instant)
}

/// Resolves a date-ranged endpoint's window.
///
/// Omitted bounds default to one month ago and now. The resolved window is
/// rejected if it is inverted, before any request is issued.
pub(crate) fn date_window(
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> Result<(String, String), Error> {
    let from = from.unwrap_or_else(|| month_before(Utc::now()));
    let to = to.unwrap_or_else(Utc::now);
    if to < from {
        return Err(Error::Validation(format!(
            "date_to {} must not precede date_from {}",
            format_date(to),
            format_date(from)
        )));
    }

    Ok((format_date(from), format_date(to)))
}

/// Resolves the optional window of the query-statistics endpoints.
///
/// Omitted bounds stay omitted (the service then reports the last week);
/// when both are present the window must not be inverted.
pub(crate) fn optional_date_window(
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> Result<(Option<String>, Option<String>), Error> {
    if let (Some(from), Some(to)) = (from, to) {
        if to < from {
            return Err(Error::Validation(format!(
                "date_to {} must not precede date_from {}",
                format_date(to),
                format_date(from)
            )));
        }
    }

    Ok((from.map(format_date), to.map(format_date)))
}

/// Checks a page size against the endpoint's documented bound.
///
/// An out-of-bound limit is rejected, never clamped.
pub(crate) fn check_limit(limit: u32, max: u32) -> Result<u32, Error> {
    if limit > max {
        return Err(Error::Validation(format!(
            "limit {limit} is outside [0, {max}]"
        )));
    }

    Ok(limit)
}
