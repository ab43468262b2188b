//! Checks shared by the section validators. Each pushes a readable problem
//! onto `errors` instead of returning early, so one pass reports everything.

use std::fmt::Display;
use std::ops::RangeInclusive;

/// `name = value` must lie within `range`. NaN never does.
pub(crate) fn check_range<T>(errors: &mut Vec<String>, name: &str, value: T, range: RangeInclusive<T>)
where
    T: PartialOrd + Display,
{
    if !range.contains(&value) {
        errors.push(format!(
            "{name} = {value} is out of range [{}, {}]",
            range.start(),
            range.end()
        ));
    }
}

pub(crate) fn check_non_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

pub(crate) fn check_http_url(errors: &mut Vec<String>, name: &str, value: &str) {
    if !(value.starts_with("https://") || value.starts_with("http://")) {
        errors.push(format!("{name} = {value:?} must start with http:// or https://"));
    }
}
