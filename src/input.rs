//! Turning raw text into tree values. Anything that reads values from a user (a form field, a
//! command-line flag) should go through here so bad input is rejected before a tree is built or
//! touched.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::TreeError;

/// Parses values separated by commas and/or whitespace. Empty tokens (e.g. from `"1,,2"` or a
/// trailing comma) are skipped.
///
/// # Examples
///
/// ```
/// use bstree::{parse_values, TreeError};
///
/// assert_eq!(parse_values::<i32>("1, 7 4,23"), Ok(vec![1, 7, 4, 23]));
/// assert!(matches!(
///     parse_values::<i32>("1, seven"),
///     Err(TreeError::InvalidInput { token, .. }) if token == "seven"
/// ));
/// ```
pub fn parse_values<T>(input: &str) -> Result<Vec<T>, TreeError>
where
    T: FromStr,
    T::Err: Display,
{
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse().map_err(|err: T::Err| TreeError::InvalidInput {
                token: token.to_owned(),
                reason: err.to_string(),
            })
        })
        .collect()
}
