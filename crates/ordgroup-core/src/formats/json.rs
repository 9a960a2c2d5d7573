//! # JSON Format
//!
//! A group is a JSON array of its members in insertion order.

use super::{FormatOptions, build_group};
use crate::error::FormatError;
use crate::group::Group;
use crate::iter::Iterable;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Render a group as a compact JSON array.
pub fn to_json<G>(group: &G) -> Result<String, FormatError>
where
    G: Iterable + ?Sized,
    G::Item: Serialize,
{
    let members: Vec<&G::Item> = group.iter().collect();
    Ok(serde_json::to_string(&members)?)
}

/// Parse a JSON array into a group with default options.
pub fn from_json<T>(json: &str) -> Result<Group<T>, FormatError>
where
    T: DeserializeOwned + PartialEq,
{
    from_json_with(json, &FormatOptions::default())
}

/// Parse a JSON array into a group, enforcing `options`.
pub fn from_json_with<T>(json: &str, options: &FormatOptions) -> Result<Group<T>, FormatError>
where
    T: DeserializeOwned + PartialEq,
{
    let items: Vec<T> = serde_json::from_str(json)?;
    build_group(items, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_is_an_array_in_insertion_order() {
        let group = Group::from([30, 10, 20]);
        assert_eq!(to_json(&group).ok().as_deref(), Some("[30,10,20]"));
    }

    #[test]
    fn parses_array() {
        let group: Result<Group<String>, _> = from_json(r#"["a","b","c"]"#);
        let members = group.map(Group::into_vec).unwrap_or_default();
        assert_eq!(members, vec!["a", "b", "c"]);
    }

    #[test]
    fn rejects_duplicates() {
        let result: Result<Group<i64>, _> = from_json("[1, 1]");
        assert!(matches!(result, Err(FormatError::Group(_))));
    }

    #[test]
    fn rejects_non_array() {
        let result: Result<Group<i64>, _> = from_json(r#"{"a": 1}"#);
        assert!(matches!(result, Err(FormatError::Json(_))));
    }

    #[test]
    fn limit_applies() {
        let options = FormatOptions::default().with_max_members(1);
        let result: Result<Group<i64>, _> = from_json_with("[1, 2]", &options);
        assert!(matches!(result, Err(FormatError::TooManyMembers { .. })));
    }
}
