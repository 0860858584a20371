/*
[INPUT]:  Caller pagination choices (first/last/after/before)
[OUTPUT]: Connection argument values for the query composer
[POS]:    GraphQL layer - Relay connection pagination
[UPDATE]: When connection arguments change
*/

use serde::{Deserialize, Serialize};

use super::operation::{ArgumentSpec, Arguments};

/// Connection arguments in the order they are declared on an operation
pub const PAGINATION_ARGUMENTS: [ArgumentSpec; 4] = [
    ArgumentSpec::connection("first", "Int"),
    ArgumentSpec::connection("last", "Int"),
    ArgumentSpec::connection("after", "String"),
    ArgumentSpec::connection("before", "String"),
];

/// Optional Relay pagination arguments.
///
/// Combinations are passed through as given; the server decides what
/// `first` together with `last` (or `after` with `before`) means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl PaginationArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first(mut self, first: u32) -> Self {
        self.first = Some(first);
        self
    }

    pub fn with_last(mut self, last: u32) -> Self {
        self.last = Some(last);
        self
    }

    pub fn with_after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn with_before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.last.is_none() && self.after.is_none() && self.before.is_none()
    }

    /// Copy the supplied values into `args`; absent values stay absent
    pub fn apply(&self, args: Arguments) -> Arguments {
        args.set_opt("first", self.first)
            .set_opt("last", self.last)
            .set_opt("after", self.after.clone())
            .set_opt("before", self.before.clone())
    }
}
