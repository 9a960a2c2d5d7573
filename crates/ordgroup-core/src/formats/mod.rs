//! # Formats Module
//!
//! Serialization and format handling for groups.
//!
//! This module contains:
//! - Binary persistence format (postcard + header)
//! - JSON serialization utilities
//!
//! Both decoders are strict: a payload that repeats a member is rejected
//! rather than silently deduplicated. File I/O is left to the caller; this
//! module only handles format conversion (pure transformations).

mod json;
mod persistence;

pub use json::*;
pub use persistence::*;

use crate::error::FormatError;
use crate::group::Group;

// =============================================================================
// DECODE OPTIONS
// =============================================================================

/// Default upper bound on the number of members accepted by a decoder.
pub const DEFAULT_MAX_MEMBERS: usize = 65_536;

/// Options applied while decoding a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum number of members a payload may carry.
    pub max_members: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_members: DEFAULT_MAX_MEMBERS,
        }
    }
}

impl FormatOptions {
    /// Set the member bound.
    #[must_use]
    pub fn with_max_members(mut self, max_members: usize) -> Self {
        self.max_members = max_members;
        self
    }
}

/// Check the bound, then build the group strictly.
fn build_group<T: PartialEq>(
    items: Vec<T>,
    options: &FormatOptions,
) -> Result<Group<T>, FormatError> {
    if items.len() > options.max_members {
        return Err(FormatError::TooManyMembers {
            count: items.len(),
            limit: options.max_members,
        });
    }
    let group = Group::try_from(items)
        .inspect_err(|err| tracing::debug!(%err, "rejected payload with repeated member"))?;
    Ok(group)
}
