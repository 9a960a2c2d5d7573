//! # Binary Persistence
//!
//! Layout:
//!
//! ```text
//! +--------+---------+---------------------------------+
//! | "ORDG" | version | postcard: seq of members        |
//! | 4 B    | 1 B     | varint length, then each member |
//! +--------+---------+---------------------------------+
//! ```

use super::{FormatOptions, build_group};
use crate::error::FormatError;
use crate::group::Group;
use crate::iter::Iterable;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Magic bytes at the start of every encoded group.
pub const MAGIC: [u8; 4] = *b"ORDG";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;

/// Header size in bytes (magic + version).
pub const HEADER_LEN: usize = MAGIC.len() + 1;

/// Encode any iterable group into the binary format.
pub fn encode<G>(group: &G) -> Result<Vec<u8>, FormatError>
where
    G: Iterable + ?Sized,
    G::Item: Serialize,
{
    let members: Vec<&G::Item> = group.iter().collect();
    let payload = postcard::to_allocvec(&members)?;

    let mut bytes = Vec::with_capacity(HEADER_LEN.saturating_add(payload.len()));
    bytes.extend_from_slice(&MAGIC);
    bytes.push(FORMAT_VERSION);
    bytes.extend_from_slice(&payload);

    tracing::debug!(
        members = members.len(),
        bytes = bytes.len(),
        "encoded group"
    );
    Ok(bytes)
}

/// Decode a group with default options.
pub fn decode<T>(bytes: &[u8]) -> Result<Group<T>, FormatError>
where
    T: DeserializeOwned + PartialEq,
{
    decode_with(bytes, &FormatOptions::default())
}

/// Decode a group, enforcing `options`.
pub fn decode_with<T>(bytes: &[u8], options: &FormatOptions) -> Result<Group<T>, FormatError>
where
    T: DeserializeOwned + PartialEq,
{
    let payload = check_header(bytes)?;
    let (items, rest): (Vec<T>, &[u8]) = postcard::take_from_bytes(payload)?;
    if !rest.is_empty() {
        return Err(FormatError::TrailingBytes { count: rest.len() });
    }

    let group = build_group(items, options)?;
    tracing::debug!(members = group.len(), "decoded group");
    Ok(group)
}

/// Validate magic and version, returning the payload.
fn check_header(bytes: &[u8]) -> Result<&[u8], FormatError> {
    if bytes.len() < HEADER_LEN {
        return Err(FormatError::Truncated { len: bytes.len() });
    }
    let (header, payload) = bytes.split_at(HEADER_LEN);
    if header[..MAGIC.len()] != MAGIC {
        return Err(FormatError::InvalidMagic);
    }
    let version = header[MAGIC.len()];
    if version != FORMAT_VERSION {
        return Err(FormatError::UnsupportedVersion {
            found: version,
            expected: FORMAT_VERSION,
        });
    }
    Ok(payload)
}
