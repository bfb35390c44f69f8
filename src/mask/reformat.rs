//! Re-derive the canonical mask from whole-string input (paste, programmatic fill).
//!
//! Text containing `-` keeps its own group boundaries; text without one is
//! regrouped into widths 3, 3 and 4. Spaces are ignored. Within a group each
//! remaining character fills the next slot positionally, so `_` keeps its
//! slot empty and `reformat` is idempotent on its own output.

use serde::{Deserialize, Serialize};

use super::buffer::{MaskBuffer, GROUP_BOUNDS, SEPARATOR};
use super::error::MaskError;
use super::validate::{is_digit, is_numeric_candidate};

/// What happens to digits that do not fit in their group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Keep the first N digits of each group, drop the rest
    #[default]
    Truncate,
    /// Refuse the whole input
    Reject,
}

/// Reformat with [`OverflowPolicy::Truncate`].
pub fn reformat(raw: &str) -> Result<MaskBuffer, MaskError> {
    reformat_with(raw, OverflowPolicy::default())
}

/// Reformat `raw` into the canonical masked buffer.
///
/// Fails with [`MaskError::NotNumeric`] if `raw` is not a numeric candidate,
/// and with [`MaskError::Overflow`] if digits would be dropped under
/// [`OverflowPolicy::Reject`]. Placeholders past a group's width carry no
/// data and are dropped under either policy.
pub fn reformat_with(raw: &str, policy: OverflowPolicy) -> Result<MaskBuffer, MaskError> {
    if !is_numeric_candidate(raw) {
        return Err(MaskError::NotNumeric(raw.to_string()));
    }

    let (groups, overflow) = if raw.contains(SEPARATOR) {
        split_groups(raw)
    } else {
        regroup(&slot_chars(raw))
    };

    let dropped = overflow.iter().filter(|ch| is_digit(**ch)).count();
    if dropped > 0 {
        match policy {
            OverflowPolicy::Truncate => {
                tracing::debug!(target: "reformat", dropped, "truncated overflowing digits");
            }
            OverflowPolicy::Reject => return Err(MaskError::Overflow(dropped)),
        }
    }

    let [a, b, c] = &groups;
    Ok(MaskBuffer::from_groups([a.as_slice(), b.as_slice(), c.as_slice()]))
}

fn slot_chars(text: &str) -> Vec<char> {
    text.chars().filter(|ch| *ch != ' ').collect()
}

/// Split on literal dashes. Missing groups stay empty; characters past a
/// group's width and any groups past the third are returned as overflow.
fn split_groups(raw: &str) -> ([Vec<char>; 3], Vec<char>) {
    let mut groups: [Vec<char>; 3] = Default::default();
    let mut overflow = Vec::new();

    for (index, part) in raw.split(SEPARATOR).enumerate() {
        let chars = slot_chars(part);
        match GROUP_BOUNDS.get(index) {
            Some(range) => {
                let width = range.len().min(chars.len());
                overflow.extend_from_slice(&chars[width..]);
                groups[index] = chars[..width].to_vec();
            }
            None => overflow.extend(chars),
        }
    }

    (groups, overflow)
}

/// Fill the groups greedily, left to right.
fn regroup(chars: &[char]) -> ([Vec<char>; 3], Vec<char>) {
    let mut groups: [Vec<char>; 3] = Default::default();
    let mut rest = chars;

    for (group, range) in groups.iter_mut().zip(GROUP_BOUNDS) {
        let take = range.len().min(rest.len());
        let (head, tail) = rest.split_at(take);
        group.extend_from_slice(head);
        rest = tail;
    }

    (groups, rest.to_vec())
}
