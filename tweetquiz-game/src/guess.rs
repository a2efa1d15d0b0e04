//! Turn a line the player typed into a pick between the two accounts.
use crate::pool::Side;
use tweetquiz_common::{AccountPair, normalize_handle};

/// Either handle (any case, `@` optional), else `1` or `2`. Anything else is `None`.
///
/// Handles are matched before digits, so an account literally named `2` is picked
/// by typing `2` even when it sits on the first side.
pub fn parse_guess(input: &str, pair: &AccountPair) -> Option<Side> {
    let handle = normalize_handle(input);
    if handle.is_empty() {
        return None;
    }
    if let Some(side) = [Side::First, Side::Second]
        .into_iter()
        .find(|side| side.handle(pair).eq_ignore_ascii_case(&handle))
    {
        return Some(side);
    }

    match input.trim() {
        "1" => Some(Side::First),
        "2" => Some(Side::Second),
        _ => None,
    }
}
