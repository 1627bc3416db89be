//! Single-date resolution (`kal`, `parso`, `friday`, `24 november`, ...).

use chrono::NaiveDate;

use crate::engine::Resolver;
use crate::error::Result;
use crate::rules::helpers::{add_days, forward_roll};
use crate::rules::vocab::{PARSO, relative_day_offset, weekday_mentioned};

/// Resolve one phrase to one date.
///
/// ```text
/// aaj | aj | today  ─▶ anchor
/// kal | tomorrow    ─▶ anchor + 1
/// *parso*           ─▶ anchor + 2
/// *<weekday>*       ─▶ next such weekday, never the anchor itself
/// anything else     ─▶ calendar parser
/// ```
pub(crate) fn resolve_single(phrase: &str, resolver: &Resolver<'_>) -> Result<NaiveDate> {
    let phrase = phrase.trim().to_lowercase();
    let anchor = resolver.anchor;

    if let Some(offset) = relative_day_offset(&phrase) {
        return add_days(anchor, offset);
    }

    if phrase.contains(PARSO) {
        return add_days(anchor, 2);
    }

    if let Some(weekday) = weekday_mentioned(&phrase) {
        return forward_roll(anchor, weekday);
    }

    resolver.calendar.parse(&phrase, anchor)
}
