use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Current wall-clock time in the host's local offset.
///
/// Falls back to UTC when the platform cannot report a local offset.
pub fn local_now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    match UtcOffset::current_local_offset() {
        Ok(offset) => wall_clock(now.to_offset(offset)),
        Err(err) => {
            tracing::warn!(%err, "local offset unavailable, using UTC for greeting");
            wall_clock(now)
        }
    }
}

/// Drops the offset, keeping the calendar date and time as seen locally.
pub fn wall_clock(datetime: OffsetDateTime) -> PrimitiveDateTime {
    PrimitiveDateTime::new(datetime.date(), datetime.time())
}
