//! Bounded retry helper for download attempts.

/// Run `op` up to `max_attempts` times, returning the first success.
///
/// Attempts are numbered from 1 and the attempt number is passed to `op`.
/// There is no delay between attempts. Errors from intermediate attempts are
/// discarded; when every attempt fails, the final attempt's error is
/// returned. A `max_attempts` of zero is treated as one attempt.
pub fn with_attempts<T, E>(
    max_attempts: u32,
    mut op: impl FnMut(u32) -> std::result::Result<T, E>,
) -> std::result::Result<T, E> {
    let attempts = max_attempts.max(1);

    for attempt in 1..attempts {
        if let Ok(value) = op(attempt) {
            return Ok(value);
        }
    }

    op(attempts)
}
