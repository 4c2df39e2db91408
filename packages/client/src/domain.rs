//! Pure helpers for the interactive session.

/// Lines of `current` that were not shown by the previous poll.
///
/// The service returns a window of recent messages, so consecutive polls
/// overlap: the longest tail of `previous` that is also a head of `current`
/// has already been printed. Without any overlap every line is new.
pub fn unseen_messages<'a>(previous: &[String], current: &'a [String]) -> &'a [String] {
    let max_overlap = previous.len().min(current.len());
    for overlap in (1..=max_overlap).rev() {
        if previous[previous.len() - overlap..] == current[..overlap] {
            return &current[overlap..];
        }
    }
    current
}
