use std::collections::HashSet;

/// Drops every candidate present in the stop list, preserving candidate
/// order, and reports how many rows were removed.
///
/// Membership is exact string equality of the canonical form, so both sides
/// must have been normalized with the same `keep_plus` setting. An empty
/// stop list keeps everything with a removed count of zero; warning the user
/// about that case is the caller's job.
pub fn apply_stop_list(candidates: &[String], stop: &[String]) -> (Vec<String>, usize) {
    let blocked: HashSet<&str> = stop.iter().map(String::as_str).collect();

    let kept: Vec<String> = candidates
        .iter()
        .filter(|phone| !blocked.contains(phone.as_str()))
        .cloned()
        .collect();

    let removed = candidates.len() - kept.len();
    (kept, removed)
}
