use crate::header;

/// Splits a full log into contiguous line groups, one per hand.
///
/// Each group starts at a header line and extends to just before the next
/// header (or end of input). Content before the first header is discarded;
/// a trailing group with no further header is still returned. Pure: no state
/// survives between calls.
pub fn segment_hands(text: &str) -> Vec<Vec<&str>> {
    let mut groups: Vec<Vec<&str>> = Vec::new();
    let mut current: Option<Vec<&str>> = None;
    for raw in text.lines() {
        let line = raw.trim();
        if header::is_hand_header(line) {
            if let Some(group) = current.take() {
                groups.push(group);
            }
            current = Some(vec![line]);
        } else if let Some(group) = current.as_mut() {
            group.push(line);
        }
    }
    if let Some(group) = current {
        groups.push(group);
    }
    groups
}
