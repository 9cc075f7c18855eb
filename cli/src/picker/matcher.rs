use taskpick_core::api::{PickItem, PickerOptions};

/// Case-insensitive subsequence match of `filter` against `label`.
///
/// Returns `(span, start)` of the tightest left-most greedy match; smaller
/// is better. An empty filter matches everything with `(0, 0)`.
pub fn fuzzy_score(label: &str, filter: &str) -> Option<(usize, usize)> {
    let mut wanted = filter.chars().flat_map(char::to_lowercase).peekable();
    if wanted.peek().is_none() {
        return Some((0, 0));
    }

    let mut start = None;
    for (pos, ch) in label.chars().flat_map(char::to_lowercase).enumerate() {
        let Some(&next) = wanted.peek() else {
            break;
        };
        if ch == next {
            let first = *start.get_or_insert(pos);
            wanted.next();
            if wanted.peek().is_none() {
                return Some((pos - first, first));
            }
        }
    }
    None
}

/// Indices into `items` the picker should show, in display order.
pub fn visible_entries(
    items: &[Box<dyn PickItem>],
    filter: &str,
    options: &PickerOptions,
) -> Vec<usize> {
    if !options.match_on_label || filter.trim().is_empty() {
        return (0..items.len()).collect();
    }

    let mut scored: Vec<(usize, (usize, usize))> = items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| fuzzy_score(item.label(), filter.trim()).map(|s| (idx, s)))
        .collect();
    if options.sort_by_relevance {
        scored.sort_by_key(|(_, score)| *score);
    }
    scored.into_iter().map(|(idx, _)| idx).collect()
}
