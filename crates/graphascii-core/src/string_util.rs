//! Small string helpers used when grouping labels by shared prefix or suffix.

/// Longest string that is a prefix of every item in `items`.
pub fn longest_common_prefix(items: &[&str]) -> String {
    let Some(first) = items.first() else {
        return String::new();
    };

    let mut current = *first;
    for item in &items[1..] {
        if current.is_empty() {
            break;
        }
        let common_len = current
            .chars()
            .zip(item.chars())
            .take_while(|(a, b)| a == b)
            .count();
        current = &current[..byte_len(current, common_len)];
    }

    current.to_string()
}

/// Longest string that is a suffix of every item in `items`.
pub fn longest_common_suffix(items: &[&str]) -> String {
    let reversed: Vec<String> = items.iter().map(|s| s.chars().rev().collect()).collect();
    let refs: Vec<&str> = reversed.iter().map(String::as_str).collect();
    longest_common_prefix(&refs).chars().rev().collect()
}

fn byte_len(s: &str, char_count: usize) -> usize {
    s.char_indices()
        .nth(char_count)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
