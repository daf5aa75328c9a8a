//! Fixed-width binary outcome labels.

/// `index` as a left-zero-padded binary string of exactly `width` digits.
/// A zero-width register has the single label `""`.
pub fn to_label(index: usize, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    format!("{:0width$b}", index, width = width)
}

/// Unsigned index encoded by a binary label, `None` if it is not one.
pub fn to_index(label: &str) -> Option<usize> {
    if label.is_empty() {
        return Some(0);
    }
    if !label.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    usize::from_str_radix(label, 2).ok()
}
