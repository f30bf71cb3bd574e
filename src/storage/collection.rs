//! Linear-scan helpers over record collections.

/// Remove and return the first element matching `pred`.
pub fn remove_first<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> Option<T> {
    let idx = items.iter().position(pred)?;
    Some(items.remove(idx))
}

/// Remove every element matching `pred`, returning them in their original order.
pub fn remove_all<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> Vec<T> {
    let mut removed = Vec::new();
    let mut kept = Vec::with_capacity(items.len());
    for item in items.drain(..) {
        if pred(&item) {
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    *items = kept;
    removed
}

/// All elements matching `pred`, in insertion order.
pub fn query<T>(items: &[T], pred: impl Fn(&T) -> bool) -> Vec<&T> {
    items.iter().filter(|item| pred(*item)).collect()
}
