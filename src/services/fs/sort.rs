use std::cmp::Ordering;

use crate::models::file_entry::{FileEntry, SortKey};

/// Sorts `entries` in place by `key`.
///
/// Equal keys are swapped in both directions, so a run of equal entries comes
/// out reversed.
pub fn sort_entries(entries: &mut [FileEntry], key: SortKey, descending: bool) {
    match key {
        SortKey::Name => bubble_sort_by(entries, descending, |a, b| a.name.cmp(&b.name)),
        SortKey::Size => bubble_sort_by(entries, descending, |a, b| a.size_bytes.cmp(&b.size_bytes)),
    }
}

/// Bubble sort that swaps adjacent items when `a >= b` (ascending) or
/// `a <= b` (descending). Stops after a pass without swaps; each pass
/// compares one pair fewer than the last, since the largest remaining item
/// has settled at the end.
pub fn bubble_sort_by<T, F>(items: &mut [T], descending: bool, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut has_swapped = true;
    let mut passes = 0;

    while has_swapped {
        has_swapped = false;

        for i in 0..items.len().saturating_sub(passes + 1) {
            let order = compare(&items[i], &items[i + 1]);
            let swap = if descending {
                order != Ordering::Greater
            } else {
                order != Ordering::Less
            };
            if swap {
                items.swap(i, i + 1);
                has_swapped = true;
            }
        }

        passes += 1;
    }
}
