use std::cmp::Ordering;

use crate::collection::GrowableContainer;
use crate::error::Result;
use crate::record::Record;

/// Stable top-down merge sort of the whole container
///
/// Containers with fewer than two elements are left untouched. Equal
/// elements keep their input order because ties are taken from the left run.
/// A single scratch buffer of `len` elements is reused by every merge.
pub fn merge_sort<T, F>(container: &mut GrowableContainer<T>, compare: F) -> Result<()>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let len = container.len();
    if len <= 1 {
        return Ok(());
    }

    tracing::debug!(len, "merge sort");
    let mut buffer = Vec::with_capacity(len);
    sort_range(container, 0, len - 1, &compare, &mut buffer)
}

/// Sort the inclusive range `[left, right]`
fn sort_range<T, F>(
    container: &mut GrowableContainer<T>,
    left: usize,
    right: usize,
    compare: &F,
    buffer: &mut Vec<T>,
) -> Result<()>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if left < right {
        let mid = left + (right - left) / 2;
        sort_range(container, left, mid, compare, buffer)?;
        sort_range(container, mid + 1, right, compare, buffer)?;
        merge(container, left, mid, right, compare, buffer)?;
    }
    Ok(())
}

/// Merge the sorted runs `[left, mid]` and `[mid + 1, right]`
fn merge<T, F>(
    container: &mut GrowableContainer<T>,
    left: usize,
    mid: usize,
    right: usize,
    compare: &F,
    buffer: &mut Vec<T>,
) -> Result<()>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    buffer.clear();
    let mut i = left;
    let mut j = mid + 1;

    while i <= mid && j <= right {
        let a = container.get(i)?;
        let b = container.get(j)?;
        // `<=` keeps the left element first on ties
        if compare(a, b) != Ordering::Greater {
            buffer.push(a.clone());
            i += 1;
        } else {
            buffer.push(b.clone());
            j += 1;
        }
    }
    while i <= mid {
        buffer.push(container.get(i)?.clone());
        i += 1;
    }
    while j <= right {
        buffer.push(container.get(j)?.clone());
        j += 1;
    }

    for (offset, element) in buffer.drain(..).enumerate() {
        container.set(left + offset, element)?;
    }
    Ok(())
}

/// Sort only the elements matching `predicate`
///
/// Matching elements are pulled out together with their absolute indices,
/// merge sorted, and written back into the same set of indices in order.
/// Everything else stays exactly where it was.
pub fn sort_selected<T, P, F>(
    container: &mut GrowableContainer<T>,
    predicate: P,
    compare: F,
) -> Result<()>
where
    T: Clone,
    P: Fn(&T) -> bool,
    F: Fn(&T, &T) -> Ordering,
{
    if container.is_empty() {
        return Ok(());
    }

    let mut slots = Vec::new();
    let mut matches = GrowableContainer::new();
    for (index, element) in container.iter().enumerate() {
        if predicate(element) {
            slots.push(index);
            matches.append(element.clone());
        }
    }

    if matches.is_empty() {
        return Ok(());
    }

    tracing::debug!(matched = matches.len(), total = container.len(), "selective sort");
    merge_sort(&mut matches, compare)?;

    for (index, element) in slots.into_iter().zip(matches) {
        container.set(index, element)?;
    }
    Ok(())
}

/// Selection used by the even-id sort
pub fn is_even_id(record: &Record) -> bool {
    record.id() % 2 == 0
}
