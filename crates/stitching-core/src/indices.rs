use crate::SubsetError;

/// Indices in `[0, total)` that are not listed in `keep`, ascending.
///
/// Fails if `keep` names an index outside the range or the same index twice,
/// since either would break the keep/delete partition.
pub fn complement(total: usize, keep: &[usize]) -> Result<Vec<usize>, SubsetError> {
    let mut kept = vec![false; total];
    for &index in keep {
        match kept.get_mut(index) {
            None => return Err(SubsetError::IndexOutOfRange { index, len: total }),
            Some(true) => return Err(SubsetError::DuplicateIndex { index }),
            Some(slot) => *slot = true,
        }
    }
    Ok(kept
        .iter()
        .enumerate()
        .filter_map(|(index, &is_kept)| (!is_kept).then_some(index))
        .collect())
}

/// Positions to remove, one at a time, from a shrinking collection.
///
/// `delete_indices` use the original numbering and must be strictly ascending.
/// Every earlier removal shifts later elements down by one, so the k-th entry
/// maps to position `delete_indices[k] - k`.
pub fn removal_positions(delete_indices: &[usize]) -> Result<Vec<usize>, SubsetError> {
    let mut positions = Vec::with_capacity(delete_indices.len());
    let mut removed = 0usize;
    let mut prev: Option<usize> = None;
    for &index in delete_indices {
        if let Some(prev) = prev {
            if index <= prev {
                return Err(SubsetError::UnsortedDeleteIndices { prev, next: index });
            }
        }
        positions.push(index - removed);
        removed += 1;
        prev = Some(index);
    }
    Ok(positions)
}

/// Elements of `items` at `indices`, in the order `indices` lists them.
pub fn select_by_index<T: Clone>(items: &[T], indices: &[usize]) -> Result<Vec<T>, SubsetError> {
    indices
        .iter()
        .map(|&index| {
            items.get(index).cloned().ok_or(SubsetError::IndexOutOfRange {
                index,
                len: items.len(),
            })
        })
        .collect()
}
