//! Deterministic synthetic match data.
//!
//! Images are assigned to groups; pairs inside a group get the `inside`
//! confidence and pairs across groups get `outside`. Self-pairs are zero.

use crate::{PairwiseMatch, Real};

/// Flat row-major confidence list for `group_of.len()` images.
pub fn grouped_confidences(group_of: &[usize], inside: Real, outside: Real) -> Vec<Real> {
    let n = group_of.len();
    let mut confidences = Vec::with_capacity(n * n);
    for (i, gi) in group_of.iter().enumerate() {
        for (j, gj) in group_of.iter().enumerate() {
            let c = if i == j {
                0.0
            } else if gi == gj {
                inside
            } else {
                outside
            };
            confidences.push(c);
        }
    }
    confidences
}

/// Flat row-major [`PairwiseMatch`] list with the same confidences as
/// [`grouped_confidences`].
///
/// Records carry their `(src, dst)` indices and a match count derived from
/// them, so that reordering mistakes show up in comparisons.
pub fn grouped_matches(group_of: &[usize], inside: Real, outside: Real) -> Vec<PairwiseMatch> {
    let n = group_of.len();
    grouped_confidences(group_of, inside, outside)
        .into_iter()
        .enumerate()
        .map(|(pos, confidence)| {
            let (src, dst) = (pos / n, pos % n);
            PairwiseMatch {
                src_img_idx: Some(src),
                dst_img_idx: Some(dst),
                num_matches: 100 * src + dst,
                num_inliers: if confidence > 0.0 { 10 * src + dst } else { 0 },
                confidence,
                homography: None,
            }
        })
        .collect()
}

/// Image names `img00.jpg`, `img01.jpg`, ...
pub fn image_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("img{i:02}.jpg")).collect()
}
