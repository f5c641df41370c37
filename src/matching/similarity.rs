//! Character-level sequence similarity scoring.
//!
//! The ratio is computed by block matching: find the longest matching
//! contiguous block between the two strings, recurse on the pieces to
//! either side of it, and sum the matched character count `M`. The score is
//! `2 * M / T` where `T` is the combined length of both strings, giving a
//! value in [0.0, 1.0].

/// Normalize query text for matching: trim surrounding whitespace and lowercase.
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Similarity ratio between two strings, in [0.0, 1.0].
///
/// 1.0 means identical strings (two empty strings count as identical);
/// 0.0 means no characters in common. The comparison is case-sensitive;
/// callers lowercase beforehand. Operates on characters, not bytes.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Total number of characters covered by matching blocks.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;

    // Work list of (alo, ahi, blo, bhi) windows still to be searched.
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        total += size;
        pending.push((alo, i, blo, j));
        pending.push((i + size, ahi, j + size, bhi));
    }

    total
}

/// Find the longest matching block within `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)` such that `a[i..i + size] == b[j..j + size]`.
/// Ties resolve to the block starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0;

    // run length of the match ending at (i, j), for the previous and current i
    let mut prev: Vec<usize> = vec![0; b.len()];
    let mut cur: Vec<usize> = vec![0; b.len()];

    for i in alo..ahi {
        for j in blo..bhi {
            cur[j] = if b[j] == a[i] {
                let prev_run = if j > blo { prev[j - 1] } else { 0 };
                let run = prev_run + 1;
                if run > best_size {
                    best_size = run;
                    best_i = i + 1 - run;
                    best_j = j + 1 - run;
                }
                run
            } else {
                0
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    (best_i, best_j, best_size)
}
