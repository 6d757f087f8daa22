//! Linear merges over posting lists sorted by document ID.
//!
//! Every function takes two ascending, duplicate-free lists and returns an
//! ascending, duplicate-free list borrowing the original postings.

use std::collections::VecDeque;

use ahash::AHashSet;

use crate::index::posting::{DocId, Posting};

/// Postings of `p1` whose document also appears in `p2`.
pub fn intersect<'a>(p1: &[&'a Posting], p2: &[&'a Posting]) -> Vec<&'a Posting> {
    let mut result = Vec::with_capacity(p1.len().min(p2.len()));
    let (mut i, mut j) = (0, 0);

    while i < p1.len() && j < p2.len() {
        match p1[i].doc_id.cmp(&p2[j].doc_id) {
            std::cmp::Ordering::Equal => {
                result.push(p1[i]);
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
        }
    }

    result
}

/// Postings whose document appears in either list; `p1`'s posting wins ties.
pub fn union<'a>(p1: &[&'a Posting], p2: &[&'a Posting]) -> Vec<&'a Posting> {
    let mut result = Vec::with_capacity(p1.len().max(p2.len()));
    let (mut i, mut j) = (0, 0);

    while i < p1.len() && j < p2.len() {
        match p1[i].doc_id.cmp(&p2[j].doc_id) {
            std::cmp::Ordering::Less => {
                result.push(p1[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                result.push(p2[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                result.push(p1[i]);
                i += 1;
                j += 1;
            }
        }
    }
    result.extend_from_slice(&p1[i..]);
    result.extend_from_slice(&p2[j..]);

    result
}

/// Postings of `p1` whose document does not appear in `p2`.
pub fn difference<'a>(p1: &[&'a Posting], p2: &[&'a Posting]) -> Vec<&'a Posting> {
    let excluded: AHashSet<DocId> = p2.iter().map(|p| p.doc_id).collect();
    p1.iter()
        .copied()
        .filter(|p| !excluded.contains(&p.doc_id))
        .collect()
}

/// Postings of `p1` whose document also appears in `p2` with some position of
/// `p1` within `slop` of some position of `p2`.
pub fn positional_intersect<'a>(
    p1: &[&'a Posting],
    p2: &[&'a Posting],
    slop: u32,
) -> Vec<&'a Posting> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < p1.len() && j < p2.len() {
        match p1[i].doc_id.cmp(&p2[j].doc_id) {
            std::cmp::Ordering::Equal => {
                if within_slop(&p1[i].positions, &p2[j].positions, slop) {
                    result.push(p1[i]);
                }
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
        }
    }

    result
}

/// Whether some `a` in `left` and `b` in `right` satisfy `|a - b| <= slop`.
///
/// Both position lists are ascending; `right` is scanned once.
fn within_slop(left: &[u32], right: &[u32], slop: u32) -> bool {
    let mut window: VecDeque<u32> = VecDeque::new();
    let mut k = 0;

    for &a in left {
        let upper = a.saturating_add(slop);
        while k < right.len() && right[k] <= upper {
            let b = right[k];
            if a.abs_diff(b) <= slop {
                window.push_back(b);
            }
            k += 1;
        }
        while window.front().is_some_and(|&b| a.abs_diff(b) > slop) {
            window.pop_front();
        }
        if !window.is_empty() {
            return true;
        }
    }

    false
}
