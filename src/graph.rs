//! Generic breadth-first search over possibly cyclic graphs.
//!
//! Nodes are borrowed, and identity is decided by a caller-supplied key, so a
//! graph that reaches the same node along several edges (or through a cycle)
//! visits it once.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Breadth-first search returning the first node that satisfies `matches`.
///
/// `roots` are visited in order, then their neighbours level by level. A node
/// whose key was already seen is skipped, so the search terminates on cyclic
/// graphs.
pub fn breadth_first_find<'a, N, K, R, I, FK, FN, FM>(
    roots: R,
    key: FK,
    neighbours: FN,
    mut matches: FM,
) -> Option<&'a N>
where
    N: 'a,
    K: Eq + Hash,
    R: IntoIterator<Item = &'a N>,
    I: IntoIterator<Item = &'a N>,
    FK: Fn(&'a N) -> K,
    FN: Fn(&'a N) -> I,
    FM: FnMut(&'a N) -> bool,
{
    let mut queue: VecDeque<&'a N> = roots.into_iter().collect();
    let mut visited = HashSet::new();
    while let Some(node) = queue.pop_front() {
        if !visited.insert(key(node)) {
            continue;
        }
        if matches(node) {
            return Some(node);
        }
        queue.extend(neighbours(node));
    }
    None
}

/// Identity key for borrowed nodes: their address
#[must_use]
pub fn by_address<T>(node: &T) -> *const T {
    node as *const T
}
