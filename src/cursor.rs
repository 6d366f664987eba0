//! Path-segment cursor - hot path for request traversal.
//!
//! The cursor is the zipper the dispatch combinators walk: a request path is
//! split into segments once, and every combinator invocation advances or
//! retreats the boundary between already-consumed and not-yet-consumed
//! segments. Consumption is provisional until the request resolves, so
//! retreat must be as cheap as advance.

use smallvec::SmallVec;
use std::collections::HashSet;

/// Maximum path depth before segment storage spills to the heap.
/// Most request paths have ≤8 segments; deeper paths still work, they just
/// allocate.
pub const MAX_INLINE_SEGMENTS: usize = 8;

/// Stack-allocated segment storage for the dispatch hot path.
pub type SegVec = SmallVec<[String; MAX_INLINE_SEGMENTS]>;

/// Bidirectional cursor over the slash-delimited segments of a request path.
///
/// Internally two stacks: `visited` holds consumed segments most-recent-last,
/// `remaining` is stored reversed so the next segment to consume is the top
/// of its stack. Both `advance` and `retreat` are a single pop+push.
///
/// The cursor also records every position that has ever been advanced over
/// (`traversed`). That set only grows - retreat does not roll it back -
/// because its job is to answer "was this depth already matched once during
/// this request?" across backtracks, independent of the current split.
///
/// Snapshots are plain clones; restoring a snapshot is assignment. Path depth
/// is small, so a full copy is cheaper than structural sharing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathCursor {
    /// Consumed segments, most recent last.
    visited: SegVec,
    /// Unconsumed segments, stored reversed (next segment on top).
    remaining: SegVec,
    /// Positions advanced over at least once during this request's lifetime.
    traversed: HashSet<usize>,
}

impl PathCursor {
    /// Build a cursor from a request path.
    ///
    /// The path is split on `/`, blank segments are dropped (so `//a///b/`
    /// yields `["a", "b"]`), and anything after `?` is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split('?').next().unwrap_or("");
        let mut remaining: SegVec = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        remaining.reverse();
        Self {
            visited: SegVec::new(),
            remaining,
            traversed: HashSet::new(),
        }
    }

    /// Index of the last consumed segment, `-1` if none.
    #[inline]
    #[must_use]
    pub fn position(&self) -> isize {
        self.visited.len() as isize - 1
    }

    /// Consume the next segment, moving it onto the visited stack and
    /// recording its position as traversed. No-op at the end of the path.
    ///
    /// Returns the segment just consumed.
    pub fn advance(&mut self) -> Option<&str> {
        let seg = self.remaining.pop()?;
        self.visited.push(seg);
        self.traversed.insert(self.visited.len() - 1);
        self.visited.last().map(String::as_str)
    }

    /// Undo the most recent consumption, moving the segment back onto the
    /// remaining stack. No-op at the start of the path.
    ///
    /// The traversed-position set is deliberately left alone.
    pub fn retreat(&mut self) {
        if let Some(seg) = self.visited.pop() {
            self.remaining.push(seg);
        }
    }

    /// The next segment that `advance` would consume, if any.
    #[inline]
    #[must_use]
    pub fn peek_next(&self) -> Option<&str> {
        self.remaining.last().map(String::as_str)
    }

    /// True when nothing has been consumed yet.
    #[inline]
    #[must_use]
    pub fn is_at_start(&self) -> bool {
        self.visited.is_empty()
    }

    /// True when every segment has been consumed.
    #[inline]
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.remaining.is_empty()
    }

    /// True when the whole path had zero segments to begin with.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty() && self.remaining.is_empty()
    }

    /// Discard all unconsumed segments without consuming them.
    ///
    /// Position, visited segments, and the traversed set are untouched, so
    /// nested combinators see "end of path" while a saved snapshot can still
    /// restore the discarded tail.
    pub fn truncate_remaining(&mut self) {
        self.remaining.clear();
    }

    /// Was position `i` ever advanced over during this request?
    #[inline]
    #[must_use]
    pub fn was_traversed(&self, i: usize) -> bool {
        self.traversed.contains(&i)
    }

    /// Was the position directly ahead of the cursor already advanced over?
    ///
    /// This is the `not_traversed` gate: after a sibling matched this depth
    /// and retreated, the depth stays marked.
    #[inline]
    #[must_use]
    pub fn was_next_traversed_from_here(&self) -> bool {
        self.traversed.contains(&self.visited.len())
    }

    /// The unconsumed tail joined with `/`, e.g. for a file lookup.
    #[must_use]
    pub fn remaining_path(&self) -> String {
        let mut out = String::new();
        for seg in self.remaining.iter().rev() {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(seg);
        }
        out
    }

    /// Consumed segments in original order.
    #[must_use]
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    /// Number of unconsumed segments.
    #[inline]
    #[must_use]
    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }
}
