//! # Router Module
//!
//! Per-request dispatch context and the combinators that drive it.
//!
//! ## Overview
//!
//! A [`Router`] is built fresh for each incoming request and carries three
//! things: the request itself, a segment cursor over its path, and a
//! single-assignment resolution slot. Combinators are methods that
//! cooperatively advance and retreat the cursor and read or write the slot:
//!
//! - `index`, `path`, `param`, `pred` - segment matching with backtracking
//! - `method` (plus `get`/`post`/`put`/`delete`/`head`/`any` sugar) - verb
//!   gating at the end of the path
//! - `scheme`, `domain` - pure request gates
//! - `static_dir` - static-file gate with preserved fallthrough on miss
//! - `not_traversed`, `truncate` - backtrack-history and tail-hiding gates
//! - `terminate`, `guard` - unconditional terminals
//!
//! ## Backtracking
//!
//! A segment-consuming combinator commits only when the whole path has been
//! consumed and nothing resolved the request earlier. Otherwise it retreats,
//! leaving the cursor exactly where its siblings expect it. Getting this
//! undo/commit boundary right - including its interaction with `truncate`
//! and `not_traversed` - is the point of this module.

mod core;

pub use core::{ResolutionSlot, Router, Verb};
