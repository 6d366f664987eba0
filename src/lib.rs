//! # ziproute
//!
//! **ziproute** is a backtracking, combinator-based request router: it
//! matches an incoming HTTP-like request against a tree of composable
//! path-matching rules and resolves it to exactly one response value.
//!
//! It is a routing/dispatch engine, not a web server. Transport, connection
//! handling, and body parsing are external collaborators; embedders build a
//! [`Request`], run their combinator tree, and get back a [`Response`].
//!
//! ## Architecture
//!
//! - **[`cursor`]** - the path-segment zipper the combinators walk, with
//!   O(1) advance/retreat and backtrack-history tracking
//! - **[`router`]** - the per-request context and dispatch combinators
//! - **[`params`]** - typed path-parameter parsers (`int`, `slug`, `date`,
//!   `uuid`, custom pattern/parse pairs)
//! - **[`compose`]** - first-match-wins composition over independent
//!   handlers
//! - **[`classify`]** - the outcome enum and its mapping to wire responses
//! - **[`response`]** / **[`request`]** - the wire-facing records
//! - **[`static_files`]** - the static-file lookup collaborator
//! - **[`runtime_config`]** - environment-variable configuration
//!
//! ## Dispatch model
//!
//! Combinators nest as ordinary closures against a mutable per-request
//! [`Router`]. A segment-consuming combinator's match is *provisional*: it
//! commits only when the whole path ends up consumed (or something resolves
//! the request explicitly), and otherwise undoes its consumption so sibling
//! combinators can attempt the same segment. Bodies whose nested gates all
//! fall through should return [`Outcome::NoMatch`], which classifies as 404
//! and lets sibling handlers in a [`routes`] composition take over.
//!
//! ## Quick Start
//!
//! ```rust
//! use ziproute::params::IntParam;
//! use ziproute::{respond, Classifier, Outcome, Request, Router};
//!
//! let blog = |r: &mut Router| {
//!     r.path("blog", |r| {
//!         r.param(&IntParam, |r, id: i64| {
//!             r.get(|_r| Outcome::from(format!("Post #{id}")));
//!             Outcome::NoMatch
//!         });
//!         Outcome::NoMatch
//!     });
//! };
//!
//! let resp = respond(&Request::get("/blog/1"), &[&blog], &Classifier::new());
//! assert_eq!(resp.status, 200);
//! assert_eq!(resp.body.as_text(), Some("Post #1"));
//! ```
//!
//! ## Concurrency
//!
//! Execution is single-threaded, synchronous, and cooperative per request:
//! combinators are ordinary nested calls with no suspension points. Router
//! state is request-local and never reused, so there is no shared mutable
//! state to lock. `routes` composition stays strictly sequential in result
//! determinism - first match wins by argument order.

pub mod classify;
pub mod compose;
pub mod cursor;
pub mod params;
pub mod request;
pub mod response;
pub mod router;
pub mod runtime_config;
pub mod static_files;

pub use classify::{Classifier, Format, Outcome};
pub use compose::{respond, routes, Handler};
pub use cursor::PathCursor;
pub use params::{CustomParam, DateParam, IntParam, ParamKind, SlugParam, UuidParam};
pub use request::Request;
pub use response::{Body, HeaderVec, Response};
pub use router::{ResolutionSlot, Router, Verb};
pub use static_files::{FileHandle, StaticFiles};
