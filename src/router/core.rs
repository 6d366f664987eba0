//! Router core module - hot path for request dispatch.
//!
//! One [`Router`] exists per request. It bundles the request, the segment
//! cursor, and the resolution slot, and exposes the dispatch combinators as
//! methods. Combinators nest as ordinary closures; a combinator that
//! consumes a segment does so *provisionally* and undoes the consumption if
//! its subtree fails to resolve, so sibling combinators at the same call
//! site can attempt the same segment.

use http::Method;
use tracing::{debug, info, warn};

use crate::classify::Outcome;
use crate::cursor::PathCursor;
use crate::params::ParamKind;
use crate::request::Request;
use crate::response::Response;
use crate::static_files::StaticFiles;

/// Single-assignment container for a request's final value.
///
/// Starts `Unresolved`; the first `resolve` wins and every later `resolve`
/// is ignored. Only `terminate` and `guard` go through [`force`], which
/// overrides unconditionally. Within one request the slot never goes back
/// to unresolved.
///
/// [`force`]: ResolutionSlot::force
#[derive(Debug, Default)]
pub struct ResolutionSlot(Option<Outcome>);

impl ResolutionSlot {
    /// Has a value been committed?
    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.0.is_some()
    }

    /// Commit `value` if still unresolved; otherwise keep the first value.
    pub fn resolve(&mut self, value: Outcome) {
        if self.0.is_none() {
            self.0 = Some(value);
        }
    }

    /// Overwrite whatever is in the slot. Reserved for the terminal
    /// combinators (`terminate`, `guard`).
    pub fn force(&mut self, value: Outcome) {
        self.0 = Some(value);
    }

    /// The committed value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&Outcome> {
        self.0.as_ref()
    }

    /// Consume the slot, yielding the committed value.
    #[must_use]
    pub fn into_outcome(self) -> Option<Outcome> {
        self.0
    }
}

/// Method gate for the `method` combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// Matches every request method
    Any,
    /// Matches one method, case-insensitively
    Only(Method),
}

impl Verb {
    fn matches(&self, method: &str) -> bool {
        match self {
            Verb::Any => true,
            Verb::Only(m) => m.as_str().eq_ignore_ascii_case(method),
        }
    }
}

impl From<Method> for Verb {
    fn from(m: Method) -> Self {
        Verb::Only(m)
    }
}

/// Per-request dispatch context.
///
/// Constructed fresh for every incoming request and discarded afterwards;
/// never shared and never reused. All state a combinator touches lives here,
/// so concurrency safety is structural - there is nothing ambient to leak
/// between requests.
#[derive(Debug)]
pub struct Router {
    request: Request,
    /// Lowercase method string, derived once
    method: String,
    cursor: PathCursor,
    slot: ResolutionSlot,
}

impl Router {
    /// Build a router for one request.
    ///
    /// The request path is split into blank-filtered segments once, here.
    #[must_use]
    pub fn new(request: Request) -> Self {
        let cursor = PathCursor::from_path(&request.path);
        let method = request.method.as_str().to_ascii_lowercase();
        debug!(
            method = %method,
            path = %request.path,
            segments = cursor.remaining_len(),
            "Router created"
        );
        Self {
            request,
            method,
            cursor,
            slot: ResolutionSlot::default(),
        }
    }

    /// The request being dispatched.
    #[inline]
    #[must_use]
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Read-only view of the segment cursor.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> &PathCursor {
        &self.cursor
    }

    /// Is the request resolved yet?
    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.slot.is_resolved()
    }

    /// Consume the router, yielding the resolved outcome or
    /// [`Outcome::NoMatch`] if the combinator tree fell through.
    #[must_use]
    pub fn finish(self) -> Outcome {
        match self.slot.into_outcome() {
            Some(outcome) => {
                info!(
                    method = %self.method,
                    path = %self.request.path,
                    "Request resolved"
                );
                outcome
            }
            None => Outcome::NoMatch,
        }
    }

    /// Shared tail of every segment-consuming combinator.
    ///
    /// The segment was already advanced over and `value` is what the body
    /// returned. Commit if the whole path is now consumed; otherwise the
    /// match was provisional and is undone so siblings see the original
    /// cursor. If the body resolved the slot itself the cursor stays put.
    fn commit_or_retreat(&mut self, value: Outcome) {
        if self.slot.is_resolved() {
            return;
        }
        if self.cursor.is_at_end() {
            self.slot.resolve(value);
        } else {
            self.cursor.retreat();
        }
    }

    /// Match the empty path (zero segments).
    ///
    /// The body's return value commits under the usual rule - the cursor is
    /// trivially at the end already.
    pub fn index<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Self) -> Outcome,
    {
        if self.slot.is_resolved() || !self.cursor.is_empty() {
            return;
        }
        let value = body(self);
        if !self.slot.is_resolved() {
            self.slot.resolve(value);
        }
    }

    /// Match one literal segment by exact string equality.
    pub fn path<F>(&mut self, segment: &str, body: F)
    where
        F: FnOnce(&mut Self) -> Outcome,
    {
        if self.slot.is_resolved() {
            return;
        }
        if self.cursor.peek_next() != Some(segment) {
            return;
        }
        debug!(segment = %segment, position = self.cursor.position(), "Segment matched");
        self.cursor.advance();
        let value = body(self);
        self.commit_or_retreat(value);
    }

    /// Match one segment against a typed parser; the body receives the
    /// parsed value.
    ///
    /// The gate is "pattern fully matches the segment and the parser accepts
    /// it" - see [`ParamKind`] for the split between the two.
    pub fn param<P, F>(&mut self, kind: &P, body: F)
    where
        P: ParamKind,
        F: FnOnce(&mut Self, P::Value) -> Outcome,
    {
        if self.slot.is_resolved() {
            return;
        }
        let parsed = match self.cursor.peek_next() {
            Some(seg) if kind.pattern().is_match(seg) => kind.parse(seg),
            _ => return,
        };
        let Some(value) = parsed else { return };
        self.cursor.advance();
        let value = body(self, value);
        self.commit_or_retreat(value);
    }

    /// Match one segment with an arbitrary predicate; `None` is the falsy
    /// case and the body receives whatever the predicate produced.
    pub fn pred<T, P, F>(&mut self, test: P, body: F)
    where
        P: FnOnce(&str) -> Option<T>,
        F: FnOnce(&mut Self, T) -> Outcome,
    {
        if self.slot.is_resolved() {
            return;
        }
        let tested = match self.cursor.peek_next() {
            Some(seg) => test(seg),
            None => return,
        };
        let Some(value) = tested else { return };
        self.cursor.advance();
        let value = body(self, value);
        self.commit_or_retreat(value);
    }

    /// Gate on the request method at the end of the path.
    ///
    /// Fires only once every segment has been consumed; the body's value
    /// commits if the body did not already resolve the slot itself.
    pub fn method<F>(&mut self, verb: Verb, body: F)
    where
        F: FnOnce(&mut Self) -> Outcome,
    {
        if self.slot.is_resolved() || !self.cursor.is_at_end() {
            return;
        }
        if !verb.matches(&self.method) {
            return;
        }
        let value = body(self);
        if !self.slot.is_resolved() {
            self.slot.resolve(value);
        }
    }

    /// `method(GET, ..)`.
    pub fn get<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Self) -> Outcome,
    {
        self.method(Verb::Only(Method::GET), body);
    }

    /// `method(POST, ..)`.
    pub fn post<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Self) -> Outcome,
    {
        self.method(Verb::Only(Method::POST), body);
    }

    /// `method(PUT, ..)`.
    pub fn put<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Self) -> Outcome,
    {
        self.method(Verb::Only(Method::PUT), body);
    }

    /// `method(DELETE, ..)`.
    pub fn delete<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Self) -> Outcome,
    {
        self.method(Verb::Only(Method::DELETE), body);
    }

    /// `method(HEAD, ..)`.
    pub fn head<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Self) -> Outcome,
    {
        self.method(Verb::Only(Method::HEAD), body);
    }

    /// `method(Any, ..)` - fires for every verb at the end of the path.
    pub fn any<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Self) -> Outcome,
    {
        self.method(Verb::Any, body);
    }

    /// Pure gate on the request scheme; no path or resolution effect.
    pub fn scheme<F>(&mut self, scheme: &str, body: F)
    where
        F: FnOnce(&mut Self),
    {
        if self.request.scheme == scheme {
            body(self);
        }
    }

    /// Pure gate on the request host; no path or resolution effect.
    pub fn domain<F>(&mut self, host: &str, body: F)
    where
        F: FnOnce(&mut Self),
    {
        if self.request.host == host {
            body(self);
        }
    }

    /// Static-file gate.
    ///
    /// Fires for GET requests whose next segment is one of `segments`. A
    /// successful lookup over the joined remaining path consumes the cursor
    /// to the end and commits a file outcome. A lookup miss leaves the
    /// cursor and slot untouched so later combinators can still claim the
    /// path.
    pub fn static_dir(&mut self, segments: &[&str], files: &StaticFiles) {
        if self.slot.is_resolved() || self.cursor.is_at_end() {
            return;
        }
        if self.request.method != Method::GET {
            return;
        }
        let gated = match self.cursor.peek_next() {
            Some(next) => segments.iter().any(|s| *s == next),
            None => false,
        };
        if !gated {
            return;
        }
        let rel = self.cursor.remaining_path();
        if let Some(handle) = files.lookup(&rel) {
            while self.cursor.advance().is_some() {}
            info!(path = %rel, file = %handle.path.display(), "Static file matched");
            self.slot.resolve(Outcome::File(handle));
        }
    }

    /// Run the body only if the depth ahead of the cursor has never been
    /// advanced over during this request.
    ///
    /// Stops a re-entered route tree from matching the same depth twice:
    /// once a sibling has consumed (and possibly retreated from) the next
    /// position, the gate stays closed.
    pub fn not_traversed<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Self),
    {
        if self.cursor.was_next_traversed_from_here() {
            return;
        }
        body(self);
    }

    /// Hide the unconsumed tail from the body.
    ///
    /// The body sees "end of path", so nested `method`/`index`-style gates
    /// fire while trailing segments are ignored. If the body resolves, the
    /// truncation sticks; if it does not, the saved cursor is restored and
    /// the tail reappears for sibling combinators.
    pub fn truncate<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Self),
    {
        if self.slot.is_resolved() {
            body(self);
            return;
        }
        let saved = self.cursor.clone();
        self.cursor.truncate_remaining();
        body(self);
        if !self.slot.is_resolved() {
            self.cursor = saved;
        }
    }

    /// Unconditionally resolve the request with `value`, short-circuiting
    /// everything else.
    pub fn terminate<O: Into<Outcome>>(&mut self, value: O) {
        self.slot.force(value.into());
    }

    /// Resolve to a 403 if `check` is false; no-op otherwise.
    pub fn guard(&mut self, check: bool, message: Option<&str>) {
        if !check {
            let msg = message.unwrap_or("Forbidden");
            warn!(path = %self.request.path, message = %msg, "Guard rejected request");
            self.slot.force(Outcome::Response(Response::forbidden(msg)));
        }
    }
}
