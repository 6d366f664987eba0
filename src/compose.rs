//! First-match-wins composition over independent handlers.
//!
//! Each handler is a complete Router entry point with its own fresh cursor
//! and slot. Handlers run strictly in argument order; the first outcome
//! that is not the no-match sentinel is final. There is no shared mutable
//! state between handler invocations, so "first match wins" is purely a
//! matter of evaluation order.

use tracing::debug;

use crate::classify::{Classifier, Outcome};
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// A Router entry point: a function that runs combinators against one
/// request context.
pub type Handler<'a> = &'a dyn Fn(&mut Router);

/// Try each handler in order against a fresh router; first non-`NoMatch`
/// outcome wins. Yields `NoMatch` when every handler falls through, which
/// classification turns into the 404 response.
#[must_use]
pub fn routes(request: &Request, handlers: &[Handler<'_>]) -> Outcome {
    for (idx, handler) in handlers.iter().enumerate() {
        let mut router = Router::new(request.clone());
        handler(&mut router);
        let outcome = router.finish();
        if !outcome.is_no_match() {
            debug!(handler_index = idx, "Handler matched");
            return outcome;
        }
    }
    debug!(
        handler_count = handlers.len(),
        path = %request.path,
        "All handlers fell through"
    );
    Outcome::NoMatch
}

/// Compose and classify in one step: the final wire response for `request`.
#[must_use]
pub fn respond(request: &Request, handlers: &[Handler<'_>], classifier: &Classifier) -> Response {
    classifier.classify(routes(request, handlers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let h1: Handler<'_> = &|r: &mut Router| r.path("a", |_r| Outcome::from("h1"));
        let h2: Handler<'_> = &|r: &mut Router| r.path("a", |_r| Outcome::from("h2"));
        let outcome = routes(&Request::get("/a"), &[h1, h2]);
        assert!(matches!(outcome, Outcome::Text(s) if s == "h1"));
    }

    #[test]
    fn test_fallthrough_to_second_handler() {
        let h1: Handler<'_> = &|r: &mut Router| r.path("x", |_r| Outcome::from("h1"));
        let h2: Handler<'_> = &|r: &mut Router| r.path("a", |_r| Outcome::from("h2"));
        let outcome = routes(&Request::get("/a"), &[h1, h2]);
        assert!(matches!(outcome, Outcome::Text(s) if s == "h2"));
    }

    #[test]
    fn test_all_fall_through() {
        let h1: Handler<'_> = &|r: &mut Router| r.path("x", |_r| Outcome::from("h1"));
        assert!(routes(&Request::get("/a"), &[h1]).is_no_match());
    }

    #[test]
    fn test_respond_maps_no_match_to_404() {
        let resp = respond(&Request::get("/a"), &[], &Classifier::new());
        assert_eq!(resp.status, 404);
    }
}
