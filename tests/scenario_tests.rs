//! End-to-end dispatch scenarios: nested routes, typed params, truncation.

mod common;

use std::collections::HashMap;

use ziproute::params::{CustomParam, IntParam};
use ziproute::{respond, routes, Classifier, Handler, Outcome, Request, Router};

fn blog_handler(posts: &HashMap<i64, String>) -> impl Fn(&mut Router) + '_ {
    move |r: &mut Router| {
        r.path("blog", |r| {
            r.param(&IntParam, |r, id: i64| {
                r.get(|_r| match posts.get(&id) {
                    Some(title) => Outcome::from(title.clone()),
                    None => Outcome::NoMatch,
                });
                r.path("comments", |r| {
                    r.truncate(|r| {
                        r.get(|_r| Outcome::from(format!("Get comments for post with id: {id}")));
                    });
                    Outcome::NoMatch
                });
                Outcome::NoMatch
            });
            Outcome::NoMatch
        });
    }
}

fn posts_table() -> HashMap<i64, String> {
    let mut posts = HashMap::new();
    posts.insert(1, "Post #1".to_string());
    posts
}

#[test]
fn test_blog_post_lookup() {
    common::init_tracing();
    let posts = posts_table();
    let handler = blog_handler(&posts);
    let h: Handler<'_> = &handler;
    let resp = respond(&Request::get("/blog/1"), &[h], &Classifier::new());
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body.as_text(), Some("Post #1"));
}

#[test]
fn test_blog_unknown_post_is_404() {
    common::init_tracing();
    let posts = posts_table();
    let handler = blog_handler(&posts);
    let h: Handler<'_> = &handler;
    let resp = respond(&Request::get("/blog/7"), &[h], &Classifier::new());
    assert_eq!(resp.status, 404);
}

#[test]
fn test_blog_comments_fully_consumed() {
    common::init_tracing();
    let posts = posts_table();
    let handler = blog_handler(&posts);
    let h: Handler<'_> = &handler;
    let resp = respond(&Request::get("/blog/1/comments"), &[h], &Classifier::new());
    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.body.as_text(),
        Some("Get comments for post with id: 1")
    );
}

#[test]
fn test_blog_comments_trailing_segment_swallowed_by_truncate() {
    common::init_tracing();
    let posts = posts_table();
    let handler = blog_handler(&posts);
    let h: Handler<'_> = &handler;
    let resp = respond(
        &Request::get("/blog/1/comments/35"),
        &[h],
        &Classifier::new(),
    );
    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.body.as_text(),
        Some("Get comments for post with id: 1")
    );
}

#[test]
fn test_blog_comments_trailing_segment_without_truncate_is_404() {
    common::init_tracing();
    let handler = |r: &mut Router| {
        r.path("blog", |r| {
            r.param(&IntParam, |r, id: i64| {
                r.path("comments", |r| {
                    // no truncation: the POST gate needs a fully consumed path
                    r.post(|_r| Outcome::from(format!("Post comment for post with id: {id}")));
                    Outcome::NoMatch
                });
                Outcome::NoMatch
            });
            Outcome::NoMatch
        });
    };
    let h: Handler<'_> = &handler;
    let resp = respond(
        &Request::post("/blog/1/comments/35"),
        &[h],
        &Classifier::new(),
    );
    assert_eq!(resp.status, 404);
}

#[test]
fn test_zipcode_custom_param() {
    common::init_tracing();
    let zip = CustomParam::new("[0-9]{5}", |s: &str| s.to_string()).unwrap();
    let handler = move |r: &mut Router| {
        r.path("zipcode", |r| {
            r.param(&zip, |r, code: String| {
                r.get(|_r| Outcome::from(format!("Your zipcode is: {code}")));
                Outcome::NoMatch
            });
            Outcome::NoMatch
        });
    };
    let h: Handler<'_> = &handler;
    let resp = respond(&Request::get("/zipcode/90210"), &[h], &Classifier::new());
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body.as_text(), Some("Your zipcode is: 90210"));

    // six digits does not satisfy the anchored pattern
    let resp = respond(&Request::get("/zipcode/902101"), &[h], &Classifier::new());
    assert_eq!(resp.status, 404);
}

#[test]
fn test_unmatched_path_is_404() {
    common::init_tracing();
    let posts = posts_table();
    let handler = blog_handler(&posts);
    let h: Handler<'_> = &handler;
    let resp = respond(&Request::get("/nope"), &[h], &Classifier::new());
    assert_eq!(resp.status, 404);
    assert_eq!(resp.body.as_text(), Some("Not Found"));
}

#[test]
fn test_void_terminal_is_204() {
    common::init_tracing();
    let handler = |r: &mut Router| {
        r.path("health", |r| {
            r.get(|_r| Outcome::Void);
            Outcome::NoMatch
        });
    };
    let h: Handler<'_> = &handler;
    let resp = respond(&Request::get("/health"), &[h], &Classifier::new());
    assert_eq!(resp.status, 204);
    assert!(resp.body.is_empty());
}

#[test]
fn test_first_match_wins_across_handlers() {
    common::init_tracing();
    let h1 = |r: &mut Router| {
        r.path("shared", |r| {
            r.get(|_r| Outcome::from("from h1"));
            Outcome::NoMatch
        });
    };
    let h2 = |r: &mut Router| {
        r.path("shared", |r| {
            r.get(|_r| Outcome::from("from h2"));
            Outcome::NoMatch
        });
        r.path("only-h2", |r| {
            r.get(|_r| Outcome::from("h2 exclusive"));
            Outcome::NoMatch
        });
    };
    let handlers: &[Handler<'_>] = &[&h1, &h2];

    let outcome = routes(&Request::get("/shared"), handlers);
    assert!(matches!(outcome, Outcome::Text(s) if s == "from h1"));

    let outcome = routes(&Request::get("/only-h2"), handlers);
    assert!(matches!(outcome, Outcome::Text(s) if s == "h2 exclusive"));
}
