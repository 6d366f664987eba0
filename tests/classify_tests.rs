//! Classification boundary: outcome → wire response.

mod common;

use http::Method;
use serde_json::json;
use ziproute::runtime_config::RuntimeConfig;
use ziproute::{Classifier, Format, Outcome, Request, Router};

#[test]
fn test_structured_collections_serialize_per_format() {
    common::init_tracing();
    let classifier = Classifier::new();

    // ordered sequence
    let resp = classifier.classify(Outcome::from(json!([1, 2, 3])));
    assert_eq!(resp.body.as_text(), Some("[1,2,3]"));

    // key-value mapping
    let resp = classifier.classify(Outcome::from(json!({"k": "v"})));
    assert_eq!(resp.get_header("content-type"), Some("application/json"));
    assert_eq!(resp.body.as_text(), Some(r#"{"k":"v"}"#));

    // alternate mode for a scoped block: build a YAML classifier there
    let yaml = Classifier::with_format(Format::Yaml);
    let resp = yaml.classify(Outcome::from(json!({"k": "v"})));
    assert_eq!(resp.get_header("content-type"), Some("application/yaml"));
    assert_eq!(resp.body.as_text(), Some("k: v\n"));
}

#[test]
fn test_deferred_reference_reclassified_recursively() {
    common::init_tracing();
    let outcome = Outcome::deferred(|| Outcome::deferred(|| Outcome::from(json!({"deep": true}))));
    let resp = Classifier::new().classify(outcome);
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body.as_text(), Some(r#"{"deep":true}"#));
}

#[test]
fn test_resolved_void_from_dispatch_is_204() {
    common::init_tracing();
    let mut r = Router::new(Request::new(Method::DELETE, "/items/9"));
    r.path("items", |r| {
        r.path("9", |r| {
            r.delete(|_r| Outcome::Void);
            Outcome::NoMatch
        });
        Outcome::NoMatch
    });
    let resp = Classifier::new().classify(r.finish());
    assert_eq!(resp.status, 204);
    assert!(resp.body.is_empty());
}

#[test]
fn test_runtime_config_format_from_env() {
    common::init_tracing();
    std::env::set_var("ZIPROUTE_FORMAT", "yaml");
    assert_eq!(RuntimeConfig::from_env().format, Format::Yaml);
    assert_eq!(Classifier::from_env().format, Format::Yaml);

    std::env::set_var("ZIPROUTE_FORMAT", "not-a-format");
    assert_eq!(RuntimeConfig::from_env().format, Format::Json);

    std::env::remove_var("ZIPROUTE_FORMAT");
    assert_eq!(RuntimeConfig::from_env().format, Format::Json);
}
