//! Restricting a field mapping to a set of dotted paths.

use super::Fields;
use serde_json::{Map, Value};

/// Copy out the values at `paths` from `source`.
///
/// Dotted paths select nested values and keep their enclosing objects, so
/// picking `address.city` from `{"address": {"city": "x", "zip": "y"}}`
/// yields `{"address": {"city": "x"}}`. Paths missing from `source` are
/// skipped. A field holding `null` is present and is kept.
pub fn pick_paths(source: &Fields, paths: &[String]) -> Fields {
    let mut picked = Map::new();
    for path in paths {
        let segments: Vec<&str> = path.split('.').collect();
        if let Some(value) = lookup(source, &segments) {
            insert_at(&mut picked, &segments, value.clone());
        }
    }
    picked
}

fn lookup<'a>(source: &'a Fields, segments: &[&str]) -> Option<&'a Value> {
    let (first, rest) = segments.split_first()?;
    let value = source.get(*first)?;
    if rest.is_empty() {
        return Some(value);
    }
    lookup(value.as_object()?, rest)
}

fn insert_at(target: &mut Fields, segments: &[&str], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };
    if rest.is_empty() {
        target.insert((*first).to_string(), value);
        return;
    }

    let entry = target
        .entry((*first).to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    if let Value::Object(child) = entry {
        insert_at(child, rest, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn paths(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pick_top_level() {
        let source = fields(json!({"name": "Ada", "email": "ada@example.com", "ssn": "123"}));
        let picked = pick_paths(&source, &paths(&["name", "email"]));
        assert_eq!(Value::Object(picked), json!({"name": "Ada", "email": "ada@example.com"}));
    }

    #[test]
    fn test_pick_skips_missing_and_keeps_null() {
        let source = fields(json!({"name": null}));
        let picked = pick_paths(&source, &paths(&["name", "email"]));
        assert_eq!(Value::Object(picked), json!({"name": null}));
    }

    #[test]
    fn test_pick_nested_path() {
        let source = fields(json!({
            "address": {"city": "Paris", "zip": "75001", "geo": {"lat": 1, "lng": 2}},
            "name": "Ada"
        }));
        let picked = pick_paths(&source, &paths(&["address.city", "address.geo.lat"]));
        assert_eq!(
            Value::Object(picked),
            json!({"address": {"city": "Paris", "geo": {"lat": 1}}})
        );
    }

    #[test]
    fn test_pick_parent_after_child_keeps_whole_parent() {
        let source = fields(json!({"address": {"city": "Paris", "zip": "75001"}}));
        let picked = pick_paths(&source, &paths(&["address.city", "address"]));
        assert_eq!(Value::Object(picked), json!({"address": {"city": "Paris", "zip": "75001"}}));
    }

    #[test]
    fn test_pick_follows_path_order() {
        let source = fields(json!({"email": "ada@example.com", "name": "Ada", "age": 36}));
        let picked = pick_paths(&source, &paths(&["name", "age", "email"]));
        let keys: Vec<&str> = picked.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "age", "email"]);
    }

    #[test]
    fn test_pick_through_scalar_is_missing() {
        let source = fields(json!({"address": "unknown"}));
        let picked = pick_paths(&source, &paths(&["address.city"]));
        assert!(picked.is_empty());
    }
}
