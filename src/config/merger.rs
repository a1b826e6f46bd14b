//! Layering of YAML config files.
//!
//! - Mappings merge key by key
//! - Anything else in the overlay replaces the base value
//! - A `null` in the overlay removes the key, restoring its default

use serde_yaml::Value;

/// Merge `overlay` onto `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let (Value::Mapping(base_map), Value::Mapping(overlay_map)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut merged = base_map.clone();
    for (key, value) in overlay_map {
        if value.is_null() {
            merged.remove(key);
            continue;
        }
        let next = match base_map.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    Value::Mapping(merged)
}

/// Merge configs in order; the last one has the highest priority.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn nested_sections_merge() {
        let base = yaml("analytics:\n  enabled: false\n  log_file: a.jsonl\n");
        let overlay = yaml("analytics:\n  log_file: b.jsonl\n");

        let merged = deep_merge(&base, &overlay);
        assert_eq!(merged["analytics"]["enabled"], false);
        assert_eq!(merged["analytics"]["log_file"], "b.jsonl");
    }

    #[test]
    fn null_restores_default() {
        let base = yaml("data_dir: /tmp/solace\nstorage_file: s.json\n");
        let overlay = yaml("data_dir: null\n");

        let merged = deep_merge(&base, &overlay);
        assert!(merged.get("data_dir").is_none());
        assert_eq!(merged["storage_file"], "s.json");
    }

    #[test]
    fn scalar_replaces_section() {
        let merged = deep_merge(&yaml("output:\n  mode: quiet\n"), &yaml("output: loud\n"));
        assert_eq!(merged["output"], "loud");
    }

    #[test]
    fn later_configs_win() {
        let merged = merge_configs(&[yaml("a: 1\nb: 2"), yaml("b: 3"), yaml("{}")]);
        assert_eq!(merged["a"], 1);
        assert_eq!(merged["b"], 3);
    }

    #[test]
    fn no_configs_is_empty_mapping() {
        assert!(merge_configs(&[]).as_mapping().unwrap().is_empty());
    }
}
