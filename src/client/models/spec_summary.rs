use serde_json::Value;

/// Headline facts of an OpenAPI document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSummary {
    pub title: String,
    pub version: String,
    pub description: String,
    pub path_count: usize,
    pub schema_count: usize,
    pub server_count: usize,
}

fn text_or(value: Option<&Value>, fallback: &str) -> String {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn object_len(value: Option<&Value>) -> usize {
    value.and_then(Value::as_object).map(|o| o.len()).unwrap_or(0)
}

impl SpecSummary {
    /// `None` unless the document is a JSON object.
    pub fn from_value(spec: &Value) -> Option<Self> {
        let spec = spec.as_object()?;
        let info = spec.get("info");
        Some(Self {
            title: text_or(info.and_then(|i| i.get("title")), "API Specification"),
            version: text_or(info.and_then(|i| i.get("version")), "1.0.0"),
            description: text_or(info.and_then(|i| i.get("description")), "No description available"),
            path_count: object_len(spec.get("paths")),
            schema_count: object_len(spec.get("components").and_then(|c| c.get("schemas"))),
            server_count: spec.get("servers").and_then(Value::as_array).map(|s| s.len()).unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_paths_schemas_and_servers() {
        let spec = json!({
            "openapi": "3.0.0",
            "info": {"title": "Nodeboot API", "version": "2.1.0", "description": "Demo"},
            "servers": [{"url": "http://localhost:8080"}],
            "paths": {"/api/status": {}, "/api/": {}},
            "components": {"schemas": {"StatusCheck": {}}}
        });
        let summary = SpecSummary::from_value(&spec).unwrap();
        assert_eq!(summary.title, "Nodeboot API");
        assert_eq!(summary.version, "2.1.0");
        assert_eq!(summary.path_count, 2);
        assert_eq!(summary.schema_count, 1);
        assert_eq!(summary.server_count, 1);
    }

    #[test]
    fn missing_info_uses_defaults() {
        let summary = SpecSummary::from_value(&json!({})).unwrap();
        assert_eq!(summary.title, "API Specification");
        assert_eq!(summary.version, "1.0.0");
        assert_eq!(summary.description, "No description available");
        assert_eq!(summary.path_count, 0);
    }

    #[test]
    fn non_object_has_no_summary() {
        assert!(SpecSummary::from_value(&json!("openapi: 3.0.0")).is_none());
    }
}
