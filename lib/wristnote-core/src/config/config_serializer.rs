use crate::config::Config;
use schemars::{schema_for, Schema};
use std::collections::HashMap;

const HEADER: &str = "# Wristnote Configuration File\n# Timeouts are in milliseconds\n\n";

/// Serializes `config` to YAML with each field's documentation written above it as a comment.
pub fn serialize_config(config: &Config) -> Result<String, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(config)?;
    let field_docs = field_documentation(&schema_for!(Config));

    let mut output = String::from(HEADER);
    output.push_str(&add_comments_to_yaml(&yaml, &field_docs));
    output.push('\n');
    Ok(output)
}

fn field_documentation(schema: &Schema) -> HashMap<String, String> {
    let mut field_docs = HashMap::new();
    let Some(properties) = schema
        .as_object()
        .and_then(|schema| schema.get("properties"))
        .and_then(|properties| properties.as_object())
    else {
        return field_docs;
    };

    for (key, property) in properties {
        if let Some(description) = property.get("description").and_then(|d| d.as_str()) {
            field_docs.insert(key.clone(), description.to_string());
        }
    }
    field_docs
}

fn add_comments_to_yaml(yaml: &str, field_docs: &HashMap<String, String>) -> String {
    let mut result = Vec::new();

    for line in yaml.lines() {
        let top_level = !line.starts_with(' ') && !line.starts_with('-');
        let doc = line
            .split_once(':')
            .filter(|_| top_level)
            .and_then(|(field, _)| field_docs.get(field.trim()));

        if let Some(doc) = doc {
            if !result.is_empty() {
                result.push(String::new());
            }
            result.push(format!("# {}", doc));
        }

        result.push(line.to_string());
    }

    result.join("\n")
}
