/*!

Attribute schemas for the provider and its data sources.

A [`Schema`] declares, for every attribute, its Terraform name, the camelCase JSON field it is read
from, its kind and whether it is required, optional or computed. The schema is also what turns a
Kubernetes response into state: [`Schema::state_from_json`] walks the declared attributes, picks
each one out of the JSON object by its JSON name and stores it under its Terraform name. Undeclared
fields are dropped and missing ones become `null`.

!*/

use crate::{Diagnostics, StringValidator};
use serde::Serialize;
use serde_json::{Map, Value};
use snafu::{OptionExt, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

/// The error returned when a JSON document does not fit the shape of a schema.
#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Attribute '{}' expected {} but found {}", path, expected, found))]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// The element type of `List` and `Map` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    String,
    Bool,
    Int64,
}

impl ElementType {
    fn name(&self) -> &'static str {
        match self {
            ElementType::String => "a string",
            ElementType::Bool => "a bool",
            ElementType::Int64 => "a 64-bit integer",
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        match self {
            ElementType::String => value.is_string(),
            ElementType::Bool => value.is_boolean(),
            ElementType::Int64 => value.is_i64(),
        }
    }

    /// Numbers and bools are accepted where a string is expected so that int-or-string fields
    /// keep their value.
    fn project(&self, path: &str, value: &Value) -> Result<Value> {
        match (self, value) {
            (_, Value::Null) => Ok(Value::Null),
            (ElementType::String, Value::String(_)) => Ok(value.clone()),
            (ElementType::String, Value::Number(n)) => Ok(Value::String(n.to_string())),
            (ElementType::String, Value::Bool(b)) => Ok(Value::String(b.to_string())),
            (ElementType::Bool, Value::Bool(_))
            | (ElementType::Int64, Value::Number(_))
                if self.accepts(value) =>
            {
                Ok(value.clone())
            }
            _ => TypeMismatchSnafu {
                path,
                expected: self.name(),
                found: json_type(value),
            }
            .fail(),
        }
    }
}

/// The kind of value an attribute holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeKind {
    String,
    Bool,
    Int64,
    /// Free-form JSON, used for objects that preserve unknown fields.
    Dynamic,
    List {
        element_type: ElementType,
    },
    Map {
        element_type: ElementType,
    },
    SingleNested {
        attributes: Vec<Attribute>,
    },
    ListNested {
        attributes: Vec<Attribute>,
    },
}

/// Whether configuration must, may or cannot set an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Required,
    Optional,
    /// Read-only: the value is only ever set by the provider.
    Computed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub json_name: String,
    #[serde(flatten)]
    pub kind: AttributeKind,
    pub mode: Mode,
    pub description: String,
    pub markdown_description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<StringValidator>,
}

impl Attribute {
    /// Create a computed attribute of the given `kind`. The JSON name is derived from `name` by
    /// converting it to camelCase; use `json_name` where the JSON field does not follow that rule.
    pub fn new<S1, S2>(name: S1, kind: AttributeKind, description: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        let name = name.into();
        let description = description.into();
        Self {
            json_name: camel_case(&name),
            name,
            kind,
            mode: Mode::Computed,
            markdown_description: description.clone(),
            description,
            validators: Vec::new(),
        }
    }

    pub fn string<S1: Into<String>, S2: Into<String>>(name: S1, description: S2) -> Self {
        Self::new(name, AttributeKind::String, description)
    }

    pub fn bool<S1: Into<String>, S2: Into<String>>(name: S1, description: S2) -> Self {
        Self::new(name, AttributeKind::Bool, description)
    }

    pub fn int64<S1: Into<String>, S2: Into<String>>(name: S1, description: S2) -> Self {
        Self::new(name, AttributeKind::Int64, description)
    }

    pub fn dynamic<S1: Into<String>, S2: Into<String>>(name: S1, description: S2) -> Self {
        Self::new(name, AttributeKind::Dynamic, description)
    }

    pub fn list<S1, S2>(name: S1, element_type: ElementType, description: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::new(name, AttributeKind::List { element_type }, description)
    }

    pub fn map<S1, S2>(name: S1, element_type: ElementType, description: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::new(name, AttributeKind::Map { element_type }, description)
    }

    pub fn single_nested<S1, S2>(name: S1, description: S2, attributes: Vec<Attribute>) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::new(name, AttributeKind::SingleNested { attributes }, description)
    }

    pub fn list_nested<S1, S2>(name: S1, description: S2, attributes: Vec<Attribute>) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::new(name, AttributeKind::ListNested { attributes }, description)
    }

    pub fn required(mut self) -> Self {
        self.mode = Mode::Required;
        self
    }

    pub fn optional(mut self) -> Self {
        self.mode = Mode::Optional;
        self
    }

    pub fn json_name<S: Into<String>>(mut self, json_name: S) -> Self {
        self.json_name = json_name.into();
        self
    }

    pub fn validator(mut self, validator: StringValidator) -> Self {
        self.validators.push(validator);
        self
    }

    /// The attributes of a `SingleNested` or `ListNested` attribute.
    pub fn nested_attributes(&self) -> Option<&[Attribute]> {
        match &self.kind {
            AttributeKind::SingleNested { attributes } | AttributeKind::ListNested { attributes } => {
                Some(attributes)
            }
            _ => None,
        }
    }

    fn project(&self, path: &str, value: &Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        match &self.kind {
            AttributeKind::String => ElementType::String.project(path, value),
            AttributeKind::Bool => ElementType::Bool.project(path, value),
            AttributeKind::Int64 => ElementType::Int64.project(path, value),
            AttributeKind::Dynamic => Ok(value.clone()),
            AttributeKind::List { element_type } => {
                let items = expect_array(path, value)?;
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| element_type.project(&index(path, i), item))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Array)
            }
            AttributeKind::Map { element_type } => {
                let entries = expect_object(path, value)?;
                entries
                    .iter()
                    .map(|(key, item)| {
                        Ok((key.clone(), element_type.project(&join(path, key), item)?))
                    })
                    .collect::<Result<Map<_, _>>>()
                    .map(Value::Object)
            }
            AttributeKind::SingleNested { attributes } => project_object(attributes, path, value),
            AttributeKind::ListNested { attributes } => {
                let items = expect_array(path, value)?;
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| item_or_null(attributes, &index(path, i), item))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Array)
            }
        }
    }

    fn validate_config(&self, path: &str, value: Option<&Value>, diagnostics: &mut Diagnostics) {
        match (self.mode, value) {
            (Mode::Required, None) => diagnostics.add_attribute_error(
                path,
                "Missing Configuration for Required Attribute",
                format!(
                    "Must set a configuration value for the {} attribute as the provider has \
                    marked it as required.",
                    path
                ),
            ),
            (Mode::Computed, Some(_)) => diagnostics.add_attribute_error(
                path,
                "Invalid Configuration for Read-Only Attribute",
                format!(
                    "Cannot set value for the {} attribute as the provider has marked it as \
                    read-only. Remove the configuration line setting the value.",
                    path
                ),
            ),
            (_, None) => {}
            (_, Some(value)) => self.validate_value(path, value, diagnostics),
        }
    }

    fn validate_value(&self, path: &str, value: &Value, diagnostics: &mut Diagnostics) {
        let mismatch = match &self.kind {
            AttributeKind::String => match value.as_str() {
                Some(s) => {
                    for validator in &self.validators {
                        validator.validate(path, s, diagnostics);
                    }
                    None
                }
                None => Some("a string"),
            },
            AttributeKind::Bool => (!value.is_boolean()).then(|| "a bool"),
            AttributeKind::Int64 => (!value.is_i64()).then(|| "a 64-bit integer"),
            AttributeKind::Dynamic => None,
            AttributeKind::List { element_type } => match value.as_array() {
                Some(items) if items.iter().all(|item| element_type.accepts(item)) => None,
                _ => Some("a list"),
            },
            AttributeKind::Map { element_type } => match value.as_object() {
                Some(entries) if entries.values().all(|item| element_type.accepts(item)) => None,
                _ => Some("a map"),
            },
            AttributeKind::SingleNested { attributes } => {
                validate_object(attributes, path, value, diagnostics);
                None
            }
            AttributeKind::ListNested { attributes } => match value.as_array() {
                Some(items) => {
                    for (i, item) in items.iter().enumerate() {
                        validate_object(attributes, &index(path, i), item, diagnostics);
                    }
                    None
                }
                None => Some("a list"),
            },
        };
        if let Some(expected) = mismatch {
            diagnostics.add_attribute_error(
                path,
                "Incorrect Attribute Value Type",
                format!(
                    "Attribute {} expected {} but found {}",
                    path,
                    expected,
                    json_type(value)
                ),
            );
        }
    }
}

/// The schema of a provider configuration block or a data source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub description: String,
    pub markdown_description: String,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new<S: Into<String>>(description: S) -> Self {
        let description = description.into();
        Self {
            markdown_description: description.clone(),
            description,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Find the attribute at a dotted `path` such as `spec.rack_config.racks.storage`. List
    /// segments may be written with a trailing `[]`.
    pub fn attribute_at_path(&self, path: &str) -> Option<&Attribute> {
        let mut segments = path.split('.').map(|s| s.trim_end_matches("[]"));
        let mut current = self.attribute(segments.next()?)?;
        for segment in segments {
            current = current
                .nested_attributes()?
                .iter()
                .find(|a| a.name == segment)?;
        }
        Some(current)
    }

    /// Check a configuration object, keyed by attribute names, against this schema.
    pub fn validate_config(&self, config: &Value) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        validate_object(&self.attributes, "", config, &mut diagnostics);
        diagnostics
    }

    /// Build state from a camelCase JSON `object`. The result has exactly the attributes of this
    /// schema, keyed by their names.
    pub fn state_from_json(&self, object: &Value) -> Result<Value> {
        project_object(&self.attributes, "", object)
    }
}

fn project_object(attributes: &[Attribute], path: &str, value: &Value) -> Result<Value> {
    let fields = expect_object(path, value)?;
    let mut state = Map::new();
    for attribute in attributes {
        let field = fields.get(&attribute.json_name).unwrap_or(&Value::Null);
        let projected = attribute.project(&join(path, &attribute.name), field)?;
        state.insert(attribute.name.clone(), projected);
    }
    Ok(Value::Object(state))
}

fn item_or_null(attributes: &[Attribute], path: &str, value: &Value) -> Result<Value> {
    if value.is_null() {
        Ok(Value::Null)
    } else {
        project_object(attributes, path, value)
    }
}

fn validate_object(attributes: &[Attribute], path: &str, value: &Value, d: &mut Diagnostics) {
    let fields = match value.as_object() {
        Some(fields) => fields,
        None => {
            d.add_attribute_error(
                path,
                "Incorrect Attribute Value Type",
                format!("Expected an object but found {}", json_type(value)),
            );
            return;
        }
    };
    for key in fields.keys() {
        if !attributes.iter().any(|a| &a.name == key) {
            d.add_attribute_error(
                join(path, key),
                "Unsupported Argument",
                format!("An argument named \"{}\" is not expected here.", key),
            );
        }
    }
    for attribute in attributes {
        let field = fields.get(&attribute.name).filter(|v| !v.is_null());
        attribute.validate_config(&join(path, &attribute.name), field, d);
    }
}

fn expect_object<'a>(path: &str, value: &'a Value) -> Result<&'a Map<String, Value>> {
    value.as_object().context(TypeMismatchSnafu {
        path,
        expected: "an object",
        found: json_type(value),
    })
}

fn expect_array<'a>(path: &str, value: &'a Value) -> Result<&'a Vec<Value>> {
    value.as_array().context(TypeMismatchSnafu {
        path,
        expected: "a list",
        found: json_type(value),
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

fn index(path: &str, i: usize) -> String {
    format!("{}[{}]", path, i)
}

/// `rack_config` -> `rackConfig`
pub(crate) fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, part) in name.split('_').enumerate() {
        let mut chars = part.chars();
        match chars.next() {
            Some(first) if i > 0 => {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
            _ => out.push_str(part),
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new("test")
            .with_attribute(Attribute::string("id", "id"))
            .with_attribute(
                Attribute::single_nested(
                    "metadata",
                    "metadata",
                    vec![
                        Attribute::string("name", "name")
                            .required()
                            .validator(StringValidator::Name),
                        Attribute::map("labels", ElementType::String, "labels"),
                    ],
                )
                .required(),
            )
            .with_attribute(Attribute::single_nested(
                "spec",
                "spec",
                vec![
                    Attribute::int64("size", "size"),
                    Attribute::string("max_unavailable", "int or string"),
                    Attribute::list("k8s_node_block_list", ElementType::String, "nodes"),
                    Attribute::list_nested(
                        "volumes",
                        "volumes",
                        vec![
                            Attribute::string("name", "name"),
                            Attribute::bool("read_only", "ro"),
                        ],
                    ),
                    Attribute::string("tls_names", "custom json name")
                        .json_name("customTLSNames"),
                    Attribute::dynamic("aerospike_config", "free form"),
                ],
            ))
    }

    #[test]
    fn camel_case_names() {
        assert_eq!(camel_case("rack_config"), "rackConfig");
        assert_eq!(camel_case("k8s_node_block_list"), "k8sNodeBlockList");
        assert_eq!(camel_case("id"), "id");
        assert_eq!(camel_case("skip_xdr_dlog_file_validate"), "skipXdrDlogFileValidate");
    }

    #[test]
    fn projection_renames_and_fills_nulls() {
        let state = schema()
            .state_from_json(&json!({
                "id": "a/b",
                "metadata": {"name": "a", "uid": "dropped"},
                "spec": {
                    "size": 3,
                    "maxUnavailable": 1,
                    "k8sNodeBlockList": ["node-1"],
                    "volumes": [{"name": "ns", "readOnly": true, "extra": 1}],
                    "customTLSNames": "tls",
                    "aerospikeConfig": {"service": {"feature-key-file": "/etc/key"}}
                }
            }))
            .unwrap();
        assert_eq!(
            state,
            json!({
                "id": "a/b",
                "metadata": {"name": "a", "labels": null},
                "spec": {
                    "size": 3,
                    "max_unavailable": "1",
                    "k8s_node_block_list": ["node-1"],
                    "volumes": [{"name": "ns", "read_only": true}],
                    "tls_names": "tls",
                    "aerospike_config": {"service": {"feature-key-file": "/etc/key"}}
                }
            })
        );
    }

    #[test]
    fn projection_reports_mismatch_path() {
        let err = schema()
            .state_from_json(&json!({"spec": {"volumes": [{"readOnly": "yes"}]}}))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Attribute 'spec.volumes[0].read_only' expected a bool but found a string"
        );
    }

    #[test]
    fn projection_rejects_fractional_int() {
        assert!(schema()
            .state_from_json(&json!({"spec": {"size": 1.5}}))
            .is_err());
    }

    #[test]
    fn attribute_paths() {
        let schema = schema();
        assert_eq!(
            schema.attribute_at_path("spec.volumes[].read_only").unwrap().kind,
            AttributeKind::Bool
        );
        assert!(schema.attribute_at_path("metadata.name").is_some());
        assert!(schema.attribute_at_path("spec.size.nope").is_none());
        assert!(schema.attribute_at_path("nope").is_none());
    }

    #[test]
    fn config_validation() {
        let schema = schema();
        assert!(!schema
            .validate_config(&json!({"metadata": {"name": "aerocluster"}}))
            .has_error());

        let diagnostics = schema.validate_config(&json!({}));
        let error = diagnostics.errors().next().unwrap();
        assert_eq!(error.summary, "Missing Configuration for Required Attribute");
        assert_eq!(error.attribute.as_deref(), Some("metadata"));

        let diagnostics = schema.validate_config(&json!({"metadata": {}}));
        assert_eq!(
            diagnostics.errors().next().unwrap().attribute.as_deref(),
            Some("metadata.name")
        );

        let diagnostics = schema.validate_config(&json!({"id": "x", "metadata": {"name": "a"}}));
        assert_eq!(
            diagnostics.errors().next().unwrap().summary,
            "Invalid Configuration for Read-Only Attribute"
        );

        let diagnostics = schema.validate_config(&json!({"metadata": {"name": "A", "x": 1}}));
        let summaries: Vec<_> = diagnostics.errors().map(|d| d.summary.as_str()).collect();
        assert_eq!(
            summaries,
            vec!["Unsupported Argument", "Invalid Attribute Value Match"]
        );
    }

    #[test]
    fn serializes_kind_inline() {
        let value = serde_json::to_value(Attribute::list("a_b", ElementType::Int64, "d")).unwrap();
        assert_eq!(value["type"], "list");
        assert_eq!(value["element_type"], "int64");
        assert_eq!(value["json_name"], "aB");
        assert_eq!(value["mode"], "computed");
        assert!(value.get("validators").is_none());
    }
}
