//! Building a [`FormSchema`] from a JSON parse tree
//!
//! Presence of every optional key is checked explicitly. Scalars are read the
//! way a loose JSON text accessor reads them: numbers and booleans become their
//! textual form, `null` counts as absent, and boolean flags also accept the
//! exact strings `"true"` / `"false"` and numbers (non-zero is true).

use serde_json::{Map, Value};

use super::{FieldKind, FieldSchema, FieldType, FormError, FormResult, FormSchema};

type Object = Map<String, Value>;

impl FormSchema {
    /// Parse raw request text into a validated schema
    pub fn from_json(input: &str) -> FormResult<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(&value)
    }

    /// Parse a raw request body, rejecting bytes that are not UTF-8
    pub fn from_slice(bytes: &[u8]) -> FormResult<Self> {
        let input = std::str::from_utf8(bytes)?;
        Self::from_json(input)
    }

    pub fn from_value(value: &Value) -> FormResult<Self> {
        let root = value.as_object().ok_or_else(|| {
            FormError::MalformedInput("form description must be a JSON object".to_string())
        })?;

        let form_name = text(root, "formName")
            .filter(|name| !name.is_empty())
            .ok_or_else(|| FormError::MissingRequiredField("formName".to_string()))?;

        let submit_button = flag(root, "submitButton").unwrap_or(true);

        let fields = match root.get("fields") {
            None | Some(Value::Null) => {
                return Err(FormError::MissingRequiredField("fields".to_string()))
            }
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| FieldSchema::from_value(index, item))
                .collect::<FormResult<Vec<_>>>()?,
            Some(_) => {
                return Err(FormError::MalformedInput(
                    "'fields' must be a JSON array".to_string(),
                ))
            }
        };

        Ok(Self {
            form_name,
            submit_button,
            fields,
        })
    }
}

impl FieldSchema {
    /// Build one field; `index` is its position in `fields`, used in error paths
    pub fn from_value(index: usize, value: &Value) -> FormResult<Self> {
        let field = value.as_object().ok_or_else(|| {
            FormError::MalformedInput(format!("fields[{}] must be a JSON object", index))
        })?;

        let tag = text(field, "type")
            .ok_or_else(|| FormError::MissingRequiredField(format!("fields[{}].type", index)))?;
        let name = text(field, "name")
            .ok_or_else(|| FormError::MissingRequiredField(format!("fields[{}].name", index)))?;
        let field_type: FieldType = tag.parse()?;

        let label = text(field, "label").filter(|label| !label.is_empty());
        let required = flag(field, "required").unwrap_or(false);

        let kind = match field_type {
            FieldType::Textarea => FieldKind::TextArea {
                placeholder: text(field, "placeholder"),
                default_value: text(field, "defaultValue"),
            },
            FieldType::Dropdown => FieldKind::Dropdown {
                options: options(field, &name, field_type)?,
            },
            FieldType::Radio => FieldKind::Radio {
                options: options(field, &name, field_type)?,
            },
            FieldType::Checkbox => FieldKind::Checkbox {
                checked: flag(field, "checked").unwrap_or(false),
            },
            FieldType::Button => FieldKind::Button {
                button_type: text(field, "buttonType")
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| "button".to_string()),
            },
            input_type => FieldKind::Input {
                input_type,
                placeholder: text(field, "placeholder"),
                min: text(field, "min"),
                max: text(field, "max"),
            },
        };

        Ok(Self {
            name,
            label,
            required,
            kind,
        })
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn text(object: &Object, key: &str) -> Option<String> {
    object.get(key).and_then(scalar_text)
}

fn flag(object: &Object, key: &str) -> Option<bool> {
    match object.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s == "true" => Some(true),
        Value::String(s) if s == "false" => Some(false),
        Value::Number(n) => n.as_f64().map(|n| n != 0.0),
        _ => None,
    }
}

fn options(field: &Object, name: &str, field_type: FieldType) -> FormResult<Vec<String>> {
    let missing = || FormError::MissingOptions {
        name: name.to_string(),
        field_type: field_type.to_string(),
    };

    let items = match field.get("options") {
        Some(Value::Array(items)) if !items.is_empty() => items,
        Some(Value::Array(_)) | Some(Value::Null) | None => return Err(missing()),
        Some(_) => {
            return Err(FormError::MalformedInput(format!(
                "options of field '{}' must be a JSON array",
                name
            )))
        }
    };

    items
        .iter()
        .map(|item| {
            scalar_text(item).ok_or_else(|| {
                FormError::MalformedInput(format!(
                    "options of field '{}' must be strings, numbers or booleans",
                    name
                ))
            })
        })
        .collect()
}
