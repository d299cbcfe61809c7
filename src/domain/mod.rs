use std::fmt;
use std::str::FromStr;

pub mod error;
pub mod schema;

pub use error::{FormError, FormResult};

/// A validated form description, built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    pub form_name: String,
    /// Whether the default submit button is appended
    pub submit_button: bool,
    pub fields: Vec<FieldSchema>,
}

impl FormSchema {
    /// Element id for the form: lower-cased name with spaces turned into hyphens
    pub fn form_id(&self) -> String {
        self.form_name.to_lowercase().replace(' ', "-")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: String,
    /// Never `Some("")`; an empty label is treated as absent
    pub label: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSchema {
    pub fn field_type(&self) -> FieldType {
        match &self.kind {
            FieldKind::Input { input_type, .. } => *input_type,
            FieldKind::TextArea { .. } => FieldType::Textarea,
            FieldKind::Dropdown { .. } => FieldType::Dropdown,
            FieldKind::Checkbox { .. } => FieldType::Checkbox,
            FieldKind::Radio { .. } => FieldType::Radio,
            FieldKind::Button { .. } => FieldType::Button,
        }
    }
}

/// Per-family field data. Only the attributes a family renders are carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Single `<input>` element; `input_type` is always an input-family tag
    Input {
        input_type: FieldType,
        placeholder: Option<String>,
        min: Option<String>,
        max: Option<String>,
    },
    TextArea {
        placeholder: Option<String>,
        default_value: Option<String>,
    },
    /// Non-empty
    Dropdown { options: Vec<String> },
    Checkbox { checked: bool },
    /// Non-empty
    Radio { options: Vec<String> },
    Button { button_type: String },
}

/// Every field type tag the generator accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Password,
    Email,
    Url,
    Number,
    Range,
    Date,
    Time,
    DateTimeLocal,
    Hidden,
    File,
    Textarea,
    Dropdown,
    Checkbox,
    Radio,
    Button,
}

impl FieldType {
    pub const ALL: [FieldType; 16] = [
        FieldType::Text,
        FieldType::Password,
        FieldType::Email,
        FieldType::Url,
        FieldType::Number,
        FieldType::Range,
        FieldType::Date,
        FieldType::Time,
        FieldType::DateTimeLocal,
        FieldType::Hidden,
        FieldType::File,
        FieldType::Textarea,
        FieldType::Dropdown,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Button,
    ];

    /// The tag as it appears in the JSON schema (and as the `type` attribute for inputs)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Url => "url",
            Self::Number => "number",
            Self::Range => "range",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTimeLocal => "datetime-local",
            Self::Hidden => "hidden",
            Self::File => "file",
            Self::Textarea => "textarea",
            Self::Dropdown => "dropdown",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Button => "button",
        }
    }

    /// Types rendered as a single self-closed `<input>` element
    pub fn is_input(&self) -> bool {
        !matches!(
            self,
            Self::Textarea | Self::Dropdown | Self::Checkbox | Self::Radio | Self::Button
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FormError::UnsupportedFieldType(s.to_string()))
    }
}

/// Port for anything that turns a validated schema into a markup fragment.
///
/// Rendering is synchronous and infallible: every fault is caught while
/// building the [`FormSchema`].
pub trait FormGeneratorPort: Send + Sync {
    fn generate(&self, schema: &FormSchema) -> String;
}
