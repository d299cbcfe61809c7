//! HTML rendering of validated form schemas

use crate::adapters::markup::Markup;
use crate::domain::{FieldKind, FieldSchema, FormGeneratorPort, FormSchema};

/// Fixed stylesheet emitted ahead of every form
pub const FORM_STYLES: &str = "<style>
    form {
        font-family: Arial, sans-serif;
        padding: 20px;
        background-color: #f9f9f9;
        border-radius: 5px;
        width: 300px;
        margin: 0 auto;
    }
    label {
        display: block;
        margin-bottom: 8px;
        font-weight: bold;
    }
    input:not([type='checkbox'], [type='radio']), select {
        width: 100%;
        padding: 8px;
        margin-bottom: 15px;
        border: 1px solid #ccc;
        border-radius: 4px;
    }
    button {
        padding: 10px 15px;
        background-color: #4CAF50;
        color: white;
        border: none;
        border-radius: 4px;
        cursor: pointer;
    }
    button:hover {
        background-color: #45a049;
    }
</style>
";

const LINE_BREAK: &str = "<br>";
const SUBMIT_BUTTON: &str = "<button type=\"submit\">Submit</button>";

/// Renders a [`FormSchema`] as a style block followed by a `<form>` element.
#[derive(Debug, Clone)]
pub struct HtmlFormGenerator {
    escape_html: bool,
}

impl Default for HtmlFormGenerator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl HtmlFormGenerator {
    /// `escape_html = false` interpolates schema values verbatim
    pub fn new(escape_html: bool) -> Self {
        Self { escape_html }
    }

    /// Markup for a single field, without the trailing line break
    pub fn render_field(&self, field: &FieldSchema) -> String {
        let mut m = Markup::new(self.escape_html);
        write_field(&mut m, field);
        m.into_string()
    }
}

impl FormGeneratorPort for HtmlFormGenerator {
    fn generate(&self, schema: &FormSchema) -> String {
        let mut m = Markup::with_capacity(FORM_STYLES.len() + 128 * (schema.fields.len() + 1), self.escape_html);

        m.raw(FORM_STYLES);
        m.open("form").attr("id", &schema.form_id()).end();

        for field in &schema.fields {
            write_field(&mut m, field);
            m.raw(LINE_BREAK);
        }

        if schema.submit_button {
            m.raw(SUBMIT_BUTTON);
        }

        m.close("form");
        m.into_string()
    }
}

fn write_label(m: &mut Markup, field: &FieldSchema) {
    if let Some(label) = &field.label {
        m.open("label").attr("for", &field.name).end().text(label).close("label");
    }
}

fn write_field(m: &mut Markup, field: &FieldSchema) {
    let name = field.name.as_str();

    match &field.kind {
        FieldKind::Input {
            input_type,
            placeholder,
            min,
            max,
        } => {
            write_label(m, field);
            m.open("input")
                .attr("type", input_type.as_str())
                .attr("name", name)
                .attr("id", name)
                .flag("required", field.required)
                .opt_attr("placeholder", placeholder.as_deref())
                .opt_attr("min", min.as_deref())
                .opt_attr("max", max.as_deref())
                .self_close();
        }

        FieldKind::TextArea {
            placeholder,
            default_value,
        } => {
            write_label(m, field);
            m.open("textarea")
                .attr("name", name)
                .attr("id", name)
                .flag("required", field.required)
                .opt_attr("placeholder", placeholder.as_deref())
                .end()
                .text(default_value.as_deref().unwrap_or(""))
                .close("textarea");
        }

        FieldKind::Dropdown { options } => {
            write_label(m, field);
            m.open("select")
                .attr("name", name)
                .attr("id", name)
                .flag("required", field.required)
                .end();
            for option in options {
                m.open("option").attr("value", option).end().text(option).close("option");
            }
            m.close("select");
        }

        // The label wraps the input, so it stays open until after the input
        FieldKind::Checkbox { checked } => {
            if field.label.is_some() {
                m.open("label").attr("for", name).end();
            }
            m.open("input")
                .attr("type", "checkbox")
                .attr("name", name)
                .attr("id", name)
                .flag("required", field.required)
                .flag("checked", *checked)
                .self_close();
            if let Some(label) = &field.label {
                m.text(label).close("label");
            }
        }

        FieldKind::Radio { options } => {
            write_label(m, field);
            for value in options {
                let id = format!("{}-{}", name, value.to_lowercase());
                m.open("label").attr("for", &id).end();
                m.open("input")
                    .attr("type", "radio")
                    .attr("name", name)
                    .attr("id", &id)
                    .attr("value", value)
                    .flag("required", field.required)
                    .self_close();
                m.text(value).close("label");
            }
        }

        // A button named "submit" would duplicate the default submit button
        FieldKind::Button { button_type } => {
            if name != "submit" {
                m.open("button")
                    .attr("type", button_type)
                    .attr("name", name)
                    .end()
                    .text(field.label.as_deref().unwrap_or("Button"))
                    .close("button")
                    .raw(LINE_BREAK);
            }
        }
    }
}
