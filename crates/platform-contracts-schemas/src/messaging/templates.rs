//! WhatsApp template and interactive-message shapes.

use platform_contracts_canonical::{ButtonTitle, Contract, FieldCheck, Metadata};
use serde::{Deserialize, Serialize};

fn text_kind() -> String {
    "text".to_string()
}

fn en_us() -> String {
    "en_US".to_string()
}

fn utility() -> String {
    "UTILITY".to_string()
}

/// Reply button in an interactive message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateButton {
    /// Identifier echoed back when the button is pressed.
    pub id: String,
    /// Label, at most 20 characters.
    pub title: ButtonTitle,
}

impl TemplateButton {
    /// A button with an already validated title.
    pub fn new(id: impl Into<String>, title: ButtonTitle) -> Self {
        Self {
            id: id.into(),
            title,
        }
    }
}

impl Contract for TemplateButton {
    const NAME: &'static str = "TemplateButton";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["id", "title"])
            .typed::<String>(&["id"])
            .constrained::<ButtonTitle>("title");
    }
}

/// Positional parameter for a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParameter {
    /// Parameter type, default `text`.
    #[serde(rename = "type", default = "text_kind")]
    pub kind: String,
    /// Parameter value.
    #[serde(default)]
    pub text: String,
}

impl TemplateParameter {
    /// A text parameter.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: text_kind(),
            text: value.into(),
        }
    }
}

impl Default for TemplateParameter {
    fn default() -> Self {
        Self::text("")
    }
}

impl Contract for TemplateParameter {
    const NAME: &'static str = "TemplateParameter";

    fn check(_fields: &mut FieldCheck<'_>) {}
}

/// Registered template definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhatsAppTemplate {
    /// Template name as registered with the provider.
    pub name: String,
    /// Locale, default `en_US`.
    #[serde(default = "en_us")]
    pub language: String,
    /// Provider category, default `UTILITY`.
    #[serde(default = "utility")]
    pub category: String,
    /// Provider component objects, passed through untouched.
    #[serde(default)]
    pub components: Vec<Metadata>,
}

impl WhatsAppTemplate {
    /// A utility template in `en_US` with no components.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: en_us(),
            category: utility(),
            components: Vec::new(),
        }
    }
}

impl Contract for WhatsAppTemplate {
    const NAME: &'static str = "WhatsAppTemplate";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["name"])
            .typed::<String>(&["name", "language", "category"]);
    }
}

/// Interactive message with reply buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveMessage {
    /// Message body.
    pub body_text: String,
    /// Reply buttons.
    #[serde(default)]
    pub buttons: Vec<TemplateButton>,
    /// Optional header line.
    #[serde(default)]
    pub header_text: String,
    /// Optional footer line.
    #[serde(default)]
    pub footer_text: String,
}

impl InteractiveMessage {
    /// A message with no buttons.
    pub fn new(body_text: impl Into<String>) -> Self {
        Self {
            body_text: body_text.into(),
            buttons: Vec::new(),
            header_text: String::new(),
            footer_text: String::new(),
        }
    }

    /// Appends a button.
    pub fn with_button(mut self, button: TemplateButton) -> Self {
        self.buttons.push(button);
        self
    }
}

impl Contract for InteractiveMessage {
    const NAME: &'static str = "InteractiveMessage";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["body_text"])
            .typed::<String>(&["body_text"])
            .each("buttons", TemplateButton::check);
    }
}
