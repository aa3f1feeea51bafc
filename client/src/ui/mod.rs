//! Form widget model and user notifications
//!
//! Plain data stands in for page elements so every controller action can
//! run without a rendered page.

mod notice;

pub use notice::{ConsoleNotifier, Notice, Notifier};

/// Text shown in score/category slots when there is nothing to show
pub const PLACEHOLDER: &str = "—";
/// Category text shown when the inputs are unusable
pub const INVALID_INPUT_TEXT: &str = "Enter valid values";

/// Magnitude from which scores switch to exponent notation
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Render a BMI value the way the page prints numbers
///
/// Shortest decimal form (`22.9`, `25`), `Infinity` for overflowed values,
/// and `1e+30` style exponents from 1e21 upwards.
pub fn format_score(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value.abs() >= EXPONENT_THRESHOLD {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        }
    } else {
        value.to_string()
    }
}

/// An editable text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
}

impl InputField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// A read-only text display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSlot {
    text: String,
}

impl TextSlot {
    /// A slot showing the placeholder
    pub fn placeholder() -> Self {
        Self {
            text: PLACEHOLDER.to_string(),
        }
    }

    /// An empty slot
    pub fn empty() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn reset(&mut self) {
        self.show(PLACEHOLDER);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl Default for TextSlot {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// The display slots a computation writes into
///
/// `advice` is absent on forms without an advice line.
#[derive(Debug)]
pub struct ResultSlots<'a> {
    pub score: &'a mut TextSlot,
    pub category: &'a mut TextSlot,
    pub advice: Option<&'a mut TextSlot>,
}

/// Lightweight calculator on the landing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickForm {
    pub weight: InputField,
    pub height: InputField,
    pub score: TextSlot,
    pub category: TextSlot,
    pub advice: TextSlot,
}

impl QuickForm {
    pub fn new() -> Self {
        Self {
            weight: InputField::default(),
            height: InputField::default(),
            score: TextSlot::placeholder(),
            category: TextSlot::placeholder(),
            advice: TextSlot::empty(),
        }
    }

    /// A form with both inputs filled in
    pub fn with_inputs(weight: impl Into<String>, height: impl Into<String>) -> Self {
        let mut form = Self::new();
        form.weight.set(weight);
        form.height.set(height);
        form
    }

    /// Split into the raw input values and the slots to render into
    pub(crate) fn split(&mut self) -> (&str, &str, ResultSlots<'_>) {
        (
            self.weight.value(),
            self.height.value(),
            ResultSlots {
                score: &mut self.score,
                category: &mut self.category,
                advice: Some(&mut self.advice),
            },
        )
    }
}

impl Default for QuickForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Save form on the user's dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardForm {
    pub weight: InputField,
    pub height: InputField,
    pub note: InputField,
    pub score: TextSlot,
    pub category: TextSlot,
}

impl DashboardForm {
    pub fn new() -> Self {
        Self {
            weight: InputField::default(),
            height: InputField::default(),
            note: InputField::default(),
            score: TextSlot::placeholder(),
            category: TextSlot::placeholder(),
        }
    }

    /// A form with inputs and note filled in
    pub fn with_inputs(
        weight: impl Into<String>,
        height: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        let mut form = Self::new();
        form.weight.set(weight);
        form.height.set(height);
        form.note.set(note);
        form
    }

    /// Note to send, `None` when the field is empty
    pub fn note_value(&self) -> Option<String> {
        match self.note.value() {
            "" => None,
            note => Some(note.to_string()),
        }
    }

    /// Clear every input and put the displays back to placeholders
    pub fn reset(&mut self) {
        self.weight.clear();
        self.height.clear();
        self.note.clear();
        self.score.reset();
        self.category.reset();
    }

    pub(crate) fn split(&mut self) -> (&str, &str, ResultSlots<'_>) {
        (
            self.weight.value(),
            self.height.value(),
            ResultSlots {
                score: &mut self.score,
                category: &mut self.category,
                advice: None,
            },
        )
    }
}

impl Default for DashboardForm {
    fn default() -> Self {
        Self::new()
    }
}
