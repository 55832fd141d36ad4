/// Text typed into the recipe name field.
///
/// The field is controlled: what is displayed is always [`Draft::text`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the draft on every keystroke, no validation.
    pub fn set(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Take the name out of the field if there is something to submit.
    ///
    /// Blank input stays where it is and yields `None`. Otherwise the exact text is returned and
    /// the field is cleared.
    pub fn submit(&mut self) -> Option<String> {
        if self.is_blank() {
            return None;
        }

        Some(std::mem::take(&mut self.text))
    }
}
