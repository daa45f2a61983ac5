use std::io::Write;

use super::{field_value, group_values, Field, FormSurface, Group};
use crate::models::FormInput;

/// A non-interactive surface over an already filled-in form.
///
/// The brief goes to `out` (stdout in the binary); notices go to `err`.
pub struct CliSurface<O = std::io::Stdout, E = std::io::Stderr> {
    form: FormInput,
    out: O,
    err: E,
    focused: Option<Field>,
}

impl CliSurface {
    pub fn new(form: FormInput) -> Self {
        Self::with_writers(form, std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write, E: Write> CliSurface<O, E> {
    pub fn with_writers(form: FormInput, out: O, err: E) -> Self {
        Self {
            form,
            out,
            err,
            focused: None,
        }
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    /// The field the last failed generate pointed at.
    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> FormSurface for CliSurface<O, E> {
    fn field(&self, field: Field) -> String {
        field_value(&self.form, field)
    }

    fn checked(&self, field: Field) -> bool {
        field == Field::IncludeReference && self.form.include_reference
    }

    fn selected(&self, group: Group) -> Vec<String> {
        group_values(&self.form, group)
    }

    fn display(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::error!("Failed to write brief: {}", e);
        }
    }

    fn notify(&mut self, message: &str) {
        let _ = writeln!(self.err, "{}", message);
    }

    fn focus(&mut self, field: Field) {
        tracing::debug!("Focus requested on {}", field.as_str());
        self.focused = Some(field);
        let _ = writeln!(self.err, "  -> {} ({})", field.label(), field.as_str());
    }
}
