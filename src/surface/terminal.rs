//! Interactive terminal form: prompt for fields, then a small command loop.

use std::io::{self, Write};

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use super::{
    describe_deliverables, field_value, field_value_mut, group_values, group_values_mut, Field,
    FormSurface, Group,
};
use crate::clipboard::Clipboard;
use crate::commands::BriefApp;
use crate::error::BriefError;
use crate::models::FormInput;

/// Answer that empties a field instead of keeping its current value.
const CLEAR: &str = "-";

const HELP: &str = "commands: generate (g), copy (c), edit <field> (e), show, deliverables, help, quit (q)";

/// A surface that asks for each field on a line-oriented terminal.
///
/// Rule fields start out holding the default text and deliverables start with
/// their default ticks, like a freshly loaded form.
pub struct TerminalSurface<R, W> {
    form: FormInput,
    lines: Lines<R>,
    out: W,
    pending_focus: Option<Field>,
}

impl<R: AsyncBufRead + Unpin, W: Write> TerminalSurface<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self::with_form(FormInput::template(), reader, out)
    }

    pub fn with_form(form: FormInput, reader: R, out: W) -> Self {
        Self {
            form,
            lines: reader.lines(),
            out,
            pending_focus: None,
        }
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// The field a failed generate asked to focus, if it has not been handled yet.
    pub fn take_focus(&mut self) -> Option<Field> {
        self.pending_focus.take()
    }

    async fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        self.lines.next_line().await
    }

    /// Prompt for a single field. Returns `false` once input is exhausted.
    pub async fn prompt_field(&mut self, field: Field) -> io::Result<bool> {
        if field == Field::IncludeReference {
            let current = if self.form.include_reference { "Y/n" } else { "y/N" };
            let Some(answer) = self.ask(&format!("{} [{}]: ", field.label(), current)).await? else {
                return Ok(false);
            };
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => self.form.include_reference = true,
                "n" | "no" => self.form.include_reference = false,
                _ => {}
            }
            return Ok(true);
        }

        if field == Field::Requirements {
            return self.prompt_requirements().await;
        }

        let current = field_value(&self.form, field);
        let prompt = if current.is_empty() {
            format!("{}: ", field.label())
        } else {
            format!("{} [{}]: ", field.label(), preview(&current))
        };
        let Some(answer) = self.ask(&prompt).await? else {
            return Ok(false);
        };
        if let Some(value) = field_value_mut(&mut self.form, field) {
            apply_answer(value, &answer);
        }
        Ok(true)
    }

    /// Requirements span several lines and end with an empty one.
    async fn prompt_requirements(&mut self) -> io::Result<bool> {
        let label = Field::Requirements.label();
        let prompt = if self.form.requirements.is_empty() {
            format!("{} (end with an empty line):\n", label)
        } else {
            format!(
                "{} [{}] (end with an empty line):\n",
                label,
                preview(&self.form.requirements)
            )
        };
        let Some(first) = self.ask(&prompt).await? else {
            return Ok(false);
        };
        if first.is_empty() {
            return Ok(true);
        }
        if first.trim() == CLEAR {
            self.form.requirements.clear();
            return Ok(true);
        }

        let mut text = first;
        while let Some(line) = self.lines.next_line().await? {
            if line.is_empty() {
                break;
            }
            text.push('\n');
            text.push_str(&line);
        }
        self.form.requirements = text;
        Ok(true)
    }

    /// Prompt for a checkbox group as a comma separated list.
    pub async fn prompt_group(&mut self, group: Group) -> io::Result<bool> {
        if group == Group::Deliverable {
            let table = describe_deliverables(&self.form.deliverables);
            write!(self.out, "{}", table)?;
        }
        let current = group_values(&self.form, group).join(", ");
        let Some(answer) = self.ask(&format!("{} [{}]: ", group.label(), current)).await? else {
            return Ok(false);
        };
        let answer = answer.trim();
        let values = group_values_mut(&mut self.form, group);
        if answer == CLEAR {
            values.clear();
        } else if !answer.is_empty() {
            *values = split_list(answer);
        }
        Ok(true)
    }

    /// Walk through every field once.
    pub async fn fill(&mut self) -> io::Result<bool> {
        for field in [Field::ProjectName, Field::Requirements] {
            if !self.prompt_field(field).await? {
                return Ok(false);
            }
        }
        for group in Group::ALL {
            if !self.prompt_group(group).await? {
                return Ok(false);
            }
        }
        for field in [
            Field::TechSupplement,
            Field::IncludeReference,
            Field::RuleLanguage,
            Field::RuleProgressInstruction,
            Field::RuleInteraction,
            Field::RuleCodeModification,
        ] {
            if !self.prompt_field(field).await? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Prompt for a field or group given by name.
    async fn edit(&mut self, name: &str) -> io::Result<bool> {
        if let Some(field) = Field::from_str(name) {
            return self.prompt_field(field).await;
        }
        if let Some(group) = Group::from_str(name) {
            return self.prompt_group(group).await;
        }
        let names: Vec<&str> = Field::ALL
            .iter()
            .map(Field::as_str)
            .chain(Group::ALL.iter().map(Group::as_str))
            .collect();
        writeln!(self.out, "unknown field '{}'; one of: {}", name, names.join(", "))?;
        Ok(true)
    }
}

impl<R, W: Write> FormSurface for TerminalSurface<R, W> {
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
        let _ = writeln!(self.out, "{}", text);
    }

    fn notify(&mut self, message: &str) {
        let _ = writeln!(self.out, "! {}", message);
    }

    fn focus(&mut self, field: Field) {
        self.pending_focus = Some(field);
    }
}

/// Fill the form on `surface`, then serve generate and copy commands until quit.
pub async fn run_interactive<R, W>(
    surface: &mut TerminalSurface<R, W>,
    app: &mut BriefApp,
    clipboard: &dyn Clipboard,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if !surface.fill().await? {
        return Ok(());
    }
    writeln!(surface.out, "{}", HELP)?;

    loop {
        let label = app.status().text();
        let prompt = if label == crate::templates::COPY_IDLE_LABEL {
            "> ".to_string()
        } else {
            format!("[{}] > ", label)
        };
        let Some(line) = surface.ask(&prompt).await? else {
            break;
        };
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "help" => writeln!(surface.out, "{}", HELP)?,
            "show" => match app.displayed() {
                Some(text) => writeln!(surface.out, "{}", text)?,
                None => writeln!(surface.out, "(nothing generated yet)")?,
            },
            "deliverables" => {
                let table = describe_deliverables(&surface.form.deliverables);
                write!(surface.out, "{}", table)?;
            }
            "g" | "generate" => {
                if let Err(e) = app.on_generate(surface) {
                    if e.downcast_ref::<BriefError>().is_none() {
                        return Err(e);
                    }
                    if let Some(field) = surface.take_focus() {
                        if !surface.prompt_field(field).await? {
                            break;
                        }
                    }
                }
            }
            "c" | "copy" => {
                // Failures are already reported on the surface.
                if app.on_copy(surface, clipboard).await.is_ok() {
                    writeln!(surface.out, "{}", app.status().text())?;
                }
            }
            "e" | "edit" if !arg.is_empty() => {
                if !surface.edit(arg).await? {
                    break;
                }
            }
            _ => writeln!(surface.out, "{}", HELP)?,
        }
    }

    Ok(())
}

fn apply_answer(value: &mut String, answer: &str) {
    if answer.trim() == CLEAR {
        value.clear();
    } else if !answer.is_empty() {
        *value = answer.to_string();
    }
}

fn split_list(answer: &str) -> Vec<String> {
    answer
        .split([',', '，', '、'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// First line of a value, shortened for a prompt.
fn preview(value: &str) -> String {
    const MAX: usize = 24;
    let line = value.lines().next().unwrap_or_default();
    let mut short: String = line.chars().take(MAX).collect();
    if line.chars().count() > MAX || value.lines().nth(1).is_some() {
        short.push('…');
    }
    short
}
