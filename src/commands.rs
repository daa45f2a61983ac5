//! Generate and copy handlers, invoked by a surface when the user acts.

use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;

use crate::clipboard::{Clipboard, StatusLabel, STATUS_FLASH};
use crate::error::BriefError;
use crate::generate::{generate, render};
use crate::surface::{snapshot, Field, FormSurface};
use crate::templates;

/// State behind the output area: the brief on display and the copy button label.
pub struct BriefApp {
    displayed: Option<String>,
    status: StatusLabel,
    flash: Duration,
}

impl Default for BriefApp {
    fn default() -> Self {
        Self::new(STATUS_FLASH)
    }
}

impl BriefApp {
    pub fn new(flash: Duration) -> Self {
        Self {
            displayed: None,
            status: StatusLabel::new(templates::COPY_IDLE_LABEL),
            flash,
        }
    }

    /// The rendered brief currently on display.
    pub fn displayed(&self) -> Option<&str> {
        self.displayed.as_deref()
    }

    pub fn status(&self) -> &StatusLabel {
        &self.status
    }

    /// Build a brief from the surface's fields and display it.
    ///
    /// On a validation failure the surface is notified, the offending field is
    /// focused, the previous brief stays on display, and the [`BriefError`] is
    /// returned inside the error.
    pub fn on_generate(&mut self, surface: &mut dyn FormSurface) -> Result<&str> {
        let form = snapshot(surface);

        let document = match generate(&form) {
            Ok(document) => document,
            Err(e) => {
                tracing::info!("Brief rejected: {}", e);
                surface.notify(e.notice());
                if let Some(field) = focus_for(&e) {
                    surface.focus(field);
                }
                return Err(e.into());
            }
        };

        let text = render(&document)?;
        tracing::info!(
            project = %document.project_name,
            deliverables = document.deliverables.len(),
            "Generated brief"
        );
        surface.display(&text);
        Ok(self.displayed.insert(text).as_str())
    }

    /// Copy the displayed brief to the clipboard.
    ///
    /// On success the status label flashes; the returned handle completes when
    /// it has reverted.
    pub async fn on_copy(
        &self,
        surface: &mut dyn FormSurface,
        clipboard: &dyn Clipboard,
    ) -> Result<JoinHandle<()>, BriefError> {
        let Some(text) = self.displayed.as_deref() else {
            surface.notify(templates::NOTHING_TO_COPY_NOTICE);
            return Err(BriefError::NothingToCopy);
        };

        match clipboard.write_text(text).await {
            Ok(()) => {
                tracing::debug!("Copied {} bytes to clipboard", text.len());
                Ok(self
                    .status
                    .flash(templates::COPY_SUCCEEDED_LABEL, self.flash))
            }
            Err(e) => {
                tracing::error!("Failed to copy to clipboard: {}", e);
                let err = BriefError::from(e);
                surface.notify(err.notice());
                Err(err)
            }
        }
    }
}

fn focus_for(error: &BriefError) -> Option<Field> {
    match error {
        BriefError::MissingProjectName => Some(Field::ProjectName),
        BriefError::MissingRequirements => Some(Field::Requirements),
        _ => None,
    }
}
