//! Form-to-brief transformation.
//!
//! [`generate`] validates a [`FormInput`] and builds the [`OutputDocument`];
//! [`render`] turns it into the JSON text users copy into their agent.

use serde::Serialize;

use crate::error::BriefError;
use crate::models::*;
use crate::templates;
use crate::trim_field;

/// Build a brief from the form.
///
/// Fails fast: a blank project name is reported before blank requirements.
pub fn generate(form: &FormInput) -> Result<OutputDocument, BriefError> {
    let project_name = trim_field(&form.project_name);
    if project_name.is_empty() {
        return Err(BriefError::MissingProjectName);
    }

    let requirements = trim_field(&form.requirements);
    if requirements.is_empty() {
        return Err(BriefError::MissingRequirements);
    }

    let user_input = UserInput {
        requirements: templates::requirements(requirements),
        reference_project: form.include_reference.then(|| ReferenceProject {
            path: templates::REFERENCE_PROJECT_PATH.to_string(),
            instruction: templates::REFERENCE_PROJECT_INSTRUCTION.to_string(),
        }),
    };

    let tech_stack = TechStack {
        frontend: form.frontend.clone(),
        backend: form.backend.clone(),
        database: form.database.clone(),
        supplement: trim_field(&form.tech_supplement).to_string(),
        instruction: templates::TECH_STACK_INSTRUCTION.to_string(),
    };

    let mut deliverables = Vec::new();
    let mut names = Vec::new();
    for key in &form.deliverables {
        match DeliverableDefinition::find(key) {
            Some(definition) => {
                deliverables.push(definition.to_deliverable(project_name));
                names.push(definition.display_name);
            }
            None => tracing::debug!("Skipping unknown deliverable '{}'", key),
        }
    }

    let rules = form.rules.resolve(&RuleSet::defaults());

    Ok(OutputDocument {
        overall_instruction: templates::overall_instruction(project_name),
        project_name: project_name.to_string(),
        user_input,
        tech_stack,
        deliverables,
        deliverables_instruction: templates::deliverables_instruction(&names),
        rules: Rules {
            language: rules.language,
            progress_log: ProgressLog {
                path: templates::PROGRESS_LOG_PATH.to_string(),
                instruction: rules.progress_log_instruction,
            },
            interaction_model: rules.interaction_model,
            code_modification: rules.code_modification,
        },
    })
}

/// Render a brief as JSON with four-space indentation.
pub fn render(document: &OutputDocument) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Read a rendered brief back.
pub fn parse(text: &str) -> serde_json::Result<OutputDocument> {
    serde_json::from_str(text)
}

/// [`generate`] followed by [`render`].
pub fn generate_json(form: &FormInput) -> anyhow::Result<String> {
    let document = generate(form)?;
    Ok(render(&document)?)
}
