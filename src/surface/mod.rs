//! Rendering surfaces: where form values come from and where results go.
//!
//! A surface owns the field values and the output area. The command handlers in
//! [`crate::commands`] only talk to it through [`FormSurface`].

mod cli;
mod terminal;

pub use cli::CliSurface;
pub use terminal::{run_interactive, TerminalSurface};

use crate::models::{DeliverableDefinition, FormInput, DELIVERABLES};

/// A single-value form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProjectName,
    Requirements,
    TechSupplement,
    RuleLanguage,
    RuleProgressInstruction,
    RuleInteraction,
    RuleCodeModification,
    /// Checkbox asking for the reference project block.
    IncludeReference,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::ProjectName,
        Field::Requirements,
        Field::TechSupplement,
        Field::IncludeReference,
        Field::RuleLanguage,
        Field::RuleProgressInstruction,
        Field::RuleInteraction,
        Field::RuleCodeModification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectName => "project_name",
            Self::Requirements => "requirements",
            Self::TechSupplement => "tech_supplement",
            Self::RuleLanguage => "language",
            Self::RuleProgressInstruction => "progress_log",
            Self::RuleInteraction => "interaction",
            Self::RuleCodeModification => "code_modification",
            Self::IncludeReference => "include_reference",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }

    /// Label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProjectName => "项目名",
            Self::Requirements => "大致/详细需求",
            Self::TechSupplement => "技术栈补充",
            Self::RuleLanguage => "语言",
            Self::RuleProgressInstruction => "进度日志要求",
            Self::RuleInteraction => "交互模式",
            Self::RuleCodeModification => "代码修改规范",
            Self::IncludeReference => "包含参考项目",
        }
    }
}

/// A checkbox group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Frontend,
    Backend,
    Database,
    Deliverable,
}

impl Group {
    pub const ALL: [Group; 4] = [
        Group::Frontend,
        Group::Backend,
        Group::Database,
        Group::Deliverable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Deliverable => "deliverable",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Frontend => "前端",
            Self::Backend => "后端",
            Self::Database => "数据库",
            Self::Deliverable => "交付物",
        }
    }
}

/// The collaborator that presents the form.
pub trait FormSurface {
    /// Current raw value of a text field.
    fn field(&self, field: Field) -> String;

    /// Whether a checkbox field is ticked.
    fn checked(&self, field: Field) -> bool;

    /// Ticked values of a checkbox group, in presentation order.
    fn selected(&self, group: Group) -> Vec<String>;

    /// Show the rendered brief.
    fn display(&mut self, text: &str);

    /// Tell the user something went wrong.
    fn notify(&mut self, message: &str);

    /// Move the user's attention to a field.
    fn focus(&mut self, field: Field);
}

/// Read every field off a surface.
pub fn snapshot(surface: &dyn FormSurface) -> FormInput {
    let mut form = FormInput {
        project_name: surface.field(Field::ProjectName),
        requirements: surface.field(Field::Requirements),
        tech_supplement: surface.field(Field::TechSupplement),
        include_reference: surface.checked(Field::IncludeReference),
        frontend: surface.selected(Group::Frontend),
        backend: surface.selected(Group::Backend),
        database: surface.selected(Group::Database),
        deliverables: surface.selected(Group::Deliverable),
        ..Default::default()
    };
    form.rules.language = surface.field(Field::RuleLanguage);
    form.rules.progress_log_instruction = surface.field(Field::RuleProgressInstruction);
    form.rules.interaction_model = surface.field(Field::RuleInteraction);
    form.rules.code_modification = surface.field(Field::RuleCodeModification);
    form
}

/// Order deliverable keys the way their checkboxes are laid out.
///
/// Keys without a checkbox keep their relative order after the known ones.
pub fn presentation_order(keys: &[String]) -> Vec<String> {
    let position = |key: &str| {
        DELIVERABLES
            .iter()
            .position(|d| d.key == key)
            .unwrap_or(DELIVERABLES.len())
    };
    let mut ordered = keys.to_vec();
    ordered.sort_by_key(|key| position(key));
    ordered.dedup();
    ordered
}

/// Text value of a field held in a form.
fn field_value(form: &FormInput, field: Field) -> String {
    match field {
        Field::ProjectName => form.project_name.clone(),
        Field::Requirements => form.requirements.clone(),
        Field::TechSupplement => form.tech_supplement.clone(),
        Field::RuleLanguage => form.rules.language.clone(),
        Field::RuleProgressInstruction => form.rules.progress_log_instruction.clone(),
        Field::RuleInteraction => form.rules.interaction_model.clone(),
        Field::RuleCodeModification => form.rules.code_modification.clone(),
        Field::IncludeReference => form.include_reference.to_string(),
    }
}

fn field_value_mut(form: &mut FormInput, field: Field) -> Option<&mut String> {
    match field {
        Field::ProjectName => Some(&mut form.project_name),
        Field::Requirements => Some(&mut form.requirements),
        Field::TechSupplement => Some(&mut form.tech_supplement),
        Field::RuleLanguage => Some(&mut form.rules.language),
        Field::RuleProgressInstruction => Some(&mut form.rules.progress_log_instruction),
        Field::RuleInteraction => Some(&mut form.rules.interaction_model),
        Field::RuleCodeModification => Some(&mut form.rules.code_modification),
        Field::IncludeReference => None,
    }
}

fn group_values(form: &FormInput, group: Group) -> Vec<String> {
    match group {
        Group::Frontend => form.frontend.clone(),
        Group::Backend => form.backend.clone(),
        Group::Database => form.database.clone(),
        Group::Deliverable => presentation_order(&form.deliverables),
    }
}

fn group_values_mut(form: &mut FormInput, group: Group) -> &mut Vec<String> {
    match group {
        Group::Frontend => &mut form.frontend,
        Group::Backend => &mut form.backend,
        Group::Database => &mut form.database,
        Group::Deliverable => &mut form.deliverables,
    }
}

/// One line per deliverable checkbox: tick, key, display name.
pub fn describe_deliverables(selected: &[String]) -> String {
    let mut output = String::new();
    for d in DELIVERABLES {
        let tick = if selected.iter().any(|k| k == d.key) {
            "[x]"
        } else {
            "[ ]"
        };
        output.push_str(&format!("{} {:<14} {}\n", tick, d.key, d.display_name));
    }
    output
}

/// Whether a deliverable key has a checkbox.
pub fn is_known_deliverable(key: &str) -> bool {
    DeliverableDefinition::find(key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn presentation_order_follows_checkbox_layout() {
        let ordered = presentation_order(&keys(&["tech", "sql", "analysis"]));
        assert_eq!(ordered, keys(&["analysis", "sql", "tech"]));
    }

    #[test]
    fn presentation_order_puts_unknown_keys_last() {
        let ordered = presentation_order(&keys(&["zzz", "frontendProto", "aaa", "dict"]));
        assert_eq!(ordered, keys(&["dict", "frontendProto", "zzz", "aaa"]));
    }

    #[test]
    fn presentation_order_drops_repeated_ticks() {
        let ordered = presentation_order(&keys(&["api", "api"]));
        assert_eq!(ordered, keys(&["api"]));
    }

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_str(field.as_str()), Some(field));
        }
        for group in Group::ALL {
            assert_eq!(Group::from_str(group.as_str()), Some(group));
        }
    }

    #[test]
    fn describe_deliverables_marks_selection() {
        let text = describe_deliverables(&keys(&["sql"]));
        assert!(text.contains("[x] sql"));
        assert!(text.contains("[ ] analysis"));
        assert_eq!(text.lines().count(), DELIVERABLES.len());
    }
}
