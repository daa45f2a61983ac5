use serde::{Deserialize, Serialize};

use super::Deliverable;

/// The brief handed to the agent.
///
/// Field order is the key order of the rendered JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDocument {
    pub overall_instruction: String,
    pub project_name: String,
    pub user_input: UserInput,
    pub tech_stack: TechStack,
    pub deliverables: Vec<Deliverable>,
    pub deliverables_instruction: String,
    pub rules: Rules,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    /// Requirements text followed by the task suffix.
    pub requirements: String,
    /// Present only when the user asked for the reference project block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_project: Option<ReferenceProject>,
}

/// Points the agent at a folder of existing code to imitate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceProject {
    pub path: String,
    pub instruction: String,
}

/// Selected technologies per layer, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    /// Free-text additions. Empty when the user wrote nothing.
    pub supplement: String,
    pub instruction: String,
}

/// Rules as rendered: the progress-log instruction travels with its file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rules {
    pub language: String,
    pub progress_log: ProgressLog,
    pub interaction_model: String,
    pub code_modification: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressLog {
    pub path: String,
    pub instruction: String,
}
