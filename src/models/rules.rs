use serde::{Deserialize, Serialize};

use crate::templates;

/// Behavioural rules handed to the agent.
///
/// The form exposes one editable field per rule. A blank field falls back to the
/// matching entry of [`RuleSet::defaults`], so the rendered brief always carries
/// all four.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    /// Language the agent should answer and document in.
    pub language: String,
    /// How and when the agent records progress.
    pub progress_log_instruction: String,
    /// Division of labour between the agent and the user.
    pub interaction_model: String,
    /// Policy for touching code that already works.
    pub code_modification: String,
}

impl RuleSet {
    pub fn defaults() -> Self {
        Self {
            language: templates::DEFAULT_LANGUAGE.to_string(),
            progress_log_instruction: templates::DEFAULT_PROGRESS_LOG_INSTRUCTION.to_string(),
            interaction_model: templates::DEFAULT_INTERACTION_MODEL.to_string(),
            code_modification: templates::DEFAULT_CODE_MODIFICATION.to_string(),
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::defaults()
    }
}

/// User-entered rule text, before defaults are applied.
///
/// Every field may be blank. Whitespace-only counts as blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOverrides {
    pub language: String,
    pub progress_log_instruction: String,
    pub interaction_model: String,
    pub code_modification: String,
}

impl RuleOverrides {
    /// Overrides pre-filled with the default text, as the form shows them on load.
    pub fn prefilled() -> Self {
        let defaults = RuleSet::defaults();
        Self {
            language: defaults.language,
            progress_log_instruction: defaults.progress_log_instruction,
            interaction_model: defaults.interaction_model,
            code_modification: defaults.code_modification,
        }
    }

    /// Resolve against the defaults, one field at a time.
    pub fn resolve(&self, defaults: &RuleSet) -> RuleSet {
        RuleSet {
            language: or_default(&self.language, &defaults.language),
            progress_log_instruction: or_default(
                &self.progress_log_instruction,
                &defaults.progress_log_instruction,
            ),
            interaction_model: or_default(&self.interaction_model, &defaults.interaction_model),
            code_modification: or_default(&self.code_modification, &defaults.code_modification),
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    let value = crate::trim_field(value);
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
