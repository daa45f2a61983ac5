use serde::{Deserialize, Serialize};

use super::{DeliverableDefinition, RuleOverrides};

/// Every field of the brief form, as the user left it.
///
/// Text fields are raw (untrimmed). Selections are in presentation order.
/// Also the on-disk shape of a form file, so fields missing from a file take the
/// values a freshly loaded form shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub project_name: String,
    pub requirements: String,
    pub tech_supplement: String,
    pub include_reference: bool,
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    /// Ticked deliverable keys.
    pub deliverables: Vec<String>,
    pub rules: RuleOverrides,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            requirements: String::new(),
            tech_supplement: String::new(),
            include_reference: false,
            frontend: Vec::new(),
            backend: Vec::new(),
            database: Vec::new(),
            deliverables: DeliverableDefinition::default_keys(),
            rules: RuleOverrides::default(),
        }
    }
}

impl FormInput {
    /// A form as it looks on first load: rule fields pre-filled with the defaults.
    pub fn template() -> Self {
        Self {
            rules: RuleOverrides::prefilled(),
            ..Self::default()
        }
    }
}
