use serde::{Deserialize, Serialize};

/// Placeholder replaced by the project name in deliverable paths.
pub const PROJECT_NAME_PLACEHOLDER: &str = "{projectName}";

/// The kind of artifact a deliverable is.
///
/// - `Doc`: A Markdown document
/// - `Database`: A SQL file
/// - `Prototype`: A directory holding a runnable prototype
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableType {
    Doc,
    Database,
    Prototype,
}

impl DeliverableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doc => "doc",
            Self::Database => "database",
            Self::Prototype => "prototype",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "doc" => Some(Self::Doc),
            "database" => Some(Self::Database),
            "prototype" => Some(Self::Prototype),
            _ => None,
        }
    }
}

/// An entry in the fixed deliverable catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliverableDefinition {
    /// Checkbox value identifying the deliverable.
    pub key: &'static str,
    pub kind: DeliverableType,
    /// Target path. May contain [`PROJECT_NAME_PLACEHOLDER`].
    pub path_template: &'static str,
    /// Name listed in the deliverables instruction.
    pub display_name: &'static str,
    /// Whether the checkbox starts out ticked.
    pub default_selected: bool,
}

/// The deliverable catalogue, in the order the form presents its checkboxes.
pub const DELIVERABLES: &[DeliverableDefinition] = &[
    DeliverableDefinition {
        key: "analysis",
        kind: DeliverableType::Doc,
        path_template: "./项目文档/详细需求分析.md",
        display_name: "详细需求分析",
        default_selected: true,
    },
    DeliverableDefinition {
        key: "dict",
        kind: DeliverableType::Doc,
        path_template: "./项目文档/数据字典.md",
        display_name: "数据字典",
        default_selected: true,
    },
    DeliverableDefinition {
        key: "sql",
        kind: DeliverableType::Database,
        path_template: "./项目文档/{projectName}.sql",
        display_name: "数据库文件",
        default_selected: true,
    },
    DeliverableDefinition {
        key: "data",
        kind: DeliverableType::Database,
        path_template: "./项目文档/data_insert.sql",
        display_name: "数据库初始化文件",
        default_selected: true,
    },
    DeliverableDefinition {
        key: "api",
        kind: DeliverableType::Doc,
        path_template: "./项目文档/接口文档.md",
        display_name: "接口文档",
        default_selected: true,
    },
    DeliverableDefinition {
        key: "tech",
        kind: DeliverableType::Doc,
        path_template: "./项目文档/项目技术文档.md",
        display_name: "项目技术文档",
        default_selected: true,
    },
    DeliverableDefinition {
        key: "frontendProto",
        kind: DeliverableType::Prototype,
        path_template: "./项目文档/frontend_prototype/",
        display_name: "动态纯前端原型",
        default_selected: false,
    },
];

impl DeliverableDefinition {
    /// Look up a definition by checkbox key.
    pub fn find(key: &str) -> Option<&'static DeliverableDefinition> {
        DELIVERABLES.iter().find(|d| d.key == key)
    }

    /// Keys ticked when the form first loads, in presentation order.
    pub fn default_keys() -> Vec<String> {
        DELIVERABLES
            .iter()
            .filter(|d| d.default_selected)
            .map(|d| d.key.to_string())
            .collect()
    }

    /// The target path with the first `{projectName}` replaced.
    pub fn resolve_path(&self, project_name: &str) -> String {
        self.path_template
            .replacen(PROJECT_NAME_PLACEHOLDER, project_name, 1)
    }

    pub fn to_deliverable(&self, project_name: &str) -> Deliverable {
        Deliverable {
            kind: self.kind,
            path: self.resolve_path(project_name),
        }
    }
}

/// A deliverable as it appears in the brief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deliverable {
    #[serde(rename = "type")]
    pub kind: DeliverableType,
    pub path: String,
}
