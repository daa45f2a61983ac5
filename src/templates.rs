//! Fixed prompt text embedded in every brief.
//!
//! These strings are part of the output format; briefs produced elsewhere are
//! compared against them byte for byte, so edit with care.

pub const REQUIREMENTS_SUFFIX: &str =
    "\n\n---\n**AI 任务指令：**\n基于上述需求，请分析并完善成一份更加细致、可执行的需求文档。";

pub const REFERENCE_PROJECT_PATH: &str = "./参考项目";

pub const REFERENCE_PROJECT_INSTRUCTION: &str = "请参考项目根目录下“参考项目”文件夹内的代码（学习其前后端代码风格、UI/UX 设计）、图片及其他文件，以实现上述需求。";

pub const TECH_STACK_INSTRUCTION: &str = "大部分情况基于选定的技术栈完成。根据需求分析，您可自行补充或提出更优技术栈方案。但在编码前，请务必提前与我沟通并说明具体技术栈的调整，并在项目技术文档中更新最终技术栈方案。";

const DELIVERABLES_PREFIX: &str = "根据上面提示词，生成以下文件：";

const DELIVERABLE_NAME_SEPARATOR: &str = "、";

const DELIVERABLES_ELABORATION: &str = concat!(
    "\n- 数据字典：请详细说明数据库结构，包括字段设计、数据类型、约束、索引、表之间关系以及其他必要的元数据。",
    "\n- 接口文档：请按模块划分，并严格遵循数据库约束定义接口规范。确保文档完整、准确，作为前后端开发的关键参考依据。",
    "\n- 项目技术文档：请详细阐述项目的技术栈（包括前端、后端、数据库及其他辅助技术）、开发环境配置、运行与部署环境要求及关键技术选型说明。",
);

pub const PROGRESS_LOG_PATH: &str = "./项目文档/项目开发进度.md";

pub const DEFAULT_LANGUAGE: &str = "Chinese";

pub const DEFAULT_PROGRESS_LOG_INSTRUCTION: &str = "请以模块化方式进行开发。每次完成一个功能模块或关键任务后，请在此处记录清晰的进度摘要。如果开发受阻，也请明确记录遇到的问题、尝试过的解决方案及当前状态。";

pub const DEFAULT_INTERACTION_MODEL: &str = "您的核心职责是代码实现与迭代。您只需专注于根据需求编写和修改代码，并报告进度。所有代码的运行、调试和验证工作将由我负责。请在每次代码交付时，提供清晰的本地运行与调试指令。";

pub const DEFAULT_CODE_MODIFICATION: &str = "为保证项目稳定性，已完成并验证的功能模块代码拥有高优先级保护。除非新功能需求或 Bug 修复明确要求，否则严禁修改现有稳定代码。任何必要的修改都必须经过充分评估，并在进度日志中明确说明原因。";

// User-facing notices.
pub const MISSING_PROJECT_NAME_NOTICE: &str = "请输入项目名！";
pub const MISSING_REQUIREMENTS_NOTICE: &str = "请输入大致/详细需求！";
pub const COPY_FAILED_NOTICE: &str = "复制失败，请手动复制。";
pub const NOTHING_TO_COPY_NOTICE: &str = "请先生成 JSON！";
pub const COPY_SUCCEEDED_LABEL: &str = "复制成功!";
pub const COPY_IDLE_LABEL: &str = "复制 JSON";

pub fn overall_instruction(project_name: &str) -> String {
    format!("根据项目名称“{}”和以下提示词要求，开发一个项目。", project_name)
}

pub fn requirements(text: &str) -> String {
    format!("{}{}", text, REQUIREMENTS_SUFFIX)
}

/// The deliverables instruction. The elaboration paragraphs are appended even
/// when the deliverables they describe were not selected.
pub fn deliverables_instruction<S: AsRef<str>>(names: &[S]) -> String {
    let joined = names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(DELIVERABLE_NAME_SEPARATOR);
    format!("{}{}。{}", DELIVERABLES_PREFIX, joined, DELIVERABLES_ELABORATION)
}
