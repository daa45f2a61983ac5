//! Command handler and surface integration tests.
//!
//! Tests are organized into three sections:
//! - Generate: validation notices, focus, and the displayed brief
//! - Copy: clipboard success, failure, and the status label
//! - Interactive: the terminal surface driven by scripted input

use std::time::Duration;

use agent_brief::clipboard::{MemoryClipboard, STATUS_FLASH};
use agent_brief::commands::BriefApp;
use agent_brief::generate::parse;
use agent_brief::models::*;
use agent_brief::surface::{run_interactive, CliSurface, Field, FormSurface, Group, TerminalSurface};
use agent_brief::templates;
use agent_brief::BriefError;

type TestSurface = CliSurface<Vec<u8>, Vec<u8>>;

/// Helper to create a CLI surface writing into buffers.
fn surface_for(form: FormInput) -> TestSurface {
    CliSurface::with_writers(form, Vec::new(), Vec::new())
}

/// Helper to create a form that passes validation.
fn valid_form() -> FormInput {
    FormInput {
        project_name: "Shop".to_string(),
        requirements: "Sell things online".to_string(),
        ..Default::default()
    }
}

fn written(surface: TestSurface) -> (String, String) {
    let (out, err) = surface.into_writers();
    (
        String::from_utf8(out).expect("stdout not utf-8"),
        String::from_utf8(err).expect("stderr not utf-8"),
    )
}

// ============================================================
// Generate Tests
// ============================================================

mod generate {
    use super::*;

    #[test]
    fn displays_the_rendered_brief() {
        let mut surface = surface_for(valid_form());
        let mut app = BriefApp::default();

        let text = app.on_generate(&mut surface).expect("Generate failed").to_string();

        assert_eq!(app.displayed(), Some(text.as_str()));
        let (out, err) = written(surface);
        assert_eq!(out, format!("{}\n", text));
        assert!(err.is_empty());
        assert_eq!(parse(&text).unwrap().project_name, "Shop");
    }

    #[test]
    fn notifies_and_focuses_missing_project_name() {
        let mut surface = surface_for(FormInput {
            project_name: "  ".to_string(),
            ..valid_form()
        });
        let mut app = BriefApp::default();

        let err = app.on_generate(&mut surface).expect_err("Generate should fail");

        assert_eq!(err.downcast_ref::<BriefError>(), Some(&BriefError::MissingProjectName));
        assert_eq!(surface.focused(), Some(Field::ProjectName));
        assert!(app.displayed().is_none());
        let (out, err) = written(surface);
        assert!(out.is_empty());
        assert!(err.starts_with(templates::MISSING_PROJECT_NAME_NOTICE));
    }

    #[test]
    fn notifies_and_focuses_missing_requirements() {
        let mut surface = surface_for(FormInput {
            requirements: String::new(),
            ..valid_form()
        });
        let mut app = BriefApp::default();

        assert!(app.on_generate(&mut surface).is_err());
        assert_eq!(surface.focused(), Some(Field::Requirements));
        let (_, err) = written(surface);
        assert!(err.starts_with(templates::MISSING_REQUIREMENTS_NOTICE));
    }

    #[test]
    fn keeps_the_previous_brief_on_failure() {
        let mut app = BriefApp::default();
        let mut good = surface_for(valid_form());
        let first = app.on_generate(&mut good).expect("Generate failed").to_string();

        let mut bad = surface_for(FormInput::default());
        assert!(app.on_generate(&mut bad).is_err());

        assert_eq!(app.displayed(), Some(first.as_str()));
    }

    #[test]
    fn replaces_the_brief_on_each_generate() {
        let mut app = BriefApp::default();
        app.on_generate(&mut surface_for(valid_form())).expect("Generate failed");

        let renamed = FormInput {
            project_name: "Blog".to_string(),
            ..valid_form()
        };
        app.on_generate(&mut surface_for(renamed)).expect("Generate failed");

        let doc = parse(app.displayed().unwrap()).unwrap();
        assert_eq!(doc.project_name, "Blog");
    }

    #[test]
    fn reads_deliverables_in_checkbox_order() {
        let form = FormInput {
            deliverables: vec!["tech".to_string(), "sql".to_string(), "analysis".to_string()],
            ..valid_form()
        };
        let surface = surface_for(form);
        assert_eq!(surface.selected(Group::Deliverable), vec!["analysis", "sql", "tech"]);

        let mut surface = surface;
        let mut app = BriefApp::default();
        app.on_generate(&mut surface).expect("Generate failed");
        let doc = parse(app.displayed().unwrap()).unwrap();
        let paths: Vec<&str> = doc.deliverables.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["./项目文档/详细需求分析.md", "./项目文档/Shop.sql", "./项目文档/项目技术文档.md"]
        );
    }
}

// ============================================================
// Copy Tests
// ============================================================

mod copy {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn copies_the_displayed_brief_and_flashes() {
        let mut surface = surface_for(valid_form());
        let mut app = BriefApp::default();
        let clipboard = MemoryClipboard::new();
        app.on_generate(&mut surface).expect("Generate failed");

        let revert = app
            .on_copy(&mut surface, &clipboard)
            .await
            .expect("Copy failed");

        assert_eq!(clipboard.contents().as_deref(), app.displayed());
        assert_eq!(app.status().text(), templates::COPY_SUCCEEDED_LABEL);

        tokio::time::sleep(STATUS_FLASH - Duration::from_millis(1)).await;
        assert_eq!(app.status().text(), templates::COPY_SUCCEEDED_LABEL);

        revert.await.unwrap();
        assert_eq!(app.status().text(), templates::COPY_IDLE_LABEL);
    }

    #[tokio::test(start_paused = true)]
    async fn uses_the_configured_flash_duration() {
        let mut surface = surface_for(valid_form());
        let mut app = BriefApp::new(Duration::from_millis(300));
        app.on_generate(&mut surface).expect("Generate failed");

        let start = tokio::time::Instant::now();
        let revert = app
            .on_copy(&mut surface, &MemoryClipboard::new())
            .await
            .expect("Copy failed");
        revert.await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_millis(300));
        assert_eq!(app.status().text(), templates::COPY_IDLE_LABEL);
    }

    #[tokio::test]
    async fn reports_a_denied_clipboard() {
        let mut surface = surface_for(valid_form());
        let mut app = BriefApp::default();
        app.on_generate(&mut surface).expect("Generate failed");
        let before = app.displayed().map(str::to_string);

        let err = app
            .on_copy(&mut surface, &MemoryClipboard::denied("permission denied"))
            .await
            .expect_err("Copy should fail");

        assert_eq!(err, BriefError::ClipboardUnavailable("permission denied".to_string()));
        assert_eq!(app.status().text(), templates::COPY_IDLE_LABEL);
        assert_eq!(app.displayed().map(str::to_string), before);
        let (_, err) = written(surface);
        assert!(err.contains(templates::COPY_FAILED_NOTICE));
    }

    #[tokio::test]
    async fn refuses_to_copy_before_generating() {
        let mut surface = surface_for(valid_form());
        let app = BriefApp::default();
        let clipboard = MemoryClipboard::new();

        let err = app
            .on_copy(&mut surface, &clipboard)
            .await
            .expect_err("Copy should fail");

        assert_eq!(err, BriefError::NothingToCopy);
        assert!(clipboard.contents().is_none());
        let (_, err) = written(surface);
        assert!(err.contains(templates::NOTHING_TO_COPY_NOTICE));
    }
}

// ============================================================
// Interactive Tests
// ============================================================

mod interactive {
    use super::*;

    /// Answers for the initial walk through every field, keeping all defaults.
    fn fill_script(project_name: &str, requirements: &str) -> String {
        let mut script = String::new();
        script.push_str(&format!("{}\n", project_name));
        if requirements.is_empty() {
            script.push('\n');
        } else {
            script.push_str(&format!("{}\n\n", requirements));
        }
        // frontend, backend, database, deliverables
        script.push_str("Vue3, Vite\nSpring Boot\nMySQL\n\n");
        // supplement, reference, four rules
        script.push_str("\n\n\n\n\n\n");
        script
    }

    async fn run(script: String, clipboard: &MemoryClipboard) -> (BriefApp, String) {
        let mut surface = TerminalSurface::new(script.as_bytes(), Vec::new());
        let mut app = BriefApp::default();
        run_interactive(&mut surface, &mut app, clipboard)
            .await
            .expect("Interactive session failed");
        let output = String::from_utf8(surface.into_writer()).unwrap();
        (app, output)
    }

    #[tokio::test]
    async fn fills_generates_and_copies() {
        let clipboard = MemoryClipboard::new();
        let mut script = fill_script("Demo", "Build a todo app\nwith tags");
        script.push_str("generate\ncopy\nquit\n");

        let (app, output) = run(script, &clipboard).await;

        let doc = parse(app.displayed().expect("nothing displayed")).unwrap();
        assert_eq!(doc.project_name, "Demo");
        assert!(doc.user_input.requirements.starts_with("Build a todo app\nwith tags\n\n---"));
        assert_eq!(doc.tech_stack.frontend, vec!["Vue3", "Vite"]);
        assert_eq!(doc.tech_stack.backend, vec!["Spring Boot"]);
        assert_eq!(doc.deliverables.len(), 6);
        assert_eq!(doc.rules.language, "Chinese");
        assert_eq!(clipboard.contents().as_deref(), app.displayed());
        assert!(output.contains(templates::COPY_SUCCEEDED_LABEL));
    }

    #[tokio::test]
    async fn reprompts_the_missing_field() {
        let clipboard = MemoryClipboard::new();
        let mut script = fill_script("", "Build a todo app");
        // generate fails, the project name is asked again, then generate succeeds
        script.push_str("generate\nRecovered\ngenerate\nquit\n");

        let (app, output) = run(script, &clipboard).await;

        assert!(output.contains(templates::MISSING_PROJECT_NAME_NOTICE));
        let doc = parse(app.displayed().expect("nothing displayed")).unwrap();
        assert_eq!(doc.project_name, "Recovered");
    }

    #[tokio::test]
    async fn edits_a_group_and_clears_a_rule() {
        let clipboard = MemoryClipboard::new();
        let mut script = fill_script("Demo", "Build a todo app");
        script.push_str("edit deliverable\nsql, frontendProto\n");
        script.push_str("edit language\nEnglish\n");
        script.push_str("edit interaction\n-\n");
        script.push_str("generate\n");

        let (app, _) = run(script, &clipboard).await;

        let doc = parse(app.displayed().expect("nothing displayed")).unwrap();
        let kinds: Vec<DeliverableType> = doc.deliverables.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DeliverableType::Database, DeliverableType::Prototype]);
        assert_eq!(doc.rules.language, "English");
        // a cleared rule falls back to its default
        assert_eq!(doc.rules.interaction_model, templates::DEFAULT_INTERACTION_MODEL);
    }

    #[tokio::test]
    async fn stops_quietly_when_input_ends_early() {
        let clipboard = MemoryClipboard::new();
        let (app, _) = run("Demo\n".to_string(), &clipboard).await;
        assert!(app.displayed().is_none());
    }

    #[tokio::test]
    async fn copy_before_generate_is_reported() {
        let clipboard = MemoryClipboard::new();
        let mut script = fill_script("Demo", "Build a todo app");
        script.push_str("copy\n");

        let (_, output) = run(script, &clipboard).await;

        assert!(output.contains(templates::NOTHING_TO_COPY_NOTICE));
        assert!(clipboard.contents().is_none());
    }
}
