use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_brief::clipboard::SystemClipboard;
use agent_brief::commands::BriefApp;
use agent_brief::config::{self, AppConfig};
use agent_brief::models::FormInput;
use agent_brief::surface::{self, CliSurface, TerminalSurface};

#[derive(Parser)]
#[command(name = "agent-brief")]
#[command(about = "Turn a project form into a JSON brief for AI coding agents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a brief and print it to stdout
    Generate(GenerateArgs),
    /// Fill in the form interactively
    Interactive,
    /// List the deliverables that can be requested
    Deliverables,
    /// Work with form files
    Form {
        #[command(subcommand)]
        command: FormCommands,
    },
}

#[derive(Subcommand)]
enum FormCommands {
    /// Write a form file pre-filled with the default rules
    Init {
        #[arg(default_value = "brief.toml")]
        path: PathBuf,
    },
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Form file to start from (TOML)
    #[arg(short, long)]
    form: Option<PathBuf>,

    #[arg(short, long)]
    project_name: Option<String>,

    #[arg(short, long, conflicts_with = "requirements_file")]
    requirements: Option<String>,

    /// Read the requirements text from a file
    #[arg(long)]
    requirements_file: Option<PathBuf>,

    /// Frontend technology (repeatable)
    #[arg(long)]
    frontend: Vec<String>,

    /// Backend technology (repeatable)
    #[arg(long)]
    backend: Vec<String>,

    /// Database technology (repeatable)
    #[arg(long)]
    database: Vec<String>,

    #[arg(long)]
    tech_supplement: Option<String>,

    /// Point the agent at a ./参考项目 folder
    #[arg(long)]
    include_reference: bool,

    /// Deliverable key to request (repeatable; replaces the default selection)
    #[arg(short, long = "deliverable")]
    deliverables: Vec<String>,

    #[arg(long)]
    language: Option<String>,

    #[arg(long)]
    progress_log: Option<String>,

    #[arg(long)]
    interaction: Option<String>,

    #[arg(long)]
    code_modification: Option<String>,

    /// Also copy the brief to the clipboard
    #[arg(short, long)]
    copy: bool,
}

impl GenerateArgs {
    /// Layer the flags over a form. List flags replace, they don't append.
    fn apply(self, form: &mut FormInput) -> anyhow::Result<()> {
        if let Some(v) = self.project_name {
            form.project_name = v;
        }
        if let Some(v) = self.requirements {
            form.requirements = v;
        }
        if let Some(path) = self.requirements_file {
            form.requirements = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        if let Some(v) = self.tech_supplement {
            form.tech_supplement = v;
        }
        if self.include_reference {
            form.include_reference = true;
        }
        replace_if_given(&mut form.frontend, self.frontend);
        replace_if_given(&mut form.backend, self.backend);
        replace_if_given(&mut form.database, self.database);
        for key in &self.deliverables {
            if !surface::is_known_deliverable(key) {
                tracing::warn!("Unknown deliverable '{}' will be ignored", key);
            }
        }
        replace_if_given(&mut form.deliverables, self.deliverables);
        if let Some(v) = self.language {
            form.rules.language = v;
        }
        if let Some(v) = self.progress_log {
            form.rules.progress_log_instruction = v;
        }
        if let Some(v) = self.interaction {
            form.rules.interaction_model = v;
        }
        if let Some(v) = self.code_modification {
            form.rules.code_modification = v;
        }
        Ok(())
    }
}

fn replace_if_given(target: &mut Vec<String>, given: Vec<String>) {
    if !given.is_empty() {
        *target = given;
    }
}

/// Logs go to stderr so stdout carries only the brief.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "agent_brief=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = AppConfig::load();

    match cli.command {
        Commands::Generate(args) => {
            let form_path = args.form.clone().or_else(|| config.default_form.clone());
            let mut form = match form_path {
                Some(path) => config::load_form(&path)?,
                None => FormInput::default(),
            };
            let copy = args.copy || config.copy_after_generate;
            args.apply(&mut form)?;

            let mut surface = CliSurface::new(form);
            let mut app = BriefApp::new(config.status_flash());
            app.on_generate(&mut surface)?;

            if copy {
                // A failed copy is reported on the surface; the brief is still on stdout.
                if app.on_copy(&mut surface, &SystemClipboard).await.is_ok() {
                    eprintln!("{}", app.status().text());
                }
            }
        }
        Commands::Interactive => {
            let reader = tokio::io::BufReader::new(tokio::io::stdin());
            let mut surface = TerminalSurface::new(reader, std::io::stdout());
            let mut app = BriefApp::new(config.status_flash());
            surface::run_interactive(&mut surface, &mut app, &SystemClipboard).await?;
        }
        Commands::Deliverables => {
            print!(
                "{}",
                surface::describe_deliverables(
                    &agent_brief::models::DeliverableDefinition::default_keys()
                )
            );
        }
        Commands::Form {
            command: FormCommands::Init { path },
        } => {
            config::write_form_template(&path)?;
            tracing::info!("Wrote form template to {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_form_values() {
        let mut form = FormInput {
            project_name: "FromFile".to_string(),
            frontend: vec!["React".to_string()],
            backend: vec!["Go".to_string()],
            ..Default::default()
        };
        let args = GenerateArgs {
            project_name: Some("FromFlag".to_string()),
            frontend: vec!["Vue3".to_string(), "Vite".to_string()],
            deliverables: vec!["sql".to_string()],
            language: Some("English".to_string()),
            ..Default::default()
        };
        args.apply(&mut form).unwrap();

        assert_eq!(form.project_name, "FromFlag");
        assert_eq!(form.frontend, vec!["Vue3", "Vite"]);
        assert_eq!(form.backend, vec!["Go"]);
        assert_eq!(form.deliverables, vec!["sql"]);
        assert_eq!(form.rules.language, "English");
    }

    #[test]
    fn parses_repeated_flags() {
        let cli = Cli::try_parse_from([
            "agent-brief",
            "generate",
            "-p",
            "Shop",
            "-r",
            "Sell things",
            "-d",
            "sql",
            "-d",
            "analysis",
            "--include-reference",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.deliverables, vec!["sql", "analysis"]);
        assert!(args.include_reference);
    }
}
