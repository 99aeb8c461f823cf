mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use progress_core::model::{SessionRecord, SetField, Task, Template, TemplateId};
use services::{AppServices, Clock, TemplateSummary};

use crate::cli::{Cli, Command, CopyArg, OutputFormat, SetArg};

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PROGRESS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to encode output")?;
    println!("{text}");
    Ok(())
}

fn print_templates(templates: &[TemplateSummary], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&templates),
        OutputFormat::Table => {
            for t in templates {
                println!(
                    "{:<3} {:<10} {:<5} {:>2} exercises  {:>2} sets",
                    t.id.as_str(),
                    t.name,
                    t.tag,
                    t.exercises,
                    t.total_sets
                );
            }
            Ok(())
        }
    }
}

fn print_template(template: &Template, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(template),
        OutputFormat::Table => {
            println!("{}", template.label());
            for exercise in template.exercises() {
                println!("  {:<30} {}", exercise.name(), exercise.goal_label());
            }
            Ok(())
        }
    }
}

fn print_record(record: &SessionRecord, template: &Template, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(record),
        OutputFormat::Table => {
            println!("{} @ {}", template.label(), record.date_iso());
            for exercise in template.exercises() {
                let Some(sets) = record.entries().get(exercise.name()) else {
                    continue;
                };
                println!("  {} ({})", exercise.name(), exercise.goal_label());
                for (idx, set) in sets.iter().enumerate() {
                    println!(
                        "    set {}: {:>6} kg x {:>3}",
                        idx + 1,
                        display_or_dash(&set.weight),
                        display_or_dash(&set.reps)
                    );
                }
            }
            Ok(())
        }
    }
}

fn print_tasks(tasks: &[Task], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&tasks),
        OutputFormat::Table => {
            for task in tasks {
                let mark = if task.is_done() { "x" } else { " " };
                println!("[{mark}] {:>3}  {}", task.id(), task.description());
            }
            Ok(())
        }
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn log_session(
    app: &AppServices,
    id: &str,
    sets: &[SetArg],
    copies: &[CopyArg],
    format: OutputFormat,
) -> Result<()> {
    let id: TemplateId = id.parse().context("invalid template id")?;
    let mut log = app.session_log();
    log.select_template(&id)
        .with_context(|| format!("cannot start a session from template `{id}`"))?;

    for arg in sets {
        log.edit_field(&arg.exercise, arg.index, SetField::Weight, arg.weight.as_str())
            .and_then(|()| log.edit_field(&arg.exercise, arg.index, SetField::Reps, arg.reps.as_str()))
            .with_context(|| format!("cannot fill set {} of `{}`", arg.index + 1, arg.exercise))?;
    }
    for arg in copies {
        log.copy_previous(&arg.exercise, arg.index)
            .with_context(|| format!("cannot copy into set {} of `{}`", arg.index + 1, arg.exercise))?;
    }

    let template = log
        .selected()
        .cloned()
        .context("template selection was lost")?;
    let record = log.submit().context("failed to register session")?;
    print_record(&record, &template, format)
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let app = AppServices::in_memory(Clock::default()).context("failed to load built-in data")?;

    match cli.command {
        Command::Templates => {
            let templates = app.templates().list()?;
            print_templates(&templates, cli.format)
        }
        Command::View { id } => {
            let id: TemplateId = id.parse().context("invalid template id")?;
            let template = app.templates().view(&id)?;
            print_template(&template, cli.format)
        }
        Command::Log { id, sets, copies } => log_session(&app, &id, &sets, &copies, cli.format),
        Command::Tasks => {
            let tasks = app.tasks().list()?;
            print_tasks(&tasks, cli.format)
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
