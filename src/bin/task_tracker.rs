//! Line-oriented terminal driver for the task tracker.
//!
//! Usage:
//!
//! ```text
//! task_tracker [--log-filter <directive>] [--log-format compact|json]
//! ```
//!
//! Commands are read from standard input, one per line. The text after
//! `title` and `comment` is taken verbatim, apart from the single separator
//! following the verb:
//!
//! ```text
//! add                 open the creation dialog
//! close               close the creation dialog
//! title <text>        set the new task's title
//! assignee <name>     set the new task's assignee
//! submit              create the task
//! tab <status>        switch to a status tab
//! toggle <id>         expand or collapse a task
//! comment <text>      set the expanded task's comment
//! status <status>     set the expanded task's status
//! save                save the expanded task
//! show                print the active tab
//! json                print the view snapshot as JSON
//! quit                exit
//! ```

use clap::Parser;
use mockable::DefaultClock;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use task_tracker::{
    config::{LogFormat, TrackerConfig},
    interaction::{InteractionController, InteractionEvent, Transition, ViewSnapshot},
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{Assignee, ParseAssigneeError, ParseStatusError, Status, TaskId},
        services::TaskLifecycleService,
    },
    telemetry::init_tracing,
};
use thiserror::Error;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Controller = InteractionController<InMemoryTaskRepository, DefaultClock>;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "task_tracker", about = "Track tasks through Pending, In Progress and Done")]
struct Cli {
    /// Log filter directive; overrides `TASK_TRACKER_LOG`.
    #[arg(long)]
    log_filter: Option<String>,
    /// Log output format; overrides `TASK_TRACKER_LOG_FORMAT`.
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

/// Errors raised while parsing an input line.
#[derive(Debug, Error, PartialEq, Eq)]
enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid task id '{0}'")]
    InvalidTaskId(String),
    #[error(transparent)]
    Status(#[from] ParseStatusError),
    #[error(transparent)]
    Assignee(#[from] ParseAssigneeError),
}

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Event(InteractionEvent),
    Show,
    Json,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let leading = line.trim_start();
        if leading.is_empty() {
            return Ok(None);
        }
        let (verb, text) = leading
            .split_once(char::is_whitespace)
            .unwrap_or((leading, ""));
        let rest = text.trim();
        let argument = |name: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(name))
            } else {
                Ok(rest)
            }
        };

        let command = match verb {
            "add" => Self::Event(InteractionEvent::OpenCreateDialog),
            "close" => Self::Event(InteractionEvent::CloseCreateDialog),
            // An empty title is a valid draft; submit rejects it.
            "title" => Self::Event(InteractionEvent::creation_title(text)),
            "assignee" => Self::Event(InteractionEvent::creation_assignee(Assignee::try_from(
                argument("assignee")?,
            )?)),
            "submit" => Self::Event(InteractionEvent::SubmitCreation),
            "tab" => Self::Event(InteractionEvent::SelectTab(Status::try_from(argument(
                "tab",
            )?)?)),
            "toggle" => Self::Event(InteractionEvent::ToggleExpand(parse_task_id(argument(
                "toggle",
            )?)?)),
            "comment" => Self::Event(InteractionEvent::draft_comment(text)),
            "status" => Self::Event(InteractionEvent::draft_status(Status::try_from(
                argument("status")?,
            )?)),
            "save" => Self::Event(InteractionEvent::SaveEdit),
            "show" => Self::Show,
            "json" => Self::Json,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_owned())),
        };
        Ok(Some(command))
    }
}

fn parse_task_id(value: &str) -> Result<TaskId, CommandError> {
    value
        .parse::<u64>()
        .map(TaskId::new)
        .map_err(|_| CommandError::InvalidTaskId(value.to_owned()))
}

/// Writes the active tab the way a tabbed list would show it.
fn render(out: &mut impl Write, snapshot: &ViewSnapshot) -> io::Result<()> {
    let tabs: Vec<String> = snapshot
        .tabs
        .iter()
        .map(|tab| {
            if tab.active {
                format!("[{} ({})]", tab.label, tab.task_count)
            } else {
                format!(" {} ({}) ", tab.label, tab.task_count)
            }
        })
        .collect();
    writeln!(out, "{}", tabs.join(" "))?;

    if snapshot.visible_tasks.is_empty() {
        writeln!(out, "No tasks in this section.")?;
    }
    for task in &snapshot.visible_tasks {
        writeln!(
            out,
            "#{} {} ({}) {}",
            task.id(),
            task.title(),
            task.assignee(),
            task.status().label()
        )?;
        let expanded_draft = snapshot
            .edit_draft
            .as_ref()
            .filter(|_| snapshot.expanded_task_id == Some(task.id()));
        if let Some(draft) = expanded_draft {
            writeln!(out, "    comment: {}", draft.comment)?;
            writeln!(out, "    status:  {}", draft.status.label())?;
        }
    }

    if snapshot.create_dialog_open {
        writeln!(
            out,
            "Add Task: title='{}' assignee={}",
            snapshot.creation_draft.title, snapshot.creation_draft.assignee
        )?;
    }
    Ok(())
}

/// Processes input lines until end of input or `quit`.
fn run(
    controller: &mut Controller,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), BoxError> {
    for line in input.lines() {
        let command = match Command::parse(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Show => render(out, &controller.snapshot()?)?,
            Command::Json => {
                serde_json::to_writer_pretty(&mut *out, &controller.snapshot()?)?;
                writeln!(out)?;
            }
            Command::Event(event) => {
                if let Transition::Ignored(reason) = controller.dispatch(event)? {
                    writeln!(out, "ignored: {reason}")?;
                }
                render(out, &controller.snapshot()?)?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let mut config = TrackerConfig::from_env()?;
    if let Some(filter) = cli.log_filter {
        config = config.with_log_filter(filter);
    }
    if let Some(format) = cli.log_format {
        config = config.with_log_format(format);
    }
    init_tracing(&config)?;

    let mut controller = InteractionController::new(TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    ));
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &controller.snapshot()?)?;
    run(&mut controller, stdin.lock(), &mut out)
}
