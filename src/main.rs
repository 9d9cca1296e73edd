use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use onboardflow::config::OnboardFlowConfig;
use onboardflow::documents::{seed_documents, DocumentStatus, FileSelection, ValidationWorkflow};
use onboardflow::employees::{EmployeeRoster, SortColumn};
use onboardflow::notify::TracingNotifier;
use onboardflow::onboarding::{EmployeeForm, FlowEvent, OnboardingFlow};
use onboardflow::routing::TracingNavigator;
use onboardflow::telemetry::{init_telemetry, shutdown_telemetry};
use onboardflow::verification::spawn_timeline;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "onboardflow")]
#[command(about = "HR employee onboarding workflows")]
#[command(long_about = "OnboardFlow drives employee onboarding from the terminal: \
                       the multi-step intake wizard, reviewer-side document validation, \
                       the scripted verification timeline and the submissions roster.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full intake wizard: form, uploads, verification, completion
    Onboard {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        department: String,
        #[arg(long)]
        designation: String,
        #[arg(long, help = "Date of joining, e.g. 2023-06-18")]
        joining_date: String,
    },
    /// Review the submitted document checklist
    Validate {
        /// Approve a document by id (repeatable)
        #[arg(long, value_name = "ID")]
        approve: Vec<String>,
        /// Reject a document with a comment (repeatable)
        #[arg(long, value_name = "ID=COMMENT")]
        reject: Vec<String>,
        /// Approve every remaining pending document
        #[arg(long)]
        bulk: bool,
        /// Attempt to complete validation after the other actions
        #[arg(long)]
        complete: bool,
        /// Print the resulting checklist as JSON
        #[arg(long)]
        json: bool,
    },
    /// Watch the scripted verification timeline run
    Verify,
    /// List employee submitted records
    Records {
        /// Case-insensitive search across name, email and department
        #[arg(long, default_value = "")]
        query: String,
        /// Sort column
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
        /// Print matching records as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Name,
    Email,
    Department,
    Status,
    Submitted,
}

impl From<SortArg> for SortColumn {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortColumn::Name,
            SortArg::Email => SortColumn::Email,
            SortArg::Department => SortColumn::Department,
            SortArg::Status => SortColumn::DocumentStatus,
            SortArg::Submitted => SortColumn::SubmissionDate,
        }
    }
}

fn main() -> Result<()> {
    let _ = OnboardFlowConfig::load_env_file();
    let config = OnboardFlowConfig::load()?;
    init_telemetry(
        &config.observability.log_level,
        config.observability.json_logs,
    )?;

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Onboard {
            first_name,
            last_name,
            email,
            phone,
            gender,
            department,
            designation,
            joining_date,
        } => {
            let form = EmployeeForm {
                first_name,
                last_name,
                email,
                phone,
                gender,
                department,
                designation,
                joining_date,
            };
            tokio::runtime::Runtime::new()?.block_on(onboard_command(&config, form))
        }
        Commands::Validate {
            approve,
            reject,
            bulk,
            complete,
            json,
        } => validate_command(&config, approve, reject, bulk, complete, json),
        Commands::Verify => tokio::runtime::Runtime::new()?.block_on(verify_command(&config)),
        Commands::Records {
            query,
            sort,
            desc,
            json,
        } => records_command(&query, sort, desc, json),
    };

    shutdown_telemetry();
    result
}

fn toast_notifier(config: &OnboardFlowConfig) -> Arc<TracingNotifier> {
    Arc::new(TracingNotifier::with_default_duration(Duration::from_millis(
        config.notifications.display_duration_ms,
    )))
}

async fn onboard_command(config: &OnboardFlowConfig, form: EmployeeForm) -> Result<()> {
    let notifier = toast_notifier(config);
    let navigator = Arc::new(TracingNavigator);
    let mut flow = OnboardingFlow::new(notifier, navigator);

    println!("{}", format!("Onboarding {}...", form.full_name()).cyan());
    flow.handle_event(FlowEvent::SubmitInfo(form))?;
    println!("  {} employee information submitted", "ok".green());

    let ids: Vec<(String, String)> = flow
        .upload()
        .documents()
        .iter()
        .map(|doc| (doc.id.clone(), doc.name.clone()))
        .collect();
    for (id, name) in ids {
        let file_name = format!("{}.pdf", name.to_lowercase().replace(' ', "-"));
        flow.handle_event(FlowEvent::Upload {
            id,
            selection: Some(FileSelection::new(file_name)),
        })?;
        println!("  {} {name} uploaded", "ok".green());
    }
    flow.handle_event(FlowEvent::ContinueToVerification)?;

    run_timeline(config).await;
    flow.handle_event(FlowEvent::VerificationFinished)?;
    flow.handle_event(FlowEvent::CompleteOnboarding)?;
    println!("{}", "Onboarding completed successfully!".green());
    Ok(())
}

fn validate_command(
    config: &OnboardFlowConfig,
    approve: Vec<String>,
    reject: Vec<String>,
    bulk: bool,
    complete: bool,
    json: bool,
) -> Result<()> {
    let notifier = toast_notifier(config);
    let navigator = Arc::new(TracingNavigator);
    let mut workflow = ValidationWorkflow::with_seed_documents(notifier, navigator);

    for id in &approve {
        workflow.approve(id)?;
    }
    for entry in &reject {
        let (id, comment) = entry.split_once('=').unwrap_or((entry.as_str(), ""));
        workflow.reject(id, comment)?;
    }
    if bulk {
        let count = workflow.bulk_approve();
        println!("{}", format!("{count} documents approved in bulk").cyan());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(workflow.documents())?);
    } else {
        println!("{:<4} {:<36} {:<10} Comment", "ID", "Document", "Status");
        for doc in workflow.documents() {
            println!(
                "{:<4} {:<36} {} {}",
                doc.id,
                doc.name,
                status_cell(doc.status),
                doc.comment.as_deref().unwrap_or("-"),
            );
        }
    }

    if complete {
        match workflow.complete() {
            Ok(()) => println!("{}", "All documents approved".green()),
            Err(err) => println!("{}", err.to_string().yellow()),
        }
    } else if workflow.is_all_validated() && !workflow.can_complete() {
        println!("{}", "Some documents were rejected".yellow());
    } else if !workflow.is_all_validated() {
        println!("{}", "All documents must be validated".yellow());
    }
    Ok(())
}

async fn verify_command(config: &OnboardFlowConfig) -> Result<()> {
    run_timeline(config).await;
    println!("{}", "Verification Complete".green());
    println!("All documents have been successfully verified.");
    Ok(())
}

async fn run_timeline(config: &OnboardFlowConfig) {
    let documents = seed_documents();
    let total = documents.len();
    let (mut rx, _handle) = spawn_timeline(config.verification.schedule(), total);

    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap(),
    );
    bar.set_message("verifying documents...");

    while rx.changed().await.is_ok() {
        let timeline = *rx.borrow();
        bar.set_position(timeline.verified() as u64);
        if timeline.completed() {
            break;
        }
    }
    bar.finish_with_message("all documents verified");

    let timeline = *rx.borrow();
    for (index, doc) in documents.iter().enumerate() {
        let state = timeline.state_of(index);
        println!("  {:<36} {}", doc.name, state.as_str().green());
    }
}

fn records_command(query: &str, sort: Option<SortArg>, desc: bool, json: bool) -> Result<()> {
    let mut roster = EmployeeRoster::default();
    if let Some(column) = sort {
        let column: SortColumn = column.into();
        roster.toggle_sort(column);
        if desc {
            roster.toggle_sort(column);
        }
    }

    let matches = roster.search(query);
    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    println!(
        "{:<4} {:<16} {:<28} {:<16} {:<10} Submitted",
        "ID", "Employee", "Email", "Department", "Status"
    );
    for record in &matches {
        println!(
            "{:<4} {:<16} {:<28} {:<16} {} {}",
            record.id,
            record.name,
            record.email,
            record.department,
            record_status_cell(record),
            record.submission_date.format("%d %b %Y"),
        );
    }
    if matches.is_empty() {
        println!("No records found matching your search criteria.");
    }
    Ok(())
}

// Pad before coloring so ANSI codes do not break column alignment.
fn status_cell(status: DocumentStatus) -> colored::ColoredString {
    let padded = format!("{:<10}", status.as_str());
    match status {
        DocumentStatus::Approved => padded.green(),
        DocumentStatus::Rejected => padded.red(),
        DocumentStatus::Uploaded => padded.cyan(),
        DocumentStatus::Pending => padded.yellow(),
    }
}

fn record_status_cell(record: &onboardflow::employees::EmployeeRecord) -> colored::ColoredString {
    use onboardflow::employees::RecordStatus;
    let padded = format!("{:<10}", record.document_status.as_str());
    match record.document_status {
        RecordStatus::Approved => padded.green(),
        RecordStatus::Rejected => padded.red(),
        RecordStatus::Pending => padded.yellow(),
    }
}
