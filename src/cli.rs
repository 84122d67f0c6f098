// src/cli.rs
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{info, warn};

use crate::config::PlaceholderIds;
use crate::context::AppContext;
use crate::core::JobsApi;
use crate::dashboard::{FetchOutcome, RecruiterDashboard};
use crate::logo::Logo;
use crate::posting::{Field, PostJobForm, SubmitOutcome};
use crate::render::{render_dashboard, render_form};
use crate::session::Session;
use crate::types::{JobId, JobStatus};

#[derive(Parser)]
#[command(name = "devhire")]
#[command(about = "Post jobs and manage your postings on the job board")]
pub struct DevhireCli {
    #[command(subcommand)]
    pub command: Command,

    /// Signed-in recruiter id
    #[arg(long, global = true, env = "DEVHIRE_USER_ID")]
    pub user_id: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Submit a new job posting
    Post(PostArgs),
    /// Print the recruiter dashboard once
    Jobs,
    /// Interactive dashboard: list, status, delete, refresh, logout, quit
    Dashboard,
}

#[derive(Args, Debug, Clone)]
pub struct PostArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub company: String,
    #[arg(long)]
    pub location: String,
    /// Full-time, Part-time or Contract
    #[arg(long)]
    pub job_type: String,
    #[arg(long)]
    pub salary: Option<String>,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub requirements: String,
    #[arg(long)]
    pub apply_link: Option<String>,
    /// Open, Interviewing or Closed
    #[arg(long)]
    pub job_status: String,
    /// Company logo image
    #[arg(long)]
    pub logo: Option<PathBuf>,
}

impl PostArgs {
    fn inputs(&self) -> Vec<(Field, &str)> {
        vec![
            (Field::Title, self.title.as_str()),
            (Field::Company, self.company.as_str()),
            (Field::Location, self.location.as_str()),
            (Field::JobType, self.job_type.as_str()),
            (Field::Salary, self.salary.as_deref().unwrap_or("")),
            (Field::JobStatus, self.job_status.as_str()),
            (Field::Description, self.description.as_str()),
            (Field::Requirements, self.requirements.as_str()),
            (Field::ApplyLink, self.apply_link.as_deref().unwrap_or("")),
        ]
    }
}

pub async fn handle_command(command: Command, ctx: &mut AppContext) -> Result<ExitCode> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    match command {
        Command::Post(args) => {
            let ids = ctx.placeholder_ids();
            let submitted = post_job(ctx.client(), ids, &args, &mut stdout).await?;
            Ok(if submitted {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Jobs => {
            let mut dashboard = RecruiterDashboard::new();
            match dashboard.sync(ctx.client(), &ctx.session).await {
                FetchOutcome::NoUser => {
                    writeln!(stdout, "❌ No recruiter signed in (use --user-id)")?;
                    return Ok(ExitCode::FAILURE);
                }
                FetchOutcome::Failed => {
                    writeln!(stdout, "❌ Failed to load your job postings")?;
                }
                _ => {}
            }
            write!(stdout, "{}", render_dashboard(&dashboard))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Dashboard => {
            let client = ctx.client().clone();
            run_dashboard(&client, &mut ctx.session, stdin.lock(), &mut stdout).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Fill a form from the arguments and submit it once. Returns false when the
/// input was refused locally and nothing was sent.
pub async fn post_job<A, W>(
    api: &A,
    ids: PlaceholderIds,
    args: &PostArgs,
    out: &mut W,
) -> Result<bool>
where
    A: JobsApi + ?Sized,
    W: Write,
{
    let mut form = PostJobForm::new();
    for (field, value) in args.inputs() {
        if let Err(e) = form.set_field(field, value) {
            writeln!(out, "❌ {}: {}", field, e)?;
            return Ok(false);
        }
    }

    if let Some(path) = &args.logo {
        match Logo::from_path(path).await {
            Ok(logo) => form.attach_logo(logo),
            Err(e) => {
                writeln!(out, "❌ {}", e)?;
                return Ok(false);
            }
        }
    }

    let outcome = form.submit(api, ids).await;
    write!(out, "{}", render_form(&form))?;

    match outcome {
        SubmitOutcome::Blocked { missing } => {
            let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
            writeln!(out, "Please fill in: {}", names.join(", "))?;
            Ok(false)
        }
        SubmitOutcome::Posted(_) | SubmitOutcome::Failed => Ok(true),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardCommand {
    List,
    Status(JobId, JobStatus),
    Delete(JobId),
    Refresh,
    Logout,
    Quit,
}

impl FromStr for DashboardCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            ["list"] | ["ls"] => Ok(Self::List),
            ["status", id, status] => Ok(Self::Status(JobId::from(*id), status.parse()?)),
            ["delete", id] | ["rm", id] => Ok(Self::Delete(JobId::from(*id))),
            ["refresh"] => Ok(Self::Refresh),
            ["logout"] => Ok(Self::Logout),
            ["quit"] | ["exit"] | ["q"] => Ok(Self::Quit),
            _ => anyhow::bail!(
                "Unknown command: {}. Try list, status <id> <Open|Interviewing|Closed>, delete <id>, refresh, logout, quit",
                s.trim()
            ),
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok((read > 0).then(|| line.trim().to_string()))
}

/// Print `prompt` and read a y/N answer; end of input counts as no
fn ask_yes_no<R: BufRead, W: Write>(prompt: &str, input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "{} [y/N] ", prompt).context("Failed to write confirmation prompt")?;
    out.flush().context("Failed to write confirmation prompt")?;
    Ok(read_line(input)?
        .map(|a| a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes"))
        .unwrap_or(false))
}

/// Interactive dashboard over a line-oriented input
pub async fn run_dashboard<A, R, W>(
    api: &A,
    session: &mut Session,
    mut input: R,
    out: &mut W,
) -> Result<()>
where
    A: JobsApi + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut dashboard = RecruiterDashboard::new();
    match dashboard.sync(api, session).await {
        FetchOutcome::NoUser => {
            writeln!(out, "❌ No recruiter signed in (use --user-id)")?;
            return Ok(());
        }
        FetchOutcome::Failed => writeln!(out, "❌ Failed to load your job postings")?,
        _ => {}
    }
    write!(out, "{}", render_dashboard(&dashboard))?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        let command = match line.parse::<DashboardCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "⚠️  {}", e)?;
                continue;
            }
        };

        match command {
            DashboardCommand::List => write!(out, "{}", render_dashboard(&dashboard))?,
            DashboardCommand::Status(id, status) => {
                if dashboard.change_status(&id, status) {
                    writeln!(out, "✅ Job {} is now {}", id, status)?;
                } else {
                    writeln!(out, "❌ No job with id {}", id)?;
                }
            }
            DashboardCommand::Delete(id) => {
                let mut answer_error = None;
                let mut confirm = |prompt: &str| -> bool {
                    match ask_yes_no(prompt, &mut input, &mut *out) {
                        Ok(yes) => yes,
                        Err(e) => {
                            answer_error = Some(e);
                            false
                        }
                    }
                };
                let existed = dashboard.get(&id).is_some();
                let removed = dashboard.delete(&id, &mut confirm);
                if let Some(e) = answer_error {
                    return Err(e);
                }

                if removed {
                    writeln!(out, "✅ Job {} deleted", id)?;
                } else if existed {
                    writeln!(out, "Kept job {}", id)?;
                } else {
                    writeln!(out, "❌ No job with id {}", id)?;
                }
            }
            DashboardCommand::Refresh => {
                if dashboard.refresh(api, session).await == FetchOutcome::Failed {
                    writeln!(out, "❌ Failed to load your job postings")?;
                }
                write!(out, "{}", render_dashboard(&dashboard))?;
            }
            DashboardCommand::Logout => {
                session.log_out();
                info!("Dashboard closed after logout");
                writeln!(out, "Logged out.")?;
                break;
            }
            DashboardCommand::Quit => break,
        }
    }

    if session.user().is_some() {
        warn!("Leaving dashboard; local edits are discarded");
    }
    Ok(())
}
