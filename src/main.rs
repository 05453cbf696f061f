use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use link_updater::commands::validators;
use link_updater::github::{GitHubClient, PublishTarget};
use link_updater::{commands::*, constants, load_changes};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "link-updater")]
#[command(about = "Report rewritten repository links and open a pull request for them")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the markdown report for the recorded link changes
    Report {
        /// Change list written by the rewriting stage (JSON, or YAML by extension)
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CHANGES_FILE.to_string())]
        changes: String,
    },

    /// Open a pull request whose body is the link change report
    Publish {
        /// Branch holding the rewritten links
        #[arg(long)]
        branch: String,

        /// Change list written by the rewriting stage (JSON, or YAML by extension)
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CHANGES_FILE.to_string())]
        changes: String,

        /// Target repository as owner/name or a GitHub URL
        #[arg(long, env = "GITHUB_REPOSITORY")]
        repo: Option<String>,

        /// Base branch for the PR
        #[arg(long, default_value = constants::github::DEFAULT_BASE_BRANCH)]
        base: String,

        /// Title for the pull request
        #[arg(long, default_value = constants::github::DEFAULT_PR_TITLE)]
        title: String,

        /// Create PR as draft
        #[arg(long)]
        draft: bool,

        /// GitHub token
        #[arg(long)]
        token: Option<String>,

        /// GitHub REST endpoint, for GitHub Enterprise
        #[arg(long, env = "GITHUB_API_URL")]
        api_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A valid RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Report { changes } => {
            let context = CommandContext::new(load_changes(&changes)?);
            ReportCommand.execute(&context).await?;
        }
        Commands::Publish {
            branch,
            changes,
            repo,
            base,
            title,
            draft,
            token,
            api_url,
        } => {
            validators::validate_branch_name("branch", &branch)?;
            validators::validate_branch_name("base", &base)?;
            validators::validate_title(&title)?;
            let repo = validators::require_repository(repo)?;
            let token = validators::resolve_token(token)?;

            let mut target = PublishTarget::from_slug(&repo)
                .with_context(|| format!("Cannot publish to '{}'", repo))?
                .with_base_branch(base)
                .with_title(title);
            if draft {
                target = target.as_draft();
            }

            let mut client = GitHubClient::new(Some(token));
            if let Some(api_url) = api_url {
                client = client.with_api_base(api_url);
            }

            let context = CommandContext::new(load_changes(&changes)?);
            PublishCommand::new(client, target, branch)
                .execute(&context)
                .await?;
        }
    }

    Ok(())
}
