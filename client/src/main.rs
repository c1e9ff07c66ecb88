//! RCP CLI - query the relationship connectivity API
//!
//! # Main Commands
//!
//! ```bash
//! rcp connect 12                       # Who on the team knows person 12?
//! rcp company linkedin.com/company/x   # Team overlaps with a whole company
//! rcp people list -q salesforce        # Search people
//! ```
//!
//! # Configuration
//!
//! ```bash
//! RCP_API_BASE=http://localhost:8000 rcp health   # Talk to a backend
//! RCP_API_BASE= rcp health                        # Demo mode, no network
//! rcp --api-base https://rcp-api.fly.dev config --check
//! ```

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use rcp::error::{ClientError, ClientResult};
use rcp::linkedin::{company_slug, slug_to_name};
use rcp::logs::{log_error, log_info, log_success, set_quiet};
use rcp::{
    ApiBase, ApiError, Config, EducationCreate, InteractionCreate, OrgCreate, PersonCreate,
    RcpClient, RoleCreate,
};

#[derive(Parser)]
#[command(name = "rcp")]
#[command(
    about = "Find the strongest connections between your team and outside people",
    long_about = None
)]
struct Cli {
    /// Backend base URL (overrides RCP_API_BASE; empty string for demo mode)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Load settings from this env file instead of ./.env
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Only report warnings and errors on stderr
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the effective configuration
    Config {
        /// Fail if the base URL is not an absolute URL
        #[arg(long)]
        check: bool,
    },

    /// Check that the backend is up
    Health,

    /// Search, show and add people
    People {
        #[command(subcommand)]
        action: PeopleAction,
    },

    /// Search, show and add organizations
    Orgs {
        #[command(subcommand)]
        action: OrgAction,
    },

    /// Rank team members by connectivity to a person
    Connect {
        /// Target person ID
        target_id: i64,
    },

    /// Team overlaps with everyone at a company
    Company {
        /// LinkedIn company URL or slug
        company: String,
    },

    /// Record a role
    Roles {
        #[command(subcommand)]
        action: RoleAction,
    },

    /// Record education
    Education {
        #[command(subcommand)]
        action: EducationAction,
    },

    /// List and log interactions
    Interactions {
        #[command(subcommand)]
        action: InteractionAction,
    },
}

#[derive(Subcommand)]
enum PeopleAction {
    /// Search by name or current company
    List {
        #[arg(short, long)]
        query: Option<String>,
        /// Only the internal team
        #[arg(long)]
        internal_only: bool,
    },

    /// Show one person with roles and education
    Show { id: i64 },

    /// Add a person
    Add {
        /// Full name
        name: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        linkedin: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        /// Member of the internal team
        #[arg(long)]
        internal: bool,
    },
}

#[derive(Subcommand)]
enum OrgAction {
    /// Search by name
    List {
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show one organization with its roles
    Show { id: i64 },

    /// Add an organization
    Add {
        /// Name (derived from the slug when omitted)
        name: Option<String>,
        /// LinkedIn company URL or slug
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        domain: Option<String>,
        #[arg(long)]
        hq: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        portfolio: bool,
    },
}

#[derive(Subcommand)]
enum RoleAction {
    /// Add a role; the organization is created if unknown
    Add {
        person_id: i64,
        org_name: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        start: Option<i32>,
        /// Omit for a current role
        #[arg(long)]
        end: Option<i32>,
        #[arg(long)]
        board: bool,
    },
}

#[derive(Subcommand)]
enum EducationAction {
    /// Add a school
    Add {
        person_id: i64,
        institution: String,
        #[arg(long)]
        degree: Option<String>,
        #[arg(long)]
        field: Option<String>,
        #[arg(long)]
        start: Option<i32>,
        #[arg(long)]
        end: Option<i32>,
    },
}

#[derive(Subcommand)]
enum InteractionAction {
    /// Newest first
    List {
        /// Only interactions involving this person
        #[arg(long)]
        person: Option<i64>,
    },

    /// Log an interaction
    Add {
        /// Internal team member ID
        #[arg(long)]
        internal: i64,
        /// External person ID
        #[arg(long)]
        external: i64,
        /// email, meeting, call, event or linkedin
        #[arg(long = "type", default_value = "meeting")]
        kind: String,
        /// When it happened (RFC 3339, default: now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        #[arg(long)]
        notes: Option<String>,
        /// -2 to 2
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        sentiment: i8,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    set_quiet(cli.quiet);

    if let Err(e) = run(cli).await {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let config = match &cli.env_file {
        Some(path) => Config::from_env_file(path)?,
        None => Config::from_env()?,
    };
    let config = match cli.api_base {
        Some(base) => config.with_api_base(ApiBase::new(base)),
        None => config,
    };
    let output = cli.output.as_deref();

    if let Commands::Config { check } = cli.command {
        return cmd_config(&config, check, output);
    }

    if config.is_demo() {
        log_info("Demo mode: no backend configured, using built-in data");
    } else {
        log_info(format!("Backend: {}", config.api_base()));
    }
    let client = RcpClient::new(config)?;

    match cli.command {
        Commands::Config { .. } => Ok(()),

        Commands::Health => {
            let health = client.health().await?;
            log_success(format!("Backend is {} (version {})", health.status, health.version));
            write_json(&health, output)
        }

        Commands::People { action } => cmd_people(&client, action, output).await,

        Commands::Orgs { action } => cmd_orgs(&client, action, output).await,

        Commands::Connect { target_id } => {
            let response = client.connectivity(target_id).await?;
            log_success(format!(
                "{} connector(s) for {}",
                response.connectors.len(),
                response.target.full_name
            ));
            write_json(&response, output)
        }

        Commands::Company { company } => {
            let slug = company_slug(&company);
            let response = client.company_connectivity(&slug).await?;
            log_success(format!("{} overlap(s) at {}", response.total, response.org.name));
            write_json(&response, output)
        }

        Commands::Roles {
            action: RoleAction::Add { person_id, org_name, title, start, end, board },
        } => {
            let role = client
                .create_role(&RoleCreate {
                    person_id,
                    org_name,
                    title,
                    start_year: start,
                    end_year: end,
                    is_board: board,
                })
                .await?;
            write_json(&role, output)
        }

        Commands::Education {
            action: EducationAction::Add { person_id, institution, degree, field, start, end },
        } => {
            let education = client
                .create_education(&EducationCreate {
                    person_id,
                    institution,
                    degree,
                    field,
                    start_year: start,
                    end_year: end,
                })
                .await?;
            write_json(&education, output)
        }

        Commands::Interactions { action } => cmd_interactions(&client, action, output).await,
    }
}

fn cmd_config(config: &Config, check: bool, output: Option<&Path>) -> ClientResult<()> {
    if check {
        config.api_base().check()?;
        log_success("Base URL looks valid");
    }

    let summary = serde_json::json!({
        "api_base": config.api_base().as_str(),
        "mode": if config.is_demo() { "demo" } else { "backend" },
        "timeout_secs": config.timeout().as_secs(),
        "max_retries": config.max_retries(),
    });
    write_json(&summary, output)
}

async fn cmd_people(
    client: &RcpClient,
    action: PeopleAction,
    output: Option<&Path>,
) -> ClientResult<()> {
    match action {
        PeopleAction::List { query, internal_only } => {
            let people = client.list_people(query.as_deref(), internal_only).await?;
            log_success(format!("{} people", people.len()));
            write_json(&people, output)
        }

        PeopleAction::Show { id } => write_json(&client.get_person(id).await?, output),

        PeopleAction::Add {
            name,
            title,
            company,
            location,
            linkedin,
            email,
            bio,
            internal,
        } => {
            let person = client
                .create_person(&PersonCreate {
                    full_name: name,
                    email,
                    linkedin_url: linkedin,
                    location,
                    bio,
                    current_title: title,
                    current_company: company,
                    is_internal: internal,
                    ..PersonCreate::default()
                })
                .await?;
            log_success(format!("Created person {} ({})", person.full_name(), person.id()));
            write_json(&person, output)
        }
    }
}

async fn cmd_orgs(
    client: &RcpClient,
    action: OrgAction,
    output: Option<&Path>,
) -> ClientResult<()> {
    match action {
        OrgAction::List { query } => {
            let orgs = client.list_orgs(query.as_deref()).await?;
            log_success(format!("{} organizations", orgs.len()));
            write_json(&orgs, output)
        }

        OrgAction::Show { id } => write_json(&client.get_org(id).await?, output),

        OrgAction::Add {
            name,
            slug,
            domain,
            hq,
            industry,
            portfolio,
        } => {
            let slug = slug.map(|s| company_slug(&s));
            let name = match (name, &slug) {
                (Some(name), _) => name,
                (None, Some(slug)) => slug_to_name(slug),
                (None, None) => {
                    let message = "an organization needs a name or a --slug";
                    return Err(ApiError::InvalidInput(message.into()).into());
                }
            };

            let org = client
                .create_org(&OrgCreate {
                    name,
                    linkedin_slug: slug,
                    domain,
                    hq_location: hq,
                    industry,
                    is_portfolio: portfolio,
                })
                .await?;
            log_success(format!("Created organization {} ({})", org.name, org.id));
            write_json(&org, output)
        }
    }
}

async fn cmd_interactions(
    client: &RcpClient,
    action: InteractionAction,
    output: Option<&Path>,
) -> ClientResult<()> {
    match action {
        InteractionAction::List { person } => {
            let interactions = client.list_interactions(person).await?;
            log_success(format!("{} interactions", interactions.len()));
            write_json(&interactions, output)
        }

        InteractionAction::Add {
            internal,
            external,
            kind,
            at,
            notes,
            sentiment,
        } => {
            let interaction = client
                .create_interaction(&InteractionCreate {
                    internal_person_id: internal,
                    external_person_id: external,
                    interaction_type: kind,
                    occurred_at: at.unwrap_or_else(Utc::now),
                    notes,
                    sentiment,
                })
                .await?;
            write_json(&interaction, output)
        }
    }
}

fn write_json<T: Serialize + ?Sized>(value: &T, path: Option<&Path>) -> ClientResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    match path {
        Some(p) => {
            fs::write(p, &json).map_err(ClientError::from)?;
            log_success(format!("Output written to: {}", p.display()));
        }
        None => {
            println!("{}", json);
        }
    }
    Ok(())
}
