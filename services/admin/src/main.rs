use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::error;

use fieldops_core::config::Config;
use fieldops_core::tracing::init_tracing;

use fieldops_admin::config::AdminConfig;
use fieldops_admin::handlers::entity::{self, EntityAction};
use fieldops_admin::handlers::session;
use fieldops_admin::state::AppState;
use fieldops_admin::usecase::page::{EntityPage, PageSpec};
use fieldops_admin::usecase::pages::{
    AddressPage, CustomerPage, InvoicePage, PartPage, ServiceRequestPage, SupplierPage,
    TechnicianPage,
};

#[derive(Parser)]
#[command(name = "fieldops-admin", about = "Manage field-service records over the REST API")]
struct Cli {
    /// Base URL of the API, overriding FIELDOPS_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Store an API token for subsequent requests
    Login {
        #[arg(long)]
        token: String,
    },
    /// Remove the stored token
    Logout,
    /// Show whether requests will be authenticated
    Whoami,
    Addresses {
        #[command(subcommand)]
        action: EntityAction,
    },
    Customers {
        #[command(subcommand)]
        action: EntityAction,
    },
    ServiceRequests {
        #[command(subcommand)]
        action: EntityAction,
    },
    Technicians {
        #[command(subcommand)]
        action: EntityAction,
    },
    Parts {
        #[command(subcommand)]
        action: EntityAction,
    },
    Suppliers {
        #[command(subcommand)]
        action: EntityAction,
    },
    Invoices {
        #[command(subcommand)]
        action: EntityAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let mut config = AdminConfig::from_env().context("invalid FIELDOPS_* configuration")?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    init_tracing(config.log_format);

    let state = AppState::new(config);
    match execute(&state, cli.command).await {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "command failed");
            Err(err)
        }
    }
}

async fn execute(state: &AppState, command: Command) -> Result<String> {
    let output = match command {
        Command::Login { token } => session::login(&state.session, &token)?,
        Command::Logout => session::logout(&state.session)?,
        Command::Whoami => session::whoami(&state.session, &state.config.api_url),
        Command::Addresses { action } => run_page::<AddressPage>(state, action).await?,
        Command::Customers { action } => run_page::<CustomerPage>(state, action).await?,
        Command::ServiceRequests { action } => {
            run_page::<ServiceRequestPage>(state, action).await?
        }
        Command::Technicians { action } => run_page::<TechnicianPage>(state, action).await?,
        Command::Parts { action } => run_page::<PartPage>(state, action).await?,
        Command::Suppliers { action } => run_page::<SupplierPage>(state, action).await?,
        Command::Invoices { action } => run_page::<InvoicePage>(state, action).await?,
    };
    Ok(output)
}

async fn run_page<S: PageSpec>(state: &AppState, action: EntityAction) -> Result<String> {
    let api = state.api()?;
    let mut page = EntityPage::<S, _>::new(api);
    Ok(entity::run(&mut page, action).await?)
}
