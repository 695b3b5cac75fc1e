use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use opsdesk_cli::{commands, CliOutput};

#[derive(Parser)]
#[command(author, version, about = "Operations desk for the platform back end")]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Operator email; enables authenticated calls when set with --password.
    #[arg(long, global = true, env = "OPSDESK_EMAIL")]
    email: Option<String>,
    #[arg(long, global = true, env = "OPSDESK_PASSWORD", hide_env_values = true)]
    password: Option<String>,
    #[arg(long, global = true, value_enum, default_value_t = CliOutput::Table)]
    output: CliOutput,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Companies registered on the financial module
    Companies {
        #[command(subcommand)]
        command: CompanyCommands,
    },
    /// Customers of a company
    Customers {
        #[arg(long)]
        company: String,
    },
    /// Suppliers on the inventory module
    Suppliers {
        #[command(subcommand)]
        command: SupplierCommands,
    },
    /// Platform user accounts
    Users,
    /// Invoices issued for a company
    Invoices {
        #[arg(long)]
        company: String,
    },
    /// Serve a built front-end bundle
    Serve {
        root: PathBuf,
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Subcommand)]
enum CompanyCommands {
    List,
    Get { id: String },
}

#[derive(Subcommand)]
enum SupplierCommands {
    List {
        #[arg(long)]
        company: String,
    },
    Delete {
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("default subscriber");

    let ctx = commands::CliContext::from_env()?;
    if let (Some(email), Some(password)) = (&cli.email, &cli.password) {
        ctx.sign_in(email, password).await?;
    }

    match cli.command {
        Commands::Companies { command } => match command {
            CompanyCommands::List => commands::cmd_companies_list(&ctx, cli.output).await?,
            CompanyCommands::Get { id } => commands::cmd_company_get(&ctx, id).await?,
        },
        Commands::Customers { company } => {
            commands::cmd_customers_list(&ctx, company, cli.output).await?
        }
        Commands::Suppliers { command } => match command {
            SupplierCommands::List { company } => {
                commands::cmd_suppliers_list(&ctx, company, cli.output).await?
            }
            SupplierCommands::Delete { id } => commands::cmd_supplier_delete(&ctx, id).await?,
        },
        Commands::Users => commands::cmd_users_list(&ctx, cli.output).await?,
        Commands::Invoices { company } => {
            commands::cmd_invoices_list(&ctx, company, cli.output).await?
        }
        Commands::Serve { root, port } => commands::cmd_serve(root, port).await?,
    }

    Ok(())
}
