use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use opsdesk_api::classify::{Classifier, FallbackOrder};
use opsdesk_api::client::{default_http_client, ApiClient, SessionContext};
use opsdesk_api::services::{
    AuthService, CompanyService, CustomerService, InvoiceService, SupplierService, UserService,
};
use opsdesk_api::static_site;
use opsdesk_api::ApiFailure;
use opsdesk_config::{Endpoints, ServeConfig};

use crate::CliOutput;

pub struct CliContext {
    client: Arc<ApiClient>,
    classifier: Classifier,
}

impl CliContext {
    pub fn from_env() -> Result<Self> {
        let http = default_http_client().context("Failed to build HTTP client")?;
        let client = Arc::new(ApiClient::new(
            http,
            Endpoints::from_env(),
            SessionContext::new(),
        ));
        Ok(Self {
            client,
            classifier: Classifier::new(FallbackOrder::ErrorsFirst),
        })
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<()> {
        let auth = AuthService::new(self.client.clone());
        let profile = auth
            .sign_in(email, password)
            .await
            .map_err(|e| self.render_failure(e))?;
        println!(":: Signed in as {}", profile.email);
        Ok(())
    }

    fn render_failure(&self, failure: ApiFailure) -> anyhow::Error {
        let classified = self.classifier.classify(&failure);
        match classified.details {
            Some(details) => anyhow::anyhow!("{} ({details})", classified.message),
            None => anyhow::anyhow!(classified.message),
        }
    }
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn cmd_companies_list(ctx: &CliContext, output: CliOutput) -> Result<()> {
    let pb = spinner("Fetching companies...");
    let companies = CompanyService::new(ctx.client.clone())
        .list()
        .await
        .map_err(|e| ctx.render_failure(e));
    pb.finish_and_clear();
    let companies = companies?;

    if output == CliOutput::Json {
        return print_json(&companies);
    }
    if companies.is_empty() {
        println!(":: No companies registered yet.");
        return Ok(());
    }
    println!("{:<38} {:<30} {:<20} STATUS", "ID", "NAME", "TAX ID");
    for c in &companies {
        println!(
            "{:<38} {:<30} {:<20} {}",
            c.id,
            c.name,
            c.tax_id,
            if c.active { "active" } else { "inactive" }
        );
    }
    Ok(())
}

pub async fn cmd_company_get(ctx: &CliContext, id: String) -> Result<()> {
    let company = CompanyService::new(ctx.client.clone())
        .get(&id)
        .await
        .map_err(|e| ctx.render_failure(e))?;
    print_json(&company)
}

pub async fn cmd_customers_list(
    ctx: &CliContext,
    company_id: String,
    output: CliOutput,
) -> Result<()> {
    let pb = spinner("Fetching customers...");
    let customers = CustomerService::new(ctx.client.clone())
        .list_for_company(&company_id)
        .await
        .map_err(|e| ctx.render_failure(e));
    pb.finish_and_clear();
    let customers = customers?;

    if output == CliOutput::Json {
        return print_json(&customers);
    }
    if customers.is_empty() {
        println!(":: This company has no customers yet.");
        return Ok(());
    }
    println!("{:<38} {:<30} EMAIL", "ID", "NAME");
    for c in &customers {
        println!("{:<38} {:<30} {}", c.id, c.name, c.email);
    }
    Ok(())
}

pub async fn cmd_suppliers_list(
    ctx: &CliContext,
    company_id: String,
    output: CliOutput,
) -> Result<()> {
    let pb = spinner("Fetching suppliers...");
    let suppliers = SupplierService::new(ctx.client.clone())
        .list_for_company(&company_id)
        .await
        .map_err(|e| ctx.render_failure(e));
    pb.finish_and_clear();
    let suppliers = suppliers?;

    if output == CliOutput::Json {
        return print_json(&suppliers);
    }
    if suppliers.is_empty() {
        println!(":: This company has no suppliers yet.");
        return Ok(());
    }
    println!("{:<38} {:<30} {:<20} EMAIL", "ID", "NAME", "TAX ID");
    for s in &suppliers {
        println!("{:<38} {:<30} {:<20} {}", s.id, s.name, s.tax_id, s.email);
    }
    Ok(())
}

pub async fn cmd_supplier_delete(ctx: &CliContext, id: String) -> Result<()> {
    SupplierService::new(ctx.client.clone())
        .delete(&id)
        .await
        .map_err(|e| ctx.render_failure(e))?;
    println!(":: Supplier {id} deleted.");
    Ok(())
}

pub async fn cmd_users_list(ctx: &CliContext, output: CliOutput) -> Result<()> {
    let users = UserService::new(ctx.client.clone())
        .list()
        .await
        .map_err(|e| ctx.render_failure(e))?;

    if output == CliOutput::Json {
        return print_json(&users);
    }
    if users.is_empty() {
        println!(":: No users found.");
        return Ok(());
    }
    println!("{:<38} {:<30} {:<12} STATUS", "ID", "EMAIL", "ROLE");
    for u in &users {
        println!(
            "{:<38} {:<30} {:<12} {}",
            u.id,
            u.email,
            u.role,
            if u.active { "active" } else { "deactivated" }
        );
    }
    Ok(())
}

pub async fn cmd_invoices_list(
    ctx: &CliContext,
    company_id: String,
    output: CliOutput,
) -> Result<()> {
    let invoices = InvoiceService::new(ctx.client.clone())
        .list_for_company(&company_id)
        .await
        .map_err(|e| ctx.render_failure(e))?;

    if output == CliOutput::Json {
        return print_json(&invoices);
    }
    if invoices.is_empty() {
        println!(":: No invoices issued for this company.");
        return Ok(());
    }
    println!("{:<16} {:<14} {:<12} ISSUED", "NUMBER", "AMOUNT", "STATUS");
    for i in &invoices {
        let issued = i
            .issued_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<16} {:<14} {:<12} {}",
            i.number,
            format!("{} {}.{:02}", i.currency, i.amount_cents / 100, i.amount_cents.rem_euclid(100)),
            i.status,
            issued
        );
    }
    Ok(())
}

/// Serves a built front-end bundle over HTTP, falling back to the entry
/// document for client-side routes.
pub async fn cmd_serve(root: PathBuf, port: Option<u16>) -> Result<()> {
    let cfg = ServeConfig::from_env();
    let port = port.unwrap_or(cfg.port);
    println!(":: Serving {} on 0.0.0.0:{port} ({})", root.display(), cfg.mode);
    static_site::serve(root, port, &cfg.mode)
        .await
        .context("Static server failed")
}
