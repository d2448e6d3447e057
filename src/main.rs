mod cli;
mod logging;

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use jit_inventory::api::{self, AppState};
use jit_inventory::io::reporting;
use jit_inventory::notify::SmtpNotifier;
use jit_inventory::{service, InventoryContext, LogNotifier, Notifier};

use crate::cli::{Cli, Command, ReportArgs, ServeArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Serve(args) => serve(args),
        Command::Report(args) => report(args),
    }
}

fn serve(args: ServeArgs) -> Result<()> {
    let context = InventoryContext::build(args.run.into_config())
        .context("failed to build inventory context")?;
    let notifier: Arc<dyn Notifier> = match args.smtp.into_settings()? {
        Some(settings) => {
            let host = settings.host.clone();
            let smtp = SmtpNotifier::new(settings).context("invalid SMTP configuration")?;
            tracing::info!(%host, "reorder alerts will be e-mailed");
            Arc::new(smtp)
        }
        None => {
            tracing::info!("no SMTP relay configured; reorder alerts are only logged");
            Arc::new(LogNotifier)
        }
    };
    let state = AppState::new(context, notifier);

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime
        .block_on(api::serve(&args.bind, state))
        .with_context(|| format!("server on {} stopped", args.bind))
}

fn report(args: ReportArgs) -> Result<()> {
    let context = InventoryContext::build(args.run.into_config())
        .context("failed to build inventory context")?;

    println!("=== {} ===", context.item_id());
    println!("day  demand  forecast     ROP  inventory  order");
    for row in context.table().rows() {
        println!(
            "{:>3}  {:>6}  {:>8.2}  {:>6.2}  {:>9}  {:>5}",
            row.day, row.demand, row.forecast, row.rop, row.inventory, row.order
        );
    }

    let kpi = service::kpi_metrics(&context);
    println!("\n=== KPIs ===");
    println!("Safety stock:    {:.2}", context.safety_stock());
    println!("EOQ:             {}", kpi.eoq);
    println!("Total cost:      ${:.2}", kpi.total_cost);
    println!("Turnover rate:   {:.2}", kpi.turnover_rate);
    println!("Stockout risk:   {:.4}", kpi.stockout_risk);

    if let Some(path) = args.output {
        reporting::write_result_table_to_path(&path, context.table().rows())
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nResult table written to {}", path.display());
    }
    Ok(())
}
