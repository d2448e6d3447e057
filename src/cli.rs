use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use jit_inventory::notify::SmtpSettings;
use jit_inventory::SimulationConfig;

/// Single-item inventory simulator with reorder-point replenishment.
#[derive(Parser)]
#[command(
    name = "jit-inventory",
    version,
    about = "Inventory simulation with forecast-driven reorder points and EOQ"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the simulation once and serve the results over HTTP.
    Serve(ServeArgs),
    /// Run the simulation once and print or export the results.
    Report(ReportArgs),
}

/// Arguments for the `serve` subcommand.
#[derive(clap::Args)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(short, long, default_value = "0.0.0.0:8000")]
    pub bind: String,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(flatten)]
    pub smtp: SmtpArgs,
}

/// Where low-stock alerts are e-mailed. Without `--smtp-host` they are only logged.
#[derive(clap::Args)]
pub struct SmtpArgs {
    /// SMTP relay host.
    #[arg(long = "smtp-host", env = "JIT_SMTP_HOST")]
    pub host: Option<String>,

    /// SMTP relay port (implicit TLS).
    #[arg(long = "smtp-port", env = "JIT_SMTP_PORT", default_value_t = 465)]
    pub port: u16,

    /// SMTP login.
    #[arg(long = "smtp-user", env = "JIT_SMTP_USER")]
    pub username: Option<String>,

    /// SMTP password.
    #[arg(long = "smtp-password", env = "JIT_SMTP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Sender address for alerts.
    #[arg(long = "alert-from", env = "JIT_ALERT_FROM")]
    pub sender: Option<String>,

    /// Recipient address for alerts.
    #[arg(long = "alert-to", env = "JIT_ALERT_TO")]
    pub recipient: Option<String>,

    /// Seconds before an SMTP connection or command is abandoned.
    #[arg(long = "smtp-timeout", env = "JIT_SMTP_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl SmtpArgs {
    /// `None` when no relay is configured.
    pub fn into_settings(self) -> Result<Option<SmtpSettings>> {
        let Some(host) = self.host else {
            return Ok(None);
        };

        Ok(Some(SmtpSettings {
            host,
            port: self.port,
            username: self.username.context("--smtp-user is required with --smtp-host")?,
            password: self
                .password
                .context("--smtp-password is required with --smtp-host")?,
            sender: self.sender.context("--alert-from is required with --smtp-host")?,
            recipient: self
                .recipient
                .context("--alert-to is required with --smtp-host")?,
            timeout: Duration::from_secs(self.timeout_secs),
        }))
    }
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// Write the daily table to this CSV file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Overrides for the default run parameters.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Override the demand RNG seed.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the horizon length in days.
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Override the replenishment lead time in days.
    #[arg(long = "lead-time")]
    pub lead_time: Option<usize>,

    /// Override the starting stock.
    #[arg(long = "initial-inventory")]
    pub initial_inventory: Option<u32>,

    /// Override the item identifier used in alerts.
    #[arg(long = "item-id")]
    pub item_id: Option<String>,
}

impl RunArgs {
    pub fn into_config(self) -> SimulationConfig {
        let mut config = SimulationConfig::default();
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(horizon) = self.horizon {
            config.horizon_days = horizon;
        }
        if let Some(lead_time) = self.lead_time {
            config.lead_time = lead_time;
        }
        if let Some(initial) = self.initial_inventory {
            config.initial_inventory = initial;
        }
        if let Some(item_id) = self.item_id {
            config.item_id = item_id;
        }
        config
    }
}
