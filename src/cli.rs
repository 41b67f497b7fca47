// src/cli.rs
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};

use crate::config::consts::DEFAULT_CONFIG_FILE;
use crate::config::options::AppOptions;
use crate::progress::Progress;
use crate::runner;
use crate::scrape::ScrapeResult;

#[derive(Parser, Debug)]
#[command(name = "lead_agent", version, about = "Scrape a company site, draft an outreach note, train the lead model")]
pub struct Cli {
    /// TOML config file; missing file means built-in defaults
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print title, value proposition and section text of one page
    Scrape {
        #[arg(long)]
        url: Option<String>,
    },
    /// Draft an outreach note using the page's value proposition
    Note {
        #[arg(long)]
        contact: String,
        #[arg(long)]
        job: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        url: Option<String>,
    },
    /// Train on the configured table and save the model
    Train {
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Classify one lead with a saved model
    Predict {
        #[arg(long)]
        model: Option<PathBuf>,
        #[arg(long)]
        size: f64,
        #[arg(long)]
        industry: u32,
        #[arg(long)]
        revenue: f64,
    },
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    let mut opts = AppOptions::load(&cli.config)?;
    logf!("CLI: {:?}", cli.command);

    match cli.command {
        Command::Scrape { url } => {
            let url = url.unwrap_or_else(|| opts.scrape.url.clone());
            match runner::scrape(&opts, &url) {
                ScrapeResult::Page(page) => println!("{page}"),
                ScrapeResult::Failed { error } => return Err(eyre!(error)),
            }
        }
        Command::Note { contact, job, company, url } => {
            if let Some(company) = company {
                opts.note.company_name = company;
            }
            let url = url.unwrap_or_else(|| opts.scrape.url.clone());
            println!("{}", runner::generate_note(&opts, &contact, &job, &url));
        }
        Command::Train { out } => {
            if let Some(out) = out {
                opts.train.model_path = out;
            }
            let mut prog = CliProgress::default();
            let report = runner::train_and_save(&opts, Some(&mut prog))?;
            println!(
                "Model trained and saved to {} ({} trees, {} rows)\nAccuracy: {:.2}",
                report.model_path.display(),
                report.trees,
                report.rows,
                report.accuracy
            );
        }
        Command::Predict { model, size, industry, revenue } => {
            let path = model.unwrap_or_else(|| opts.train.model_path.clone());
            let label = runner::predict(&path, size, industry, revenue)?;
            println!("{label}");
        }
    }
    Ok(())
}

/// Single overwritten stderr line.
#[derive(Default)]
struct CliProgress {
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn step_done(&mut self, step: usize) {
        eprint!("\rFitting trees {step}/{}", self.total);
        let _ = std::io::stderr().flush();
    }
    fn finish(&mut self) {
        eprintln!();
    }
}
