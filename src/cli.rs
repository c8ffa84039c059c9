// src/cli.rs
use std::io::{IsTerminal, Write};
use std::time::Duration;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::{RunOptions, TimeoutPolicy, consts},
    core::net::HttpTransport,
    progress::{NullProgress, Progress},
    query::QueryMode,
    runner,
};

const OK: &str = "✔";
const FAIL: &str = "✖";
const WARN: &str = "⚠";

/// Scrape the icon cheatsheet and seed the graph store with one node per icon.
#[derive(Debug, Parser)]
#[command(name = "icon_seed", version, about)]
pub struct Args {
    /// Cheatsheet page to scrape
    #[arg(long, default_value = consts::SOURCE_URL)]
    pub source_url: String,

    /// Base URL of the graph store HTTP API
    #[arg(long, default_value = consts::API_BASE)]
    pub api_base: String,

    /// Shape of the node-creation queries
    #[arg(long, value_enum, default_value_t = QueryMode::default())]
    pub mode: QueryMode,

    /// Leave out the `name` caption binding from node appearances
    #[arg(long)]
    pub no_label_binding: bool,

    /// What to do when a query POST times out
    #[arg(long, value_enum, default_value_t = TimeoutPolicy::default())]
    pub on_timeout: TimeoutPolicy,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = consts::REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Fetch and print the payloads without sending anything to the store
    #[arg(long)]
    pub dry_run: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn to_options(&self) -> RunOptions {
        let mut opts = RunOptions::default();
        opts.source_url = self.source_url.clone();
        opts.set_api_base(&self.api_base);
        opts.mode = self.mode;
        opts.include_label_binding = !self.no_label_binding;
        opts.on_timeout = self.on_timeout;
        opts.timeout = Duration::from_secs(self.timeout_secs.max(1));
        opts.dry_run = self.dry_run;
        opts
    }
}

/// Status lines on stdout; a live counter on stderr while posting if it is a
/// terminal.
pub struct TermProgress {
    done: usize,
    failed: usize,
    total: usize,
    live: bool,
}

impl TermProgress {
    pub fn new() -> Self {
        Self {
            done: 0,
            failed: 0,
            total: 0,
            live: std::io::stderr().is_terminal(),
        }
    }

    fn clear_live(&self) {
        if self.live && self.total > 0 {
            eprint!("\r\x1b[2K");
        }
    }
}

impl Default for TermProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for TermProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.clear_live();
        println!("{OK} {msg}");
    }
    fn item_done(&mut self, _icon: &str) {
        self.done += 1;
        if self.live {
            eprint!("\rCreating icon nodes {}/{}", self.done, self.total);
            let _ = std::io::stderr().flush();
        }
    }
    fn item_failed(&mut self, icon: &str, reason: &str) {
        self.failed += 1;
        self.clear_live();
        println!("{WARN} {icon}: {reason}");
    }
    fn finish(&mut self) {
        self.clear_live();
        let mark = if self.done == self.total { OK } else { FAIL };
        if self.failed == 0 {
            println!("{mark} POST icon nodes ({}/{})", self.done, self.total);
        } else {
            println!(
                "{mark} POST icon nodes ({}/{}, {} failed)",
                self.done, self.total, self.failed
            );
        }
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    crate::log::init(args.verbose);

    let opts = args.to_options();
    let transport =
        HttpTransport::new(opts.timeout).wrap_err("could not build HTTP client")?;
    let mut progress = TermProgress::new();

    if opts.dry_run {
        // stdout carries the payloads only
        let plan = runner::fetch_plan(&opts, &transport, &mut NullProgress)?;
        println!("{}", plan.appearances);
        for q in &plan.queries {
            println!("{q}");
        }
        return Ok(());
    }

    let summary = runner::run(&opts, &transport, &mut progress)
        .wrap_err_with(|| format!("icon seeding against {} failed", opts.api_base()))?;

    if !summary.mutations.skipped.is_empty() {
        println!(
            "{WARN} {} icons timed out and were skipped: {}",
            summary.mutations.skipped.len(),
            summary.mutations.skipped.join(", ")
        );
    }
    Ok(())
}
