// src/runner.rs
use crate::{
    appearance::{appearances_json, build_appearances},
    config::RunOptions,
    core::net::Transport,
    error::{Error, Result},
    icon::IconName,
    mutate::{MutationSummary, push_queries},
    progress::Progress,
    query::{GraphQuery, derive_queries},
    specs::icons::extract_icon_names,
};

/// Everything a run will send, computed before anything is sent.
#[derive(Clone, Debug)]
pub struct Plan {
    pub names: Vec<IconName>,
    /// PUT body for the appearance endpoint.
    pub appearances: String,
    pub queries: Vec<GraphQuery>,
}

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub icons: usize,
    pub mutations: MutationSummary,
}

/// Build the payloads from an already fetched page.
pub fn plan_from_page(opts: &RunOptions, page: &[u8]) -> Result<Plan> {
    let names = extract_icon_names(page)?;
    let records = build_appearances(&names, opts.include_label_binding);
    let appearances = appearances_json(&records)?;
    let queries = derive_queries(&names, opts.mode);
    Ok(Plan { names, appearances, queries })
}

/// GET the source page and build the payloads. Sends nothing to the store.
pub fn fetch_plan(
    opts: &RunOptions,
    transport: &dyn Transport,
    progress: &mut dyn Progress,
) -> Result<Plan> {
    let page = transport
        .get(&opts.source_url)
        .map_err(|source| Error::Fetch { url: opts.source_url.clone(), source })?;
    progress.log(&format!("GET {}", opts.source_url));
    logf!("fetched {} bytes from {}", page.len(), opts.source_url);

    let plan = plan_from_page(opts, &page)?;
    progress.log(&format!("Extracted icon names: {}", plan.names.len()));
    Ok(plan)
}

/// Send a plan: the appearance document once, then every query in order.
pub fn apply_plan(
    opts: &RunOptions,
    plan: &Plan,
    transport: &dyn Transport,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let url = opts.appearances_url();
    transport
        .put_json(&url, &plan.appearances)
        .map_err(|source| Error::PutAppearances { url: url.clone(), source })?;
    progress.log("PUT node appearances");
    logf!("stored {} node appearances", plan.names.len());

    let mutations = push_queries(
        transport,
        &opts.query_url(),
        &plan.queries,
        opts.on_timeout,
        progress,
    )?;

    Ok(RunSummary { icons: plan.names.len(), mutations })
}

/// Top-level runner: fetch → extract → PUT appearances → POST queries.
pub fn run(
    opts: &RunOptions,
    transport: &dyn Transport,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    logd!("run options: {opts:?}");
    let plan = fetch_plan(opts, transport, progress)?;
    apply_plan(opts, &plan, transport, progress)
}
