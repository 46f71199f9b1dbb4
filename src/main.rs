use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::debug;

use spanning::config::{MstConfig, OutputFormat, Selection};
use spanning::graph::{Graph, io};
use spanning::input;
use spanning::mst::{self, MstResult};
use spanning::options::Options;
use spanning::report::RunReport;

fn main() -> ExitCode {
    if std::env::var("MST_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MST_LOG")
            .write_style("MST_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    match run() {
        Ok(code) => code,
        Err(err) => {
            if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
                clap_err.exit();
            }
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let mut flags = shellwords::split(&std::env::var("MST_FLAGS").unwrap_or_default())
        .context("MST_FLAGS has unbalanced quotes")?;
    flags.extend(std::env::args().skip(1));

    let options = Options::parse_from_args(&flags)?;
    debug!("mst options: {:?}", options);

    let mut config = MstConfig::load_from_file(&options.config)?;
    config.apply(&options);
    debug!("mst config: {:?}", config);

    let graph = load_graph(&options)?;
    graph.log_summary();

    let results = run_selected(&config, &graph)?;
    let report = RunReport::new(&graph, results);

    match config.output {
        OutputFormat::Text => print!("{}", report.render_text(&graph)),
        OutputFormat::Json => println!("{}", io::to_json_string(&report)?),
    }

    if let Some(path) = &config.dot {
        let highlight = report.runs.first().map(|run| &run.result);
        graph
            .write_dot(path, highlight)
            .with_context(|| format!("Failed to write dot file: {:?}", path))?;
    }

    if config.require_spanning && !report.all_spanning() {
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}

fn load_graph(options: &Options) -> Result<Graph> {
    let mut graph = match &options.file {
        Some(path) if io::Format::from_path(path).is_some() => io::read_graph(path)
            .with_context(|| format!("Failed to load graph: {:?}", path))?,
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read edge list: {:?}", path))?;
            input::parse_edge_list(&text).with_context(|| format!("{}", path.display()))?
        }
        None if options.edges.is_empty() => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read edge list from stdin")?;
            input::parse_edge_list(&text).context("<stdin>")?
        }
        None => Graph::new(),
    };

    for text in &options.edges {
        let edge = input::parse_line(text).with_context(|| format!("--edge {text:?}"))?;
        graph.push_edge(edge)?;
    }
    Ok(graph)
}

fn run_selected(config: &MstConfig, graph: &Graph) -> Result<Vec<MstResult>> {
    let start = config.start.as_deref();
    let results = match (config.algorithm, start) {
        (Selection::Both, Some(start)) => {
            let comparison = mst::compare_from(graph, start)?;
            vec![comparison.kruskal, comparison.prim]
        }
        (Selection::Both, None) => {
            let comparison = mst::compare(graph)?;
            vec![comparison.kruskal, comparison.prim]
        }
        (Selection::Kruskal, _) => vec![mst::run_kruskal(graph)],
        (Selection::Prim, Some(start)) => vec![mst::run_prim_from(graph, start)?],
        (Selection::Prim, None) => vec![mst::run_prim(graph)?],
    };
    Ok(results)
}
