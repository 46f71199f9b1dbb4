//! Parsing Options.
//! `--algorithm {kruskal|prim|both}` or `-a`, defaults to the config file's choice.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgAction, Command, value_parser};

use crate::config::{OutputFormat, Selection};

fn make_options_parser() -> clap::Command {
    Command::new("mst")
        .no_binary_name(true)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Minimum spanning trees with Kruskal's and Prim's algorithms")
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("Engine to run")
                .value_parser(["kruskal", "prim", "both"]),
        )
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .value_name("NODE")
                .help("Start node for Prim's algorithm"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Edge list, or a .json/.ron/.toml graph; stdin when omitted")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("edge")
                .short('e')
                .long("edge")
                .value_name("A-B:W")
                .help("Extra edge, may be repeated")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Result format")
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new("dot")
                .long("dot")
                .value_name("PATH")
                .help("Write a Graphviz rendering with the first result highlighted")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .default_value("mst.toml")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Exit with status 2 unless every result spans the graph")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug, Default)]
pub struct Options {
    pub algorithm: Option<Selection>,
    pub start: Option<String>,
    pub file: Option<PathBuf>,
    pub edges: Vec<String>,
    pub output: Option<OutputFormat>,
    pub dot: Option<PathBuf>,
    pub config: PathBuf,
    pub strict: bool,
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let algorithm = matches
            .get_one::<String>("algorithm")
            .map(|s| s.parse::<Selection>())
            .transpose()?;
        let output = matches
            .get_one::<String>("output")
            .map(|s| s.parse::<OutputFormat>())
            .transpose()?;

        Ok(Options {
            algorithm,
            start: matches.get_one::<String>("start").cloned(),
            file: matches.get_one::<PathBuf>("file").cloned(),
            edges: matches
                .get_many::<String>("edge")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            output,
            dot: matches.get_one::<PathBuf>("dot").cloned(),
            config: matches
                .get_one::<PathBuf>("config")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("mst.toml")),
            strict: matches.get_flag("strict"),
        })
    }
}
