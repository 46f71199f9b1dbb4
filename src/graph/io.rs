//! I/O 支持：图与结果的 JSON、RON、TOML 序列化接口。
use std::fs;
use std::path::Path;

use ron::ser::PrettyConfig;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::graph::Graph;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ron error: {0}")]
    Ron(#[from] ron::Error),
    #[error("ron error: {0}")]
    RonParse(#[from] ron::error::SpannedError),
    #[error("toml error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("toml error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported graph file extension {0:?}, expected json, ron or toml")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Ron,
    Toml,
}

impl Format {
    /// Picks a format from the file extension, `None` for anything else.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "ron" => Some(Format::Ron),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }

    pub fn render<T: Serialize>(self, value: &T) -> Result<String, IoError> {
        match self {
            Format::Json => to_json_string(value),
            Format::Ron => to_ron_string(value),
            Format::Toml => to_toml_string(value),
        }
    }

    pub fn parse<T: DeserializeOwned>(self, s: &str) -> Result<T, IoError> {
        match self {
            Format::Json => from_json_str(s),
            Format::Ron => from_ron_str(s),
            Format::Toml => from_toml_str(s),
        }
    }
}

pub fn to_json_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_str(s)?)
}

pub fn to_ron_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    let mut pretty = PrettyConfig::default();
    pretty.new_line = "\n".into();
    Ok(ron::ser::to_string_pretty(value, pretty)?)
}

pub fn from_ron_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(ron::from_str(s)?)
}

pub fn to_toml_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    Ok(toml::to_string_pretty(value)?)
}

pub fn from_toml_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(toml::from_str(s)?)
}

fn format_of(path: &Path) -> Result<Format, IoError> {
    Format::from_path(path).ok_or_else(|| {
        IoError::UnknownFormat(
            path.extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default(),
        )
    })
}

/// Writes any serialisable value, format chosen by extension.
pub fn write_value<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
    let path = path.as_ref();
    let content = format_of(path)?.render(value)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

pub fn write_graph<P: AsRef<Path>>(path: P, graph: &Graph) -> Result<(), IoError> {
    write_value(path, graph)
}

/// Reads a graph saved by [`write_graph`]. Edges with empty labels are
/// rejected while loading.
pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<Graph, IoError> {
    let path = path.as_ref();
    let format = format_of(path)?;
    let content = fs::read_to_string(path)?;
    let graph: Graph = format.parse(&content)?;
    log::debug!(
        "loaded {} edges from {}",
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use crate::mst::{MstResult, run_kruskal};

    fn sample() -> Graph {
        Graph::from_edges([
            Edge::new("A", "B", 1),
            Edge::new("B", "C", -2),
            Edge::new("A", "C", 3),
        ])
        .unwrap()
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path("g.json"), Some(Format::Json));
        assert_eq!(Format::from_path("dir/g.RON"), Some(Format::Ron));
        assert_eq!(Format::from_path("g.toml"), Some(Format::Toml));
        assert_eq!(Format::from_path("g.txt"), None);
        assert_eq!(Format::from_path("graph"), None);
    }

    #[test]
    fn every_format_keeps_edges_and_node_order() {
        let graph = sample();
        for format in [Format::Json, Format::Ron, Format::Toml] {
            let text = format.render(&graph).unwrap();
            let back: Graph = format.parse(&text).unwrap();
            assert_eq!(back, graph, "{format:?}");
        }
    }

    #[test]
    fn toml_edge_tables() {
        let graph: Graph = from_toml_str(
            r#"
            [[edges]]
            a = "X"
            b = "Y"
            weight = 7
            "#,
        )
        .unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["X", "Y"]);
    }

    #[test]
    fn result_serialises_with_algorithm_tag() {
        let result = run_kruskal(&sample());
        let json = to_json_string(&result).unwrap();

        assert!(json.contains("\"algorithm\": \"kruskal\""));
        assert!(json.contains("\"total_weight\": -1"));
        let back: MstResult = from_json_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn files_round_trip_through_disk() {
        let dir = std::env::temp_dir().join(format!("spanning-io-{}", std::process::id()));
        let path = dir.join("graph.json");

        write_graph(&path, &sample()).unwrap();
        assert_eq!(read_graph(&path).unwrap(), sample());

        let err = read_graph(dir.join("graph.csv")).unwrap_err();
        assert!(matches!(err, IoError::UnknownFormat(ext) if ext == "csv"));
        let _ = fs::remove_dir_all(dir);
    }
}
