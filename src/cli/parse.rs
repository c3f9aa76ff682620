use pathgraph_core::edge::EdgeSpec;
use pathgraph_core::format::OutputFormat;
use pathgraph_core::graph::RelaxationMode;

/// Parse an edge triple from string
pub fn parse_edge_spec(s: &str) -> std::result::Result<EdgeSpec, String> {
    s.parse::<EdgeSpec>().map_err(|e| e.to_string())
}

/// Parse relaxation mode from string
pub fn parse_relaxation_mode(s: &str) -> std::result::Result<RelaxationMode, String> {
    s.parse::<RelaxationMode>().map_err(|e| e.to_string())
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
