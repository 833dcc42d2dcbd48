use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::DEFAULT_WEIGHT;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::num::IntErrorKind;
use std::path::Path;

/// Reads a graph from a file.
///
/// One declaration per line:
/// - `// ...` is a comment, empty lines are skipped,
/// - `u -- v` or `u -- v w` is an edge with integer weight `w` (1 if omitted),
/// - any other line is the graph name if nothing has been declared yet,
/// - otherwise a single word declares an isolated vertex.
///
/// <div class="warning">
///
/// > Malformed lines are skipped with a warning.
/// > Negative weights, weights that do not fit a 64-bit integer and self loops are
/// > errors and stop the parse.
/// > Repeated edges merge into one edge with the smaller weight.
///
/// </div>
///
/// Example input:
/// ```text
/// // two triangles joined by a bridge
/// triangles
/// a -- b 2
/// b -- c
/// c -- a
/// x -- y
/// y -- z
/// z -- x 4
/// c -- x 10
/// lonely
/// ```
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<Graph> {
    from_reader(BufReader::new(Cursor::new(input)))
}

/// This is equivalent to [`from_file`], but reads from any buffered reader.
pub fn from_reader<R: BufRead>(reader: R) -> Result<Graph> {
    let mut graph = Graph::new();
    let mut declared = false;

    for (i, line) in reader.lines().enumerate() {
        let line_number = i + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        match parse_line(line) {
            Line::Edge(a, b, weight) => {
                graph
                    .add_edge(a, b, weight)
                    .map_err(|e| e.at_line(line_number))?;
                declared = true;
            }
            Line::OutOfRange(weight) => {
                return Err(Error::InvalidWeight { weight }.at_line(line_number));
            }
            Line::Word(text) if !declared && graph.name().is_none() => {
                graph.set_name(text);
                declared = true;
            }
            Line::Word(text) if !text.contains(char::is_whitespace) => {
                graph
                    .find_or_create_vertex(text)
                    .map_err(|e| e.at_line(line_number))?;
                declared = true;
            }
            Line::Word(_) | Line::Malformed => {
                tracing::warn!(line = line_number, content = line, "skipping malformed line");
            }
        }
    }

    tracing::debug!(
        name = graph.name(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph parsed"
    );
    Ok(graph)
}

/// Classification of a single non-empty, non-comment line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Edge(&'a str, &'a str, i64),
    /// Edge whose weight is an integer too large for `i64`, saturated towards its sign.
    OutOfRange(i64),
    Word(&'a str),
    Malformed,
}

fn parse_line(line: &str) -> Line<'_> {
    let parts: Vec<_> = line.split_whitespace().collect();
    match parts[..] {
        [a, "--", b] => Line::Edge(a, b, i64::from(DEFAULT_WEIGHT)),
        [a, "--", b, w] => match w.parse::<i64>() {
            Ok(weight) => Line::Edge(a, b, weight),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Line::OutOfRange(i64::MAX),
                IntErrorKind::NegOverflow => Line::OutOfRange(i64::MIN),
                _ => Line::Malformed,
            },
        },
        [_, "--", ..] => Line::Malformed,
        _ => Line::Word(line),
    }
}
