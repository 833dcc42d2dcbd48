//! I use it with `cargo run --example output | neato -Tsvg > graph.svg`

use graph_queries::input::from_file;
use graph_queries::output::to_dot;

fn main() -> graph_queries::Result<()> {
    let graph = from_file("demos/assets/triangles.graph")?;
    print!("{}", to_dot(&graph));
    Ok(())
}
