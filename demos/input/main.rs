//! I use it with `cargo run --example input`

use graph_queries::input::from_file;

fn main() -> graph_queries::Result<()> {
    let graph = from_file("demos/assets/triangles.graph")?;
    let ug = graph.as_ungraph();

    println!("Name: {}", graph.name().unwrap_or("<unnamed>"));
    println!("Number of vertices: {}", graph.vertex_count());
    println!("Number of edges: {}", graph.edge_count());

    for v in ug.node_indices() {
        let adjacent: Vec<_> = graph
            .neighbors(v)
            .map(|(u, weight)| format!("{} [{weight}]", ug[u]))
            .collect();
        println!("{}: {}", ug[v], adjacent.join(", "));
    }
    Ok(())
}
