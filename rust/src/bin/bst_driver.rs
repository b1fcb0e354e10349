use bstmap::{BstMap, NodeRef};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Builds the seven-node sample tree, prints every node in key order, then
// looks up key 8 step by step.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut tree = BstMap::new();
    for key in [6, 2, 9, 1, 4, 8, 12] {
        tree.insert(key, key);
    }
    info!(len = tree.len(), depth = tree.depth(), "built sample tree");

    println!("=== Nodes in key order ===");
    print_in_order(&tree);

    println!("\n=== Search ===");
    let (path, found) = tree.search_path(8);
    for (step, id) in path.iter().enumerate() {
        if let Some(node) = tree.node(*id) {
            println!("step {}: node {} key {}", step, id, node.key());
        }
    }
    match found {
        Some(value) => println!("key 8 -> value {}", value),
        None => println!("key 8 not found"),
    }
}

fn print_in_order(tree: &BstMap) {
    let mut stack: Vec<NodeRef<'_>> = Vec::new();
    let mut current = tree.root_node();

    while current.is_some() || !stack.is_empty() {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        let Some(node) = stack.pop() else {
            break;
        };
        println!(
            "node {:<6} key {:>3}  value {:>3}  left {:<6} right {:<6}",
            node.id().to_string(),
            node.key(),
            node.value(),
            describe(node.left()),
            describe(node.right()),
        );
        current = node.right();
    }
}

fn describe(child: Option<NodeRef<'_>>) -> String {
    child.map_or_else(|| "-".to_string(), |node| node.id().to_string())
}
