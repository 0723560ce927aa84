//! Crimson - Binary Entry Point
//!
//! Runs the reference insertion scenario and prints the resulting tree
//! depth and in-order structure.

use crimson::{Color, RbTree};

fn main() {
    println!("===========================================");
    println!("  Crimson - slab-backed red-black tree");
    println!("===========================================");
    println!();

    let mut tree = RbTree::with_capacity(16);

    let values = [11u32, 2, 14, 1, 7, 16, 5, 8, 4, 15];
    println!("Inserting: {:?}", values);
    for v in values {
        tree.insert(v);
    }
    println!();

    println!("depth: {}", tree.max_depth());
    println!();

    println!("In-order values:");
    tree.traverse(|v| print!("{} ", v));
    println!();
    println!();

    println!("In-order structure (value, color):");
    tree.traverse_debug(|_, node| {
        let tag = match node.color {
            Color::Red => "R",
            Color::Black => "B",
        };
        print!("({}, {}) ", node.value, tag);
    });
    println!();
}
