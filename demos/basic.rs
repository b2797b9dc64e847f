//! Walks through inserting and deleting keys, logging every structural step.
//!
//! Run with `RUST_LOG=debug` to see splits and merges, or `RUST_LOG=trace`
//! for every event.
use compressed_trie::{IndexedTrie, LinearTrie};

fn print_shape(trie: &IndexedTrie) {
    for (depth, labels) in trie.depth_labels().iter().enumerate() {
        println!("  {} {:?}", depth, labels);
    }
}

fn main() {
    env_logger::init();

    let mut trie = IndexedTrie::new();
    for key in &["artifact", "artifice", "art", "artificial", "artful"] {
        trie.insert(key);
    }
    println!("after inserts:");
    print_shape(&trie);

    trie.delete("art").unwrap();
    println!("after deleting \"art\":");
    print_shape(&trie);

    assert!(!trie.search("art"));
    assert!(trie.search("artful"));

    if let Err(err) = trie.delete("art") {
        println!("{}", err);
    }

    // Same keys, linear edge lookup, identical shape
    let linear: LinearTrie = trie.iter().collect();
    assert!(linear == trie);

    let mut keys: Vec<String> = trie.keys_with_prefix("artif").collect();
    keys.sort();
    println!("keys under \"artif\": {:?}", keys);
}
