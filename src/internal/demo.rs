#![allow(clippy::missing_docs_in_private_items)]

use chained_table::HashTable;

const COLORS: [(&str, &str); 12] = [
    ("apple", "red"),
    ("banana", "yellow"),
    ("carrot", "orange"),
    ("dog", "brown"),
    ("elephant", "gray"),
    ("frog", "green"),
    ("grape", "purple"),
    ("hat", "black"),
    ("ice cream", "white"),
    ("jacket", "blue"),
    ("kite", "pink"),
    ("lion", "golden"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = HashTable::default();

    for (key, value) in COLORS {
        table.set(key, value)?;
    }
    println!("Length before overwriting: {}", table.len());

    table.set("apple", "green")?;
    table.set("banana", "brown")?;
    println!("Length after overwriting: {}", table.len());

    table.set("moon", "silver")?;
    println!("Capacity after resizing: {}", table.capacity());

    println!("Get 'moon': {:?}", table.get("moon")?);
    println!("Has 'elephant': {}", table.has("elephant")?);
    println!("Remove 'dog': {}", table.remove("dog")?);
    println!("Length after removal: {}", table.len());

    println!("All Keys: {:?}", table.keys());
    println!("All Values: {:?}", table.values());
    println!("All Entries: {:?}", table.entries());

    Ok(())
}
