//! Demonstration program: exercises the table with literal keys.

use chained_hashmap::{ChainedHashMap, CreateError};

fn main() -> Result<(), CreateError> {
    let mut table = ChainedHashMap::with_capacity(10)?;

    table.insert("name", "John");
    table.insert("age", "30");
    table.insert("city", "New York");

    for key in ["name", "age", "city"] {
        match table.find(key) {
            Some(value) => println!("{key}: {value}"),
            None => println!("{key}: not found"),
        }
    }

    table.delete("age");

    match table.find("age") {
        Some(value) => println!("age after deletion: {value}"),
        None => println!("age after deletion: not found"),
    }

    // Dropping the table at scope end releases every entry.
    Ok(())
}
