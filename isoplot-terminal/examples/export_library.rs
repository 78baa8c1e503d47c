/// Example: write the built-in shape library to a JSON file
///
/// Usage: cargo run --example export_library -- shapes.json

use std::env;
use std::io;
use isoplot_core::ShapeLibrary;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or("shapes.json");

    let library = ShapeLibrary::builtin();
    library
        .save(path)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    println!("Wrote {} shapes to {}", library.len(), path);
    Ok(())
}
