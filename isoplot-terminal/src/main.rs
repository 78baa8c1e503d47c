/// Isoplot Terminal - interactive isometric shape plotter
///
/// Loads a shape library from a JSON file (or falls back to the built-in
/// shapes) and plots a rotatable 2D projection in the terminal.
/// Controls:
///   - WASD / Arrow Keys: Rotate about X and Y
///   - E/R: Rotate about Z
///   - I: Toggle the isometric preset
///   - Tab/N, BackTab/P: Cycle shapes
///   - 0: Reset rotation
///   - Q/ESC: Quit

use std::env;
use std::io;
use isoplot_core::ShapeLibrary;
use isoplot_terminal::TerminalApp;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let library = if args.len() < 2 {
        println!("No shape file provided, using the built-in library...");
        ShapeLibrary::builtin()
    } else {
        println!("Loading shape library: {}", args[1]);
        ShapeLibrary::load(&args[1])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?
    };

    println!("Loaded {} shapes", library.len());
    println!("Starting plotter (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    // Run the terminal app
    let mut app = TerminalApp::new(library)?;
    app.run()?;

    Ok(())
}
