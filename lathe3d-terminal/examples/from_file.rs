/// Example: Load a measurements file and view its revolution surface
///
/// Usage: cargo run --example from_file -- path/to/measurements.txt
///
/// The file holds positive circumference values separated by whitespace
/// and/or commas; `#` starts a line comment.
use std::env;
use std::fs;
use std::io;
use lathe3d_core::{compute_profile, parse_measurements, ProfileStats};
use lathe3d_terminal::TerminalApp;

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <measurements-file>", args[0]);
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no measurements file provided",
        ));
    }

    let path = &args[1];
    println!("Loading measurements: {}", path);

    let text = fs::read_to_string(path)?;
    let magnitudes = parse_measurements(&text)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let profile = compute_profile(&magnitudes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    if let Some(stats) = ProfileStats::from_profile(&profile) {
        println!(
            "Loaded {} measurements (base radius {:.3}, profile spans {:.3} x {:.3})",
            stats.point_count,
            stats.base_radius,
            stats.max_x - stats.min_x,
            stats.max_y - stats.min_y,
        );
    }

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(&magnitudes)?;
    app.run()?;

    println!("Thank you for using Lathe3D!");
    Ok(())
}
