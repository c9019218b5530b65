/// Lathe3D Terminal Demo - Rotating Vase
///
/// Builds a revolution surface from a sample circumference sequence and
/// spins it in the terminal.
/// Controls:
///   - WASD / Arrow Keys: Rotate the shape
///   - +/-: Zoom
///   - Tab: Toggle 2D profile / 3D mesh view
///   - Space: Toggle auto-rotate
///   - 0: Reset the view
///   - Q/ESC: Quit
use std::io;
use lathe3d_terminal::TerminalApp;

/// Circumference measurements of a small vase, base to lip, in cm.
const SAMPLE_MEASUREMENTS: &[f64] = &[
    31.4, 35.2, 39.6, 42.1, 40.8, 36.0, 28.9, 22.6, 18.8, 25.1,
];

fn main() -> io::Result<()> {
    env_logger::init();

    println!("Lathe3D Terminal Viewer - Loading...");
    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(SAMPLE_MEASUREMENTS)?;
    app.run()?;

    println!("Thank you for using Lathe3D!");
    Ok(())
}
