/// Terminal viewer for revolved measurement shapes
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use lathe3d_core::{
    compute_profile, compute_shape, ProfilePoint, ProfileStats, RevolvedMesh, ShapeParams,
    ViewState,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::PainterRenderer;

/// Per-frame y-rotation advance while auto-rotate is on (radians).
const AUTO_ROTATE_STEP: f64 = 0.015;
/// Rotation step per keypress (radians).
const KEY_ROTATE_STEP: f64 = 0.1;
/// Multiplicative zoom step per keypress.
const KEY_ZOOM_STEP: f64 = 1.1;

/// Which view the app is currently showing.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewMode {
    Mesh3d,
    Profile2d,
}

/// Main application struct for terminal shape viewing. Owns the computed
/// geometry and the explicit view state; there are no globals.
pub struct TerminalApp {
    profile: Vec<ProfilePoint>,
    stats: Option<ProfileStats>,
    mesh: RevolvedMesh,
    view: ViewState,
    mode: ViewMode,
    auto_rotate: bool,
    renderer: PainterRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f64,
}

impl TerminalApp {
    /// Build the full pipeline for a measurement sequence and size the
    /// renderer to the current terminal.
    pub fn new(magnitudes: &[f64]) -> io::Result<Self> {
        let params = ShapeParams::default();
        let profile = compute_profile(magnitudes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        let mesh = compute_shape(magnitudes, &params)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        let stats = ProfileStats::from_profile(&profile);

        let (width, height) = terminal::size()?;

        Ok(Self {
            profile,
            stats,
            mesh,
            view: ViewState::new(),
            mode: ViewMode::Mesh3d,
            auto_rotate: true,
            renderer: PainterRenderer::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f64 / (now - self.last_frame).as_secs_f64();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.view.rotation.rotate(KEY_ROTATE_STEP, 0.0, 0.0);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.view.rotation.rotate(-KEY_ROTATE_STEP, 0.0, 0.0);
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.view.rotation.rotate(0.0, -KEY_ROTATE_STEP, 0.0);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.view.rotation.rotate(0.0, KEY_ROTATE_STEP, 0.0);
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.view.zoom_by(KEY_ZOOM_STEP);
                }
                KeyCode::Char('-') => {
                    self.view.zoom_by(1.0 / KEY_ZOOM_STEP);
                }
                KeyCode::Char(' ') => {
                    self.auto_rotate = !self.auto_rotate;
                }
                KeyCode::Tab => {
                    self.mode = match self.mode {
                        ViewMode::Mesh3d => ViewMode::Profile2d,
                        ViewMode::Profile2d => ViewMode::Mesh3d,
                    };
                }
                KeyCode::Char('0') => {
                    self.view.reset();
                }
                _ => {}
            },
            Event::Resize(width, height) => {
                self.renderer.resize(width as usize, height as usize);
            }
            _ => {}
        }
        Ok(())
    }

    fn update(&mut self) {
        if self.auto_rotate && self.mode == ViewMode::Mesh3d {
            self.view.rotation.rotate(0.0, AUTO_ROTATE_STEP, 0.0);
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();

        match self.mode {
            ViewMode::Mesh3d => self.renderer.render_mesh(&self.mesh, &self.view),
            ViewMode::Profile2d => self.renderer.render_profile(&self.profile),
        }

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        if self.mesh.is_empty() {
            let (width, height) = terminal::size()?;
            queue!(
                stdout,
                cursor::MoveTo(width.saturating_sub(7) / 2, height / 2),
                SetForegroundColor(Color::DarkGrey),
                Print("no data"),
                ResetColor
            )?;
        }

        // Status overlay
        let status = match self.stats {
            Some(stats) => format!(
                "Lathe3D | {} | FPS: {:.1} | zoom {:.2} | {} pts, base r {:.2} | \
                 Arrows=Rotate +/-=Zoom Tab=View Space=Spin 0=Reset Q=Quit",
                self.mode_label(),
                self.fps,
                self.view.zoom,
                stats.point_count,
                stats.base_radius,
            ),
            None => format!(
                "Lathe3D | {} | FPS: {:.1} | no measurements loaded | Q=Quit",
                self.mode_label(),
                self.fps,
            ),
        };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(status),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }

    fn mode_label(&self) -> &'static str {
        match self.mode {
            ViewMode::Mesh3d => "3D mesh",
            ViewMode::Profile2d => "2D profile",
        }
    }
}
