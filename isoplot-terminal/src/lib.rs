/// Terminal front end for the isometric shape plotter
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::Duration;

use isoplot_core::{projection, transform, ShapeLibrary, Vertex};

pub mod plot;
pub mod state;

pub use plot::PlotCanvas;
pub use state::{next_state, ViewState, STEP_DEGREES};

/// World half-extent of the plot area. The built-in shapes stay within a
/// radius of sqrt(3), so 2.0 leaves a margin at any rotation.
const PLOT_BOUND: f64 = 2.0;

/// Interactive plotter: one shape from the library at a time, rotated by
/// key presses and projected onto a character canvas.
pub struct TerminalApp {
    library: ShapeLibrary,
    state: ViewState,
    canvas: PlotCanvas,
    running: bool,
}

impl TerminalApp {
    pub fn new(library: ShapeLibrary) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            library,
            state: ViewState::new(),
            // Top row is reserved for the status line
            canvas: PlotCanvas::new(
                width as usize,
                (height as usize).saturating_sub(1),
                PLOT_BOUND,
            ),
            running: true,
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
        self.render()?;

        while self.running {
            if event::poll(Duration::from_millis(50))? {
                self.handle_input()?;
                self.render()?;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match next_state(self.state, code, self.library.len()) {
                Some(next) => self.state = next,
                None => self.running = false,
            }
        }
        Ok(())
    }

    /// Shape vertices after the accumulated rotation and the optional
    /// isometric preset.
    fn viewed_vertices(&self) -> Vec<Vertex> {
        let Some(shape) = self.library.shape_at(self.state.shape_index) else {
            return Vec::new();
        };
        let rotated = self.state.rotation.apply(&shape.vertices);
        if self.state.isometric {
            rotated.into_iter().map(transform::isometric).collect()
        } else {
            rotated
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let viewed = self.viewed_vertices();
        let (xs, ys) = projection::project_to_plane(&viewed);

        self.canvas.clear();
        self.canvas.draw_axes();
        self.canvas.plot_polyline(&xs, &ys);

        // Re-mark vertices far to near so the closest marker wins overlaps
        let ordered = projection::sort_by_depth(&viewed);
        let (mx, my) = projection::project_to_plane(&ordered);
        self.canvas.mark_points(&mx, &my);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 1))?;
        self.canvas.draw(&mut stdout)?;

        // Status line: shape name, per-axis degrees, projection mode
        let name = self
            .library
            .shape_at(self.state.shape_index)
            .map_or("(no shapes)", |shape| shape.name.as_str());
        let rotation = self.state.rotation;
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "{} | X: {:.2} Y: {:.2} Z: {:.2} | iso: {} | WASD/Arrows=X/Y E/R=Z I=Iso Tab=Shape 0=Reset Q=Quit",
                name,
                rotation.x,
                rotation.y,
                rotation.z,
                if self.state.isometric { "on" } else { "off" },
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
