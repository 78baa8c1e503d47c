/// Character canvas for 2D plots
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

const VERTEX_CHAR: char = 'o';
const EDGE_CHAR: char = '*';
const AXIS_H_CHAR: char = '-';
const AXIS_V_CHAR: char = '|';
const ORIGIN_CHAR: char = '+';

/// Plots projected vertices onto a character grid covering the world
/// square [-bound, bound] on both axes, y up. Points outside the canvas
/// are clipped.
pub struct PlotCanvas {
    width: usize,
    height: usize,
    bound: f64,
    char_buffer: Vec<char>,
}

impl PlotCanvas {
    pub fn new(width: usize, height: usize, bound: f64) -> Self {
        Self {
            width,
            height,
            bound,
            char_buffer: vec![' '; width * height],
        }
    }

    pub fn clear(&mut self) {
        for c in &mut self.char_buffer {
            *c = ' ';
        }
    }

    /// Gridlines through x = 0 and y = 0, with a marker at the origin.
    pub fn draw_axes(&mut self) {
        let (cx, cy) = self.to_screen(0.0, 0.0);
        for x in 0..self.width as i32 {
            self.set(x, cy, AXIS_H_CHAR);
        }
        for y in 0..self.height as i32 {
            self.set(cx, y, AXIS_V_CHAR);
        }
        self.set(cx, cy, ORIGIN_CHAR);
    }

    /// Draw segments between consecutive points, then mark the points
    /// themselves.
    pub fn plot_polyline(&mut self, xs: &[f64], ys: &[f64]) {
        debug_assert_eq!(xs.len(), ys.len());
        let n = xs.len().min(ys.len());
        for i in 1..n {
            let (x0, y0) = self.to_screen(xs[i - 1], ys[i - 1]);
            let (x1, y1) = self.to_screen(xs[i], ys[i]);
            self.draw_line(x0, y0, x1, y1, EDGE_CHAR);
        }
        self.mark_points(&xs[..n], &ys[..n]);
    }

    /// Mark each point with a vertex glyph, in input order (pass a
    /// depth-sorted sequence to draw far points first).
    pub fn mark_points(&mut self, xs: &[f64], ys: &[f64]) {
        for (x, y) in xs.iter().zip(ys) {
            let (sx, sy) = self.to_screen(*x, *y);
            self.set(sx, sy, VERTEX_CHAR);
        }
    }

    /// World coordinates to screen cell. May land off-canvas; `set` clips.
    fn to_screen(&self, x: f64, y: f64) -> (i32, i32) {
        let span = 2.0 * self.bound;
        let sx = (x + self.bound) / span * (self.width.saturating_sub(1)) as f64;
        let sy = (self.bound - y) / span * (self.height.saturating_sub(1)) as f64;
        (sx.round() as i32, sy.round() as i32)
    }

    fn set(&mut self, x: i32, y: i32, c: char) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.char_buffer[y as usize * self.width + x as usize] = c;
    }

    /// Bresenham line between two screen cells.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, c: char) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.set(x, y, c);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.char_buffer[y * self.width + x];

                let color = match c {
                    AXIS_H_CHAR | AXIS_V_CHAR | ORIGIN_CHAR => Color::DarkRed,
                    VERTEX_CHAR => Color::Cyan,
                    EDGE_CHAR => Color::White,
                    _ => Color::DarkGrey,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}
