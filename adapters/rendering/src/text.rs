//! Plain text backend drawing the grid with one glyph per cell.

use crate::{RenderingBackend, Scene};
use anyhow::{Context, Result as AnyResult};
use std::io::Write;

/// Backend writing frames as text to any [`Write`] sink.
#[derive(Debug)]
pub struct TextBackend<W: Write> {
    writer: W,
    frames: u64,
}

impl<W: Write> TextBackend<W> {
    /// Creates a backend that writes to `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer, frames: 0 }
    }

    /// Number of frames presented so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Releases the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Renders the scene grid followed by the HUD line.
#[must_use]
pub(crate) fn draw(scene: &Scene) -> String {
    let columns = scene.grid.columns as usize;
    let mut frame = String::with_capacity((columns + 1) * scene.grid.rows as usize + 48);
    for row in 0..scene.grid.rows {
        frame.extend((0..scene.grid.columns).map(|column| scene.glyph_at(column, row)));
        frame.push('\n');
    }
    frame.push_str(&format!(
        "Health: {}  Coins: {}  Level: {}\n",
        scene.hud.health, scene.hud.coins, scene.hud.level
    ));
    frame
}

impl<W: Write> RenderingBackend for TextBackend<W> {
    fn present(&mut self, scene: &Scene) -> AnyResult<()> {
        self.writer
            .write_all(draw(scene).as_bytes())
            .and_then(|()| self.writer.flush())
            .with_context(|| format!("failed to present frame {}", self.frames))?;
        self.frames += 1;
        Ok(())
    }

    fn announce(&mut self, message: &str) -> AnyResult<()> {
        writeln!(self.writer, "{message}")
            .and_then(|()| self.writer.flush())
            .context("failed to write announcement")
    }
}
