/// Rendering layer — all terminal output lives here.
///
/// Each function receives a mutable writer and an immutable snapshot.  No
/// game logic is performed; this module only translates playfield units
/// into terminal cells and cells into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::Rect;
use crate::snapshot::{Banner, Snapshot};
use crate::state::GameState;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkGreen;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_HEALTH: Color = Color::Green;
const C_PLAYER: Color = Color::Green;
const C_ENEMY: Color = Color::Red;
const C_PROJECTILE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;
const C_LEVEL_UP: Color = Color::Green;
const C_LIVES_LEFT: Color = Color::White;
const C_GAME_OVER: Color = Color::Red;

/// Maps playfield units onto the terminal's play area: columns `1..w-1`,
/// rows `2..h-2` (row 0 is the HUD, rows 1 and h-2 are the border, the last
/// row holds the controls hint).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    playfield_width: i32,
    playfield_height: i32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, snapshot: &Snapshot) -> Self {
        Self {
            cols,
            rows,
            playfield_width: snapshot.playfield_width.max(1),
            playfield_height: snapshot.playfield_height.max(1),
        }
    }

    fn inner_cols(&self) -> i32 {
        (self.cols as i32 - 2).max(1)
    }

    fn inner_rows(&self) -> i32 {
        (self.rows as i32 - 4).max(1)
    }

    /// Terminal cell `(col, row)` holding playfield point `(x, y)`, or `None`
    /// if it falls outside the play area.
    pub fn cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= self.playfield_width || y >= self.playfield_height {
            return None;
        }
        let col = 1 + x * self.inner_cols() / self.playfield_width;
        let row = 2 + y * self.inner_rows() / self.playfield_height;
        Some((col as u16, row as u16))
    }

    /// Number of cells a span of `units` covers horizontally (at least one).
    pub fn cell_span(&self, units: i32) -> usize {
        ((units * self.inner_cols()) / self.playfield_width).max(1) as usize
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snapshot: &Snapshot) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(cols, rows, snapshot);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if let Some(lines) = snapshot.guide {
        draw_guide(out, &view, lines)?;
    } else if snapshot.state == GameState::GameOver {
        draw_game_over(out, &view, snapshot)?;
    } else {
        draw_border(out, &view)?;
        draw_hud(out, snapshot)?;
        for enemy in &snapshot.enemies {
            draw_box(out, &view, enemy, C_ENEMY, '▓')?;
        }
        for projectile in &snapshot.projectiles {
            draw_box(out, &view, projectile, C_PROJECTILE, '║')?;
        }
        draw_box(out, &view, &snapshot.player.bounds, C_PLAYER, '█')?;
        draw_controls_hint(out, &view)?;
        if let Some(banner) = &snapshot.banner {
            draw_banner(out, &view, banner)?;
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // The bottom bar is the breach line.
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "═".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snapshot: &Snapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score:{:>4}  Level:{:>3}  ",
        snapshot.score, snapshot.level
    )))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(format!("Lives:{}  ", "♥".repeat(snapshot.player.lives as usize))))?;
    out.queue(style::SetForegroundColor(C_HUD_HEALTH))?;
    out.queue(Print(format!("Health:{:>4}", snapshot.player.health)))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Draw the top row of a bounding box as a run of `glyph`.  Boxes partly
/// above the playfield are drawn from their first visible unit.
fn draw_box<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    color: Color,
    glyph: char,
) -> std::io::Result<()> {
    let Some((col, row)) = view.cell(rect.x, rect.y.max(0)) else {
        return Ok(());
    };
    let span = view
        .cell_span(rect.width)
        .min(view.cols.saturating_sub(col + 1) as usize)
        .max(1);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph.to_string().repeat(span)))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    view: &Viewport,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_banner<W: Write>(out: &mut W, view: &Viewport, banner: &Banner) -> std::io::Result<()> {
    let color = match banner {
        Banner::LevelUp { .. } => C_LEVEL_UP,
        Banner::LivesLeft { .. } => C_LIVES_LEFT,
        Banner::GameOver => C_GAME_OVER,
    };
    draw_centered(out, view, view.rows / 2, &banner.text(), color)
}

fn draw_guide<W: Write>(out: &mut W, view: &Viewport, lines: &[&str]) -> std::io::Result<()> {
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, line) in lines.iter().enumerate() {
        draw_centered(out, view, start_row + i as u16, line, Color::White)?;
    }
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    view: &Viewport,
    snapshot: &Snapshot,
) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", C_GAME_OVER),
        ("║     GAME  OVER     ║", C_GAME_OVER),
        ("╚════════════════════╝", C_GAME_OVER),
    ];
    let start_row = (view.rows / 2).saturating_sub(3);
    for (i, (msg, color)) in lines.iter().enumerate() {
        draw_centered(out, view, start_row + i as u16, msg, *color)?;
    }
    let reached = format!("Reached level {}", snapshot.level);
    draw_centered(out, view, start_row + 3, &reached, C_HUD_SCORE)?;
    draw_centered(
        out,
        view,
        start_row + 5,
        "Play Again? Press Y for Yes, N for No",
        Color::White,
    )
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   Z / SPACE : Shoot   Q : Quit"))?;
    Ok(())
}
