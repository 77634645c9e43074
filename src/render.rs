//! Render pass
//!
//! `compose` turns a read-only view of the game into an ordered list of draw
//! commands; `present` replays them through macroquad. Keeping the two apart
//! lets tests check what a frame shows without a window.

use macroquad::color::{Color, BLACK, WHITE};
use macroquad::math::Vec2;
use macroquad::shapes::{draw_line, draw_rectangle};
use macroquad::text::draw_text;
use macroquad::texture::{draw_texture, draw_texture_ex, DrawTextureParams};
use rand::Rng;
use crate::assets::Assets;
use crate::game::{EntityKind, GameState, Phase, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Advance of the fixed-width HUD font, used for centering
pub const GLYPH_WIDTH: i32 = 7;

/// Size passed to `draw_text`. macroquad's built-in ProggyClean font
/// advances `GLYPH_WIDTH` pixels per glyph at 13.
pub const FONT_SIZE: f32 = 13.0;

/// Lightning bolts drawn per frame while the flash is up
pub const LIGHTNING_BOLTS: usize = 10;

pub const FOREST_TINT: Color = Color::new(0.0, 100.0 / 255.0, 0.0, 40.0 / 255.0);
pub const LIGHTNING_COLOR: Color = Color::new(1.0, 1.0, 0.0, 192.0 / 255.0);

/// One drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Forest image stretched over the whole screen
    Background,
    /// Full-screen translucent rectangle
    Fill(Color),
    /// Sprite at its native size, top-left at (x, y)
    Sprite { kind: EntityKind, x: f32, y: f32 },
    Line { from: (f32, f32), to: (f32, f32), color: Color },
    /// Baseline-anchored text
    Text { text: String, x: i32, y: i32, color: Color },
}

/// Everything drawn in one frame, back to front.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    /// Text with a black drop shadow one pixel down-right.
    fn shadowed_text(&mut self, text: &str, x: i32, y: i32) {
        self.push(DrawCommand::Text { text: text.to_string(), x: x + 1, y: y + 1, color: BLACK });
        self.push(DrawCommand::Text { text: text.to_string(), x, y, color: WHITE });
    }

    /// Shadowed text centered horizontally on the screen.
    fn centered_text(&mut self, text: &str, y: i32) {
        let x = (SCREEN_WIDTH - text.chars().count() as i32 * GLYPH_WIDTH) / 2;
        self.shadowed_text(text, x, y);
    }

    /// All strings in draw order (white copies only).
    #[cfg(test)]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, color, .. } if *color == WHITE => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Build the draw list for the current state.
///
/// Lightning bolt endpoints are random each frame, hence the RNG.
pub fn compose<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Frame {
    let mut frame = Frame::default();
    frame.push(DrawCommand::Background);
    frame.push(DrawCommand::Fill(FOREST_TINT));

    let mid_y = SCREEN_HEIGHT / 2;
    match state.phase {
        Phase::NotStarted => {
            frame.centered_text("Click to start the Bee Catching Game!", mid_y);
        }
        Phase::Over => {
            frame.centered_text(&format!("Game Over! Your score: {}", state.score), mid_y);
            frame.centered_text("Click to play again", mid_y + 30);
        }
        Phase::Playing => {
            for e in state.entities.iter().filter(|e| e.visible) {
                frame.push(DrawCommand::Sprite { kind: e.kind, x: e.x, y: e.y });
            }

            if state.effect_active {
                for _ in 0..LIGHTNING_BOLTS {
                    let x1 = rng.gen_range(0..SCREEN_WIDTH) as f32;
                    let x2 = rng.gen_range(0..SCREEN_WIDTH) as f32;
                    frame.push(DrawCommand::Line {
                        from: (x1, 0.0),
                        to: (x2, SCREEN_HEIGHT as f32),
                        color: LIGHTNING_COLOR,
                    });
                }
            }

            frame.shadowed_text(&format!("Score: {}", state.score), 10, 20);
            frame.shadowed_text(&format!("Time: {}", state.remaining_secs), SCREEN_WIDTH - 100, 20);
            frame.shadowed_text(
                &format!("Hornets: {}/{}", state.penalties, state.rules().max_penalties),
                10,
                40,
            );
        }
    }
    frame
}

/// Replay a frame through macroquad.
pub fn present(frame: &Frame, assets: &Assets) {
    let (sw, sh) = (SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32);
    for cmd in &frame.commands {
        match cmd {
            DrawCommand::Background => {
                draw_texture_ex(
                    &assets.forest,
                    0.0,
                    0.0,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(Vec2::new(sw, sh)),
                        ..Default::default()
                    },
                );
            }
            DrawCommand::Fill(color) => draw_rectangle(0.0, 0.0, sw, sh, *color),
            DrawCommand::Sprite { kind, x, y } => draw_texture(assets.sprite(*kind), *x, *y, WHITE),
            DrawCommand::Line { from, to, color } => draw_line(from.0, from.1, to.0, to.1, 1.0, *color),
            DrawCommand::Text { text, x, y, color } => {
                draw_text(text, *x as f32, *y as f32, FONT_SIZE, *color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::{Entity, SpeedTier};
    use crate::game::SpriteSizes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state() -> GameState {
        GameState::new(SpriteSizes::new((40, 40), (40, 40)))
    }

    #[test]
    fn test_title_screen() {
        let mut rng = StdRng::seed_from_u64(1);
        let frame = compose(&state(), &mut rng);
        assert_eq!(frame.commands[0], DrawCommand::Background);
        assert_eq!(frame.commands[1], DrawCommand::Fill(FOREST_TINT));
        assert_eq!(frame.texts(), vec!["Click to start the Bee Catching Game!"]);

        // 37 chars * 7 = 259 -> (800 - 259) / 2 = 270; shadow first
        assert_eq!(
            frame.commands[2],
            DrawCommand::Text { text: "Click to start the Bee Catching Game!".into(), x: 271, y: 301, color: BLACK }
        );
        assert!(matches!(frame.commands[3], DrawCommand::Text { x: 270, y: 300, .. }));
    }

    #[test]
    fn test_game_over_screen() {
        let mut s = state();
        s.phase = Phase::Over;
        s.score = 12;
        let mut rng = StdRng::seed_from_u64(1);
        let frame = compose(&s, &mut rng);
        assert_eq!(frame.texts(), vec!["Game Over! Your score: 12", "Click to play again"]);
        assert!(!frame.commands.iter().any(|c| matches!(c, DrawCommand::Sprite { .. })));
    }

    #[test]
    fn test_centering_uses_default_font_advance() {
        assert_eq!(FONT_SIZE, 13.0);
        assert_eq!(GLYPH_WIDTH, 7);

        let mut s = state();
        s.phase = Phase::Over;
        s.score = 12;
        let mut rng = StdRng::seed_from_u64(1);
        let frame = compose(&s, &mut rng);
        // 25 chars * 7 = 175 -> (800 - 175) / 2 = 312
        let x = frame.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, x, color, .. } if text.starts_with("Game Over") && *color == WHITE => Some(*x),
            _ => None,
        });
        assert_eq!(x, Some(312));
    }

    #[test]
    fn test_playing_hud_and_sprites() {
        let mut s = state();
        s.phase = Phase::Playing;
        s.score = 4;
        s.penalties = 1;
        s.remaining_secs = 42;
        s.entities.push(Entity::new(EntityKind::Bee, SpeedTier::Normal, 10.0, 20.0, 20, 20));
        s.entities.push(Entity::new(EntityKind::Hornet, SpeedTier::High, 30.0, 40.0, 20, 20));

        let mut rng = StdRng::seed_from_u64(1);
        let frame = compose(&s, &mut rng);

        let sprites: Vec<_> = frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .collect();
        assert_eq!(
            sprites,
            vec![
                &DrawCommand::Sprite { kind: EntityKind::Bee, x: 10.0, y: 20.0 },
                &DrawCommand::Sprite { kind: EntityKind::Hornet, x: 30.0, y: 40.0 },
            ]
        );
        assert_eq!(frame.texts(), vec!["Score: 4", "Time: 42", "Hornets: 1/3"]);
        assert!(!frame.commands.iter().any(|c| matches!(c, DrawCommand::Line { .. })));
    }

    #[test]
    fn test_lightning_while_effect_active() {
        let mut s = state();
        s.phase = Phase::Playing;
        s.effect_active = true;
        let mut rng = StdRng::seed_from_u64(5);
        let frame = compose(&s, &mut rng);

        let lines: Vec<_> = frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, color } => Some((*from, *to, *color)),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), LIGHTNING_BOLTS);
        for (from, to, color) in lines {
            assert_eq!(from.1, 0.0);
            assert_eq!(to.1, 600.0);
            assert!((0.0..800.0).contains(&from.0));
            assert!((0.0..800.0).contains(&to.0));
            assert_eq!(color, LIGHTNING_COLOR);
        }
    }
}
