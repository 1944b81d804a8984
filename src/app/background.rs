//! Silhouettes drifting up behind the console.
//!
//! Positions are kept in percent of the terminal so a resize does not
//! reshuffle the scene.

use std::time::Instant;

/// Which character a sprite shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteVariant {
    Mario,
    Luigi,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub variant: SpriteVariant,
    /// Horizontal position, 0 (left) to 100 (right)
    pub column: u16,
    /// Vertical position, 0 at the bottom edge; negative while rising into view
    pub height: f32,
    /// 1 draws the badge only, 2 and 3 the full silhouette
    pub size: u8,
    /// Percent of the terminal height per second
    pub speed: f32,
}

/// Sprites leave the top once past this height and respawn below
const CEILING: f32 = 110.0;

pub struct Background {
    sprites: Vec<Sprite>,
    rng: fastrand::Rng,
    last_tick: Option<Instant>,
}

impl Background {
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, fastrand::Rng::new())
    }

    #[cfg(test)]
    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self::with_rng(count, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(count: usize, mut rng: fastrand::Rng) -> Self {
        let sprites = (0..count).map(|_| spawn(&mut rng, true)).collect();
        Self {
            sprites,
            rng,
            last_tick: None,
        }
    }

    #[must_use]
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Advances every sprite by the time elapsed since the previous tick
    pub fn tick(&mut self, now: Instant) {
        let elapsed = self
            .last_tick
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32());
        self.last_tick = Some(now);

        for sprite in &mut self.sprites {
            sprite.height += sprite.speed * elapsed;
            if sprite.height > CEILING {
                *sprite = spawn(&mut self.rng, false);
            }
        }
    }
}

/// Fresh sprite below the bottom edge. `stagger` spreads the first wave
/// over the whole screen height.
fn spawn(rng: &mut fastrand::Rng, stagger: bool) -> Sprite {
    let variant = if rng.bool() {
        SpriteVariant::Mario
    } else {
        SpriteVariant::Luigi
    };
    let size = rng.u8(1..=3);
    let height = if stagger {
        rng.f32() * 100.0
    } else {
        -f32::from(size) * 5.0
    };
    Sprite {
        variant,
        column: rng.u16(0..=100),
        height,
        size,
        speed: 4.0 + rng.f32() * 8.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_scene_has_requested_sprites() {
        let background = Background::with_seed(10, 7);
        assert_eq!(background.sprites().len(), 10);
        assert!(
            background
                .sprites()
                .iter()
                .all(|sprite| (1..=3).contains(&sprite.size) && sprite.column <= 100)
        );
    }

    #[test]
    fn test_first_tick_does_not_move() {
        let mut background = Background::with_seed(4, 1);
        let before = background.sprites().to_vec();
        background.tick(Instant::now());
        assert_eq!(background.sprites(), before.as_slice());
    }

    #[test]
    fn test_tick_moves_sprites_up() {
        let start = Instant::now();
        let mut background = Background::with_seed(4, 2);
        background.tick(start);
        let before = background.sprites().to_vec();
        background.tick(start + Duration::from_millis(500));
        for (old, new) in before.iter().zip(background.sprites()) {
            if new.height > old.height {
                assert!((new.height - old.height - old.speed * 0.5).abs() < 1e-3);
            } else {
                // respawned below the bottom edge
                assert!(new.height < 0.0);
            }
        }
    }

    #[test]
    fn test_sprites_respawn_below_after_leaving() {
        let start = Instant::now();
        let mut background = Background::with_seed(6, 3);
        background.tick(start);
        // Slowest sprite needs at most 110 / 4 seconds to cross the screen
        background.tick(start + Duration::from_secs(40));
        assert!(background.sprites().iter().all(|sprite| sprite.height < 0.0));
    }

    #[test]
    fn test_both_variants_appear() {
        let background = Background::with_seed(64, 11);
        let marios = background
            .sprites()
            .iter()
            .filter(|sprite| sprite.variant == SpriteVariant::Mario)
            .count();
        assert!(marios > 0 && marios < 64);
    }
}
