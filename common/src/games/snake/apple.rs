use super::game_state::SnakeGame;
use super::types::Point;
use crate::games::{RandomSeedSource, SeedContext, rehash};
use crate::{PlayerId, log};

pub const MAX_APPLE_ATTEMPTS: usize = 32;

/// Used when every attempt lands on the body. It may itself be a body cell;
/// callers get no guarantee of a free cell on a crowded board.
pub const FALLBACK_APPLE: Point = Point { x: 0, y: 0 };

/// Low byte slice of the seed picks the column, the next slice the row.
pub fn apple_candidate(seed: u64, width: u8, height: u8) -> Point {
    let x = seed % width as u64;
    let y = (seed >> 8) % height as u64;
    Point::new(x as u8, y as u8)
}

pub fn place_apple(width: u8, height: u8, body: &[Point], seed: u64) -> Point {
    if width == 0 || height == 0 {
        return FALLBACK_APPLE;
    }

    let mut seed = seed;
    for _ in 0..MAX_APPLE_ATTEMPTS {
        let candidate = apple_candidate(seed, width, height);
        match body.iter().position(|cell| *cell == candidate) {
            None => return candidate,
            Some(index) => seed = rehash(seed, index),
        }
    }

    log!(
        "Apple placement exhausted {} attempts on {}x{} board with {} body cells",
        MAX_APPLE_ATTEMPTS,
        width,
        height,
        body.len()
    );
    FALLBACK_APPLE
}

/// Draws a seed for `game` and places its next apple.
pub fn spawn_apple(game: &SnakeGame, seeds: &dyn RandomSeedSource, player: &PlayerId) -> Point {
    let seed = seeds.seed(&SeedContext {
        player,
        score: game.score,
        body_len: game.body.len(),
    });
    place_apple(game.width, game.height, &game.body, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_body() -> Vec<Point> {
        vec![Point::new(4, 5), Point::new(5, 5), Point::new(6, 5)]
    }

    #[test]
    fn test_candidate_uses_two_seed_slices() {
        assert_eq!(apple_candidate(0x0305, 10, 10), Point::new(3, 3));
        assert_eq!(apple_candidate(0x0A07, 8, 6), Point::new(7, 4));
    }

    #[test]
    fn test_free_candidate_is_taken_directly() {
        assert_eq!(place_apple(10, 10, &horizontal_body(), 0x0305), Point::new(3, 3));
    }

    #[test]
    fn test_collision_retries_with_rehashed_seed() {
        let body = horizontal_body();
        let colliding_seed = 5 + (5 << 8);
        assert_eq!(apple_candidate(colliding_seed, 10, 10), Point::new(5, 5));

        let apple = place_apple(10, 10, &body, colliding_seed);
        assert!(!body.contains(&apple));
        assert_eq!(apple, place_apple(10, 10, &body, rehash(colliding_seed, 1)));
    }

    #[test]
    fn test_full_board_falls_back_to_origin() {
        let mut body = Vec::new();
        for y in 0..4 {
            for x in 0..4 {
                body.push(Point::new(x, y));
            }
        }
        assert_eq!(place_apple(4, 4, &body, 12345), FALLBACK_APPLE);
        assert!(body.contains(&FALLBACK_APPLE));
    }

    #[test]
    fn test_placement_stays_on_board() {
        let body = horizontal_body();
        for seed in [0u64, 1, 255, 256, 65_535, u64::MAX] {
            let apple = place_apple(7, 9, &body, seed);
            assert!(apple.x < 7 && apple.y < 9);
        }
    }
}
