use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use snake_boost_common::PlayerId;
use snake_boost_common::games::ScriptedSeedSource;
use snake_boost_common::games::snake::{Direction, Point, SnakeGame, place_apple};

fn bench_zigzag_until_death() {
    let player = PlayerId::from("bench");
    let seeds = ScriptedSeedSource::new([0x0305, 0x1c2b, 0x7f11, 0x0a0a]);
    let mut game = SnakeGame::start(32, 32, &seeds, &player).expect("valid board");

    let pattern = [Direction::Right, Direction::Down, Direction::Right, Direction::Up];
    let mut turn = 0;
    while game.active {
        let outcome = game
            .advance(pattern[turn % pattern.len()], &seeds, &player)
            .expect("active game");
        black_box(outcome);
        turn += 1;
    }
}

fn crowded_body(width: u8, height: u8, free_cells: usize) -> Vec<Point> {
    let mut body = Vec::new();
    for y in 0..height {
        for x in 0..width {
            body.push(Point::new(x, y));
        }
    }
    body.truncate(body.len() - free_cells);
    body
}

fn engine_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    group.bench_function("zigzag_until_death", |b| b.iter(bench_zigzag_until_death));

    let body = crowded_body(32, 32, 4);
    group.bench_function("apple_on_crowded_board", |b| {
        b.iter(|| place_apple(32, 32, black_box(&body), black_box(0xdead_beef)))
    });

    let full = crowded_body(16, 16, 0);
    group.bench_function("apple_fallback", |b| {
        b.iter(|| place_apple(16, 16, black_box(&full), black_box(42)))
    });

    group.finish();
}

criterion_group!(benches, engine_bench);
criterion_main!(benches);
