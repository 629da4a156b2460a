use common::game::{
    Cell, Direction, Food, FoodKind, GameSettings, GameState, Grid, SessionRng, Snake,
};
use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::time::Duration;

fn bench_session_to_the_wall() {
    let mut rng = SessionRng::from_random();
    let mut state = GameState::new(&GameSettings::default(), &mut rng);
    state.start();

    while state.status.is_running() {
        state.step(&mut rng);
    }
}

fn bench_long_snake_steps() {
    let mut rng = SessionRng::from_random();
    let settings = GameSettings {
        field_width: 100,
        field_height: 100,
        target_score: 500,
        ..GameSettings::default()
    };
    let mut state = GameState::new(&settings, &mut rng);
    state.start();

    // A thousand-cell snake coiled over the top ten rows, head about to
    // leave the coil downwards.
    let mut snake = Snake::new(Cell::new(0, 9), Direction::Down);
    for y in 0..10 {
        for x in 0..100 {
            if (x, y) == (0, 9) {
                continue;
            }
            snake.body.push_back(Cell::new(x, y));
            snake.body_set.insert(Cell::new(x, y));
        }
    }
    state.snake = snake;
    state.food = Food {
        cell: Cell::new(50, 99),
        kind: FoodKind::Sunny,
    };

    for _ in 0..80 {
        state.step(&mut rng);
    }
}

fn bench_food_spawn_on_a_crowded_board() {
    let mut rng = SessionRng::from_random();
    let grid = Grid::new(20, 20);

    // One free cell left, so random sampling almost always falls back to
    // the free-cell scan.
    let mut snake = Snake::new(Cell::new(0, 0), Direction::Right);
    for y in 0..20 {
        for x in 0..20 {
            if (x, y) == (0, 0) || (x, y) == (19, 19) {
                continue;
            }
            snake.body.push_back(Cell::new(x, y));
            snake.body_set.insert(Cell::new(x, y));
        }
    }

    Food::spawn(&grid, &snake, &mut rng);
}

fn step_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake_step");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("session_to_the_wall", |b| {
        b.iter(bench_session_to_the_wall)
    });

    group.bench_function("long_snake_steps", |b| {
        b.iter(bench_long_snake_steps)
    });

    group.bench_function("food_spawn_crowded", |b| {
        b.iter(bench_food_spawn_on_a_crowded_board)
    });

    group.finish();
}

criterion_group!(benches, step_bench);
criterion_main!(benches);
