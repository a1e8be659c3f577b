use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kitten_engine::core::{GameRng, RandomSource};
use kitten_engine::rules::Engine;

fn bench_initialize_match(c: &mut Criterion) {
    let engine = Engine::standard();

    c.bench_function("initialize_match_5p", |b| {
        let mut rng = GameRng::new(1);
        b.iter(|| engine.initialize_match(black_box(5), &mut rng).unwrap());
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let engine = Engine::standard();
    let state = engine.initialize_match(5, &mut GameRng::new(2)).unwrap();

    c.bench_function("state_clone", |b| b.iter(|| black_box(&state).clone()));
}

fn bench_random_playout(c: &mut Criterion) {
    let engine = Engine::standard();

    c.bench_function("random_playout_4p", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut rng = GameRng::new(seed);
            let mut state = engine.initialize_match(4, &mut rng).unwrap();
            while let Some(actor) = engine.actor(&state) {
                let legal = engine.legal_commands(&state, actor);
                let command = &legal[rng.gen_index(legal.len())];
                state = engine.apply(&state, actor, command, &mut rng).unwrap().state;
            }
            state
        });
    });
}

criterion_group!(benches, bench_initialize_match, bench_state_clone, bench_random_playout);
criterion_main!(benches);
