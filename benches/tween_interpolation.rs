use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cube_scene::easing::EasingFunction;
use cube_scene::tween::{Repeat, Tween};

fn easing_benchmark(c: &mut Criterion) {
    let ease = EasingFunction::QuadraticInOut;
    c.bench_function("quadratic_in_out_easing", |b| {
        b.iter(|| black_box(ease.evaluate(black_box(0.37))))
    });
}

fn tween_sample_benchmark(c: &mut Criterion) {
    let tween = Tween::new(0.0, 2.0, 2.0)
        .with_easing(EasingFunction::QuadraticInOut)
        .with_yoyo(true)
        .with_repeat(Repeat::Infinite);

    c.bench_function("tween_value_at", |b| {
        b.iter(|| black_box(tween.value_at(black_box(123.456))))
    });
}

fn tween_advance_benchmark(c: &mut Criterion) {
    c.bench_function("tween_advance_1k_frames", |b| {
        b.iter(|| {
            let mut tween = Tween::new(0.0, 2.0, 2.0)
                .with_easing(EasingFunction::QuadraticInOut)
                .with_yoyo(true)
                .with_repeat(Repeat::Infinite);
            for _ in 0..1000 {
                black_box(tween.advance(1.0 / 60.0));
            }
        })
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    tween_sample_benchmark,
    tween_advance_benchmark
);
criterion_main!(benches);
