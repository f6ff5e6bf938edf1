use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dance_animation_core::{build_animation, builtin_sequence, render, Animator, Config, DanceStyle};

fn bench_sequencer(c: &mut Criterion) {
    let anim = Animator::new(Config::default());
    for style in DanceStyle::ALL {
        let seq = builtin_sequence(style);
        c.bench_function(&format!("poses/{}", style.slug()), |b| {
            b.iter(|| build_animation(black_box(&seq.movements), style, anim.catalog()).unwrap())
        });
    }
}

fn bench_raster(c: &mut Criterion) {
    let anim = Animator::new(Config::default());
    let pose = *anim.catalog().get("arms_up_leap").unwrap();
    c.bench_function("render/400x400", |b| b.iter(|| render(black_box(&pose), 400, 400)));
}

criterion_group!(benches, bench_sequencer, bench_raster);
criterion_main!(benches);
