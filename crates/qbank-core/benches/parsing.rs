use criterion::{black_box, criterion_group, criterion_main, Criterion};

use qbank_core::bank::parse_bank_str;

fn bench_toml_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("toml_parsing");

    let small_toml = generate_bank_toml(5);
    let medium_toml = generate_bank_toml(50);
    let large_toml = generate_bank_toml(200);

    group.bench_function("5_questions", |b| {
        b.iter(|| parse_bank_str(black_box(&small_toml), black_box("bench.toml".as_ref())))
    });

    group.bench_function("50_questions", |b| {
        b.iter(|| parse_bank_str(black_box(&medium_toml), black_box("bench.toml".as_ref())))
    });

    group.bench_function("200_questions", |b| {
        b.iter(|| parse_bank_str(black_box(&large_toml), black_box("bench.toml".as_ref())))
    });

    group.finish();
}

fn bench_toml_rendering(c: &mut Criterion) {
    let bank = parse_bank_str(&generate_bank_toml(200), "bench.toml".as_ref())
        .expect("generated bank parses");

    c.bench_function("render_200_questions", |b| {
        b.iter(|| black_box(&bank).to_toml_string())
    });
}

fn generate_bank_toml(n: usize) -> String {
    let mut s = String::new();
    s.push_str(
        r#"[bank]
id = "bench"
name = "Benchmark"
"#,
    );
    for i in 0..n {
        s.push_str(&format!(
            r#"
[[questions]]
id = {i}
name = "Question {i}"
body = "Pick the right answer for {i}"
type = "multiple_choice_question"
options = ["a", "b", "c"]
expected = "a"
points = 2
published = true
"#
        ));
    }
    s
}

criterion_group!(benches, bench_toml_parsing, bench_toml_rendering);
criterion_main!(benches);
