use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stepexpr_scanner::tokenize;

// Expressions with a mix of text runs, delimiters, escapes and non-ASCII
// codepoints
const EXPRESSIONS: &[&str] = &[
    "I have {int} cup(s) in my belly",
    "three blind mice/rats ran {float} km",
    "the \\{acronym\\} stays literal",
    "á fälschungssicher 🥒 ticket for {word}",
    "there is/are some(nice) cucumber(s) on the/my table",
];

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_mixed_expressions", |b| {
        b.iter(|| {
            for expression in EXPRESSIONS {
                let _ = tokenize(black_box(expression));
            }
        })
    });

    let long_expression = "cup(s) of {word} tea/coffee with {int} sugar(s) ".repeat(50);
    c.bench_function("tokenize_long_expression", |b| {
        b.iter(|| tokenize(black_box(&long_expression)))
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
