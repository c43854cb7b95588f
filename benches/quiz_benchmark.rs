//! Benchmarks for question loading, sampling and a full quiz play-through

use bible_quiz_core::{
    randomize_options, select_count, Book, Difficulty, QuestionCount, QuestionRecord,
    QuestionRepository, QuizConfig, QuizEngine,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Create a large synthetic pool
fn create_pool(size: usize) -> Vec<QuestionRecord> {
    (0..size)
        .map(|i| {
            QuestionRecord::new(
                format!("q{}", i),
                format!("Question number {}?", i),
                vec![
                    format!("Option A{}", i),
                    format!("Option B{}", i),
                    format!("Option C{}", i),
                    format!("Option D{}", i),
                ],
                i % 4,
                Book::Exodus,
                Difficulty::Medium,
            )
            .unwrap()
        })
        .collect()
}

fn benchmark_repository(c: &mut Criterion) {
    c.bench_function("load_embedded_cold", |b| {
        b.iter(|| {
            let repo = QuestionRepository::embedded();
            black_box(repo.load(Book::Exodus))
        })
    });

    let repo = QuestionRepository::embedded();
    repo.load(Book::Exodus);
    c.bench_function("get_questions_cached", |b| {
        b.iter(|| black_box(repo.get_questions(black_box(Some(Book::Exodus)), Some(Difficulty::Easy))))
    });
}

fn benchmark_sampling(c: &mut Criterion) {
    let pool = create_pool(1_000);
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("select_count_20_of_1000", |b| {
        b.iter(|| {
            black_box(select_count(
                black_box(pool.clone()),
                QuestionCount::limit(20),
                &mut rng,
            ))
        })
    });

    let question = pool[0].clone();
    c.bench_function("randomize_options", |b| {
        b.iter(|| black_box(randomize_options(black_box(&question), &mut rng)))
    });
}

fn benchmark_play_through(c: &mut Criterion) {
    let mut engine = QuizEngine::with_seed(QuestionRepository::embedded(), QuizConfig::default(), 9);

    // Start, answer everything, summarize, go back to selection
    c.bench_function("play_full_exodus_quiz", |b| {
        b.iter(|| {
            engine.select_book(Some(Book::Exodus));
            engine.start_quiz().unwrap();
            while !engine.is_complete() {
                let correct = engine.current_question().unwrap().correct_option_index();
                engine.select_answer(correct).unwrap();
                engine.proceed().unwrap();
            }
            let summary = engine.summary().unwrap();
            engine.return_to_selection();
            black_box(summary)
        })
    });
}

criterion_group!(benches, benchmark_repository, benchmark_sampling, benchmark_play_through);
criterion_main!(benches);
