use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use tagrank::top_hashtags_k;
use tagrank::Tweet;

fn generate_tweets(num_tweets: usize, distinct_tags: usize) -> Vec<Tweet> {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut tweets = Vec::with_capacity(num_tweets);

    for i in 0..num_tweets {
        let a = rng.random_range(0..distinct_tags);
        let b = rng.random_range(0..distinct_tags);
        let text = format!("tweet number {} #tag{} #tag{}", i, a, b);
        tweets.push(Tweet::new(i as u64, (i % 100) as u64, &text, "2024-02-01"));
    }

    tweets
}

fn benchmark_top_hashtags(c: &mut Criterion, num_tweets: usize) {
    let tweets = generate_tweets(num_tweets, 1000);

    let mut group = c.benchmark_group(format!("TopHashtags_{}", num_tweets));
    group.sample_size(60);

    group.bench_function("top3", |b| {
        b.iter(|| top_hashtags_k(black_box(&tweets), 3).unwrap());
    });
    group.bench_function("top10", |b| {
        b.iter(|| top_hashtags_k(black_box(&tweets), 10).unwrap());
    });
    group.finish();
}

fn benchmark_top_hashtags_1_000(c: &mut Criterion) {
    benchmark_top_hashtags(c, 1_000);
}

fn benchmark_top_hashtags_10_000(c: &mut Criterion) {
    benchmark_top_hashtags(c, 10_000);
}

fn benchmark_top_hashtags_100_000(c: &mut Criterion) {
    benchmark_top_hashtags(c, 100_000);
}

criterion_group!(
    benches,
    benchmark_top_hashtags_1_000,
    benchmark_top_hashtags_10_000,
    benchmark_top_hashtags_100_000
);
criterion_main!(benches);
