use criterion::{criterion_group, criterion_main, Criterion};

use showdown::core::{Card, Hand, Rankable, showdown};

/// One hand per rank category.
const HANDS: [&str; 9] = [
    "QdAc4s2s8h", // high card
    "KdJc4s2s4h", // pair
    "AdAc4s2s4h", // two pairs
    "AdAcQsJsAh", // three of a kind
    "Td8cQsJs9h", // straight
    "3dAdTd2d7d", // flush
    "3d8d3c3h8s", // full house
    "3d8d3c3h3s", // four of a kind
    "Tc8cQcJc9c", // straight flush
];

fn parse_hands() -> Vec<Vec<Card>> {
    HANDS
        .iter()
        .map(|s| {
            s.as_bytes()
                .chunks(2)
                .map(|chunk| Card::try_from(std::str::from_utf8(chunk).unwrap()).unwrap())
                .collect()
        })
        .collect()
}

fn bench_rank_five(c: &mut Criterion) {
    let hands = parse_hands();
    c.bench_function("rank_five", |b| {
        b.iter(|| {
            for cards in &hands {
                std::hint::black_box(cards.rank_five());
            }
        });
    });
}

fn bench_hand_construction(c: &mut Criterion) {
    let hands = parse_hands();
    c.bench_function("hand_construction", |b| {
        b.iter(|| {
            for cards in &hands {
                std::hint::black_box(Hand::new_from_slice(cards).unwrap());
            }
        });
    });
}

fn bench_showdown(c: &mut Criterion) {
    // Equal ranks so every comparison walks the kicker rules.
    let first = Hand::new_from_str("4s4hAcJd9s").unwrap();
    let second = Hand::new_from_str("4c4dKcJh9d").unwrap();
    c.bench_function("showdown_kickers", |b| {
        b.iter(|| std::hint::black_box(showdown(&first, &second)));
    });
}

criterion_group!(
    benches,
    bench_rank_five,
    bench_hand_construction,
    bench_showdown
);
criterion_main!(benches);
