use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::store::MemoryStore;

fn quotes(items: &[&str]) -> QuoteStore {
    QuoteStore::from_quotes(items.iter().map(|s| (*s).to_owned()).collect()).unwrap()
}

fn sorted(mut items: Vec<String>) -> Vec<String> {
    items.sort();
    items
}

fn persisted_deck(store: &MemoryStore) -> Vec<String> {
    serde_json::from_str(&store.get(DECK_KEY).unwrap()).unwrap()
}

// =============================================================
// shuffle
// =============================================================

#[test]
fn shuffle_keeps_every_element() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut items: Vec<u32> = (0..50).collect();
    shuffle(&mut items, &mut rng);
    let mut back = items.clone();
    back.sort_unstable();
    assert_eq!(back, (0..50).collect::<Vec<_>>());
}

#[test]
fn shuffle_handles_empty_and_single() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut empty: Vec<u8> = Vec::new();
    shuffle(&mut empty, &mut rng);
    assert!(empty.is_empty());

    let mut single = vec!["only"];
    shuffle(&mut single, &mut rng);
    assert_eq!(single, ["only"]);
}

#[test]
fn shuffle_reaches_every_permutation_evenly() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
    let trials = 6000;
    for _ in 0..trials {
        let mut items = [1u8, 2, 3];
        shuffle(&mut items, &mut rng);
        *counts.entry(items).or_default() += 1;
    }
    assert_eq!(counts.len(), 6);
    // Expected 1000 each; a generous band keeps the test deterministic-safe.
    for (perm, count) in counts {
        assert!((800..=1200).contains(&count), "{perm:?} seen {count} times");
    }
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_fresh_deck_is_permutation_of_quotes() {
    let q = quotes(&["A", "B", "C", "D"]);
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(1);

    let manager = DeckManager::initialize(&q, &mut store, &mut rng);

    assert_eq!(sorted(manager.deck().to_vec()), ["A", "B", "C", "D"]);
    assert_eq!(manager.cycle_len(), 4);
}

#[test]
fn initialize_persists_fresh_deck_immediately() {
    let q = quotes(&["A", "B", "C"]);
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(2);

    let manager = DeckManager::initialize(&q, &mut store, &mut rng);

    assert_eq!(persisted_deck(&store), manager.deck());
}

#[test]
fn initialize_keeps_duplicate_quotes_as_a_multiset() {
    let q = quotes(&["A", "A", "B"]);
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(3);

    let manager = DeckManager::initialize(&q, &mut store, &mut rng);

    assert_eq!(sorted(manager.deck().to_vec()), ["A", "A", "B"]);
}

#[test]
fn initialize_adopts_persisted_deck() {
    let q = quotes(&["A", "B", "C"]);
    let mut store = MemoryStore::new();
    store.set(DECK_KEY, r#"["C","A"]"#).unwrap();
    let mut rng = StdRng::seed_from_u64(4);

    let manager = DeckManager::initialize(&q, &mut store, &mut rng);

    assert_eq!(manager.deck(), ["C", "A"]);
    assert_eq!(manager.remaining(), 2);
}

#[test]
fn initialize_regenerates_empty_persisted_deck() {
    let q = quotes(&["A", "B"]);
    let mut store = MemoryStore::new();
    store.set(DECK_KEY, "[]").unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let manager = DeckManager::initialize(&q, &mut store, &mut rng);

    assert_eq!(manager.remaining(), 2);
    assert_eq!(persisted_deck(&store).len(), 2);
}

#[test]
fn initialize_regenerates_malformed_persisted_deck() {
    let q = quotes(&["A", "B"]);
    let mut store = MemoryStore::new();
    store.set(DECK_KEY, "not json").unwrap();
    let mut rng = StdRng::seed_from_u64(6);

    let manager = DeckManager::initialize(&q, &mut store, &mut rng);

    assert_eq!(sorted(manager.deck().to_vec()), ["A", "B"]);
}

#[test]
fn initialize_regenerates_deck_with_unknown_quotes() {
    let q = quotes(&["A", "B"]);
    let mut store = MemoryStore::new();
    store.set(DECK_KEY, r#"["A","Z"]"#).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let manager = DeckManager::initialize(&q, &mut store, &mut rng);

    assert_eq!(sorted(manager.deck().to_vec()), ["A", "B"]);
}

#[test]
fn initialize_regenerates_deck_with_duplicates() {
    let q = quotes(&["A", "B"]);
    let mut store = MemoryStore::new();
    store.set(DECK_KEY, r#"["A","A"]"#).unwrap();
    let mut rng = StdRng::seed_from_u64(8);

    let manager = DeckManager::initialize(&q, &mut store, &mut rng);

    assert_eq!(sorted(manager.deck().to_vec()), ["A", "B"]);
}

// =============================================================
// draw
// =============================================================

#[test]
fn draw_full_cycle_returns_each_quote_once() {
    let q = quotes(&["A", "B", "C", "D", "E"]);
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(9);
    let mut manager = DeckManager::initialize(&q, &mut store, &mut rng);

    let drawn: Vec<String> = (0..q.len()).map(|_| manager.draw(&mut store, &mut rng)).collect();

    assert_eq!(sorted(drawn), ["A", "B", "C", "D", "E"]);
    assert_eq!(manager.remaining(), 0);
}

#[test]
fn draw_pops_from_the_end() {
    let q = quotes(&["A", "B", "C"]);
    let mut store = MemoryStore::new();
    store.set(DECK_KEY, r#"["B","C"]"#).unwrap();
    let mut rng = StdRng::seed_from_u64(10);
    let mut manager = DeckManager::initialize(&q, &mut store, &mut rng);

    assert_eq!(manager.draw(&mut store, &mut rng), "C");
    assert_eq!(manager.draw(&mut store, &mut rng), "B");
}

#[test]
fn draw_persists_after_every_pop() {
    let q = quotes(&["A", "B", "C"]);
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(11);
    let mut manager = DeckManager::initialize(&q, &mut store, &mut rng);

    let first = manager.draw(&mut store, &mut rng);
    let persisted = persisted_deck(&store);

    assert_eq!(persisted, manager.deck());
    assert!(!persisted.contains(&first));
}

#[test]
fn draw_refills_when_cycle_is_exhausted() {
    let q = quotes(&["A", "B"]);
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(12);
    let mut manager = DeckManager::initialize(&q, &mut store, &mut rng);

    let first_cycle: Vec<String> = (0..2).map(|_| manager.draw(&mut store, &mut rng)).collect();
    let second_cycle: Vec<String> = (0..2).map(|_| manager.draw(&mut store, &mut rng)).collect();

    assert_eq!(sorted(first_cycle), ["A", "B"]);
    assert_eq!(sorted(second_cycle), ["A", "B"]);
}

#[test]
fn draw_single_quote_store_repeats_forever() {
    let q = QuoteStore::fallback();
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(13);
    let mut manager = DeckManager::initialize(&q, &mut store, &mut rng);

    for _ in 0..3 {
        assert_eq!(manager.draw(&mut store, &mut rng), FALLBACK_QUOTE);
    }
}

#[test]
fn draw_resumes_across_sessions() {
    let q = quotes(&["A", "B", "C", "D"]);
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(14);

    let mut seen = Vec::new();
    let mut first = DeckManager::initialize(&q, &mut store, &mut rng);
    seen.push(first.draw(&mut store, &mut rng));
    seen.push(first.draw(&mut store, &mut rng));

    // New session against the same store picks up the rest of the cycle.
    let mut second = DeckManager::initialize(&q, &mut store, &mut rng);
    seen.push(second.draw(&mut store, &mut rng));
    seen.push(second.draw(&mut store, &mut rng));

    assert_eq!(sorted(seen), ["A", "B", "C", "D"]);
}
