//! Tests for block and domain sampling invariants

use std::collections::{BTreeMap, HashSet};

use rand::rngs::StdRng;
use rand::SeedableRng;

use domgen::domain::{choose_blocks, pick_domains, BlockMap, Profile};

fn block_map(count: usize) -> BlockMap {
    let mut blocks = BTreeMap::new();
    for i in 0..count {
        blocks.insert(
            format!("Block {i}"),
            vec![format!("a{i}.example"), format!("b{i}.example")],
        );
    }
    blocks
}

fn pool(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("domain{i}.example")).collect()
}

#[test]
fn given_many_blocks_when_choosing_compact_then_size_within_range() {
    let blocks = block_map(12);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let chosen = choose_blocks(&blocks, Profile::Compact, &mut rng);
        assert!((3..=4).contains(&chosen.len()), "got {}", chosen.len());
    }
}

#[test]
fn given_many_blocks_when_choosing_extended_then_size_within_range() {
    let blocks = block_map(12);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let chosen = choose_blocks(&blocks, Profile::Extended, &mut rng);
        assert!((5..=7).contains(&chosen.len()), "got {}", chosen.len());
    }
}

#[test]
fn given_fewer_blocks_than_range_when_choosing_then_capped_at_total() {
    let blocks = block_map(2);
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let chosen = choose_blocks(&blocks, Profile::Extended, &mut rng);
        assert_eq!(chosen.len(), 2);
    }
}

#[test]
fn given_blocks_when_choosing_then_no_duplicates() {
    let blocks = block_map(8);
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..100 {
        let chosen = choose_blocks(&blocks, Profile::Extended, &mut rng);
        let unique: HashSet<&str> = chosen.iter().copied().collect();
        assert_eq!(unique.len(), chosen.len());
    }
}

#[test]
fn given_empty_block_map_when_choosing_then_empty() {
    let blocks = BlockMap::new();
    let mut rng = StdRng::seed_from_u64(1);
    assert!(choose_blocks(&blocks, Profile::Compact, &mut rng).is_empty());
}

#[test]
fn given_large_pool_when_picking_then_size_within_range() {
    let pool = pool(30);
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..200 {
        let picked = pick_domains(&pool, Profile::Compact, &mut rng);
        assert!((3..=10).contains(&picked.len()), "got {}", picked.len());
    }
}

#[test]
fn given_small_pool_when_picking_then_never_exceeds_pool() {
    let pool = pool(2);
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..50 {
        let picked = pick_domains(&pool, Profile::Compact, &mut rng);
        assert_eq!(picked.len(), 2);
    }
}

#[test]
fn given_pool_when_picking_then_no_duplicates_within_one_call() {
    let pool = pool(15);
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..100 {
        let picked = pick_domains(&pool, Profile::Compact, &mut rng);
        let unique: HashSet<&str> = picked.iter().copied().collect();
        assert_eq!(unique.len(), picked.len());
    }
}

#[test]
fn given_pool_when_picking_then_results_come_from_pool() {
    let pool = pool(10);
    let mut rng = StdRng::seed_from_u64(17);

    let picked = pick_domains(&pool, Profile::Compact, &mut rng);
    for domain in picked {
        assert!(pool.iter().any(|p| p == domain));
    }
}
