use btree::{BTree, DEFAULT_MIN_DEGREE};
use std::time::Instant;

const TREE_SIZE: i32 = 1_000_000;
const DELETE_COUNT: u32 = 500_000;

fn main() {
    println!("Delete Operation Profiler");
    println!("========================");

    profile_sequential_deletes();
    profile_pseudo_random_deletes();
    profile_mixed_workload_deletes();
    profile_rebalancing_heavy_deletes();
    profile_small_degree_deletes();
}

fn populated_tree(min_degree: usize) -> BTree<i32> {
    let mut tree = BTree::new(min_degree).unwrap();
    let start = Instant::now();
    for i in 0..TREE_SIZE {
        tree.insert(i);
    }
    println!("Setup time: {:?} (height {})", start.elapsed(), tree.height());
    tree
}

fn profile_sequential_deletes() {
    println!("\n1. Sequential Delete Pattern");
    println!("----------------------------");

    let mut tree = populated_tree(DEFAULT_MIN_DEGREE);

    let start = Instant::now();
    for i in 0..DELETE_COUNT as i32 {
        tree.delete(&i);
    }
    let delete_time = start.elapsed();
    println!("Sequential delete time: {:?}", delete_time);
    println!("Avg per delete: {:?}", delete_time / DELETE_COUNT);
}

fn profile_pseudo_random_deletes() {
    println!("\n2. Pseudo-Random Delete Pattern");
    println!("-------------------------------");

    let mut tree = populated_tree(DEFAULT_MIN_DEGREE);

    // Simple LCG so runs are comparable across machines
    let mut keys = Vec::with_capacity(DELETE_COUNT as usize);
    let mut seed = 42u64;
    for _ in 0..DELETE_COUNT {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        keys.push((seed % TREE_SIZE as u64) as i32);
    }

    let start = Instant::now();
    let mut removed = 0;
    for key in keys {
        if tree.delete(&key) {
            removed += 1;
        }
    }
    let delete_time = start.elapsed();
    println!("Pseudo-random delete time: {:?}", delete_time);
    println!("Keys actually removed: {}", removed);
    println!("Avg per delete: {:?}", delete_time / DELETE_COUNT);
}

fn profile_mixed_workload_deletes() {
    println!("\n3. Mixed Workload with Deletes");
    println!("------------------------------");

    let mut tree = populated_tree(DEFAULT_MIN_DEGREE);
    let mut seed = 42u64;

    let start = Instant::now();
    let mut delete_count = 0u32;
    let mut insert_count = 0u32;
    let mut lookup_count = 0u32;

    // 40% lookup, 30% insert, 30% delete
    for _ in 0..DELETE_COUNT * 2 {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let op = seed % 100;
        let key = (seed % (TREE_SIZE as u64 * 2)) as i32;

        match op {
            0..=39 => {
                tree.search(&key);
                lookup_count += 1;
            }
            40..=69 => {
                tree.insert(key);
                insert_count += 1;
            }
            _ => {
                tree.delete(&key);
                delete_count += 1;
            }
        }
    }

    let total_time = start.elapsed();
    println!("Mixed workload time: {:?}", total_time);
    println!(
        "Operations: {} lookups, {} inserts, {} deletes",
        lookup_count, insert_count, delete_count
    );
    println!("Avg op time: {:?}", total_time / (DELETE_COUNT * 2));
}

fn profile_rebalancing_heavy_deletes() {
    println!("\n4. Rebalancing-Heavy Delete Pattern");
    println!("-----------------------------------");

    let mut tree = BTree::new(DEFAULT_MIN_DEGREE).unwrap();
    for i in 0..TREE_SIZE {
        tree.insert(i * 2);
    }

    // Every other key, so neighbouring nodes drain together and keep merging
    let start = Instant::now();
    for i in 0..DELETE_COUNT as i32 {
        tree.delete(&(i * 4));
    }
    let delete_time = start.elapsed();

    println!("Rebalancing-heavy delete time: {:?}", delete_time);
    println!("Avg per delete: {:?}", delete_time / DELETE_COUNT);
    println!("Tree size after deletes: {}", tree.len());
}

fn profile_small_degree_deletes() {
    println!("\n5. Minimum Degree 2 (every delete rebalances)");
    println!("---------------------------------------------");

    let mut tree = populated_tree(2);

    let start = Instant::now();
    for i in (0..TREE_SIZE).rev().step_by(2) {
        tree.delete(&i);
    }
    let delete_time = start.elapsed();

    println!("Reverse delete time: {:?}", delete_time);
    println!("Avg per delete: {:?}", delete_time / DELETE_COUNT);
    println!("Height after deletes: {}", tree.height());
}
