//! Fractional sort keys for constant-time insertion within a partition.
//!
//! Keys are real numbers, so a task can be placed between two neighbours by
//! taking their midpoint without renumbering siblings. Repeated midpoint
//! insertion between the same pair halves the remaining gap each time;
//! floating-point precision is the only bound on subdivision and no
//! automatic rebalancing exists. [`normalized_orders`] is the manual
//! compaction sequence a caller may persist when a partition needs tidying.

/// Seed key for the first task in an empty partition.
pub const ORDER_SEED: f64 = 1024.0;

/// Gap appended past the current tail when a task moves to last place.
pub const TAIL_GAP: f64 = 1024.0;

/// Computes the sort key placing a new task at `index` within a partition
/// whose current keys are `orders`, ascending.
///
/// Head inserts halve the first key, tail inserts extend past the last key
/// by [`TAIL_GAP`], and interior inserts take the midpoint of the two
/// neighbouring keys. An empty partition yields [`ORDER_SEED`]. No sibling
/// key is ever touched.
#[must_use]
pub fn insertion_key(orders: &[f64], index: usize) -> f64 {
    let (Some(first), Some(last)) = (orders.first(), orders.last()) else {
        return ORDER_SEED;
    };
    if index == 0 {
        return first / 2.0;
    }
    if index >= orders.len() {
        return last + TAIL_GAP;
    }
    midpoint(orders.get(index - 1), orders.get(index))
}

/// Computes the sort key for moving the task currently at `moving_index` to
/// `target_index` within the same partition.
///
/// The neighbour pair is selected from the pre-move positions and differs by
/// direction: moving down, the task lands after the element currently at
/// `target_index`; moving up, it lands before it.
#[must_use]
pub fn reorder_key(orders: &[f64], moving_index: usize, target_index: usize) -> f64 {
    let (Some(first), Some(last)) = (orders.first(), orders.last()) else {
        return ORDER_SEED;
    };
    if target_index == 0 {
        return first / 2.0;
    }
    if target_index + 1 >= orders.len() {
        return last + TAIL_GAP;
    }
    if target_index > moving_index {
        midpoint(orders.get(target_index), orders.get(target_index + 1))
    } else {
        midpoint(orders.get(target_index - 1), orders.get(target_index))
    }
}

/// Returns the compacted key sequence `1.0, 2.0, ..` for a partition of
/// `len` tasks.
///
/// Never applied automatically; gap exhaustion under repeated midpoint
/// insertion is an accepted trade-off and compaction is a caller-driven
/// maintenance step.
#[must_use]
pub fn normalized_orders(len: usize) -> Vec<f64> {
    let mut orders = Vec::with_capacity(len);
    let mut next = 1.0;
    for _ in 0..len {
        orders.push(next);
        next += 1.0;
    }
    orders
}

fn midpoint(prev: Option<&f64>, next: Option<&f64>) -> f64 {
    match (prev, next) {
        (Some(lo), Some(hi)) => (lo + hi) / 2.0,
        (Some(lo), None) => lo + TAIL_GAP,
        (None, Some(hi)) => hi / 2.0,
        (None, None) => ORDER_SEED,
    }
}
