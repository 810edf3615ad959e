mod test_ranking;

/// Pair of permutations of `[1, 2, 3, 4]` pinned for the preset regression values.
pub const PINNED_A: [usize; 4] = [3, 4, 2, 1];
pub const PINNED_B: [usize; 4] = [1, 3, 2, 4];

/// Linearly spaced explicit weights used by several scenarios (n = 5).
pub const LINEAR_WEIGHTS: [f64; 4] = [1.0, 0.75, 0.5, 0.25];

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
