//! Shared helpers for pathwright benchmark suites.

use pathwright_harness::graph::{NodeId, XyGraph};

/// A `side × side` four-connected grid with unit spacing; node id is
/// `y * side + x`.
///
/// Every `wall_every`-th column (when non-zero) is blocked except for a gap
/// in the top or bottom row, alternating, so the route zig-zags and the
/// heuristic underestimates heavily.
///
/// # Panics
///
/// Panics if graph construction fails. Benchmark setup failures are fatal.
#[must_use]
pub fn grid_graph(side: u32, wall_every: u32) -> XyGraph {
    let is_open = |x: u32, y: u32| {
        if wall_every == 0 || x == 0 || x % wall_every != 0 {
            return true;
        }
        let gap_row = if (x / wall_every) % 2 == 0 { 0 } else { side - 1 };
        y == gap_row
    };

    let mut graph = XyGraph::new();
    for y in 0..side {
        for x in 0..side {
            if is_open(x, y) {
                graph
                    .add_node(y * side + x, i64::from(x), i64::from(y))
                    .expect("unique grid id");
            }
        }
    }
    for y in 0..side {
        for x in 0..side {
            if !is_open(x, y) {
                continue;
            }
            let id = y * side + x;
            let mut link = |nx: u32, ny: u32| {
                if is_open(nx, ny) {
                    graph.connect(id, ny * side + nx).expect("both cells exist");
                }
            };
            if x > 0 {
                link(x - 1, y);
            }
            if x + 1 < side {
                link(x + 1, y);
            }
            if y > 0 {
                link(x, y - 1);
            }
            if y + 1 < side {
                link(x, y + 1);
            }
        }
    }
    graph
}

/// Opposite corners of a `side × side` grid.
#[must_use]
pub fn corners(side: u32) -> (NodeId, NodeId) {
    (0, side * side - 1)
}
