//! Fork-join parallel Dijkstra over a fixed pool of scoped worker threads.
//!
//! Each outer iteration runs two data-parallel phases separated by full
//! barriers:
//! 1. **Minimum search** - every worker scans its static slice of the vertex
//!    range for the unvisited vertex with the smallest tentative distance and
//!    merges its local result into a shared best under a single lock
//!    acquisition. The merge compares `(distance, index)` keys, so the
//!    combined choice equals the sequential left-to-right scan no matter in
//!    which order workers reach the lock.
//! 2. **Relaxation** - workers claim fixed-size chunks of the chosen vertex's
//!    adjacency range from a shared cursor (dynamic scheduling, since degrees
//!    can be heavily skewed) and lower neighbor distances through a
//!    compare-exchange retry loop. A slot only ever decreases; racing writers
//!    cannot overwrite a smaller value with a larger one.
//!
//! The thread whose barrier wait elects it leader performs the sequential
//! step in between: it reads the merged minimum, marks the vertex visited,
//! publishes the chosen vertex and the next relaxation range, and resets the
//! shared best for the following iteration.
//!
//! All atomics use `Relaxed` ordering: the barriers (and the combine mutex)
//! provide every cross-phase happens-before edge the algorithm needs.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::{Barrier, Mutex};

use crossbeam_utils::CachePadded;

use crate::graph::Graph;
use crate::INFINITY;

/// Upper bound on worker threads to avoid oversubscription on large machines.
///
/// A tunable, not a correctness requirement; any `threads >= 1` produces
/// identical results.
pub const MAX_THREADS: usize = 16;

/// Adjacency slots claimed per cursor fetch during the relaxation phase.
const RELAX_CHUNK: usize = 512;

/// Sentinel vertex id meaning "no vertex".
const NONE: usize = usize::MAX;

/// Worker threads to use by default: available hardware parallelism capped at
/// [`MAX_THREADS`].
pub fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map_or(1, std::num::NonZeroUsize::get)
        .min(MAX_THREADS)
}

/// One worker's local minimum, and the merge target it folds into.
#[derive(Clone, Copy)]
struct Best {
    dist: u32,
    node: usize,
}

impl Best {
    const EMPTY: Best = Best {
        dist: INFINITY,
        node: NONE,
    };

    /// Total order for the combine step: distance first, then vertex index.
    #[inline]
    fn key(self) -> (u32, usize) {
        (self.dist, self.node)
    }
}

/// Computes shortest path distances from `source`, in parallel.
///
/// Produces output bit-identical to [`shortest_paths`] for every graph,
/// source, and thread count, including tie-breaks: among equal minimum
/// distances the lowest vertex index is finalized first.
///
/// `threads` is an explicit configuration value; see [`default_thread_count`]
/// for the usual choice. Unreachable vertices keep [`INFINITY`].
///
/// [`shortest_paths`]: crate::solve::shortest_paths
///
/// # Panics
///
/// Panics if `source` is out of bounds or `threads` is zero.
pub fn shortest_paths_parallel(graph: &Graph, source: usize, threads: usize) -> Vec<u32> {
    let n = graph.node_count();
    assert!(source < n, "source {source} out of bounds for {n} nodes");
    assert!(threads != 0, "threads must be > 0");

    let dist: Vec<AtomicU32> = (0..n).map(|_| AtomicU32::new(INFINITY)).collect();
    dist[source].store(0, Ordering::Relaxed);

    // Only the barrier leader ever writes `visited`; workers read it.
    let visited: Vec<AtomicBool> = (0..n).map(|_| AtomicBool::new(false)).collect();

    // Shared per-iteration state. `best` and `cursor` are the contended
    // cells; padding keeps them off each other's cache lines.
    let best = CachePadded::new(Mutex::new(Best::EMPTY));
    let cursor = CachePadded::new(AtomicUsize::new(0));
    let chosen = AtomicUsize::new(NONE);
    let chosen_dist = AtomicU32::new(0);
    let relax_end = AtomicUsize::new(0);
    let barrier = Barrier::new(threads);

    // Static contiguous slices for the minimum search; one per worker.
    let span = n.div_ceil(threads);

    std::thread::scope(|scope| {
        for tid in 0..threads {
            let dist = &dist;
            let visited = &visited;
            let best = &best;
            let cursor = &cursor;
            let chosen = &chosen;
            let chosen_dist = &chosen_dist;
            let relax_end = &relax_end;
            let barrier = &barrier;

            scope.spawn(move || {
                let lo = (tid * span).min(n);
                let hi = ((tid + 1) * span).min(n);

                for _ in 0..n {
                    // Phase 1: local minimum over this worker's slice.
                    // Strict `<` keeps the lowest index on equal distances.
                    let mut local = Best::EMPTY;
                    for v in lo..hi {
                        if !visited[v].load(Ordering::Relaxed) {
                            let d = dist[v].load(Ordering::Relaxed);
                            if d < local.dist {
                                local = Best { dist: d, node: v };
                            }
                        }
                    }

                    // One lock acquisition per worker per iteration. An empty
                    // local can never win and skips the lock entirely.
                    if local.node != NONE {
                        let mut merged = best.lock().unwrap();
                        if local.key() < merged.key() {
                            *merged = local;
                        }
                    }

                    if barrier.wait().is_leader() {
                        let mut merged = best.lock().unwrap();
                        if merged.node == NONE {
                            // No unvisited vertex with a finite distance is
                            // left; everything still unvisited is unreachable.
                            chosen.store(NONE, Ordering::Relaxed);
                        } else {
                            visited[merged.node].store(true, Ordering::Relaxed);
                            chosen.store(merged.node, Ordering::Relaxed);
                            chosen_dist.store(merged.dist, Ordering::Relaxed);

                            let range = graph.adjacency_range(merged.node);
                            cursor.store(range.start, Ordering::Relaxed);
                            relax_end.store(range.end, Ordering::Relaxed);

                            *merged = Best::EMPTY;
                        }
                    }
                    barrier.wait();

                    let u = chosen.load(Ordering::Relaxed);
                    if u == NONE {
                        // Every worker observes the same leader decision, so
                        // all of them leave the loop in the same iteration.
                        break;
                    }
                    let du = chosen_dist.load(Ordering::Relaxed);

                    // Phase 2: dynamically chunked relaxation of `u`'s row.
                    let end = relax_end.load(Ordering::Relaxed);
                    loop {
                        let begin = cursor.fetch_add(RELAX_CHUNK, Ordering::Relaxed);
                        if begin >= end {
                            break;
                        }
                        let stop = (begin + RELAX_CHUNK).min(end);
                        for slot in begin..stop {
                            let v = graph.target(slot);
                            if visited[v].load(Ordering::Relaxed) {
                                continue;
                            }
                            // Cannot wrap: `du < INFINITY` and weights are
                            // capped (compile-time assertions in the crate
                            // root).
                            let candidate = du + graph.weight(slot);

                            // Lower-only compare-exchange loop. Retrying while
                            // the candidate still improves the slot is what
                            // makes concurrent relaxation race-free.
                            let mut current = dist[v].load(Ordering::Relaxed);
                            while candidate < current {
                                match dist[v].compare_exchange_weak(
                                    current,
                                    candidate,
                                    Ordering::Relaxed,
                                    Ordering::Relaxed,
                                ) {
                                    Ok(_) => break,
                                    Err(now) => current = now,
                                }
                            }
                        }
                    }

                    // Relaxation must be fully finished before any worker
                    // starts the next minimum search.
                    barrier.wait();
                }
            });
        }
    });

    dist.into_iter().map(AtomicU32::into_inner).collect()
}
