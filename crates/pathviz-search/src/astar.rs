use std::collections::BinaryHeap;

use pathviz_core::manhattan;

use crate::error::SearchError;
use crate::observer::StepObserver;
use crate::run::{Ranked, Run, SearchOutcome, UNREACHABLE};

/// A* with a Manhattan heuristic and unit step cost.
///
/// Entries are keyed by `(f, seq)`. A cell is enqueued only when it is not
/// already in the frontier, so a cell whose g-score improves while queued
/// keeps its old key; its current g-score is used once it is popped. A
/// cell popped earlier may be enqueued again if a cheaper route shows up.
pub(crate) fn astar<O: StepObserver + ?Sized>(
    run: &mut Run<'_, O>,
) -> Result<SearchOutcome, SearchError> {
    let len = run.len();
    let (start, end) = (run.start, run.end);
    let si = run.idx(start);

    let mut g = vec![UNREACHABLE; len];
    let mut in_open = vec![false; len];
    g[si] = 0;

    let mut seq: u64 = 0;
    let mut open: BinaryHeap<Ranked> = BinaryHeap::new();
    open.push(Ranked {
        key: manhattan(start, end),
        seq,
        idx: si,
    });
    in_open[si] = true;

    while let Some(entry) = open.pop() {
        let ci = entry.idx;
        in_open[ci] = false;

        let current = run.grid.pos(ci);
        if current == end {
            return run.backtrace();
        }

        let nbuf = run.take_neighbors(current);
        for &np in nbuf.iter() {
            let ni = run.idx(np);
            let tentative = g[ci] + 1;
            if tentative >= g[ni] {
                continue;
            }
            run.came_from.insert(np, current);
            g[ni] = tentative;
            if !in_open[ni] {
                seq += 1;
                open.push(Ranked {
                    key: tentative + manhattan(np, end),
                    seq,
                    idx: ni,
                });
                in_open[ni] = true;
                run.discover(np)?;
            }
        }
        run.put_neighbors(nbuf);

        if run.expanded(current)?.is_cancel() {
            return Ok(run.cancelled());
        }
    }

    Ok(run.exhausted())
}
