use std::collections::BinaryHeap;

use pathviz_core::manhattan;

use crate::error::SearchError;
use crate::observer::StepObserver;
use crate::run::{Ranked, Run, SearchOutcome};

/// Greedy best-first search: the frontier is ordered by Manhattan distance
/// to the end alone, ties going to the earliest discovered cell. Cells are
/// marked visited when discovered.
pub(crate) fn best_first<O: StepObserver + ?Sized>(
    run: &mut Run<'_, O>,
) -> Result<SearchOutcome, SearchError> {
    let end = run.end;
    let mut visited = vec![false; run.len()];
    let mut seq: u64 = 0;
    let mut open: BinaryHeap<Ranked> = BinaryHeap::new();

    let si = run.idx(run.start);
    visited[si] = true;
    open.push(Ranked {
        key: manhattan(run.start, end),
        seq,
        idx: si,
    });

    while let Some(entry) = open.pop() {
        let current = run.grid.pos(entry.idx);
        if current == end {
            return run.backtrace();
        }

        let nbuf = run.take_neighbors(current);
        for &np in nbuf.iter() {
            let ni = run.idx(np);
            if visited[ni] {
                continue;
            }
            visited[ni] = true;
            seq += 1;
            open.push(Ranked {
                key: manhattan(np, end),
                seq,
                idx: ni,
            });
            run.came_from.insert(np, current);
            run.discover(np)?;
        }
        run.put_neighbors(nbuf);

        if run.expanded(current)?.is_cancel() {
            return Ok(run.cancelled());
        }
    }

    Ok(run.exhausted())
}
