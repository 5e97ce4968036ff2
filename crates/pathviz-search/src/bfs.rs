use std::collections::VecDeque;

use crate::error::SearchError;
use crate::observer::StepObserver;
use crate::run::{Run, SearchOutcome};

/// Breadth-first search. Cells are marked visited when discovered, so each
/// enters the queue at most once.
pub(crate) fn bfs<O: StepObserver + ?Sized>(
    run: &mut Run<'_, O>,
) -> Result<SearchOutcome, SearchError> {
    let mut visited = vec![false; run.len()];
    let mut queue = VecDeque::new();

    visited[run.idx(run.start)] = true;
    queue.push_back(run.start);

    while let Some(current) = queue.pop_front() {
        if current == run.end {
            return run.backtrace();
        }

        let nbuf = run.take_neighbors(current);
        for &np in nbuf.iter() {
            let ni = run.idx(np);
            if visited[ni] {
                continue;
            }
            visited[ni] = true;
            run.came_from.insert(np, current);
            queue.push_back(np);
            run.discover(np)?;
        }
        run.put_neighbors(nbuf);

        if run.expanded(current)?.is_cancel() {
            return Ok(run.cancelled());
        }
    }

    Ok(run.exhausted())
}
