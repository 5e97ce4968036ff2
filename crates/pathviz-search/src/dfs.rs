use crate::error::SearchError;
use crate::observer::StepObserver;
use crate::run::{Run, SearchOutcome};

/// Depth-first search with an explicit stack.
///
/// Cells are marked visited when popped, not when pushed, so the same cell
/// may sit on the stack several times; repeats are skipped when popped. A
/// neighbour's predecessor is (re)assigned on every push while it is still
/// unvisited, so the last cell to push it wins. The path found is not
/// necessarily the shortest.
pub(crate) fn dfs<O: StepObserver + ?Sized>(
    run: &mut Run<'_, O>,
) -> Result<SearchOutcome, SearchError> {
    let mut visited = vec![false; run.len()];
    let mut stack = vec![run.start];

    while let Some(current) = stack.pop() {
        if current == run.end {
            return run.backtrace();
        }

        let ci = run.idx(current);
        if visited[ci] {
            continue;
        }
        visited[ci] = true;

        let nbuf = run.take_neighbors(current);
        for &np in nbuf.iter() {
            if !visited[run.idx(np)] {
                run.came_from.insert(np, current);
                run.discover(np)?;
            }
            stack.push(np);
        }
        run.put_neighbors(nbuf);

        if run.expanded(current)?.is_cancel() {
            return Ok(run.cancelled());
        }
    }

    Ok(run.exhausted())
}

#[cfg(test)]
mod tests {
    use pathviz_core::{CellState, Grid, Pos};

    use crate::{NoopObserver, Strategy};

    #[test]
    fn later_pushes_overwrite_predecessors() {
        let mut g = Grid::parse(
            "
            S..
            ...
            E..
            ",
        )
        .unwrap();
        g.recompute_all_neighbors();
        let outcome = Strategy::DepthFirst
            .run_with_stats(&mut g, Pos::new(0, 0), Pos::new(2, 0), &mut NoopObserver)
            .unwrap();
        assert!(outcome.found);
        // The wander through the right-hand columns re-parents (1,0) to
        // (1,1), so the path takes the long way round.
        assert_eq!(outcome.path_len, Some(6));
        assert_eq!(outcome.expanded, 6);
        assert_eq!(g.to_string(), "S**\n***\nEoo");
    }

    #[test]
    fn adjacent_end_is_reached() {
        let mut g = Grid::parse("SE\n..").unwrap();
        g.recompute_all_neighbors();
        let outcome = Strategy::DepthFirst
            .run_with_stats(&mut g, Pos::new(0, 0), Pos::new(0, 1), &mut NoopObserver)
            .unwrap();
        assert_eq!(outcome.path_len, Some(1));
        assert_eq!(g.count(CellState::Path), 0);
    }
}
