use std::{
    thread,
    time::{Duration, Instant},
};

use knightcover_core::{BoardSize, Cell, Grid};
use knightcover_solver::{CancelToken, PassOutcome, ReductionEvent, StepOutcome, SteppedReducer};

use super::{DemoConfig, DemoEvent, DemoOutcome, DemoPhase, Focus, Probe};
use crate::state::DemoMode;

const PACE_SLICE: Duration = Duration::from_millis(10);

/// Runs the demonstration on the calling thread.
///
/// The board is cleared, filled one cell at a time in row-major order, and
/// then reduced with stepped passes. `emit` receives every visible step.
pub(crate) fn run<E>(
    size: BoardSize,
    config: &DemoConfig,
    cancel: &CancelToken,
    mut emit: E,
) -> DemoOutcome
where
    E: FnMut(DemoEvent),
{
    let mut grid = Grid::empty(size);
    emit(DemoEvent {
        grid: grid.clone(),
        phase: DemoPhase::Clearing,
        focus: None,
    });
    if !pace(config.clear_delay, cancel) {
        return DemoOutcome::Abandoned;
    }

    for position in size.positions() {
        if cancel.is_cancelled() {
            return DemoOutcome::Abandoned;
        }
        grid.set(position, Cell::Occupied);
        emit(DemoEvent {
            grid: grid.clone(),
            phase: DemoPhase::Filling,
            focus: Some(Focus {
                position,
                probe: Probe::Placed,
            }),
        });
        if !pace(config.fill_delay, cancel) {
            return DemoOutcome::Abandoned;
        }
    }

    let mut pass = 0;
    loop {
        pass += 1;
        let phase = DemoPhase::Reducing { pass };
        let mut reducer = SteppedReducer::new(grid);
        let outcome = reducer.run(cancel, |grid, event| {
            let (position, probe, delay) = match event {
                ReductionEvent::Vacated(position) => (position, Probe::Vacated, config.probe_delay),
                ReductionEvent::Restored(position) => {
                    (position, Probe::Restored, config.probe_delay)
                }
                ReductionEvent::Visited(step) if step.outcome == StepOutcome::Removed => {
                    (step.position, Probe::Removed, Duration::ZERO)
                }
                ReductionEvent::Visited(_) => return,
            };
            emit(DemoEvent {
                grid: grid.clone(),
                phase,
                focus: Some(Focus { position, probe }),
            });
            // A cancelled wait ends early; the reducer stops at the next cell.
            pace(delay, cancel);
        });
        grid = reducer.into_grid();

        match outcome {
            PassOutcome::Cancelled { .. } => return DemoOutcome::Stopped { grid },
            PassOutcome::Completed { removed } => {
                log::debug!("demo pass {pass} removed {removed} knights");
                if config.mode == DemoMode::SinglePass || removed == 0 {
                    return DemoOutcome::Completed { grid, passes: pass };
                }
            }
        }
    }
}

/// Sleeps for `delay` in short slices. Returns `false` if cancelled.
fn pace(delay: Duration, cancel: &CancelToken) -> bool {
    let deadline = Instant::now() + delay;
    loop {
        if cancel.is_cancelled() {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep(PACE_SLICE.min(deadline - now));
    }
}
