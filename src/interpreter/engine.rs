// Execution engine for the Hexagony interpreter

use crate::grid::{AxialPoint, Cell, Direction, Grid};
use crate::interpreter::constants::IP_COUNT;
use crate::interpreter::edges;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::io::{Input, Output};
use crate::interpreter::trace::{DebugLevel, Tracer};
use crate::memory::Memory;
use crate::snapshot::{Snapshot, SnapshotManager};

/// Position and heading of one instruction pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionPointer {
    pub point: AxialPoint,
    pub dir: Direction,
}

impl InstructionPointer {
    /// The six starting IPs: one per corner, each heading clockwise along an edge
    pub fn initial(size: usize) -> [InstructionPointer; IP_COUNT] {
        let s = size as i32;
        let ip = |q, r, dir| InstructionPointer {
            point: AxialPoint::new(q, r),
            dir,
        };
        [
            ip(0, 1 - s, Direction::East),
            ip(s - 1, 1 - s, Direction::SouthEast),
            ip(s - 1, 0, Direction::SouthWest),
            ip(0, s - 1, Direction::West),
            ip(1 - s, s - 1, Direction::NorthWest),
            ip(1 - s, 0, Direction::NorthEast),
        ]
    }
}

/// Result of executing one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continued,
    Halted,
}

/// Result of a bounded run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program executed `@`
    Halted,
    /// The tick budget ran out first
    TickLimitReached,
}

/// Recorded execution history and the position currently shown
#[derive(Debug)]
struct History {
    snapshots: SnapshotManager,
    position: usize,
}

/// The Hexagony interpreter
pub struct Interpreter {
    /// The program hexagon (read-only)
    pub(crate) grid: Grid,

    /// Edge memory shared by all IPs
    pub(crate) memory: Memory,

    /// The six instruction pointers
    pub(crate) ips: [InstructionPointer; IP_COUNT],

    /// Index of the IP that executes the next tick
    pub(crate) active_ip: usize,

    /// Number of ticks executed so far
    pub(crate) tick: u64,

    pub(crate) input: Input,
    pub(crate) output: Output,

    /// Debug trace sink, present when a debug level is enabled
    pub(crate) tracer: Option<Tracer>,

    /// Snapshot history for stepping backward and forward
    history: Option<History>,

    /// Whether `@` has been executed
    finished: bool,
}

impl Interpreter {
    /// Create an interpreter for a program, streaming trace output to stderr
    pub fn new(source: &str, input: Input, debug_level: DebugLevel) -> Self {
        let grid = Grid::parse(source);
        let ips = InstructionPointer::initial(grid.size());
        let tracer = match debug_level {
            DebugLevel::Off => None,
            level => Some(Tracer::stderr(level)),
        };

        tracing::debug!(size = grid.size(), "parsed program grid");

        Interpreter {
            grid,
            memory: Memory::new(),
            ips,
            active_ip: 0,
            tick: 0,
            input,
            output: Output::captured(),
            tracer,
            history: None,
            finished: false,
        }
    }

    /// Replace the output sink
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Replace the debug trace sink
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = match tracer.level() {
            DebugLevel::Off => None,
            _ => Some(tracer),
        };
        self
    }

    /// Record a snapshot after every tick, up to `snapshot_memory_limit` bytes
    pub fn with_history(mut self, snapshot_memory_limit: usize) -> Result<Self, RuntimeError> {
        self.history = Some(History {
            snapshots: SnapshotManager::new(snapshot_memory_limit),
            position: 0,
        });
        self.take_snapshot()?;
        Ok(self)
    }

    /// Run the program until it executes `@`
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        while self.step()? == StepOutcome::Continued {}
        self.flush()
    }

    /// Run until `@` or until `max_ticks` ticks have been executed by this call
    pub fn run_for(&mut self, max_ticks: u64) -> Result<RunOutcome, RuntimeError> {
        let mut outcome = RunOutcome::TickLimitReached;
        for _ in 0..max_ticks {
            if self.step()? == StepOutcome::Halted {
                outcome = RunOutcome::Halted;
                break;
            }
        }
        self.flush()?;
        Ok(outcome)
    }

    /// Execute a single tick
    ///
    /// When history is being recorded and the interpreter was rewound, the
    /// snapshots ahead of the current position are discarded first.
    pub fn step(&mut self) -> Result<StepOutcome, RuntimeError> {
        if self.finished {
            return Ok(StepOutcome::Halted);
        }
        self.discard_future();

        let ip = self.ips[self.active_ip];
        let cell = self.grid.get(ip.point);
        let traced = self.tracer.as_ref().is_some_and(|t| t.triggers(cell.debug));

        if traced {
            self.trace_tick(cell.ch)?;
        }

        tracing::trace!(
            tick = self.tick,
            ip = self.active_ip,
            q = ip.point.q,
            r = ip.point.r,
            opcode = %cell.ch,
            "executing"
        );

        let Some(next_ip) = self.execute(cell.ch)? else {
            tracing::debug!(tick = self.tick, ip = self.active_ip, "program halted");
            self.finished = true;
            self.take_snapshot()?;
            return Ok(StepOutcome::Halted);
        };

        if traced {
            self.trace_after(cell.ch)?;
        }

        self.advance();
        if next_ip != self.active_ip {
            tracing::debug!(from = self.active_ip, to = next_ip, "switching IP");
        }
        self.active_ip = next_ip;
        self.tick += 1;

        self.take_snapshot()?;
        Ok(StepOutcome::Continued)
    }

    /// Move the active IP one cell along its direction, wrapping at the boundary
    pub(crate) fn advance(&mut self) {
        let ip = self.ips[self.active_ip];
        let moved = ip.point + ip.dir.vector();
        let memory = &self.memory;
        self.ips[self.active_ip].point =
            edges::wrap(moved, ip.dir, self.grid.size(), || memory.is_positive());
    }

    fn trace_tick(&mut self, opcode: char) -> Result<(), RuntimeError> {
        let tick = self.tick;
        if let Some(tracer) = self.tracer.as_mut() {
            tracer
                .tick(tick, &self.grid, &self.ips, self.active_ip, opcode)
                .and_then(|_| {
                    if opcode == '@' {
                        tracer.memory(&self.memory)
                    } else {
                        Ok(())
                    }
                })
                .map_err(|source| RuntimeError::Io {
                    opcode,
                    tick,
                    source,
                })?;
        }
        Ok(())
    }

    fn trace_after(&mut self, opcode: char) -> Result<(), RuntimeError> {
        let tick = self.tick;
        if let Some(tracer) = self.tracer.as_mut() {
            tracer
                .after(&self.ips[self.active_ip], &self.memory)
                .map_err(|source| RuntimeError::Io {
                    opcode,
                    tick,
                    source,
                })?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), RuntimeError> {
        let tick = self.tick;
        let opcode = self.current_cell().ch;
        self.output
            .flush()
            .map_err(|source| RuntimeError::Io {
                opcode,
                tick,
                source,
            })
    }

    // ========== History ==========

    /// Take a snapshot of the current execution state
    fn take_snapshot(&mut self) -> Result<(), RuntimeError> {
        let snapshot = Snapshot {
            memory: self.memory.clone(),
            ips: self.ips,
            active_ip: self.active_ip,
            tick: self.tick,
            input: self.input.cursor(),
            output_len: self.output.len(),
            finished: self.finished,
        };

        let Some(history) = self.history.as_mut() else {
            return Ok(());
        };

        if let Err(e) = history.snapshots.push(snapshot) {
            tracing::warn!(
                usage = history.snapshots.memory_usage(),
                limit = history.snapshots.memory_limit(),
                "snapshot budget exhausted"
            );
            // Unrecorded state is rolled back so the shown tick always has a snapshot
            if !history.snapshots.is_empty() {
                let position = history.position;
                self.restore_at(position)?;
            }
            return Err(e);
        }
        history.position = history.snapshots.len() - 1;
        Ok(())
    }

    /// Restore execution state from a snapshot
    fn restore_snapshot(&mut self, snapshot: &Snapshot) {
        self.memory = snapshot.memory.clone();
        self.ips = snapshot.ips;
        self.active_ip = snapshot.active_ip;
        self.tick = snapshot.tick;
        self.input.seek(snapshot.input);
        self.output.rewind(snapshot.output_len);
        self.finished = snapshot.finished;
    }

    /// Forget snapshots ahead of the current position before executing new ticks
    fn discard_future(&mut self) {
        if let Some(history) = self.history.as_mut() {
            history.snapshots.truncate(history.position + 1);
        }
    }

    fn restore_at(&mut self, position: usize) -> Result<(), RuntimeError> {
        let history = self
            .history
            .as_mut()
            .ok_or_else(|| RuntimeError::history("History is not being recorded"))?;
        let snapshot = history
            .snapshots
            .get(position)
            .cloned()
            .ok_or_else(|| RuntimeError::history("Snapshot not found in history"))?;
        history.position = position;
        self.restore_snapshot(&snapshot);
        Ok(())
    }

    /// Step backward in execution (restore previous snapshot)
    pub fn step_backward(&mut self) -> Result<(), RuntimeError> {
        let position = self.history_position();
        if position == 0 {
            return Err(RuntimeError::history(
                "Already at the beginning of execution",
            ));
        }
        self.restore_at(position - 1)
    }

    /// Step forward in execution: replay the next snapshot, or execute the next tick
    pub fn step_forward(&mut self) -> Result<(), RuntimeError> {
        if self.history.is_none() {
            return Err(RuntimeError::history("History is not being recorded"));
        }

        let position = self.history_position();
        if position + 1 < self.total_snapshots() {
            return self.restore_at(position + 1);
        }

        if self.finished {
            return Err(RuntimeError::history("Execution finished"));
        }
        self.step().map(|_| ())
    }

    /// Rewind to the beginning of execution history
    pub fn rewind_to_start(&mut self) -> Result<(), RuntimeError> {
        self.restore_at(0)
    }

    /// Jump to the most recent snapshot
    pub fn jump_to_end(&mut self) -> Result<(), RuntimeError> {
        let last = self.total_snapshots().saturating_sub(1);
        self.restore_at(last)
    }

    /// Get the current history position
    pub fn history_position(&self) -> usize {
        self.history.as_ref().map_or(0, |h| h.position)
    }

    /// Get the total number of snapshots
    pub fn total_snapshots(&self) -> usize {
        self.history.as_ref().map_or(0, |h| h.snapshots.len())
    }

    /// Bytes of snapshot history in use and the configured limit
    pub fn history_usage(&self) -> Option<(usize, usize)> {
        self.history
            .as_ref()
            .map(|h| (h.snapshots.memory_usage(), h.snapshots.memory_limit()))
    }

    // ========== Getter methods for UI ==========

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn ips(&self) -> &[InstructionPointer; IP_COUNT] {
        &self.ips
    }

    pub fn active_ip(&self) -> usize {
        self.active_ip
    }

    /// The cell the active IP will execute next
    pub fn current_cell(&self) -> Cell {
        self.grid.get(self.ips[self.active_ip].point)
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Check if execution has finished
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field("size", &self.grid.size())
            .field("active_ip", &self.active_ip)
            .field("tick", &self.tick)
            .field("finished", &self.finished)
            .finish()
    }
}
