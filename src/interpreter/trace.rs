//! Debug trace output
//!
//! Hexagony programs can ask for a state dump by prefixing a cell with a
//! backtick. The trace is part of the interpreter's user-facing behaviour and
//! is written to its own sink (stderr from the CLI), separately from logging.

use super::engine::InstructionPointer;
use crate::grid::{Grid, DEBUG_MARKER};
use crate::memory::Memory;
use std::io::{self, Write};

/// When to emit a trace for a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebugLevel {
    #[default]
    Off,
    /// Only cells marked with a backtick
    Marked,
    /// Every tick
    All,
}

impl DebugLevel {
    pub fn from_flags(debug: bool, debug_all: bool) -> Self {
        if debug_all {
            DebugLevel::All
        } else if debug {
            DebugLevel::Marked
        } else {
            DebugLevel::Off
        }
    }

    /// Whether a tick executing a cell with the given marker flag is traced
    pub fn triggers(self, marked: bool) -> bool {
        match self {
            DebugLevel::Off => false,
            DebugLevel::Marked => marked,
            DebugLevel::All => true,
        }
    }
}

/// Writes debug traces to a sink
pub struct Tracer {
    level: DebugLevel,
    sink: Box<dyn Write>,
}

impl Tracer {
    pub fn new(level: DebugLevel, sink: impl Write + 'static) -> Self {
        Tracer {
            level,
            sink: Box::new(sink),
        }
    }

    /// Tracer that writes to stderr
    pub fn stderr(level: DebugLevel) -> Self {
        Self::new(level, io::stderr())
    }

    pub fn level(&self) -> DebugLevel {
        self.level
    }

    pub fn triggers(&self, marked: bool) -> bool {
        self.level.triggers(marked)
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.sink, "{}", text)
    }

    /// State before a cell executes: tick, grid, IPs and the command
    pub fn tick(
        &mut self,
        tick: u64,
        grid: &Grid,
        ips: &[InstructionPointer],
        active_ip: usize,
        command: char,
    ) -> io::Result<()> {
        self.line("")?;
        self.line(&format!("Tick {}", tick))?;
        self.line(&grid.to_debug_string())?;
        for (i, ip) in ips.iter().enumerate() {
            self.line(&format_ip(i, ip, i == active_ip))?;
        }
        self.line(&format!("Command: {}", command))
    }

    pub fn memory(&mut self, memory: &Memory) -> io::Result<()> {
        self.line(&memory.to_debug_string())
    }

    /// State after a cell executed
    pub fn after(&mut self, ip: &InstructionPointer, memory: &Memory) -> io::Result<()> {
        self.line(&format!("New direction: {}", ip.dir))?;
        self.memory(memory)?;
        self.sink.flush()
    }
}

impl std::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracer").field("level", &self.level).finish()
    }
}

/// `IP #i: (Q: q, R: r, Dir: d)`, suffixed with ` (active)` for the active IP
pub fn format_ip(index: usize, ip: &InstructionPointer, active: bool) -> String {
    format!(
        "IP #{}: (Q: {:>3}, R: {:>3}, Dir: {:>2}){}",
        index,
        ip.point.q,
        ip.point.r,
        ip.dir,
        if active { " (active)" } else { "" }
    )
}

/// Whether a source contains any trace markers at all
pub fn has_markers(source: &str) -> bool {
    source.contains(DEBUG_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{AxialPoint, Direction};

    #[test]
    fn test_levels() {
        assert_eq!(DebugLevel::from_flags(false, false), DebugLevel::Off);
        assert_eq!(DebugLevel::from_flags(true, false), DebugLevel::Marked);
        assert_eq!(DebugLevel::from_flags(true, true), DebugLevel::All);

        assert!(!DebugLevel::Off.triggers(true));
        assert!(!DebugLevel::Marked.triggers(false));
        assert!(DebugLevel::Marked.triggers(true));
        assert!(DebugLevel::All.triggers(false));
    }

    #[test]
    fn test_ip_line() {
        let ip = InstructionPointer {
            point: AxialPoint::new(0, -2),
            dir: Direction::East,
        };
        assert_eq!(format_ip(0, &ip, true), "IP #0: (Q:   0, R:  -2, Dir:  E) (active)");
        assert_eq!(format_ip(3, &ip, false), "IP #3: (Q:   0, R:  -2, Dir:  E)");
    }

    #[test]
    fn test_marker_detection() {
        assert!(has_markers("ab`c"));
        assert!(!has_markers("abc"));
    }
}
