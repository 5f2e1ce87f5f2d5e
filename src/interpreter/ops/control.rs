//! Direction changes and IP selection

use crate::interpreter::constants::IP_COUNT;
use crate::interpreter::engine::Interpreter;
use crate::memory::value::to_ip_index;

impl Interpreter {
    /// Mirrors, branches and the `$` jump
    pub(crate) fn execute_branch(&mut self, opcode: char) {
        if opcode == '$' {
            self.advance();
            return;
        }

        let positive = self.memory.is_positive();
        let ip = &mut self.ips[self.active_ip];
        ip.dir = match opcode {
            '_' => ip.dir.reflect_at_underscore(),
            '|' => ip.dir.reflect_at_pipe(),
            '/' => ip.dir.reflect_at_slash(),
            '\\' => ip.dir.reflect_at_backslash(),
            '<' => ip.dir.reflect_at_less_than(positive),
            '>' => ip.dir.reflect_at_greater_than(positive),
            _ => ip.dir,
        };
    }

    /// The IP that runs after `]`, `[` or `#`
    pub(crate) fn select_ip(&self, opcode: char) -> usize {
        match opcode {
            ']' => (self.active_ip + 1) % IP_COUNT,
            '[' => (self.active_ip + IP_COUNT - 1) % IP_COUNT,
            '#' => to_ip_index(&self.memory.get()),
            _ => self.active_ip,
        }
    }
}
