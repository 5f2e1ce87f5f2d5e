//! Opcode dispatch
//!
//! Each tick executes the character under the active IP. The handlers live in
//! `impl Interpreter` blocks grouped by concern and return the index of the IP
//! that runs the next tick.

pub mod arithmetic;
pub mod control;
pub mod io;
pub mod navigation;

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use num_bigint::BigInt;

impl Interpreter {
    /// Execute `opcode` for the active IP
    ///
    /// Returns the IP to activate after the move, or `None` when the program halts.
    pub(crate) fn execute(&mut self, opcode: char) -> Result<Option<usize>, RuntimeError> {
        let active = self.active_ip;

        match opcode {
            '.' => {}
            '@' => return Ok(None),

            ')' | '(' | '+' | '-' | '*' | '~' | ':' | '%' => self.execute_arithmetic(opcode)?,

            '{' | '}' | '=' | '"' | '\'' | '^' | '&' => self.execute_navigation(opcode),

            ',' | ';' | '?' | '!' => self.execute_io(opcode)?,

            '_' | '|' | '/' | '\\' | '<' | '>' | '$' => self.execute_branch(opcode),
            ']' | '[' | '#' => return Ok(Some(self.select_ip(opcode))),

            '0'..='9' => self.execute_digit(opcode),
            other => self.memory.set(BigInt::from(u32::from(other))),
        }

        Ok(Some(active))
    }
}
