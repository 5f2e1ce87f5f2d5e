//! Arithmetic opcodes

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::{floor_div_rem, push_digit};
use num_bigint::BigInt;

impl Interpreter {
    pub(crate) fn execute_arithmetic(&mut self, opcode: char) -> Result<(), RuntimeError> {
        let result = match opcode {
            ')' => self.memory.get() + 1,
            '(' => self.memory.get() - 1,
            '~' => -self.memory.get(),
            '+' => self.memory.get_left() + self.memory.get_right(),
            '-' => self.memory.get_left() - self.memory.get_right(),
            '*' => self.memory.get_left() * self.memory.get_right(),
            ':' | '%' => self.divide(opcode)?,
            _ => return Ok(()),
        };
        self.memory.set(result);
        Ok(())
    }

    /// Floored quotient (`:`) or remainder (`%`) of the left and right neighbours
    fn divide(&self, opcode: char) -> Result<BigInt, RuntimeError> {
        let left = self.memory.get_left();
        let right = self.memory.get_right();

        let (div, rem) =
            floor_div_rem(&left, &right).ok_or_else(|| RuntimeError::DivisionByZero {
                opcode,
                tick: self.tick,
                point: self.ips[self.active_ip].point,
            })?;

        Ok(if opcode == ':' { div } else { rem })
    }

    pub(crate) fn execute_digit(&mut self, opcode: char) {
        if let Some(digit) = opcode.to_digit(10) {
            let value = push_digit(&self.memory.get(), digit);
            self.memory.set(value);
        }
    }
}
