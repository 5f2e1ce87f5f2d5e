//! Input and output opcodes

use crate::interpreter::constants::END_OF_INPUT;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::to_output_byte;
use num_bigint::BigInt;

impl Interpreter {
    pub(crate) fn execute_io(&mut self, opcode: char) -> Result<(), RuntimeError> {
        let tick = self.tick;
        let io_error = |source| RuntimeError::Io {
            opcode,
            tick,
            source,
        };

        match opcode {
            ',' => {
                let value = match self.input.read_byte().map_err(io_error)? {
                    Some(byte) => BigInt::from(byte),
                    None => BigInt::from(END_OF_INPUT),
                };
                self.memory.set(value);
            }
            '?' => {
                let value = self.input.read_integer().map_err(io_error)?;
                self.memory.set(value);
            }
            ';' => {
                let byte = to_output_byte(&self.memory.get());
                self.output.write_byte(byte).map_err(io_error)?;
            }
            '!' => {
                let text = self.memory.get().to_string();
                self.output.write_str(&text).map_err(io_error)?;
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::engine::Interpreter;
    use crate::interpreter::io::Input;
    use crate::interpreter::trace::DebugLevel;
    use num_bigint::BigInt;

    fn interpreter(input: &str) -> Interpreter {
        Interpreter::new("@", Input::from_bytes(input.as_bytes()), DebugLevel::Off)
    }

    #[test]
    fn test_read_byte_and_end_of_input() {
        let mut interp = interpreter("A");
        interp.execute_io(',').unwrap();
        assert_eq!(interp.memory.get(), BigInt::from(65));
        interp.execute_io(',').unwrap();
        assert_eq!(interp.memory.get(), BigInt::from(-1));
    }

    #[test]
    fn test_integer_then_byte() {
        let mut interp = interpreter("x-12,");
        interp.execute_io('?').unwrap();
        assert_eq!(interp.memory.get(), BigInt::from(-12));
        interp.execute_io(',').unwrap();
        assert_eq!(interp.memory.get(), BigInt::from(b','));
    }

    #[test]
    fn test_byte_output_wraps() {
        let mut interp = interpreter("");
        interp.memory.set(BigInt::from(-191));
        interp.execute_io(';').unwrap();
        interp.memory.set(BigInt::from(321));
        interp.execute_io(';').unwrap();
        assert_eq!(interp.output.bytes(), b"AA");
    }

    #[test]
    fn test_decimal_output() {
        let mut interp = interpreter("");
        interp.memory.set(BigInt::from(-1234567890123456789i64) * 1000u32);
        interp.execute_io('!').unwrap();
        assert_eq!(interp.output.bytes(), b"-1234567890123456789000");
    }
}
