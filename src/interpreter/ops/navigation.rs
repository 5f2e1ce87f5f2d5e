//! Memory pointer movement

use crate::interpreter::engine::Interpreter;

impl Interpreter {
    pub(crate) fn execute_navigation(&mut self, opcode: char) {
        let memory = &mut self.memory;
        match opcode {
            '{' => memory.move_left(),
            '}' => memory.move_right(),
            '=' => memory.reverse(),
            '"' => {
                memory.reverse();
                memory.move_right();
                memory.reverse();
            }
            '\'' => {
                memory.reverse();
                memory.move_left();
                memory.reverse();
            }
            '^' => {
                if memory.is_positive() {
                    memory.move_right();
                } else {
                    memory.move_left();
                }
            }
            '&' => {
                let value = if memory.is_positive() {
                    memory.get_right()
                } else {
                    memory.get_left()
                };
                memory.set(value);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::engine::Interpreter;
    use crate::interpreter::io::Input;
    use crate::interpreter::trace::DebugLevel;
    use num_bigint::BigInt;

    fn interpreter() -> Interpreter {
        Interpreter::new("@", Input::empty(), DebugLevel::Off)
    }

    #[test]
    fn test_backward_moves_undo_forward_moves() {
        let mut interp = interpreter();
        let start = interp.memory.pointer();

        interp.execute_navigation('{');
        interp.execute_navigation('"');
        assert_eq!(interp.memory.pointer(), start);

        interp.execute_navigation('}');
        interp.execute_navigation('\'');
        assert_eq!(interp.memory.pointer(), start);
    }

    #[test]
    fn test_reverse_swaps_neighbours() {
        let mut interp = interpreter();
        interp.execute_navigation('{');
        interp.memory.set(BigInt::from(9));
        interp.execute_navigation('"');

        assert_eq!(interp.memory.get_left(), BigInt::from(9));
        interp.execute_navigation('=');
        assert_eq!(interp.memory.get_right(), BigInt::from(9));
    }

    #[test]
    fn test_conditional_move() {
        let mut zero = interpreter();
        let mut left = interpreter();
        zero.execute_navigation('^');
        left.execute_navigation('{');
        assert_eq!(zero.memory.pointer(), left.memory.pointer());

        let mut positive = interpreter();
        let mut right = interpreter();
        positive.memory.set(BigInt::from(1));
        positive.execute_navigation('^');
        right.execute_navigation('}');
        assert_eq!(positive.memory.pointer(), right.memory.pointer());
    }

    #[test]
    fn test_conditional_copy() {
        let mut interp = interpreter();
        interp.execute_navigation('{');
        interp.memory.set(BigInt::from(5));
        interp.execute_navigation('"');

        // Current edge is zero, so the left neighbour is copied
        interp.execute_navigation('&');
        assert_eq!(interp.memory.get(), BigInt::from(5));

        // Now positive, so the right neighbour (unwritten) is copied
        interp.execute_navigation('&');
        assert_eq!(interp.memory.get(), BigInt::from(0));
    }
}
