// Integration tests for the Hexagony interpreter

use hextty::grid::{AxialPoint, Direction};
use hextty::interpreter::engine::{Interpreter, RunOutcome};
use hextty::interpreter::errors::RuntimeError;
use hextty::interpreter::io::Input;
use hextty::interpreter::trace::{DebugLevel, Tracer};
use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

fn run_program(source: &str, input: &str) -> Vec<u8> {
    let mut interpreter =
        Interpreter::new(source, Input::from_bytes(input.as_bytes()), DebugLevel::Off);
    interpreter.run().expect("Execution failed");
    interpreter.output().bytes().to_vec()
}

fn run_file(name: &str, input: &str) -> Vec<u8> {
    let path = Path::new("programs").join(name);
    let source = fs::read_to_string(path).expect("Failed to read program file");
    run_program(&source, input)
}

/// Trace sink shared with the test
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

#[test]
fn test_halt_only() {
    let mut interpreter = Interpreter::new("@", Input::empty(), DebugLevel::Off);
    interpreter.run().expect("Execution failed");
    assert!(interpreter.is_finished());
    assert!(interpreter.output().is_empty());
    assert_eq!(interpreter.tick(), 0);
}

#[test]
fn test_byte_output() {
    assert_eq!(run_program("72;@", ""), vec![0x48]);
    assert_eq!(run_file("hi.hxg", ""), b"Hi");
}

#[test]
fn test_integer_input() {
    assert_eq!(run_file("echo_integer.hxg", "42"), b"42");
    assert_eq!(run_file("echo_integer.hxg", "-7"), b"-7");
    assert_eq!(run_file("echo_integer.hxg", "abc"), b"0");
    assert_eq!(run_file("echo_integer.hxg", ""), b"0");
    assert_eq!(
        run_file("echo_integer.hxg", "x 98765432109876543210"),
        b"98765432109876543210"
    );
}

#[test]
fn test_byte_input() {
    assert_eq!(run_file("copy_two_bytes.hxg", "ab"), b"ab");
    // End of input reads as -1, which is written as byte 255
    assert_eq!(run_program(",;@", ""), vec![255]);
}

#[test]
fn test_floor_division() {
    assert_eq!(run_file("floor_division.hxg", ""), b"-4");

    let source = fs::read_to_string("programs/floor_division.hxg").unwrap();
    assert_eq!(run_program(&source.replace(':', "%"), ""), b"1");
}

#[test]
fn test_division_by_zero_stops_the_run() {
    let source = fs::read_to_string("programs/floor_division.hxg").unwrap();
    let mut interpreter =
        Interpreter::new(&source.replace('2', "0"), Input::empty(), DebugLevel::Off);

    let err = interpreter.run().unwrap_err();
    match err {
        RuntimeError::DivisionByZero {
            opcode,
            tick,
            point,
        } => {
            assert_eq!(opcode, ':');
            assert_eq!(tick, 7);
            assert_eq!(point, AxialPoint::ORIGIN);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!interpreter.is_finished());
}

#[test]
fn test_branch_on_sign() {
    assert_eq!(run_file("sign_branch.hxg", "80"), b"P");
    assert_eq!(run_file("sign_branch.hxg", "-5"), b"-5");
    assert_eq!(run_file("sign_branch.hxg", "0"), b"0");
}

#[test]
fn test_jump_skips_a_cell() {
    assert_eq!(run_program("$@H;@", ""), b"H");
}

#[test]
fn test_ip_switch() {
    // IP 1 starts on the '@' that IP 0 would reach next
    let mut interpreter = Interpreter::new("]@", Input::empty(), DebugLevel::Off);
    interpreter.run().expect("Execution failed");
    assert_eq!(interpreter.active_ip(), 1);
    assert_eq!(interpreter.tick(), 1);
    assert_eq!(interpreter.ips()[0].point, AxialPoint::new(1, -1));
}

#[test]
fn test_corner_wrap_from_program() {
    let mut interpreter = Interpreter::new("/......", Input::empty(), DebugLevel::Off);
    interpreter.step().unwrap();
    assert_eq!(interpreter.ips()[0].point, AxialPoint::new(-1, 1));
    assert_eq!(interpreter.ips()[0].dir, Direction::NorthWest);
}

#[test]
fn test_non_halting_program_hits_tick_limit() {
    let mut interpreter = Interpreter::new(".", Input::empty(), DebugLevel::Off);
    assert_eq!(
        interpreter.run_for(1000).unwrap(),
        RunOutcome::TickLimitReached
    );
    assert_eq!(interpreter.ips()[0].point, AxialPoint::ORIGIN);
}

#[test]
fn test_marked_trace() {
    let buffer = SharedBuffer::default();
    let mut interpreter = Interpreter::new("H;`i;@", Input::empty(), DebugLevel::Off)
        .with_tracer(Tracer::new(DebugLevel::Marked, buffer.clone()));
    interpreter.run().expect("Execution failed");

    let trace = buffer.text();
    assert!(trace.contains("Tick 2\n"), "{}", trace);
    assert!(trace.contains("Command: i\n"));
    assert!(trace.contains("IP #0: (Q:  -1, R:   0, Dir:  E) (active)\n"));
    assert!(trace.contains("New direction: E\n"));
    assert!(!trace.contains("Tick 0"));
    assert!(!trace.contains("Tick 3"));
    assert_eq!(interpreter.output().bytes(), b"Hi");
}

#[test]
fn test_full_trace_includes_halt() {
    let buffer = SharedBuffer::default();
    let mut interpreter = Interpreter::new("H;i;@", Input::empty(), DebugLevel::Off)
        .with_tracer(Tracer::new(DebugLevel::All, buffer.clone()));
    interpreter.run().expect("Execution failed");

    let trace = buffer.text();
    for tick in 0..=4 {
        assert!(trace.contains(&format!("Tick {}\n", tick)));
    }
    assert!(trace.contains("Command: @\n"));
    assert!(trace.contains("Q: [  0,  1], R: -1"));
}

#[test]
fn test_unmarked_program_has_no_trace() {
    let buffer = SharedBuffer::default();
    let mut interpreter = Interpreter::new("H;i;@", Input::empty(), DebugLevel::Off)
        .with_tracer(Tracer::new(DebugLevel::Marked, buffer.clone()));
    interpreter.run().expect("Execution failed");
    assert!(buffer.text().is_empty());
}
