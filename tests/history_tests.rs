use hextty::interpreter::engine::{Interpreter, StepOutcome};
use hextty::interpreter::io::Input;
use hextty::interpreter::trace::DebugLevel;
use num_bigint::BigInt;

const HISTORY_LIMIT: usize = 16 * 1024 * 1024;

/// Observable state at one point in history
#[derive(Debug, PartialEq)]
struct State {
    tick: u64,
    active_ip: usize,
    ips: String,
    memory: String,
    output: Vec<u8>,
    finished: bool,
}

fn state(interpreter: &Interpreter) -> State {
    State {
        tick: interpreter.tick(),
        active_ip: interpreter.active_ip(),
        ips: format!("{:?}", interpreter.ips()),
        memory: interpreter.memory().to_debug_string(),
        output: interpreter.output().bytes().to_vec(),
        finished: interpreter.is_finished(),
    }
}

fn recorded(source: &str, input: &str) -> Interpreter {
    Interpreter::new(source, Input::from_bytes(input.as_bytes()), DebugLevel::Off)
        .with_history(HISTORY_LIMIT)
        .expect("Failed to record initial snapshot")
}

#[test]
fn test_backward_then_forward_reproduces_states() {
    let mut interpreter = recorded(",;,;@", "ab");

    let mut states = vec![state(&interpreter)];
    while interpreter.step().unwrap() == StepOutcome::Continued {
        states.push(state(&interpreter));
    }
    states.push(state(&interpreter));
    assert_eq!(interpreter.total_snapshots(), states.len());
    assert_eq!(interpreter.output().bytes(), b"ab");

    for expected in states.iter().rev().skip(1) {
        interpreter.step_backward().unwrap();
        assert_eq!(&state(&interpreter), expected);
    }
    assert_eq!(interpreter.history_position(), 0);

    for expected in states.iter().skip(1) {
        interpreter.step_forward().unwrap();
        assert_eq!(&state(&interpreter), expected);
    }
    assert!(interpreter.is_finished());
}

#[test]
fn test_rewound_run_replays_input() {
    let mut interpreter = recorded(",;,;@", "ab");
    interpreter.run().unwrap();

    interpreter.rewind_to_start().unwrap();
    assert!(interpreter.output().is_empty());
    assert_eq!(interpreter.input().consumed(), b"");

    // Executing fresh ticks from the start reads the same bytes again
    interpreter.run().unwrap();
    assert_eq!(interpreter.output().bytes(), b"ab");
}

#[test]
fn test_stepping_from_the_past_discards_the_future() {
    let mut interpreter = recorded("H;i;@", "");
    interpreter.run().unwrap();
    assert_eq!(interpreter.total_snapshots(), 6);

    interpreter.rewind_to_start().unwrap();
    interpreter.step_forward().unwrap();
    interpreter.step_forward().unwrap();
    assert_eq!(interpreter.history_position(), 2);
    assert_eq!(interpreter.total_snapshots(), 6);

    interpreter.step().unwrap();
    assert_eq!(interpreter.history_position(), 3);
    assert_eq!(interpreter.total_snapshots(), 4);
    assert_eq!(interpreter.output().bytes(), b"H");
}

#[test]
fn test_step_forward_executes_past_recorded_history() {
    let mut interpreter = recorded("H;i;@", "");
    interpreter.step_forward().unwrap();
    interpreter.step_forward().unwrap();
    assert_eq!(interpreter.tick(), 2);
    assert_eq!(interpreter.total_snapshots(), 3);
    assert_eq!(interpreter.output().bytes(), b"H");
}

#[test]
fn test_history_limit() {
    let mut interpreter = Interpreter::new(".", Input::empty(), DebugLevel::Off)
        .with_history(4096)
        .unwrap();
    let err = interpreter.run_for(1_000_000).unwrap_err();
    assert!(err.to_string().contains("Snapshot memory limit exceeded"));

    let usage = interpreter.history_usage().unwrap();
    assert!(usage.0 <= usage.1);
}

#[test]
fn test_exhausted_history_stays_on_last_snapshot() {
    // Room for the initial snapshot and two ticks of a one-cell counter
    let mut interpreter = Interpreter::new(")", Input::empty(), DebugLevel::Off)
        .with_history(1000)
        .unwrap();
    assert!(interpreter.run_for(100).is_err());

    let last = interpreter.history_position();
    assert_eq!(last + 1, interpreter.total_snapshots());
    assert_eq!(interpreter.tick(), last as u64);
    assert_eq!(interpreter.memory().get(), BigInt::from(last));
    let frontier = state(&interpreter);

    for _ in 0..3 {
        assert!(interpreter.step_forward().is_err());
        assert_eq!(state(&interpreter), frontier);
        assert_eq!(interpreter.history_position(), last);
    }

    interpreter.step_backward().unwrap();
    assert_eq!(interpreter.tick(), last as u64 - 1);
    interpreter.step_forward().unwrap();
    assert_eq!(state(&interpreter), frontier);
}
