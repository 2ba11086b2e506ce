use cinder::ExecutionError;
use once_cell::sync::Lazy;

/// A program run from `start_pc` until it stops.
pub struct ProgramCase {
    pub name: &'static str,
    /// Bytecode as hex text.
    pub code: &'static str,
    pub start_pc: isize,
    pub stop: ExecutionError,
    pub final_pc: isize,
}

pub static PROGRAM_CASES: Lazy<Vec<ProgramCase>> = Lazy::new(|| {
    vec![
        ProgramCase {
            name: "empty",
            code: "",
            start_pc: 0,
            stop: ExecutionError::BytecodeOverflow,
            final_pc: 0,
        },
        ProgramCase {
            name: "single_noop",
            code: "00",
            start_pc: 0,
            stop: ExecutionError::BytecodeOverflow,
            final_pc: 1,
        },
        ProgramCase {
            name: "noops",
            code: "00 00 00 00",
            start_pc: 0,
            stop: ExecutionError::BytecodeOverflow,
            final_pc: 4,
        },
        ProgramCase {
            name: "start_past_end",
            code: "00 00",
            start_pc: 7,
            stop: ExecutionError::BytecodeOverflow,
            final_pc: 7,
        },
        ProgramCase {
            name: "negative_start",
            code: "00",
            start_pc: -1,
            stop: ExecutionError::BytecodeOverflow,
            final_pc: -1,
        },
        ProgramCase {
            name: "push_is_undefined",
            code: "00 01 2a",
            start_pc: 0,
            stop: ExecutionError::OperationUndefined { opcode: 0x01 },
            final_pc: 2,
        },
        ProgramCase {
            name: "unknown_byte",
            code: "00 00 ff",
            start_pc: 0,
            stop: ExecutionError::OperationUndefined { opcode: 0xFF },
            final_pc: 3,
        },
        ProgramCase {
            name: "skip_bad_prefix",
            code: "ff 00 00",
            start_pc: 1,
            stop: ExecutionError::BytecodeOverflow,
            final_pc: 3,
        },
    ]
});
