use tracing::{debug, trace, warn};

use super::{ExecutionError, Stack, ThreadOptions};
use crate::opcode::Opcode;
use crate::types::StackValue;

/// A single execution context.
///
/// A thread owns its value stack and program counter and borrows the
/// bytecode it runs. The code is never copied or modified, so any number of
/// threads may share one buffer, including across OS threads. The borrow
/// also keeps the buffer frozen for as long as a thread can still read it:
///
/// ```compile_fail
/// use cinder_core::vm::Thread;
///
/// let mut code = vec![0x00];
/// let mut thread = Thread::new(&code);
/// code.push(0x00); // cannot mutate `code` while the thread borrows it
/// thread.step().ok();
/// ```
///
/// A thread is driven by one caller at a time; every method takes
/// `&mut self` and runs to completion without yielding.
///
/// # Examples
///
/// ```
/// use cinder_core::vm::{ExecutionError, Thread};
///
/// let code = [0x00, 0x00];
/// let mut thread = Thread::new(&code);
/// assert_eq!(thread.run(), ExecutionError::BytecodeOverflow);
/// assert_eq!(thread.pc(), 2);
/// ```
#[derive(Debug)]
pub struct Thread<'code> {
    stack: Stack<StackValue>,
    pub(super) code: &'code [u8],
    pub(super) pc: isize,
}

impl<'code> Thread<'code> {
    /// Creates a thread at the start of `code` with an empty stack.
    pub fn new(code: &'code [u8]) -> Self {
        Self::with_options(code, ThreadOptions::default())
    }

    pub fn with_options(code: &'code [u8], options: ThreadOptions) -> Self {
        Thread {
            stack: Stack::new(options.max_stack_size),
            code,
            pc: options.start_pc,
        }
    }

    /// The bytecode this thread executes.
    pub fn code(&self) -> &'code [u8] {
        self.code
    }

    /// Offset of the next byte to fetch.
    pub fn pc(&self) -> isize {
        self.pc
    }

    /// Moves the program counter.
    ///
    /// Any value is accepted. An out-of-range counter makes the next fetch
    /// fail without being modified.
    pub fn set_pc(&mut self, pc: isize) {
        self.pc = pc;
    }

    /// Stack contents from bottom to top.
    pub fn stack(&self) -> &[StackValue] {
        self.stack.as_slice()
    }

    /// Pushes onto the stack.
    ///
    /// Fails with [`ExecutionError::StackOverflow`] only when
    /// [`ThreadOptions::max_stack_size`] is set and reached.
    pub fn push(&mut self, value: StackValue) -> Result<(), ExecutionError> {
        self.stack
            .try_push(value)
            // Only a limited stack rejects a push, and only once it is full
            .map_err(|_| ExecutionError::StackOverflow {
                max_size: self.stack.len(),
            })
    }

    pub fn pop(&mut self) -> Option<StackValue> {
        self.stack.pop()
    }

    pub fn peek(&self) -> Option<&StackValue> {
        self.stack.peek()
    }

    /// Fetches one opcode, advances past it and executes it.
    ///
    /// Fails with [`ExecutionError::BytecodeOverflow`] when the program
    /// counter is outside the code; the counter is left as it was. That is
    /// the normal end of a program.
    ///
    /// Opcodes without a handler fail with
    /// [`ExecutionError::OperationUndefined`] after the counter has moved
    /// past the opcode byte. Their operand bytes are not consumed.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let fetched = usize::try_from(self.pc)
            .ok()
            .and_then(|index| self.code.get(index));
        let Some(&byte) = fetched else {
            debug!(pc = self.pc, len = self.code.len(), "end of bytecode");
            return Err(ExecutionError::BytecodeOverflow);
        };
        let at = self.pc;
        self.pc += 1;

        match Opcode::from_byte(byte) {
            Some(Opcode::NoOp) => {
                trace!(pc = at, "NoOp");
                Ok(())
            }
            op => {
                warn!(
                    pc = at,
                    opcode = byte,
                    mnemonic = op.map_or("unknown", |op| op.mnemonic()),
                    "operation undefined"
                );
                Err(ExecutionError::OperationUndefined { opcode: byte })
            }
        }
    }

    /// Steps until an error occurs and returns it.
    ///
    /// This only ever stops on an error, including the benign
    /// [`ExecutionError::BytecodeOverflow`]. Use
    /// [`ExecutionError::is_end_of_program`] to tell a finished program from
    /// a fault.
    pub fn run(&mut self) -> ExecutionError {
        loop {
            if let Err(e) = self.step() {
                return e;
            }
        }
    }

    /// Executes up to `steps` opcodes, stopping at the first error.
    pub fn run_for(&mut self, steps: usize) -> Result<(), ExecutionError> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }
}
