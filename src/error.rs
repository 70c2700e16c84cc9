use thiserror::Error;

/// The three error kinds the core distinguishes.
///
/// `Break` doubles as a control-flow sentinel: many harnesses treat it as
/// the normal end of a program rather than a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmuError {
    /// The iNES magic is absent or the PRG-ROM size is unsupported.
    #[error("invalid ROM: {0}")]
    InvalidRom(String),

    /// The decoder met a byte that is no documented or recognized
    /// undocumented opcode.
    #[error("unknown opcode: {0:#04X}")]
    UnknownOpcode(u8),

    /// A BRK instruction was executed. `pc` is the program counter after
    /// the instruction.
    #[error("BRK executed, stopped at {pc:#06X}")]
    Break { pc: u16 },
}
