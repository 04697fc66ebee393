//! Error types shared by the memory bus and the CPU dispatch loop.

use thiserror::Error;

/// Failure modes of the memory bus itself.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// No registered region covers this address.
    #[error("no memory region mapped at address {0:#06X}")]
    OutOfRange(u16),
}

/// Failure modes of a single [`crate::cpu::Cpu::dispatch`] call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// An opcode handler hit an unmapped memory address.
    #[error(transparent)]
    Bus(#[from] BusError),
    /// The fetched byte has no documented LR35902 encoding.
    #[error("unimplemented opcode {0:#04X}")]
    UnimplementedOpcode(u8),
}
