//! A from-scratch interpreter for the Sharp LR35902 (SM83) CPU.
//!
//! This crate implements the register file, ALU, instruction dispatch,
//! and a generic segmented memory bus. It does not know anything about
//! cartridges, video, audio, or the outer run loop; callers drive the
//! CPU by registering memory regions on a [`memory_bus::MemoryBus`] and
//! calling [`cpu::Cpu::dispatch`] in a loop.

pub mod alu;
pub mod cpu;
pub mod error;
pub mod memory_bus;

pub use cpu::Cpu;
pub use error::CpuError;
pub use memory_bus::MemoryBus;
