//! The Sharp LR35902 (SM83) CPU core implementation.

use crate::error::CpuError;
use crate::memory_bus::MemoryBus;
use flags::FlagMask;
use instruction::{CB_INSTRUCTIONS, INSTRUCTIONS};
use log;

// Declare submodules
mod constants;
#[macro_use]
mod ops_macros;
mod flags;
mod instruction;
mod ops_alu;
mod ops_cb;
mod ops_control;
mod ops_load;
mod ops_rot_shift;

// Re-export public constants/types for sibling op modules and callers.
pub use constants::*;
pub use flags::FlagMask as Flags;

/// Type alias for CPU operation results.
pub type CpuResult<T> = Result<T, CpuError>;

/// The Sharp LR35902's register file and execution state.
#[derive(Debug, Clone)]
pub struct Cpu {
    // --- 8-bit Registers ---
    a: u8, // Accumulator
    f: u8, // Flags (ZNHC----)
    b: u8,
    c: u8,
    d: u8,
    e: u8,
    h: u8,
    l: u8,

    // --- 16-bit Registers ---
    sp: u16, // Stack Pointer
    pc: u16, // Program Counter

    // --- CPU State Flags ---
    ime: bool,           // Interrupt Master Enable flag
    halted: bool,        // CPU is in HALT state
    stop_requested: bool, // CPU received STOP instruction

    // --- Internal Timing/Execution State ---
    total_cycles: u64,   // Total T-cycles executed since start
    fetched_opcode: u8,  // Last opcode fetched (for error reporting/debugging)
    instruction_pc: u16, // PC at the start of the current instruction
}

impl Cpu {
    /// Creates a new CPU instance. `skip_boot_rom` selects between the
    /// documented post-boot-ROM register state and an all-zero boot state.
    pub fn new(skip_boot_rom: bool) -> Self {
        let (init_a, init_f, init_bc, init_de, init_hl, init_pc, init_sp) = if skip_boot_rom {
            // Pandocs "Power Up Sequence", post-DMG-boot-ROM values.
            (0x01, 0xB0, 0x0013, 0x00D8, 0x014D, 0x0100, 0xFFFE)
        } else {
            (0x00, 0x00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000)
        };

        Cpu {
            a: init_a,
            f: init_f & 0xF0, // Lower nibble always zero
            b: (init_bc >> 8) as u8,
            c: init_bc as u8,
            d: (init_de >> 8) as u8,
            e: init_de as u8,
            h: (init_hl >> 8) as u8,
            l: init_hl as u8,
            sp: init_sp,
            pc: init_pc,
            ime: false,
            halted: false,
            stop_requested: false,
            total_cycles: 0,
            fetched_opcode: 0,
            instruction_pc: 0,
        }
    }

    /// Executes a single instruction: fetch, decode, execute, account cycles.
    /// Returns the number of T-cycles consumed by the instruction.
    pub fn dispatch(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        if self.halted || self.stop_requested {
            self.total_cycles = self.total_cycles.wrapping_add(4);
            return Ok(4);
        }

        self.instruction_pc = self.pc;
        self.fetched_opcode = self.read_byte_at_pc(bus)?;

        let instruction = &INSTRUCTIONS[self.fetched_opcode as usize];
        self.pc = self.pc.wrapping_add(instruction.length as u16);

        match (instruction.execute)(self, bus) {
            Ok(additional_cycles) => {
                let base_cycles = instruction.cycles as u32;
                let total = base_cycles + additional_cycles as u32;
                self.total_cycles = self.total_cycles.wrapping_add(total as u64);
                Ok(total)
            }
            Err(err) => {
                log::error!(
                    "CPU error at PC={:#06X} (opcode {:#04X}): {}",
                    self.instruction_pc,
                    self.fetched_opcode,
                    err
                );
                self.total_cycles = self
                    .total_cycles
                    .wrapping_add(instruction.cycles as u64);
                Err(err)
            }
        }
    }

    // --- Memory Access Helpers ---
    #[inline(always)]
    fn read_byte_at_pc(&self, bus: &MemoryBus) -> CpuResult<u8> {
        Ok(bus.read_byte(self.pc)?)
    }
    #[inline(always)]
    fn read_d8(&self, bus: &MemoryBus) -> CpuResult<u8> {
        Ok(bus.read_byte(self.instruction_pc.wrapping_add(1))?)
    }
    #[inline(always)]
    fn read_d16(&self, bus: &MemoryBus) -> CpuResult<u16> {
        Ok(bus.read_word(self.instruction_pc.wrapping_add(1))?)
    }
    #[inline(always)]
    fn read_r8(&self, bus: &MemoryBus) -> CpuResult<i8> {
        Ok(crate::alu::signed8(bus.read_byte(self.instruction_pc.wrapping_add(1))?))
    }

    // --- Stack Operations ---
    #[inline(always)]
    fn push_word(&mut self, value: u16, bus: &mut MemoryBus) -> CpuResult<()> {
        self.sp = self.sp.wrapping_sub(2);
        bus.write_word(value, self.sp)?;
        Ok(())
    }
    #[inline(always)]
    fn pop_word(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = bus.read_word(self.sp)?;
        self.sp = self.sp.wrapping_add(2);
        Ok(value)
    }

    /// Pushes a 16-bit value onto the stack, mirroring `PUSH rr`.
    pub fn push(&mut self, bus: &mut MemoryBus, value: u16) -> CpuResult<()> {
        self.push_word(value, bus)
    }

    /// Pops a 16-bit value off the stack, mirroring `POP rr`.
    pub fn pop(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.pop_word(bus)
    }

    // --- Register-Pair Helpers ---
    #[inline(always)]
    fn get_af(&self) -> u16 {
        ((self.a as u16) << 8) | (self.f as u16)
    }
    #[inline(always)]
    fn set_af(&mut self, value: u16) {
        self.a = (value >> 8) as u8;
        self.f = (value & 0x00F0) as u8;
    }
    #[inline(always)]
    fn get_bc(&self) -> u16 {
        u16::from_le_bytes([self.c, self.b])
    }
    #[inline(always)]
    fn set_bc(&mut self, value: u16) {
        let bytes = value.to_le_bytes();
        self.c = bytes[0];
        self.b = bytes[1];
    }
    #[inline(always)]
    fn get_de(&self) -> u16 {
        u16::from_le_bytes([self.e, self.d])
    }
    #[inline(always)]
    fn set_de(&mut self, value: u16) {
        let bytes = value.to_le_bytes();
        self.e = bytes[0];
        self.d = bytes[1];
    }
    #[inline(always)]
    fn get_hl(&self) -> u16 {
        u16::from_le_bytes([self.l, self.h])
    }
    #[inline(always)]
    fn set_hl(&mut self, value: u16) {
        let bytes = value.to_le_bytes();
        self.l = bytes[0];
        self.h = bytes[1];
    }

    // --- Flag Helpers ---
    #[inline(always)]
    fn set_flag(&mut self, flag_mask: u8, set: bool) {
        if set {
            self.f |= flag_mask;
        } else {
            self.f &= !flag_mask;
        }
        self.f &= 0xF0;
    }
    #[inline(always)]
    fn get_flag(&self, flag_mask: u8) -> bool {
        (self.f & flag_mask) != 0
    }

    /// Copies the flags named by `mask` from `result` into F, leaving the
    /// rest untouched. The sole flag-update path for ALU instructions.
    #[inline(always)]
    fn set_flags(&mut self, mask: FlagMask, result: &crate::alu::AluResult) {
        if mask.contains(FlagMask::Z) {
            self.set_flag(FLAG_Z, result.z);
        }
        if mask.contains(FlagMask::N) {
            self.set_flag(FLAG_N, result.n);
        }
        if mask.contains(FlagMask::H) {
            self.set_flag(FLAG_H, result.h);
        }
        if mask.contains(FlagMask::C) {
            self.set_flag(FLAG_C, result.c);
        }
    }

    // --- ALU and Bit Operation Helpers ---
    // Shared by ops_alu.rs, ops_rot_shift.rs and ops_cb.rs. Each wraps a
    // pure `alu::*` primitive and copies its flags back via `set_flags`.
    fn inc_u8(&mut self, value: u8) -> u8 {
        let result = crate::alu::add8(value, 1, 0);
        self.set_flags(FlagMask::Z | FlagMask::N | FlagMask::H, &result);
        result.low()
    }
    fn dec_u8(&mut self, value: u8) -> u8 {
        let result = crate::alu::sub8(value, 1, 0);
        self.set_flags(FlagMask::Z | FlagMask::N | FlagMask::H, &result);
        result.low()
    }
    fn add_hl(&mut self, value: u16) {
        let result = crate::alu::add16(self.get_hl(), value);
        self.set_hl(result.value);
        self.set_flags(FlagMask::N | FlagMask::H | FlagMask::C, &result);
    }
    fn add_a(&mut self, value: u8, use_carry: bool) {
        let carry_in = if use_carry && self.get_flag(FLAG_C) { 1 } else { 0 };
        let result = crate::alu::add8(self.a, value, carry_in);
        self.a = result.low();
        self.set_flags(FlagMask::all(), &result);
    }
    fn sub_a(&mut self, value: u8, use_carry: bool) {
        let carry_in = if use_carry && self.get_flag(FLAG_C) { 1 } else { 0 };
        let result = crate::alu::sub8(self.a, value, carry_in);
        self.a = result.low();
        self.set_flags(FlagMask::all(), &result);
    }
    fn and_a(&mut self, value: u8, _use_carry: bool) {
        self.a &= value;
        self.set_flag(FLAG_Z, self.a == 0);
        self.set_flag(FLAG_N, false);
        self.set_flag(FLAG_H, true);
        self.set_flag(FLAG_C, false);
    }
    fn xor_a(&mut self, value: u8, _use_carry: bool) {
        self.a ^= value;
        self.set_flag(FLAG_Z, self.a == 0);
        self.set_flag(FLAG_N | FLAG_H | FLAG_C, false);
    }
    fn or_a(&mut self, value: u8, _use_carry: bool) {
        self.a |= value;
        self.set_flag(FLAG_Z, self.a == 0);
        self.set_flag(FLAG_N | FLAG_H | FLAG_C, false);
    }
    fn cp_a(&mut self, value: u8, _use_carry: bool) {
        let saved = self.a;
        self.sub_a(value, false);
        self.a = saved;
    }
    fn rlc(&mut self, value: u8) -> u8 {
        let result = crate::alu::rlc(value);
        self.set_flags(FlagMask::all(), &result);
        result.low()
    }
    fn rrc(&mut self, value: u8) -> u8 {
        let result = crate::alu::rrc(value);
        self.set_flags(FlagMask::all(), &result);
        result.low()
    }
    fn rl(&mut self, value: u8) -> u8 {
        let carry_in = self.get_flag(FLAG_C) as u8;
        let result = crate::alu::rl(value, carry_in);
        self.set_flags(FlagMask::all(), &result);
        result.low()
    }
    fn rr(&mut self, value: u8) -> u8 {
        let carry_in = self.get_flag(FLAG_C) as u8;
        let result = crate::alu::rr(value, carry_in);
        self.set_flags(FlagMask::all(), &result);
        result.low()
    }
    fn sla(&mut self, value: u8) -> u8 {
        let result = crate::alu::sla(value);
        self.set_flags(FlagMask::all(), &result);
        result.low()
    }
    fn sra(&mut self, value: u8) -> u8 {
        let result = crate::alu::sra(value);
        self.set_flags(FlagMask::all(), &result);
        result.low()
    }
    fn swap(&mut self, value: u8) -> u8 {
        let result = crate::alu::swap(value);
        self.set_flags(FlagMask::all(), &result);
        result.low()
    }
    fn srl(&mut self, value: u8) -> u8 {
        let result = crate::alu::srl(value);
        self.set_flags(FlagMask::all(), &result);
        result.low()
    }
    fn op_bit(&mut self, bit: u8, value: u8) {
        let result = crate::alu::bit(value, bit);
        self.set_flags(FlagMask::Z | FlagMask::N | FlagMask::H, &result);
    }
    /// BCD-adjusts A after an 8-bit add or subtract. See component design
    /// note on DAA: the adjustment is derived from N/H/C and A's nibbles,
    /// then applied by addition or subtraction depending on N.
    fn daa(&mut self) {
        let mut adjustment = 0u8;
        let mut set_carry = false;
        let n_flag = self.get_flag(FLAG_N);
        let h_flag = self.get_flag(FLAG_H);
        let c_flag = self.get_flag(FLAG_C);
        if !n_flag {
            if c_flag || self.a > 0x99 {
                adjustment |= 0x60;
                set_carry = true;
            }
            if h_flag || (self.a & 0x0F) > 0x09 {
                adjustment |= 0x06;
            }
            self.a = self.a.wrapping_add(adjustment);
        } else {
            if c_flag {
                adjustment |= 0x60;
                set_carry = true;
            }
            if h_flag {
                adjustment |= 0x06;
            }
            self.a = self.a.wrapping_sub(adjustment);
        }
        self.set_flag(FLAG_Z, self.a == 0);
        self.set_flag(FLAG_H, false);
        self.set_flag(FLAG_C, set_carry);
    }

    // --- Public accessors ---
    #[inline(always)]
    pub fn pc(&self) -> u16 {
        self.pc
    }
    #[inline(always)]
    pub fn sp(&self) -> u16 {
        self.sp
    }
    #[inline(always)]
    pub fn registers(&self) -> (u8, u8, u8, u8, u8, u8, u8, u8) {
        (
            self.a, self.f, self.b, self.c, self.d, self.e, self.h, self.l,
        )
    }
    #[inline(always)]
    pub fn ime(&self) -> bool {
        self.ime
    }
    #[inline(always)]
    pub fn halted(&self) -> bool {
        self.halted
    }
    #[inline(always)]
    pub fn stopped(&self) -> bool {
        self.stop_requested
    }
    #[inline(always)]
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }
    #[inline(always)]
    pub fn flag_z(&self) -> bool {
        self.get_flag(FLAG_Z)
    }
    #[inline(always)]
    pub fn flag_n(&self) -> bool {
        self.get_flag(FLAG_N)
    }
    #[inline(always)]
    pub fn flag_h(&self) -> bool {
        self.get_flag(FLAG_H)
    }
    #[inline(always)]
    pub fn flag_c(&self) -> bool {
        self.get_flag(FLAG_C)
    }

    // --- Debugging helpers ---
    /// Formats the instruction at `address` as assembly text, returning it
    /// alongside its encoded length in bytes. Does not execute anything.
    pub fn disassemble_instruction(&self, address: u16, bus: &MemoryBus) -> (String, u8) {
        let opcode = match bus.read_byte(address) {
            Ok(b) => b,
            Err(_) => return (format!("DB {:#04X} (unmapped)", address), 1),
        };
        if opcode == 0xCB {
            let cb_opcode = bus.read_byte(address.wrapping_add(1)).unwrap_or(0);
            let cb_instr = &CB_INSTRUCTIONS[cb_opcode as usize];
            (cb_instr.mnemonic.to_string(), 2)
        } else {
            let instr = &INSTRUCTIONS[opcode as usize];
            let operand_str = match instr.length {
                2 => {
                    let d8 = bus.read_byte(address.wrapping_add(1)).unwrap_or(0);
                    if instr.mnemonic.contains("r8") {
                        format!("{:+}", d8 as i8)
                    } else {
                        format!("{:#04X}", d8)
                    }
                }
                3 => {
                    let lo = bus.read_byte(address.wrapping_add(1)).unwrap_or(0);
                    let hi = bus.read_byte(address.wrapping_add(2)).unwrap_or(0);
                    format!("{:#06X}", u16::from_le_bytes([lo, hi]))
                }
                _ => String::new(),
            };
            let formatted = instr
                .mnemonic
                .replace("d16", &operand_str)
                .replace("a16", &operand_str)
                .replace("d8", &operand_str)
                .replace("r8", &operand_str);
            (formatted, instr.length)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_bus::RamRegion;

    fn setup() -> (Cpu, MemoryBus) {
        let mut bus = MemoryBus::new();
        bus.register(Box::new(RamRegion::new(0x10000)), 0x0000);
        (Cpu::new(false), bus)
    }

    #[test]
    fn boot_and_nop() {
        let (mut cpu, mut bus) = setup();
        bus.write_byte(0x00, 0x0000).unwrap();
        let cycles = cpu.dispatch(&mut bus).unwrap();
        assert_eq!(cycles, 4, "cycles");
        assert_eq!(cpu.pc(), 1, "pc");
    }

    #[test]
    fn inc_b_sets_zero_clear() {
        let (mut cpu, mut bus) = setup();
        bus.write_byte(0x04, 0x0000).unwrap(); // INC B
        let cycles = cpu.dispatch(&mut bus).unwrap();
        assert_eq!(cycles, 4, "cycles");
        assert_eq!(cpu.registers().2, 1, "b");
        assert!(!cpu.flag_z(), "z");
        assert!(!cpu.flag_n(), "n");
        assert!(!cpu.flag_h(), "h");
    }

    #[test]
    fn jr_nz_taken_and_untaken() {
        let (mut cpu, mut bus) = setup();
        bus.write_byte(0x20, 0x0000).unwrap(); // JR NZ, r8
        bus.write_byte(0x04, 0x0001).unwrap();
        let cycles = cpu.dispatch(&mut bus).unwrap();
        assert_eq!(cycles, 12, "taken cycles");
        assert_eq!(cpu.pc(), 6, "taken pc");

        // Force Z and re-run the same encoding: branch not taken.
        cpu.set_flag(FLAG_Z, true);
        bus.write_byte(0x20, 6).unwrap();
        bus.write_byte(0x00, 7).unwrap();
        let cycles = cpu.dispatch(&mut bus).unwrap();
        assert_eq!(cycles, 8, "untaken cycles");
        assert_eq!(cpu.pc(), 8, "untaken pc");
    }

    #[test]
    fn ret_nz_pops_pc() {
        let (mut cpu, mut bus) = setup();
        bus.write_byte(0xC0, 0x0000).unwrap(); // RET NZ
        cpu.sp = 8;
        bus.write_byte(0x55, 8).unwrap();
        bus.write_byte(0xAA, 9).unwrap();
        let cycles = cpu.dispatch(&mut bus).unwrap();
        assert_eq!(cycles, 20, "cycles");
        assert_eq!(cpu.sp(), 10, "sp");
        assert_eq!(cpu.pc(), 0xAA55, "pc");
    }

    #[test]
    fn push_pop_round_trip() {
        let (mut cpu, mut bus) = setup();
        cpu.sp = 8;
        cpu.push(&mut bus, 0xAA55).unwrap();
        assert_eq!(cpu.sp(), 6, "sp after push");
        assert_eq!(bus.read_word(6).unwrap(), 0xAA55, "stack contents");
        let value = cpu.pop(&mut bus).unwrap();
        assert_eq!(value, 0xAA55, "popped value");
        assert_eq!(cpu.sp(), 8, "sp after pop");
    }

    #[test]
    fn cb_rlc_b() {
        let (mut cpu, mut bus) = setup();
        bus.write_byte(0xCB, 0x0000).unwrap();
        bus.write_byte(0x00, 0x0001).unwrap(); // RLC B
        cpu.b = 0x08;
        let cycles = cpu.dispatch(&mut bus).unwrap();
        assert_eq!(cpu.pc(), 2, "pc");
        assert_eq!(cpu.b, 0x10, "b");
        assert_eq!(cycles, 8, "cycles");
        assert!(!cpu.flag_c(), "c");
    }

    #[test]
    fn cb_rlc_hlp_costs_16() {
        let (mut cpu, mut bus) = setup();
        bus.write_byte(0xCB, 0x0000).unwrap();
        bus.write_byte(0x06, 0x0001).unwrap(); // RLC (HL)
        cpu.set_hl(0x20);
        bus.write_byte(0x80, 0x20).unwrap();
        let cycles = cpu.dispatch(&mut bus).unwrap();
        assert_eq!(cycles, 16, "cycles");
        assert_eq!(bus.read_byte(0x20).unwrap(), 0x01, "(HL)");
        assert!(cpu.flag_c(), "c");
    }

    #[test]
    fn daa_after_bcd_add() {
        let (mut cpu, mut bus) = setup();
        bus.write_byte(0x27, 0x0000).unwrap(); // DAA
        cpu.a = 0x3C;
        cpu.set_flag(FLAG_N, false);
        cpu.set_flag(FLAG_H, false);
        cpu.set_flag(FLAG_C, false);
        cpu.dispatch(&mut bus).unwrap();
        assert_eq!(cpu.a, 0x42, "a");
    }

    #[test]
    fn register_pair_round_trip() {
        let (mut cpu, _bus) = setup();
        cpu.set_bc(0xBEEF);
        assert_eq!(cpu.get_bc(), 0xBEEF);
        cpu.set_de(0xCAFE);
        assert_eq!(cpu.get_de(), 0xCAFE);
        cpu.set_hl(0x1234);
        assert_eq!(cpu.get_hl(), 0x1234);
    }

    #[test]
    fn disassemble_formats_operands() {
        let (cpu, mut bus) = setup();
        bus.write_byte(0x06, 0).unwrap(); // LD B,d8
        bus.write_byte(0x2A, 1).unwrap();
        let (text, len) = cpu.disassemble_instruction(0, &bus);
        assert_eq!(text, "LD B,0x2A");
        assert_eq!(len, 2);
    }

    #[test]
    fn unimplemented_opcode_is_typed_error() {
        let (mut cpu, mut bus) = setup();
        bus.write_byte(0xD3, 0x0000).unwrap(); // Invalid opcode
        let err = cpu.dispatch(&mut bus).unwrap_err();
        assert_eq!(err, CpuError::UnimplementedOpcode(0xD3));
    }
}
