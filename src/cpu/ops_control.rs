// src/cpu/ops_control.rs

use super::instruction::CB_INSTRUCTIONS;
use super::{Cpu, CpuResult, constants::*};
use crate::error::CpuError;
use crate::memory_bus::MemoryBus;

impl Cpu {
    pub fn op_nop(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        Ok(0)
    }

    pub fn handle_invalid_opcode(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        Err(CpuError::UnimplementedOpcode(self.fetched_opcode))
    }

    // --- Jumps ---
    pub fn op_jp_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.pc = self.read_d16(bus)?;
        Ok(0)
    }
    pub fn op_jp_nz_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let target = self.read_d16(bus)?;
        if !self.flag_z() {
            self.pc = target;
            Ok(4)
        } else {
            Ok(0)
        }
    }
    pub fn op_jp_z_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let target = self.read_d16(bus)?;
        if self.flag_z() {
            self.pc = target;
            Ok(4)
        } else {
            Ok(0)
        }
    }
    pub fn op_jp_nc_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let target = self.read_d16(bus)?;
        if !self.flag_c() {
            self.pc = target;
            Ok(4)
        } else {
            Ok(0)
        }
    }
    pub fn op_jp_c_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let target = self.read_d16(bus)?;
        if self.flag_c() {
            self.pc = target;
            Ok(4)
        } else {
            Ok(0)
        }
    }
    pub fn op_jp_hl(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.pc = self.get_hl();
        Ok(0)
    }

    // --- Relative jumps ---
    pub fn op_jr_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_r8(bus)?;
        self.pc = self.pc.wrapping_add(offset as i16 as u16);
        Ok(0)
    }
    pub fn op_jr_nz_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_r8(bus)?;
        if !self.flag_z() {
            self.pc = self.pc.wrapping_add(offset as i16 as u16);
            Ok(4)
        } else {
            Ok(0)
        }
    }
    pub fn op_jr_z_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_r8(bus)?;
        if self.flag_z() {
            self.pc = self.pc.wrapping_add(offset as i16 as u16);
            Ok(4)
        } else {
            Ok(0)
        }
    }
    pub fn op_jr_nc_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_r8(bus)?;
        if !self.flag_c() {
            self.pc = self.pc.wrapping_add(offset as i16 as u16);
            Ok(4)
        } else {
            Ok(0)
        }
    }
    pub fn op_jr_c_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_r8(bus)?;
        if self.flag_c() {
            self.pc = self.pc.wrapping_add(offset as i16 as u16);
            Ok(4)
        } else {
            Ok(0)
        }
    }

    // --- Calls ---
    pub fn op_call_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let target = self.read_d16(bus)?;
        let return_addr = self.pc;
        self.push_word(return_addr, bus)?;
        self.pc = target;
        Ok(0)
    }
    pub fn op_call_nz_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let target = self.read_d16(bus)?;
        if !self.flag_z() {
            let return_addr = self.pc;
            self.push_word(return_addr, bus)?;
            self.pc = target;
            Ok(12)
        } else {
            Ok(0)
        }
    }
    pub fn op_call_z_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let target = self.read_d16(bus)?;
        if self.flag_z() {
            let return_addr = self.pc;
            self.push_word(return_addr, bus)?;
            self.pc = target;
            Ok(12)
        } else {
            Ok(0)
        }
    }
    pub fn op_call_nc_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let target = self.read_d16(bus)?;
        if !self.flag_c() {
            let return_addr = self.pc;
            self.push_word(return_addr, bus)?;
            self.pc = target;
            Ok(12)
        } else {
            Ok(0)
        }
    }
    pub fn op_call_c_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let target = self.read_d16(bus)?;
        if self.flag_c() {
            let return_addr = self.pc;
            self.push_word(return_addr, bus)?;
            self.pc = target;
            Ok(12)
        } else {
            Ok(0)
        }
    }

    // --- Returns ---
    pub fn op_ret(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.pc = self.pop_word(bus)?;
        Ok(0)
    }
    pub fn op_reti(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.pc = self.pop_word(bus)?;
        self.ime = true;
        Ok(0)
    }
    pub fn op_ret_nz(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        if !self.flag_z() {
            self.pc = self.pop_word(bus)?;
            Ok(12)
        } else {
            Ok(0)
        }
    }
    pub fn op_ret_z(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        if self.flag_z() {
            self.pc = self.pop_word(bus)?;
            Ok(12)
        } else {
            Ok(0)
        }
    }
    pub fn op_ret_nc(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        if !self.flag_c() {
            self.pc = self.pop_word(bus)?;
            Ok(12)
        } else {
            Ok(0)
        }
    }
    pub fn op_ret_c(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        if self.flag_c() {
            self.pc = self.pop_word(bus)?;
            Ok(12)
        } else {
            Ok(0)
        }
    }

    // --- Restarts ---
    fn rst(&mut self, bus: &mut MemoryBus, target: u16) -> CpuResult<u16> {
        let return_addr = self.pc;
        self.push_word(return_addr, bus)?;
        self.pc = target;
        Ok(0)
    }
    pub fn op_rst_00h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(bus, 0x00)
    }
    pub fn op_rst_08h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(bus, 0x08)
    }
    pub fn op_rst_10h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(bus, 0x10)
    }
    pub fn op_rst_18h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(bus, 0x18)
    }
    pub fn op_rst_20h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(bus, 0x20)
    }
    pub fn op_rst_28h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(bus, 0x28)
    }
    pub fn op_rst_30h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(bus, 0x30)
    }
    pub fn op_rst_38h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(bus, 0x38)
    }

    // --- Interrupt / execution control ---
    pub fn op_di(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.ime = false;
        Ok(0)
    }
    pub fn op_ei(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.ime = true;
        Ok(0)
    }
    pub fn op_halt(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.halted = true;
        Ok(0)
    }
    pub fn op_stop(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.stop_requested = true;
        Ok(0)
    }

    // --- Flag/accumulator bit-twiddling ---
    pub fn op_scf(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.set_flag(FLAG_N | FLAG_H, false);
        self.set_flag(FLAG_C, true);
        Ok(0)
    }
    pub fn op_ccf(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        let carry = self.flag_c();
        self.set_flag(FLAG_N | FLAG_H, false);
        self.set_flag(FLAG_C, !carry);
        Ok(0)
    }
    pub fn op_cpl(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = !self.a;
        self.set_flag(FLAG_N | FLAG_H, true);
        Ok(0)
    }
    pub fn op_daa(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.daa();
        Ok(0)
    }

    /// PREFIX CB: dispatches the second byte against [`CB_INSTRUCTIONS`].
    /// The PREFIX CB entry in [`super::instruction::INSTRUCTIONS`] only
    /// advances PC past the 0xCB byte itself and charges a flat 4-cycle
    /// fetch; this handler advances PC past the extended opcode byte and
    /// reports only the remaining cycles.
    pub fn op_prefix_cb(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let cb_opcode = bus.read_byte(self.instruction_pc.wrapping_add(1))?;
        let cb_instr = &CB_INSTRUCTIONS[cb_opcode as usize];
        self.pc = self.pc.wrapping_add(1);
        (cb_instr.execute)(self, bus)?;
        Ok((cb_instr.cycles as u16).saturating_sub(4))
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
    fn call_and_ret_round_trip() {
        let (mut cpu, mut bus) = setup();
        bus.write_byte(0xCD, 0).unwrap(); // CALL a16
        bus.write_byte(0x00, 1).unwrap();
        bus.write_byte(0x10, 2).unwrap();
        cpu.sp = 0x100;
        let cycles = cpu.dispatch(&mut bus).unwrap();
        assert_eq!(cycles, 24, "call cycles");
        assert_eq!(cpu.pc(), 0x1000, "call target");
        assert_eq!(cpu.sp(), 0xFE, "sp after call");

        bus.write_byte(0xC9, 0x1000).unwrap(); // RET
        let cycles = cpu.dispatch(&mut bus).unwrap();
        assert_eq!(cycles, 16, "ret cycles");
        assert_eq!(cpu.pc(), 3, "pc after ret");
    }

    #[test]
    fn rst_28h_pushes_return_address() {
        let (mut cpu, mut bus) = setup();
        cpu.sp = 0x100;
        bus.write_byte(0xEF, 0x10).unwrap(); // RST 28h
        cpu.pc = 0x10;
        cpu.dispatch(&mut bus).unwrap();
        assert_eq!(cpu.pc(), 0x28);
        assert_eq!(bus.read_word(0xFE).unwrap(), 0x11);
    }

    #[test]
    fn ei_takes_effect_immediately() {
        let (mut cpu, mut bus) = setup();
        bus.write_byte(0xFB, 0).unwrap(); // EI
        assert!(!cpu.ime());
        cpu.dispatch(&mut bus).unwrap();
        assert!(cpu.ime());
    }

    #[test]
    fn halt_stops_further_progress() {
        let (mut cpu, mut bus) = setup();
        bus.write_byte(0x76, 0).unwrap(); // HALT
        cpu.dispatch(&mut bus).unwrap();
        assert!(cpu.halted());
        let pc_before = cpu.pc();
        let cycles = cpu.dispatch(&mut bus).unwrap();
        assert_eq!(cycles, 4);
        assert_eq!(cpu.pc(), pc_before);
    }

    #[test]
    fn ccf_inverts_carry_and_clears_n_h() {
        let (mut cpu, mut bus) = setup();
        bus.write_byte(0x3F, 0).unwrap(); // CCF
        cpu.set_flag(FLAG_C, false);
        cpu.dispatch(&mut bus).unwrap();
        assert!(cpu.flag_c());
    }
}
