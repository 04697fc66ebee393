// src/cpu/ops_rot_shift.rs

use super::{Cpu, CpuResult, constants::*};
use crate::memory_bus::MemoryBus;

impl Cpu {
    pub fn op_rlca(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rlc(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
    }
    pub fn op_rrca(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rrc(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
    }
    pub fn op_rla(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rl(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
    }
    pub fn op_rra(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rr(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
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
    fn rlca_never_sets_zero_flag() {
        let (mut cpu, mut bus) = setup();
        cpu.a = 0x00;
        bus.write_byte(0x07, 0).unwrap(); // RLCA
        cpu.dispatch(&mut bus).unwrap();
        assert_eq!(cpu.a, 0x00);
        assert!(!cpu.flag_z());
    }

    #[test]
    fn rla_rotates_through_carry() {
        let (mut cpu, mut bus) = setup();
        cpu.a = 0x80;
        cpu.set_flag(FLAG_C, true);
        bus.write_byte(0x17, 0).unwrap(); // RLA
        cpu.dispatch(&mut bus).unwrap();
        assert_eq!(cpu.a, 0x01);
        assert!(cpu.flag_c());
    }
}
