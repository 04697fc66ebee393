// src/cpu/instruction.rs

use super::{Cpu, CpuResult};
use crate::memory_bus::MemoryBus;
use lazy_static::lazy_static;

/// One decoded entry of the primary or CB-prefixed opcode table.
pub struct Instruction {
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: u8,
    pub execute: fn(&mut Cpu, &mut MemoryBus) -> CpuResult<u16>,
}

macro_rules! instr {
    ($mnemonic:expr, $length:expr, $cycles:expr, $func:path) => {
        Instruction {
            mnemonic: $mnemonic,
            length: $length,
            cycles: $cycles,
            execute: $func,
        }
    };
}

macro_rules! invalid {
    () => {
        Instruction {
            mnemonic: "(INVALID)",
            length: 1,
            cycles: 4,
            execute: Cpu::handle_invalid_opcode,
        }
    };
}

lazy_static! {
    pub static ref INSTRUCTIONS: [Instruction; 256] = [
        instr!("NOP", 1, 4, Cpu::op_nop), // 0X00
        instr!("LD BC,d16", 3, 12, Cpu::op_ld_bc_d16), // 0X01
        instr!("LD (BC),A", 1, 8, Cpu::op_ld_bcp_a), // 0X02
        instr!("INC BC", 1, 8, Cpu::op_inc_bc), // 0X03
        instr!("INC B", 1, 4, Cpu::op_inc_b), // 0X04
        instr!("DEC B", 1, 4, Cpu::op_dec_b), // 0X05
        instr!("LD B,d8", 2, 8, Cpu::op_ld_b_d8), // 0X06
        instr!("RLCA", 1, 4, Cpu::op_rlca), // 0X07
        instr!("LD (a16),SP", 3, 20, Cpu::op_ld_a16p_sp), // 0X08
        instr!("ADD HL,BC", 1, 8, Cpu::op_add_hl_bc), // 0X09
        instr!("LD A,(BC)", 1, 8, Cpu::op_ld_a_bcp), // 0X0A
        instr!("DEC BC", 1, 8, Cpu::op_dec_bc), // 0X0B
        instr!("INC C", 1, 4, Cpu::op_inc_c), // 0X0C
        instr!("DEC C", 1, 4, Cpu::op_dec_c), // 0X0D
        instr!("LD C,d8", 2, 8, Cpu::op_ld_c_d8), // 0X0E
        instr!("RRCA", 1, 4, Cpu::op_rrca), // 0X0F
        instr!("STOP", 2, 4, Cpu::op_stop), // 0X10
        instr!("LD DE,d16", 3, 12, Cpu::op_ld_de_d16), // 0X11
        instr!("LD (DE),A", 1, 8, Cpu::op_ld_dep_a), // 0X12
        instr!("INC DE", 1, 8, Cpu::op_inc_de), // 0X13
        instr!("INC D", 1, 4, Cpu::op_inc_d), // 0X14
        instr!("DEC D", 1, 4, Cpu::op_dec_d), // 0X15
        instr!("LD D,d8", 2, 8, Cpu::op_ld_d_d8), // 0X16
        instr!("RLA", 1, 4, Cpu::op_rla), // 0X17
        instr!("JR r8", 2, 12, Cpu::op_jr_r8), // 0X18
        instr!("ADD HL,DE", 1, 8, Cpu::op_add_hl_de), // 0X19
        instr!("LD A,(DE)", 1, 8, Cpu::op_ld_a_dep), // 0X1A
        instr!("DEC DE", 1, 8, Cpu::op_dec_de), // 0X1B
        instr!("INC E", 1, 4, Cpu::op_inc_e), // 0X1C
        instr!("DEC E", 1, 4, Cpu::op_dec_e), // 0X1D
        instr!("LD E,d8", 2, 8, Cpu::op_ld_e_d8), // 0X1E
        instr!("RRA", 1, 4, Cpu::op_rra), // 0X1F
        instr!("JR NZ,r8", 2, 8, Cpu::op_jr_nz_r8), // 0X20
        instr!("LD HL,d16", 3, 12, Cpu::op_ld_hl_d16), // 0X21
        instr!("LD (HL+),A", 1, 8, Cpu::op_ld_hlip_a), // 0X22
        instr!("INC HL", 1, 8, Cpu::op_inc_hl), // 0X23
        instr!("INC H", 1, 4, Cpu::op_inc_h), // 0X24
        instr!("DEC H", 1, 4, Cpu::op_dec_h), // 0X25
        instr!("LD H,d8", 2, 8, Cpu::op_ld_h_d8), // 0X26
        instr!("DAA", 1, 4, Cpu::op_daa), // 0X27
        instr!("JR Z,r8", 2, 8, Cpu::op_jr_z_r8), // 0X28
        instr!("ADD HL,HL", 1, 8, Cpu::op_add_hl_hl), // 0X29
        instr!("LD A,(HL+)", 1, 8, Cpu::op_ld_a_hlip), // 0X2A
        instr!("DEC HL", 1, 8, Cpu::op_dec_hl), // 0X2B
        instr!("INC L", 1, 4, Cpu::op_inc_l), // 0X2C
        instr!("DEC L", 1, 4, Cpu::op_dec_l), // 0X2D
        instr!("LD L,d8", 2, 8, Cpu::op_ld_l_d8), // 0X2E
        instr!("CPL", 1, 4, Cpu::op_cpl), // 0X2F
        instr!("JR NC,r8", 2, 8, Cpu::op_jr_nc_r8), // 0X30
        instr!("LD SP,d16", 3, 12, Cpu::op_ld_sp_d16), // 0X31
        instr!("LD (HL-),A", 1, 8, Cpu::op_ld_hldp_a), // 0X32
        instr!("INC SP", 1, 8, Cpu::op_inc_sp), // 0X33
        instr!("INC (HL)", 1, 12, Cpu::op_inc_hlp), // 0X34
        instr!("DEC (HL)", 1, 12, Cpu::op_dec_hlp), // 0X35
        instr!("LD (HL),d8", 2, 12, Cpu::op_ld_hlp_d8), // 0X36
        instr!("SCF", 1, 4, Cpu::op_scf), // 0X37
        instr!("JR C,r8", 2, 8, Cpu::op_jr_c_r8), // 0X38
        instr!("ADD HL,SP", 1, 8, Cpu::op_add_hl_sp), // 0X39
        instr!("LD A,(HL-)", 1, 8, Cpu::op_ld_a_hldp), // 0X3A
        instr!("DEC SP", 1, 8, Cpu::op_dec_sp), // 0X3B
        instr!("INC A", 1, 4, Cpu::op_inc_a), // 0X3C
        instr!("DEC A", 1, 4, Cpu::op_dec_a), // 0X3D
        instr!("LD A,d8", 2, 8, Cpu::op_ld_a_d8), // 0X3E
        instr!("CCF", 1, 4, Cpu::op_ccf), // 0X3F
        instr!("LD B,B", 1, 4, Cpu::op_ld_b_b), // 0X40
        instr!("LD B,C", 1, 4, Cpu::op_ld_b_c), // 0X41
        instr!("LD B,D", 1, 4, Cpu::op_ld_b_d), // 0X42
        instr!("LD B,E", 1, 4, Cpu::op_ld_b_e), // 0X43
        instr!("LD B,H", 1, 4, Cpu::op_ld_b_h), // 0X44
        instr!("LD B,L", 1, 4, Cpu::op_ld_b_l), // 0X45
        instr!("LD B,(HL)", 1, 8, Cpu::op_ld_b_hlp), // 0X46
        instr!("LD B,A", 1, 4, Cpu::op_ld_b_a), // 0X47
        instr!("LD C,B", 1, 4, Cpu::op_ld_c_b), // 0X48
        instr!("LD C,C", 1, 4, Cpu::op_ld_c_c), // 0X49
        instr!("LD C,D", 1, 4, Cpu::op_ld_c_d), // 0X4A
        instr!("LD C,E", 1, 4, Cpu::op_ld_c_e), // 0X4B
        instr!("LD C,H", 1, 4, Cpu::op_ld_c_h), // 0X4C
        instr!("LD C,L", 1, 4, Cpu::op_ld_c_l), // 0X4D
        instr!("LD C,(HL)", 1, 8, Cpu::op_ld_c_hlp), // 0X4E
        instr!("LD C,A", 1, 4, Cpu::op_ld_c_a), // 0X4F
        instr!("LD D,B", 1, 4, Cpu::op_ld_d_b), // 0X50
        instr!("LD D,C", 1, 4, Cpu::op_ld_d_c), // 0X51
        instr!("LD D,D", 1, 4, Cpu::op_ld_d_d), // 0X52
        instr!("LD D,E", 1, 4, Cpu::op_ld_d_e), // 0X53
        instr!("LD D,H", 1, 4, Cpu::op_ld_d_h), // 0X54
        instr!("LD D,L", 1, 4, Cpu::op_ld_d_l), // 0X55
        instr!("LD D,(HL)", 1, 8, Cpu::op_ld_d_hlp), // 0X56
        instr!("LD D,A", 1, 4, Cpu::op_ld_d_a), // 0X57
        instr!("LD E,B", 1, 4, Cpu::op_ld_e_b), // 0X58
        instr!("LD E,C", 1, 4, Cpu::op_ld_e_c), // 0X59
        instr!("LD E,D", 1, 4, Cpu::op_ld_e_d), // 0X5A
        instr!("LD E,E", 1, 4, Cpu::op_ld_e_e), // 0X5B
        instr!("LD E,H", 1, 4, Cpu::op_ld_e_h), // 0X5C
        instr!("LD E,L", 1, 4, Cpu::op_ld_e_l), // 0X5D
        instr!("LD E,(HL)", 1, 8, Cpu::op_ld_e_hlp), // 0X5E
        instr!("LD E,A", 1, 4, Cpu::op_ld_e_a), // 0X5F
        instr!("LD H,B", 1, 4, Cpu::op_ld_h_b), // 0X60
        instr!("LD H,C", 1, 4, Cpu::op_ld_h_c), // 0X61
        instr!("LD H,D", 1, 4, Cpu::op_ld_h_d), // 0X62
        instr!("LD H,E", 1, 4, Cpu::op_ld_h_e), // 0X63
        instr!("LD H,H", 1, 4, Cpu::op_ld_h_h), // 0X64
        instr!("LD H,L", 1, 4, Cpu::op_ld_h_l), // 0X65
        instr!("LD H,(HL)", 1, 8, Cpu::op_ld_h_hlp), // 0X66
        instr!("LD H,A", 1, 4, Cpu::op_ld_h_a), // 0X67
        instr!("LD L,B", 1, 4, Cpu::op_ld_l_b), // 0X68
        instr!("LD L,C", 1, 4, Cpu::op_ld_l_c), // 0X69
        instr!("LD L,D", 1, 4, Cpu::op_ld_l_d), // 0X6A
        instr!("LD L,E", 1, 4, Cpu::op_ld_l_e), // 0X6B
        instr!("LD L,H", 1, 4, Cpu::op_ld_l_h), // 0X6C
        instr!("LD L,L", 1, 4, Cpu::op_ld_l_l), // 0X6D
        instr!("LD L,(HL)", 1, 8, Cpu::op_ld_l_hlp), // 0X6E
        instr!("LD L,A", 1, 4, Cpu::op_ld_l_a), // 0X6F
        instr!("LD (HL),B", 1, 8, Cpu::op_ld_hlp_b), // 0X70
        instr!("LD (HL),C", 1, 8, Cpu::op_ld_hlp_c), // 0X71
        instr!("LD (HL),D", 1, 8, Cpu::op_ld_hlp_d), // 0X72
        instr!("LD (HL),E", 1, 8, Cpu::op_ld_hlp_e), // 0X73
        instr!("LD (HL),H", 1, 8, Cpu::op_ld_hlp_h), // 0X74
        instr!("LD (HL),L", 1, 8, Cpu::op_ld_hlp_l), // 0X75
        instr!("HALT", 1, 4, Cpu::op_halt), // 0X76
        instr!("LD (HL),A", 1, 8, Cpu::op_ld_hlp_a), // 0X77
        instr!("LD A,B", 1, 4, Cpu::op_ld_a_b), // 0X78
        instr!("LD A,C", 1, 4, Cpu::op_ld_a_c), // 0X79
        instr!("LD A,D", 1, 4, Cpu::op_ld_a_d), // 0X7A
        instr!("LD A,E", 1, 4, Cpu::op_ld_a_e), // 0X7B
        instr!("LD A,H", 1, 4, Cpu::op_ld_a_h), // 0X7C
        instr!("LD A,L", 1, 4, Cpu::op_ld_a_l), // 0X7D
        instr!("LD A,(HL)", 1, 8, Cpu::op_ld_a_hlp), // 0X7E
        instr!("LD A,A", 1, 4, Cpu::op_ld_a_a), // 0X7F
        instr!("ADD A,B", 1, 4, Cpu::op_add_a_b), // 0X80
        instr!("ADD A,C", 1, 4, Cpu::op_add_a_c), // 0X81
        instr!("ADD A,D", 1, 4, Cpu::op_add_a_d), // 0X82
        instr!("ADD A,E", 1, 4, Cpu::op_add_a_e), // 0X83
        instr!("ADD A,H", 1, 4, Cpu::op_add_a_h), // 0X84
        instr!("ADD A,L", 1, 4, Cpu::op_add_a_l), // 0X85
        instr!("ADD A,(HL)", 1, 8, Cpu::op_add_a_hlp), // 0X86
        instr!("ADD A,A", 1, 4, Cpu::op_add_a_a), // 0X87
        instr!("ADC A,B", 1, 4, Cpu::op_adc_a_b), // 0X88
        instr!("ADC A,C", 1, 4, Cpu::op_adc_a_c), // 0X89
        instr!("ADC A,D", 1, 4, Cpu::op_adc_a_d), // 0X8A
        instr!("ADC A,E", 1, 4, Cpu::op_adc_a_e), // 0X8B
        instr!("ADC A,H", 1, 4, Cpu::op_adc_a_h), // 0X8C
        instr!("ADC A,L", 1, 4, Cpu::op_adc_a_l), // 0X8D
        instr!("ADC A,(HL)", 1, 8, Cpu::op_adc_a_hlp), // 0X8E
        instr!("ADC A,A", 1, 4, Cpu::op_adc_a_a), // 0X8F
        instr!("SUB B", 1, 4, Cpu::op_sub_a_b), // 0X90
        instr!("SUB C", 1, 4, Cpu::op_sub_a_c), // 0X91
        instr!("SUB D", 1, 4, Cpu::op_sub_a_d), // 0X92
        instr!("SUB E", 1, 4, Cpu::op_sub_a_e), // 0X93
        instr!("SUB H", 1, 4, Cpu::op_sub_a_h), // 0X94
        instr!("SUB L", 1, 4, Cpu::op_sub_a_l), // 0X95
        instr!("SUB (HL)", 1, 8, Cpu::op_sub_a_hlp), // 0X96
        instr!("SUB A", 1, 4, Cpu::op_sub_a_a), // 0X97
        instr!("SBC A,B", 1, 4, Cpu::op_sbc_a_b), // 0X98
        instr!("SBC A,C", 1, 4, Cpu::op_sbc_a_c), // 0X99
        instr!("SBC A,D", 1, 4, Cpu::op_sbc_a_d), // 0X9A
        instr!("SBC A,E", 1, 4, Cpu::op_sbc_a_e), // 0X9B
        instr!("SBC A,H", 1, 4, Cpu::op_sbc_a_h), // 0X9C
        instr!("SBC A,L", 1, 4, Cpu::op_sbc_a_l), // 0X9D
        instr!("SBC A,(HL)", 1, 8, Cpu::op_sbc_a_hlp), // 0X9E
        instr!("SBC A,A", 1, 4, Cpu::op_sbc_a_a), // 0X9F
        instr!("AND B", 1, 4, Cpu::op_and_a_b), // 0XA0
        instr!("AND C", 1, 4, Cpu::op_and_a_c), // 0XA1
        instr!("AND D", 1, 4, Cpu::op_and_a_d), // 0XA2
        instr!("AND E", 1, 4, Cpu::op_and_a_e), // 0XA3
        instr!("AND H", 1, 4, Cpu::op_and_a_h), // 0XA4
        instr!("AND L", 1, 4, Cpu::op_and_a_l), // 0XA5
        instr!("AND (HL)", 1, 8, Cpu::op_and_a_hlp), // 0XA6
        instr!("AND A", 1, 4, Cpu::op_and_a_a), // 0XA7
        instr!("XOR B", 1, 4, Cpu::op_xor_a_b), // 0XA8
        instr!("XOR C", 1, 4, Cpu::op_xor_a_c), // 0XA9
        instr!("XOR D", 1, 4, Cpu::op_xor_a_d), // 0XAA
        instr!("XOR E", 1, 4, Cpu::op_xor_a_e), // 0XAB
        instr!("XOR H", 1, 4, Cpu::op_xor_a_h), // 0XAC
        instr!("XOR L", 1, 4, Cpu::op_xor_a_l), // 0XAD
        instr!("XOR (HL)", 1, 8, Cpu::op_xor_a_hlp), // 0XAE
        instr!("XOR A", 1, 4, Cpu::op_xor_a_a), // 0XAF
        instr!("OR B", 1, 4, Cpu::op_or_a_b), // 0XB0
        instr!("OR C", 1, 4, Cpu::op_or_a_c), // 0XB1
        instr!("OR D", 1, 4, Cpu::op_or_a_d), // 0XB2
        instr!("OR E", 1, 4, Cpu::op_or_a_e), // 0XB3
        instr!("OR H", 1, 4, Cpu::op_or_a_h), // 0XB4
        instr!("OR L", 1, 4, Cpu::op_or_a_l), // 0XB5
        instr!("OR (HL)", 1, 8, Cpu::op_or_a_hlp), // 0XB6
        instr!("OR A", 1, 4, Cpu::op_or_a_a), // 0XB7
        instr!("CP B", 1, 4, Cpu::op_cp_a_b), // 0XB8
        instr!("CP C", 1, 4, Cpu::op_cp_a_c), // 0XB9
        instr!("CP D", 1, 4, Cpu::op_cp_a_d), // 0XBA
        instr!("CP E", 1, 4, Cpu::op_cp_a_e), // 0XBB
        instr!("CP H", 1, 4, Cpu::op_cp_a_h), // 0XBC
        instr!("CP L", 1, 4, Cpu::op_cp_a_l), // 0XBD
        instr!("CP (HL)", 1, 8, Cpu::op_cp_a_hlp), // 0XBE
        instr!("CP A", 1, 4, Cpu::op_cp_a_a), // 0XBF
        instr!("RET NZ", 1, 8, Cpu::op_ret_nz), // 0XC0
        instr!("POP BC", 1, 12, Cpu::op_pop_bc), // 0XC1
        instr!("JP NZ,a16", 3, 12, Cpu::op_jp_nz_a16), // 0XC2
        instr!("JP a16", 3, 16, Cpu::op_jp_a16), // 0XC3
        instr!("CALL NZ,a16", 3, 12, Cpu::op_call_nz_a16), // 0XC4
        instr!("PUSH BC", 1, 16, Cpu::op_push_bc), // 0XC5
        instr!("ADD A,d8", 2, 8, Cpu::op_add_a_d8), // 0XC6
        instr!("RST 00H", 1, 16, Cpu::op_rst_00h), // 0XC7
        instr!("RET Z", 1, 8, Cpu::op_ret_z), // 0XC8
        instr!("RET", 1, 16, Cpu::op_ret), // 0XC9
        instr!("JP Z,a16", 3, 12, Cpu::op_jp_z_a16), // 0XCA
        instr!("PREFIX CB", 1, 4, Cpu::op_prefix_cb), // 0XCB
        instr!("CALL Z,a16", 3, 12, Cpu::op_call_z_a16), // 0XCC
        instr!("CALL a16", 3, 24, Cpu::op_call_a16), // 0XCD
        instr!("ADC A,d8", 2, 8, Cpu::op_adc_a_d8), // 0XCE
        instr!("RST 08H", 1, 16, Cpu::op_rst_08h), // 0XCF
        instr!("RET NC", 1, 8, Cpu::op_ret_nc), // 0XD0
        instr!("POP DE", 1, 12, Cpu::op_pop_de), // 0XD1
        instr!("JP NC,a16", 3, 12, Cpu::op_jp_nc_a16), // 0XD2
        invalid!(), // 0XD3
        instr!("CALL NC,a16", 3, 12, Cpu::op_call_nc_a16), // 0XD4
        instr!("PUSH DE", 1, 16, Cpu::op_push_de), // 0XD5
        instr!("SUB d8", 2, 8, Cpu::op_sub_a_d8), // 0XD6
        instr!("RST 10H", 1, 16, Cpu::op_rst_10h), // 0XD7
        instr!("RET C", 1, 8, Cpu::op_ret_c), // 0XD8
        instr!("RETI", 1, 16, Cpu::op_reti), // 0XD9
        instr!("JP C,a16", 3, 12, Cpu::op_jp_c_a16), // 0XDA
        invalid!(), // 0XDB
        instr!("CALL C,a16", 3, 12, Cpu::op_call_c_a16), // 0XDC
        invalid!(), // 0XDD
        instr!("SBC A,d8", 2, 8, Cpu::op_sbc_a_d8), // 0XDE
        instr!("RST 18H", 1, 16, Cpu::op_rst_18h), // 0XDF
        instr!("LDH (a8),A", 2, 12, Cpu::op_ldh_a8p_a), // 0XE0
        instr!("POP HL", 1, 12, Cpu::op_pop_hl), // 0XE1
        instr!("LD (C),A", 1, 8, Cpu::op_ld_cp_a), // 0XE2
        invalid!(), // 0XE3
        invalid!(), // 0XE4
        instr!("PUSH HL", 1, 16, Cpu::op_push_hl), // 0XE5
        instr!("AND d8", 2, 8, Cpu::op_and_a_d8), // 0XE6
        instr!("RST 20H", 1, 16, Cpu::op_rst_20h), // 0XE7
        instr!("ADD SP,r8", 2, 16, Cpu::op_add_sp_r8), // 0XE8
        instr!("JP (HL)", 1, 4, Cpu::op_jp_hl), // 0XE9
        instr!("LD (a16),A", 3, 16, Cpu::op_ld_a16p_a), // 0XEA
        invalid!(), // 0XEB
        invalid!(), // 0XEC
        invalid!(), // 0XED
        instr!("XOR d8", 2, 8, Cpu::op_xor_a_d8), // 0XEE
        instr!("RST 28H", 1, 16, Cpu::op_rst_28h), // 0XEF
        instr!("LDH A,(a8)", 2, 12, Cpu::op_ldh_a_a8p), // 0XF0
        instr!("POP AF", 1, 12, Cpu::op_pop_af), // 0XF1
        instr!("LD A,(C)", 1, 8, Cpu::op_ld_a_cp), // 0XF2
        instr!("DI", 1, 4, Cpu::op_di), // 0XF3
        invalid!(), // 0XF4
        instr!("PUSH AF", 1, 16, Cpu::op_push_af), // 0XF5
        instr!("OR d8", 2, 8, Cpu::op_or_a_d8), // 0XF6
        instr!("RST 30H", 1, 16, Cpu::op_rst_30h), // 0XF7
        instr!("LD HL,SP+r8", 2, 12, Cpu::op_ld_hl_sp_r8), // 0XF8
        instr!("LD SP,HL", 1, 8, Cpu::op_ld_sp_hl), // 0XF9
        instr!("LD A,(a16)", 3, 16, Cpu::op_ld_a_a16p), // 0XFA
        instr!("EI", 1, 4, Cpu::op_ei), // 0XFB
        invalid!(), // 0XFC
        invalid!(), // 0XFD
        instr!("CP d8", 2, 8, Cpu::op_cp_a_d8), // 0XFE
        instr!("RST 38H", 1, 16, Cpu::op_rst_38h), // 0XFF
    ];
}

lazy_static! {
    pub static ref CB_INSTRUCTIONS: [Instruction; 256] = [
        instr!("RLC B", 2, 8, Cpu::cb_rlc_b), // CB 0X00
        instr!("RLC C", 2, 8, Cpu::cb_rlc_c), // CB 0X01
        instr!("RLC D", 2, 8, Cpu::cb_rlc_d), // CB 0X02
        instr!("RLC E", 2, 8, Cpu::cb_rlc_e), // CB 0X03
        instr!("RLC H", 2, 8, Cpu::cb_rlc_h), // CB 0X04
        instr!("RLC L", 2, 8, Cpu::cb_rlc_l), // CB 0X05
        instr!("RLC (HL)", 2, 16, Cpu::cb_rlc_hlp), // CB 0X06
        instr!("RLC A", 2, 8, Cpu::cb_rlc_a), // CB 0X07
        instr!("RRC B", 2, 8, Cpu::cb_rrc_b), // CB 0X08
        instr!("RRC C", 2, 8, Cpu::cb_rrc_c), // CB 0X09
        instr!("RRC D", 2, 8, Cpu::cb_rrc_d), // CB 0X0A
        instr!("RRC E", 2, 8, Cpu::cb_rrc_e), // CB 0X0B
        instr!("RRC H", 2, 8, Cpu::cb_rrc_h), // CB 0X0C
        instr!("RRC L", 2, 8, Cpu::cb_rrc_l), // CB 0X0D
        instr!("RRC (HL)", 2, 16, Cpu::cb_rrc_hlp), // CB 0X0E
        instr!("RRC A", 2, 8, Cpu::cb_rrc_a), // CB 0X0F
        instr!("RL B", 2, 8, Cpu::cb_rl_b), // CB 0X10
        instr!("RL C", 2, 8, Cpu::cb_rl_c), // CB 0X11
        instr!("RL D", 2, 8, Cpu::cb_rl_d), // CB 0X12
        instr!("RL E", 2, 8, Cpu::cb_rl_e), // CB 0X13
        instr!("RL H", 2, 8, Cpu::cb_rl_h), // CB 0X14
        instr!("RL L", 2, 8, Cpu::cb_rl_l), // CB 0X15
        instr!("RL (HL)", 2, 16, Cpu::cb_rl_hlp), // CB 0X16
        instr!("RL A", 2, 8, Cpu::cb_rl_a), // CB 0X17
        instr!("RR B", 2, 8, Cpu::cb_rr_b), // CB 0X18
        instr!("RR C", 2, 8, Cpu::cb_rr_c), // CB 0X19
        instr!("RR D", 2, 8, Cpu::cb_rr_d), // CB 0X1A
        instr!("RR E", 2, 8, Cpu::cb_rr_e), // CB 0X1B
        instr!("RR H", 2, 8, Cpu::cb_rr_h), // CB 0X1C
        instr!("RR L", 2, 8, Cpu::cb_rr_l), // CB 0X1D
        instr!("RR (HL)", 2, 16, Cpu::cb_rr_hlp), // CB 0X1E
        instr!("RR A", 2, 8, Cpu::cb_rr_a), // CB 0X1F
        instr!("SLA B", 2, 8, Cpu::cb_sla_b), // CB 0X20
        instr!("SLA C", 2, 8, Cpu::cb_sla_c), // CB 0X21
        instr!("SLA D", 2, 8, Cpu::cb_sla_d), // CB 0X22
        instr!("SLA E", 2, 8, Cpu::cb_sla_e), // CB 0X23
        instr!("SLA H", 2, 8, Cpu::cb_sla_h), // CB 0X24
        instr!("SLA L", 2, 8, Cpu::cb_sla_l), // CB 0X25
        instr!("SLA (HL)", 2, 16, Cpu::cb_sla_hlp), // CB 0X26
        instr!("SLA A", 2, 8, Cpu::cb_sla_a), // CB 0X27
        instr!("SRA B", 2, 8, Cpu::cb_sra_b), // CB 0X28
        instr!("SRA C", 2, 8, Cpu::cb_sra_c), // CB 0X29
        instr!("SRA D", 2, 8, Cpu::cb_sra_d), // CB 0X2A
        instr!("SRA E", 2, 8, Cpu::cb_sra_e), // CB 0X2B
        instr!("SRA H", 2, 8, Cpu::cb_sra_h), // CB 0X2C
        instr!("SRA L", 2, 8, Cpu::cb_sra_l), // CB 0X2D
        instr!("SRA (HL)", 2, 16, Cpu::cb_sra_hlp), // CB 0X2E
        instr!("SRA A", 2, 8, Cpu::cb_sra_a), // CB 0X2F
        instr!("SWAP B", 2, 8, Cpu::cb_swap_b), // CB 0X30
        instr!("SWAP C", 2, 8, Cpu::cb_swap_c), // CB 0X31
        instr!("SWAP D", 2, 8, Cpu::cb_swap_d), // CB 0X32
        instr!("SWAP E", 2, 8, Cpu::cb_swap_e), // CB 0X33
        instr!("SWAP H", 2, 8, Cpu::cb_swap_h), // CB 0X34
        instr!("SWAP L", 2, 8, Cpu::cb_swap_l), // CB 0X35
        instr!("SWAP (HL)", 2, 16, Cpu::cb_swap_hlp), // CB 0X36
        instr!("SWAP A", 2, 8, Cpu::cb_swap_a), // CB 0X37
        instr!("SRL B", 2, 8, Cpu::cb_srl_b), // CB 0X38
        instr!("SRL C", 2, 8, Cpu::cb_srl_c), // CB 0X39
        instr!("SRL D", 2, 8, Cpu::cb_srl_d), // CB 0X3A
        instr!("SRL E", 2, 8, Cpu::cb_srl_e), // CB 0X3B
        instr!("SRL H", 2, 8, Cpu::cb_srl_h), // CB 0X3C
        instr!("SRL L", 2, 8, Cpu::cb_srl_l), // CB 0X3D
        instr!("SRL (HL)", 2, 16, Cpu::cb_srl_hlp), // CB 0X3E
        instr!("SRL A", 2, 8, Cpu::cb_srl_a), // CB 0X3F
        instr!("BIT 0,B", 2, 8, Cpu::cb_bit_0_b), // CB 0X40
        instr!("BIT 0,C", 2, 8, Cpu::cb_bit_0_c), // CB 0X41
        instr!("BIT 0,D", 2, 8, Cpu::cb_bit_0_d), // CB 0X42
        instr!("BIT 0,E", 2, 8, Cpu::cb_bit_0_e), // CB 0X43
        instr!("BIT 0,H", 2, 8, Cpu::cb_bit_0_h), // CB 0X44
        instr!("BIT 0,L", 2, 8, Cpu::cb_bit_0_l), // CB 0X45
        instr!("BIT 0,(HL)", 2, 16, Cpu::cb_bit_0_hlp), // CB 0X46
        instr!("BIT 0,A", 2, 8, Cpu::cb_bit_0_a), // CB 0X47
        instr!("BIT 1,B", 2, 8, Cpu::cb_bit_1_b), // CB 0X48
        instr!("BIT 1,C", 2, 8, Cpu::cb_bit_1_c), // CB 0X49
        instr!("BIT 1,D", 2, 8, Cpu::cb_bit_1_d), // CB 0X4A
        instr!("BIT 1,E", 2, 8, Cpu::cb_bit_1_e), // CB 0X4B
        instr!("BIT 1,H", 2, 8, Cpu::cb_bit_1_h), // CB 0X4C
        instr!("BIT 1,L", 2, 8, Cpu::cb_bit_1_l), // CB 0X4D
        instr!("BIT 1,(HL)", 2, 16, Cpu::cb_bit_1_hlp), // CB 0X4E
        instr!("BIT 1,A", 2, 8, Cpu::cb_bit_1_a), // CB 0X4F
        instr!("BIT 2,B", 2, 8, Cpu::cb_bit_2_b), // CB 0X50
        instr!("BIT 2,C", 2, 8, Cpu::cb_bit_2_c), // CB 0X51
        instr!("BIT 2,D", 2, 8, Cpu::cb_bit_2_d), // CB 0X52
        instr!("BIT 2,E", 2, 8, Cpu::cb_bit_2_e), // CB 0X53
        instr!("BIT 2,H", 2, 8, Cpu::cb_bit_2_h), // CB 0X54
        instr!("BIT 2,L", 2, 8, Cpu::cb_bit_2_l), // CB 0X55
        instr!("BIT 2,(HL)", 2, 16, Cpu::cb_bit_2_hlp), // CB 0X56
        instr!("BIT 2,A", 2, 8, Cpu::cb_bit_2_a), // CB 0X57
        instr!("BIT 3,B", 2, 8, Cpu::cb_bit_3_b), // CB 0X58
        instr!("BIT 3,C", 2, 8, Cpu::cb_bit_3_c), // CB 0X59
        instr!("BIT 3,D", 2, 8, Cpu::cb_bit_3_d), // CB 0X5A
        instr!("BIT 3,E", 2, 8, Cpu::cb_bit_3_e), // CB 0X5B
        instr!("BIT 3,H", 2, 8, Cpu::cb_bit_3_h), // CB 0X5C
        instr!("BIT 3,L", 2, 8, Cpu::cb_bit_3_l), // CB 0X5D
        instr!("BIT 3,(HL)", 2, 16, Cpu::cb_bit_3_hlp), // CB 0X5E
        instr!("BIT 3,A", 2, 8, Cpu::cb_bit_3_a), // CB 0X5F
        instr!("BIT 4,B", 2, 8, Cpu::cb_bit_4_b), // CB 0X60
        instr!("BIT 4,C", 2, 8, Cpu::cb_bit_4_c), // CB 0X61
        instr!("BIT 4,D", 2, 8, Cpu::cb_bit_4_d), // CB 0X62
        instr!("BIT 4,E", 2, 8, Cpu::cb_bit_4_e), // CB 0X63
        instr!("BIT 4,H", 2, 8, Cpu::cb_bit_4_h), // CB 0X64
        instr!("BIT 4,L", 2, 8, Cpu::cb_bit_4_l), // CB 0X65
        instr!("BIT 4,(HL)", 2, 16, Cpu::cb_bit_4_hlp), // CB 0X66
        instr!("BIT 4,A", 2, 8, Cpu::cb_bit_4_a), // CB 0X67
        instr!("BIT 5,B", 2, 8, Cpu::cb_bit_5_b), // CB 0X68
        instr!("BIT 5,C", 2, 8, Cpu::cb_bit_5_c), // CB 0X69
        instr!("BIT 5,D", 2, 8, Cpu::cb_bit_5_d), // CB 0X6A
        instr!("BIT 5,E", 2, 8, Cpu::cb_bit_5_e), // CB 0X6B
        instr!("BIT 5,H", 2, 8, Cpu::cb_bit_5_h), // CB 0X6C
        instr!("BIT 5,L", 2, 8, Cpu::cb_bit_5_l), // CB 0X6D
        instr!("BIT 5,(HL)", 2, 16, Cpu::cb_bit_5_hlp), // CB 0X6E
        instr!("BIT 5,A", 2, 8, Cpu::cb_bit_5_a), // CB 0X6F
        instr!("BIT 6,B", 2, 8, Cpu::cb_bit_6_b), // CB 0X70
        instr!("BIT 6,C", 2, 8, Cpu::cb_bit_6_c), // CB 0X71
        instr!("BIT 6,D", 2, 8, Cpu::cb_bit_6_d), // CB 0X72
        instr!("BIT 6,E", 2, 8, Cpu::cb_bit_6_e), // CB 0X73
        instr!("BIT 6,H", 2, 8, Cpu::cb_bit_6_h), // CB 0X74
        instr!("BIT 6,L", 2, 8, Cpu::cb_bit_6_l), // CB 0X75
        instr!("BIT 6,(HL)", 2, 16, Cpu::cb_bit_6_hlp), // CB 0X76
        instr!("BIT 6,A", 2, 8, Cpu::cb_bit_6_a), // CB 0X77
        instr!("BIT 7,B", 2, 8, Cpu::cb_bit_7_b), // CB 0X78
        instr!("BIT 7,C", 2, 8, Cpu::cb_bit_7_c), // CB 0X79
        instr!("BIT 7,D", 2, 8, Cpu::cb_bit_7_d), // CB 0X7A
        instr!("BIT 7,E", 2, 8, Cpu::cb_bit_7_e), // CB 0X7B
        instr!("BIT 7,H", 2, 8, Cpu::cb_bit_7_h), // CB 0X7C
        instr!("BIT 7,L", 2, 8, Cpu::cb_bit_7_l), // CB 0X7D
        instr!("BIT 7,(HL)", 2, 16, Cpu::cb_bit_7_hlp), // CB 0X7E
        instr!("BIT 7,A", 2, 8, Cpu::cb_bit_7_a), // CB 0X7F
        instr!("RES 0,B", 2, 8, Cpu::cb_res_0_b), // CB 0X80
        instr!("RES 0,C", 2, 8, Cpu::cb_res_0_c), // CB 0X81
        instr!("RES 0,D", 2, 8, Cpu::cb_res_0_d), // CB 0X82
        instr!("RES 0,E", 2, 8, Cpu::cb_res_0_e), // CB 0X83
        instr!("RES 0,H", 2, 8, Cpu::cb_res_0_h), // CB 0X84
        instr!("RES 0,L", 2, 8, Cpu::cb_res_0_l), // CB 0X85
        instr!("RES 0,(HL)", 2, 16, Cpu::cb_res_0_hlp), // CB 0X86
        instr!("RES 0,A", 2, 8, Cpu::cb_res_0_a), // CB 0X87
        instr!("RES 1,B", 2, 8, Cpu::cb_res_1_b), // CB 0X88
        instr!("RES 1,C", 2, 8, Cpu::cb_res_1_c), // CB 0X89
        instr!("RES 1,D", 2, 8, Cpu::cb_res_1_d), // CB 0X8A
        instr!("RES 1,E", 2, 8, Cpu::cb_res_1_e), // CB 0X8B
        instr!("RES 1,H", 2, 8, Cpu::cb_res_1_h), // CB 0X8C
        instr!("RES 1,L", 2, 8, Cpu::cb_res_1_l), // CB 0X8D
        instr!("RES 1,(HL)", 2, 16, Cpu::cb_res_1_hlp), // CB 0X8E
        instr!("RES 1,A", 2, 8, Cpu::cb_res_1_a), // CB 0X8F
        instr!("RES 2,B", 2, 8, Cpu::cb_res_2_b), // CB 0X90
        instr!("RES 2,C", 2, 8, Cpu::cb_res_2_c), // CB 0X91
        instr!("RES 2,D", 2, 8, Cpu::cb_res_2_d), // CB 0X92
        instr!("RES 2,E", 2, 8, Cpu::cb_res_2_e), // CB 0X93
        instr!("RES 2,H", 2, 8, Cpu::cb_res_2_h), // CB 0X94
        instr!("RES 2,L", 2, 8, Cpu::cb_res_2_l), // CB 0X95
        instr!("RES 2,(HL)", 2, 16, Cpu::cb_res_2_hlp), // CB 0X96
        instr!("RES 2,A", 2, 8, Cpu::cb_res_2_a), // CB 0X97
        instr!("RES 3,B", 2, 8, Cpu::cb_res_3_b), // CB 0X98
        instr!("RES 3,C", 2, 8, Cpu::cb_res_3_c), // CB 0X99
        instr!("RES 3,D", 2, 8, Cpu::cb_res_3_d), // CB 0X9A
        instr!("RES 3,E", 2, 8, Cpu::cb_res_3_e), // CB 0X9B
        instr!("RES 3,H", 2, 8, Cpu::cb_res_3_h), // CB 0X9C
        instr!("RES 3,L", 2, 8, Cpu::cb_res_3_l), // CB 0X9D
        instr!("RES 3,(HL)", 2, 16, Cpu::cb_res_3_hlp), // CB 0X9E
        instr!("RES 3,A", 2, 8, Cpu::cb_res_3_a), // CB 0X9F
        instr!("RES 4,B", 2, 8, Cpu::cb_res_4_b), // CB 0XA0
        instr!("RES 4,C", 2, 8, Cpu::cb_res_4_c), // CB 0XA1
        instr!("RES 4,D", 2, 8, Cpu::cb_res_4_d), // CB 0XA2
        instr!("RES 4,E", 2, 8, Cpu::cb_res_4_e), // CB 0XA3
        instr!("RES 4,H", 2, 8, Cpu::cb_res_4_h), // CB 0XA4
        instr!("RES 4,L", 2, 8, Cpu::cb_res_4_l), // CB 0XA5
        instr!("RES 4,(HL)", 2, 16, Cpu::cb_res_4_hlp), // CB 0XA6
        instr!("RES 4,A", 2, 8, Cpu::cb_res_4_a), // CB 0XA7
        instr!("RES 5,B", 2, 8, Cpu::cb_res_5_b), // CB 0XA8
        instr!("RES 5,C", 2, 8, Cpu::cb_res_5_c), // CB 0XA9
        instr!("RES 5,D", 2, 8, Cpu::cb_res_5_d), // CB 0XAA
        instr!("RES 5,E", 2, 8, Cpu::cb_res_5_e), // CB 0XAB
        instr!("RES 5,H", 2, 8, Cpu::cb_res_5_h), // CB 0XAC
        instr!("RES 5,L", 2, 8, Cpu::cb_res_5_l), // CB 0XAD
        instr!("RES 5,(HL)", 2, 16, Cpu::cb_res_5_hlp), // CB 0XAE
        instr!("RES 5,A", 2, 8, Cpu::cb_res_5_a), // CB 0XAF
        instr!("RES 6,B", 2, 8, Cpu::cb_res_6_b), // CB 0XB0
        instr!("RES 6,C", 2, 8, Cpu::cb_res_6_c), // CB 0XB1
        instr!("RES 6,D", 2, 8, Cpu::cb_res_6_d), // CB 0XB2
        instr!("RES 6,E", 2, 8, Cpu::cb_res_6_e), // CB 0XB3
        instr!("RES 6,H", 2, 8, Cpu::cb_res_6_h), // CB 0XB4
        instr!("RES 6,L", 2, 8, Cpu::cb_res_6_l), // CB 0XB5
        instr!("RES 6,(HL)", 2, 16, Cpu::cb_res_6_hlp), // CB 0XB6
        instr!("RES 6,A", 2, 8, Cpu::cb_res_6_a), // CB 0XB7
        instr!("RES 7,B", 2, 8, Cpu::cb_res_7_b), // CB 0XB8
        instr!("RES 7,C", 2, 8, Cpu::cb_res_7_c), // CB 0XB9
        instr!("RES 7,D", 2, 8, Cpu::cb_res_7_d), // CB 0XBA
        instr!("RES 7,E", 2, 8, Cpu::cb_res_7_e), // CB 0XBB
        instr!("RES 7,H", 2, 8, Cpu::cb_res_7_h), // CB 0XBC
        instr!("RES 7,L", 2, 8, Cpu::cb_res_7_l), // CB 0XBD
        instr!("RES 7,(HL)", 2, 16, Cpu::cb_res_7_hlp), // CB 0XBE
        instr!("RES 7,A", 2, 8, Cpu::cb_res_7_a), // CB 0XBF
        instr!("SET 0,B", 2, 8, Cpu::cb_set_0_b), // CB 0XC0
        instr!("SET 0,C", 2, 8, Cpu::cb_set_0_c), // CB 0XC1
        instr!("SET 0,D", 2, 8, Cpu::cb_set_0_d), // CB 0XC2
        instr!("SET 0,E", 2, 8, Cpu::cb_set_0_e), // CB 0XC3
        instr!("SET 0,H", 2, 8, Cpu::cb_set_0_h), // CB 0XC4
        instr!("SET 0,L", 2, 8, Cpu::cb_set_0_l), // CB 0XC5
        instr!("SET 0,(HL)", 2, 16, Cpu::cb_set_0_hlp), // CB 0XC6
        instr!("SET 0,A", 2, 8, Cpu::cb_set_0_a), // CB 0XC7
        instr!("SET 1,B", 2, 8, Cpu::cb_set_1_b), // CB 0XC8
        instr!("SET 1,C", 2, 8, Cpu::cb_set_1_c), // CB 0XC9
        instr!("SET 1,D", 2, 8, Cpu::cb_set_1_d), // CB 0XCA
        instr!("SET 1,E", 2, 8, Cpu::cb_set_1_e), // CB 0XCB
        instr!("SET 1,H", 2, 8, Cpu::cb_set_1_h), // CB 0XCC
        instr!("SET 1,L", 2, 8, Cpu::cb_set_1_l), // CB 0XCD
        instr!("SET 1,(HL)", 2, 16, Cpu::cb_set_1_hlp), // CB 0XCE
        instr!("SET 1,A", 2, 8, Cpu::cb_set_1_a), // CB 0XCF
        instr!("SET 2,B", 2, 8, Cpu::cb_set_2_b), // CB 0XD0
        instr!("SET 2,C", 2, 8, Cpu::cb_set_2_c), // CB 0XD1
        instr!("SET 2,D", 2, 8, Cpu::cb_set_2_d), // CB 0XD2
        instr!("SET 2,E", 2, 8, Cpu::cb_set_2_e), // CB 0XD3
        instr!("SET 2,H", 2, 8, Cpu::cb_set_2_h), // CB 0XD4
        instr!("SET 2,L", 2, 8, Cpu::cb_set_2_l), // CB 0XD5
        instr!("SET 2,(HL)", 2, 16, Cpu::cb_set_2_hlp), // CB 0XD6
        instr!("SET 2,A", 2, 8, Cpu::cb_set_2_a), // CB 0XD7
        instr!("SET 3,B", 2, 8, Cpu::cb_set_3_b), // CB 0XD8
        instr!("SET 3,C", 2, 8, Cpu::cb_set_3_c), // CB 0XD9
        instr!("SET 3,D", 2, 8, Cpu::cb_set_3_d), // CB 0XDA
        instr!("SET 3,E", 2, 8, Cpu::cb_set_3_e), // CB 0XDB
        instr!("SET 3,H", 2, 8, Cpu::cb_set_3_h), // CB 0XDC
        instr!("SET 3,L", 2, 8, Cpu::cb_set_3_l), // CB 0XDD
        instr!("SET 3,(HL)", 2, 16, Cpu::cb_set_3_hlp), // CB 0XDE
        instr!("SET 3,A", 2, 8, Cpu::cb_set_3_a), // CB 0XDF
        instr!("SET 4,B", 2, 8, Cpu::cb_set_4_b), // CB 0XE0
        instr!("SET 4,C", 2, 8, Cpu::cb_set_4_c), // CB 0XE1
        instr!("SET 4,D", 2, 8, Cpu::cb_set_4_d), // CB 0XE2
        instr!("SET 4,E", 2, 8, Cpu::cb_set_4_e), // CB 0XE3
        instr!("SET 4,H", 2, 8, Cpu::cb_set_4_h), // CB 0XE4
        instr!("SET 4,L", 2, 8, Cpu::cb_set_4_l), // CB 0XE5
        instr!("SET 4,(HL)", 2, 16, Cpu::cb_set_4_hlp), // CB 0XE6
        instr!("SET 4,A", 2, 8, Cpu::cb_set_4_a), // CB 0XE7
        instr!("SET 5,B", 2, 8, Cpu::cb_set_5_b), // CB 0XE8
        instr!("SET 5,C", 2, 8, Cpu::cb_set_5_c), // CB 0XE9
        instr!("SET 5,D", 2, 8, Cpu::cb_set_5_d), // CB 0XEA
        instr!("SET 5,E", 2, 8, Cpu::cb_set_5_e), // CB 0XEB
        instr!("SET 5,H", 2, 8, Cpu::cb_set_5_h), // CB 0XEC
        instr!("SET 5,L", 2, 8, Cpu::cb_set_5_l), // CB 0XED
        instr!("SET 5,(HL)", 2, 16, Cpu::cb_set_5_hlp), // CB 0XEE
        instr!("SET 5,A", 2, 8, Cpu::cb_set_5_a), // CB 0XEF
        instr!("SET 6,B", 2, 8, Cpu::cb_set_6_b), // CB 0XF0
        instr!("SET 6,C", 2, 8, Cpu::cb_set_6_c), // CB 0XF1
        instr!("SET 6,D", 2, 8, Cpu::cb_set_6_d), // CB 0XF2
        instr!("SET 6,E", 2, 8, Cpu::cb_set_6_e), // CB 0XF3
        instr!("SET 6,H", 2, 8, Cpu::cb_set_6_h), // CB 0XF4
        instr!("SET 6,L", 2, 8, Cpu::cb_set_6_l), // CB 0XF5
        instr!("SET 6,(HL)", 2, 16, Cpu::cb_set_6_hlp), // CB 0XF6
        instr!("SET 6,A", 2, 8, Cpu::cb_set_6_a), // CB 0XF7
        instr!("SET 7,B", 2, 8, Cpu::cb_set_7_b), // CB 0XF8
        instr!("SET 7,C", 2, 8, Cpu::cb_set_7_c), // CB 0XF9
        instr!("SET 7,D", 2, 8, Cpu::cb_set_7_d), // CB 0XFA
        instr!("SET 7,E", 2, 8, Cpu::cb_set_7_e), // CB 0XFB
        instr!("SET 7,H", 2, 8, Cpu::cb_set_7_h), // CB 0XFC
        instr!("SET 7,L", 2, 8, Cpu::cb_set_7_l), // CB 0XFD
        instr!("SET 7,(HL)", 2, 16, Cpu::cb_set_7_hlp), // CB 0XFE
        instr!("SET 7,A", 2, 8, Cpu::cb_set_7_a), // CB 0XFF
    ];
}

