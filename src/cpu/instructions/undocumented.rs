//! The undocumented read-modify-write combos the nestest ROM exercises.
//! Each fuses a documented RMW operation with a documented ALU operation
//! and inherits both sets of flag effects.

use crate::cpu::instruction::{AddressingMode, Operand, Register};
use crate::cpu::{Cpu, StatusFlags};

impl Cpu<'_> {
    /// DCP: DEC the memory cell, then compare A against the result.
    pub(crate) fn decrement_compare(&mut self, mode: AddressingMode, operand: Operand) {
        let addr = self.operand_address(mode, operand);
        let value = self.read_u8(addr).wrapping_sub(1);
        self.write_u8(addr, value);
        self.compare_value(self.accumulator, value);
    }

    /// ISB: INC the memory cell, then SBC the result from A.
    pub(crate) fn increment_subtract(&mut self, mode: AddressingMode, operand: Operand) {
        let addr = self.operand_address(mode, operand);
        let value = self.read_u8(addr).wrapping_add(1);
        self.write_u8(addr, value);
        self.add_to_accumulator(value ^ 0xFF);
    }

    /// SLO: ASL the memory cell, then OR the result into A.
    pub(crate) fn shift_left_or(&mut self, mode: AddressingMode, operand: Operand) {
        let addr = self.operand_address(mode, operand);
        let value = self.read_u8(addr);
        self.status_register
            .set(StatusFlags::CARRY, value & 0x80 != 0);
        let shifted = value << 1;
        self.write_u8(addr, shifted);
        self.set_register(Register::A, self.accumulator | shifted);
    }

    /// RLA: ROL the memory cell, then AND the result into A.
    pub(crate) fn rotate_left_and(&mut self, mode: AddressingMode, operand: Operand) {
        let addr = self.operand_address(mode, operand);
        let value = self.read_u8(addr);
        let carry_in = self.status_register.contains(StatusFlags::CARRY) as u8;
        self.status_register
            .set(StatusFlags::CARRY, value & 0x80 != 0);
        let rotated = value << 1 | carry_in;
        self.write_u8(addr, rotated);
        self.set_register(Register::A, self.accumulator & rotated);
    }

    /// SRE: LSR the memory cell, then EOR the result into A.
    pub(crate) fn shift_right_eor(&mut self, mode: AddressingMode, operand: Operand) {
        let addr = self.operand_address(mode, operand);
        let value = self.read_u8(addr);
        self.status_register.set(StatusFlags::CARRY, value & 0x01 != 0);
        let shifted = value >> 1;
        self.write_u8(addr, shifted);
        self.set_register(Register::A, self.accumulator ^ shifted);
    }

    /// RRA: ROR the memory cell, then ADC the result into A. The carry the
    /// rotation shifts out becomes the carry the addition consumes.
    pub(crate) fn rotate_right_add(&mut self, mode: AddressingMode, operand: Operand) {
        let addr = self.operand_address(mode, operand);
        let value = self.read_u8(addr);
        let carry_in = self.status_register.contains(StatusFlags::CARRY) as u8;
        let rotated = value >> 1 | carry_in << 7;
        self.status_register.set(StatusFlags::CARRY, value & 0x01 != 0);
        self.write_u8(addr, rotated);
        self.add_to_accumulator(rotated);
    }
}
