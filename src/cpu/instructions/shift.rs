use crate::cpu::instruction::{AddressingMode, Operand, Register};
use crate::cpu::{Cpu, StatusFlags};

impl Cpu<'_> {
    pub(crate) fn shift_left(&mut self, mode: AddressingMode, operand: Operand) {
        let value = self.operand_value(mode, operand);
        self.status_register
            .set(StatusFlags::CARRY, value & 0x80 != 0);
        self.write_shift_result(mode, operand, value << 1);
    }

    pub(crate) fn shift_right(&mut self, mode: AddressingMode, operand: Operand) {
        let value = self.operand_value(mode, operand);
        self.status_register.set(StatusFlags::CARRY, value & 0x01 != 0);
        self.write_shift_result(mode, operand, value >> 1);
    }

    pub(crate) fn rotate_left(&mut self, mode: AddressingMode, operand: Operand) {
        let value = self.operand_value(mode, operand);
        let carry_in = self.status_register.contains(StatusFlags::CARRY) as u8;
        self.status_register
            .set(StatusFlags::CARRY, value & 0x80 != 0);
        self.write_shift_result(mode, operand, value << 1 | carry_in);
    }

    pub(crate) fn rotate_right(&mut self, mode: AddressingMode, operand: Operand) {
        let value = self.operand_value(mode, operand);
        let carry_in = self.status_register.contains(StatusFlags::CARRY) as u8;
        self.status_register.set(StatusFlags::CARRY, value & 0x01 != 0);
        self.write_shift_result(mode, operand, value >> 1 | carry_in << 7);
    }

    /// Shifts and rotates land either in A or back in the memory cell they
    /// read from; both paths drive Zero and Negative.
    fn write_shift_result(&mut self, mode: AddressingMode, operand: Operand, result: u8) {
        if mode == AddressingMode::Accumulator {
            self.set_register(Register::A, result);
        } else {
            let addr = self.operand_address(mode, operand);
            self.write_u8(addr, result);
            self.update_zero_and_negative(result);
        }
    }
}
