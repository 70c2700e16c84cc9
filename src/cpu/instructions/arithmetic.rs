use crate::cpu::instruction::{AddressingMode, Operand};
use crate::cpu::{Cpu, Register, StatusFlags};

impl Cpu<'_> {
    pub(crate) fn add_with_carry(&mut self, mode: AddressingMode, operand: Operand) {
        let value = self.operand_value(mode, operand);
        self.add_to_accumulator(value);
    }

    /// SBC is ADC of the one's complement: the carry flag acts as an
    /// inverted borrow, so carry set means "no borrow in".
    pub(crate) fn subtract_with_carry(&mut self, mode: AddressingMode, operand: Operand) {
        let value = self.operand_value(mode, operand);
        self.add_to_accumulator(value ^ 0xFF);
    }

    /// The shared ADC core. The 2A03 has no working decimal mode, so the
    /// DecimalMode flag is ignored here.
    pub(crate) fn add_to_accumulator(&mut self, value: u8) {
        let carry_in = self.status_register.contains(StatusFlags::CARRY) as u16;
        let sum = self.accumulator as u16 + value as u16 + carry_in;
        let result = sum as u8;

        self.status_register.set(StatusFlags::CARRY, sum > 0xFF);
        // Signed overflow: both operands agree in sign and the result does
        // not.
        let overflow = (self.accumulator ^ result) & (value ^ result) & 0x80 != 0;
        self.status_register.set(StatusFlags::OVERFLOW, overflow);

        self.set_register(Register::A, result);
    }
}
