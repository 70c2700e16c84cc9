use crate::cpu::instruction::{AddressingMode, Operand, Register};
use crate::cpu::Cpu;

impl Cpu<'_> {
    pub(crate) fn load_register(&mut self, register: Register, mode: AddressingMode, operand: Operand) {
        let value = self.operand_value(mode, operand);
        self.set_register(register, value);
    }

    /// Stores never touch the status register.
    pub(crate) fn store_register(&mut self, register: Register, mode: AddressingMode, operand: Operand) {
        let addr = self.operand_address(mode, operand);
        self.write_u8(addr, self.register(register));
    }

    /// Undocumented LAX: one memory read lands in both A and X.
    pub(crate) fn load_accumulator_and_x(&mut self, mode: AddressingMode, operand: Operand) {
        let value = self.operand_value(mode, operand);
        self.accumulator = value;
        self.set_register(Register::X, value);
    }

    /// Undocumented SAX: stores A AND X without driving any flags.
    pub(crate) fn store_accumulator_and_x(&mut self, mode: AddressingMode, operand: Operand) {
        let addr = self.operand_address(mode, operand);
        self.write_u8(addr, self.accumulator & self.x_register);
    }
}
