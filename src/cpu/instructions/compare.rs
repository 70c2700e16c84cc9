use crate::cpu::instruction::{AddressingMode, Operand, Register};
use crate::cpu::{Cpu, StatusFlags};

impl Cpu<'_> {
    /// CMP/CPX/CPY: a subtraction whose result is dropped. The compared
    /// register is never written.
    pub(crate) fn compare_register(&mut self, register: Register, mode: AddressingMode, operand: Operand) {
        let value = self.operand_value(mode, operand);
        self.compare_value(self.register(register), value);
    }

    /// Carry means unsigned `>=`; Zero and Negative come from the wrapped
    /// difference. Shared with the undocumented DCP combo.
    pub(crate) fn compare_value(&mut self, register_value: u8, value: u8) {
        self.status_register
            .set(StatusFlags::CARRY, register_value >= value);
        self.update_zero_and_negative(register_value.wrapping_sub(value));
    }
}
