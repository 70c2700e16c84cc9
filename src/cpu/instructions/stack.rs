use crate::cpu::instruction::Register;
use crate::cpu::{Cpu, StatusFlags};

impl Cpu<'_> {
    pub(crate) fn push_accumulator(&mut self) {
        self.push_u8(self.accumulator);
    }

    pub(crate) fn pull_accumulator(&mut self) {
        let value = self.pop_u8();
        self.set_register(Register::A, value);
    }

    /// PHP pushes with Break and Unused forced to 1.
    pub(crate) fn push_status_register(&mut self) {
        let pushed = self.status_register | StatusFlags::BREAK | StatusFlags::UNUSED;
        self.push_u8(pushed.bits());
    }

    pub(crate) fn pull_status_register(&mut self) {
        let pulled = self.pop_u8();
        self.status_register = Self::status_from_pulled(pulled);
    }

    /// The rule PLP and RTI share: bit 5 always reads back as 1 and the
    /// Break bit never makes it into the register, since it only exists in
    /// pushed bytes.
    pub(crate) fn status_from_pulled(pulled: u8) -> StatusFlags {
        (StatusFlags::from_bits_truncate(pulled) | StatusFlags::UNUSED) - StatusFlags::BREAK
    }
}
