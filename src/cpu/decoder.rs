use phf::phf_map;

use super::StatusFlags;
use super::instruction::{AddressingMode, Conditional, Instruction, Operand, Operation, Register};
use crate::error::EmuError;

/// One row of the opcode table: everything that is known about an opcode
/// before its operand bytes are read.
struct OpcodeEntry {
    op: Operation,
    mode: AddressingMode,
    size: u8,
    cycles: u8,
    undocumented: bool,
}

const fn entry(op: Operation, mode: AddressingMode, size: u8, cycles: u8) -> OpcodeEntry {
    OpcodeEntry {
        op,
        mode,
        size,
        cycles,
        undocumented: false,
    }
}

const fn undoc(op: Operation, mode: AddressingMode, size: u8, cycles: u8) -> OpcodeEntry {
    OpcodeEntry {
        op,
        mode,
        size,
        cycles,
        undocumented: true,
    }
}

use super::instruction::AddressingMode as Mode;
use super::instruction::Operation as Op;

/// Every opcode the core recognizes, with its declared size and cycle count
/// per the canonical 6502 references. Bytes absent from this table decode
/// to [`EmuError::UnknownOpcode`].
static OPCODES: phf::Map<u8, OpcodeEntry> = phf_map! {
    // BRK
    0x00u8 => entry(Op::Break, Mode::Implied, 1, 7),

    // LDA
    0xA9u8 => entry(Op::LoadRegister(Register::A), Mode::Immediate, 2, 2),
    0xA5u8 => entry(Op::LoadRegister(Register::A), Mode::ZeroPage, 2, 3),
    0xB5u8 => entry(Op::LoadRegister(Register::A), Mode::ZeroPageX, 2, 4),
    0xADu8 => entry(Op::LoadRegister(Register::A), Mode::Absolute, 3, 4),
    0xBDu8 => entry(Op::LoadRegister(Register::A), Mode::AbsoluteX, 3, 4),
    0xB9u8 => entry(Op::LoadRegister(Register::A), Mode::AbsoluteY, 3, 4),
    0xA1u8 => entry(Op::LoadRegister(Register::A), Mode::IndirectX, 2, 6),
    0xB1u8 => entry(Op::LoadRegister(Register::A), Mode::IndirectY, 2, 5),

    // LDX
    0xA2u8 => entry(Op::LoadRegister(Register::X), Mode::Immediate, 2, 2),
    0xA6u8 => entry(Op::LoadRegister(Register::X), Mode::ZeroPage, 2, 3),
    0xB6u8 => entry(Op::LoadRegister(Register::X), Mode::ZeroPageY, 2, 4),
    0xAEu8 => entry(Op::LoadRegister(Register::X), Mode::Absolute, 3, 4),
    0xBEu8 => entry(Op::LoadRegister(Register::X), Mode::AbsoluteY, 3, 4),

    // LDY
    0xA0u8 => entry(Op::LoadRegister(Register::Y), Mode::Immediate, 2, 2),
    0xA4u8 => entry(Op::LoadRegister(Register::Y), Mode::ZeroPage, 2, 3),
    0xB4u8 => entry(Op::LoadRegister(Register::Y), Mode::ZeroPageX, 2, 4),
    0xACu8 => entry(Op::LoadRegister(Register::Y), Mode::Absolute, 3, 4),
    0xBCu8 => entry(Op::LoadRegister(Register::Y), Mode::AbsoluteX, 3, 4),

    // STA
    0x85u8 => entry(Op::StoreRegister(Register::A), Mode::ZeroPage, 2, 3),
    0x95u8 => entry(Op::StoreRegister(Register::A), Mode::ZeroPageX, 2, 4),
    0x8Du8 => entry(Op::StoreRegister(Register::A), Mode::Absolute, 3, 4),
    0x9Du8 => entry(Op::StoreRegister(Register::A), Mode::AbsoluteX, 3, 5),
    0x99u8 => entry(Op::StoreRegister(Register::A), Mode::AbsoluteY, 3, 5),
    0x81u8 => entry(Op::StoreRegister(Register::A), Mode::IndirectX, 2, 6),
    0x91u8 => entry(Op::StoreRegister(Register::A), Mode::IndirectY, 2, 6),

    // STX
    0x86u8 => entry(Op::StoreRegister(Register::X), Mode::ZeroPage, 2, 3),
    0x96u8 => entry(Op::StoreRegister(Register::X), Mode::ZeroPageY, 2, 4),
    0x8Eu8 => entry(Op::StoreRegister(Register::X), Mode::Absolute, 3, 4),

    // STY
    0x84u8 => entry(Op::StoreRegister(Register::Y), Mode::ZeroPage, 2, 3),
    0x94u8 => entry(Op::StoreRegister(Register::Y), Mode::ZeroPageX, 2, 4),
    0x8Cu8 => entry(Op::StoreRegister(Register::Y), Mode::Absolute, 3, 4),

    // Register transfers
    0xAAu8 => entry(Op::TransferRegisterTo(Register::A, Register::X), Mode::Implied, 1, 2),
    0xA8u8 => entry(Op::TransferRegisterTo(Register::A, Register::Y), Mode::Implied, 1, 2),
    0x8Au8 => entry(Op::TransferRegisterTo(Register::X, Register::A), Mode::Implied, 1, 2),
    0x98u8 => entry(Op::TransferRegisterTo(Register::Y, Register::A), Mode::Implied, 1, 2),
    0xBAu8 => entry(Op::TransferStackPointerToX, Mode::Implied, 1, 2),
    0x9Au8 => entry(Op::TransferXToStackPointer, Mode::Implied, 1, 2),

    // Stack
    0x48u8 => entry(Op::PushAccumulator, Mode::Implied, 1, 3),
    0x68u8 => entry(Op::PullAccumulator, Mode::Implied, 1, 4),
    0x08u8 => entry(Op::PushStatusRegister, Mode::Implied, 1, 3),
    0x28u8 => entry(Op::PullStatusRegister, Mode::Implied, 1, 4),

    // ADC
    0x69u8 => entry(Op::AddWithCarry, Mode::Immediate, 2, 2),
    0x65u8 => entry(Op::AddWithCarry, Mode::ZeroPage, 2, 3),
    0x75u8 => entry(Op::AddWithCarry, Mode::ZeroPageX, 2, 4),
    0x6Du8 => entry(Op::AddWithCarry, Mode::Absolute, 3, 4),
    0x7Du8 => entry(Op::AddWithCarry, Mode::AbsoluteX, 3, 4),
    0x79u8 => entry(Op::AddWithCarry, Mode::AbsoluteY, 3, 4),
    0x61u8 => entry(Op::AddWithCarry, Mode::IndirectX, 2, 6),
    0x71u8 => entry(Op::AddWithCarry, Mode::IndirectY, 2, 5),

    // SBC ($EB is the undocumented alias of $E9)
    0xE9u8 => entry(Op::SubtractWithCarry, Mode::Immediate, 2, 2),
    0xE5u8 => entry(Op::SubtractWithCarry, Mode::ZeroPage, 2, 3),
    0xF5u8 => entry(Op::SubtractWithCarry, Mode::ZeroPageX, 2, 4),
    0xEDu8 => entry(Op::SubtractWithCarry, Mode::Absolute, 3, 4),
    0xFDu8 => entry(Op::SubtractWithCarry, Mode::AbsoluteX, 3, 4),
    0xF9u8 => entry(Op::SubtractWithCarry, Mode::AbsoluteY, 3, 4),
    0xE1u8 => entry(Op::SubtractWithCarry, Mode::IndirectX, 2, 6),
    0xF1u8 => entry(Op::SubtractWithCarry, Mode::IndirectY, 2, 5),
    0xEBu8 => undoc(Op::SubtractWithCarry, Mode::Immediate, 2, 2),

    // AND
    0x29u8 => entry(Op::LogicalAnd, Mode::Immediate, 2, 2),
    0x25u8 => entry(Op::LogicalAnd, Mode::ZeroPage, 2, 3),
    0x35u8 => entry(Op::LogicalAnd, Mode::ZeroPageX, 2, 4),
    0x2Du8 => entry(Op::LogicalAnd, Mode::Absolute, 3, 4),
    0x3Du8 => entry(Op::LogicalAnd, Mode::AbsoluteX, 3, 4),
    0x39u8 => entry(Op::LogicalAnd, Mode::AbsoluteY, 3, 4),
    0x21u8 => entry(Op::LogicalAnd, Mode::IndirectX, 2, 6),
    0x31u8 => entry(Op::LogicalAnd, Mode::IndirectY, 2, 5),

    // EOR
    0x49u8 => entry(Op::ExclusiveOr, Mode::Immediate, 2, 2),
    0x45u8 => entry(Op::ExclusiveOr, Mode::ZeroPage, 2, 3),
    0x55u8 => entry(Op::ExclusiveOr, Mode::ZeroPageX, 2, 4),
    0x4Du8 => entry(Op::ExclusiveOr, Mode::Absolute, 3, 4),
    0x5Du8 => entry(Op::ExclusiveOr, Mode::AbsoluteX, 3, 4),
    0x59u8 => entry(Op::ExclusiveOr, Mode::AbsoluteY, 3, 4),
    0x41u8 => entry(Op::ExclusiveOr, Mode::IndirectX, 2, 6),
    0x51u8 => entry(Op::ExclusiveOr, Mode::IndirectY, 2, 5),

    // ORA
    0x09u8 => entry(Op::BitwiseOr, Mode::Immediate, 2, 2),
    0x05u8 => entry(Op::BitwiseOr, Mode::ZeroPage, 2, 3),
    0x15u8 => entry(Op::BitwiseOr, Mode::ZeroPageX, 2, 4),
    0x0Du8 => entry(Op::BitwiseOr, Mode::Absolute, 3, 4),
    0x1Du8 => entry(Op::BitwiseOr, Mode::AbsoluteX, 3, 4),
    0x19u8 => entry(Op::BitwiseOr, Mode::AbsoluteY, 3, 4),
    0x01u8 => entry(Op::BitwiseOr, Mode::IndirectX, 2, 6),
    0x11u8 => entry(Op::BitwiseOr, Mode::IndirectY, 2, 5),

    // ASL
    0x0Au8 => entry(Op::ShiftLeft, Mode::Accumulator, 1, 2),
    0x06u8 => entry(Op::ShiftLeft, Mode::ZeroPage, 2, 5),
    0x16u8 => entry(Op::ShiftLeft, Mode::ZeroPageX, 2, 6),
    0x0Eu8 => entry(Op::ShiftLeft, Mode::Absolute, 3, 6),
    0x1Eu8 => entry(Op::ShiftLeft, Mode::AbsoluteX, 3, 7),

    // LSR
    0x4Au8 => entry(Op::ShiftRight, Mode::Accumulator, 1, 2),
    0x46u8 => entry(Op::ShiftRight, Mode::ZeroPage, 2, 5),
    0x56u8 => entry(Op::ShiftRight, Mode::ZeroPageX, 2, 6),
    0x4Eu8 => entry(Op::ShiftRight, Mode::Absolute, 3, 6),
    0x5Eu8 => entry(Op::ShiftRight, Mode::AbsoluteX, 3, 7),

    // ROL
    0x2Au8 => entry(Op::RotateLeft, Mode::Accumulator, 1, 2),
    0x26u8 => entry(Op::RotateLeft, Mode::ZeroPage, 2, 5),
    0x36u8 => entry(Op::RotateLeft, Mode::ZeroPageX, 2, 6),
    0x2Eu8 => entry(Op::RotateLeft, Mode::Absolute, 3, 6),
    0x3Eu8 => entry(Op::RotateLeft, Mode::AbsoluteX, 3, 7),

    // ROR
    0x6Au8 => entry(Op::RotateRight, Mode::Accumulator, 1, 2),
    0x66u8 => entry(Op::RotateRight, Mode::ZeroPage, 2, 5),
    0x76u8 => entry(Op::RotateRight, Mode::ZeroPageX, 2, 6),
    0x6Eu8 => entry(Op::RotateRight, Mode::Absolute, 3, 6),
    0x7Eu8 => entry(Op::RotateRight, Mode::AbsoluteX, 3, 7),

    // INC
    0xE6u8 => entry(Op::Increment, Mode::ZeroPage, 2, 5),
    0xF6u8 => entry(Op::Increment, Mode::ZeroPageX, 2, 6),
    0xEEu8 => entry(Op::Increment, Mode::Absolute, 3, 6),
    0xFEu8 => entry(Op::Increment, Mode::AbsoluteX, 3, 7),

    // DEC
    0xC6u8 => entry(Op::Decrement, Mode::ZeroPage, 2, 5),
    0xD6u8 => entry(Op::Decrement, Mode::ZeroPageX, 2, 6),
    0xCEu8 => entry(Op::Decrement, Mode::Absolute, 3, 6),
    0xDEu8 => entry(Op::Decrement, Mode::AbsoluteX, 3, 7),

    // INX, INY, DEX, DEY
    0xE8u8 => entry(Op::IncrementRegister(Register::X), Mode::Implied, 1, 2),
    0xC8u8 => entry(Op::IncrementRegister(Register::Y), Mode::Implied, 1, 2),
    0xCAu8 => entry(Op::DecrementRegister(Register::X), Mode::Implied, 1, 2),
    0x88u8 => entry(Op::DecrementRegister(Register::Y), Mode::Implied, 1, 2),

    // CMP
    0xC9u8 => entry(Op::CompareRegister(Register::A), Mode::Immediate, 2, 2),
    0xC5u8 => entry(Op::CompareRegister(Register::A), Mode::ZeroPage, 2, 3),
    0xD5u8 => entry(Op::CompareRegister(Register::A), Mode::ZeroPageX, 2, 4),
    0xCDu8 => entry(Op::CompareRegister(Register::A), Mode::Absolute, 3, 4),
    0xDDu8 => entry(Op::CompareRegister(Register::A), Mode::AbsoluteX, 3, 4),
    0xD9u8 => entry(Op::CompareRegister(Register::A), Mode::AbsoluteY, 3, 4),
    0xC1u8 => entry(Op::CompareRegister(Register::A), Mode::IndirectX, 2, 6),
    0xD1u8 => entry(Op::CompareRegister(Register::A), Mode::IndirectY, 2, 5),

    // CPX
    0xE0u8 => entry(Op::CompareRegister(Register::X), Mode::Immediate, 2, 2),
    0xE4u8 => entry(Op::CompareRegister(Register::X), Mode::ZeroPage, 2, 3),
    0xECu8 => entry(Op::CompareRegister(Register::X), Mode::Absolute, 3, 4),

    // CPY
    0xC0u8 => entry(Op::CompareRegister(Register::Y), Mode::Immediate, 2, 2),
    0xC4u8 => entry(Op::CompareRegister(Register::Y), Mode::ZeroPage, 2, 3),
    0xCCu8 => entry(Op::CompareRegister(Register::Y), Mode::Absolute, 3, 4),

    // BIT
    0x24u8 => entry(Op::BitTest, Mode::ZeroPage, 2, 3),
    0x2Cu8 => entry(Op::BitTest, Mode::Absolute, 3, 4),

    // Branches
    0x10u8 => entry(Op::Branch(Conditional::Positive), Mode::Relative, 2, 2),
    0x30u8 => entry(Op::Branch(Conditional::Minus), Mode::Relative, 2, 2),
    0x50u8 => entry(Op::Branch(Conditional::OverflowClear), Mode::Relative, 2, 2),
    0x70u8 => entry(Op::Branch(Conditional::OverflowSet), Mode::Relative, 2, 2),
    0x90u8 => entry(Op::Branch(Conditional::CarryClear), Mode::Relative, 2, 2),
    0xB0u8 => entry(Op::Branch(Conditional::CarrySet), Mode::Relative, 2, 2),
    0xD0u8 => entry(Op::Branch(Conditional::NotEqual), Mode::Relative, 2, 2),
    0xF0u8 => entry(Op::Branch(Conditional::Equal), Mode::Relative, 2, 2),

    // JMP, JSR, RTS, RTI
    0x4Cu8 => entry(Op::Jump, Mode::Absolute, 3, 3),
    0x6Cu8 => entry(Op::Jump, Mode::Indirect, 3, 5),
    0x20u8 => entry(Op::JumpToSubroutine, Mode::Absolute, 3, 6),
    0x60u8 => entry(Op::ReturnFromSubroutine, Mode::Implied, 1, 6),
    0x40u8 => entry(Op::ReturnFromInterrupt, Mode::Implied, 1, 6),

    // Flag clears and sets
    0x18u8 => entry(Op::ClearStatusFlag(StatusFlags::CARRY), Mode::Implied, 1, 2),
    0xD8u8 => entry(Op::ClearStatusFlag(StatusFlags::DECIMAL_MODE), Mode::Implied, 1, 2),
    0x58u8 => entry(Op::ClearStatusFlag(StatusFlags::INTERRUPT_DISABLE), Mode::Implied, 1, 2),
    0xB8u8 => entry(Op::ClearStatusFlag(StatusFlags::OVERFLOW), Mode::Implied, 1, 2),
    0x38u8 => entry(Op::SetStatusFlag(StatusFlags::CARRY), Mode::Implied, 1, 2),
    0xF8u8 => entry(Op::SetStatusFlag(StatusFlags::DECIMAL_MODE), Mode::Implied, 1, 2),
    0x78u8 => entry(Op::SetStatusFlag(StatusFlags::INTERRUPT_DISABLE), Mode::Implied, 1, 2),

    // NOP, plus the undocumented single-byte NOPs
    0xEAu8 => entry(Op::NoOperation, Mode::Implied, 1, 2),
    0x1Au8 => undoc(Op::NoOperation, Mode::Implied, 1, 2),
    0x3Au8 => undoc(Op::NoOperation, Mode::Implied, 1, 2),
    0x5Au8 => undoc(Op::NoOperation, Mode::Implied, 1, 2),
    0x7Au8 => undoc(Op::NoOperation, Mode::Implied, 1, 2),
    0xDAu8 => undoc(Op::NoOperation, Mode::Implied, 1, 2),
    0xFAu8 => undoc(Op::NoOperation, Mode::Implied, 1, 2),

    // DOP: two-byte NOPs
    0x80u8 => undoc(Op::DoubleNoOperation, Mode::Immediate, 2, 2),
    0x82u8 => undoc(Op::DoubleNoOperation, Mode::Immediate, 2, 2),
    0x89u8 => undoc(Op::DoubleNoOperation, Mode::Immediate, 2, 2),
    0xC2u8 => undoc(Op::DoubleNoOperation, Mode::Immediate, 2, 2),
    0xE2u8 => undoc(Op::DoubleNoOperation, Mode::Immediate, 2, 2),
    0x04u8 => undoc(Op::DoubleNoOperation, Mode::ZeroPage, 2, 3),
    0x44u8 => undoc(Op::DoubleNoOperation, Mode::ZeroPage, 2, 3),
    0x64u8 => undoc(Op::DoubleNoOperation, Mode::ZeroPage, 2, 3),
    0x14u8 => undoc(Op::DoubleNoOperation, Mode::ZeroPageX, 2, 4),
    0x34u8 => undoc(Op::DoubleNoOperation, Mode::ZeroPageX, 2, 4),
    0x54u8 => undoc(Op::DoubleNoOperation, Mode::ZeroPageX, 2, 4),
    0x74u8 => undoc(Op::DoubleNoOperation, Mode::ZeroPageX, 2, 4),
    0xD4u8 => undoc(Op::DoubleNoOperation, Mode::ZeroPageX, 2, 4),
    0xF4u8 => undoc(Op::DoubleNoOperation, Mode::ZeroPageX, 2, 4),

    // TOP: three-byte NOPs
    0x0Cu8 => undoc(Op::TripleNoOperation, Mode::Absolute, 3, 4),
    0x1Cu8 => undoc(Op::TripleNoOperation, Mode::AbsoluteX, 3, 4),
    0x3Cu8 => undoc(Op::TripleNoOperation, Mode::AbsoluteX, 3, 4),
    0x5Cu8 => undoc(Op::TripleNoOperation, Mode::AbsoluteX, 3, 4),
    0x7Cu8 => undoc(Op::TripleNoOperation, Mode::AbsoluteX, 3, 4),
    0xDCu8 => undoc(Op::TripleNoOperation, Mode::AbsoluteX, 3, 4),
    0xFCu8 => undoc(Op::TripleNoOperation, Mode::AbsoluteX, 3, 4),

    // LAX
    0xA7u8 => undoc(Op::LoadAccumulatorAndX, Mode::ZeroPage, 2, 3),
    0xB7u8 => undoc(Op::LoadAccumulatorAndX, Mode::ZeroPageY, 2, 4),
    0xAFu8 => undoc(Op::LoadAccumulatorAndX, Mode::Absolute, 3, 4),
    0xBFu8 => undoc(Op::LoadAccumulatorAndX, Mode::AbsoluteY, 3, 4),
    0xA3u8 => undoc(Op::LoadAccumulatorAndX, Mode::IndirectX, 2, 6),
    0xB3u8 => undoc(Op::LoadAccumulatorAndX, Mode::IndirectY, 2, 5),

    // SAX
    0x87u8 => undoc(Op::StoreAccumulatorAndX, Mode::ZeroPage, 2, 3),
    0x97u8 => undoc(Op::StoreAccumulatorAndX, Mode::ZeroPageY, 2, 4),
    0x8Fu8 => undoc(Op::StoreAccumulatorAndX, Mode::Absolute, 3, 4),
    0x83u8 => undoc(Op::StoreAccumulatorAndX, Mode::IndirectX, 2, 6),

    // DCP
    0xC7u8 => undoc(Op::DecrementCompare, Mode::ZeroPage, 2, 5),
    0xD7u8 => undoc(Op::DecrementCompare, Mode::ZeroPageX, 2, 6),
    0xCFu8 => undoc(Op::DecrementCompare, Mode::Absolute, 3, 6),
    0xDFu8 => undoc(Op::DecrementCompare, Mode::AbsoluteX, 3, 7),
    0xDBu8 => undoc(Op::DecrementCompare, Mode::AbsoluteY, 3, 7),
    0xC3u8 => undoc(Op::DecrementCompare, Mode::IndirectX, 2, 8),
    0xD3u8 => undoc(Op::DecrementCompare, Mode::IndirectY, 2, 8),

    // ISB
    0xE7u8 => undoc(Op::IncrementSubtract, Mode::ZeroPage, 2, 5),
    0xF7u8 => undoc(Op::IncrementSubtract, Mode::ZeroPageX, 2, 6),
    0xEFu8 => undoc(Op::IncrementSubtract, Mode::Absolute, 3, 6),
    0xFFu8 => undoc(Op::IncrementSubtract, Mode::AbsoluteX, 3, 7),
    0xFBu8 => undoc(Op::IncrementSubtract, Mode::AbsoluteY, 3, 7),
    0xE3u8 => undoc(Op::IncrementSubtract, Mode::IndirectX, 2, 8),
    0xF3u8 => undoc(Op::IncrementSubtract, Mode::IndirectY, 2, 8),

    // SLO
    0x07u8 => undoc(Op::ShiftLeftOr, Mode::ZeroPage, 2, 5),
    0x17u8 => undoc(Op::ShiftLeftOr, Mode::ZeroPageX, 2, 6),
    0x0Fu8 => undoc(Op::ShiftLeftOr, Mode::Absolute, 3, 6),
    0x1Fu8 => undoc(Op::ShiftLeftOr, Mode::AbsoluteX, 3, 7),
    0x1Bu8 => undoc(Op::ShiftLeftOr, Mode::AbsoluteY, 3, 7),
    0x03u8 => undoc(Op::ShiftLeftOr, Mode::IndirectX, 2, 8),
    0x13u8 => undoc(Op::ShiftLeftOr, Mode::IndirectY, 2, 8),

    // RLA
    0x27u8 => undoc(Op::RotateLeftAnd, Mode::ZeroPage, 2, 5),
    0x37u8 => undoc(Op::RotateLeftAnd, Mode::ZeroPageX, 2, 6),
    0x2Fu8 => undoc(Op::RotateLeftAnd, Mode::Absolute, 3, 6),
    0x3Fu8 => undoc(Op::RotateLeftAnd, Mode::AbsoluteX, 3, 7),
    0x3Bu8 => undoc(Op::RotateLeftAnd, Mode::AbsoluteY, 3, 7),
    0x23u8 => undoc(Op::RotateLeftAnd, Mode::IndirectX, 2, 8),
    0x33u8 => undoc(Op::RotateLeftAnd, Mode::IndirectY, 2, 8),

    // SRE
    0x47u8 => undoc(Op::ShiftRightEor, Mode::ZeroPage, 2, 5),
    0x57u8 => undoc(Op::ShiftRightEor, Mode::ZeroPageX, 2, 6),
    0x4Fu8 => undoc(Op::ShiftRightEor, Mode::Absolute, 3, 6),
    0x5Fu8 => undoc(Op::ShiftRightEor, Mode::AbsoluteX, 3, 7),
    0x5Bu8 => undoc(Op::ShiftRightEor, Mode::AbsoluteY, 3, 7),
    0x43u8 => undoc(Op::ShiftRightEor, Mode::IndirectX, 2, 8),
    0x53u8 => undoc(Op::ShiftRightEor, Mode::IndirectY, 2, 8),

    // RRA
    0x67u8 => undoc(Op::RotateRightAdd, Mode::ZeroPage, 2, 5),
    0x77u8 => undoc(Op::RotateRightAdd, Mode::ZeroPageX, 2, 6),
    0x6Fu8 => undoc(Op::RotateRightAdd, Mode::Absolute, 3, 6),
    0x7Fu8 => undoc(Op::RotateRightAdd, Mode::AbsoluteX, 3, 7),
    0x7Bu8 => undoc(Op::RotateRightAdd, Mode::AbsoluteY, 3, 7),
    0x63u8 => undoc(Op::RotateRightAdd, Mode::IndirectX, 2, 8),
    0x73u8 => undoc(Op::RotateRightAdd, Mode::IndirectY, 2, 8),
};

/// Decodes the instruction starting at `bytes[0]`.
///
/// `bytes` must contain at least one byte; instructions with operands read
/// up to two more, so callers fetching from a program counter should pass
/// the full three-byte window. 16-bit operands are little-endian.
pub fn decode(bytes: &[u8]) -> Result<Instruction, EmuError> {
    let opcode = bytes[0];
    let entry = OPCODES
        .get(&opcode)
        .ok_or(EmuError::UnknownOpcode(opcode))?;

    let operand = match entry.mode {
        Mode::Implied | Mode::Accumulator => Operand::None,
        Mode::Relative => Operand::Offset(bytes[1] as i8),
        Mode::Immediate
        | Mode::ZeroPage
        | Mode::ZeroPageX
        | Mode::ZeroPageY
        | Mode::IndirectX
        | Mode::IndirectY => Operand::Byte(bytes[1]),
        Mode::Absolute | Mode::AbsoluteX | Mode::AbsoluteY | Mode::Indirect => {
            Operand::Word(u16::from_le_bytes([bytes[1], bytes[2]]))
        }
    };

    Ok(Instruction {
        op: entry.op,
        mode: entry.mode,
        operand,
        size: entry.size,
        cycles: entry.cycles,
        undocumented: entry.undocumented,
    })
}
