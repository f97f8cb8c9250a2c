//! The NMOS 6502 reference table: the nominal operation and base cycle count
//! of every opcode byte. Bytes whose operation is a placeholder (`NOP`, or the
//! dummy `XXX` used for illegal opcodes) seed default dispatch entries; every
//! other byte only gets an entry when a document declares it.

/// One row of the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultOpcode {
    pub name: &'static str,
    pub cycles: u32,
}

pub type Reference = [DefaultOpcode; 256];

/// Operation names marking a byte as a placeholder.
pub const PLACEHOLDERS: [&str; 2] = ["NOP", "XXX"];

impl DefaultOpcode {
    pub fn is_placeholder(&self) -> bool { PLACEHOLDERS.contains(&self.name) }
}

macro_rules! op {
    ($name:literal, $cycles:literal) => {
        DefaultOpcode {
            name: $name,
            cycles: $cycles,
        }
    };
}

#[rustfmt::skip]
pub const NMOS_6502: Reference = [
    /* 00 */ op!("BRK", 7),
    /* 01 */ op!("ORA", 6),
    /* 02 */ op!("XXX", 2),
    /* 03 */ op!("XXX", 8),
    /* 04 */ op!("NOP", 3),
    /* 05 */ op!("ORA", 3),
    /* 06 */ op!("ASL", 5),
    /* 07 */ op!("XXX", 5),
    /* 08 */ op!("PHP", 3),
    /* 09 */ op!("ORA", 2),
    /* 0a */ op!("ASL", 2),
    /* 0b */ op!("XXX", 2),
    /* 0c */ op!("NOP", 4),
    /* 0d */ op!("ORA", 4),
    /* 0e */ op!("ASL", 6),
    /* 0f */ op!("XXX", 6),
    /* 10 */ op!("BPL", 2),
    /* 11 */ op!("ORA", 5),
    /* 12 */ op!("XXX", 2),
    /* 13 */ op!("XXX", 8),
    /* 14 */ op!("NOP", 4),
    /* 15 */ op!("ORA", 4),
    /* 16 */ op!("ASL", 6),
    /* 17 */ op!("XXX", 6),
    /* 18 */ op!("CLC", 2),
    /* 19 */ op!("ORA", 4),
    /* 1a */ op!("NOP", 2),
    /* 1b */ op!("XXX", 7),
    /* 1c */ op!("NOP", 4),
    /* 1d */ op!("ORA", 4),
    /* 1e */ op!("ASL", 7),
    /* 1f */ op!("XXX", 7),
    /* 20 */ op!("JSR", 6),
    /* 21 */ op!("AND", 6),
    /* 22 */ op!("XXX", 2),
    /* 23 */ op!("XXX", 8),
    /* 24 */ op!("BIT", 3),
    /* 25 */ op!("AND", 3),
    /* 26 */ op!("ROL", 5),
    /* 27 */ op!("XXX", 5),
    /* 28 */ op!("PLP", 4),
    /* 29 */ op!("AND", 2),
    /* 2a */ op!("ROL", 2),
    /* 2b */ op!("XXX", 2),
    /* 2c */ op!("BIT", 4),
    /* 2d */ op!("AND", 4),
    /* 2e */ op!("ROL", 6),
    /* 2f */ op!("XXX", 6),
    /* 30 */ op!("BMI", 2),
    /* 31 */ op!("AND", 5),
    /* 32 */ op!("XXX", 2),
    /* 33 */ op!("XXX", 8),
    /* 34 */ op!("NOP", 4),
    /* 35 */ op!("AND", 4),
    /* 36 */ op!("ROL", 6),
    /* 37 */ op!("XXX", 6),
    /* 38 */ op!("SEC", 2),
    /* 39 */ op!("AND", 4),
    /* 3a */ op!("NOP", 2),
    /* 3b */ op!("XXX", 7),
    /* 3c */ op!("NOP", 4),
    /* 3d */ op!("AND", 4),
    /* 3e */ op!("ROL", 7),
    /* 3f */ op!("XXX", 7),
    /* 40 */ op!("RTI", 6),
    /* 41 */ op!("EOR", 6),
    /* 42 */ op!("XXX", 2),
    /* 43 */ op!("XXX", 8),
    /* 44 */ op!("NOP", 3),
    /* 45 */ op!("EOR", 3),
    /* 46 */ op!("LSR", 5),
    /* 47 */ op!("XXX", 5),
    /* 48 */ op!("PHA", 3),
    /* 49 */ op!("EOR", 2),
    /* 4a */ op!("LSR", 2),
    /* 4b */ op!("XXX", 2),
    /* 4c */ op!("JMP", 3),
    /* 4d */ op!("EOR", 4),
    /* 4e */ op!("LSR", 6),
    /* 4f */ op!("XXX", 6),
    /* 50 */ op!("BVC", 2),
    /* 51 */ op!("EOR", 5),
    /* 52 */ op!("XXX", 2),
    /* 53 */ op!("XXX", 8),
    /* 54 */ op!("NOP", 4),
    /* 55 */ op!("EOR", 4),
    /* 56 */ op!("LSR", 6),
    /* 57 */ op!("XXX", 6),
    /* 58 */ op!("CLI", 2),
    /* 59 */ op!("EOR", 4),
    /* 5a */ op!("NOP", 2),
    /* 5b */ op!("XXX", 7),
    /* 5c */ op!("NOP", 4),
    /* 5d */ op!("EOR", 4),
    /* 5e */ op!("LSR", 7),
    /* 5f */ op!("XXX", 7),
    /* 60 */ op!("RTS", 6),
    /* 61 */ op!("ADC", 6),
    /* 62 */ op!("XXX", 2),
    /* 63 */ op!("XXX", 8),
    /* 64 */ op!("NOP", 3),
    /* 65 */ op!("ADC", 3),
    /* 66 */ op!("ROR", 5),
    /* 67 */ op!("XXX", 5),
    /* 68 */ op!("PLA", 4),
    /* 69 */ op!("ADC", 2),
    /* 6a */ op!("ROR", 2),
    /* 6b */ op!("XXX", 2),
    /* 6c */ op!("JMP", 5),
    /* 6d */ op!("ADC", 4),
    /* 6e */ op!("ROR", 6),
    /* 6f */ op!("XXX", 6),
    /* 70 */ op!("BVS", 2),
    /* 71 */ op!("ADC", 5),
    /* 72 */ op!("XXX", 2),
    /* 73 */ op!("XXX", 8),
    /* 74 */ op!("NOP", 4),
    /* 75 */ op!("ADC", 4),
    /* 76 */ op!("ROR", 6),
    /* 77 */ op!("XXX", 6),
    /* 78 */ op!("SEI", 2),
    /* 79 */ op!("ADC", 4),
    /* 7a */ op!("NOP", 2),
    /* 7b */ op!("XXX", 7),
    /* 7c */ op!("NOP", 4),
    /* 7d */ op!("ADC", 4),
    /* 7e */ op!("ROR", 7),
    /* 7f */ op!("XXX", 7),
    /* 80 */ op!("NOP", 2),
    /* 81 */ op!("STA", 6),
    /* 82 */ op!("NOP", 2),
    /* 83 */ op!("XXX", 6),
    /* 84 */ op!("STY", 3),
    /* 85 */ op!("STA", 3),
    /* 86 */ op!("STX", 3),
    /* 87 */ op!("XXX", 3),
    /* 88 */ op!("DEY", 2),
    /* 89 */ op!("NOP", 2),
    /* 8a */ op!("TXA", 2),
    /* 8b */ op!("XXX", 2),
    /* 8c */ op!("STY", 4),
    /* 8d */ op!("STA", 4),
    /* 8e */ op!("STX", 4),
    /* 8f */ op!("XXX", 4),
    /* 90 */ op!("BCC", 2),
    /* 91 */ op!("STA", 6),
    /* 92 */ op!("XXX", 2),
    /* 93 */ op!("XXX", 6),
    /* 94 */ op!("STY", 4),
    /* 95 */ op!("STA", 4),
    /* 96 */ op!("STX", 4),
    /* 97 */ op!("XXX", 4),
    /* 98 */ op!("TYA", 2),
    /* 99 */ op!("STA", 5),
    /* 9a */ op!("TXS", 2),
    /* 9b */ op!("XXX", 5),
    /* 9c */ op!("NOP", 5),
    /* 9d */ op!("STA", 5),
    /* 9e */ op!("XXX", 5),
    /* 9f */ op!("XXX", 5),
    /* a0 */ op!("LDY", 2),
    /* a1 */ op!("LDA", 6),
    /* a2 */ op!("LDX", 2),
    /* a3 */ op!("XXX", 6),
    /* a4 */ op!("LDY", 3),
    /* a5 */ op!("LDA", 3),
    /* a6 */ op!("LDX", 3),
    /* a7 */ op!("XXX", 3),
    /* a8 */ op!("TAY", 2),
    /* a9 */ op!("LDA", 2),
    /* aa */ op!("TAX", 2),
    /* ab */ op!("XXX", 2),
    /* ac */ op!("LDY", 4),
    /* ad */ op!("LDA", 4),
    /* ae */ op!("LDX", 4),
    /* af */ op!("XXX", 4),
    /* b0 */ op!("BCS", 2),
    /* b1 */ op!("LDA", 5),
    /* b2 */ op!("XXX", 2),
    /* b3 */ op!("XXX", 5),
    /* b4 */ op!("LDY", 4),
    /* b5 */ op!("LDA", 4),
    /* b6 */ op!("LDX", 4),
    /* b7 */ op!("XXX", 4),
    /* b8 */ op!("CLV", 2),
    /* b9 */ op!("LDA", 4),
    /* ba */ op!("TSX", 2),
    /* bb */ op!("XXX", 4),
    /* bc */ op!("LDY", 4),
    /* bd */ op!("LDA", 4),
    /* be */ op!("LDX", 4),
    /* bf */ op!("XXX", 4),
    /* c0 */ op!("CPY", 2),
    /* c1 */ op!("CMP", 6),
    /* c2 */ op!("NOP", 2),
    /* c3 */ op!("XXX", 8),
    /* c4 */ op!("CPY", 3),
    /* c5 */ op!("CMP", 3),
    /* c6 */ op!("DEC", 5),
    /* c7 */ op!("XXX", 5),
    /* c8 */ op!("INY", 2),
    /* c9 */ op!("CMP", 2),
    /* ca */ op!("DEX", 2),
    /* cb */ op!("XXX", 2),
    /* cc */ op!("CPY", 4),
    /* cd */ op!("CMP", 4),
    /* ce */ op!("DEC", 6),
    /* cf */ op!("XXX", 6),
    /* d0 */ op!("BNE", 2),
    /* d1 */ op!("CMP", 5),
    /* d2 */ op!("XXX", 2),
    /* d3 */ op!("XXX", 8),
    /* d4 */ op!("NOP", 4),
    /* d5 */ op!("CMP", 4),
    /* d6 */ op!("DEC", 6),
    /* d7 */ op!("XXX", 6),
    /* d8 */ op!("CLD", 2),
    /* d9 */ op!("CMP", 4),
    /* da */ op!("NOP", 2),
    /* db */ op!("XXX", 7),
    /* dc */ op!("NOP", 4),
    /* dd */ op!("CMP", 4),
    /* de */ op!("DEC", 7),
    /* df */ op!("XXX", 7),
    /* e0 */ op!("CPX", 2),
    /* e1 */ op!("SBC", 6),
    /* e2 */ op!("NOP", 2),
    /* e3 */ op!("XXX", 8),
    /* e4 */ op!("CPX", 3),
    /* e5 */ op!("SBC", 3),
    /* e6 */ op!("INC", 5),
    /* e7 */ op!("XXX", 5),
    /* e8 */ op!("INX", 2),
    /* e9 */ op!("SBC", 2),
    /* ea */ op!("NOP", 2),
    /* eb */ op!("SBC", 2),
    /* ec */ op!("CPX", 4),
    /* ed */ op!("SBC", 4),
    /* ee */ op!("INC", 6),
    /* ef */ op!("XXX", 6),
    /* f0 */ op!("BEQ", 2),
    /* f1 */ op!("SBC", 5),
    /* f2 */ op!("XXX", 2),
    /* f3 */ op!("XXX", 8),
    /* f4 */ op!("NOP", 4),
    /* f5 */ op!("SBC", 4),
    /* f6 */ op!("INC", 6),
    /* f7 */ op!("XXX", 6),
    /* f8 */ op!("SED", 2),
    /* f9 */ op!("SBC", 4),
    /* fa */ op!("NOP", 2),
    /* fb */ op!("XXX", 7),
    /* fc */ op!("NOP", 4),
    /* fd */ op!("SBC", 4),
    /* fe */ op!("INC", 7),
    /* ff */ op!("XXX", 7),
];
