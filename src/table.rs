//! The 256-slot opcode table the dispatch routine is generated from.
//!
//! Slots are seeded from the reference table's placeholder bytes, then each
//! instruction document's addressing mode rows are inserted. A document row
//! may replace a seeded default, but two document rows can never share a
//! byte: that is reported as a conflict instead of letting the later row win.
use super::loader::SpecLoader;
use super::modes::{self, Unsupported};
use super::reference::Reference;
use super::sections::InstructionSpec;
use super::*;

use std::io;

/// Column holding the addressing mode label.
const COL_MODE: usize = 0;
/// Column holding the opcode, written as `$XX`.
const COL_OPCODE: usize = 2;
/// Column holding the cycle count, suffixed with `+` when crossing a page costs a cycle.
const COL_CYCLES: usize = 4;

/// A parsed row of an instruction's addressing mode table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressingModeRow {
    pub label: String,
    pub opcode: u8,
    pub cycles: u32,
    pub page_cross: bool,
}
impl AddressingModeRow {
    /// Parses the cells of one table row. The error is a description of what's wrong with the row.
    pub fn parse(cells: &[String]) -> Result<Self, String> {
        if cells.len() <= COL_CYCLES {
            return Err(format!("expected at least {} cells, found {}", COL_CYCLES + 1, cells.len()));
        }
        // the opcode cell looks like "$A9"; the two characters after the sigil are the byte
        let op_cell = &cells[COL_OPCODE];
        let hex: String = op_cell.chars().skip(1).take(2).collect();
        if hex.chars().count() != 2 {
            return Err(format!("opcode \"{}\" is too short", op_cell));
        }
        // from_str_radix alone would let a sign through ("$+A")
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("opcode \"{}\" is not hexadecimal", op_cell));
        }
        let opcode = u8::from_str_radix(&hex, 16).map_err(|_| format!("opcode \"{}\" is not hexadecimal", op_cell))?;
        let cyc_cell = cells[COL_CYCLES].trim();
        let digits: String = cyc_cell.chars().take_while(|c| c.is_ascii_digit()).collect();
        let cycles = digits
            .parse::<u32>()
            .map_err(|_| format!("cycle count \"{}\" is not numeric", cyc_cell))?;
        Ok(AddressingModeRow {
            label: cells[COL_MODE].clone(),
            opcode,
            cycles,
            page_cross: cyc_cell.ends_with('+'),
        })
    }
}

/// Where an entry came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// seeded from the reference table
    Default,
    /// declared by the named instruction document
    Document(String),
}
impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Origin::Default => write!(f, "default"),
            Origin::Document(id) => write!(f, "{}", id),
        }
    }
}

/// Everything the dispatch routine needs for one opcode byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub opcode: u8,
    /// resolver name, see modes::MODES
    pub mode: &'static str,
    /// instruction identifier, e.g. "LDA"
    pub id: String,
    pub cycles: u32,
    pub page_cross: bool,
    /// appended verbatim after the body invocation
    pub extra: String,
    pub origin: Origin,
}
impl OpcodeEntry {
    /// The byte as a fixed width `0x..` literal. Arms are ordered by this key, which
    /// only sorts numerically because every key has the same width.
    pub fn key(&self) -> String { format!("0x{:02x}", self.opcode) }
    pub fn body_name(&self) -> String { self.id.to_lowercase() }
}

pub struct OpcodeTable {
    slots: [Option<OpcodeEntry>; 256],
}
impl OpcodeTable {
    pub fn new() -> Self {
        OpcodeTable {
            slots: std::array::from_fn(|_| None),
        }
    }
    /// A table holding a default entry for every placeholder byte of `reference`.
    pub fn seeded(reference: &Reference) -> Self {
        let mut table = OpcodeTable::new();
        for (op, r) in reference.iter().enumerate() {
            if r.is_placeholder() {
                table.slots[op] = Some(OpcodeEntry {
                    opcode: op as u8,
                    mode: modes::IMPLIED,
                    id: r.name.to_string(),
                    cycles: r.cycles,
                    page_cross: false,
                    extra: String::new(),
                    origin: Origin::Default,
                });
            }
        }
        table
    }
    /// Places a document entry in its slot. Defaults give way; another document's entry doesn't.
    pub fn insert(&mut self, entry: OpcodeEntry) -> Result<(), Error> {
        let slot = &mut self.slots[entry.opcode as usize];
        if let Some(existing) = slot.as_ref().filter(|e| e.origin != Origin::Default) {
            return Err(conflict_err!(
                SpecLoader::file_name(&entry.id),
                "opcode {} is declared by both {} and {}",
                entry.key(),
                existing.origin,
                entry.origin
            ));
        }
        *slot = Some(entry);
        Ok(())
    }
    /// Inserts every row of an instruction's table. All problems are returned rather than just the first.
    pub fn add_instruction(&mut self, spec: &InstructionSpec) -> Vec<Error> {
        let mut errors = Vec::new();
        let Some(rows) = spec.rows.as_ref() else {
            return errors;
        };
        for (i, cells) in rows.iter().enumerate() {
            let row = match AddressingModeRow::parse(cells) {
                Ok(row) => row,
                Err(e) => {
                    errors.push(malformed_row_err!(spec.doc_name(), "row {} ({}): {}", i + 1, cells.join(" | "), e));
                    continue;
                }
            };
            let mode = match modes::lookup(&row.label) {
                Ok(m) => m,
                Err(Unsupported::Unknown) => {
                    errors.push(unsupported_mode_err!(
                        spec.doc_name(),
                        "{} opcode 0x{:02x}: unknown addressing mode \"{}\"",
                        spec.id,
                        row.opcode,
                        row.label
                    ));
                    continue;
                }
                Err(Unsupported::Disabled(m)) => {
                    errors.push(unsupported_mode_err!(
                        spec.doc_name(),
                        "{} opcode 0x{:02x}: addressing mode \"{}\" ({}) is not enabled",
                        spec.id,
                        row.opcode,
                        row.label,
                        m.code
                    ));
                    continue;
                }
            };
            let entry = OpcodeEntry {
                opcode: row.opcode,
                mode: mode.code,
                id: spec.id.clone(),
                cycles: row.cycles,
                page_cross: row.page_cross,
                extra: spec.extra.clone(),
                origin: Origin::Document(spec.id.clone()),
            };
            if let Err(e) = self.insert(entry) {
                errors.push(e);
            }
        }
        errors
    }
    pub fn get(&self, opcode: u8) -> Option<&OpcodeEntry> { self.slots[opcode as usize].as_ref() }
    /// Populated entries in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = &OpcodeEntry> { self.slots.iter().flatten() }
    pub fn len(&self) -> usize { self.iter().count() }
    pub fn write_listing(&self, f: &mut dyn io::Write) -> Result<(), io::Error> {
        writeln!(f, "{:4}  {:4}  {:4}  {:6}  {}", "OP", "MODE", "INST", "CYCLES", "SOURCE")?;
        for e in self.iter() {
            let cycles = format!("{}{}", e.cycles, if e.page_cross { "+" } else { "" });
            writeln!(f, "{:4}  {:4}  {:4}  {:6}  {}", e.key(), e.mode, e.id, cycles, e.origin)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{DefaultOpcode, NMOS_6502};

    fn cells(row: &[&str]) -> Vec<String> { row.iter().map(|s| s.to_string()).collect() }
    fn spec(id: &str, rows: &[&[&str]]) -> InstructionSpec {
        InstructionSpec {
            id: id.to_string(),
            rows: Some(rows.iter().map(|r| cells(r)).collect()),
            body: String::new(),
            extra: String::new(),
        }
    }

    #[test]
    fn parse_rows() {
        let row = AddressingModeRow::parse(&cells(&["Absolute,X", "LDA a,X", "$BD", "3", "4+"])).unwrap();
        assert_eq!(row.opcode, 0xbd);
        assert_eq!(row.cycles, 4);
        assert!(row.page_cross);
        let row = AddressingModeRow::parse(&cells(&["Immediate", "LDA #", "$a9", "2", "2"])).unwrap();
        assert_eq!(row.opcode, 0xa9);
        assert!(!row.page_cross);
        // trailing text after the count is ignored, the marker must be last
        let row = AddressingModeRow::parse(&cells(&["Absolute", "", "$6D", "3", "4 (+1)"])).unwrap();
        assert_eq!(row.cycles, 4);
        assert!(!row.page_cross);
    }
    #[test]
    fn malformed_rows() {
        assert!(AddressingModeRow::parse(&cells(&["Immediate", "LDA #", "$A9", "2"])).is_err());
        assert!(AddressingModeRow::parse(&cells(&["Immediate", "LDA #", "$G9", "2", "2"])).is_err());
        assert!(AddressingModeRow::parse(&cells(&["Immediate", "LDA #", "$A", "2", "2"])).is_err());
        assert!(AddressingModeRow::parse(&cells(&["Immediate", "LDA #", "$+A", "2", "2"])).is_err());
        assert!(AddressingModeRow::parse(&cells(&["Immediate", "LDA #", "$ A", "2", "2"])).is_err());
        assert!(AddressingModeRow::parse(&cells(&["Immediate", "LDA #", "$A9", "2", "+"])).is_err());
    }
    #[test]
    fn seeding() {
        let table = OpcodeTable::seeded(&NMOS_6502);
        assert_eq!(table.len(), 105);
        let e = table.get(0x02).unwrap();
        assert_eq!((e.mode, e.id.as_str(), e.cycles), ("imp", "XXX", 2));
        assert!(table.get(0xa9).is_none());
    }
    #[test]
    fn documents_replace_defaults() {
        let mut table = OpcodeTable::seeded(&NMOS_6502);
        let errors = table.add_instruction(&spec("NOP", &[&["Implied", "NOP", "$EA", "1", "2"]]));
        assert!(errors.is_empty());
        assert_eq!(table.get(0xea).unwrap().origin, Origin::Document("NOP".to_string()));
        assert_eq!(table.len(), 105);
    }
    #[test]
    fn conflicts_are_reported() {
        let mut table = OpcodeTable::new();
        assert!(table.add_instruction(&spec("LSR", &[&["Zero Page", "", "$4A", "2", "2"]])).is_empty());
        let errors = table.add_instruction(&spec("ROR", &[&["Zero Page", "", "$4A", "2", "2"]]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::OpcodeConflict);
        let msg = errors[0].to_string();
        assert!(msg.contains("0x4a") && msg.contains("LSR") && msg.contains("ROR"), "{}", msg);
        // first writer is kept
        assert_eq!(table.get(0x4a).unwrap().id, "LSR");
    }
    #[test]
    fn conflicts_within_one_document() {
        let mut table = OpcodeTable::new();
        let errors = table.add_instruction(&spec(
            "LDA",
            &[&["Immediate", "", "$A9", "2", "2"], &["Absolute", "", "$A9", "3", "4"]],
        ));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::OpcodeConflict);
    }
    #[test]
    fn every_bad_row_is_reported() {
        let mut table = OpcodeTable::new();
        let errors = table.add_instruction(&spec(
            "ASL",
            &[
                &["Accumulator", "ASL A", "$0A", "1", "2"],
                &["Sideways", "ASL ?", "$0B", "1", "2"],
                &["Zero Page", "ASL zp", "$06", "2"],
                &["Absolute", "ASL a", "$0E", "3", "6"],
            ],
        ));
        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [ErrorKind::UnsupportedMode, ErrorKind::UnsupportedMode, ErrorKind::MalformedRow]
        );
        let msg = errors[0].to_string();
        assert!(msg.contains("Accumulator") && msg.contains("ASL") && msg.contains("0x0a"), "{}", msg);
        assert_eq!(table.len(), 1);
    }
    #[test]
    fn listing() -> Result<(), Error> {
        let mut reference = NMOS_6502;
        reference.iter_mut().for_each(|r| *r = DefaultOpcode { name: "LDA", cycles: 2 });
        reference[0x10] = DefaultOpcode { name: "NOP", cycles: 2 };
        let mut table = OpcodeTable::seeded(&reference);
        assert!(table.add_instruction(&spec("LDA", &[&["Absolute,Y", "", "$B9", "3", "4+"]])).is_empty());
        let mut out = Vec::new();
        table.write_listing(&mut out)?;
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("0x10  imp   NOP   2       default"), "{}", lines[1]);
        assert!(lines[2].starts_with("0xb9  aby   LDA   4+      LDA"), "{}", lines[2]);
        Ok(())
    }
}
