//! Renders a validated Model into the two generated source files:
//! the instruction body macros and the `clock` dispatch routine.
//!
//! Rendering is infallible and deterministic; the same model always yields
//! byte-identical text.
use super::model::Model;
use super::table::OpcodeEntry;

use std::fmt::Write;

const HEADER: &str = "// @generated by opgen from the instruction documents. Do not edit.\n";

/// The two rendered outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// body macros, one per instruction
    pub instructions: String,
    /// the dispatch routine
    pub clock: String,
}

pub fn render(model: &Model) -> Generated {
    Generated {
        instructions: render_bodies(model),
        clock: render_dispatch(model),
    }
}

fn write_body(out: &mut String, name: &str, body: &str) {
    _ = writeln!(out, "#[allow(unused_macros)]");
    _ = writeln!(out, "macro_rules! {} {{", name);
    _ = writeln!(out, "    ($self:expr, $memory:expr) => {{");
    if !body.is_empty() {
        // copied verbatim; no re-indentation
        _ = writeln!(out, "{}", body);
    }
    _ = writeln!(out, "    }};");
    _ = writeln!(out, "}}");
    _ = writeln!(out);
}

/// One macro per document in document order, then empty bodies for placeholders no document defines.
pub fn render_bodies(model: &Model) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for spec in &model.specs {
        write_body(&mut out, &spec.body_name(), &spec.body);
    }
    for name in model.placeholder_bodies() {
        write_body(&mut out, &name, "");
    }
    out
}

/// A single match arm: resolve the operand, run the body, then any extra code.
fn render_arm(e: &OpcodeEntry) -> String {
    let mut arm = String::new();
    _ = writeln!(arm, "            {} => {{", e.key());
    _ = writeln!(arm, "                set_instruction!(self, {}, {{", e.cycles);
    _ = writeln!(arm, "                    {}!(self, memory);", e.mode);
    _ = writeln!(arm, "                    {}!(self, memory);", e.body_name());
    if !e.extra.is_empty() {
        _ = writeln!(arm, "{}", e.extra);
    }
    _ = writeln!(arm, "                }});");
    _ = writeln!(arm, "            }}");
    arm
}

/// The `clock` routine with one arm per populated opcode plus the catch-all.
pub fn render_dispatch(model: &Model) -> String {
    let mut arms: Vec<(String, String)> = (0..=u8::MAX)
        .filter_map(|op| model.table.get(op))
        .map(|e| (e.key(), render_arm(e)))
        .collect();
    // keys are fixed width ("0x0a"), so sorting them as text sorts them numerically
    arms.sort_by(|a, b| a.0.cmp(&b.0));
    let mut out = String::from(HEADER);
    out.push_str(
        "
use crate::cpu::*;
use crate::Memory;

impl CPU {
    pub fn clock(&mut self, memory: &mut dyn Memory) {
        self.init_opcode(memory);

        match self.current_opcode {
",
    );
    for (_, arm) in arms {
        out.push_str(&arm);
    }
    out.push_str(
        "            _ => {
                self.steps = 1;
            }
        }

        self.steps -= 1;
        self.cycles += 1;
    }
}
",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model;
    use crate::reference::{DefaultOpcode, NMOS_6502};
    use crate::Error;

    const LDA: &str = "# LDA

## Addresing Modes

| Mode | Form | Opcode | Bytes | Cycles |
|---|---|---|---|---|
| Immediate | LDA #oper | $A9 | 2 | 2 |
| Absolute,X | LDA oper,X | $BD | 3 | 4+ |
| Zero Page | LDA oper | $A5 | 2 | 3 |

## Implementation

```rust
$self.a = $memory.read($self.absolute_address, false);
$self.set_nz($self.a);
```
";
    const INC: &str = "# INC

## Addresing Modes

| Mode | Form | Opcode | Bytes | Cycles |
|---|---|---|---|---|
| Absolute | INC oper | $EE | 3 | 6 |

## Implementation

```rust
$memory.write($self.absolute_address, 1);
```

## Additional Codes

```rust
$self.is_crossing_page = false;
```
";
    const TAX: &str = "# TAX\n\n## Implementation\n\n```rust\n$self.x = $self.a;\n```\n";

    fn docs() -> Vec<(String, String)> {
        vec![
            ("INC".to_string(), INC.to_string()),
            ("LDA".to_string(), LDA.to_string()),
            ("TAX".to_string(), TAX.to_string()),
        ]
    }

    #[test]
    fn bodies() -> Result<(), Error> {
        let out = render_bodies(&model::build(&docs(), &NMOS_6502)?);
        assert!(out.starts_with(HEADER));
        let inc = out.find("macro_rules! inc {").unwrap();
        let lda = out.find("macro_rules! lda {").unwrap();
        let tax = out.find("macro_rules! tax {").unwrap();
        let xxx = out.find("macro_rules! xxx {").unwrap();
        assert!(inc < lda && lda < tax && tax < xxx);
        assert!(out.contains(
            "macro_rules! lda {
    ($self:expr, $memory:expr) => {
$self.a = $memory.read($self.absolute_address, false);
$self.set_nz($self.a);
    };
}
"
        ));
        assert!(out.contains("macro_rules! nop {\n    ($self:expr, $memory:expr) => {\n    };\n}\n"));
        Ok(())
    }
    #[test]
    fn dispatch_arms() -> Result<(), Error> {
        let out = render_dispatch(&model::build(&docs(), &NMOS_6502)?);
        assert!(out.contains(
            "            0xbd => {
                set_instruction!(self, 4, {
                    abx!(self, memory);
                    lda!(self, memory);
                });
            }
"
        ));
        assert!(out.contains(
            "            0xee => {
                set_instruction!(self, 6, {
                    abs!(self, memory);
                    inc!(self, memory);
$self.is_crossing_page = false;
                });
            }
"
        ));
        assert!(out.contains("            0x02 => {\n                set_instruction!(self, 2, {\n                    imp!(self, memory);\n                    xxx!(self, memory);\n"));
        // tax has no table and no arm
        assert!(!out.contains("tax!"));
        assert!(out.contains("            _ => {\n                self.steps = 1;\n            }\n"));
        assert!(out.ends_with("        self.steps -= 1;\n        self.cycles += 1;\n    }\n}\n"));
        Ok(())
    }
    #[test]
    fn arms_ascend_numerically() -> Result<(), Error> {
        let out = render_dispatch(&model::build(&docs(), &NMOS_6502)?);
        let keys: Vec<u8> = out
            .lines()
            .filter_map(|l| l.trim().strip_prefix("0x"))
            .map(|l| u8::from_str_radix(&l[..2], 16).unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        let pos = |k: &str| out.find(&format!("{} =>", k)).unwrap();
        assert!(pos("0x02") < pos("0x0b") && pos("0x0b") < pos("0x1a") && pos("0x1a") < pos("0xa5"));
        Ok(())
    }
    #[test]
    fn full_coverage() -> Result<(), Error> {
        // a reference where every byte is a placeholder: one arm per byte, no duplicates
        let reference = [DefaultOpcode { name: "NOP", cycles: 2 }; 256];
        let out = render_dispatch(&model::build(&docs(), &reference)?);
        let keys: Vec<&str> = out.lines().filter_map(|l| l.trim().strip_suffix(" => {")).collect();
        assert_eq!(keys.len(), 257);
        assert_eq!(keys.last(), Some(&"_"));
        for (i, k) in keys[..256].iter().enumerate() {
            assert_eq!(*k, format!("0x{:02x}", i));
        }
        // document rows replaced the defaults at their bytes
        assert!(out.contains("0xa9 => {\n                set_instruction!(self, 2, {\n                    imm!(self, memory);\n                    lda!(self, memory);"));
        Ok(())
    }
    #[test]
    fn deterministic() -> Result<(), Error> {
        let a = render(&model::build(&docs(), &NMOS_6502)?);
        let b = render(&model::build(&docs(), &NMOS_6502)?);
        assert_eq!(a, b);
        Ok(())
    }
}
