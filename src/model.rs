//! Building the model is the only phase that can fail. Every document is
//! parsed and every row inserted even after an error has been found, so the
//! user sees the complete list of problems at once; only a model without any
//! problem is handed on to the emitter.
use super::reference::Reference;
use super::sections::{self, InstructionSpec};
use super::table::{OpcodeTable, Origin};
use super::*;

use std::collections::HashSet;

/// A validated set of instruction specs plus the opcode table built from them.
pub struct Model {
    /// in document (file name) order
    pub specs: Vec<InstructionSpec>,
    pub table: OpcodeTable,
}
impl Model {
    /// Body names used by seeded default entries that no document defines, in byte order.
    pub fn placeholder_bodies(&self) -> Vec<String> {
        let defined: HashSet<String> = self.specs.iter().map(|s| s.body_name()).collect();
        let mut names: Vec<String> = Vec::new();
        for e in self.table.iter().filter(|e| e.origin == Origin::Default) {
            let name = e.body_name();
            if !defined.contains(&name) && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

/// Builds and validates the model from (identifier, document text) pairs.
pub fn build(docs: &[(String, String)], reference: &Reference) -> Result<Model, Error> {
    let mut errors = Vec::new();
    let mut specs = Vec::new();
    let mut names: HashSet<String> = HashSet::new();
    for (id, src) in docs {
        match sections::parse(id, src) {
            Ok(spec) => {
                // two documents differing only by case would define the same body twice
                if !names.insert(spec.body_name()) {
                    errors.push(structural_err!(
                        spec.doc_name(),
                        "body \"{}\" is already defined by another document",
                        spec.body_name()
                    ));
                    continue;
                }
                specs.push(spec);
            }
            Err(e) => errors.push(e),
        }
    }
    let mut table = OpcodeTable::seeded(reference);
    for spec in &specs {
        if spec.rows.is_none() {
            warn!("{} has no \"{}\" table; only its body will be generated", spec.doc_name(), sections::ADDRESSING_MODES_HEADING);
        }
        errors.extend(table.add_instruction(spec));
    }
    if !errors.is_empty() {
        return Err(Error::build(errors));
    }
    Ok(Model { specs, table })
}
