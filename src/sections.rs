//! Pulls the sections the generator needs out of a tokenized document.
use super::lexer::{tokenize, Block};
use super::loader::SpecLoader;
use super::*;

/// Heading of the opcode table. The spelling is what the documents use and must match exactly.
pub const ADDRESSING_MODES_HEADING: &str = "Addresing Modes";
pub const IMPLEMENTATION_HEADING: &str = "Implementation";
pub const ADDITIONAL_CODES_HEADING: &str = "Additional Codes";
/// Sections are always second-level headings.
pub const SECTION_DEPTH: usize = 2;

/// Everything the generator knows about one instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionSpec {
    /// file stem of the document, e.g. "LDA"
    pub id: String,
    /// raw cells of the addressing mode table (header excluded); None if the document has no usable table
    pub rows: Option<Vec<Vec<String>>>,
    /// the Implementation section, copied verbatim
    pub body: String,
    /// the optional Additional Codes section, empty if absent
    pub extra: String,
}
impl InstructionSpec {
    /// Name of the generated body, i.e. the lowercased identifier.
    pub fn body_name(&self) -> String { self.id.to_lowercase() }
    pub fn doc_name(&self) -> String { SpecLoader::file_name(&self.id) }
}

/// The block directly after the first matching section heading, if there is one.
fn section<'a>(blocks: &'a [Block], heading: &str) -> Option<Option<&'a Block>> {
    blocks
        .iter()
        .position(|b| b.is_heading(SECTION_DEPTH, heading))
        .map(|i| blocks.get(i + 1))
}

/// Extracts an InstructionSpec from an already tokenized document.
pub fn extract(id: &str, blocks: &[Block]) -> Result<InstructionSpec, Error> {
    let doc = SpecLoader::file_name(id);
    let rows = match section(blocks, ADDRESSING_MODES_HEADING) {
        Some(Some(Block::Table { rows, .. })) => Some(rows.clone()),
        _ => None,
    };
    let body = match section(blocks, IMPLEMENTATION_HEADING) {
        Some(Some(b)) => b.text().map(str::to_string).ok_or_else(|| {
            structural_err!(
                doc.clone(),
                "section \"{}\" must be followed by code or text, found {}",
                IMPLEMENTATION_HEADING,
                b
            )
        })?,
        Some(None) => {
            return Err(structural_err!(doc, "section \"{}\" is empty", IMPLEMENTATION_HEADING));
        }
        None => {
            return Err(structural_err!(doc, "missing section \"{}\"", IMPLEMENTATION_HEADING));
        }
    };
    let extra = match section(blocks, ADDITIONAL_CODES_HEADING) {
        Some(Some(b)) => b.text().unwrap_or_default().to_string(),
        _ => String::new(),
    };
    Ok(InstructionSpec {
        id: id.to_string(),
        rows,
        body,
        extra,
    })
}

/// Tokenizes and extracts in one step.
pub fn parse(id: &str, src: &str) -> Result<InstructionSpec, Error> { extract(id, &tokenize(src)) }
