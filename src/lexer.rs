//! A deliberately small block lexer for the instruction documents.
//!
//! Only the block shapes the generator cares about are recognized:
//! ATX headings, pipe tables, fenced code and paragraphs. Anything else ends
//! up as paragraph text. Blank lines separate blocks and never produce a
//! token, so the block "after" a heading is always the next non-blank one.
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref RE_HEADING: Regex = Regex::new(r"^ {0,3}(#{1,6})(?:[ \t]+(.*?))?(?:[ \t]+#+)?[ \t]*$").unwrap();
    static ref RE_FENCE: Regex = Regex::new(r"^( {0,3})(`{3,}|~{3,})[ \t]*([^`\s]*)").unwrap();
    static ref RE_TABLE_DELIM: Regex = Regex::new(r"^ {0,3}\|?[ \t]*:?-+:?[ \t]*(?:\|[ \t]*:?-+:?[ \t]*)*\|?[ \t]*$").unwrap();
}

/// One block of a tokenized document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { depth: usize, text: String },
    /// `rows` excludes the header row
    Table { header: Vec<String>, rows: Vec<Vec<String>> },
    Code { lang: String, text: String },
    Paragraph { text: String },
}
impl Block {
    /// The text of a block that can carry source code (fenced code or a paragraph).
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Code { text, .. } | Block::Paragraph { text } => Some(text.as_str()),
            _ => None,
        }
    }
    pub fn is_heading(&self, depth: usize, text: &str) -> bool {
        matches!(self, Block::Heading { depth: d, text: t } if *d == depth && t == text)
    }
}
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Block::Heading { depth, text } => write!(f, "Heading({}) \"{}\"", depth, text),
            Block::Table { header, rows } => write!(f, "Table[{}x{}]", rows.len(), header.len()),
            Block::Code { lang, .. } => write!(f, "Code({})", lang),
            Block::Paragraph { .. } => write!(f, "Paragraph"),
        }
    }
}

fn is_blank(line: &str) -> bool { line.trim().is_empty() }

/// Splits a table row into trimmed cells, dropping the outer pipes and honoring `\|`.
fn split_row(line: &str) -> Vec<String> {
    let mut row = line.trim();
    row = row.strip_prefix('|').unwrap_or(row);
    if row.ends_with('|') && !row.ends_with("\\|") {
        row = &row[..row.len() - 1];
    }
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut chars = row.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                cell.push('|');
                chars.next();
            }
            '|' => cells.push(std::mem::take(&mut cell).trim().to_string()),
            _ => cell.push(c),
        }
    }
    cells.push(cell.trim().to_string());
    cells
}

fn starts_table(lines: &[&str], i: usize) -> bool {
    lines[i].contains('|') && lines.get(i + 1).map_or(false, |next| RE_TABLE_DELIM.is_match(next))
}

fn starts_block(lines: &[&str], i: usize) -> bool {
    RE_HEADING.is_match(lines[i]) || RE_FENCE.is_match(lines[i]) || starts_table(lines, i)
}

/// Breaks a document into its blocks.
pub fn tokenize(src: &str) -> Vec<Block> {
    let lines: Vec<&str> = src.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if is_blank(line) {
            i += 1;
            continue;
        }
        if let Some(c) = RE_HEADING.captures(line) {
            blocks.push(Block::Heading {
                depth: c[1].len(),
                text: c.get(2).map_or("", |m| m.as_str()).trim().to_string(),
            });
            i += 1;
            continue;
        }
        if let Some(c) = RE_FENCE.captures(line) {
            let indent = c[1].len();
            let fence = c[2].to_string();
            let lang = c[3].to_string();
            let mut body = Vec::new();
            i += 1;
            // an unterminated fence runs to the end of the document
            while i < lines.len() {
                let l = lines[i];
                let t = l.trim();
                if t.starts_with(&fence) && t.chars().all(|ch| ch == fence.chars().next().unwrap_or('`')) {
                    i += 1;
                    break;
                }
                // strip up to the fence's own indentation
                let strip = l.len() - l.trim_start_matches(' ').len();
                body.push(&l[strip.min(indent)..]);
                i += 1;
            }
            blocks.push(Block::Code {
                lang,
                text: body.join("\n"),
            });
            continue;
        }
        if starts_table(&lines, i) {
            let header = split_row(line);
            let mut rows = Vec::new();
            i += 2;
            while i < lines.len() && !is_blank(lines[i]) && lines[i].contains('|') && !RE_HEADING.is_match(lines[i]) {
                rows.push(split_row(lines[i]));
                i += 1;
            }
            blocks.push(Block::Table { header, rows });
            continue;
        }
        let mut para = vec![line.trim()];
        i += 1;
        while i < lines.len() && !is_blank(lines[i]) && !starts_block(&lines, i) {
            para.push(lines[i].trim());
            i += 1;
        }
        blocks.push(Block::Paragraph { text: para.join("\n") });
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    const DOC: &str = "# LDA - Load Accumulator

Loads a byte of memory
into the accumulator.

## Addresing Modes

| Addressing Mode | Form      | Opcode | Bytes | Cycles |
|-----------------|-----------|--------|-------|--------|
| Immediate       | LDA #oper | $A9    | 2     | 2      |
| Absolute,X      | LDA a,X   | $BD    | 3     | 4+     |

## Implementation

```rust
$self.a = $memory.read($self.absolute_address, false);
$self.set_nz($self.a);
```
";
    #[test]
    fn blocks() {
        let blocks = tokenize(DOC);
        assert_eq!(blocks.len(), 6, "{:?}", blocks);
        assert!(blocks[0].is_heading(1, "LDA - Load Accumulator"));
        assert_eq!(
            blocks[1],
            Block::Paragraph {
                text: "Loads a byte of memory\ninto the accumulator.".to_string()
            }
        );
        assert!(blocks[2].is_heading(2, "Addresing Modes"));
        match &blocks[3] {
            Block::Table { header, rows } => {
                assert_eq!(header.len(), 5);
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[1], ["Absolute,X", "LDA a,X", "$BD", "3", "4+"]);
            }
            b => panic!("expected a table, got {}", b),
        }
        assert!(blocks[4].is_heading(2, "Implementation"));
        assert_eq!(
            blocks[5].text(),
            Some("$self.a = $memory.read($self.absolute_address, false);\n$self.set_nz($self.a);")
        );
    }
    #[test]
    fn headings() {
        let blocks = tokenize("## Implementation ##\n####### not a heading\n#nospace");
        assert!(blocks[0].is_heading(2, "Implementation"));
        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].text().is_some());
    }
    #[test]
    fn escaped_pipes_and_ragged_rows() {
        let blocks = tokenize("a | b\n--|--\nx \\| y | z\nonly\n");
        match &blocks[0] {
            Block::Table { rows, .. } => assert_eq!(rows[0], ["x | y", "z"]),
            b => panic!("expected a table, got {}", b),
        }
        // "only" has no pipe so it ends the table
        assert_eq!(blocks.len(), 2);
    }
    #[test]
    fn code_keeps_inner_blank_lines() {
        let blocks = tokenize("~~~\nlet a = 1;\n\nlet b = 2;\n~~~\n");
        assert_eq!(blocks[0].text(), Some("let a = 1;\n\nlet b = 2;"));
    }
}
