//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs the sorted lines as one JSON document
pub struct JsonFormatter<W: Write> {
    writer: W,
    document: SortedDocument,
}

/// Data structure for JSON output
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SortedDocument {
    /// Number of output lines
    pub count: usize,
    /// The sorted lines
    pub lines: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document: SortedDocument::default(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.document.lines.push(line.to_string());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.document.count = self.document.lines.len();
        serde_json::to_writer_pretty(&mut self.writer, &self.document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_document_with_count() {
        let mut buf = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buf);
            formatter.write_line("a1").unwrap();
            formatter.write_line("a2").unwrap();
            formatter.finish().unwrap();
        }
        let doc: SortedDocument = serde_json::from_slice(&buf).unwrap();
        assert_eq!(doc.count, 2);
        assert_eq!(doc.lines, vec!["a1", "a2"]);
    }
}
