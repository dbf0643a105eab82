use std::io::{BufRead, Write};

use anyhow::Result;

use crate::common::{PATTERN_EXAMPLE, PATTERN_PLACEHOLDER, PATTERN_PROMPT, PROMPT_CANCEL};
use crate::modes::PatternPrompt;

/// Interpret a line typed in the pattern prompt.
///
/// `None` (end of input) and a lone escape character cancel the prompt.
/// Anything else is the pattern, only the line ending is removed.
pub fn parse_prompt_answer(line: Option<&str>) -> Option<String> {
    let line = line?.trim_end_matches(['\n', '\r']);
    if line.trim() == PROMPT_CANCEL {
        return None;
    }
    Some(line.to_owned())
}

/// Asks for a pattern on a line based terminal.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> LinePrompt<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R, W> PatternPrompt for LinePrompt<R, W>
where
    R: BufRead,
    W: Write,
{
    fn prompt_for_pattern(&mut self) -> Result<Option<String>> {
        writeln!(self.writer, "{PATTERN_PLACEHOLDER}")?;
        writeln!(self.writer, "{PATTERN_EXAMPLE}")?;
        write!(self.writer, "{PATTERN_PROMPT}")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(parse_prompt_answer(Some(&line)))
    }
}
