//! "Choose a file" capability used by the open command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::ListResult;
use crate::io::input::InputReader;

/// Supplies the path of a list file to open.
///
/// `Ok(None)` means the user cancelled the selection.
pub trait FileChooser {
    fn choose_file<R: BufRead, W: Write>(
        &mut self,
        input: &mut InputReader<R, W>,
    ) -> ListResult<Option<PathBuf>>;
}

/// Asks for a path on the console. Relative paths resolve against `base`.
#[derive(Debug, Clone)]
pub struct PromptFileChooser {
    base: PathBuf,
}

impl PromptFileChooser {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl FileChooser for PromptFileChooser {
    fn choose_file<R: BufRead, W: Write>(
        &mut self,
        input: &mut InputReader<R, W>,
    ) -> ListResult<Option<PathBuf>> {
        let raw = input.read_line("Enter the path of the list file to open (blank to cancel)")?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.base.join(raw)))
    }
}
