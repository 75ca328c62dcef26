//! Launching the user's editor on a review file

use crate::error::{ReviewError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// An editor command line, e.g. `code -w` or `vim +10`
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Spawn the editor on `file_path` without waiting for it to exit
    pub fn open(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());

        debug!(program = %program, ?args, "launching editor");

        // cmd /C resolves .bat and .cmd shims
        #[cfg(windows)]
        let spawned = Command::new("cmd").arg("/C").arg(&program).args(&args).spawn();

        #[cfg(not(windows))]
        let spawned = Command::new(&program).args(&args).spawn();

        spawned.map_err(|e| {
            ReviewError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        Ok(())
    }

    fn parse_command(&self) -> (String, Vec<String>) {
        let mut parts = self.command.split_whitespace().map(str::to_string);

        match parts.next() {
            Some(program) => (program, parts.collect()),
            None if cfg!(windows) => ("notepad".to_string(), Vec::new()),
            None => ("nano".to_string(), Vec::new()),
        }
    }
}
