use crate::error::{NanoteError, Result};
use crate::model::Note;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// A single note's content ready to be handed out as a plain-text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteExport {
    /// `<title>.txt`, or `note.txt` for an untitled note
    pub file_name: String,
    pub content: String,
}

impl NoteExport {
    /// Writes the content into `dir` under a filesystem-safe version of the name.
    pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(NanoteError::Io)?;
        }

        let stem = self.file_name.strip_suffix(".txt").unwrap_or(&self.file_name);
        let safe_stem = match sanitize_filename(stem) {
            s if s.is_empty() => "note".to_string(),
            s => s,
        };

        let path = dir.join(format!("{}.txt", safe_stem));
        fs::write(&path, &self.content).map_err(NanoteError::Io)?;
        info!("Exported note to {}", path.display());
        Ok(path)
    }
}

pub fn run(note: &Note) -> NoteExport {
    let stem = if note.title.is_empty() {
        "note"
    } else {
        &note.title
    };
    NoteExport {
        file_name: format!("{}.txt", stem),
        content: note.content.clone(),
    }
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
