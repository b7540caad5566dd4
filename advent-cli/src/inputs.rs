//! Locating and reading puzzle inputs on disk

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-based store of puzzle inputs.
///
/// Directory layout: `{input_dir}/day{day:02}.txt`. An explicit file, when
/// given, is used for every day instead.
#[derive(Debug, Clone)]
pub struct InputStore {
    input_dir: PathBuf,
    explicit_file: Option<PathBuf>,
}

impl InputStore {
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            explicit_file: None,
        }
    }

    /// Read every day's input from `file`
    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        self.explicit_file = file;
        self
    }

    /// Path the input for `day` is read from
    pub fn path(&self, day: u8) -> PathBuf {
        match &self.explicit_file {
            Some(file) => file.clone(),
            None => self.input_dir.join(format!("day{:02}.txt", day)),
        }
    }

    /// Read the whole input for `day` into memory
    pub fn read(&self, day: u8) -> Result<String, InputError> {
        let path = self.path(day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::NotFound(path),
            _ => InputError::Read { path, source },
        })
    }
}
