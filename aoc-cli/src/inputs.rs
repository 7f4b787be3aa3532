//! Local store of puzzle inputs

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Read-only view of an input directory
///
/// Directory structure: `{root}/{year}/day{day:02}.txt`
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing { year, day, path },
            _ => InputError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("/inputs"));
        assert_eq!(store.input_path(2024, 6), PathBuf::from("/inputs/2024/day06.txt"));
        assert_eq!(store.input_path(2023, 25), PathBuf::from("/inputs/2023/day25.txt"));
    }

    #[test]
    fn test_read_present_and_missing() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        assert!(!store.contains(2024, 10));
        assert!(matches!(
            store.read(2024, 10),
            Err(InputError::Missing { year: 2024, day: 10, .. })
        ));

        fs::create_dir_all(temp.path().join("2024")).unwrap();
        fs::write(store.input_path(2024, 10), "0123\n").unwrap();
        assert!(store.contains(2024, 10));
        assert_eq!(store.read(2024, 10).unwrap(), "0123\n");
    }

    #[test]
    fn test_directory_in_place_of_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir_all(store.input_path(2024, 1)).unwrap();
        assert!(!store.contains(2024, 1));
        assert!(store.read(2024, 1).is_err());
    }
}
