use crate::core::Storage;
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    atomic_write: bool,
}

impl LocalStorage {
    pub fn new(atomic_write: bool) -> Self {
        Self { atomic_write }
    }

    /// 先寫到同目錄的暫存檔，再 rename 到目標位置
    fn write_atomic(&self, path: &str, data: &[u8]) -> Result<()> {
        let target = Path::new(path);
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| ConvertError::io(path, e))?;
        temp.write_all(data).map_err(|e| ConvertError::io(path, e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| ConvertError::io(path, e))?;
        temp.persist(target)
            .map_err(|e| ConvertError::io(path, e.error))?;
        Ok(())
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| ConvertError::io(path, e))
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        if self.atomic_write {
            self.write_atomic(path, data)
        } else {
            fs::write(path, data).map_err(|e| ConvertError::io(path, e))
        }
    }
}
