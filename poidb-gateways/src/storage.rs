use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use anyhow::Result as Fallible;
use poidb_core::{entities::Id, gateways::storage::FileStorageGateway};
use thiserror::Error;

const IMAGE_DIR: &str = "image";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid file name: '{0}'")]
    InvalidFileName(String),
    #[error("File is not managed by this storage: '{0}'")]
    Unmanaged(String),
}

/// Stores uploaded image files below a root directory.
///
/// Every file is placed into its own sub-directory
/// `image/<id>/<file_name>` and the relative path is
/// used as its URL.
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    root: PathBuf,
}

impl FileSystemStorage {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn managed_path(&self, file_url: &str) -> Result<PathBuf, Error> {
        let relative = Path::new(file_url);
        let mut components = relative.components();
        let is_managed = components.next() == Some(Component::Normal(IMAGE_DIR.as_ref()))
            && components.all(|c| matches!(c, Component::Normal(_)));
        if !is_managed {
            return Err(Error::Unmanaged(file_url.to_owned()));
        }
        Ok(self.root.join(relative))
    }
}

fn sanitize_file_name(file_name: &str) -> Result<&str, Error> {
    Path::new(file_name.trim())
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::InvalidFileName(file_name.to_owned()))
}

impl FileStorageGateway for FileSystemStorage {
    fn store_file(&self, file_name: &str, data: &[u8]) -> Fallible<String> {
        let file_name = sanitize_file_name(file_name)?;
        let file_url = format!("{IMAGE_DIR}/{}/{file_name}", Id::new());
        let path = self.root.join(&file_url);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, data)?;
        log::debug!("Stored {} bytes in {}", data.len(), path.display());
        Ok(file_url)
    }

    fn delete_file(&self, file_url: &str) -> Fallible<()> {
        let path = self.managed_path(file_url)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                log::debug!("Deleted file {}", path.display());
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::warn!("File {} has already been deleted", path.display());
            }
            Err(err) => return Err(err.into()),
        }
        if let Some(dir) = path.parent() {
            // Only succeeds if the directory is empty
            if let Err(err) = fs::remove_dir(dir) {
                log::debug!("Kept directory {}: {err}", dir.display());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(name: &str) -> FileSystemStorage {
        let root = std::env::temp_dir().join(format!("poidb-storage-{name}-{}", std::process::id()));
        FileSystemStorage::new(root)
    }

    #[test]
    fn store_and_delete_file() {
        let storage = storage("store");
        let url = storage.store_file("lighthouse.jpg", b"JPEG").unwrap();
        assert!(url.starts_with("image/"));
        assert!(url.ends_with("/lighthouse.jpg"));
        let path = storage.root().join(&url);
        assert_eq!(b"JPEG".as_slice(), fs::read(&path).unwrap());

        storage.delete_file(&url).unwrap();
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
        // Deleting twice is fine
        storage.delete_file(&url).unwrap();
        fs::remove_dir_all(storage.root()).unwrap();
    }

    #[test]
    fn strip_directories_from_file_names() {
        let storage = storage("names");
        let url = storage.store_file("../../etc/passwd", b"x").unwrap();
        assert!(url.ends_with("/passwd"));
        assert!(storage.root().join(&url).exists());
        assert!(storage.store_file("", b"x").is_err());
        assert!(storage.store_file("..", b"x").is_err());
        fs::remove_dir_all(storage.root()).unwrap();
    }

    #[test]
    fn refuse_to_delete_unmanaged_files() {
        let storage = storage("unmanaged");
        assert!(storage.delete_file("/etc/passwd").is_err());
        assert!(storage.delete_file("image/../../secret").is_err());
        assert!(storage.delete_file("other/file.jpg").is_err());
    }
}
