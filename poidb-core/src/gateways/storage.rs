use anyhow::Result as Fallible;

pub trait FileStorageGateway {
    /// Stores the file and returns a reference that
    /// can be used as the file URL of an image.
    fn store_file(&self, file_name: &str, data: &[u8]) -> Fallible<String>;

    fn delete_file(&self, file_url: &str) -> Fallible<()>;
}
