use crate::utils::error::Result;

/// Whole-file access to wherever the inventory database lives.
pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// How `load` treats a plate that appears more than once in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    #[default]
    AcceptDuplicates,
    RejectDuplicates,
}

pub trait ConfigProvider {
    fn database_path(&self) -> &str;
    fn load_policy(&self) -> LoadPolicy;
}
