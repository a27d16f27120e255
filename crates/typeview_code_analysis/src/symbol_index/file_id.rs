use std::cmp;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct FileId {
    pub id: u32,
}

impl Serialize for FileId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.id)
    }
}

impl<'de> Deserialize<'de> for FileId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u32::deserialize(deserializer)?;
        Ok(FileId { id })
    }
}

impl FileId {
    pub fn new(id: u32) -> Self {
        FileId { id }
    }

    /// Placeholder file for declarations that do not live in any editable
    /// source file, e.g. types resolved from a compiled reference.
    pub const VIRTUAL: FileId = FileId { id: u32::MAX };
}

impl From<u32> for FileId {
    fn from(id: u32) -> Self {
        FileId { id }
    }
}

impl cmp::PartialOrd for FileId {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl cmp::Ord for FileId {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.id.cmp(&other.id)
    }
}
