use serde::{Deserialize, Serialize};
use std::fmt;

/// Document containers and the field each one is partitioned on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Container {
    Reviews,
    Spirits,
    Users,
}

impl Container {
    pub const ALL: [Container; 3] = [Container::Reviews, Container::Spirits, Container::Users];

    pub fn name(&self) -> &'static str {
        match self {
            Container::Reviews => "Reviews",
            Container::Spirits => "Spirits",
            Container::Users => "Users",
        }
    }

    /// Document field holding the partition key value
    pub fn partition_key_field(&self) -> &'static str {
        match self {
            Container::Reviews => "reviewId",
            Container::Spirits => "spiritId",
            Container::Users => "userId",
        }
    }

    /// Partition key path in the `/field` form container definitions use
    pub fn partition_key_path(&self) -> String {
        format!("/{}", self.partition_key_field())
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_key_paths() {
        assert_eq!(Container::Reviews.partition_key_path(), "/reviewId");
        assert_eq!(Container::Spirits.partition_key_path(), "/spiritId");
        assert_eq!(Container::Users.partition_key_path(), "/userId");
    }
}
