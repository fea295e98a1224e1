use crate::filesystem::files::{hash_file, list_case_files};
use common::files::FileHashes;
use log::warn;

/// Build the hash inventory: one MD5/SHA1/SHA256 record per readable file
/// under the case root. A record is only produced when the full file was read,
/// so a failed or partial read leaves no entry and the batch continues
pub(crate) fn hash_case_files(root: &str) -> Vec<FileHashes> {
    let mut inventory: Vec<FileHashes> = Vec::new();

    for path in list_case_files(root) {
        let hash_result = hash_file(&path);
        let (md5, sha1, sha256) = match hash_result {
            Ok(result) => result,
            Err(err) => {
                warn!("[hashes] Could not hash file {path}: {err:?}");
                continue;
            }
        };
        inventory.push(FileHashes {
            path,
            md5,
            sha1,
            sha256,
        });
    }
    inventory
}

#[cfg(test)]
mod tests {
    use super::hash_case_files;
    use crate::filesystem::files::list_case_files;
    use std::path::PathBuf;

    #[test]
    fn test_hash_case_files() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/case");
        let root = test_location.display().to_string();

        let results = hash_case_files(&root);
        assert_eq!(results.len(), list_case_files(&root).len());

        for entry in &results {
            assert_eq!(entry.md5.len(), 32);
            assert_eq!(entry.sha1.len(), 40);
            assert_eq!(entry.sha256.len(), 64);
        }
    }

    #[test]
    fn test_hash_case_files_deterministic() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/case");
        let root = test_location.display().to_string();

        let first = hash_case_files(&root);
        let second = hash_case_files(&root);
        assert_eq!(first.len(), second.len());
        for (one, two) in first.iter().zip(second.iter()) {
            assert_eq!(one.path, two.path);
            assert_eq!(one.md5, two.md5);
            assert_eq!(one.sha1, two.sha1);
            assert_eq!(one.sha256, two.sha256);
        }
    }

    #[test]
    fn test_hash_case_files_empty() {
        let results = hash_case_files("./tests/test_data/does_not_exist");
        assert_eq!(results.len(), 0);
    }
}
