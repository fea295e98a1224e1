use log::warn;
use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::Sha256;
use std::{
    fs::{metadata, read, File},
    io::{Error, Read},
    path::Path,
};
use walkdir::WalkDir;

/// Walk the case root and return every regular file found, in walk order.
/// Entries that cannot be accessed are logged and skipped
pub(crate) fn list_case_files(root: &str) -> Vec<String> {
    let mut case_files: Vec<String> = Vec::new();

    for entries in WalkDir::new(root) {
        let entry = match entries {
            Ok(result) => result,
            Err(err) => {
                warn!("[filesystem] Failed to get file info: {err:?}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        case_files.push(entry.path().display().to_string());
    }
    case_files
}

/// Get the extension for the provided path, if any
pub(crate) fn file_extension(path: &str) -> String {
    Path::new(path)
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Get the filename for the provided path
pub(crate) fn get_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|filename| filename.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Read the whole file into memory
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, Error> {
    read(path)
}

/// Size of the file in bytes, or 0 if the metadata cannot be read
pub(crate) fn file_size(path: &str) -> u64 {
    match metadata(path) {
        Ok(result) => result.len(),
        Err(_err) => 0,
    }
}

/// Stream a file through MD5, SHA1, and SHA256 digests simultaneously.
/// Chunked reads keep memory flat regardless of evidence file size
pub(crate) fn hash_file(path: &str) -> Result<(String, String, String), Error> {
    let mut file = File::open(path)?;
    let mut md5 = Md5::new();
    let mut sha1 = Sha1::new();
    let mut sha256 = Sha256::new();

    let chunk_size = 1048576;
    let mut buffer = vec![0; chunk_size];
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        md5.update(&buffer[..bytes_read]);
        sha1.update(&buffer[..bytes_read]);
        sha256.update(&buffer[..bytes_read]);
    }

    Ok((
        hex_digest(md5.finalize().as_slice()),
        hex_digest(sha1.finalize().as_slice()),
        hex_digest(sha256.finalize().as_slice()),
    ))
}

/// Lowercase hex form of a finalized digest
fn hex_digest(digest: &[u8]) -> String {
    let mut hex = String::new();
    for byte in digest {
        hex += &format!("{byte:02x}");
    }
    hex
}
