pub(crate) mod exif;
pub(crate) mod office;
pub(crate) mod pdf;
pub(crate) mod png;

use crate::filesystem::files::{file_extension, file_size, list_case_files};
use common::files::FileMetadata;
use log::{info, warn};
use std::collections::BTreeMap;

type TagExtractor = fn(&str) -> BTreeMap<String, String>;

/// Format discriminators mapped to their extractor.
/// Supporting a new format is one additional entry here
const TAG_EXTRACTORS: &[(&str, TagExtractor)] = &[
    ("jpg", exif::exif_tags),
    ("jpeg", exif::exif_tags),
    ("png", png::text_chunks),
    ("pdf", pdf::document_info),
    ("docx", office::core_properties),
];

/// Extract format-specific metadata for every supported file under the case
/// root. Extraction never fails a file, it just yields no tags, and only files
/// that produced at least one non-empty tag are recorded
pub(crate) fn extract_case_metadata(root: &str, size_limit: &u64) -> Vec<FileMetadata> {
    let mut findings: Vec<FileMetadata> = Vec::new();
    let mut unsupported = 0;

    for path in list_case_files(root) {
        let extension = file_extension(&path).to_lowercase();
        let extractor = match TAG_EXTRACTORS
            .iter()
            .find(|(discriminator, _)| *discriminator == extension)
        {
            Some((_, extractor)) => extractor,
            None => {
                unsupported += 1;
                continue;
            }
        };

        if file_size(&path) > *size_limit {
            warn!("[metadata] Skipping oversized container {path}");
            continue;
        }

        let tags = extractor(&path);
        if tags.is_empty() {
            continue;
        }
        findings.push(FileMetadata {
            path,
            metadata: tags,
        });
    }

    info!("[metadata] {unsupported} files had no supported metadata format");
    findings
}
