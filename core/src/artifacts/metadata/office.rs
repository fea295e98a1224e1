use log::warn;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::{collections::BTreeMap, fs::File, io::Read};
use zip::ZipArchive;

// Core property elements tracked for word processor documents, mapped to the
// tag names used in case output
const CORE_PROPERTIES: &[(&str, &str)] = &[
    ("creator", "author"),
    ("lastModifiedBy", "last_modified_by"),
    ("created", "created"),
    ("modified", "modified"),
    ("title", "title"),
    ("subject", "subject"),
    ("category", "category"),
    ("description", "comments"),
    ("keywords", "keywords"),
];

/// Read the core properties (docProps/core.xml) from a DOCX container.
/// These record authorship and modification history for document management
pub(crate) fn core_properties(path: &str) -> BTreeMap<String, String> {
    let mut tags: BTreeMap<String, String> = BTreeMap::new();

    let file = match File::open(path) {
        Ok(result) => result,
        Err(err) => {
            warn!("[metadata] Could not open document {path}: {err:?}");
            return tags;
        }
    };

    let mut archive = match ZipArchive::new(file) {
        Ok(result) => result,
        Err(err) => {
            warn!("[metadata] Could not open document container {path}: {err:?}");
            return tags;
        }
    };

    let mut core_xml = String::new();
    {
        let mut entry = match archive.by_name("docProps/core.xml") {
            Ok(result) => result,
            Err(err) => {
                warn!("[metadata] No core properties in {path}: {err:?}");
                return tags;
            }
        };
        if let Err(err) = entry.read_to_string(&mut core_xml) {
            warn!("[metadata] Could not read core properties in {path}: {err:?}");
            return tags;
        }
    }

    let mut reader = Reader::from_str(&core_xml);
    reader.config_mut().trim_text(true);

    let mut property = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) => {
                property = String::from_utf8_lossy(element.local_name().as_ref()).to_string();
            }
            Ok(Event::Text(text)) => {
                let value = match text.unescape() {
                    Ok(result) => result.to_string(),
                    Err(_err) => continue,
                };
                if value.is_empty() {
                    continue;
                }
                if let Some((_, tag)) = CORE_PROPERTIES
                    .iter()
                    .find(|(element, _)| *element == property)
                {
                    tags.insert((*tag).to_string(), value);
                }
            }
            Ok(Event::End(_element)) => property.clear(),
            Ok(Event::Eof) => break,
            Err(err) => {
                warn!("[metadata] Invalid core properties XML in {path}: {err:?}");
                break;
            }
            _ => {}
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::core_properties;
    use std::fs::{create_dir_all, write, File};
    use std::io::Write;
    use std::path::PathBuf;
    use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

    #[test]
    fn test_core_properties() {
        let mut document = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        document.push("tmp");
        create_dir_all(&document).unwrap();
        document.push("core_properties_test.docx");

        let file = File::create(&document).unwrap();
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        let mut writer = ZipWriter::new(file);
        writer.start_file("docProps/core.xml", options).unwrap();
        writer
            .write_all(
                br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/"><dc:title>Incident notes</dc:title><dc:subject></dc:subject><dc:creator>asmith</dc:creator><cp:lastModifiedBy>jdoe</cp:lastModifiedBy><dcterms:created>2023-01-02T03:04:05Z</dcterms:created></cp:coreProperties>"#,
            )
            .unwrap();
        writer.finish().unwrap();

        let results = core_properties(&document.display().to_string());
        assert_eq!(results["title"], "Incident notes");
        assert_eq!(results["author"], "asmith");
        assert_eq!(results["last_modified_by"], "jdoe");
        assert_eq!(results["created"], "2023-01-02T03:04:05Z");
        // Empty subject element produced no tag
        assert_eq!(results.contains_key("subject"), false);
    }

    #[test]
    fn test_core_properties_not_an_archive() {
        let mut document = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        document.push("tmp");
        create_dir_all(&document).unwrap();
        document.push("not_an_archive_test.docx");
        write(&document, b"plain text pretending to be a docx").unwrap();

        let results = core_properties(&document.display().to_string());
        assert_eq!(results.len(), 0);
    }
}
