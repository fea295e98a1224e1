use lopdf::{Document, Object};
use log::warn;
use std::collections::BTreeMap;

/// Read the document information dictionary referenced by a PDF trailer.
/// This commonly holds Title, Author, Producer, and creation timestamps
pub(crate) fn document_info(path: &str) -> BTreeMap<String, String> {
    let mut tags: BTreeMap<String, String> = BTreeMap::new();

    let doc = match Document::load(path) {
        Ok(result) => result,
        Err(err) => {
            warn!("[metadata] Could not parse PDF {path}: {err:?}");
            return tags;
        }
    };

    let info_object = match doc.trailer.get(b"Info") {
        Ok(result) => result,
        Err(err) => {
            warn!("[metadata] No document info in PDF {path}: {err:?}");
            return tags;
        }
    };

    // The Info entry is usually an indirect reference, rarely an inline dictionary
    let info_result = match info_object {
        Object::Reference(id) => doc.get_object(*id).and_then(|object| object.as_dict()),
        Object::Dictionary(dictionary) => Ok(dictionary),
        _ => {
            warn!("[metadata] Unexpected document info shape in PDF {path}");
            return tags;
        }
    };
    let info = match info_result {
        Ok(result) => result,
        Err(err) => {
            warn!("[metadata] Could not resolve document info in PDF {path}: {err:?}");
            return tags;
        }
    };

    for (key, object) in info.iter() {
        let name = String::from_utf8_lossy(key).to_string();
        let value = match object {
            Object::String(text, _) => String::from_utf8_lossy(text).to_string(),
            Object::Name(text) => String::from_utf8_lossy(text).to_string(),
            Object::Integer(number) => number.to_string(),
            Object::Real(number) => number.to_string(),
            _ => continue,
        };
        if !value.is_empty() {
            tags.insert(name, value);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::document_info;
    use lopdf::{dictionary, Document, Object};
    use std::fs::{create_dir_all, write};
    use std::path::PathBuf;

    #[test]
    fn test_document_info() {
        let mut document = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        document.push("tmp");
        create_dir_all(&document).unwrap();
        document.push("document_info_test.pdf");

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.add_object(dictionary! {"Type" => "Pages", "Count" => 0});
        let catalog_id = doc.add_object(dictionary! {"Type" => "Catalog", "Pages" => pages_id});
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal("Quarterly Numbers"),
            "Author" => Object::string_literal("asmith"),
            "CreationDate" => Object::string_literal("D:20230102030405Z"),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        doc.save(&document).unwrap();

        let results = document_info(&document.display().to_string());
        assert_eq!(results["Title"], "Quarterly Numbers");
        assert_eq!(results["Author"], "asmith");
        assert_eq!(results["CreationDate"], "D:20230102030405Z");
    }

    #[test]
    fn test_document_info_corrupt_pdf() {
        let mut document = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        document.push("tmp");
        create_dir_all(&document).unwrap();
        document.push("corrupt_test.pdf");
        write(&document, b"%PDF-1.5 truncated garbage").unwrap();

        let results = document_info(&document.display().to_string());
        assert_eq!(results.len(), 0);
    }
}
