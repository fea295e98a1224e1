use log::warn;
use png::Decoder;
use std::{collections::BTreeMap, fs::File};

/// Collect the auxiliary text chunks (tEXt, zTXt, iTXt) from a PNG image.
/// These often hold creation tools, comments, or application data
pub(crate) fn text_chunks(path: &str) -> BTreeMap<String, String> {
    let mut tags: BTreeMap<String, String> = BTreeMap::new();

    let file = match File::open(path) {
        Ok(result) => result,
        Err(err) => {
            warn!("[metadata] Could not open image {path}: {err:?}");
            return tags;
        }
    };

    let decoder = Decoder::new(file);
    let reader = match decoder.read_info() {
        Ok(result) => result,
        Err(err) => {
            warn!("[metadata] Could not parse PNG {path}: {err:?}");
            return tags;
        }
    };

    let info = reader.info();
    for chunk in &info.uncompressed_latin1_text {
        if !chunk.text.is_empty() {
            tags.insert(chunk.keyword.clone(), chunk.text.clone());
        }
    }
    for chunk in &info.compressed_latin1_text {
        match chunk.get_text() {
            Ok(value) => {
                if !value.is_empty() {
                    tags.insert(chunk.keyword.clone(), value);
                }
            }
            Err(err) => warn!("[metadata] Could not decompress PNG zTXt chunk in {path}: {err:?}"),
        }
    }
    for chunk in &info.utf8_text {
        match chunk.get_text() {
            Ok(value) => {
                if !value.is_empty() {
                    tags.insert(chunk.keyword.clone(), value);
                }
            }
            Err(err) => warn!("[metadata] Could not decode PNG iTXt chunk in {path}: {err:?}"),
        }
    }
    tags
}
