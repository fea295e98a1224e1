use exif::{In, Reader, Tag};
use log::warn;
use std::{collections::BTreeMap, fs::File, io::BufReader};

// EXIF tags worth surfacing in a case report. The full tag space is enormous
// and mostly noise for an investigation
const EXIF_TAGS: &[Tag] = &[
    Tag::DateTimeOriginal,
    Tag::Make,
    Tag::Model,
    Tag::LensModel,
    Tag::GPSLatitude,
    Tag::GPSLongitude,
];

/// Read a fixed set of EXIF tags from a JPEG image.
/// Corrupt or EXIF-less images yield no tags
pub(crate) fn exif_tags(path: &str) -> BTreeMap<String, String> {
    let mut tags: BTreeMap<String, String> = BTreeMap::new();

    let file = match File::open(path) {
        Ok(result) => result,
        Err(err) => {
            warn!("[metadata] Could not open image {path}: {err:?}");
            return tags;
        }
    };

    let mut reader = BufReader::new(file);
    let exif_data = match Reader::new().read_from_container(&mut reader) {
        Ok(result) => result,
        Err(err) => {
            warn!("[metadata] No EXIF data in {path}: {err:?}");
            return tags;
        }
    };

    for tag in EXIF_TAGS {
        if let Some(field) = exif_data.get_field(*tag, In::PRIMARY) {
            let value = field.display_value().with_unit(&exif_data).to_string();
            if !value.is_empty() {
                tags.insert(tag.to_string(), value);
            }
        }
    }
    tags
}
