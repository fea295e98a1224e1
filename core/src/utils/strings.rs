/// Get a UTF8 string from provided bytes data. Invalid sequences are replaced,
/// never raised, since evidence files are routinely corrupt
pub(crate) fn extract_utf8_string(data: &[u8]) -> String {
    String::from_utf8_lossy(data).to_string()
}
