pub(crate) mod browser;
pub(crate) mod hashes;
pub(crate) mod logs;
pub(crate) mod metadata;
