/// Package name.
pub(crate) const PKG_NAME: &str = env!("CARGO_PKG_NAME");
/// Default configuration file name.
pub(crate) const CONFIG_NAME: &str = "config.toml";
/// Extension given to archives named after their first input.
pub const ARCHIVE_EXT: &str = "zip";
/// Separator used inside archive entry names, whatever the host uses.
pub(crate) const ENTRY_SEPARATOR: char = '/';
