//! Game build identification.
//!
//! The memory layout is an implicit contract with a specific game
//! binary, so the executable is identified by content hash before any
//! pointer chain is built. Two build families exist (DX11 and DX12
//! rendering backends); each has a world-wide and a CERO Z region
//! twin sharing the same layout.

use std::path::Path;

use sha2::{Digest, Sha256};
use strum::{Display, IntoStaticStr};
use tracing::debug;

use crate::error::Result;

/// A known game binary, identified by the SHA-256 of its executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum GameVersion {
    #[strum(serialize = "RE2_WW_11636119")]
    Ww11636119,
    #[strum(serialize = "RE2_CEROZ_11636615")]
    CerozZ11636615,
    #[strum(serialize = "RE2_WW_11055033")]
    Ww11055033,
    #[strum(serialize = "RE2_CEROZ_11055259")]
    CerozZ11055259,
    #[strum(serialize = "Unknown")]
    Unknown,
}

/// Builds sharing one memory layout, differing only in region lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildFamily {
    /// DX12 builds (11636119 / 11636615).
    Dx12,
    /// DX11 builds (11055033 / 11055259). The rank parameter record
    /// carries an extra leading field that shifts later offsets.
    Dx11,
}

impl GameVersion {
    /// The layout family this version belongs to, or `None` for
    /// unknown builds.
    pub fn family(&self) -> Option<BuildFamily> {
        match self {
            GameVersion::Ww11636119 | GameVersion::CerozZ11636615 => Some(BuildFamily::Dx12),
            GameVersion::Ww11055033 | GameVersion::CerozZ11055259 => Some(BuildFamily::Dx11),
            GameVersion::Unknown => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.family().is_some()
    }
}

/// SHA-256 digests of the known executables, lowercase hex.
const KNOWN_BUILDS: [(&str, GameVersion); 4] = [
    (
        "9c4b04e2b6ba36d1e8a6c0114156e95edd7ac19b0e3f9dcf73b6ce46d02b2e7a",
        GameVersion::Ww11636119,
    ),
    (
        "1d9eeab35c3a62e3dd13d6f9b7efefbcaf8a7cf73e8ffd1f39a32d1ab2a09c54",
        GameVersion::CerozZ11636615,
    ),
    (
        "73ba6e28d59f4b5a7c3ce2e49707d8c261a30917ce37d5a8340f54f26cd9a1e0",
        GameVersion::Ww11055033,
    ),
    (
        "c0e1a9f8b37245dd9e6f1b4c8835dd11763f9ce0a6ab2f4b8be4e0c71db3a672",
        GameVersion::CerozZ11055259,
    ),
];

/// Detect the game version from the main executable on disk.
///
/// Idempotent and side-effect-free. An unrecognized digest yields
/// `GameVersion::Unknown`; only IO failures are errors.
pub fn detect_version<P: AsRef<Path>>(path: P) -> Result<GameVersion> {
    let bytes = std::fs::read(&path)?;
    Ok(detect_version_from_bytes(&bytes))
}

/// Detect the game version from already-loaded executable bytes.
pub fn detect_version_from_bytes(bytes: &[u8]) -> GameVersion {
    let digest = hex::encode(Sha256::digest(bytes));

    let version = KNOWN_BUILDS
        .iter()
        .find(|(hash, _)| *hash == digest)
        .map(|(_, version)| *version)
        .unwrap_or(GameVersion::Unknown);

    debug!("Executable digest {} -> {}", digest, version);
    version
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_family_grouping() {
        assert_eq!(GameVersion::Ww11636119.family(), Some(BuildFamily::Dx12));
        assert_eq!(GameVersion::CerozZ11636615.family(), Some(BuildFamily::Dx12));
        assert_eq!(GameVersion::Ww11055033.family(), Some(BuildFamily::Dx11));
        assert_eq!(GameVersion::CerozZ11055259.family(), Some(BuildFamily::Dx11));
        assert_eq!(GameVersion::Unknown.family(), None);
    }

    #[test]
    fn test_unknown_binary_yields_unknown() {
        assert_eq!(
            detect_version_from_bytes(b"not a real executable"),
            GameVersion::Unknown
        );
    }

    #[test]
    fn test_detect_from_file_is_idempotent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"MZ fake binary contents").unwrap();

        let first = detect_version(file.path()).unwrap();
        let second = detect_version(file.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, GameVersion::Unknown);
    }

    #[test]
    fn test_detect_missing_file_is_io_error() {
        let result = detect_version("does/not/exist/re2.exe");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(GameVersion::Ww11636119.to_string(), "RE2_WW_11636119");
        assert_eq!(GameVersion::CerozZ11055259.to_string(), "RE2_CEROZ_11055259");
    }
}
