use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq)]
pub struct ClubDirectory(PathBuf);

impl ClubDirectory {
    pub fn new(p: PathBuf) -> Self {
        ClubDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(ClubDirectory::new)
    }
}

impl ClubDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
}

/// Get the absolute path to the application folder.
///
/// This a "DigistarClub" directory in the XDG standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.digistar-club`.
/// Rationale: we want the log file in the same folder as the configuration file but for Linux the
/// XDG specify a data directory (`~/.local/share/`) different from the configuration one
/// (`~/.config/`).
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".digistar-club");

        #[cfg(not(target_os = "linux"))]
        path.push("DigistarClub");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(datadir_path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700).recursive(true).create(datadir_path)?;
        Ok(())
    };

    // TODO: permissions on Windows..
    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(datadir_path)?;
        Ok(())
    };
}
