//! Hands rendered charts to the platform's image viewer.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};

/// Create a fresh, private directory for the `show` mode charts.
///
/// The directory is kept after the process exits so the viewer can still
/// read the files.
pub fn create_show_dir() -> Result<PathBuf> {
    let dir = tempfile::Builder::new()
        .prefix("speedup-charts-")
        .tempdir()
        .context("failed to create a temporary chart directory")?;
    Ok(dir.keep())
}

/// Open every chart in the image viewer and return how many were opened.
/// A viewer that cannot be started is reported but not fatal.
pub fn open_all(dir: &Path, paths: &[PathBuf]) -> usize {
    open_each(dir, paths, viewer_command)
}

fn open_each(dir: &Path, paths: &[PathBuf], command: impl Fn(&Path) -> Command) -> usize {
    let mut opened = 0;
    for path in paths {
        match command(path).status() {
            Ok(status) if status.success() => {
                info!("Opened {}", path.display());
                opened += 1;
            }
            Ok(status) => warn!("Image viewer exited with {status} for {}", path.display()),
            Err(e) => {
                warn!("Failed to launch image viewer: {e}");
                println!("{}", fallback_message(dir));
                break;
            }
        }
    }
    opened
}

fn fallback_message(dir: &Path) -> String {
    format!("Charts were written to {}", dir.display())
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_paths(dir: &Path) -> Vec<PathBuf> {
        ["speedup_n_strings.png", "speedup_len_string.png"]
            .iter()
            .map(|name| dir.join(name))
            .collect()
    }

    #[test]
    fn viewer_receives_the_chart_path() {
        let path = Path::new("/tmp/speedup-charts/speedup_n_strings.png");
        let command = viewer_command(path);
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args.last().copied(), Some(path.as_os_str()));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_uses_xdg_open() {
        let command = viewer_command(Path::new("chart.png"));
        assert_eq!(command.get_program(), "xdg-open");
    }

    #[test]
    fn show_dirs_are_fresh_and_private() {
        let first = create_show_dir().unwrap();
        let second = create_show_dir().unwrap();

        assert_ne!(first, second);
        assert!(first.is_dir());
        assert!(
            first
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("speedup-charts-")
        );
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&first).unwrap().permissions().mode();
            assert_eq!(mode & 0o077, 0);
        }

        std::fs::remove_dir_all(first).unwrap();
        std::fs::remove_dir_all(second).unwrap();
    }

    #[test]
    fn missing_viewer_stops_without_failing() {
        let dir = tempfile::tempdir().unwrap();
        let opened = open_each(dir.path(), &chart_paths(dir.path()), |_| {
            Command::new("speedup-viewer-that-does-not-exist")
        });
        assert_eq!(opened, 0);
        assert_eq!(
            fallback_message(dir.path()),
            format!("Charts were written to {}", dir.path().display())
        );
    }

    #[cfg(unix)]
    #[test]
    fn every_chart_goes_to_the_viewer() {
        let dir = tempfile::tempdir().unwrap();
        let opened = open_each(dir.path(), &chart_paths(dir.path()), |path| {
            let mut command = Command::new("true");
            command.arg(path);
            command
        });
        assert_eq!(opened, 2);
    }
}
