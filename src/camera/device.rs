//! Camera device enumeration.

use super::types::{CameraError, CameraInfo};

/// List all available camera devices on the system.
///
/// If no cameras are found, returns an empty vector (not an error).
#[cfg(feature = "native-camera")]
pub fn list_devices() -> Result<Vec<CameraInfo>, CameraError> {
    use nokhwa::query;
    use nokhwa::utils::ApiBackend;

    let devices = query(ApiBackend::Auto).map_err(|e| CameraError::QueryFailed(e.to_string()))?;

    Ok(devices
        .into_iter()
        .map(|d| CameraInfo {
            index: d.index().as_index().unwrap_or(0),
            name: d.human_name(),
            description: d.description().to_string(),
        })
        .collect())
}

/// List all available camera devices on the system.
///
/// Without the native backend this scans `/dev/video*` on Linux; other
/// platforms report no devices.
#[cfg(not(feature = "native-camera"))]
pub fn list_devices() -> Result<Vec<CameraInfo>, CameraError> {
    if cfg!(target_os = "linux") {
        scan_video_nodes(std::path::Path::new("/dev"))
    } else {
        Ok(Vec::new())
    }
}

/// Collect `videoN` nodes from a device directory, sorted by index.
#[cfg_attr(feature = "native-camera", allow(dead_code))]
pub(crate) fn scan_video_nodes(dir: &std::path::Path) -> Result<Vec<CameraInfo>, CameraError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(CameraError::QueryFailed(e.to_string())),
    };

    let mut devices: Vec<CameraInfo> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let index = name.strip_prefix("video")?.parse::<u32>().ok()?;
            let label = std::fs::read_to_string(
                std::path::Path::new("/sys/class/video4linux")
                    .join(&name)
                    .join("name"),
            )
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "Video device".to_string());
            Some(CameraInfo {
                index,
                name: label,
                description: entry.path().display().to_string(),
            })
        })
        .collect();

    devices.sort_by_key(|d| d.index);
    Ok(devices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_devices_does_not_error() {
        // Should not error even if no cameras are present
        assert!(list_devices().is_ok());
    }

    #[test]
    fn test_scan_video_nodes_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["video2", "video0", "videoX", "null", "video10"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        let devices = scan_video_nodes(dir.path()).unwrap();
        let indices: Vec<u32> = devices.iter().map(|d| d.index).collect();
        assert_eq!(indices, vec![0, 2, 10]);
    }

    #[test]
    fn test_scan_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let devices = scan_video_nodes(&dir.path().join("nope")).unwrap();
        assert!(devices.is_empty());
    }
}
