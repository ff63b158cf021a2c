use std::fs;
use std::path::Path;

use crate::analysis::FinalFitnessStats;

impl FinalFitnessStats {
    /// Save statistics to a pretty-printed JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))?;
        Ok(())
    }

    /// Load statistics previously written by `save_json`
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let json = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&json).map_err(|e| format!("Failed to deserialize: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FitnessDataset;
    use tempfile::TempDir;

    #[test]
    fn test_statistics_save_load() {
        let stats = FinalFitnessStats::from_dataset(&FitnessDataset::new()).unwrap();

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("stats.json");

        stats.save_json(&path).unwrap();
        let loaded = FinalFitnessStats::load_json(&path).unwrap();

        assert_eq!(loaded.runs, 20);
        assert_eq!(loaded.best, 2086);
        assert_eq!(loaded.worst_run, 11);
        assert!((loaded.mean - stats.mean).abs() < 1e-9);
    }

    #[test]
    fn test_statistics_json_format() {
        let stats = FinalFitnessStats::from_values(&[10, 20]).unwrap();

        let json = serde_json::to_string_pretty(&stats).unwrap();
        assert!(json.contains("\"runs\": 2"));
        assert!(json.contains("\"best\": 20"));
        assert!(json.contains("\"std_dev\": 5.0"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = FinalFitnessStats::load_json(dir.path().join("absent.json")).unwrap_err();
        assert!(err.starts_with("Failed to read file"));
    }
}
