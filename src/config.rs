//! Threshold profiles, loaded from TOML under the user config dir.

use directories::UserDirs;
use log::info;
use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    pub name: Option<String>,
}

/// Recognizer tuning knobs. Distances are in pointer device units,
/// velocity in units per millisecond.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Movement at or beyond this cancels tap/hold; beyond it (with
    /// enough velocity) a swipe fires.
    pub swipe_min_dist: f32,
    /// Minimum average velocity for a swipe.
    pub swipe_velocity: f32,
    /// Press duration after which a still pointer becomes a hold.
    pub hold_ms: f32,
    /// Watch-loop pacing for the `watch` subcommand.
    pub tick_ms: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            swipe_min_dist: 10.0,
            swipe_velocity: 0.65,
            hold_ms: 200.0,
            tick_ms: 8,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub thresholds: Thresholds,
}

fn config_dir() -> Result<PathBuf> {
    let dirs = UserDirs::new().ok_or(Error::NoHomeDir)?;
    Ok(dirs.home_dir().join(".config").join("gesturectl"))
}

pub fn profiles_dir() -> Result<PathBuf> {
    Ok(config_dir()?.join("profiles"))
}

fn default_profile_text() -> &'static str {
    include_str!("../profiles/default.toml")
}

/// Makes sure the profiles dir exists and carries the bundled default.
pub fn install_default_profile() -> Result<PathBuf> {
    let dir = profiles_dir()?;
    fs::create_dir_all(&dir).map_err(|e| Error::Write {
        path: dir.clone(),
        source: e,
    })?;

    let def_path = dir.join("default.toml");
    if !def_path.exists() {
        fs::write(&def_path, default_profile_text()).map_err(|e| Error::Write {
            path: def_path.clone(),
            source: e,
        })?;
        info!("installed default profile at {}", def_path.display());
    }
    Ok(dir)
}

pub fn load_profile(name: &str) -> Result<Profile> {
    let dir = install_default_profile()?;
    let path = dir.join(format!("{name}.toml"));
    if !path.exists() {
        return Err(Error::ProfileNotFound(name.to_string()));
    }
    let txt = fs::read_to_string(&path).map_err(|e| Error::Read {
        path: path.clone(),
        source: e,
    })?;
    let profile = parse_profile(&txt).map_err(|e| match e {
        Error::ParseProfile { source, .. } => Error::ParseProfile { path: path.clone(), source },
        other => other,
    })?;
    Ok(profile)
}

/// Parse and validate a profile from TOML text.
pub fn parse_profile(txt: &str) -> Result<Profile> {
    let profile: Profile = toml::from_str(txt).map_err(|e| Error::ParseProfile {
        path: PathBuf::new(),
        source: e,
    })?;
    validate_profile(&profile)?;
    Ok(profile)
}

pub fn list_profiles() -> Result<Vec<String>> {
    let dir = install_default_profile()?;
    let mut v = Vec::new();
    if let Ok(rd) = fs::read_dir(&dir) {
        for e in rd.flatten() {
            if let Some(ext) = e.path().extension() {
                if ext == "toml" {
                    if let Some(stem) = e.path().file_stem().and_then(|s| s.to_str()) {
                        v.push(stem.to_string());
                    }
                }
            }
        }
    }
    v.sort();
    Ok(v)
}

fn validate_profile(p: &Profile) -> Result<()> {
    let th = &p.thresholds;
    if !(th.swipe_min_dist > 0.0) {
        return Err(Error::InvalidProfile(
            "thresholds.swipe_min_dist must be positive".into(),
        ));
    }
    if !(th.swipe_velocity > 0.0) {
        return Err(Error::InvalidProfile(
            "thresholds.swipe_velocity must be positive".into(),
        ));
    }
    if !(th.hold_ms > 0.0) {
        return Err(Error::InvalidProfile(
            "thresholds.hold_ms must be positive".into(),
        ));
    }
    if th.tick_ms == 0 {
        return Err(Error::InvalidProfile(
            "thresholds.tick_ms must be positive".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_default_profile_parses_to_the_defaults() {
        let p = parse_profile(default_profile_text()).unwrap();
        assert_eq!(p.thresholds, Thresholds::default());
    }

    #[test]
    fn empty_profile_falls_back_to_defaults() {
        let p = parse_profile("").unwrap();
        assert_eq!(p.thresholds, Thresholds::default());
        assert!(p.meta.name.is_none());
    }

    #[test]
    fn partial_thresholds_keep_unset_defaults() {
        let p = parse_profile("[thresholds]\nhold_ms = 350.0\n").unwrap();
        assert_eq!(p.thresholds.hold_ms, 350.0);
        assert_eq!(p.thresholds.swipe_min_dist, 10.0);
        assert_eq!(p.thresholds.swipe_velocity, 0.65);
    }

    #[test]
    fn nonpositive_thresholds_are_rejected() {
        let err = parse_profile("[thresholds]\nswipe_min_dist = 0.0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidProfile(_)));

        let err = parse_profile("[thresholds]\nhold_ms = -5.0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidProfile(_)));

        let err = parse_profile("[thresholds]\ntick_ms = 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidProfile(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = parse_profile("thresholds = nonsense").unwrap_err();
        assert!(matches!(err, Error::ParseProfile { .. }));
    }
}
