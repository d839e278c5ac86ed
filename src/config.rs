use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Saved defaults, expressed as CLI flag tokens.
///
/// The config file is a list of the same flags the binary accepts, one
/// or more per line, with `#` comments. Values from the local override
/// file win over the global file, and CLI flags win over both.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigFlags {
    pub perf: bool,
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub steps: Option<usize>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            perf: self.perf || other.perf,
            x_min: other.x_min.or(self.x_min),
            x_max: other.x_max.or(self.x_max),
            steps: other.steps.or(self.steps),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("texplot").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("texplot")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("texplot").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("texplot")
                .join("config");
        }
    }

    PathBuf::from(".texplotrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".texplotrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# texplot defaults (saved with --save)".to_string());
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(x_min) = flags.x_min {
        lines.push(format!("--x-min {x_min}"));
    }
    if let Some(x_max) = flags.x_max {
        lines.push(format!("--x-max {x_max}"));
    }
    if let Some(steps) = flags.steps {
        lines.push(format!("--steps {steps}"));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--perf" {
            flags.perf = true;
        } else if token == "--x-min" {
            if let Some(next) = tokens.get(i + 1) {
                flags.x_min = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--x-min=") {
            flags.x_min = value.parse().ok();
        } else if token == "--x-max" {
            if let Some(next) = tokens.get(i + 1) {
                flags.x_max = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--x-max=") {
            flags.x_max = value.parse().ok();
        } else if token == "--steps" {
            if let Some(next) = tokens.get(i + 1) {
                flags.steps = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--steps=") {
            flags.steps = value.parse().ok();
        }
        i += 1;
    }
    flags
}
