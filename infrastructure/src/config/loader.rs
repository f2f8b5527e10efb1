//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["radix-quiz.toml", ".radix-quiz.toml"];

/// Prefix for environment overrides, e.g. `RADIX_QUIZ_GENERATION__SEED=7`
pub const ENV_PREFIX: &str = "RADIX_QUIZ_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `RADIX_QUIZ_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./radix-quiz.toml` or `./.radix-quiz.toml`
    /// 4. Global: `<config dir>/radix-quiz/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Merging global config {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            debug!("Merging project config {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = Self::merge_explicit(figment, path)?;
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load defaults overlaid with a single file, ignoring discovery and
    /// the environment
    pub fn load_file(path: &Path) -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Self::merge_explicit(figment, path)?
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn merge_explicit(figment: Figment, path: &Path) -> Result<Figment, Box<figment::Error>> {
        // `Toml::file` silently skips missing files; an explicit path must exist
        if !path.is_file() {
            return Err(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))));
        }
        debug!("Merging explicit config {}", path.display());
        Ok(figment.merge(Toml::file(path)))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("radix-quiz").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Config sources in priority order, one line each, marking the files
    /// that exist
    pub fn config_sources(config_path: Option<&PathBuf>) -> Vec<String> {
        let mut lines = vec![format!("  [     ] Env:      {}<SECTION>__<KEY>", ENV_PREFIX)];

        match config_path {
            Some(path) => {
                let marker = if path.is_file() { "FOUND" } else { "MISSING" };
                lines.push(format!("  [{:5}] Explicit: {}", marker, path.display()));
            }
            None => lines.push("  [     ] Explicit: --config <PATH>".to_string()),
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project:  {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project:  ./{} or ./{}",
                PROJECT_CONFIG_FILES[0], PROJECT_CONFIG_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:   {}", marker, path.display()));
        }

        lines.push("  [     ] Default:  built-in defaults".to_string());
        lines
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        for line in Self::config_sources(config_path) {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileParserMode;
    use figment::Jail;
    use radix_quiz_domain::OutputFormat;
    use std::io::Write;

    /// Point the global config directory into the jail so a real user
    /// config cannot leak into the test
    fn isolate_global(jail: &mut Jail) -> PathBuf {
        let xdg = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
        xdg
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.generation.choice_limit, 5);
        assert!(config.conversions.is_empty());
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("radix-quiz"));
    }

    #[test]
    fn test_load_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[generation]
choice_limit = 3
parser = "prefix"

[[conversions]]
from = 10
to = 2
min = 1
max = 15
"#
        )
        .unwrap();

        let config = ConfigLoader::load_file(file.path()).unwrap();
        assert_eq!(config.generation.choice_limit, 3);
        assert_eq!(config.generation.parser, FileParserMode::Prefix);
        // Untouched keys keep their defaults
        assert_eq!(config.generation.max_random_attempts, 10_000);
        assert!(config.output.color);
        assert_eq!(config.conversions.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_file_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(ConfigLoader::load_file(&missing).is_err());
    }

    #[test]
    fn test_load_file_rejects_bad_types() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generation]\nchoice_limit = \"many\"").unwrap();
        assert!(ConfigLoader::load_file(file.path()).is_err());
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file("explicit.toml", "[generation]\nchoice_limit = 3\nseed = 1\n")?;
            jail.set_env("RADIX_QUIZ_GENERATION__CHOICE_LIMIT", 7);
            jail.set_env("RADIX_QUIZ_OUTPUT__FORMAT", "json");

            let path = jail.directory().join("explicit.toml");
            let config = ConfigLoader::load(Some(&path)).map_err(|e| *e)?;

            assert_eq!(config.generation.choice_limit, 7);
            assert_eq!(config.generation.seed, Some(1));
            assert_eq!(config.output.format, Some(OutputFormat::Json));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file("radix-quiz.toml", "[generation]\nchoice_limit = 4\nseed = 11\n")?;
            jail.create_file("explicit.toml", "[generation]\nchoice_limit = 6\n")?;

            let path = jail.directory().join("explicit.toml");
            let config = ConfigLoader::load(Some(&path)).map_err(|e| *e)?;

            assert_eq!(config.generation.choice_limit, 6);
            // Keys the explicit file leaves out still come from the project file
            assert_eq!(config.generation.seed, Some(11));
            Ok(())
        });
    }

    #[test]
    fn test_load_explicit_missing_is_error() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            let path = jail.directory().join("missing.toml");
            assert!(ConfigLoader::load(Some(&path)).is_err());
            Ok(())
        });
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_project_file_overrides_global_file() {
        Jail::expect_with(|jail| {
            let xdg = isolate_global(jail);
            let global_dir = xdg.join("radix-quiz");
            std::fs::create_dir_all(&global_dir).map_err(|e| e.to_string())?;
            std::fs::write(
                global_dir.join("config.toml"),
                "[generation]\nchoice_limit = 9\nseed = 21\n\n[output]\nshow_answer = true\n",
            )
            .map_err(|e| e.to_string())?;
            assert_eq!(
                ConfigLoader::global_config_path(),
                Some(global_dir.join("config.toml"))
            );
            jail.create_file(".radix-quiz.toml", "[generation]\nchoice_limit = 2\n")?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;

            assert_eq!(config.generation.choice_limit, 2);
            assert_eq!(config.generation.seed, Some(21));
            assert!(config.output.show_answer);
            Ok(())
        });
    }

    #[test]
    fn test_config_sources_follow_priority() {
        let path = PathBuf::from("no-such-radix-quiz.toml");
        let lines = ConfigLoader::config_sources(Some(&path));

        assert!(lines[0].contains("Env:"));
        assert!(lines[0].contains(ENV_PREFIX));
        assert!(lines[1].contains("Explicit:"));
        assert!(lines[1].contains("MISSING"));
        assert!(lines[1].contains("no-such-radix-quiz.toml"));
        assert!(lines[2].contains("Project:"));
        assert!(lines.last().unwrap().contains("Default:"));

        let lines = ConfigLoader::config_sources(None);
        assert!(lines[1].contains("--config <PATH>"));
    }
}
