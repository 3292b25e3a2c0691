pub mod generate;
pub mod show;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use clap::Args;
use tonekit::{
    Theme,
    config::ThemeConfig,
    export::TokenPrefixes,
    image_source::source_color_from_image_path,
    science::MaterialColorScience,
    theme::ThemeGenerator,
};
use tracing::debug;

use crate::output;

/// Where the theme comes from. Flags win over the config file.
#[derive(Args, Debug, Default)]
pub struct ThemeArgs {
    /// Source color as #rrggbb
    #[arg(short, long, conflicts_with = "image")]
    pub source: Option<String>,
    /// Extract the source color from a png or jpeg image
    #[arg(long)]
    pub image: Option<PathBuf>,
    /// Theme config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Harmonize override colors toward the source
    #[arg(long)]
    pub harmonize: bool,
    /// Override a palette, e.g. `primary=#ff0000` (repeatable)
    #[arg(long = "override", value_name = "ROLE=HEX")]
    pub overrides: Vec<String>,
    /// Property prefix for scheme roles
    #[arg(long)]
    pub prefix: Option<String>,
    /// Property prefix for custom colors
    #[arg(long)]
    pub custom_prefix: Option<String>,
}

/// A generated theme together with the prefixes its exports use.
pub struct LoadedTheme {
    pub theme: Theme,
    pub prefixes: TokenPrefixes,
}

pub fn read_config(path: &Path) -> Result<ThemeConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
}

/// Merges the config file (if any) with command line flags.
pub fn resolve_config(args: &ThemeArgs) -> Result<ThemeConfig> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => ThemeConfig::default(),
    };

    if let Some(source) = &args.source {
        config.source = Some(source.parse()?);
    }
    if let Some(path) = &args.image {
        let color = source_color_from_image_path(path)
            .with_context(|| format!("cannot use {} as a source image", path.display()))?;
        output::note(format!("using {color} extracted from {}", path.display()));
        config.source = Some(color);
    }
    if args.harmonize {
        config.harmonize = true;
    }
    for entry in &args.overrides {
        let (role, hex) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("expected ROLE=HEX, got `{entry}`"))?;
        config
            .overrides
            .insert(role.trim().to_string(), hex.trim().parse()?);
    }
    if let Some(prefix) = &args.prefix {
        config.prefix = Some(prefix.clone());
    }
    if let Some(prefix) = &args.custom_prefix {
        config.custom_prefix = Some(prefix.clone());
    }

    if config.harmonize && config.overrides.is_empty() && config.custom_colors.is_empty() {
        output::warn("--harmonize has no effect without overrides or custom colors");
    }
    Ok(config)
}

pub fn load_theme(args: &ThemeArgs) -> Result<LoadedTheme> {
    let config = resolve_config(args)?;
    let options = config.options()?;
    let theme = ThemeGenerator::new(MaterialColorScience).generate(config.source(), &options);
    debug!(
        source = %theme.source,
        custom_colors = theme.custom_colors.len(),
        "theme loaded"
    );
    Ok(LoadedTheme {
        theme,
        prefixes: config.prefixes(),
    })
}

#[cfg(test)]
mod tests {
    use std::env;

    use tonekit::{Argb, ColorRole, palette::PaletteRole};

    use super::*;

    #[test]
    fn test_flags_override_config_file() {
        let path = env::temp_dir().join(format!("tonekit-cli-{}.toml", std::process::id()));
        fs::write(
            &path,
            "source = \"#112233\"\nprefix = \"--file\"\n[overrides]\nerror = \"#FF0000\"\n",
        )
        .unwrap();

        let args = ThemeArgs {
            source: Some("#6750A4".into()),
            config: Some(path.clone()),
            overrides: vec!["tertiary = #00ff00".into()],
            ..ThemeArgs::default()
        };
        let config = resolve_config(&args).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.source(), Argb::from_rgb(0x67, 0x50, 0xA4));
        assert_eq!(config.prefix(), "--file");
        let options = config.options().unwrap();
        assert_eq!(options.overrides.get(PaletteRole::Error), Some(Argb::from_rgb(0xFF, 0, 0)));
        assert_eq!(options.overrides.get(PaletteRole::Tertiary), Some(Argb::from_rgb(0, 0xFF, 0)));
    }

    #[test]
    fn test_load_theme_uses_defaults() {
        let loaded = load_theme(&ThemeArgs::default()).unwrap();
        assert_eq!(loaded.prefixes, TokenPrefixes::default());
        assert_eq!(loaded.theme.source, tonekit::theme::DEFAULT_SOURCE);
        assert_eq!(
            loaded.theme.schemes.light.get(ColorRole::Primary),
            loaded.theme.palettes.primary.tone(40)
        );
    }

    #[test]
    fn test_rejects_malformed_override() {
        let args = ThemeArgs {
            overrides: vec!["primary:#ff0000".into()],
            ..ThemeArgs::default()
        };
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_rejects_unknown_role() {
        let args = ThemeArgs {
            overrides: vec!["brand=#ff0000".into()],
            ..ThemeArgs::default()
        };
        assert!(load_theme(&args).is_err());
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let args = ThemeArgs {
            config: Some(PathBuf::from("/nonexistent/tonekit.toml")),
            ..ThemeArgs::default()
        };
        let err = resolve_config(&args).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn test_custom_prefix_flag_and_name_validation() {
        let path = env::temp_dir().join(format!("tonekit-cli-custom-{}.toml", std::process::id()));
        fs::write(
            &path,
            "[[custom_colors]]\nname = \"brandGreen\"\nvalue = \"#00FF00\"\n",
        )
        .unwrap();
        let args = ThemeArgs {
            config: Some(path.clone()),
            custom_prefix: Some("--brand".into()),
            ..ThemeArgs::default()
        };
        let loaded = load_theme(&args);
        fs::remove_file(&path).unwrap();
        let loaded = loaded.unwrap();
        assert_eq!(loaded.prefixes.custom, "--brand");
        assert_eq!(loaded.prefixes.scheme, "--md-sys-color");

        let path = env::temp_dir().join(format!("tonekit-cli-dup-{}.toml", std::process::id()));
        fs::write(
            &path,
            "[[custom_colors]]\nname = \"brandGreen\"\nvalue = \"#00FF00\"\n\n\
             [[custom_colors]]\nname = \"brand_green\"\nvalue = \"#008000\"\n",
        )
        .unwrap();
        let result = load_theme(&ThemeArgs {
            config: Some(path.clone()),
            ..ThemeArgs::default()
        });
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }
}
