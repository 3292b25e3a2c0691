//! Token exports: style-property maps, style sheets, JSON and legacy tokens.
//!
//! Every export is a pure projection recomputed on each call.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    custom::CustomColorGroup,
    palette::PaletteSet,
    scheme::{ColorRole, Mode, Scheme},
    theme::Theme,
};

/// Default prefix for scheme role properties.
pub const DEFAULT_SCHEME_PREFIX: &str = "--md-sys-color";
/// Prefix for flattened palette properties.
pub const PALETTE_PREFIX: &str = "--md-ref-palette";
/// Default prefix for custom color properties.
pub const DEFAULT_CUSTOM_PREFIX: &str = "--md-custom-color";

/// Legacy token names and the scheme roles they alias.
pub const LEGACY_TOKENS: [(&str, ColorRole); 24] = [
    ("--color-primary-default", ColorRole::Primary),
    ("--color-primary-contrast", ColorRole::OnPrimary),
    ("--color-primary-subtle", ColorRole::PrimaryContainer),
    ("--color-primary-on-subtle", ColorRole::OnPrimaryContainer),
    ("--color-secondary-default", ColorRole::Secondary),
    ("--color-secondary-contrast", ColorRole::OnSecondary),
    ("--color-secondary-subtle", ColorRole::SecondaryContainer),
    ("--color-secondary-on-subtle", ColorRole::OnSecondaryContainer),
    ("--color-accent-default", ColorRole::Tertiary),
    ("--color-accent-contrast", ColorRole::OnTertiary),
    ("--color-accent-subtle", ColorRole::TertiaryContainer),
    ("--color-accent-on-subtle", ColorRole::OnTertiaryContainer),
    ("--color-danger-default", ColorRole::Error),
    ("--color-danger-contrast", ColorRole::OnError),
    ("--color-danger-subtle", ColorRole::ErrorContainer),
    ("--color-danger-on-subtle", ColorRole::OnErrorContainer),
    ("--color-background-default", ColorRole::Background),
    ("--color-text-default", ColorRole::OnBackground),
    ("--color-surface-default", ColorRole::Surface),
    ("--color-surface-contrast", ColorRole::OnSurface),
    ("--color-surface-muted", ColorRole::SurfaceVariant),
    ("--color-text-muted", ColorRole::OnSurfaceVariant),
    ("--color-border-default", ColorRole::Outline),
    ("--color-border-subtle", ColorRole::OutlineVariant),
];

/// Property prefixes used when a theme is written to a target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPrefixes {
    /// Prefix for scheme role properties.
    pub scheme: String,
    /// Prefix for custom color properties.
    pub custom: String,
}

impl Default for TokenPrefixes {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME_PREFIX.to_string(),
            custom: DEFAULT_CUSTOM_PREFIX.to_string(),
        }
    }
}

/// Ordered mapping from property name to hex color.
#[derive(Clone, Debug, Default, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenMap {
    entries: IndexMap<String, String>,
}

impl TokenMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `name`. New names keep insertion order, replaced
    /// names keep their position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Removes `name`, returning its value. Remaining entries keep their order.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.shift_remove(name)
    }

    /// Returns the value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Appends every entry of `other`.
    pub fn extend(&mut self, other: TokenMap) {
        self.entries.extend(other.entries);
    }

    fn to_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
                .collect(),
        )
    }
}

// Two maps are equal only when their entries also appear in the same order.
impl PartialEq for TokenMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

/// One `{prefix}-{role}` entry per scheme role, in role order.
pub fn to_property_map(scheme: &Scheme, prefix: &str) -> TokenMap {
    let mut tokens = TokenMap::new();
    for (role, color) in scheme.iter() {
        tokens.insert(format!("{prefix}-{}", role.kebab_name()), color.to_hex());
    }
    tokens
}

/// The 78 flattened palette properties, e.g. `--md-ref-palette-primary40`.
pub fn to_palette_properties(palettes: &PaletteSet) -> TokenMap {
    let mut tokens = TokenMap::new();
    for (role, palette) in palettes.iter() {
        for (tone, color) in palette.tones() {
            tokens.insert(
                format!("{PALETTE_PREFIX}-{}{tone}", role.kebab_name()),
                color.to_hex(),
            );
        }
    }
    tokens
}

/// Four properties per custom color group for `mode`.
pub fn to_custom_color_properties(groups: &[CustomColorGroup], mode: Mode, prefix: &str) -> TokenMap {
    let mut tokens = TokenMap::new();
    for group in groups {
        let name = kebab_case(&group.color.name);
        let roles = group.get(mode);
        tokens.insert(format!("{prefix}-{name}"), roles.color.to_hex());
        tokens.insert(format!("{prefix}-on-{name}"), roles.on_color.to_hex());
        tokens.insert(format!("{prefix}-{name}-container"), roles.color_container.to_hex());
        tokens.insert(format!("{prefix}-on-{name}-container"), roles.on_color_container.to_hex());
    }
    tokens
}

/// Style sheet with the light scheme, the dark scheme and the palettes.
///
/// ```text
/// :root,
/// [data-theme="light"] {
///   --md-sys-color-primary: #6750a4;
///   ...
/// }
///
/// [data-theme="dark"] {
///   ...
/// }
///
/// :root {
///   --md-ref-palette-primary0: #000000;
///   ...
/// }
/// ```
pub fn to_stylesheet(theme: &Theme, prefix: &str) -> String {
    let mut css = String::new();
    push_block(
        &mut css,
        ":root,\n[data-theme=\"light\"]",
        &to_property_map(&theme.schemes.light, prefix),
    );
    css.push('\n');
    push_block(
        &mut css,
        "[data-theme=\"dark\"]",
        &to_property_map(&theme.schemes.dark, prefix),
    );
    css.push('\n');
    push_block(&mut css, ":root", &to_palette_properties(&theme.palettes));
    css
}

fn push_block(css: &mut String, selector: &str, tokens: &TokenMap) {
    css.push_str(selector);
    css.push_str(" {\n");
    for (name, value) in tokens.iter() {
        css.push_str(&format!("  {name}: {value};\n"));
    }
    css.push_str("}\n");
}

/// Pretty-printed JSON document with `source`, `light`, `dark` and
/// `palettes`.
pub fn to_json(theme: &Theme, prefix: &str) -> String {
    let palettes: Map<String, Value> = theme
        .palettes
        .iter()
        .map(|(role, palette)| {
            let tones: Map<String, Value> = palette
                .tones()
                .into_iter()
                .map(|(tone, color)| (tone.to_string(), Value::String(color.to_hex())))
                .collect();
            (role.name().to_string(), Value::Object(tones))
        })
        .collect();

    let mut document = Map::new();
    document.insert("source".into(), Value::String(theme.source.to_hex()));
    document.insert("light".into(), to_property_map(&theme.schemes.light, prefix).to_value());
    document.insert("dark".into(), to_property_map(&theme.schemes.dark, prefix).to_value());
    document.insert("palettes".into(), Value::Object(palettes));
    format!("{:#}", Value::Object(document))
}

/// Legacy flat tokens used by pre-existing components.
pub fn to_legacy_tokens(scheme: &Scheme) -> TokenMap {
    let mut tokens = TokenMap::new();
    for (name, role) in LEGACY_TOKENS {
        tokens.insert(name, scheme.get(role).to_hex());
    }
    tokens
}

/// `brandGreen`, `brand_green` and `Brand Green` all become `brand-green`.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower = false;
        } else if ch == '_' || ch == ' ' || ch == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    out.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::Argb,
        custom::CustomColor,
        palette::{PaletteRole, tests::LinearScience},
        theme::{ThemeGenerator, ThemeOptions},
    };

    fn baseline() -> Theme {
        Theme::from_source("#6750A4").unwrap()
    }

    fn linear_theme() -> Theme {
        let options = ThemeOptions::default()
            .with_custom_color(CustomColor::new("brandGreen", Argb::from_rgb(0, 200, 100), false));
        ThemeGenerator::new(LinearScience::default()).generate(Argb::from_rgb(0x64, 0x32, 0xC8), &options)
    }

    #[test]
    fn test_property_map_has_every_role_in_order() {
        let theme = baseline();
        let tokens = to_property_map(&theme.schemes.light, DEFAULT_SCHEME_PREFIX);
        assert_eq!(tokens.len(), 29);
        let expected: Vec<String> = ColorRole::ALL
            .iter()
            .map(|role| format!("--md-sys-color-{}", role.kebab_name()))
            .collect();
        let names: Vec<&str> = tokens.iter().map(|(name, _)| name).collect();
        assert_eq!(names, expected);
        assert_eq!(
            tokens.get("--md-sys-color-on-primary-container"),
            Some(theme.schemes.light.get(ColorRole::OnPrimaryContainer).to_hex().as_str())
        );
    }

    #[test]
    fn test_palette_properties_flatten_all_tones() {
        let tokens = to_palette_properties(&linear_theme().palettes);
        assert_eq!(tokens.len(), 78);
        assert_eq!(tokens.iter().next(), Some(("--md-ref-palette-primary0", "#000000")));
        assert_eq!(tokens.get("--md-ref-palette-primary100"), Some("#6432c8"));
        assert_eq!(tokens.get("--md-ref-palette-primary50"), Some("#321964"));
        assert!(tokens.get("--md-ref-palette-neutral-variant99").is_some());
        assert_eq!(tokens.iter().last().map(|(name, _)| name), Some("--md-ref-palette-error100"));
    }

    #[test]
    fn test_exports_are_byte_identical_across_runs() {
        let a = baseline();
        let b = baseline();
        assert_eq!(to_stylesheet(&a, DEFAULT_SCHEME_PREFIX), to_stylesheet(&b, DEFAULT_SCHEME_PREFIX));
        assert_eq!(to_json(&a, DEFAULT_SCHEME_PREFIX), to_json(&b, DEFAULT_SCHEME_PREFIX));
        assert_eq!(to_legacy_tokens(&a.schemes.dark), to_legacy_tokens(&b.schemes.dark));
    }

    #[test]
    fn test_stylesheet_layout() {
        let theme = linear_theme();
        let css = to_stylesheet(&theme, "--app");
        let blocks: Vec<&str> = css.split("\n\n").collect();
        assert_eq!(blocks.len(), 3);

        assert!(blocks[0].starts_with(":root,\n[data-theme=\"light\"] {\n  --app-primary: "));
        assert!(blocks[1].starts_with("[data-theme=\"dark\"] {\n  --app-primary: "));
        assert!(blocks[2].starts_with(":root {\n  --md-ref-palette-primary0: #000000;\n"));
        assert!(css.ends_with("  --md-ref-palette-error100: #b3261e;\n}\n"));

        let declarations = |block: &str| block.lines().filter(|l| l.starts_with("  --")).count();
        assert_eq!(declarations(blocks[0]), 29);
        assert_eq!(declarations(blocks[1]), 29);
        assert_eq!(declarations(blocks[2]), 78);
        assert_eq!(css.lines().filter(|l| l.starts_with("  ")).count(), 29 + 29 + 78);

        let light_primary = theme.schemes.light.get(ColorRole::Primary).to_hex();
        assert!(blocks[0].contains(&format!("  --app-primary: {light_primary};\n")));
    }

    #[test]
    fn test_json_document_shape() {
        let theme = baseline();
        let json = to_json(&theme, DEFAULT_SCHEME_PREFIX);
        let value: Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, ["source", "light", "dark", "palettes"]);
        assert_eq!(object["source"], "#6750a4");
        assert_eq!(object["light"].as_object().unwrap().len(), 29);
        assert_eq!(object["dark"].as_object().unwrap().len(), 29);
        assert_eq!(
            object["dark"]["--md-sys-color-primary"],
            theme.schemes.dark.get(ColorRole::Primary).to_hex().as_str()
        );
        let palettes = object["palettes"].as_object().unwrap();
        let roles: Vec<&str> = palettes.keys().map(String::as_str).collect();
        assert_eq!(roles, PaletteRole::ALL.map(PaletteRole::name));
        let tones: Vec<&str> = palettes["neutralVariant"].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(tones, ["0", "10", "20", "30", "40", "50", "60", "70", "80", "90", "95", "99", "100"]);
    }

    #[test]
    fn test_json_is_indented_with_two_spaces() {
        let json = to_json(&baseline(), DEFAULT_SCHEME_PREFIX);
        assert!(json.starts_with("{\n  \"source\": \"#6750a4\",\n  \"light\": {\n    \"--md-sys-color-primary\": "));
    }

    #[test]
    fn test_legacy_tokens_alias_scheme_roles() {
        let theme = baseline();
        let tokens = to_legacy_tokens(&theme.schemes.light);
        assert_eq!(tokens.len(), 24);
        assert_eq!(
            tokens.get("--color-primary-default"),
            Some(theme.schemes.light.get(ColorRole::Primary).to_hex().as_str())
        );
        assert_eq!(
            tokens.get("--color-primary-subtle"),
            Some(theme.schemes.light.get(ColorRole::PrimaryContainer).to_hex().as_str())
        );
        assert_eq!(
            tokens.get("--color-border-subtle"),
            Some(theme.schemes.light.get(ColorRole::OutlineVariant).to_hex().as_str())
        );
    }

    #[test]
    fn test_custom_color_properties() {
        let theme = linear_theme();
        let tokens = to_custom_color_properties(&theme.custom_colors, Mode::Dark, DEFAULT_CUSTOM_PREFIX);
        let names: Vec<&str> = tokens.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            [
                "--md-custom-color-brand-green",
                "--md-custom-color-on-brand-green",
                "--md-custom-color-brand-green-container",
                "--md-custom-color-on-brand-green-container",
            ]
        );
        assert_eq!(tokens.get("--md-custom-color-brand-green"), Some("#00a050"));
    }

    #[test]
    fn test_token_map_insert_replaces() {
        let mut tokens = TokenMap::new();
        tokens.insert("--a", "#000000");
        tokens.insert("--b", "#111111");
        tokens.insert("--a", "#ffffff");
        assert_eq!(tokens.iter().collect::<Vec<_>>(), [("--a", "#ffffff"), ("--b", "#111111")]);
        assert_eq!(serde_json::to_string(&tokens).unwrap(), r##"{"--a":"#ffffff","--b":"#111111"}"##);
    }

    #[test]
    fn test_token_map_remove_keeps_order() {
        let mut tokens = TokenMap::new();
        for name in ["--a", "--b", "--c", "--d"] {
            tokens.insert(name, "#000000");
        }
        assert_eq!(tokens.remove("--b"), Some("#000000".to_string()));
        assert_eq!(tokens.remove("--b"), None);
        assert_eq!(tokens.iter().map(|(name, _)| name).collect::<Vec<_>>(), ["--a", "--c", "--d"]);
    }

    #[test]
    fn test_token_map_equality_is_ordered() {
        let mut ab = TokenMap::new();
        ab.insert("--a", "#000000");
        ab.insert("--b", "#111111");
        let mut ba = TokenMap::new();
        ba.insert("--b", "#111111");
        ba.insert("--a", "#000000");
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("brandGreen"), "brand-green");
        assert_eq!(kebab_case("brand_green"), "brand-green");
        assert_eq!(kebab_case("Brand Green"), "brand-green");
        assert_eq!(kebab_case("accent2Dark"), "accent2-dark");
        assert_eq!(kebab_case("already-kebab"), "already-kebab");
    }
}
