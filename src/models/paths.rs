use camino::{Utf8Path, Utf8PathBuf};

macro_rules! define_paths {
    ($name:ident { $($field:ident : $default:expr),* $(,)? }) => {
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            $(pub $field: Utf8PathBuf,)*
        }

        impl $name {
            pub fn to_absolute(mut self, base: &Utf8Path) -> Self {
                $(self.$field = base.join(self.$field);)*
                self
            }

            pub fn new(base: &Utf8Path) -> Self {
                Self::default().to_absolute(base)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.into(),)*
                }
            }
        }
    };
}

// Files inside a theme's root directory.
define_paths!(ThemePathRules {
    theme_manifest: "theme.yaml",
    extras_manifest: "themeExtras.yaml",
    last_changed: "lastChanged.json",
});

// Layout of the plugin's private data directory.
define_paths!(DataPathRules {
    theme_backups: "ThemeBackups",
    logs: "logs",
    settings: "config.toml",
});

// Layout of the launcher's configuration directory.
define_paths!(HostPathRules {
    desktop_themes: "Themes/Desktop",
});
