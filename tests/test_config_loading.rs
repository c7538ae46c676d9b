//! Configuration loading and validation tests
//!
//! Tests focus on BEHAVIOR of configuration loading, validation, and
//! error handling: observable outcomes, not TOML parsing details.

use std::io::Write;

use tempfile::NamedTempFile;
use webui_pages::config::{ConfigError, PageConfig};
use webui_pages::sites::SortMethod;

#[test]
fn test_config_loads_successfully_from_valid_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[sites]
default_sort = "name"

[downloads]
url_display_limit = 200

[strings]
is_managed = true
browser_managed_by_org = "Managed by Example Corp"
"#
    )
    .unwrap();

    let config = PageConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.sites.default_sort, Some(SortMethod::Name));
    assert_eq!(config.downloads.url_display_limit, 200);
    assert!(config.strings.is_managed);
    assert_eq!(
        config.strings.browser_managed_by_org,
        "Managed by Example Corp"
    );
}

#[test]
fn test_config_loads_with_all_sections_omitted() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "").unwrap();

    let config = PageConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.sites.default_sort, None);
    assert_eq!(config.downloads.url_display_limit, 300);
    assert!(!config.strings.is_managed);
}

#[test]
fn test_config_rejects_malformed_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[sites\ndefault_sort =").unwrap();

    let result = PageConfig::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_config_rejects_unknown_sort_method() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[sites]\ndefault_sort = \"usage\"").unwrap();

    let result = PageConfig::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_config_rejects_zero_url_display_limit() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[downloads]\nurl_display_limit = 0").unwrap();

    let result = PageConfig::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
}

#[test]
fn test_missing_file_is_a_read_error() {
    let result = PageConfig::load_from_file(std::path::Path::new("/nonexistent/pages.toml"));
    assert!(matches!(result, Err(ConfigError::FileRead(_))));
}

#[test]
fn test_string_overrides_flow_into_load_time_data() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[strings]
is_managed = true
browser_managed_by_org = "Managed by Example Corp"
"#
    )
    .unwrap();

    let config = PageConfig::load_from_file(temp_file.path()).unwrap();
    let data = config.load_time_data();

    assert!(data.get_boolean("isManaged").unwrap());
    assert_eq!(
        data.get_string("browserManagedByOrg").unwrap(),
        "Managed by Example Corp"
    );
    assert!(data.get_string("toastRemovedFromList").is_ok());
}
