use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;
use tokensmith::store::Sources;
use tokensmith::{Collection, Config, Emitter, Error, LoadError, OutputFormat, TokenStore, Warning};

fn write(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A project directory with the three default documents and a config file.
fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "tokens/primitives.json",
        r##"{
            "brand": { "500": { "$value": "#538bff", "$type": "color" } },
            "space": { "2": { "$value": 8, "$type": "dimension" } }
        }"##,
    );
    write(
        dir.path(),
        "tokens/semantic.json",
        r##"{
            "button": {
                "bg": { "$value": "{brand.500}", "$type": "color" },
                "old-bg": {
                    "$value": "{brand.500}",
                    "$type": "color",
                    "$extensions": { "deprecated": true, "replacedBy": "button.bg" }
                }
            },
            "missing": { "$value": "{brand.900}", "$type": "color" }
        }"##,
    );
    write(
        dir.path(),
        "tokens/components.json",
        r##"{
            "card": {
                "gap": { "$value": "{space-2}", "$type": "spacing" },
                "fill": { "$value": "{button.bg}", "$type": "color" }
            }
        }"##,
    );
    write(dir.path(), "tokensmith.yaml", "output: dist/css/tokens.css\n");
    dir
}

#[test]
fn build_writes_css_into_missing_directory() {
    let dir = project();
    let config = Config::load(&dir.path().join("tokensmith.yaml")).unwrap();
    let build = tokensmith::build(&config).unwrap();

    let css = fs::read_to_string(dir.path().join("dist/css/tokens.css")).unwrap();
    assert_eq!(css, build.document);
    assert!(css.contains("  --token-semantic-button-bg: #538bff;\n"));
    assert!(css.contains("  --token-primitive-space-2: 8px;\n"));
    assert!(css.contains("  --token-component-card-gap: 8px;\n"));
    assert!(css.contains("  --token-component-card-fill: #538bff;\n"));
    assert!(css.contains(" *   --token-semantic-button-old-bg -> button.bg\n"));
}

#[test]
fn unresolved_token_does_not_stop_the_run() {
    let dir = project();
    let config = Config::load(&dir.path().join("tokensmith.yaml")).unwrap();
    let emission = tokensmith::compile(&config).unwrap();

    assert_eq!(emission.value("--token-semantic-missing"), None);
    assert_eq!(emission.warnings.len(), 1);
    assert!(matches!(
        &emission.warnings[0],
        Warning::Unresolved { collection: Collection::Semantic, path, .. } if path == "missing"
    ));
    assert_eq!(emission.token_count(), 2 + 2 + 2);
}

#[test]
fn missing_collection_is_fatal() {
    let dir = project();
    fs::remove_file(dir.path().join("tokens/components.json")).unwrap();
    let config = Config::load(&dir.path().join("tokensmith.yaml")).unwrap();

    match tokensmith::build(&config) {
        Err(Error::Load(err @ LoadError::Read { .. })) => {
            assert_eq!(err.collection(), Collection::Component)
        }
        other => panic!("expected a load error, got {:?}", other),
    }
    assert!(!dir.path().join("dist/css/tokens.css").exists());
}

#[test]
fn unparsable_collection_is_fatal() {
    let dir = project();
    write(dir.path(), "tokens/semantic.json", "{ \"button\": ");
    let config = Config::load(&dir.path().join("tokensmith.yaml")).unwrap();
    assert!(matches!(
        tokensmith::compile(&config),
        Err(Error::Load(LoadError::Parse {
            collection: Collection::Semantic,
            ..
        }))
    ));
}

#[test]
fn yaml_documents_and_json_output() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "design/base.yaml",
        "brand:\n  \"500\":\n    $value: \"#538bff\"\n    $type: color\n",
    );
    write(
        dir.path(),
        "design/roles.yml",
        "surface:\n  $value: \"{brand.500}\"\n  $type: color\n",
    );
    write(dir.path(), "design/parts.json", "{}");
    write(
        dir.path(),
        "tokensmith.yaml",
        "sources:\n  primitives: design/base.yaml\n  semantic: design/roles.yml\n  component: design/parts.json\noutput: out/tokens.json\nformat: json\nnamespace: ds\n",
    );

    let config = Config::load(&dir.path().join("tokensmith.yaml")).unwrap();
    assert_eq!(config.format, OutputFormat::Json);
    tokensmith::build(&config).unwrap();

    let text = fs::read_to_string(dir.path().join("out/tokens.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["semantic"]["--ds-semantic-surface"], "#538bff");
    assert_eq!(value["primitives"]["--ds-primitive-brand-500"], "#538bff");
}

#[test]
fn primitives_emit_identically_without_upper_layers() {
    let primitives = json!({
        "brand": { "500": { "$value": "#538bff", "$type": "color" } },
        "radius": { "sm": { "$value": 4, "$type": "dimension" } }
    });
    let full = TokenStore::new(
        primitives.clone(),
        json!({ "brand": { "500": { "$value": "#000000", "$type": "color" } } }),
        json!({ "radius": { "sm": { "$value": "{radius.sm}", "$type": "dimension" } } }),
    )
    .unwrap();
    let alone = TokenStore::primitives_only(primitives).unwrap();

    let with_layers = Emitter::new(&full).emit();
    let without = Emitter::new(&alone).emit();
    assert_eq!(
        with_layers.section(Collection::Primitives),
        without.section(Collection::Primitives)
    );
}

#[test]
fn dotted_and_hyphenated_references_agree() {
    let store = TokenStore::new(
        json!({
            "brand": { "500": { "$value": "#538bff", "$type": "color" } },
            "brand-600": { "$value": "#2f6fe4", "$type": "color" }
        }),
        json!({
            "dotted": { "$value": "{brand.500}", "$type": "color" },
            "hyphen": { "$value": "{brand-500}", "$type": "color" },
            "flat": { "$value": "{brand-600}", "$type": "color" }
        }),
        json!({}),
    )
    .unwrap();
    let emission = Emitter::new(&store).emit();
    assert_eq!(emission.value("--token-semantic-dotted"), Some("#538bff"));
    assert_eq!(emission.value("--token-semantic-hyphen"), Some("#538bff"));
    assert_eq!(emission.value("--token-semantic-flat"), Some("#2f6fe4"));
    assert!(!emission.has_warnings());
}

#[test]
fn builds_are_repeatable() {
    let dir = project();
    let config = Config::load(&dir.path().join("tokensmith.yaml")).unwrap();
    let first = tokensmith::build(&config).unwrap().document;
    let second = tokensmith::build(&config).unwrap().document;
    assert_eq!(first, second);
}

#[test]
fn default_sources_are_relative_to_config() {
    let dir = project();
    let config = Config::load(&dir.path().join("tokensmith.yaml")).unwrap();
    assert_eq!(config.sources, Sources::default().relative_to(dir.path()));
}
