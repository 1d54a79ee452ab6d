// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;

#[test]
fn missing_fields_take_defaults() {
    let config: CircuitizerConfig = serde_json::from_str("{}").expect("config should parse");
    assert_eq!(config, CircuitizerConfig::default());
    assert_eq!(config.classical_annotation, ClassicalAnnotation::None);
    assert!(!config.collapse_measured);
}

#[test]
fn fields_are_camel_case() {
    let config: CircuitizerConfig =
        serde_json::from_str(r#"{ "classicalAnnotation": "border", "collapseMeasured": true }"#)
            .expect("config should parse");
    assert_eq!(
        config,
        CircuitizerConfig {
            classical_annotation: ClassicalAnnotation::Border,
            collapse_measured: true,
        }
    );
}
