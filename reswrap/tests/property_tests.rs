use proptest::prelude::*;
use reswrap::{NullableState, ResourceTree, ToolIdentity, WrapperGenerator};
use std::collections::HashSet;

fn segment_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9]{0,6}").expect("valid segment regex")
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..4).prop_map(|segments| segments.join("."))
}

fn keys_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(key_strategy(), 1..12)
}

fn flat_keys_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..12)
}

fn to_resw(keys: &[String]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<root>\n");
    for key in keys {
        xml.push_str(&format!(
            "  <data name=\"{}\" xml:space=\"preserve\"><value>v</value></data>\n",
            key
        ));
    }
    xml.push_str("</root>\n");
    xml
}

fn generator(nullable: NullableState) -> WrapperGenerator {
    WrapperGenerator::new("Prop.Generated", nullable).with_tool(ToolIdentity::new("reswrap", "0.0.0"))
}

fn unique_in_order(keys: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    keys.iter()
        .filter(|key| seen.insert(key.as_str()))
        .cloned()
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_generation_is_deterministic(keys in keys_strategy()) {
        let xml = to_resw(&keys);
        let generator = generator(NullableState::Enabled);
        let first = generator.generate_wrapper_for_resw(&xml, "Resources").unwrap();
        let second = generator.generate_wrapper_for_resw(&xml, "Resources").unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_every_key_has_one_lookup(keys in keys_strategy()) {
        let output = generator(NullableState::Enabled)
            .generate_wrapper_for_resw(&to_resw(&keys), "Resources")
            .unwrap();
        for key in unique_in_order(&keys) {
            let lookup = format!("Loader.GetString(\"{}\");", key.replace('.', "/"));
            prop_assert_eq!(output.matches(&lookup).count(), 1, "lookup for {}", key);
        }
    }

    #[test]
    fn prop_flat_accessors_follow_first_seen_order(keys in flat_keys_strategy()) {
        let output = generator(NullableState::Enabled)
            .generate_wrapper_for_resw(&to_resw(&keys), "Resources")
            .unwrap();
        let lookups: Vec<String> = output
            .lines()
            .filter_map(|line| line.split("Loader.GetString(\"").nth(1))
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_string)
            .collect();
        prop_assert_eq!(lookups, unique_in_order(&keys));
    }

    #[test]
    fn prop_nullability_only_touches_the_field(keys in keys_strategy()) {
        let xml = to_resw(&keys);
        let enabled = generator(NullableState::Enabled)
            .generate_wrapper_for_resw(&xml, "Resources")
            .unwrap();
        let disabled = generator(NullableState::Disabled)
            .generate_wrapper_for_resw(&xml, "Resources")
            .unwrap();
        prop_assert_eq!(enabled.matches("ResourceLoader? resourceLoader;").count(), 1);
        prop_assert_eq!(
            enabled.replacen("ResourceLoader? resourceLoader;", "ResourceLoader resourceLoader;", 1),
            disabled
        );
    }

    #[test]
    fn prop_output_is_balanced(keys in keys_strategy()) {
        let output = generator(NullableState::Enabled)
            .generate_wrapper_for_resw(&to_resw(&keys), "Resources")
            .unwrap();
        prop_assert_eq!(output.matches('{').count(), output.matches('}').count());
        prop_assert!(output.ends_with("}\n"), "output should end with a closing brace");
        prop_assert!(output.lines().all(|line| line.is_empty() || !line.ends_with(' ')));
    }

    #[test]
    fn prop_tree_counts_unique_keys(keys in keys_strategy()) {
        let tree = ResourceTree::from_keys("Resources", &keys);
        prop_assert_eq!(tree.root.resource_count(), unique_in_order(&keys).len());
    }
}
