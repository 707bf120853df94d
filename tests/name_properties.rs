//! Properties of identity enumeration across a spread of real-world names.

use std::collections::HashSet;

use namescout::names::{
    NameVariants, generate_emails, generate_name_variants, normalize, normalize_value,
};
use regex::Regex;

const NAMES: &[&str] = &[
    "Juan Perez",
    "  JUAN   PÉREZ ",
    "María José García López",
    "José Luis Rodríguez Zapatero",
    "Ana Ruiz",
    "Łukasz Żółć",
    "Søren Kierkegaard",
    "Nguyễn Thị Minh Khai",
    "O'Connor-Smith Mary",
    "Zoë",
    "李 小龍",
    "",
    "   ",
];

#[test]
fn normalize_is_idempotent_and_total() {
    for name in NAMES {
        let once = normalize(name);
        assert_eq!(normalize(&once), once, "{name:?}");
    }
    assert_eq!(normalize_value(&serde_json::json!({"name": "x"})), "");
    assert_eq!(normalize_value(&serde_json::json!(3.5)), "");
}

#[test]
fn variants_have_no_duplicates() {
    for name in NAMES {
        let variants = generate_name_variants(name);
        let unique: HashSet<_> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len(), "{name:?}");
    }
}

#[test]
fn usernames_stay_in_allowed_alphabet() {
    let pattern = Regex::new(r"^[a-z0-9._-]+$").expect("pattern compiles");
    for name in NAMES {
        for username in NameVariants::generate(name).usernames {
            assert!(pattern.is_match(&username), "{username:?} from {name:?}");
        }
    }
}

#[test]
fn two_part_name_lists_its_four_orderings_first() {
    for input in ["Juan Perez", "  JUAN   PÉREZ "] {
        let variants = generate_name_variants(input);
        let head: HashSet<_> = variants[..4].iter().map(String::as_str).collect();
        let expected: HashSet<_> = ["juan perez", "perez juan", "juan", "perez"]
            .into_iter()
            .collect();
        assert_eq!(head, expected);
    }
}

#[test]
fn four_part_name_combines_given_names_and_surnames() {
    let split = NameVariants::generate("Maria Jose Garcia Lopez");
    assert!(split.full_names.contains(&"maria garcia lopez".to_string()));
    assert!(split.full_names.contains(&"maria jose garcia".to_string()));
    assert!(
        split
            .usernames
            .iter()
            .any(|u| u == "mjgarcia" || u == "mjlopez"),
        "{:?}",
        split.usernames
    );
}

#[test]
fn emails_are_bounded_well_formed_and_unique() {
    let pattern = Regex::new(r"^[a-z0-9._-]+@[a-z0-9.-]+$").expect("pattern compiles");
    let hint_sets: [Vec<String>; 3] = [
        vec![],
        vec!["acme.io".into()],
        vec!["acme.io".into(), "@Uni.Edu".into()],
    ];
    for hints in &hint_sets {
        for name in NAMES {
            let emails = generate_emails(name, hints, 2);
            assert!(emails.len() <= 2 * (hints.len() + 5), "{name:?}");
            assert!(emails.iter().all(|e| pattern.is_match(e)), "{emails:?}");
            let unique: HashSet<_> = emails.iter().collect();
            assert_eq!(unique.len(), emails.len());
        }
    }
}

#[test]
fn empty_input_propagates_as_empty_lists() {
    assert!(generate_name_variants("").is_empty());
    assert!(generate_emails("", &[], 6).is_empty());
    let from_json = normalize_value(&serde_json::Value::Null);
    assert!(generate_name_variants(&from_json).is_empty());
}
