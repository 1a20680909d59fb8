//! Behavioural tests for the generated registry and resolver on a typical
//! host: tagged and untagged fields, round-trip access, and not-found.

use anyhow::{Context, Result, ensure};
use keyed::Keyed;
use rstest::rstest;

#[derive(Debug, Keyed)]
struct Person {
    #[keyed]
    name: String,
    age: u32,
}

fn john() -> Person {
    Person {
        name: "John".to_owned(),
        age: 30,
    }
}

#[rstest]
fn registry_exposes_exactly_the_tagged_fields() {
    assert_eq!(Person::keys(), &[PersonKeys::NAME][..]);
    assert_eq!(PersonKeys::NAME.as_str(), "name");
}

#[rstest]
fn resolver_and_registry_agree_on_the_key_set() -> Result<()> {
    for key in Person::keys() {
        ensure!(
            Person::resolve(key.as_str()).is_some(),
            "registry key '{key}' should resolve"
        );
    }
    Ok(())
}

#[rstest]
#[case::untagged_field("age")]
#[case::unknown_key("missing")]
#[case::empty_key("")]
fn unexposed_keys_report_not_found(#[case] key: &str) {
    assert!(Person::resolve(key).is_none());
}

#[rstest]
fn resolved_accessor_reads_the_registered_field() -> Result<()> {
    let person = john();
    let accessor = Person::resolve("name").context("'name' should resolve")?;
    ensure!(
        accessor.key() == &PersonKeys::NAME,
        "accessor should carry the registry key"
    );
    let value: &String = accessor.get(&person)?;
    ensure!(value == "John", "accessor should read the field's value");
    Ok(())
}

#[rstest]
fn resolved_accessor_writes_the_registered_field() -> Result<()> {
    let mut person = john();
    let accessor = Person::resolve("name").context("'name' should resolve")?;
    accessor.set(&mut person, "Joan".to_owned())?;
    ensure!(person.age == 30, "writes should not touch other fields");
    ensure!(
        person.name == "Joan",
        "a write through the accessor should land in the field"
    );
    Ok(())
}

#[rstest]
fn keys_keep_declaration_order() {
    #[derive(Keyed)]
    struct Unsorted {
        #[keyed]
        b: u32,
        #[keyed]
        a: u32,
    }

    let keys: Vec<&str> = Unsorted::keys().iter().map(keyed::FieldKey::as_str).collect();
    assert_eq!(keys, ["b", "a"]);
    assert_eq!(UnsortedKeys::B.as_str(), "b");
    assert_eq!(UnsortedKeys::A.as_str(), "a");
}
