use petowner_core::{Owner, Pet, PetError, PetId, PetRegistry, PetType};

fn ids(pets: &[&Pet]) -> Vec<PetId> {
    pets.iter().map(|pet| pet.id()).collect()
}

#[test]
fn alice_lists_pets_in_insertion_order_and_sorted_by_name() {
    let mut registry = PetRegistry::new();
    let alice = Owner::new("Alice");
    let rex = registry.create_pet("Rex", "dog", None).unwrap();
    let milo = registry.create_pet("Milo", "cat", None).unwrap();

    alice.add_pet(&mut registry, rex).unwrap();
    alice.add_pet(&mut registry, milo).unwrap();

    assert_eq!(ids(&alice.pets(&registry)), vec![rex, milo]);
    assert_eq!(ids(&alice.get_sorted_pets(&registry)), vec![milo, rex]);
}

#[test]
fn every_supported_type_constructs_and_links_only_when_owned() {
    let mut registry = PetRegistry::new();
    let owner = Owner::new("Sam");

    for pet_type in PetType::ALL {
        let owned = registry
            .create_pet("owned", pet_type.as_str(), Some(&owner))
            .unwrap();
        let stray = registry.create_pet("stray", pet_type.as_str(), None).unwrap();

        let listed = ids(&owner.pets(&registry));
        assert!(listed.contains(&owned));
        assert!(!listed.contains(&stray));
        assert_eq!(registry.get(owned).unwrap().pet_type(), pet_type);
    }

    assert_eq!(registry.len(), PetType::ALL.len() * 2);
    assert_eq!(owner.pets(&registry).len(), PetType::ALL.len());
}

#[test]
fn invalid_type_fails_and_registers_nothing() {
    let mut registry = PetRegistry::new();

    for bad in ["fish", "Dog", "", "dogs", " cat"] {
        let err = registry.create_pet("X", bad, None).unwrap_err();
        assert_eq!(err, PetError::InvalidPetType(bad.to_string()));
    }

    assert!(registry.is_empty());
}

#[test]
fn invalid_type_message_mentions_value_and_all_types() {
    let mut registry = PetRegistry::new();
    let message = registry.create_pet("X", "fish", None).unwrap_err().to_string();

    assert!(message.contains("fish"), "unexpected message: {message}");
    for valid in ["dog", "cat", "rodent", "bird", "reptile", "exotic"] {
        assert!(message.contains(valid), "missing `{valid}` in: {message}");
    }
}

#[test]
fn add_pet_is_idempotent() {
    let mut registry = PetRegistry::new();
    let alice = Owner::new("Alice");
    let rex = registry.create_pet("Rex", "dog", None).unwrap();

    alice.add_pet(&mut registry, rex).unwrap();
    alice.add_pet(&mut registry, rex).unwrap();

    assert_eq!(registry.get(rex).unwrap().owner(), Some(alice.id()));
    assert_eq!(ids(&alice.pets(&registry)), vec![rex]);
}

#[test]
fn reassignment_moves_pet_between_owners() {
    let mut registry = PetRegistry::new();
    let alice = Owner::new("Alice");
    let bob = Owner::new("Bob");
    let rex = registry.create_pet("Rex", "dog", Some(&alice)).unwrap();

    assert_eq!(ids(&alice.pets(&registry)), vec![rex]);

    bob.add_pet(&mut registry, rex).unwrap();

    assert!(alice.pets(&registry).is_empty());
    assert_eq!(ids(&bob.pets(&registry)), vec![rex]);
    assert_eq!(registry.get(rex).unwrap().owner(), Some(bob.id()));
}

#[test]
fn add_pet_rejects_handle_that_is_not_a_pet() {
    let mut registry = PetRegistry::new();
    let alice = Owner::new("Alice");
    let rex = registry.create_pet("Rex", "dog", None).unwrap();

    let fabricated = PetId::new();
    let err = alice.add_pet(&mut registry, fabricated).unwrap_err();
    assert_eq!(err, PetError::NotAPet(fabricated));

    let mut other_registry = PetRegistry::new();
    let foreign = other_registry.create_pet("Milo", "cat", None).unwrap();
    let err = alice.add_pet(&mut registry, foreign).unwrap_err();
    assert!(matches!(err, PetError::NotAPet(id) if id == foreign));

    assert!(alice.pets(&registry).is_empty());
    assert_eq!(registry.get(rex).unwrap().owner(), None);
    assert_eq!(other_registry.get(foreign).unwrap().owner(), None);
}

#[test]
fn owners_with_same_name_are_distinct() {
    let mut registry = PetRegistry::new();
    let first = Owner::new("Alice");
    let second = Owner::new("Alice");
    let rex = registry.create_pet("Rex", "dog", Some(&first)).unwrap();
    let tweety = registry.create_pet("Tweety", "bird", Some(&second)).unwrap();

    assert_eq!(ids(&first.pets(&registry)), vec![rex]);
    assert_eq!(ids(&second.pets(&registry)), vec![tweety]);
}

#[test]
fn owner_without_pets_gets_empty_results() {
    let mut registry = PetRegistry::new();
    registry.create_pet("Rex", "dog", None).unwrap();
    let nobody = Owner::new("Nobody");

    assert!(nobody.pets(&registry).is_empty());
    assert!(nobody.get_sorted_pets(&registry).is_empty());
}

#[test]
fn sorted_pets_is_stable_for_equal_names() {
    let mut registry = PetRegistry::new();
    let owner = Owner::new("Kim");
    let bella_one = registry.create_pet("Bella", "dog", Some(&owner)).unwrap();
    let zed = registry.create_pet("Zed", "reptile", Some(&owner)).unwrap();
    let bella_two = registry.create_pet("Bella", "cat", Some(&owner)).unwrap();
    let ace = registry.create_pet("Ace", "rodent", Some(&owner)).unwrap();
    let bella_three = registry.create_pet("Bella", "exotic", Some(&owner)).unwrap();

    let pets = owner.pets(&registry);
    assert_eq!(ids(&pets), vec![bella_one, zed, bella_two, ace, bella_three]);

    let sorted = owner.get_sorted_pets(&registry);
    assert_eq!(
        ids(&sorted),
        vec![ace, bella_one, bella_two, bella_three, zed]
    );

    // Sorting never reorders the registry or later pets() calls.
    assert_eq!(ids(&owner.pets(&registry)), ids(&pets));
}

#[test]
fn sorting_is_case_sensitive_code_point_order() {
    let mut registry = PetRegistry::new();
    let owner = Owner::new("Lee");
    let lower = registry.create_pet("alpha", "bird", Some(&owner)).unwrap();
    let upper = registry.create_pet("Beta", "bird", Some(&owner)).unwrap();

    assert_eq!(ids(&owner.get_sorted_pets(&registry)), vec![upper, lower]);
}
