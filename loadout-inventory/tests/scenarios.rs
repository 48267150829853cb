use loadout_collections::sort::quadratic_comparisons;
use loadout_inventory::timing::measure;
use loadout_inventory::tower::{bubble_sort_by_name, search_binary};
use loadout_inventory::{
    Backpack, Capacities, Component, InventoryError, Item, Satchel, SortStrategy, Tower,
};

fn ceil_log2_plus_one(n: usize) -> u64 {
    // ceil(log2(n + 1))
    (usize::BITS - n.leading_zeros()) as u64
}

fn reversed_tower(n: usize) -> Tower {
    let caps = Capacities {
        tower: n.max(1),
        ..Capacities::default()
    };
    let mut tower = Tower::with_capacities(&caps);
    for i in (0..n).rev() {
        tower
            .push(Component::new(format!("c{i:02}"), format!("k{i:02}"), i as i32 + 1))
            .unwrap();
    }
    tower
}

// =============================================================================
// Backpack
// =============================================================================

#[test]
fn backpack_medkit_rifle() {
    let mut pack = Backpack::new();
    pack.insert(Item::new("Medkit", "cura", 3)).unwrap();
    pack.insert(Item::new("Rifle", "arma", 1)).unwrap();

    let names: Vec<_> = pack.list().iter().map(Item::name).collect();
    assert_eq!(names, ["Medkit", "Rifle"]);

    let removed = pack.remove_by_name("Medkit").unwrap();
    assert_eq!(removed, Item::new("Medkit", "cura", 3));
    assert_eq!(pack.list(), [Item::new("Rifle", "arma", 1)]);
}

#[test]
fn backpack_eleventh_insert_is_full() {
    let mut pack = Backpack::new();
    for i in 0..10 {
        pack.insert(Item::new(format!("item{i}"), "util", i)).unwrap();
    }

    let err = pack.insert(Item::new("Granada", "arma", 1)).unwrap_err();
    assert!(matches!(err, InventoryError::Full { capacity: 10, .. }));
    assert_eq!(pack.len(), 10);
    assert!(pack.search_linear("Granada").index.is_none());
}

#[test]
fn backpack_binary_search_within_log_bound() {
    for n in 1..=10 {
        let mut pack = Backpack::new();
        for i in (0..n).rev() {
            pack.insert(Item::new(format!("i{i:02}"), "util", 0)).unwrap();
        }
        pack.sort_by_name();

        let bound = ceil_log2_plus_one(n);
        for (i, item) in pack.list().iter().enumerate() {
            let probe = pack.search_binary(item.name());
            assert_eq!(probe.index, Some(i), "n={n}");
            assert!(probe.comparisons <= bound, "n={n} i={i} {probe:?}");
        }
        let miss = pack.search_binary("zz");
        assert!(miss.index.is_none());
        assert!(miss.comparisons <= bound);
    }
}

#[test]
fn backpack_sort_twice_same_order_and_count() {
    let mut pack = Backpack::new();
    for name in ["Rifle", "Medkit", "Bala", "Corda", "Faca"] {
        pack.insert(Item::new(name, "util", 1)).unwrap();
    }

    let first = pack.sort_by_name();
    let after_first = pack.list().to_vec();
    let second = pack.sort_by_name();

    assert_eq!(first, quadratic_comparisons(5));
    assert_eq!(first, second);
    assert_eq!(pack.list(), after_first.as_slice());
}

#[test]
fn long_and_multibyte_names_round_trip() {
    let names = ["Kit de primeiros socorros avancado", "Poção de cura ã é ç"];

    let mut pack = Backpack::new();
    let mut satchel = Satchel::new();
    for name in names {
        pack.insert(Item::new(name, "cura", 1)).unwrap();
        satchel.insert_tail(Item::new(name, "cura", 1)).unwrap();
    }

    assert_eq!(satchel.search_linear(names[0]), pack.search_linear(names[0]));
    assert_eq!(satchel.search_linear(names[0]).index, Some(0));

    for name in names {
        assert_eq!(pack.remove_by_name(name).unwrap().name(), name);
        assert_eq!(satchel.remove_by_name(name).unwrap().name(), name);
    }
    assert!(pack.is_empty());
    assert!(satchel.is_empty());
}

#[test]
fn oversized_name_is_reported_not_cut() {
    let err = Item::try_new("Kit de primeiros socorros avancado", "cura", 1).unwrap_err();
    assert_eq!(
        err,
        InventoryError::FieldTooLong {
            field: "name",
            max: 29,
            len: 34
        }
    );
}

// =============================================================================
// Satchel
// =============================================================================

#[test]
fn satchel_remove_middle_of_three() {
    let mut satchel = Satchel::new();
    for name in ["Corda", "Faca", "Lanterna"] {
        satchel.insert_tail(Item::new(name, "util", 1)).unwrap();
    }

    satchel.remove_by_name("Faca").unwrap();

    assert_eq!(satchel.len(), 2);
    assert_eq!(satchel.front().map(Item::name), Some("Corda"));
    assert_eq!(satchel.back().map(Item::name), Some("Lanterna"));
    let names: Vec<_> = satchel.list().into_iter().map(|i| i.name().to_owned()).collect();
    assert_eq!(names, ["Corda", "Lanterna"]);
}

#[test]
fn satchel_and_backpack_count_linear_search_alike() {
    let mut pack = Backpack::new();
    let mut satchel = Satchel::new();
    for name in ["a", "b", "c", "d"] {
        pack.insert(Item::new(name, "util", 1)).unwrap();
        satchel.insert_tail(Item::new(name, "util", 1)).unwrap();
    }

    for name in ["a", "c", "d", "x"] {
        assert_eq!(pack.search_linear(name), satchel.search_linear(name), "{name}");
    }
}

// =============================================================================
// Tower
// =============================================================================

#[test]
fn tower_motor_escudo_selection() {
    let mut tower = Tower::new();
    tower.push(Component::new("Motor", "propulsao", 5)).unwrap();
    tower.push(Component::new("Escudo", "suporte", 2)).unwrap();

    let sorted = tower.sorted(SortStrategy::SelectionByPriority);
    let names: Vec<_> = sorted.components.iter().map(Component::name).collect();
    assert_eq!(names, ["Escudo", "Motor"]);
    assert_eq!(sorted.comparisons, 1);
}

#[test]
fn tower_reverse_input_costs() {
    for n in [0, 1, 2, 5, 20] {
        let tower = reversed_tower(n);
        let expected = quadratic_comparisons(n);

        assert_eq!(tower.sorted_by_name().comparisons, expected, "bubble n={n}");
        assert_eq!(tower.sorted_by_priority().comparisons, expected, "selection n={n}");
        // Every element shifts all the way to index 0.
        assert_eq!(tower.sorted_by_kind().comparisons, expected, "insertion n={n}");
    }
}

#[test]
fn tower_sorts_are_permutations() {
    let tower = reversed_tower(20);
    let mut original = tower.list().to_vec();
    original.sort_by(|a, b| a.name().cmp(b.name()));

    for strategy in SortStrategy::ALL {
        let mut out = tower.sorted(strategy).components;
        assert_eq!(out.len(), 20);
        out.sort_by(|a, b| a.name().cmp(b.name()));
        assert_eq!(out, original, "{strategy}");
    }
}

#[test]
fn tower_locate_sorts_then_searches() {
    let tower = reversed_tower(20);

    let found = tower.locate("c07");
    assert_eq!(found.component.as_ref().map(Component::priority), Some(8));
    assert_eq!(found.sort_comparisons, quadratic_comparisons(20));
    assert!(found.probe.comparisons <= ceil_log2_plus_one(20));

    let sorted = tower.sorted_by_name().components;
    assert_eq!(search_binary(&sorted, "c07"), found.probe);

    assert!(tower.locate("c99").component.is_none());
}

#[test]
fn timed_sort_on_copy_matches_count() {
    let tower = reversed_tower(20);
    let mut copy = tower.list().to_vec();
    let timed = measure(&mut copy, bubble_sort_by_name);

    assert_eq!(timed.comparisons, quadratic_comparisons(20));
    assert_eq!(copy[0].name(), "c00");
    assert!(timed.seconds() >= 0.0);
    // The tower itself is untouched.
    assert_eq!(tower.list()[0].name(), "c19");
}

#[test]
fn capacities_from_toml_drive_store_sizes() {
    let caps = Capacities::from_toml_str("backpack = 2\ntower = 3").unwrap();
    let mut pack = Backpack::with_capacities(&caps);
    let tower = Tower::with_capacities(&caps);

    assert_eq!(pack.capacity(), 2);
    assert_eq!(tower.capacity(), 3);

    pack.insert(Item::new("a", "k", 1)).unwrap();
    pack.insert(Item::new("b", "k", 1)).unwrap();
    assert!(pack.insert(Item::new("c", "k", 1)).is_err());
}
