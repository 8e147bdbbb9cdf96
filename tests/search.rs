// End-to-end searches over the public API.

use resistor_toolkit::{Resistor, Toolkit, E3};

#[test]
fn single_value_inventory_two_levels() {
    let mut kit = Toolkit::new(&[10.0]).unwrap();
    kit.brute_force(2, 0.0);

    // 10+10 and 10|10
    let bucket = kit.bucket(2).unwrap();
    let ohms: Vec<f64> = bucket.iter().map(|r| r.ohms()).collect();
    assert_eq!(ohms, vec![5.0, 20.0]);

    let got = kit.closest(15.0, 1, 1.0, 2).unwrap();
    assert_eq!(got[0].ohms(), 20.0);
}

#[test]
fn third_level_composes_second_with_primitives() {
    let mut kit = Toolkit::new(&[10.0]).unwrap();
    kit.brute_force(3, 0.0);

    let ohms: Vec<f64> = kit.bucket(3).unwrap().iter().map(|r| r.ohms()).collect();
    let want = [10.0 / 3.0, 20.0 / 3.0, 15.0, 30.0];
    assert_eq!(ohms.len(), want.len());
    for (g, w) in ohms.iter().zip(want.iter()) {
        assert!((g - w).abs() < 1e-12, "got {} want {}", g, w);
    }

    // every bucket-3 entry really has three components
    assert!(kit
        .bucket(3)
        .unwrap()
        .iter()
        .all(|r| r.component_count() == 3));
}

#[test]
fn results_carry_usable_ancestry() {
    let mut kit = Toolkit::new(&[100.0, 200.0]).unwrap();
    kit.brute_force(2, 0.0);

    let best = kit.closest(66.0, 1, 0.1, 2).unwrap();
    let r = &best[0];
    assert!((r.ohms() - 200.0 / 3.0).abs() < 1e-9);
    let ancestry = r.ancestry().unwrap();
    assert_eq!(ancestry.operands.len(), 2);
    assert_eq!(r.algebraic(), "100Ω | 200Ω");
}

#[test]
fn pruning_shrinks_the_reachable_set() {
    let inventory = [100.0, 220.0, 470.0, 1000.0];

    let mut exact = Toolkit::new(&inventory).unwrap();
    exact.brute_force(3, 0.0);

    let mut pruned = Toolkit::new(&inventory).unwrap();
    pruned.brute_force(3, 0.05);

    assert!(pruned.size() < exact.size());

    // pruned sets keep the ordering invariant in every bucket
    for count in 1..=3 {
        if let Some(bucket) = pruned.bucket(count) {
            let ohms: Vec<f64> = bucket.iter().map(|r| r.ohms()).collect();
            assert!(ohms.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn standard_series_seed_a_toolkit() {
    let kit = Toolkit::from_series(&E3).unwrap();
    assert_eq!(kit.bucket(1).unwrap().len(), E3.len());

    // a lone 3.3K target sits between E3 values; nearest is 4.7K's
    // neighborhood, not an exact hit
    let got = kit.closest(3300.0, 1, 0.5, 1).unwrap();
    assert_eq!(got.len(), 1);
    assert!((got[0].ohms() - 2200.0).abs() < 1e-9 || (got[0].ohms() - 4700.0).abs() < 1e-9);
}

#[test]
fn gap_analysis_points_at_the_midpoint() {
    let kit = Toolkit::new(&[10.0, 100.0, 1000.0]).unwrap();
    let (below, mid, above) = kit.biggest_gap(1).unwrap();
    assert_eq!(
        (below.ohms(), mid.ohms(), above.ohms()),
        (100.0, 550.0, 1000.0)
    );
    assert!(mid.is_primitive());
}

#[test]
fn toolkit_membership_matches_composition() {
    let mut kit = Toolkit::new(&[100.0, 200.0]).unwrap();
    kit.brute_force(2, 0.0);

    let a = Resistor::new(100.0).unwrap();
    let b = Resistor::new(200.0).unwrap();
    assert!(kit.contains(&a.series(&b)));
    assert!(kit.contains(&a.parallel(&b)));
    assert!(!kit.contains(&a.series(&b).series(&a)));
}
