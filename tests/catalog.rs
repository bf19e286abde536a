use kerbol_system::catalog::{Catalog, catalog};

const BODY_COUNT: usize = 25;

#[test]
fn version_matches_the_package() {
    assert_eq!(kerbol_system::version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn registry_holds_every_body_once() {
    let catalog = catalog();
    assert_eq!(catalog.len(), BODY_COUNT, "all catalog bodies should be registered");
    assert!(!catalog.is_empty());

    for name in [
        "Kerbol", "Ablate", "Moho", "Eve", "Gilly", "Kerbin", "Mun", "Minimus", "Duna", "Ike",
        "Dres", "Jool", "Laythe", "Vall", "Tylo", "Bop", "Pol", "Eeloo", "Ascension",
        "Inaccessable", "Sentar", "Skelton", "Erin", "Ringle", "Thud",
    ] {
        let body = catalog.get(name).unwrap_or_else(|| panic!("{name} missing from catalog"));
        assert_eq!(body.name.as_ref(), name);
    }
}

#[test]
fn named_fields_and_lookup_share_the_same_bodies() {
    let catalog = catalog();
    let by_name = catalog.get("Kerbin").expect("Kerbin present");
    assert!(
        std::sync::Arc::ptr_eq(by_name, &catalog.kerbin),
        "named field and lookup should alias one allocation"
    );
}

#[test]
fn tree_is_rooted_at_kerbol() {
    let catalog = catalog();
    assert!(catalog.root().is_star());
    assert!(catalog.root().orbit.is_none());
    assert!(catalog.root().sphere_of_influence_m.is_none());

    let stars = catalog.bodies().filter(|body| body.is_star()).count();
    assert_eq!(stars, 1, "exactly one body should be the root star");

    // Every parent link resolves to a registered body, and walking up
    // always terminates at the root.
    for body in catalog.bodies() {
        let mut current = body.clone();
        let mut hops = 0;
        while let Some(parent) = current.parent() {
            assert!(
                catalog.get(&parent.name).is_some(),
                "parent {} of {} should be registered",
                parent.name,
                body.name
            );
            current = parent.clone();
            hops += 1;
            assert!(hops <= BODY_COUNT, "parent chain of {} should not cycle", body.name);
        }
        assert!(current.is_star(), "parent chain of {} should end at the star", body.name);
    }
}

#[test]
fn children_reports_direct_satellites() {
    let catalog = catalog();

    let kerbin_moons: Vec<_> =
        catalog.children("Kerbin").map(|body| body.name.as_ref().to_owned()).collect();
    assert_eq!(kerbin_moons, ["Minimus", "Mun"], "lexicographic order expected");

    let jool_moons: Vec<_> =
        catalog.children("Jool").map(|body| body.name.as_ref().to_owned()).collect();
    assert_eq!(jool_moons, ["Bop", "Laythe", "Pol", "Tylo", "Vall"]);

    assert_eq!(catalog.children("Mun").count(), 0, "Mun has no satellites");
    assert_eq!(catalog.children("Kerbol").count(), 11, "Kerbol has eleven direct satellites");
}

#[test]
fn literal_inputs_survive_construction_exactly() {
    let catalog = catalog();

    let kerbin = &catalog.kerbin;
    assert_eq!(kerbin.mass_kg, 5.2915793e22);
    assert_eq!(kerbin.radius_m, 600_000.0);
    assert_eq!(kerbin.sidereal_rotation_s, 21_600.0);
    let kerbin_orbit = kerbin.orbit.as_ref().expect("Kerbin orbits Kerbol");
    assert_eq!(kerbin_orbit.semi_major_axis_m, 13_599_840_256.0);
    assert_eq!(kerbin_orbit.eccentricity, 0.0);
    assert_eq!(kerbin_orbit.mean_anomaly_at_epoch_rad, 3.14);

    let pol = &catalog.pol;
    assert_eq!(pol.mass_kg, 1.0813636e19);
    let pol_orbit = pol.orbit.as_ref().expect("Pol orbits Jool");
    assert_eq!(pol_orbit.reference_body.name.as_ref(), "Jool");
    assert_eq!(pol_orbit.eccentricity, 0.17085);
    assert_eq!(pol_orbit.inclination_deg, 4.25);
    assert_eq!(pol_orbit.longitude_of_ascending_node_deg, 2.0);
    assert_eq!(pol_orbit.argument_of_periapsis_deg, 15.0);

    let thud = &catalog.thud;
    assert_eq!(thud.mass_kg, 1.66155588852263e23);
    assert_eq!(thud.sidereal_rotation_s, 1_751_403.30360751);
    assert_eq!(thud.orbit.as_ref().expect("Thud orbits Sentar").reference_body.name.as_ref(), "Sentar");
}

#[test]
fn rebuilding_the_catalog_is_bit_identical() {
    let first = Catalog::build().expect("catalog builds");
    let second = Catalog::build().expect("catalog builds");

    for body in first.bodies() {
        let twin = second.get(&body.name).expect("same body set");
        assert_eq!(
            body.gravitational_parameter_m3_s2.to_bits(),
            twin.gravitational_parameter_m3_s2.to_bits(),
            "μ of {} should be deterministic",
            body.name
        );
        match (body.sphere_of_influence_m, twin.sphere_of_influence_m) {
            (Some(a), Some(b)) => assert_eq!(
                a.to_bits(),
                b.to_bits(),
                "SOI of {} should be deterministic",
                body.name
            ),
            (None, None) => {}
            _ => panic!("SOI presence of {} should be deterministic", body.name),
        }
    }
}
