//! Compactor behavior against a small tRNA-like drawing
//!
//! This tests:
//! - Wildcard vs. located selectors
//! - Qualified denominators (per junction shape, per host)
//! - Silent skipping of elements with no category
//! - Repeated elements counting once
//! - Feeding selectors into a theme

use rnartist_script::{Category, Host, JunctionTopology, Location, RnArtist, Scope, Selector};
use rnartist_selection::{compact, DrawingModel, ElementKind, Structure};

struct Drawing {
    structure: Structure,
    helices: Vec<usize>,
    apical_loops: Vec<usize>,
    apical_residues: Vec<usize>,
    apical_bonds: Vec<usize>,
    helix_residues: Vec<usize>,
    multiloop: usize,
    tertiary: usize,
    pknot: usize,
}

fn junction(topology: JunctionTopology) -> ElementKind {
    ElementKind::Junction { topology }
}

/// Five helices, four hairpin loops and one 4-way junction
fn drawing() -> Drawing {
    let mut structure = Structure::new();
    let mut helices = Vec::new();
    let mut apical_loops = Vec::new();
    let mut apical_residues = Vec::new();
    let mut apical_bonds = Vec::new();
    let mut helix_residues = Vec::new();

    for i in 0..5u32 {
        let start = i * 20 + 1;
        let strands = vec![start, start + 1, start + 10, start + 11];
        let helix = structure.add(ElementKind::Helix, None, strands);
        let pair_positions = vec![start, start + 11];
        let pair = structure.add(ElementKind::SecondaryInteraction, Some(helix), pair_positions);
        structure.add(ElementKind::InteractionSymbol, Some(pair), vec![start, start + 11]);
        helix_residues.push(structure.add(ElementKind::Residue, Some(pair), vec![start]));
        helix_residues.push(structure.add(ElementKind::Residue, Some(pair), vec![start + 11]));
        helices.push(helix);

        if i < 4 {
            let apical_loop = structure.add(
                junction(JunctionTopology::ApicalLoop),
                None,
                (start + 2..=start + 9).collect(),
            );
            apical_loops.push(apical_loop);
            let residue = structure.add(ElementKind::Residue, Some(apical_loop), vec![start + 5]);
            structure.add(ElementKind::ResidueLetter, Some(residue), vec![start + 5]);
            apical_residues.push(residue);
            apical_bonds.push(structure.add(
                ElementKind::PhosphodiesterBond,
                Some(apical_loop),
                vec![start + 5, start + 6],
            ));
        }
    }

    let multiloop = structure.add(junction(JunctionTopology::FourWay), None, vec![100, 101]);
    structure.add(ElementKind::Residue, Some(multiloop), vec![100]);
    structure.add(ElementKind::PhosphodiesterBond, None, vec![101, 102]);
    let tertiary = structure.add(ElementKind::TertiaryInteraction, None, vec![3, 43]);
    let pknot = structure.add(ElementKind::Pknot, None, vec![4, 44]);

    Drawing {
        structure,
        helices,
        apical_loops,
        apical_residues,
        apical_bonds,
        helix_residues,
        multiloop,
        tertiary,
        pknot,
    }
}

#[test]
fn test_all_apical_loops_selected_gives_wildcard() {
    let d = drawing();
    assert_eq!(d.structure.junction_count(Some(JunctionTopology::ApicalLoop)), 4);

    let selectors = compact(d.structure.select(&d.apical_loops), &d.structure);
    assert_eq!(
        selectors,
        vec![Selector::everywhere(Category::Junction(JunctionTopology::ApicalLoop))]
    );
}

#[test]
fn test_partial_helices_give_union_location() {
    let d = drawing();
    let picked = [d.helices[0], d.helices[2]];

    let selectors = compact(d.structure.select(&picked), &d.structure);
    assert_eq!(selectors.len(), 1);
    assert_eq!(selectors[0].category, Category::Helix);

    let location = selectors[0].scope.location().unwrap();
    let positions: Vec<u32> = location.positions().collect();
    assert_eq!(positions, vec![1, 2, 11, 12, 41, 42, 51, 52]);
    assert_eq!(location, &Location::from_ranges([(1, 2), (11, 12), (41, 42), (51, 52)]));
}

#[test]
fn test_repeated_loop_does_not_complete_the_category() {
    let d = drawing();
    let loops = &d.apical_loops;
    let picked = [loops[0], loops[1], loops[2], loops[0]];

    let selectors = compact(d.structure.select(&picked), &d.structure);
    assert_eq!(
        selectors,
        vec![Selector::at(
            Category::Junction(JunctionTopology::ApicalLoop),
            Location::from_ranges([(3, 10), (23, 30), (43, 50)]),
        )]
    );
}

#[test]
fn test_every_helix_selected_is_wildcard() {
    let d = drawing();
    let selectors = compact(d.structure.select(&d.helices), &d.structure);
    assert_eq!(selectors, vec![Selector::everywhere(Category::Helix)]);
}

#[test]
fn test_denominator_matches_qualifier() {
    let d = drawing();
    // every residue of the apical loops, but far from every residue
    let selectors = compact(d.structure.select(&d.apical_residues), &d.structure);
    assert_eq!(
        selectors,
        vec![Selector::everywhere(Category::Residue(Some(Host::Junction(
            JunctionTopology::ApicalLoop
        ))))]
    );

    let selectors = compact(d.structure.select(&d.apical_bonds[..3]), &d.structure);
    assert_eq!(
        selectors[0].category,
        Category::PhosphodiesterBond(Some(Host::Junction(JunctionTopology::ApicalLoop)))
    );
    assert!(!selectors[0].scope.is_everywhere());
}

#[test]
fn test_residues_grouped_by_host_in_first_seen_order() {
    let d = drawing();
    let picked = [
        d.helix_residues[0],
        d.apical_residues[0],
        d.helix_residues[1],
        d.multiloop,
    ];

    let selectors = compact(d.structure.select(&picked), &d.structure);
    let tags: Vec<String> = selectors.iter().map(|s| s.category.to_string()).collect();
    assert_eq!(tags, vec!["N@helix", "N@apical_loop", "4_way"]);

    assert_eq!(selectors[0].scope, Scope::At(Location::from_ranges([(1, 1), (12, 12)])));
    assert_eq!(selectors[1].scope, Scope::At(Location::from_ranges([(6, 6)])));
    // the only 4-way junction
    assert_eq!(selectors[2].scope, Scope::Everywhere);
}

#[test]
fn test_elements_without_category_are_dropped_silently() {
    let d = drawing();
    let selectors = compact(d.structure.select(&[d.tertiary, d.pknot]), &d.structure);
    assert!(selectors.is_empty());

    let selectors = compact(
        d.structure.select(&[d.pknot, d.helices[1], d.tertiary]),
        &d.structure,
    );
    assert_eq!(selectors.len(), 1);
    assert_eq!(selectors[0].category, Category::Helix);
}

#[test]
fn test_wildcard_survives_into_theme() {
    let d = drawing();
    let mut picked = d.apical_loops.clone();
    picked.push(d.helices[4]);

    let selectors = compact(d.structure.select(&picked), &d.structure);
    let mut script = RnArtist::new();
    script.theme_mut().color_selectors(&selectors, &"#ff0000").unwrap();

    let text = script.dump();
    assert!(text.contains("type = \"apical_loop\""));
    assert!(text.contains("type = \"helix\""));
    // only the partial helix selection carries a location
    assert_eq!(text.matches("location {").count(), 1);
    assert!(text.contains("81 to 82"));
}
