//! Integration tests for specificity comparison.

use kestrel_css::{SelectorError, Specificity, SpecificityInput, calculate, compare};

#[test]
fn test_compare_specificities() {
    assert_eq!(compare(Specificity(0, 0, 1), Specificity(1, 0, 0)), Ok(-1));
    assert_eq!(compare(Specificity(0, 0, 1), Specificity(0, 0, 1)), Ok(0));
    assert_eq!(compare(Specificity(1, 1, 0), Specificity(1, 0, 0)), Ok(1));
}

#[test]
fn test_compare_arrays() {
    let low: [u32; 3] = [0, 0, 1];
    let high: [u32; 3] = [1, 0, 0];
    assert_eq!(compare(low, high), Ok(-1));
    assert_eq!(compare(high, low), Ok(1));
}

#[test]
fn test_compare_strings() {
    assert_eq!(compare("testElement", ".testClassName"), Ok(-1));
    assert_eq!(compare(".testClassName", ".testClassName"), Ok(0));
    assert_eq!(compare("#testId", ".testClassName"), Ok(1));
}

#[test]
fn test_compare_mixed_forms() {
    assert_eq!(compare("testElement", Specificity(0, 1, 0)), Ok(-1));
    assert_eq!(compare(Specificity(0, 1, 0), ".testClassName"), Ok(0));
    assert_eq!(compare("#testId", Specificity(0, 0, 1)), Ok(1));

    let owned = String::from("div.item");
    assert_eq!(compare(&owned, Specificity(0, 1, 1)), Ok(0));
}

#[test]
fn test_compare_is_lexicographic() {
    // one ID outweighs any number of classes and types
    assert_eq!(compare(Specificity(1, 0, 0), Specificity(0, 99, 99)), Ok(1));
    assert_eq!(compare(Specificity(0, 1, 0), Specificity(0, 0, 99)), Ok(1));
    assert_eq!(
        compare("#a", ".a.b.c.d.e.f.g.h.i.j.k.l div span p"),
        Ok(1)
    );
}

#[test]
fn test_compare_total_order() {
    let values = [
        Specificity(0, 0, 0),
        Specificity(0, 0, 2),
        Specificity(0, 1, 0),
        Specificity(0, 1, 1),
        Specificity(1, 0, 0),
        Specificity(1, 0, 3),
        Specificity(2, 0, 0),
    ];
    let cmp = |a: Specificity, b: Specificity| compare(a, b).unwrap();

    for &x in &values {
        assert_eq!(cmp(x, x), 0, "reflexive at {x}");
        for &y in &values {
            assert_eq!(cmp(x, y), -cmp(y, x), "antisymmetric at {x} / {y}");
            for &z in &values {
                if cmp(x, y) < 0 && cmp(y, z) < 0 {
                    assert_eq!(cmp(x, z), -1, "transitive at {x} < {y} < {z}");
                }
            }
        }
    }
}

#[test]
fn test_string_and_triple_forms_agree() {
    let selectors = [
        "a",
        ".b",
        "#c",
        "ul li",
        ":is(#a, .b)",
        ":where(#x) .y",
        "p::first-line",
        ":nth-child(odd of .z)",
    ];
    for a in selectors {
        for b in selectors {
            let triples = compare(calculate(a).unwrap().value(), calculate(b).unwrap().value());
            assert_eq!(compare(a, b), triples, "{a} vs {b}");
        }
    }
}

#[test]
fn test_compare_propagates_parse_errors() {
    assert_eq!(compare("#a", ""), Err(SelectorError::Empty));
    assert!(compare("a >", Specificity::ZERO).is_err());
}

#[test]
fn test_input_resolves() {
    assert_eq!(
        SpecificityInput::from("#a .b").resolve(),
        Ok(Specificity(1, 1, 0))
    );
    assert_eq!(
        SpecificityInput::from([0_u32, 2, 1]).resolve(),
        Ok(Specificity(0, 2, 1))
    );
}

#[test]
fn test_specificity_parses_from_text() {
    let parsed: Specificity = "1,2,3".parse().unwrap();
    assert_eq!(parsed, Specificity(1, 2, 3));
    assert_eq!(compare(parsed, "#a.b.c d e f"), Ok(0));
    assert!("1,2".parse::<Specificity>().is_err());
}
