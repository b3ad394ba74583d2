//! Integration tests for the selector parser.

use kestrel_css::parser::{
    AnPlusB, AttributeMatcher, AttributeSelector, Combinator, ComponentKind, Node, ParseOptions,
    PseudoArgument, Selector, parse, parse_selector, parse_selector_list,
};
use kestrel_css::{SelectorError, Span};

fn kinds(selector: &Selector) -> Vec<&ComponentKind> {
    selector.components.iter().map(|c| &c.kind).collect()
}

fn pseudo_argument(text: &str) -> PseudoArgument {
    let selector = parse_selector(text, false).unwrap();
    match selector.components.into_iter().next().map(|c| c.kind) {
        Some(ComponentKind::PseudoClass {
            argument: Some(argument),
            ..
        }) => argument,
        other => panic!("expected a functional pseudo-class, got {other:?}"),
    }
}

#[test]
fn test_parse_compound_selector() {
    let selector = parse_selector("div#main.note", false).unwrap();
    assert_eq!(
        kinds(&selector),
        [
            &ComponentKind::Type {
                name: "div".to_string()
            },
            &ComponentKind::Id("main".to_string()),
            &ComponentKind::Class("note".to_string()),
        ]
    );
    assert_eq!(selector.loc, None);
}

#[test]
fn test_parse_combinators() {
    let selector = parse_selector("a b > c + d ~ e || f", false).unwrap();
    let combinators: Vec<_> = selector
        .components
        .iter()
        .filter_map(|c| match c.kind {
            ComponentKind::Combinator(combinator) => Some(combinator),
            _ => None,
        })
        .collect();
    assert_eq!(
        combinators,
        [
            Combinator::Descendant,
            Combinator::Child,
            Combinator::NextSibling,
            Combinator::SubsequentSibling,
            Combinator::Column,
        ]
    );
}

#[test]
fn test_whitespace_around_explicit_combinator_is_not_descendant() {
    let selector = parse_selector("  a  >  b  ", false).unwrap();
    assert_eq!(selector.components.len(), 3);
    assert!(matches!(
        selector.components[1].kind,
        ComponentKind::Combinator(Combinator::Child)
    ));
}

#[test]
fn test_parse_attribute_selectors() {
    let cases = [
        ("[href]", AttributeMatcher::Exists, None),
        ("[lang=en]", AttributeMatcher::Equals, Some("en")),
        ("[class~=a]", AttributeMatcher::Includes, Some("a")),
        ("[lang|=en]", AttributeMatcher::DashMatch, Some("en")),
        ("[href^='http']", AttributeMatcher::PrefixMatch, Some("http")),
        ("[href$=\".pdf\"]", AttributeMatcher::SuffixMatch, Some(".pdf")),
        ("[title*=hello]", AttributeMatcher::SubstringMatch, Some("hello")),
        ("[*|title]", AttributeMatcher::Exists, None),
    ];
    for (text, matcher, value) in cases {
        let selector = parse_selector(text, false).unwrap();
        match &selector.components[0].kind {
            ComponentKind::Attribute(attribute) => {
                assert_eq!(attribute.matcher, matcher, "{text}");
                assert_eq!(attribute.value.as_deref(), value, "{text}");
            }
            other => panic!("{text}: expected attribute, got {other:?}"),
        }
    }
}

#[test]
fn test_parse_attribute_flag_and_namespace() {
    let selector = parse_selector("[ svg|href = 'x' i ]", false).unwrap();
    assert_eq!(
        selector.components[0].kind,
        ComponentKind::Attribute(AttributeSelector {
            name: "svg|href".to_string(),
            matcher: AttributeMatcher::Equals,
            value: Some("x".to_string()),
            flag: Some("i".to_string()),
        })
    );
}

#[test]
fn test_parse_namespaced_types() {
    for (text, name) in [("svg|rect", "svg|rect"), ("*|*", "*|*"), ("|p", "|p"), ("*", "*")] {
        let selector = parse_selector(text, false).unwrap();
        assert_eq!(
            kinds(&selector),
            [&ComponentKind::Type {
                name: name.to_string()
            }],
            "{text}"
        );
    }
}

#[test]
fn test_parse_pseudo_class_and_element() {
    let selector = parse_selector("a:hover::before", false).unwrap();
    assert_eq!(
        kinds(&selector)[1..],
        [
            &ComponentKind::PseudoClass {
                name: "hover".to_string(),
                argument: None
            },
            &ComponentKind::PseudoElement {
                name: "before".to_string(),
                argument: None
            },
        ]
    );
}

#[test]
fn test_selector_list_argument_is_structured() {
    match pseudo_argument(":is(#a, .b c)") {
        PseudoArgument::SelectorList(list) => {
            assert_eq!(list.selectors.len(), 2);
            assert_eq!(list.selectors[1].components.len(), 3);
        }
        other => panic!("expected a selector list, got {other:?}"),
    }
    assert!(matches!(
        pseudo_argument(":WHERE(a)"),
        PseudoArgument::SelectorList(_)
    ));
}

#[test]
fn test_nth_argument() {
    match pseudo_argument(":nth-child(2n+1 of .a, #b)") {
        PseudoArgument::Nth(nth) => {
            assert_eq!(nth.formula, AnPlusB { step: 2, offset: 1 });
            assert_eq!(nth.selector.map(|s| s.selectors.len()), Some(2));
        }
        other => panic!("expected nth, got {other:?}"),
    }
    match pseudo_argument(":nth-of-type( even )") {
        PseudoArgument::Nth(nth) => {
            assert_eq!(nth.formula, AnPlusB { step: 2, offset: 0 });
            assert_eq!(nth.selector, None);
        }
        other => panic!("expected nth, got {other:?}"),
    }
}

#[test]
fn test_unknown_argument_is_raw() {
    for (text, raw) in [
        (":lang(en)", "en"),
        (":-webkit-any(#a, .b)", "#a, .b"),
        (":dir( rtl )", " rtl "),
        (":host-context(:is(a, (b)))", ":is(a, (b))"),
    ] {
        match pseudo_argument(text) {
            PseudoArgument::Raw(argument) => assert_eq!(argument.value, raw, "{text}"),
            other => panic!("{text}: expected raw, got {other:?}"),
        }
    }
}

#[test]
fn test_positions() {
    let text = "ul > li.item";
    let selector = parse_selector(text, true).unwrap();
    let spans: Vec<_> = selector.components.iter().map(|c| c.loc.unwrap()).collect();
    assert_eq!(
        spans,
        [
            Span::new(0, 2),
            Span::new(3, 4),
            Span::new(5, 7),
            Span::new(7, 12),
        ]
    );
    assert_eq!(selector.loc, Some(Span::new(0, 12)));
}

#[test]
fn test_parse_with_options() {
    match parse("a, b", ParseOptions::selector_list()) {
        Ok(Node::SelectorList(list)) => assert_eq!(list.selectors.len(), 2),
        other => panic!("expected a list, got {other:?}"),
    }
    assert!(matches!(
        parse("a", ParseOptions::default()),
        Ok(Node::Selector(_))
    ));
    assert_eq!(
        parse("a, b", ParseOptions::selector()),
        Err(SelectorError::ListInSelectorContext { offset: 1 })
    );
}

#[test]
fn test_parse_selector_list_errors() {
    assert_eq!(parse_selector_list("  ", false), Err(SelectorError::Empty));
    assert_eq!(
        parse_selector_list("a,", false),
        Err(SelectorError::UnexpectedEof {
            expected: "a selector"
        })
    );
    assert_eq!(
        parse_selector_list("a,,b", false),
        Err(SelectorError::UnexpectedToken {
            found: ",".to_string(),
            offset: 2
        })
    );
}

#[test]
fn test_dangling_combinators() {
    assert_eq!(
        parse_selector("> a", false),
        Err(SelectorError::DanglingCombinator { offset: 0 })
    );
    assert_eq!(
        parse_selector("a >", true),
        Err(SelectorError::DanglingCombinator { offset: 2 })
    );
    assert_eq!(
        parse_selector("a > > b", false),
        Err(SelectorError::DanglingCombinator { offset: 4 })
    );
    assert_eq!(
        parse_selector(":is(> a)", false),
        Err(SelectorError::DanglingCombinator { offset: 4 })
    );
}

#[test]
fn test_unclosed_blocks() {
    assert_eq!(
        parse_selector("[href", false),
        Err(SelectorError::UnclosedBlock { open: '[', offset: 0 })
    );
    assert_eq!(
        parse_selector("a:is(.b", false),
        Err(SelectorError::UnclosedBlock { open: '(', offset: 2 })
    );
    assert_eq!(
        parse_selector(":nth-child(2n", false),
        Err(SelectorError::UnclosedBlock { open: '(', offset: 1 })
    );
    assert_eq!(
        parse_selector(":lang(en", false),
        Err(SelectorError::UnclosedBlock { open: '(', offset: 1 })
    );
}

#[test]
fn test_invalid_nth() {
    assert_eq!(
        parse_selector(":nth-child(foo)", false),
        Err(SelectorError::InvalidNth {
            text: "foo".to_string()
        })
    );
    assert_eq!(
        parse_selector(":nth-child(/* c */ foo /* d */)", false),
        Err(SelectorError::InvalidNth {
            text: "foo".to_string()
        })
    );
    assert_eq!(
        parse_selector(":nth-of-type(2n of .a)", false),
        Err(SelectorError::InvalidNth {
            text: "2n of .a".to_string()
        })
    );
}

#[test]
fn test_unexpected_tokens() {
    assert_eq!(
        parse_selector("#1a", false),
        Err(SelectorError::UnexpectedToken {
            found: "#1a".to_string(),
            offset: 0
        })
    );
    assert_eq!(
        parse_selector("a)", false),
        Err(SelectorError::UnexpectedToken {
            found: ")".to_string(),
            offset: 1
        })
    );
    assert_eq!(
        parse_selector("a/**/b", false),
        Err(SelectorError::UnexpectedToken {
            found: "b".to_string(),
            offset: 5
        })
    );
    assert_eq!(
        parse_selector(".a*|p", false),
        Err(SelectorError::UnexpectedToken {
            found: "*|p".to_string(),
            offset: 2
        })
    );
    assert_eq!(
        parse_selector("&div", false),
        Err(SelectorError::UnexpectedToken {
            found: "div".to_string(),
            offset: 1
        })
    );
    assert_eq!(
        parse_selector("a.", false),
        Err(SelectorError::UnexpectedEof {
            expected: "a class name"
        })
    );
}
