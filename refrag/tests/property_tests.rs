//! Property tests for rendering and decoding

use proptest::prelude::*;
use refrag::{Fragment, demangle, mangle, maybe, named, one_of, seq, zero_or_more};

fn engine_names(pattern: &str) -> Vec<&str> {
    pattern
        .split("(?P<")
        .skip(1)
        .filter_map(|rest| rest.split_once('>').map(|(name, _)| name))
        .collect()
}

/// A pattern reusing one named group at `copies` positions
fn repeated(copies: usize, wrap_in_maybe: bool) -> Fragment {
    let item = named("item", "[a-z]");
    let items: Vec<Fragment> = (0..copies)
        .map(|_| {
            if wrap_in_maybe {
                maybe(item.clone())
            } else {
                item.clone()
            }
        })
        .collect();
    Fragment::from_many(items)
}

proptest! {
    #[test]
    fn prop_demangle_inverts_mangle(name in "[A-Za-z_][A-Za-z0-9_]{0,12}", index in 0usize..10_000) {
        let mangled = mangle(&name, index);
        prop_assert_eq!(demangle(&mangled), name.as_str());
    }

    #[test]
    fn prop_render_is_deterministic(copies in 1usize..8, wrap_in_maybe in any::<bool>()) {
        let frag = repeated(copies, wrap_in_maybe);
        prop_assert_eq!(frag.render(), frag.render());
    }

    #[test]
    fn prop_reused_group_names_never_collide(copies in 1usize..12, wrap_in_maybe in any::<bool>()) {
        let pattern = repeated(copies, wrap_in_maybe).render();
        let names = engine_names(&pattern);
        prop_assert_eq!(names.len(), copies);

        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), copies);
        prop_assert!(names.iter().all(|name| demangle(name) == "item"));
    }

    #[test]
    fn prop_reused_groups_compile_and_match(word in "[a-z]{1,8}") {
        let frag = repeated(word.len(), false);
        let m = frag.search(&word).unwrap().unwrap();
        prop_assert_eq!(m.as_str(), word.as_str());
        prop_assert_eq!(m.group("item"), word.get(word.len() - 1..));
    }

    #[test]
    fn prop_standalone_and_embedded_renders_agree(text in "[a-z0-9 ]{0,24}") {
        let number = seq![named("num", "[0-9]+"), zero_or_more(seq![named("sep", " "), named("num", "[0-9]+")])];
        let embedded = seq![one_of(["#", ""]), number.clone()];

        let alone: Vec<_> = number.finditer(&text).unwrap().into_iter().map(|m| m.as_str().to_string()).collect();
        let inside: Vec<_> = embedded.finditer(&text).unwrap().into_iter().map(|m| m.as_str().to_string()).collect();
        prop_assert_eq!(alone, inside);
    }
}
