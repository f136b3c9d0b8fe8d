use std::collections::{BTreeMap, BTreeSet};

use sarf_core::{
    conjugate, from_buckwalter, parse_vocalized, to_buckwalter, ConjugationParams, Dialect, Mood,
    Numerus, Person, Stem, Stem1Context, Tense, VerbRoot, Voice, Vowel,
};
use sarf_reverse::{analyze_conjugation, ReverseConjugator};

fn stem(n: u8) -> Stem {
    Stem::new(n).unwrap()
}

fn root(s: &str) -> VerbRoot {
    s.parse().unwrap()
}

#[test]
fn ambiguous_two_letter_present() {
    let form = parse_vocalized("يُعد").unwrap();
    let results = analyze_conjugation(Dialect::ModernStandardArabic, &form);

    let mut stems: BTreeMap<String, BTreeSet<u8>> = BTreeMap::new();
    for result in &results {
        stems
            .entry(result.root.to_string())
            .or_default()
            .insert(result.params.stem.number());
    }

    assert_eq!(stems.get("ع-و-د"), Some(&BTreeSet::from([1, 4])));
    assert_eq!(stems.get("ع-د-د"), Some(&BTreeSet::from([1, 4])));
}

#[test]
fn conjugated_forms_are_found_with_full_score() {
    let au = Stem1Context::new(Vowel::Fatha, Vowel::Dhamma);
    let aa = Stem1Context::new(Vowel::Fatha, Vowel::Fatha);
    let cases = [
        (root("فعل"), ConjugationParams::new(stem(1), Tense::Perfect).stem1_context(aa)),
        (root("فعل"), ConjugationParams::new(stem(1), Tense::Present).stem1_context(aa)),
        (root("قول"), ConjugationParams::new(stem(1), Tense::Perfect).stem1_context(au)),
        (root("كتب"), ConjugationParams::new(stem(10), Tense::Perfect)),
        (root("كتب"), ConjugationParams::new(stem(8), Tense::Perfect)),
        (root("عود"), ConjugationParams::new(stem(4), Tense::Present)),
        (
            root("عود"),
            ConjugationParams::new(stem(4), Tense::Present).mood(Mood::Jussive),
        ),
    ];

    let analyzer = ReverseConjugator::new(Dialect::ModernStandardArabic);
    for (root, params) in cases {
        let form = conjugate(&root, &params).unwrap();
        let results = analyzer.analyze(&form);
        assert!(
            results
                .iter()
                .any(|r| r.root == root && r.params == params && r.score == 1.0),
            "{root} {params:?} not recovered from {}",
            sarf_core::to_buckwalter(&form)
        );
    }
}

/// Parameter cells whose affixes are all tense markers the analyzer strips:
/// the bare or wasl perfect, the perfect in -tu, and the ya- and ta- present
/// without a letter suffix.
fn recognized_cells(stem: Stem) -> Vec<ConjugationParams> {
    let mut cells = Vec::new();
    for voice in Voice::ALL {
        cells.push(ConjugationParams::new(stem, Tense::Perfect).voice(voice));
        cells.push(
            ConjugationParams::new(stem, Tense::Perfect)
                .voice(voice)
                .person(Person::First),
        );
        cells.push(ConjugationParams::new(stem, Tense::Present).voice(voice));
        cells.push(
            ConjugationParams::new(stem, Tense::Present)
                .voice(voice)
                .person(Person::Second),
        );
    }
    cells
}

#[test]
fn every_recognized_shape_round_trips() {
    use Vowel::{Dhamma as U, Fatha as A, Kasra as I};

    // one root per class, with the stem 1 vowels the root actually takes
    let roots = [
        ("كتب", A, U),
        ("وعد", A, I),
        ("قول", A, U),
        ("بيع", A, I),
        ("رمي", A, I),
        ("دعو", A, U),
        ("مدد", A, U),
        ("أخذ", A, U),
        ("ترجم", A, I),
        ("وعي", A, I),
    ];

    let analyzer = ReverseConjugator::default();
    let mut checked = 0;
    for (text, past, present) in roots {
        let verb = root(text);
        for stem in Stem::all() {
            for mut params in recognized_cells(stem) {
                if stem.number() == 1 {
                    params = params.stem1_context(Stem1Context::new(past, present));
                }
                // stems the engine does not build for this root
                let Ok(form) = conjugate(&verb, &params) else {
                    continue;
                };
                checked += 1;

                let results = analyzer.analyze(&form);
                assert!(
                    results
                        .iter()
                        .any(|r| r.root == verb && r.params == params && r.score == 1.0),
                    "{verb} {params:?} not recovered from {}",
                    to_buckwalter(&form)
                );
            }
        }
    }
    assert!(checked > 500, "only {checked} forms checked");
}

#[test]
fn suffixed_wasl_perfect_is_recognized() {
    let params = ConjugationParams::new(stem(10), Tense::Perfect)
        .person(Person::Second)
        .numerus(Numerus::Singular);
    let form = conjugate(&root("كتب"), &params).unwrap();
    assert_eq!(to_buckwalter(&form), "Aisotakotabota");

    let results = ReverseConjugator::default().analyze(&form);
    assert!(results
        .iter()
        .any(|r| r.root == root("كتب") && r.params == params && r.score == 1.0));
}

#[test]
fn scores_are_bounded() {
    for text in ["yuEd", "qAla", "yafoEalu", "Aisotakotaba"] {
        let form = from_buckwalter(text).unwrap();
        let results = ReverseConjugator::default().analyze(&form);
        assert!(!results.is_empty(), "{text}");
        assert!(results.iter().all(|r| r.score > 0.0 && r.score <= 1.0));
    }
}

#[test]
fn analysis_is_deterministic() {
    let form = from_buckwalter("yuEd").unwrap();
    let analyzer = ReverseConjugator::default();
    assert_eq!(analyzer.analyze(&form), analyzer.analyze(&form));
}

#[test]
fn unrecognized_shapes_are_an_empty_result() {
    let analyzer = ReverseConjugator::default();
    assert!(analyzer.analyze(&[]).is_empty());
    assert!(analyzer
        .analyze(&from_buckwalter("yasotaqotalaAni").unwrap())
        .is_empty());
}

#[test]
fn results_serialize_for_callers() {
    let form = from_buckwalter("qAla").unwrap();
    let results = ReverseConjugator::default().analyze(&form);
    let json = serde_json::to_value(&results[0]).unwrap();
    assert!(json["root"].is_string());
    assert_eq!(json["params"]["tense"], "perfect");
}
