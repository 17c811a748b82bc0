use cad_parse::{
    AirplaneKind, CylinderParameters, GearParameters, PaperAirplaneParameters, Parameters,
};
use cad_registry::Registry;

fn registry() -> Registry {
    Registry::standard().unwrap()
}

#[test]
fn unrecognized_text_is_unknown() {
    let registry = registry();
    for text in ["", "hello world", "make me something nice", "42"] {
        let info = registry.interpret(text);
        assert!(info.is_unknown(), "{text:?} gave {}", info.family);
        assert!(info.parameters.is_empty());
    }
}

#[test]
fn gear_defaults_are_filled() {
    assert_eq!(
        registry().interpret("a gear").parameters,
        Parameters::Gear(GearParameters {
            teeth_count: 12,
            diameter: 50.0,
            thickness: 10.0,
        })
    );
}

#[test]
fn gear_units_are_extracted() {
    let info = registry().interpret("a gear with 20 teeth and 80mm diameter");
    assert_eq!(info.family, "gear");
    assert_eq!(
        info.parameters,
        Parameters::Gear(GearParameters {
            teeth_count: 20,
            diameter: 80.0,
            thickness: 10.0,
        })
    );
}

#[test]
fn cylinder_diameter_becomes_radius() {
    let info = registry().interpret("a cylinder with 40mm diameter and 120mm height");
    assert_eq!(
        info.parameters,
        Parameters::Cylinder(CylinderParameters {
            radius: 20.0,
            height: 120.0,
            segments: 32,
        })
    );
}

#[test]
fn blue_paper_dart() {
    let info = registry().interpret("a blue paper dart");
    assert_eq!(info.family, "paperAirplane");
    match info.parameters {
        Parameters::PaperAirplane(params) => {
            assert_eq!(params.kind, AirplaneKind::Dart);
            assert_eq!(params.paper_color, "#2196f3");
        }
        other => panic!("Expected airplane parameters, got {other:?}"),
    }
}

#[test]
fn plain_tube_is_a_cylinder() {
    let registry = registry();
    assert_eq!(registry.interpret("a cardboard tube").family, "cylinder");
    assert_eq!(registry.interpret("a copper pipe, 15mm diameter").family, "cylinder");
}

#[test]
fn paper_airplane_beats_incidental_tube() {
    let registry = registry();
    assert_eq!(
        registry.interpret("a paper airplane with a tube-shaped body").family,
        "paperAirplane"
    );
    assert_eq!(registry.interpret("an origami pipe").family, "paperAirplane");
}

#[test]
fn interpretation_is_idempotent() {
    let registry = registry();
    for text in [
        "a stunt paper plane, 300mm wingspan, yellow paper",
        "a rounded box 30mm wide",
        "Type: Bracket\nWidth: 30mm",
    ] {
        assert_eq!(registry.interpret(text), registry.interpret(text));
    }
}

#[test]
fn structured_completion_is_read() {
    let text = "MODEL SPECIFICATIONS:\n\
                - Type: Spur Gear\n\
                - Material: Nylon\n\n\
                PARAMETERS:\n\
                - Teeth Count: 24 teeth\n\
                - Diameter: 60 mm diameter\n\
                - Thickness: 8 mm thick\n";
    assert_eq!(
        registry().interpret(text).parameters,
        Parameters::Gear(GearParameters {
            teeth_count: 24,
            diameter: 60.0,
            thickness: 8.0,
        })
    );
}

#[test]
fn type_marker_names_builderless_family() {
    let info = registry().interpret("MODEL SPECIFICATIONS:\n- Type: Hinge Pin\n- Material: Steel");
    assert_eq!(info.family, "hinge pin");
    assert!(info.parameters.is_empty());
}

#[test]
fn keyword_fallbacks_without_classifier() {
    let registry = registry();
    assert_eq!(registry.interpret("a rubber ball").family, "sphere");
    assert_eq!(registry.interpret("a shelf support").family, "bracket");
    assert_eq!(registry.interpret("a storage container").family, "enclosure");
}

#[test]
fn airplane_fallback_respects_engine_veto() {
    let registry = registry();
    let info = registry.interpret("an aircraft");
    assert_eq!(info.family, "paperAirplane");
    assert_eq!(
        info.parameters,
        Parameters::PaperAirplane(PaperAirplaneParameters::default())
    );
    assert!(registry.interpret("an aircraft engine").is_unknown());
}

#[test]
fn malformed_numbers_fall_back_to_defaults() {
    let info = registry().interpret("a gear with 99999999999 teeth and 80mm diameter");
    assert_eq!(info.family, "gear");
    assert_eq!(info.parameters, Parameters::Gear(GearParameters::default()));
}

#[test]
fn batch_matches_sequential() {
    let registry = registry();
    let texts: Vec<String> = (0..64)
        .map(|i| match i % 4 {
            0 => format!("a gear with {} teeth", i + 3),
            1 => format!("a box {}mm wide", i + 1),
            2 => "a paper glider".to_string(),
            _ => "nothing at all".to_string(),
        })
        .collect();
    let batch = registry.interpret_all(&texts);
    let sequential: Vec<_> = texts.iter().map(|t| registry.interpret(t)).collect();
    assert_eq!(batch, sequential);
}
