// Host-side tests for configuration parsing, validation and colors.

use field_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn defaults_match_constants() {
    let c = FieldConfig::default();
    assert_eq!(c.particle_count, 25);
    assert_eq!(c.speed, 0.25);
    assert_eq!(c.radius_min, 100.0);
    assert_eq!(c.radius_max, 250.0);
    assert_eq!(c.attraction_radius, 300.0);
    assert_eq!(c.attraction_gain, 0.000_05);
    assert_eq!(c.background.to_css(), "rgba(4, 4, 4, 1)");
    assert_eq!(c.accent_every, 3);
    assert!(c.validate().is_ok());
}

#[test]
fn empty_object_gives_defaults() {
    let c = FieldConfig::from_json("{}").unwrap();
    assert_eq!(c, FieldConfig::default());
}

#[test]
fn partial_object_overrides_only_given_keys() {
    let c = FieldConfig::from_json(
        r##"{ "particle_count": 40, "accent": "#00ff80", "shade": "rgba(10, 20, 30, 0.25)" }"##,
    )
    .unwrap();
    assert_eq!(c.particle_count, 40);
    assert_eq!(c.accent, Rgba::new(0, 255, 128, 1.0));
    assert_eq!(c.shade, Rgba::new(10, 20, 30, 0.25));
    assert_eq!(c.radius_min, RADIUS_MIN);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = FieldConfig::from_json("{ particle_count: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn bad_color_is_rejected() {
    let err = FieldConfig::from_json(r#"{ "background": "blue" }"#).unwrap_err();
    // serde wraps the TryFrom error into its own
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("blue"));
}

fn rejected(json: &str) -> ConfigError {
    match FieldConfig::from_json(json) {
        Ok(c) => panic!("{json} was accepted as {c:?}"),
        Err(e) => e,
    }
}

#[test]
fn validation_rejects_degenerate_values() {
    assert!(matches!(rejected(r#"{ "particle_count": 0 }"#), ConfigError::NoParticles));
    assert!(matches!(rejected(r#"{ "speed": -1.0 }"#), ConfigError::Speed(_)));
    assert!(matches!(
        rejected(r#"{ "radius_min": 0.0 }"#),
        ConfigError::RadiusRange { .. }
    ));
    assert!(matches!(
        rejected(r#"{ "radius_min": 200.0, "radius_max": 150.0 }"#),
        ConfigError::RadiusRange { .. }
    ));
    assert!(matches!(
        rejected(r#"{ "attraction_radius": 0.0 }"#),
        ConfigError::AttractionRadius(_)
    ));
    assert!(matches!(rejected(r#"{ "accent_every": 0 }"#), ConfigError::AccentEvery));
}

#[test]
fn oversized_values_are_rejected_before_sampling() {
    assert!(matches!(
        rejected(r#"{ "speed": 1e308 }"#),
        ConfigError::SpeedTooLarge(_)
    ));
    assert!(matches!(
        rejected(r#"{ "particle_count": 18446744073709551615 }"#),
        ConfigError::TooManyParticles(_)
    ));
    assert!(matches!(
        rejected(r#"{ "radius_max": 1e308 }"#),
        ConfigError::RadiusTooLarge(_)
    ));

    // the ceilings themselves still build a field
    let cfg = FieldConfig::from_json(r#"{ "particle_count": 4096, "speed": 4.0e307 }"#).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let field = ParticleField::new(800.0, 600.0, cfg, &mut rng);
    assert_eq!(field.particles.len(), MAX_PARTICLE_COUNT);
    assert!(field.particles.iter().all(|p| p.vel.x.is_finite()));
}

#[test]
fn non_finite_gain_is_rejected() {
    let c = FieldConfig {
        attraction_gain: f64::INFINITY,
        ..FieldConfig::default()
    };
    assert!(matches!(c.validate(), Err(ConfigError::AttractionGain(_))));
}

#[test]
fn color_parsing_forms() {
    assert_eq!("#040404".parse::<Rgba>().unwrap(), Rgba::new(4, 4, 4, 1.0));
    assert_eq!("rgb(1, 2, 3)".parse::<Rgba>().unwrap(), Rgba::new(1, 2, 3, 1.0));
    assert_eq!(
        " rgba(255, 0, 0, 0.08) ".parse::<Rgba>().unwrap(),
        Rgba::new(255, 0, 0, 0.08)
    );
    for bad in ["#04040", "#gg0000", "rgba(1, 2, 3)", "rgb(256, 0, 0)", "rgba(0, 0, 0, 2)", "hsl(0, 0%, 0%)"] {
        assert!(matches!(bad.parse::<Rgba>(), Err(ConfigError::Color(_))), "{bad}");
    }
}

#[test]
fn color_for_uses_accent_period() {
    let c = FieldConfig {
        accent_every: 2,
        ..FieldConfig::default()
    };
    assert_eq!(c.color_for(0), c.accent);
    assert_eq!(c.color_for(1), c.shade);
    assert_eq!(c.color_for(4), c.accent);
}
