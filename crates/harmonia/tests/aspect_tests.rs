use harmonia::aspects::{AspectDetector, AspectKind, Quality, ASPECT_KINDS};
use harmonia::chart::{Body, Planet, ALL_PLANETS};
use harmonia::reference::ReferenceTables;

fn body(planet: Planet, lon: f64) -> Body {
    Body::new(planet, lon, 1, 0.0).unwrap()
}

#[test]
fn test_sextile_scenario() {
    let tables = ReferenceTables::standard();
    let detector = AspectDetector::new(tables);

    // 10° Aries and 10° Gemini
    let aspects = detector.detect(&[body(Planet::Sun, 10.0), body(Planet::Moon, 70.0)]);

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Sextile);
    assert_eq!(aspects[0].quality, Quality::Harmonious);
    assert_eq!(aspects[0].separation, 60.0);
    assert!(aspects[0].exact);
}

#[test]
fn test_square_scenario() {
    let tables = ReferenceTables::standard();
    let detector = AspectDetector::new(tables);

    let aspects = detector.detect(&[body(Planet::Mars, 100.0), body(Planet::Saturn, 10.0)]);

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Square);
    assert_eq!(aspects[0].quality, Quality::Tense);
}

#[test]
fn test_opposition_across_zero() {
    let tables = ReferenceTables::standard();
    let detector = AspectDetector::new(tables);

    // 100 and 278 are 178 degrees apart
    let aspects = detector.detect(&[body(Planet::Sun, 100.0), body(Planet::Moon, 278.0)]);

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Opposition);
    assert!((aspects[0].orb_delta - 2.0).abs() < 1e-9);
    assert!(!aspects[0].exact);
}

#[test]
fn test_orb_boundaries_inclusive() {
    let tables = ReferenceTables::standard();
    let detector = AspectDetector::new(tables);

    for kind in ASPECT_KINDS {
        let orb = tables.orb(kind).unwrap();
        let target = kind.target();

        let upper = target + orb;
        if upper <= 180.0 {
            let hit = detector.calculate_aspect(0.0, upper).unwrap();
            assert_eq!(hit.map(|(d, _)| d.kind), Some(kind), "{} at {}", kind, upper);

            let miss = detector.calculate_aspect(0.0, upper + 0.01).unwrap();
            assert_ne!(miss.map(|(d, _)| d.kind), Some(kind), "{} at {}", kind, upper + 0.01);
        }

        let lower = target - orb;
        if lower >= 0.0 {
            let hit = detector.calculate_aspect(0.0, lower).unwrap();
            assert_eq!(hit.map(|(d, _)| d.kind), Some(kind), "{} at {}", kind, lower);
        }
    }
}

#[test]
fn test_detection_is_symmetric() {
    let tables = ReferenceTables::standard();
    let detector = AspectDetector::new(tables);

    let longitudes = [0.0, 7.5, 59.0, 91.0, 121.5, 175.0, 250.0, 333.3];
    for (i, &lon_x) in longitudes.iter().enumerate() {
        for &lon_y in &longitudes[i + 1..] {
            let x = body(Planet::Venus, lon_x);
            let y = body(Planet::Jupiter, lon_y);
            let forward = detector.detect(&[x.clone(), y.clone()]);
            let reverse = detector.detect(&[y, x]);
            assert_eq!(forward, reverse);
        }
    }
}

#[test]
fn test_no_aspect_between_windows() {
    let tables = ReferenceTables::standard();
    let detector = AspectDetector::new(tables);

    // 40 degrees falls between conjunction and sextile windows
    let aspects = detector.detect(&[body(Planet::Sun, 0.0), body(Planet::Moon, 40.0)]);
    assert!(aspects.is_empty());
}

#[test]
fn test_detect_full_chart_pairs_once() {
    let tables = ReferenceTables::standard();
    let detector = AspectDetector::new(tables);

    // Every body at the same longitude: every pair is a conjunction
    let bodies: Vec<Body> = ALL_PLANETS.iter().map(|p| body(*p, 42.0)).collect();
    let aspects = detector.detect(&bodies);

    assert_eq!(aspects.len(), 12 * 11 / 2);
    assert!(aspects.iter().all(|a| a.kind == AspectKind::Conjunction));
    assert!(aspects.iter().all(|a| a.body_a != a.body_b));
}

#[test]
fn test_cross_chart_pairs_every_body() {
    let tables = ReferenceTables::standard();
    let detector = AspectDetector::new(tables);

    let chart_a = vec![body(Planet::Sun, 0.0), body(Planet::Moon, 90.0)];
    let chart_b = vec![body(Planet::Sun, 0.0), body(Planet::Venus, 180.0)];
    let aspects = detector.detect_cross(&chart_a, &chart_b);

    // Sun-Sun conjunction, Sun-Venus opposition, Moon-Sun square, Moon-Venus square
    assert_eq!(aspects.len(), 4);
    assert_eq!(aspects[0].body_a, Planet::Sun);
    assert_eq!(aspects[0].body_b, Planet::Sun);
    assert_eq!(aspects[0].kind, AspectKind::Conjunction);
    assert_eq!(aspects[1].kind, AspectKind::Opposition);
    assert!(aspects[2..].iter().all(|a| a.body_a == Planet::Moon));
    assert!(aspects[2..].iter().all(|a| a.kind == AspectKind::Square));
}

#[test]
fn test_custom_orbs_from_tables() {
    let mut tables = ReferenceTables::default();
    tables.set_orb(AspectKind::Trine, 2.0);
    let detector = AspectDetector::new(&tables);

    let aspects = detector.detect(&[body(Planet::Sun, 0.0), body(Planet::Moon, 125.0)]);
    assert!(aspects.is_empty());
}

#[test]
fn test_empty_and_single_body_charts() {
    let detector = AspectDetector::new(ReferenceTables::standard());

    assert!(detector.detect(&[]).is_empty());
    assert!(detector.detect(&[body(Planet::Venus, 42.0)]).is_empty());
    assert!(detector.detect_cross(&[], &[body(Planet::Venus, 42.0)]).is_empty());
}

#[test]
fn test_bodies_keep_validated_placement() {
    let sun = body(Planet::Sun, 10.0);
    assert_eq!(sun.longitude(), 10.0);
    assert_eq!(sun.house(), 1);
    assert_eq!(sun.degree_in_house(), 0.0);
    assert!(Body::new(Planet::Sun, 730.0, 1, 10.0).is_err());

    let json = r#"{"planet": "sun", "longitude": 730.0, "house": 1, "degree_in_house": 10.0}"#;
    assert!(serde_json::from_str::<Body>(json).is_err());
}
