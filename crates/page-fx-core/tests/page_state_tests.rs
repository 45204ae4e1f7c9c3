// Integration tests driving PageState through event sequences the web
// frontend produces.

use page_fx_core::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn node(left: f64, top: f64) -> Option<Rect> {
    Some(Rect::new(left, top, 40.0, 40.0))
}

fn chaos_layout(apps: usize, tools: usize) -> DiagramLayout {
    DiagramLayout {
        container: Some(Rect::new(0.0, 0.0, 600.0, 400.0)),
        sources: (0..apps).map(|i| node(10.0, 60.0 * i as f64)).collect(),
        hub: None,
        targets: (0..tools).map(|i| node(500.0, 60.0 * i as f64)).collect(),
    }
}

fn emphasised(fx: &Effects, which: Diagram) -> usize {
    fx.iter()
        .filter(|e| matches!(e, Effect::EmphasizeLine { diagram, .. } if *diagram == which))
        .count()
}

/// Step a keyboard shortcut, answering scrolls the way the frontend does when
/// the target section exists.
fn press(s: &mut PageState, key: &str) -> Vec<Effect> {
    let fx = s
        .step(Event::Key {
            key: key.to_string(),
            ctrl: true,
            now: ms(0),
        })
        .into_vec();
    for effect in &fx {
        if let Effect::ScrollToSection(section) = effect {
            s.step(Event::SectionReached {
                section: section.clone(),
            });
        }
    }
    fx
}

fn counter_texts(effects: &[Effect], id: ElementId) -> Vec<String> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::CounterText { id: eid, text } if *eid == id => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn counter_runs_to_target_and_never_retriggers() {
    let mut s = PageState::new(PageConfig::default(), 0);
    let id = ElementId(3);
    s.step(Event::CounterVisible {
        id,
        target: 2_500_000,
        now: ms(0),
    });

    let mut values = Vec::new();
    let mut last_text = String::new();
    for frame in 0..=130u64 {
        let now = ms(frame * 16);
        let fx = s.step(Event::Frame { now });
        if let Some(text) = counter_texts(&fx, id).pop() {
            last_text = text;
            values.push(
                last_text
                    .trim_end_matches("M+")
                    .parse::<f64>()
                    .expect("numeric counter text"),
            );
        }
    }
    assert_eq!(last_text, "2.5M+");
    assert!(values.windows(2).all(|w| w[0] <= w[1]), "not monotonic");
    assert!(!s.is_animating());

    // Visibility toggles again: nothing restarts.
    s.step(Event::CounterVisible {
        id,
        target: 2_500_000,
        now: ms(5000),
    });
    let fx = s.step(Event::Frame { now: ms(5016) });
    assert!(counter_texts(&fx, id).is_empty());
    assert!(s.is_counted(id));
}

#[test]
fn reveal_happens_once_per_element() {
    let mut s = PageState::new(PageConfig::default(), 0);
    let id = ElementId(9);
    assert_eq!(
        s.step(Event::RevealVisible { id }).into_vec(),
        vec![Effect::Reveal(id)]
    );
    assert!(s.step(Event::RevealVisible { id }).is_empty());
    assert!(s.is_revealed(id));
}

#[test]
fn resize_rebuilds_all_pairs_after_quiet_period() {
    let mut s = PageState::new(PageConfig::default(), 0);
    for t in [0, 10, 20, 260, 270] {
        s.step(Event::Resize { now: ms(t) });
    }
    // Last accepted resize at 260ms, so the rebuild is due at 560ms.
    let early = s.step(Event::Frame { now: ms(500) });
    assert!(!early.contains(&Effect::MeasureDiagrams));
    let due = s.step(Event::Frame { now: ms(560) });
    assert_eq!(
        due.iter().filter(|e| **e == Effect::MeasureDiagrams).count(),
        1
    );

    let fx = s.step(Event::DiagramMeasured {
        diagram: Diagram::Chaos,
        layout: chaos_layout(4, 5),
        now: ms(560),
    });
    match fx.as_slice() {
        [Effect::DrawDiagram { diagram, lines }] => {
            assert_eq!(*diagram, Diagram::Chaos);
            assert_eq!(lines.len(), 4 * 5);
            assert!(lines.iter().all(|l| l.style == LineStyle::Chaos));
        }
        other => panic!("unexpected effects {other:?}"),
    }
    assert_eq!(s.line_count(Diagram::Chaos), 20);
}

#[test]
fn missing_nodes_reduce_line_count() {
    let mut layout = chaos_layout(3, 3);
    layout.sources[1] = None;
    assert_eq!(layout.lines(Diagram::Chaos).len(), 6);
    layout.container = None;
    assert!(layout.lines(Diagram::Chaos).is_empty());
}

#[test]
fn visible_diagram_emphasises_lines_with_stagger() {
    let mut s = PageState::new(PageConfig::default(), 0);
    let layout = DiagramLayout {
        container: Some(Rect::new(0.0, 0.0, 600.0, 400.0)),
        sources: vec![node(0.0, 0.0), node(0.0, 100.0)],
        hub: node(280.0, 180.0),
        targets: vec![node(560.0, 0.0)],
    };
    s.step(Event::DiagramMeasured {
        diagram: Diagram::Hub,
        layout,
        now: ms(500),
    });
    assert_eq!(s.line_count(Diagram::Hub), 3);
    s.step(Event::DiagramVisible {
        diagram: Diagram::Hub,
        now: ms(1000),
    });
    let hub = Diagram::Hub;
    assert_eq!(emphasised(&s.step(Event::Frame { now: ms(1000) }), hub), 1);
    assert_eq!(emphasised(&s.step(Event::Frame { now: ms(1150) }), hub), 1);
    assert_eq!(emphasised(&s.step(Event::Frame { now: ms(1200) }), hub), 1);
    assert_eq!(emphasised(&s.step(Event::Frame { now: ms(2000) }), hub), 0);
}

#[test]
fn diagram_visible_at_load_is_emphasised_once_built() {
    let mut s = PageState::new(PageConfig::default(), 0);
    s.step(Event::Started { now: ms(0) });
    s.step(Event::DiagramVisible {
        diagram: Diagram::Chaos,
        now: ms(5),
    });
    assert!(s
        .step(Event::Frame { now: ms(500) })
        .contains(&Effect::MeasureDiagrams));
    s.step(Event::DiagramMeasured {
        diagram: Diagram::Chaos,
        layout: chaos_layout(3, 3),
        now: ms(500),
    });

    let mut total = 0;
    for frame in 0..=150u64 {
        let fx = s.step(Event::Frame {
            now: ms(500 + frame * 16),
        });
        total += emphasised(&fx, Diagram::Chaos);
    }
    assert_eq!(total, 9);

    // A later rebuild without a new visibility report does not replay it.
    s.step(Event::DiagramMeasured {
        diagram: Diagram::Chaos,
        layout: chaos_layout(3, 3),
        now: ms(4000),
    });
    assert_eq!(emphasised(&s.step(Event::Frame { now: ms(5000) }), Diagram::Chaos), 0);
}

#[test]
fn rebuild_mid_stagger_drops_stale_emphasis() {
    let mut s = PageState::new(PageConfig::default(), 0);
    let chaos = Diagram::Chaos;
    s.step(Event::DiagramMeasured {
        diagram: chaos,
        layout: chaos_layout(4, 5),
        now: ms(0),
    });
    s.step(Event::DiagramVisible {
        diagram: chaos,
        now: ms(1000),
    });
    // 20 lines at a 50ms stagger; lines 0..=2 are due by 1100ms.
    assert_eq!(emphasised(&s.step(Event::Frame { now: ms(1100) }), chaos), 3);

    s.step(Event::Resize { now: ms(1100) });
    let fx = s.step(Event::Frame { now: ms(1400) });
    assert!(fx.contains(&Effect::MeasureDiagrams));
    assert_eq!(emphasised(&fx, chaos), 6);
    s.step(Event::DiagramMeasured {
        diagram: chaos,
        layout: chaos_layout(2, 2),
        now: ms(1400),
    });

    let mut stale = 0;
    for frame in 1..=100u64 {
        stale += emphasised(&s.step(Event::Frame { now: ms(1400 + frame * 16) }), chaos);
    }
    assert_eq!(stale, 0);
    assert_eq!(s.line_count(chaos), 4);
}

#[test]
fn scroll_burst_is_throttled() {
    let mut s = PageState::new(PageConfig::default(), 2);
    let mut nav_updates = 0;
    for i in 0..100u64 {
        let fx = s.step(Event::Scroll {
            scroll_y: 600.0 + i as f64,
            now: Duration::from_micros(i * 100),
        });
        nav_updates += fx.iter().filter(|e| matches!(e, Effect::Nav(_))).count();
    }
    assert_eq!(nav_updates, 1);
    assert_eq!(s.scroll_y(), 699.0);
}

#[test]
fn parallax_depends_only_on_offset() {
    let mut s = PageState::new(PageConfig::default(), 2);
    let transforms = |fx: Effects| -> Vec<String> {
        fx.into_iter()
            .filter_map(|e| match e {
                Effect::CubeTransform { transform, .. } => Some(transform),
                _ => None,
            })
            .collect()
    };
    let first = transforms(s.step(Event::Scroll {
        scroll_y: 200.0,
        now: ms(0),
    }));
    for i in 1..10u64 {
        s.step(Event::Scroll {
            scroll_y: 50.0 * i as f64,
            now: ms(i * 20),
        });
    }
    let again = transforms(s.step(Event::Scroll {
        scroll_y: 200.0,
        now: ms(1000),
    }));
    assert_eq!(first, again);
    assert_eq!(first[0], "translateY(60px)");
}

#[test]
fn nav_and_fab_follow_offset() {
    let mut s = PageState::new(PageConfig::default(), 0);
    let fx = s.step(Event::Scroll {
        scroll_y: 50.0,
        now: ms(0),
    });
    assert!(fx.contains(&Effect::Nav(NavAppearance::Translucent)));
    assert!(fx.contains(&Effect::Fab(FabVisibility::Hidden)));
    let fx = s.step(Event::Scroll {
        scroll_y: 800.0,
        now: ms(200),
    });
    assert!(fx.contains(&Effect::Nav(NavAppearance::Solid)));
    assert!(fx.contains(&Effect::Fab(FabVisibility::Visible)));
}

#[test]
fn keyboard_walks_sections_and_clamps() {
    let mut s = PageState::new(PageConfig::default(), 0);
    assert_eq!(
        press(&mut s, "ArrowDown"),
        vec![Effect::ScrollToSection("challenges".into())]
    );
    for _ in 0..10 {
        press(&mut s, "ArrowDown");
    }
    assert_eq!(s.active_section(), Some("architecture"));
    press(&mut s, "ArrowUp");
    assert_eq!(s.active_section(), Some("use-cases"));
    assert_eq!(
        press(&mut s, "Home"),
        vec![Effect::ScrollToSection("hero".into())]
    );
    assert!(s
        .step(Event::Key {
            key: "ArrowDown".into(),
            ctrl: false,
            now: ms(0)
        })
        .is_empty());
}

#[test]
fn navigation_to_missing_section_keeps_current() {
    let mut s = PageState::new(PageConfig::default(), 0);
    press(&mut s, "ArrowDown");
    assert_eq!(s.active_section(), Some("challenges"));

    let fx = s.step(Event::NavigateTo {
        section: "glossary".into(),
    });
    assert_eq!(
        fx.into_vec(),
        vec![Effect::ScrollToSection("glossary".into())]
    );
    // No SectionReached reply: the document has no such section.
    assert_eq!(s.active_section(), Some("challenges"));
    assert_eq!(
        press(&mut s, "ArrowDown"),
        vec![Effect::ScrollToSection("solution".into())]
    );
}

#[test]
fn scroll_spy_updates_current_section() {
    let mut s = PageState::new(PageConfig::default(), 0);
    let fx = s.step(Event::SectionsProbed {
        sections: vec![
            SectionBox {
                id: "hero".into(),
                top: -900.0,
                bottom: -100.0,
            },
            SectionBox {
                id: "solution".into(),
                top: -100.0,
                bottom: 700.0,
            },
        ],
    });
    assert_eq!(
        fx.into_vec(),
        vec![Effect::ActivateNav(Some("solution".into()))]
    );
    let next = s.step(Event::Key {
        key: "ArrowDown".into(),
        ctrl: true,
        now: ms(0),
    });
    assert_eq!(
        next.into_vec(),
        vec![Effect::ScrollToSection("use-cases".into())]
    );
}

#[test]
fn escape_closes_open_modal_only() {
    let mut s = PageState::new(PageConfig::default(), 0);
    let escape = |now| Event::Key {
        key: "Escape".into(),
        ctrl: false,
        now,
    };
    assert!(s.step(escape(ms(0))).is_empty());
    assert_eq!(
        s.step(Event::ModalOpenRequested { now: ms(0) }).into_vec(),
        vec![Effect::InsertModal]
    );
    assert!(s
        .step(Event::Frame { now: ms(100) })
        .contains(&Effect::ShowModal));
    assert_eq!(s.step(escape(ms(500))).into_vec(), vec![Effect::HideModal]);
    assert!(s.step(escape(ms(510))).is_empty());
    assert!(s
        .step(Event::Frame { now: ms(800) })
        .contains(&Effect::RemoveModal));
    assert_eq!(s.modal_phase(), ModalPhase::Closed);
}

#[test]
fn hovered_cube_keeps_parallax() {
    let mut s = PageState::new(PageConfig::default(), 1);
    s.step(Event::Scroll {
        scroll_y: 100.0,
        now: ms(0),
    });
    let fx = s.step(Event::CubeEnter { index: 0 });
    assert_eq!(
        fx.into_vec(),
        vec![Effect::CubeTransform {
            index: 0,
            transform: "scale(1.3) rotateX(45deg) rotateY(45deg) translateY(30px)".into(),
            hovered: true,
        }]
    );
    assert!(s.step(Event::CubeEnter { index: 5 }).is_empty());
}
