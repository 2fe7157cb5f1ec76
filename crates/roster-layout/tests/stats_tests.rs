use roster_layout::*;

fn roster(sizes: &[usize]) -> Document {
    let mut doc = Document::new("Team");
    for (s, &n) in sizes.iter().enumerate() {
        let members = (0..n)
            .map(|i| Member {
                is_intern: i % 4 == 0,
                ..Member::new(format!("m{}-{}", s, i), format!("/{}/{}.png", s, i))
            })
            .collect();
        doc.sections
            .push(Section::with_members(format!("Section {}", s), members));
    }
    doc
}

#[test]
fn test_statistics_small_roster() {
    let doc = roster(&[5, 0]);
    let stats = calculate_statistics(&doc, &LayoutOptions::default()).unwrap();

    assert_eq!(stats.total_members, 5);
    assert_eq!(stats.intern_count, 2);
    assert_eq!(stats.sections, 2);
    assert_eq!(stats.non_empty_sections, 1);
    assert_eq!(stats.tier, SizeTier::Large);
    assert_eq!(stats.columns, 4);
    assert_eq!(stats.pages, 1);
    assert_eq!(stats.headers, 1);
    assert_eq!(stats.forced_placements, 0);
}

#[test]
fn test_statistics_count_repeated_headers() {
    let doc = roster(&[30]);
    let stats = calculate_statistics(&doc, &LayoutOptions::default()).unwrap();

    assert_eq!(stats.tier, SizeTier::Small);
    assert_eq!(stats.pages, 2);
    assert_eq!(stats.headers, 2);
}

#[test]
fn test_statistics_empty_roster() {
    let stats = calculate_statistics(&Document::default(), &LayoutOptions::default()).unwrap();
    assert_eq!(stats.total_members, 0);
    assert_eq!(stats.pages, 1);
    assert_eq!(stats.headers, 0);
}

#[test]
fn test_statistics_reject_invalid_options() {
    let options = LayoutOptions {
        page_width_mm: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        calculate_statistics(&roster(&[3]), &options),
        Err(RosterError::Config(_))
    ));
}
