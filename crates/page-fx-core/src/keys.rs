//! Keyboard shortcut mapping and section stepping.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    NextSection,
    PreviousSection,
    Top,
    CloseModal,
}

#[inline]
pub fn shortcut_for(key: &str, ctrl: bool) -> Option<Shortcut> {
    match (key, ctrl) {
        ("Escape", _) => Some(Shortcut::CloseModal),
        ("ArrowDown", true) => Some(Shortcut::NextSection),
        ("ArrowUp", true) => Some(Shortcut::PreviousSection),
        ("Home", true) => Some(Shortcut::Top),
        _ => None,
    }
}

/// Shortcuts that replace the browser's default key behaviour.
#[inline]
pub fn suppresses_default(shortcut: Shortcut) -> bool {
    !matches!(shortcut, Shortcut::CloseModal)
}

// Where the current section sits in the order. A missing id counts as the
// first section; an id outside the order sits just before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    At(usize),
    BeforeFirst,
}

fn position(sections: &[String], current: Option<&str>) -> Position {
    match current.filter(|c| !c.is_empty()) {
        None => Position::At(0),
        Some(c) => sections
            .iter()
            .position(|s| s == c)
            .map_or(Position::BeforeFirst, Position::At),
    }
}

pub fn next_section<'a>(sections: &'a [String], current: Option<&str>) -> Option<&'a str> {
    let last = sections.len().checked_sub(1)?;
    let i = match position(sections, current) {
        Position::At(i) => (i + 1).min(last),
        Position::BeforeFirst => 0,
    };
    Some(sections[i].as_str())
}

pub fn previous_section<'a>(sections: &'a [String], current: Option<&str>) -> Option<&'a str> {
    if sections.is_empty() {
        return None;
    }
    let i = match position(sections, current) {
        Position::At(i) => i.saturating_sub(1),
        Position::BeforeFirst => 0,
    };
    Some(sections[i].as_str())
}
