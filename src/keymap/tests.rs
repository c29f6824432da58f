//! Integration tests for the keymap system

use super::*;

fn units(s: &str) -> Vec<RawUnit> {
    s.bytes().map(RawUnit::Byte).collect()
}

#[test]
fn test_default_keymap_has_no_conflicts() {
    let keymap = Keymap::with_defaults().expect("Built-in defaults should not conflict");

    assert!(!keymap.check_missing(), "No action should be missing");
    assert!(!keymap.check_undefined(), "No action should be undefined");
}

#[test]
fn test_default_keymap_lookup() {
    let keymap = Keymap::with_defaults().unwrap();

    assert_eq!(keymap.lookup(keymap.code_of("q")), Some(VirtualKey::Quit));
    assert_eq!(keymap.lookup(keymap.code_of("^S")), Some(VirtualKey::Save));
    assert_eq!(keymap.lookup(KeyCode::TAB), Some(VirtualKey::ChangeView));
    assert_eq!(keymap.lookup(KeyCode::BACK_TAB), Some(VirtualKey::PrevView));
    assert_eq!(keymap.lookup(KeyCode::RETURN), Some(VirtualKey::ViewItem));
    assert_eq!(keymap.lookup(KeyCode::ESCAPE), Some(VirtualKey::Cancel));
    assert_eq!(keymap.lookup(KeyCode::SPACE), Some(VirtualKey::Select));
}

#[test]
fn test_default_keymap_arrow_keys() {
    let keymap = Keymap::with_defaults().unwrap();

    assert_eq!(keymap.lookup(KeyCode::UP), Some(VirtualKey::MoveUp));
    assert_eq!(keymap.lookup(KeyCode::DOWN), Some(VirtualKey::MoveDown));
    assert_eq!(keymap.lookup(KeyCode::LEFT), Some(VirtualKey::MoveLeft));
    assert_eq!(keymap.lookup(KeyCode::RIGHT), Some(VirtualKey::MoveRight));
}

#[test]
fn test_every_default_name_resolves_to_a_cached_key() {
    let keymap = Keymap::new();
    for vkey in VirtualKey::ALL {
        for name in default_names(vkey) {
            let key = keymap.code_of(name);
            assert_ne!(
                key.range(),
                Some(KeyRange::Extended),
                "default '{}' of {} fell through to the text fallback",
                name,
                vkey
            );
        }
    }
}

#[test]
fn test_assign_remove_round_trip_restores_table() {
    let mut keymap = Keymap::with_defaults().unwrap();
    let before: Vec<_> = VirtualKey::ALL
        .iter()
        .map(|&v| keymap.binding(v).clone())
        .collect();

    let f5 = keymap.code_of("F5");
    keymap.assign(f5, VirtualKey::Reload).unwrap();
    keymap.remove(f5, VirtualKey::Reload);

    let after: Vec<_> = VirtualKey::ALL
        .iter()
        .map(|&v| keymap.binding(v).clone())
        .collect();
    assert_eq!(before, after);
    assert_eq!(keymap.lookup(f5), None);
}

#[test]
fn test_terminal_keys_resolve_through_reader() {
    let keymap = Keymap::with_defaults().unwrap();
    let mut raw = Vec::new();
    raw.extend(units("5"));
    raw.push(RawUnit::Pseudo(KeyCode::DOWN));

    let mut reader = InputReader::new(raw.into_iter());
    let cmd = reader.next_command(&keymap, true).unwrap();
    assert_eq!(cmd.dispatch, Dispatch::Action(VirtualKey::MoveDown));
    assert_eq!(cmd.count, 5);
}

#[test]
fn test_multibyte_binding_resolves_through_reader() {
    let mut keymap = Keymap::with_defaults().unwrap();
    let key = keymap.code_of("ö");
    keymap.assign(key, VirtualKey::Help).unwrap();

    let mut reader = InputReader::new(units("ö").into_iter());
    let cmd = reader.next_command(&keymap, true).unwrap();
    assert_eq!(cmd.dispatch, Dispatch::Action(VirtualKey::Help));
}

#[test]
fn test_unbound_key_is_reported() {
    let keymap = Keymap::with_defaults().unwrap();
    let mut reader = InputReader::new(units("Z").into_iter());
    let cmd = reader.next_command(&keymap, false).unwrap();
    assert_eq!(cmd.dispatch, Dispatch::Unbound(KeyCode::from_char('Z')));
}

#[test]
fn test_wait_for_any_key_consumes_one_key() {
    let mut reader = InputReader::new(units("€q").into_iter());
    assert_eq!(reader.wait_for_any_key(), Some(KeyCode::from_char('€')));
    assert_eq!(reader.next_key(), Some(KeyCode::from_char('q')));
    assert_eq!(reader.next_key(), None);
}
