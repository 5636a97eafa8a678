use folio_media::{Carousel, Key};
use proptest::prelude::*;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn starts_at_first_slide() {
    let c = Carousel::new(5);
    assert_eq!(c.index(), Some(0));
    assert_eq!(c.len(), 5);
    assert!(!c.is_empty());
}

#[test]
fn empty_has_no_index() {
    let c = Carousel::new(0);
    assert!(c.is_empty());
    assert_eq!(c.index(), None);
}

// ── Transitions ──────────────────────────────────────────────────

#[test]
fn next_advances_and_wraps() {
    let mut c = Carousel::new(3);
    assert_eq!(c.next(), Some(1));
    assert_eq!(c.next(), Some(2));
    assert_eq!(c.next(), Some(0));
}

#[test]
fn prev_wraps_to_last() {
    let mut c = Carousel::new(3);
    assert_eq!(c.prev(), Some(2));
    assert_eq!(c.prev(), Some(1));
}

#[test]
fn single_slide_is_fixed() {
    let mut c = Carousel::new(1);
    assert_eq!(c.next(), Some(0));
    assert_eq!(c.prev(), Some(0));
    assert_eq!(c.index(), Some(0));
}

#[test]
fn empty_navigation_is_noop() {
    let mut c = Carousel::new(0);
    assert_eq!(c.next(), None);
    assert_eq!(c.prev(), None);
    assert!(!c.goto(0));
    assert_eq!(c.handle_key(Key::Right), None);
    assert!(c.indicators().is_empty());
}

#[test]
fn goto_out_of_range_is_ignored() {
    let mut c = Carousel::new(3);
    c.goto(1);
    assert!(!c.goto(3));
    assert_eq!(c.index(), Some(1));
}

// ── Keyboard ─────────────────────────────────────────────────────

#[test]
fn arrow_keys_navigate() {
    let mut c = Carousel::new(4);
    assert_eq!(c.handle_key(Key::Right), Some(1));
    assert_eq!(c.handle_key(Key::Left), Some(0));
    assert_eq!(c.handle_key(Key::Left), Some(3));
}

#[test]
fn other_keys_are_ignored() {
    let mut c = Carousel::new(4);
    c.goto(2);
    assert_eq!(c.handle_key(Key::Up), Some(2));
    assert_eq!(c.handle_key(Key::Char('l')), Some(2));
}

// ── Indicators ───────────────────────────────────────────────────

#[test]
fn indicators_mark_active_slide() {
    let mut c = Carousel::new(3);
    c.goto(1);
    let dots = c.indicators();
    assert_eq!(dots.len(), 3);
    assert_eq!(
        dots.iter().map(|d| d.active).collect::<Vec<_>>(),
        vec![false, true, false]
    );
    assert_eq!(dots[0].label, "Go to image 1");
    assert_eq!(dots[2].label, "Go to image 3");
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn n_nexts_return_to_start(n in 1usize..50, start in 0usize..50) {
        let mut c = Carousel::new(n);
        c.goto(start % n);
        let before = c.index();
        for _ in 0..n {
            c.next();
        }
        prop_assert_eq!(c.index(), before);
    }

    #[test]
    fn prev_undoes_next(n in 1usize..50, steps in 0usize..100) {
        let mut c = Carousel::new(n);
        for _ in 0..steps {
            c.next();
        }
        let here = c.index();
        c.next();
        c.prev();
        prop_assert_eq!(c.index(), here);
    }

    #[test]
    fn goto_sets_exact_index(n in 1usize..50, k in 0usize..50) {
        let mut c = Carousel::new(n);
        let k = k % n;
        prop_assert!(c.goto(k));
        prop_assert_eq!(c.index(), Some(k));
    }

    #[test]
    fn index_stays_in_range(n in 0usize..20, keys in prop::collection::vec(any::<bool>(), 0..60)) {
        let mut c = Carousel::new(n);
        for right in keys {
            c.handle_key(if right { Key::Right } else { Key::Left });
            match c.index() {
                Some(i) => prop_assert!(i < n),
                None => prop_assert_eq!(n, 0),
            }
        }
    }
}
