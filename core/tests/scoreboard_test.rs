mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{Call, RecordingRenderer, TestTexture, release_log};
use lasergate_core::scoreboard::{
    LED_BLANK, OverlayScoreboard, Player, Scoreboard, ScoreboardCollection, ScoreboardError,
    ScoreboardLayout, WhichDigit,
};
use lasergate_core::video::{DrawItem, Overlay, OverlayRef, Rect};

fn board(layout: ScoreboardLayout) -> (OverlayScoreboard<TestTexture>, OverlayRef<TestTexture>) {
    let log = release_log();
    let overlay = Overlay::with_size(320, 240).into_ref();
    let sheet = Rc::new(TestTexture::new(1, &log));
    let board = OverlayScoreboard::new(Rc::clone(&overlay), sheet, layout);
    (board, overlay)
}

fn counts(overlay: &OverlayRef<TestTexture>) -> (usize, usize) {
    let overlay = overlay.borrow();
    let items = overlay.draw_list().items();
    let texts = items.iter().filter(|i| matches!(i, DrawItem::Text { .. })).count();
    let images = items.iter().filter(|i| matches!(i, DrawItem::Image { .. })).count();
    (texts, images)
}

fn text_at(overlay: &OverlayRef<TestTexture>, label: &str) -> Vec<(f32, f32)> {
    overlay
        .borrow()
        .draw_list()
        .items()
        .iter()
        .filter_map(|i| match i {
            DrawItem::Text { text, x, y } if text == label => Some((*x, *y)),
            _ => None,
        })
        .collect()
}

// ===== Overlay scoreboard =====

#[test]
fn test_first_repaint_draws_full_layout() {
    let (mut board, overlay) = board(ScoreboardLayout::DragonsLair);
    assert!(board.is_repaint_needed());
    assert!(board.repaint_if_needed());
    assert!(!board.is_repaint_needed());

    // 5 labels, 6 + 6 score digits, 2 lives digits, 2 credit digits
    assert_eq!(counts(&overlay), (5, 16));
    assert_eq!(text_at(&overlay, "Credits"), vec![(168.0, 1.0)]);
    assert_eq!(text_at(&overlay, "Player 1: "), vec![(12.0, 1.0)]);
    assert_eq!(text_at(&overlay, "Lives: "), vec![(12.0, 15.0), (318.0, 15.0)]);

    // Nothing changed, nothing to do.
    assert!(!board.repaint_if_needed());
    assert_eq!(counts(&overlay), (5, 16));
}

#[test]
fn test_old_osd_moves_labels() {
    let (board, overlay) = board(ScoreboardLayout::DragonsLair);
    let mut board = board.with_old_osd(true);
    board.repaint_if_needed();

    assert_eq!(text_at(&overlay, "Credits"), vec![(138.0, 0.0)]);
    assert_eq!(text_at(&overlay, "Player 2: "), vec![(204.0, 0.0)]);
    assert_eq!(text_at(&overlay, "Lives: "), vec![(6.0, 14.0), (264.0, 14.0)]);
}

#[test]
fn test_thayers_quest_shows_time_and_credits_only() {
    let (mut board, overlay) = board(ScoreboardLayout::ThayersQuest);
    assert!(board.repaint_if_needed());
    assert_eq!(counts(&overlay), (1, 2));
    assert_eq!(text_at(&overlay, "Time"), vec![(174.0, 1.0)]);
}

#[test]
fn test_hidden_board_clears_overlay() {
    let (mut board, overlay) = board(ScoreboardLayout::DragonsLair);
    board.repaint_if_needed();

    assert!(board.change_visibility(false));
    assert!(!board.change_visibility(false));
    assert!(board.repaint_if_needed());
    assert!(overlay.borrow().draw_list().is_empty());

    assert!(board.change_visibility(true));
    assert!(board.repaint_if_needed());
    assert_eq!(counts(&overlay), (5, 16));
}

#[test]
fn test_unchanged_digit_does_not_request_repaint() {
    let (mut board, _overlay) = board(ScoreboardLayout::DragonsLair);
    board.repaint_if_needed();

    board.set_digit(LED_BLANK, WhichDigit::LIVES0).unwrap();
    assert!(!board.is_repaint_needed());

    board.set_digit(3, WhichDigit::LIVES0).unwrap();
    assert!(board.is_repaint_needed());
    assert_eq!(board.digit(WhichDigit::LIVES0), 3);
}

#[test]
fn test_invalidate_forces_repaint() {
    let (mut board, _overlay) = board(ScoreboardLayout::DragonsLair);
    board.repaint_if_needed();
    board.invalidate();
    assert!(board.repaint_if_needed());
}

#[test]
fn test_digit_without_glyph_is_rejected() {
    let (mut board, _overlay) = board(ScoreboardLayout::DragonsLair);
    board.repaint_if_needed();
    assert_eq!(
        board.set_digit(0x11, WhichDigit::CREDITS1_0),
        Err(ScoreboardError::DigitOutOfRange {
            which: WhichDigit::CREDITS1_0,
            value: 0x11,
        })
    );
    assert!(!board.is_repaint_needed());
}

#[test]
fn test_repaint_deferred_while_overlay_is_borrowed() {
    let (mut board, overlay) = board(ScoreboardLayout::DragonsLair);
    {
        let _busy = overlay.borrow();
        assert!(!board.repaint_if_needed());
        assert!(board.is_repaint_needed());
    }
    assert!(board.repaint_if_needed());
}

#[test]
fn test_score_renders_through_nested_overlay() {
    let (mut board, overlay) = board(ScoreboardLayout::DragonsLair);
    board.set_score(Player::One, 7).unwrap();
    board.repaint_if_needed();

    // Full-canvas scoreboard on a 2x screen.
    let mut screen = Overlay::with_size(320, 240);
    screen.set_position(Rect::from_size(640.0, 480.0));
    screen
        .draw_list_mut()
        .overlay(&overlay, Rect::from_size(320.0, 240.0));

    let mut r = RecordingRenderer::new();
    screen.render(&mut r);

    // Player 1's last score digit: cell 7 of the sheet, column 65 + 5 * 8.
    assert!(r.calls.contains(&Call::Copy {
        texture: 1,
        src: Some(Rect::new(56.0, 0.0, 8.0, 13.0)),
        dest: Rect::new(210.0, 0.0, 16.0, 26.0),
    }));
    let copies = r
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Copy { .. }))
        .count();
    assert_eq!(copies, 16);
}

// ===== Collections =====

/// Scoreboard that only counts calls, shared so the test can inspect it.
#[derive(Default)]
struct Counter {
    repaints: u32,
    dirty: bool,
    visible: bool,
    last: Option<(u8, WhichDigit)>,
    fail: bool,
}

struct Probe(Rc<RefCell<Counter>>);

impl Scoreboard for Probe {
    fn invalidate(&mut self) {
        self.0.borrow_mut().dirty = true;
    }

    fn repaint_if_needed(&mut self) -> bool {
        let mut c = self.0.borrow_mut();
        if !c.dirty {
            return false;
        }
        c.dirty = false;
        c.repaints += 1;
        true
    }

    fn change_visibility(&mut self, visible: bool) -> bool {
        let mut c = self.0.borrow_mut();
        let changed = c.visible != visible;
        c.visible = visible;
        changed
    }

    fn set_digit(&mut self, value: u8, which: WhichDigit) -> Result<(), ScoreboardError> {
        let mut c = self.0.borrow_mut();
        if c.fail {
            return Err(ScoreboardError::ValueOutOfRange { value: 0, max: 0 });
        }
        c.last = Some((value, which));
        Ok(())
    }

    fn digit(&self, which: WhichDigit) -> u8 {
        match self.0.borrow().last {
            Some((value, w)) if w == which => value,
            _ => LED_BLANK,
        }
    }

    fn is_repaint_needed(&self) -> bool {
        self.0.borrow().dirty
    }
}

fn probe() -> (Probe, Rc<RefCell<Counter>>) {
    let state = Rc::new(RefCell::new(Counter::default()));
    (Probe(Rc::clone(&state)), state)
}

#[test]
fn test_collection_repaints_every_member() {
    let (a, a_state) = probe();
    let (b, b_state) = probe();
    let mut all = ScoreboardCollection::new();
    all.add(Box::new(a));
    all.add(Box::new(b));

    all.invalidate();
    assert!(all.is_repaint_needed());
    assert!(all.repaint_if_needed());
    assert_eq!(a_state.borrow().repaints, 1);
    assert_eq!(b_state.borrow().repaints, 1);
    assert!(!all.repaint_if_needed());
}

#[test]
fn test_collection_reports_repaint_from_any_member() {
    let (a, _) = probe();
    let (b, b_state) = probe();
    let mut all = ScoreboardCollection::new();
    all.add(Box::new(a));
    all.add(Box::new(b));

    b_state.borrow_mut().dirty = true;
    assert!(all.is_repaint_needed());
    assert!(all.repaint_if_needed());
    assert_eq!(b_state.borrow().repaints, 1);
}

#[test]
fn test_collection_set_digit_reaches_every_member() {
    let (a, a_state) = probe();
    let (b, b_state) = probe();
    let mut all = ScoreboardCollection::new();
    all.add(Box::new(a));
    all.add(Box::new(b));

    all.set_digit(4, WhichDigit::LIVES1).unwrap();
    assert_eq!(a_state.borrow().last, Some((4, WhichDigit::LIVES1)));
    assert_eq!(b_state.borrow().last, Some((4, WhichDigit::LIVES1)));
    assert_eq!(all.digit(WhichDigit::LIVES1), 4);
}

#[test]
fn test_collection_failure_still_reaches_later_members() {
    let (a, a_state) = probe();
    let (b, b_state) = probe();
    a_state.borrow_mut().fail = true;
    let mut all = ScoreboardCollection::new();
    all.add(Box::new(a));
    all.add(Box::new(b));

    assert!(all.set_digit(2, WhichDigit::CREDITS1_1).is_err());
    assert_eq!(b_state.borrow().last, Some((2, WhichDigit::CREDITS1_1)));
}

#[test]
fn test_empty_collection() {
    let mut all = ScoreboardCollection::new();
    assert!(all.is_empty());
    assert_eq!(
        all.set_digit(1, WhichDigit::LIVES0),
        Err(ScoreboardError::Empty)
    );
    assert_eq!(all.digit(WhichDigit::LIVES0), LED_BLANK);
    assert!(!all.repaint_if_needed());
    assert!(!all.change_visibility(false));
}

#[test]
fn test_collection_visibility_reaches_every_member() {
    let (a, a_state) = probe();
    let (b, b_state) = probe();
    let mut all = ScoreboardCollection::new();
    all.add(Box::new(a));
    all.add(Box::new(b));

    assert!(all.change_visibility(true));
    assert!(a_state.borrow().visible && b_state.borrow().visible);
    assert!(!all.change_visibility(true));
}

#[test]
fn test_collection_of_overlay_boards() {
    let (one, overlay_one) = board(ScoreboardLayout::DragonsLair);
    let (two, overlay_two) = board(ScoreboardLayout::ThayersQuest);
    let mut all = ScoreboardCollection::new();
    all.add(Box::new(one));
    all.add(Box::new(two));
    assert_eq!(all.len(), 2);

    assert!(all.repaint_if_needed());
    assert_eq!(counts(&overlay_one), (5, 16));
    assert_eq!(counts(&overlay_two), (1, 2));

    all.set_credits(12).unwrap();
    assert!(all.repaint_if_needed());
    assert_eq!(all.digit(WhichDigit::CREDITS1_0), 1);
}
