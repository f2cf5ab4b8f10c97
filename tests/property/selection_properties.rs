// Property-based tests for rectangle painting and range compression
// Random grids and drags exercise the selection invariants

use std::collections::BTreeSet;

use proptest::prelude::*;
use timebrush::models::settings::GridConfig;
use timebrush::models::slot::{Mode, SlotKey};
use timebrush::services::range::RangeCompressor;
use timebrush::services::selection::SelectionSet;
use timebrush::services::slot_index::SlotIndex;

const STEPS: [u16; 6] = [5, 10, 15, 20, 30, 60];

fn index_for(step: u16) -> SlotIndex {
    let days = GridConfig::default().days().to_vec();
    SlotIndex::new(GridConfig::new(days, step).unwrap())
}

/// A valid slot on a 7-day grid with the given step.
fn slot(step: u16) -> impl Strategy<Value = SlotKey> {
    let slots = 1440 / step;
    (0..7usize, 0..slots).prop_map(move |(day, n)| SlotKey::new(day, n * step))
}

fn grid_and_drags() -> impl Strategy<Value = (u16, Vec<(SlotKey, SlotKey, bool)>)> {
    prop::sample::select(STEPS.to_vec()).prop_flat_map(|step| {
        let drag = (slot(step), slot(step), any::<bool>());
        (Just(step), prop::collection::vec(drag, 0..12))
    })
}

fn paint(step: u16, drags: &[(SlotKey, SlotKey, bool)]) -> SelectionSet {
    let mut selection = SelectionSet::new(index_for(step));
    for &(a, b, erase) in drags {
        let mode = if erase { Mode::Erase } else { Mode::Draw };
        selection.apply_range(a, b, mode);
    }
    selection
}

proptest! {
    /// Property: compressing then expanding gives back exactly the selection
    #[test]
    fn prop_compress_expand_round_trip((step, drags) in grid_and_drags()) {
        let selection = paint(step, &drags);
        let compressor = RangeCompressor::new(selection.index().clone());

        let payload = compressor.compress(&selection);
        let restored = compressor.expand(&payload).unwrap();

        prop_assert_eq!(&restored, selection.keys());
    }

    /// Property: ranges within a day are ascending and never touch
    #[test]
    fn prop_ranges_are_ascending_and_non_adjacent((step, drags) in grid_and_drags()) {
        let selection = paint(step, &drags);
        let compressor = RangeCompressor::new(selection.index().clone());

        for (day, ranges) in compressor.compress(&selection) {
            prop_assert!(!ranges.is_empty(), "day {} present without ranges", day);
            for pair in ranges.windows(2) {
                let previous_end = SlotIndex::to_minutes(pair[0].end()).unwrap();
                let next_start = SlotIndex::to_minutes(pair[1].start()).unwrap();
                // end is HH:MM:59 of the last slot, so a gap means next_start > end + 1
                prop_assert!(next_start > previous_end + 1);
            }
            for range in &ranges {
                prop_assert!(range.start().ends_with(":00"));
                prop_assert!(range.end().ends_with(":59"));
            }
        }
    }

    /// Property: drawing the same rectangle twice changes nothing the second time
    #[test]
    fn prop_draw_is_idempotent((step, drags) in grid_and_drags(), a_pick in any::<prop::sample::Index>(), b_pick in any::<prop::sample::Index>()) {
        let mut selection = paint(step, &drags);
        let index = index_for(step);
        let minutes: Vec<u16> = index.slot_minutes().collect();
        let a = SlotKey::new(a_pick.index(7), minutes[a_pick.index(minutes.len())]);
        let b = SlotKey::new(b_pick.index(7), minutes[b_pick.index(minutes.len())]);

        selection.apply_range(a, b, Mode::Draw);
        let once = selection.clone();
        let changed = selection.apply_range(a, b, Mode::Draw);

        prop_assert_eq!(changed, 0);
        prop_assert_eq!(selection, once);
    }

    /// Property: erase after draw leaves the prior selection minus the rectangle
    #[test]
    fn prop_erase_removes_exactly_the_rectangle(
        (step, drags) in grid_and_drags(),
        a in slot(5),
        b in slot(5)
    ) {
        let mut selection = paint(step, &drags);
        // Corners must sit on this grid's step
        let a = SlotKey::new(a.day, a.minute - a.minute % step);
        let b = SlotKey::new(b.day, b.minute - b.minute % step);

        let before = selection.keys().clone();
        let rect = selection.preview(a, b);

        selection.apply_range(a, b, Mode::Draw);
        selection.apply_range(a, b, Mode::Erase);

        let expected: BTreeSet<SlotKey> = before.difference(&rect).copied().collect();
        prop_assert_eq!(selection.keys(), &expected);
    }

    /// Property: the rectangle does not depend on which corner came first
    #[test]
    fn prop_corner_order_does_not_matter(step in prop::sample::select(STEPS.to_vec()), seed in any::<(u8, u8, u16, u16)>()) {
        let slots = 1440 / step;
        let a = SlotKey::new(usize::from(seed.0) % 7, (seed.2 % slots) * step);
        let b = SlotKey::new(usize::from(seed.1) % 7, (seed.3 % slots) * step);
        let selection = SelectionSet::new(index_for(step));

        let forward = selection.preview(a, b);
        let reversed = selection.preview(b, a);
        let crossed = selection.preview(
            SlotKey::new(a.day, b.minute),
            SlotKey::new(b.day, a.minute),
        );

        prop_assert_eq!(&forward, &reversed);
        prop_assert_eq!(&forward, &crossed);

        let days = a.day.max(b.day) - a.day.min(b.day) + 1;
        let rows = usize::from((a.minute.max(b.minute) - a.minute.min(b.minute)) / step) + 1;
        prop_assert_eq!(forward.len(), days * rows);
    }
}
