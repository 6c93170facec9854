//! Property-based tests for list-controller invariants.
//!
//! Uses `proptest` to verify that arbitrary operation sequences maintain the
//! critical invariants: the visible list never grows past the loaded set and
//! every survivor matches the active filter, sorting is idempotent, circular
//! navigation closes its cycle, the selection cursor only ever holds loaded
//! ids, and the scroll lock / listener set exactly track the open phase.

use std::time::Duration;

use proptest::prelude::*;

use crate::catalog::{ArchiveFilter, ArchiveSort, Campaign, CardSize, FilterLabel, SortMode};
use crate::controller::model::{DetailPhase, Direction, ListController, matches_filter};
use crate::controller::update::{ListCmd, ListMsg, update};

// ──────────────────── strategies ────────────────────

fn arb_campaign(id: usize) -> impl Strategy<Value = Campaign> {
    (
        prop_oneof![Just("TV"), Just("Print"), Just("OOH"), Just("Digital")],
        prop::collection::vec(
            prop_oneof![Just("Award-Winning"), Just("Controversial")],
            0..=2,
        ),
        1990u16..=2026,
        prop::option::of(0u32..10),
    )
        .prop_map(move |(media, badges, year, rank)| Campaign {
            id: format!("c{id:03}"),
            campaign_name: format!("Campaign {id}"),
            brand: if id.is_multiple_of(2) { "Acme" } else { "Orbit" }.to_owned(),
            agency: "In-house".to_owned(),
            year,
            media_type: media.to_owned(),
            badges: badges.into_iter().map(str::to_owned).collect(),
            visual: String::new(),
            personal_insight: String::new(),
            full_insight: String::new(),
            tags: Vec::new(),
            video_url: None,
            size: CardSize::default(),
            impact_rank: rank,
        })
}

fn arb_collection() -> impl Strategy<Value = Vec<Campaign>> {
    (0usize..12).prop_flat_map(|n| {
        let entries: Vec<_> = (0..n).map(arb_campaign).collect();
        entries
    })
}

fn arb_filter() -> impl Strategy<Value = ArchiveFilter> {
    prop::sample::select(ArchiveFilter::all())
}

fn arb_sort() -> impl Strategy<Value = ArchiveSort> {
    prop::sample::select(ArchiveSort::all())
}

#[derive(Debug, Clone)]
enum Op {
    Filter(ArchiveFilter),
    Sort(ArchiveSort),
    Search(String),
    Select(String),
    Close,
    Navigate(Direction),
    FinishClose(u64),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_filter().prop_map(Op::Filter),
        arb_sort().prop_map(Op::Sort),
        prop_oneof![Just(String::new()), Just("acme".to_owned()), Just("zzz".to_owned())]
            .prop_map(Op::Search),
        (0usize..16).prop_map(|i| Op::Select(format!("c{i:03}"))),
        Just(Op::Close),
        Just(Op::Navigate(Direction::Prev)),
        Just(Op::Navigate(Direction::Next)),
        (0u64..8).prop_map(Op::FinishClose),
    ]
}

fn apply(controller: &mut ListController<Campaign>, op: Op) {
    let msg = match op {
        Op::Filter(f) => ListMsg::SetFilter(f),
        Op::Sort(s) => ListMsg::SetSort(s),
        Op::Search(term) => ListMsg::SetSearchTerm(term),
        Op::Select(id) => ListMsg::Select(id),
        Op::Close => ListMsg::Close,
        Op::Navigate(d) => ListMsg::Navigate(d),
        Op::FinishClose(epoch) => ListMsg::CloseGraceElapsed { epoch },
    };
    let _cmd: ListCmd = update(controller, msg);
}

// ──────────────────── properties ────────────────────

proptest! {
    #[test]
    fn visible_is_a_matching_subset(records in arb_collection(), filter in arb_filter()) {
        let loaded = records.len();
        let mut ctl = ListController::new(records, Duration::ZERO);
        ctl.set_filter(filter);

        let visible = ctl.visible();
        prop_assert!(visible.len() <= loaded);
        for record in visible {
            prop_assert!(matches_filter(record, filter));
        }
    }

    #[test]
    fn sorting_twice_is_idempotent(records in arb_collection(), sort in arb_sort()) {
        let mut ctl = ListController::new(records, Duration::ZERO);
        ctl.set_sort(sort);
        let first: Vec<String> = ctl.visible().iter().map(|c| c.id.clone()).collect();
        ctl.set_sort(sort);
        let second: Vec<String> = ctl.visible().iter().map(|c| c.id.clone()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn full_next_cycle_returns_to_origin(records in arb_collection(), filter in arb_filter()) {
        let mut ctl = ListController::new(records, Duration::ZERO);
        ctl.set_filter(filter);

        let visible: Vec<String> = ctl.visible().iter().map(|c| c.id.clone()).collect();
        if let Some(origin) = visible.first().cloned() {
            prop_assert!(ctl.select(&origin));
            for _ in 0..visible.len() {
                prop_assert!(ctl.navigate(Direction::Next));
            }
            prop_assert_eq!(ctl.selection().active_id.as_deref(), Some(origin.as_str()));
        }
    }

    #[test]
    fn empty_search_is_identity(records in arb_collection(), filter in arb_filter()) {
        let mut ctl = ListController::new(records, Duration::ZERO);
        ctl.set_filter(filter);
        let bare: Vec<String> = ctl.visible().iter().map(|c| c.id.clone()).collect();
        ctl.set_search_term("");
        let with_empty: Vec<String> = ctl.visible().iter().map(|c| c.id.clone()).collect();
        prop_assert_eq!(bare, with_empty);
    }

    #[test]
    fn cursor_only_holds_loaded_ids(records in arb_collection(), ops in prop::collection::vec(arb_op(), 0..40)) {
        let loaded: Vec<String> = records.iter().map(|c| c.id.clone()).collect();
        let mut ctl = ListController::new(records, Duration::ZERO);

        for op in ops {
            apply(&mut ctl, op);
            if let Some(id) = &ctl.selection().active_id {
                prop_assert!(loaded.contains(id), "cursor escaped the loaded set: {id}");
            }
            // Closed phase never retains an id; Open/Closing always hold one.
            match ctl.selection().phase {
                DetailPhase::Closed => prop_assert!(ctl.selection().active_id.is_none()),
                DetailPhase::Open | DetailPhase::Closing => {
                    prop_assert!(ctl.selection().active_id.is_some());
                }
            }
        }
    }

    #[test]
    fn page_resources_track_open_phase(records in arb_collection(), ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut ctl = ListController::new(records, Duration::ZERO);
        for op in ops {
            apply(&mut ctl, op);
            let open = ctl.selection().phase == DetailPhase::Open;
            prop_assert_eq!(ctl.scroll_lock().is_locked(), open);
            prop_assert_eq!(ctl.listener_registry().active().is_some(), open);
        }
    }

    #[test]
    fn select_of_absent_id_changes_nothing(records in arb_collection()) {
        let mut ctl = ListController::new(records, Duration::ZERO);
        let before = ctl.selection().clone();
        apply(&mut ctl, Op::Select("zz-missing".to_owned()));
        prop_assert_eq!(&before, ctl.selection());
    }
}
