//! Pure update function over the list controller.
//!
//! Every user interaction arrives as a [`ListMsg`]; the update function
//! applies it synchronously and returns a [`ListCmd`] describing any
//! deferred effect for the runtime to execute. No I/O happens here.

use std::time::Duration;

use crate::catalog::ContentRecord;
use crate::controller::input::{InputAction, InputContext, Key, resolve_key};
use crate::controller::model::{Direction, ListController};

/// Events that drive state transitions in a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMsg<F, S> {
    /// Switch the active filter tab.
    SetFilter(F),
    /// Switch the active sort mode.
    SetSort(S),
    /// Replace the search-box contents.
    SetSearchTerm(String),
    /// Open the detail view for a record.
    Select(String),
    /// Dismiss the detail view.
    Close,
    /// Move the detail cursor within the visible list.
    Navigate(Direction),
    /// The close-grace delay elapsed for the given epoch.
    CloseGraceElapsed { epoch: u64 },
    /// A raw key press from the page.
    Key(Key),
}

/// Deferred effects returned by the update function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCmd {
    /// No side-effect.
    None,
    /// Deliver [`ListMsg::CloseGraceElapsed`] after the delay.
    ScheduleSelectionClear { epoch: u64, after: Duration },
}

/// Apply a message to the controller and return the next command.
///
/// Key events are routed through the resolver with overlay precedence
/// handled by the page layer; here only the detail-view bindings apply.
pub fn update<R: ContentRecord>(
    controller: &mut ListController<R>,
    msg: ListMsg<R::Filter, R::Sort>,
) -> ListCmd {
    match msg {
        ListMsg::SetFilter(filter) => {
            controller.set_filter(filter);
            ListCmd::None
        }
        ListMsg::SetSort(sort) => {
            controller.set_sort(sort);
            ListCmd::None
        }
        ListMsg::SetSearchTerm(term) => {
            controller.set_search_term(term);
            ListCmd::None
        }
        ListMsg::Select(id) => {
            controller.select(&id);
            ListCmd::None
        }
        ListMsg::Close => close(controller),
        ListMsg::Navigate(direction) => {
            controller.navigate(direction);
            ListCmd::None
        }
        ListMsg::CloseGraceElapsed { epoch } => {
            controller.finish_close(epoch);
            ListCmd::None
        }
        ListMsg::Key(key) => {
            let context = InputContext {
                detail_open: controller.selection().is_open(),
                dropdown_open: false,
            };
            match resolve_key(key, context).action {
                Some(InputAction::CloseDetail) => close(controller),
                Some(InputAction::NavigatePrev) => {
                    controller.navigate(Direction::Prev);
                    ListCmd::None
                }
                Some(InputAction::NavigateNext) => {
                    controller.navigate(Direction::Next);
                    ListCmd::None
                }
                // Dropdown actions are resolved by the page layer before the
                // controller sees the key.
                Some(InputAction::CloseDropdown) | None => ListCmd::None,
            }
        }
    }
}

fn close<R: ContentRecord>(controller: &mut ListController<R>) -> ListCmd {
    controller.close().map_or(ListCmd::None, |pending| {
        ListCmd::ScheduleSelectionClear {
            epoch: pending.epoch,
            after: pending.after,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ArchiveFilter, ArchiveSort, Campaign, CardSize};
    use crate::controller::model::DetailPhase;

    type Msg = ListMsg<ArchiveFilter, ArchiveSort>;

    fn campaign(id: &str, media_type: &str, year: u16) -> Campaign {
        Campaign {
            id: id.to_owned(),
            campaign_name: format!("Campaign {id}"),
            brand: "Acme".to_owned(),
            agency: "In-house".to_owned(),
            year,
            media_type: media_type.to_owned(),
            badges: Vec::new(),
            visual: String::new(),
            personal_insight: String::new(),
            full_insight: String::new(),
            tags: Vec::new(),
            video_url: None,
            size: CardSize::default(),
            impact_rank: None,
        }
    }

    fn controller() -> ListController<Campaign> {
        ListController::new(
            vec![
                campaign("a", "TV", 2020),
                campaign("b", "Print", 2022),
                campaign("c", "TV", 2021),
            ],
            Duration::from_millis(300),
        )
    }

    #[test]
    fn filter_sort_messages_recompute_view() {
        let mut ctl = controller();
        assert_eq!(update(&mut ctl, Msg::SetFilter(ArchiveFilter::Tv)), ListCmd::None);
        assert_eq!(
            update(&mut ctl, Msg::SetSort(ArchiveSort::MostRecent)),
            ListCmd::None
        );
        let ids: Vec<&str> = ctl.visible().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c", "a"]);
    }

    #[test]
    fn close_message_schedules_deferred_clear() {
        let mut ctl = controller();
        update(&mut ctl, Msg::Select("a".to_owned()));
        let cmd = update(&mut ctl, Msg::Close);
        let ListCmd::ScheduleSelectionClear { epoch, after } = cmd else {
            panic!("expected scheduled clear, got {cmd:?}");
        };
        assert_eq!(after, Duration::from_millis(300));

        update(&mut ctl, Msg::CloseGraceElapsed { epoch });
        assert_eq!(ctl.selection().phase, DetailPhase::Closed);
        assert_eq!(ctl.selection().active_id, None);
    }

    #[test]
    fn close_without_selection_is_none_cmd() {
        let mut ctl = controller();
        assert_eq!(update(&mut ctl, Msg::Close), ListCmd::None);
    }

    #[test]
    fn escape_key_closes_open_detail() {
        let mut ctl = controller();
        update(&mut ctl, Msg::Select("a".to_owned()));
        let cmd = update(&mut ctl, Msg::Key(Key::Escape));
        assert!(matches!(cmd, ListCmd::ScheduleSelectionClear { .. }));
        assert_eq!(ctl.selection().phase, DetailPhase::Closing);
    }

    #[test]
    fn arrow_keys_navigate_visible_list() {
        let mut ctl = controller();
        update(&mut ctl, Msg::SetFilter(ArchiveFilter::Tv));
        update(&mut ctl, Msg::SetSort(ArchiveSort::MostRecent));
        update(&mut ctl, Msg::Select("c".to_owned()));

        update(&mut ctl, Msg::Key(Key::ArrowRight));
        assert_eq!(ctl.selection().active_id.as_deref(), Some("a"));
        update(&mut ctl, Msg::Key(Key::ArrowRight));
        assert_eq!(ctl.selection().active_id.as_deref(), Some("c"));
        update(&mut ctl, Msg::Key(Key::ArrowLeft));
        assert_eq!(ctl.selection().active_id.as_deref(), Some("a"));
    }

    #[test]
    fn keys_are_inert_while_closed() {
        let mut ctl = controller();
        for key in [Key::Escape, Key::ArrowLeft, Key::ArrowRight] {
            assert_eq!(update(&mut ctl, Msg::Key(key)), ListCmd::None);
        }
        assert_eq!(ctl.selection().active_id, None);
    }

    #[test]
    fn stale_grace_epoch_is_ignored() {
        let mut ctl = controller();
        update(&mut ctl, Msg::Select("a".to_owned()));
        let ListCmd::ScheduleSelectionClear { epoch, .. } = update(&mut ctl, Msg::Close) else {
            panic!("expected scheduled clear");
        };
        update(&mut ctl, Msg::Select("c".to_owned()));
        update(&mut ctl, Msg::CloseGraceElapsed { epoch });
        assert!(ctl.selection().is_open());
    }
}
