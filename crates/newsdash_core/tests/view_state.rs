use newsdash_core::{ItemViewState, UserVote, ViewStateMap};

#[test]
fn new_view_state_has_defaults() {
    let view = ItemViewState::new();
    assert!(!view.is_expanded());
    assert!(!view.comments_open());
    assert!(!view.is_bookmarked());
    assert_eq!(view.user_vote(), UserVote::Unvoted);
    assert_eq!(view.draft(), "");
    assert!(!view.can_submit());
}

#[test]
fn expand_is_one_way_and_toggles_flip() {
    let mut view = ItemViewState::new();
    view.expand();
    view.expand();
    assert!(view.is_expanded());

    view.toggle_comments();
    view.toggle_bookmark();
    assert!(view.comments_open());
    assert!(view.is_bookmarked());

    view.toggle_comments();
    view.toggle_bookmark();
    assert!(!view.comments_open());
    assert!(!view.is_bookmarked());
}

#[test]
fn take_draft_only_yields_non_blank_text() {
    let mut view = ItemViewState::new();
    view.set_draft(" \n ");
    assert_eq!(view.take_draft(), None);
    assert_eq!(view.draft(), " \n ");

    view.set_draft(" hi ");
    assert_eq!(view.take_draft().as_deref(), Some(" hi "));
    assert_eq!(view.draft(), "");
}

#[test]
fn remounting_resets_flags() {
    let mut views = ViewStateMap::new();
    views.mount(1).toggle_bookmark();
    views.mount(2).expand();
    assert!(views.get(1).expect("item should be mounted").is_bookmarked());

    views.retain_mounted(&[2]);
    assert!(!views.is_mounted(1));
    assert!(views.get(2).expect("item should be mounted").is_expanded());

    assert!(!views.mount(1).is_bookmarked());
    views.unmount(2);
    assert!(views.get(2).is_none());

    views.unmount_all();
    assert!(views.is_empty());
}
