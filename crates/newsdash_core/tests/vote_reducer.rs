use newsdash_core::{
    reduce_vote, seed_items, FeedConfig, FeedService, InMemoryItemStore, ItemStore, ItemViewState,
    UserVote, VoteDelta, VoteDirection,
};

fn service() -> FeedService<InMemoryItemStore> {
    let store = InMemoryItemStore::from_items(seed_items()).expect("seed items should load");
    FeedService::new(store, &FeedConfig::default())
}

fn votes(service: &FeedService<InMemoryItemStore>, id: u64) -> i64 {
    service.get_item(id).expect("item should exist").votes
}

#[test]
fn transition_table_matches_every_state_and_direction() {
    let cases = [
        (UserVote::Unvoted, VoteDirection::Up, 1, UserVote::UpVoted),
        (UserVote::Unvoted, VoteDirection::Down, -1, UserVote::DownVoted),
        (UserVote::UpVoted, VoteDirection::Up, -1, UserVote::Unvoted),
        (UserVote::DownVoted, VoteDirection::Down, 1, UserVote::Unvoted),
        (UserVote::UpVoted, VoteDirection::Down, -2, UserVote::DownVoted),
        (UserVote::DownVoted, VoteDirection::Up, 2, UserVote::UpVoted),
    ];

    for (current, requested, net, next) in cases {
        let transition = reduce_vote(current, requested);
        assert_eq!(transition.net(), net, "{current:?} + {requested:?}");
        assert_eq!(transition.next, next, "{current:?} + {requested:?}");
        assert!(transition
            .deltas
            .iter()
            .all(|delta| delta.value().abs() == 1));
    }
}

#[test]
fn increment_then_decrement_is_an_inverse_pair() {
    let mut store = InMemoryItemStore::from_items(seed_items()).expect("seed items should load");
    let ids: Vec<u64> = store.list_items().iter().map(|item| item.id).collect();

    for id in ids {
        let before = store.get_item(id).expect("item should exist").votes;
        assert!(store.apply_vote(id, VoteDelta::Increment));
        assert!(store.apply_vote(id, VoteDelta::Decrement));
        assert_eq!(store.get_item(id).expect("item should exist").votes, before);
    }
}

#[test]
fn same_direction_twice_restores_count_and_state() {
    for direction in [VoteDirection::Up, VoteDirection::Down] {
        let mut service = service();
        let mut view = ItemViewState::new();
        let before = votes(&service, 3);

        service.vote(&mut view, 3, direction);
        assert_ne!(votes(&service, 3), before);
        service.vote(&mut view, 3, direction);

        assert_eq!(view.user_vote(), UserVote::Unvoted);
        assert_eq!(votes(&service, 3), before);
    }
}

#[test]
fn switching_direction_swings_by_two_through_two_unit_deltas() {
    let mut service = service();
    let mut view = ItemViewState::new();

    service.vote(&mut view, 1, VoteDirection::Up);
    assert_eq!(votes(&service, 1), 25);

    let transition = service.vote(&mut view, 1, VoteDirection::Down);
    assert_eq!(transition.deltas.len(), 2);
    assert_eq!(votes(&service, 1), 23);
    assert_eq!(view.user_vote(), UserVote::DownVoted);

    let transition = service.vote(&mut view, 1, VoteDirection::Up);
    assert_eq!(transition.deltas, &[VoteDelta::Increment, VoteDelta::Increment]);
    assert_eq!(votes(&service, 1), 25);
    assert_eq!(view.user_vote(), UserVote::UpVoted);
}

#[test]
fn vote_counts_may_go_negative() {
    let mut service = service();
    let mut view = ItemViewState::new();
    for _ in 0..20 {
        service.vote(&mut view, 3, VoteDirection::Down);
        service.vote(&mut view, 3, VoteDirection::Up);
        service.vote(&mut view, 3, VoteDirection::Up);
    }
    // Each round: -1, +2 (switch), -1 (toggle off) = 0.
    assert_eq!(votes(&service, 3), 18);

    let mut store = InMemoryItemStore::from_items(seed_items()).expect("seed items should load");
    for _ in 0..20 {
        store.apply_vote(3, VoteDelta::Decrement);
    }
    assert_eq!(store.get_item(3).expect("item should exist").votes, -2);
}

#[test]
fn voting_on_unknown_item_leaves_store_untouched() {
    let mut service = service();
    let mut view = ItemViewState::new();
    let snapshot = service.store().list_items().to_vec();

    service.vote(&mut view, 99, VoteDirection::Up);

    assert_eq!(service.store().list_items(), snapshot.as_slice());
}
