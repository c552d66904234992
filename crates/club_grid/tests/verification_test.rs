//! Tests for player verification and its cache.

mod common;

use club_grid::{CacheKey, ExternalServiceError, PlayerChecker};
use common::FakeData;

#[tokio::test]
async fn test_second_call_is_served_from_cache() {
    let data = FakeData::new().player("J. Smith", &[42]);
    let mut checker = PlayerChecker::new("2023");

    let first = checker.check_player_on_both_clubs(&data, "Smith", 50, 42).await.unwrap();
    let calls = data.player_calls();
    let second = checker.check_player_on_both_clubs(&data, "Smith", 50, 42).await.unwrap();

    assert!(!first);
    assert_eq!(first, second);
    assert_eq!(data.player_calls(), calls);
}

#[tokio::test]
async fn test_missing_on_first_club_skips_second_lookup() {
    let data = FakeData::new().player("J. Smith", &[42]);
    let mut checker = PlayerChecker::new("2023");

    let found = checker.check_player_on_both_clubs(&data, "Smith", 50, 42).await.unwrap();

    assert!(!found);
    assert_eq!(data.searched_teams(), vec![50]);
    assert_eq!(checker.cache().get(&CacheKey::new("Smith", 50, 42)), Some(false));
}

#[tokio::test]
async fn test_player_on_both_clubs() {
    let data = FakeData::new().player("E. Haaland", &[50, 165]);
    let mut checker = PlayerChecker::new("2023");

    let found = checker
        .check_player_on_both_clubs(&data, "  haaland ", 50, 165)
        .await
        .unwrap();

    assert!(found);
    assert_eq!(data.searched_teams(), vec![50, 165]);
}

#[tokio::test]
async fn test_player_only_on_first_club() {
    let data = FakeData::new().player("Rodri", &[50]);
    let mut checker = PlayerChecker::new("2023");

    let found = checker.check_player_on_both_clubs(&data, "Rodri", 50, 530).await.unwrap();

    assert!(!found);
    assert_eq!(data.searched_teams(), vec![50, 530]);
}

#[tokio::test]
async fn test_case_variants_share_an_answer() {
    let data = FakeData::new().player("Rodri", &[50, 530]);
    let mut checker = PlayerChecker::new("2023");

    assert!(checker.check_player_on_both_clubs(&data, "Rodri", 50, 530).await.unwrap());
    assert!(checker.check_player_on_both_clubs(&data, "RODRI", 50, 530).await.unwrap());

    assert_eq!(data.player_calls(), 2);
    assert_eq!(checker.cache().len(), 1);
}

#[tokio::test]
async fn test_club_order_is_part_of_the_key() {
    let data = FakeData::new().player("Rodri", &[50, 530]);
    let mut checker = PlayerChecker::new("2023");

    checker.check_player_on_both_clubs(&data, "Rodri", 50, 530).await.unwrap();
    checker.check_player_on_both_clubs(&data, "Rodri", 530, 50).await.unwrap();

    assert_eq!(checker.cache().len(), 2);
    assert_eq!(data.player_calls(), 4);
}

#[tokio::test]
async fn test_failures_are_not_cached() {
    let data = FakeData::new().player("Rodri", &[50, 530]);
    let mut checker = PlayerChecker::new("2023");

    data.set_players_down(true);
    let err = checker
        .check_player_on_both_clubs(&data, "Rodri", 50, 530)
        .await
        .unwrap_err();
    assert!(matches!(err, ExternalServiceError::Transport(_)));
    assert!(checker.cache().is_empty());

    data.set_players_down(false);
    let found = checker.check_player_on_both_clubs(&data, "Rodri", 50, 530).await.unwrap();
    assert!(found);
    assert_eq!(data.player_calls(), 3);
}
