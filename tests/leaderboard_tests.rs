//! Ranking, presentation and loading of the leaderboard


use goodads::leaderboard::{StaticScoreSource, load_leaderboard};
use goodads::{IdentityStore, InMemoryStore, RankMarker, RankedRow, ScoreRecord, rank};
use test_stores::{FaultyStore, onboarded_backend};

fn row(rank: usize, identity: &str, score: u64, is_current_user: bool) -> RankedRow {
    RankedRow {
        rank,
        identity: identity.to_string(),
        score,
        is_current_user,
    }
}

#[test]
fn test_rank_three_players() {
    let records = vec![
        ScoreRecord::new("A", 1540),
        ScoreRecord::new("B", 1200),
        ScoreRecord::new("C", 980),
    ];

    assert_eq!(
        rank(records, Some("B")),
        vec![
            row(1, "A", 1540, false),
            row(2, "B", 1200, true),
            row(3, "C", 980, false),
        ]
    );
}

#[test]
fn test_rank_tie_is_sequential() {
    let records = vec![ScoreRecord::new("A", 500), ScoreRecord::new("B", 500)];
    assert_eq!(
        rank(records, None),
        vec![row(1, "A", 500, false), row(2, "B", 500, false)]
    );
}

#[test]
fn test_ranks_are_contiguous_and_scores_non_increasing() {
    let scores = [3, 99, 42, 42, 0, 7, 99, 1000, 42];
    let records: Vec<_> = scores
        .iter()
        .enumerate()
        .map(|(i, score)| ScoreRecord::new(format!("p{}", i), *score))
        .collect();

    let ranked = rank(records, None);

    assert_eq!(ranked.len(), scores.len());
    for (i, r) in ranked.iter().enumerate() {
        assert_eq!(r.rank, i + 1);
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            // ties keep input order
            let a: usize = pair[0].identity[1..].parse().unwrap();
            let b: usize = pair[1].identity[1..].parse().unwrap();
            assert!(a < b);
        }
    }
}

#[test]
fn test_markers_follow_rank_not_score() {
    let records = vec![
        ScoreRecord::new("A", 0),
        ScoreRecord::new("B", 0),
        ScoreRecord::new("C", 0),
        ScoreRecord::new("D", 0),
    ];
    let markers: Vec<_> = rank(records, None).iter().map(RankedRow::marker).collect();
    assert_eq!(
        markers,
        vec![
            RankMarker::Gold,
            RankMarker::Silver,
            RankMarker::Bronze,
            RankMarker::Numeral(4)
        ]
    );
}

#[tokio::test]
async fn test_demo_board_for_onboarded_user() {
    let store = IdentityStore::new(onboarded_backend("CalmGiver-55"));
    let rows = load_leaderboard(&StaticScoreSource::demo(), &store)
        .await
        .unwrap();

    let labels: Vec<_> = rows.iter().map(|r| r.marker().to_string()).collect();
    assert_eq!(
        labels,
        vec!["gold", "silver", "bronze", "#4", "#5", "#6", "#7", "#8"]
    );

    let mine = rows.iter().find(|r| r.is_current_user).unwrap();
    assert_eq!(mine.rank, 6);
    assert_eq!(mine.display_name(), "CalmGiver-55 (You)");
    assert_eq!(rows.iter().filter(|r| r.is_current_user).count(), 1);
}

#[tokio::test]
async fn test_identity_read_failure_ranks_without_highlight() {
    let store = IdentityStore::new(FaultyStore::failing_reads());
    let rows = load_leaderboard(&StaticScoreSource::demo(), &store)
        .await
        .unwrap();

    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| !r.is_current_user));
}

#[tokio::test]
async fn test_scores_from_json() {
    let source = StaticScoreSource::from_json(
        r#"[
            {"identity": "Low-1", "score": 10},
            {"id": "High-2", "score": 20}
        ]"#,
    )
    .unwrap();
    let store = IdentityStore::new(InMemoryStore::new());
    store.complete_onboarding("Low-1").await.unwrap();

    let rows = load_leaderboard(&source, &store).await.unwrap();
    assert_eq!(rows, vec![row(1, "High-2", 20, false), row(2, "Low-1", 10, true)]);
}
