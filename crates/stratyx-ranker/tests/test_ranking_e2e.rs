//! End-to-end ranking pipeline: CSV table -> scores -> tiers -> summaries.
//!
//! Run with:
//! ```bash
//! cargo test --package stratyx-ranker --test test_ranking_e2e
//! ```

use stratyx_ingestion::csv_source::load_clients;
use stratyx_ranker::scorer::{score, score_and_tier};
use stratyx_ranker::summary::{drop_off_curve, status_breakdown, tier_summaries};
use stratyx_ranker::weights::WeightVector;

const TABLE: &str = "\
Client,Current Client,Current Work,Future Work,Difficulty Dealing With,Profitability,Ease to Distribute
Acme,Y,9,8,7,9,8
Globex,Y,8,9,8,8,9
Initech,N,8,8,8,8,8
Umbrella,N,4,3,5,4,3
Hooli,Y,3,4,4,3,4
Pied Piper,N,1,1,2,1,1
";

#[test]
fn test_pipeline_scores_and_tiers_full_table() {
    let records = load_clients(TABLE.as_bytes()).unwrap();
    assert_eq!(records.len(), 6);

    let outcome = score_and_tier(&records, &WeightVector::default(), 3).unwrap();

    // Descending scores with contiguous 1-based ranks.
    for pair in outcome.clients.windows(2) {
        assert!(pair[0].priority_score >= pair[1].priority_score);
    }
    let ranks: Vec<usize> = outcome.clients.iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);

    // Every client is tiered; a higher score never sits in a worse tier.
    for pair in outcome.clients.windows(2) {
        let (a, b) = (pair[0].tier.unwrap(), pair[1].tier.unwrap());
        assert!(a <= b);
    }

    // The three obvious clusters come out as the three tiers.
    let tier_of = |name: &str| {
        outcome
            .clients
            .iter()
            .find(|c| c.record.name == name)
            .and_then(|c| c.tier)
            .unwrap()
    };
    assert_eq!(tier_of("Acme"), 1);
    assert_eq!(tier_of("Globex"), 1);
    assert_eq!(tier_of("Initech"), 1);
    assert_eq!(tier_of("Umbrella"), 2);
    assert_eq!(tier_of("Hooli"), 2);
    assert_eq!(tier_of("Pied Piper"), 3);
}

#[test]
fn test_pipeline_summaries_cover_all_clients() {
    let records = load_clients(TABLE.as_bytes()).unwrap();
    let outcome = score_and_tier(&records, &WeightVector::default(), 3).unwrap();

    let summaries = tier_summaries(&outcome.clients);
    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries.iter().map(|s| s.count).sum::<usize>(), 6);
    for summary in &summaries {
        assert!(summary.min_score <= summary.mean_score);
        assert!(summary.mean_score <= summary.max_score);
    }

    let breakdown = status_breakdown(&outcome.clients);
    assert_eq!(breakdown.current.as_ref().unwrap().count, 3);
    assert_eq!(breakdown.non_current.as_ref().unwrap().count, 3);

    let curve = drop_off_curve(&outcome.clients);
    assert_eq!(curve.len(), 6);
    assert_eq!(curve[0].rank, 1);
    for pair in curve.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let records = load_clients(TABLE.as_bytes()).unwrap();
    let weights = WeightVector::default();
    let a = score_and_tier(&records, &weights, 4).unwrap();
    let b = score_and_tier(&records, &weights, 4).unwrap();
    assert_eq!(a, b);
    // Byte-identical when serialized, not just structurally equal.
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_plain_score_leaves_tiers_unset() {
    let records = load_clients(TABLE.as_bytes()).unwrap();
    let outcome = score(&records, &WeightVector::default()).unwrap();
    assert!(outcome.clients.iter().all(|c| c.tier.is_none()));
}

#[test]
fn test_config_driven_run() {
    let config = stratyx_common::AnalysisConfig::from_toml_str(
        r#"
        [scoring]
        current_work = 0.6
        future_work = 0.4
        difficulty = 0.0
        profitability = 0.0
        ease_to_distribute = 0.0

        [tiers]
        count = 2
        "#,
    )
    .unwrap();

    let records = load_clients(TABLE.as_bytes()).unwrap();
    let weights = WeightVector::from_config(&config.scoring);
    let outcome = score_and_tier(&records, &weights, config.tiers.count).unwrap();

    // Only the first two factors contribute: Acme = 0.6*9 + 0.4*8 = 8.6.
    let acme = outcome
        .clients
        .iter()
        .find(|c| c.record.name == "Acme")
        .unwrap();
    assert!((acme.priority_score - 8.6).abs() < 1e-12);
    assert_eq!(
        outcome.clients.iter().filter_map(|c| c.tier).max(),
        Some(2)
    );
}

#[test]
fn test_sparse_cells_reported_not_fatal() {
    let table = "\
Client,Current Client,Current Work,Future Work,Difficulty Dealing With,Profitability,Ease to Distribute
Acme,Y,9,,7,9,
Globex,N,2,3,2,3,2
";
    let records = load_clients(table.as_bytes()).unwrap();
    let outcome = score_and_tier(&records, &WeightVector::default(), 2).unwrap();
    assert_eq!(outcome.missing_fields.len(), 1);
    assert_eq!(outcome.missing_fields[0].client, "Acme");
    assert_eq!(outcome.missing_fields[0].factors.len(), 2);
    assert!(outcome.clients.iter().all(|c| c.tier.is_some()));
}
