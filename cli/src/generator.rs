//! Entity/State chain generation
//!
//! For every entity the loader writes:
//!
//! ```text
//! (e:Entity)-[:HAS_STATE]->(s0:State)    (e)-[:CURRENT]->(s0)
//! (e)-[:HAS_STATE]->(s1)                 (s0)-[:NEXT]->(s1)
//! ...                                    (s{n-2})-[:NEXT]->(s{n-1})
//! ```
//!
//! `CURRENT` is attached to the first state written, not the last one
//! reached through `NEXT`.

use chrono::{DateTime, Utc};
use rand::Rng;
use statechain_sdk::{EdgeId, EdgeType, GraphClient, Label, NodeId, PropertyMap, PropertyValue};
use std::fmt;
use std::io::Write;
use tracing::{debug, info};

use crate::error::LoaderResult;
use crate::progress::ProgressTracker;
use crate::prompt::Confirm;
use crate::random;

pub const ENTITY: &str = "Entity";
pub const STATE: &str = "State";
pub const HAS_STATE: &str = "HAS_STATE";
pub const NEXT: &str = "NEXT";
pub const CURRENT: &str = "CURRENT";

const ENTITY_NAME_LEN: usize = 10;
const STATE_NAME_LEN: usize = 5;

/// What to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateParams {
    /// Number of Entity nodes
    pub node_count: u64,
    /// Lower bound of the chain length (inclusive)
    pub states_from: usize,
    /// Upper bound of the chain length (exclusive)
    pub states_to: usize,
}

/// Outcome of the pre-run check on existing data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WipeOutcome {
    /// Store was empty, nothing asked
    Empty,
    /// Operator kept the existing nodes
    Kept { existing: u64 },
    /// Existing nodes were deleted
    Wiped { deleted: u64 },
}

/// Totals for a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    pub wipe: WipeOutcome,
    pub entities: u64,
    pub states: u64,
    pub relationships: u64,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Inserted {} entities, {} states and {} relationships",
            self.entities, self.states, self.relationships
        )
    }
}

/// Labels and relationship types, built once per run
struct Schema {
    entity: Label,
    state: Label,
    has_state: EdgeType,
    next: EdgeType,
    current: EdgeType,
}

impl Schema {
    fn new() -> Self {
        Self {
            entity: Label::new(ENTITY),
            state: Label::new(STATE),
            has_state: EdgeType::new(HAS_STATE),
            next: EdgeType::new(NEXT),
            current: EdgeType::new(CURRENT),
        }
    }
}

/// Offer to delete existing data when the store is not empty
pub async fn offer_wipe(
    client: &dyn GraphClient,
    prompt: &mut dyn Confirm,
    out: &mut dyn Write,
) -> LoaderResult<WipeOutcome> {
    let existing = client.count_nodes().await?;
    if existing == 0 {
        return Ok(WipeOutcome::Empty);
    }

    let question = format!(
        "Do you wish to remove all the {} nodes in the db? (Y/n)",
        existing
    );
    if !prompt.confirm(&question)? {
        info!(existing, "keeping existing nodes");
        return Ok(WipeOutcome::Kept { existing });
    }

    writeln!(out, "Deleting all nodes in the db...")?;
    client.delete_all().await?;
    info!(deleted = existing, "deleted existing nodes");
    Ok(WipeOutcome::Wiped { deleted: existing })
}

/// Populate the store with `params.node_count` entities and their chains.
///
/// Fails fast: the first store error aborts the run and leaves whatever was
/// already written in place.
pub async fn generate<R: Rng + ?Sized>(
    client: &dyn GraphClient,
    prompt: &mut dyn Confirm,
    rng: &mut R,
    params: &GenerateParams,
    out: &mut dyn Write,
) -> LoaderResult<GenerationReport> {
    let wipe = offer_wipe(client, prompt, out).await?;

    writeln!(
        out,
        "Start inserting {} entities with {} to {} states each",
        params.node_count, params.states_from, params.states_to
    )?;

    let schema = Schema::new();
    let mut progress = ProgressTracker::new();
    let mut states = 0u64;

    for i in 0..params.node_count {
        if let Some(pct) = progress.advance(i, params.node_count) {
            writeln!(out, "{}%", pct)?;
        }

        let entity = create_entity(client, &schema, rng).await?;
        let length = random::chain_length(rng, params.states_from, params.states_to);
        debug!(%entity, length, "generating state chain");

        write_chain(client, &schema, rng, entity, length).await?;
        states += length as u64;
    }

    let report = GenerationReport {
        wipe,
        entities: params.node_count,
        states,
        relationships: states * 2,
    };
    info!(
        entities = report.entities,
        states = report.states,
        relationships = report.relationships,
        "generation complete"
    );
    Ok(report)
}

async fn create_entity<R: Rng + ?Sized>(
    client: &dyn GraphClient,
    schema: &Schema,
    rng: &mut R,
) -> LoaderResult<NodeId> {
    let mut props = PropertyMap::new();
    props.insert("age".to_string(), random::random_age(rng).into());
    props.insert("name".to_string(), random::random_string(rng, ENTITY_NAME_LEN).into());

    let entity = client.create_node(&props).await?;
    client.add_label(entity, &schema.entity).await?;
    Ok(entity)
}

/// Write `length` states for `entity`, wiring HAS_STATE, CURRENT and NEXT
async fn write_chain<R: Rng + ?Sized>(
    client: &dyn GraphClient,
    schema: &Schema,
    rng: &mut R,
    entity: NodeId,
    length: usize,
) -> LoaderResult<()> {
    let mut previous: Option<(NodeId, DateTime<Utc>)> = None;

    for _ in 0..length {
        let mut props = PropertyMap::new();
        props.insert("name".to_string(), random::random_string(rng, STATE_NAME_LEN).into());
        let state = client.create_node(&props).await?;
        client.add_label(state, &schema.state).await?;

        let has_state = client
            .create_relationship(&schema.has_state, entity, state)
            .await?;

        let (link, date): (EdgeId, DateTime<Utc>) = match previous {
            Some((prev_state, prev_date)) => {
                let rel = client
                    .create_relationship(&schema.next, prev_state, state)
                    .await?;
                (rel, random::next_state_date(rng, prev_date))
            }
            None => {
                let rel = client
                    .create_relationship(&schema.current, entity, state)
                    .await?;
                (rel, random::first_state_date(rng))
            }
        };

        let dated = date_properties(date);
        client.set_relationship_properties(link, &dated).await?;
        client.set_relationship_properties(has_state, &dated).await?;

        previous = Some((state, date));
    }
    Ok(())
}

fn date_properties(date: DateTime<Utc>) -> PropertyMap {
    let mut props = PropertyMap::new();
    props.insert("date".to_string(), PropertyValue::from(date));
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{AssumeNo, AssumeYes};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use statechain_sdk::EmbeddedClient;

    fn params(node_count: u64, from: usize, to: usize) -> GenerateParams {
        GenerateParams {
            node_count,
            states_from: from,
            states_to: to,
        }
    }

    /// Records questions and replays a fixed answer
    struct Scripted {
        answer: bool,
        asked: Vec<String>,
    }

    impl Confirm for Scripted {
        fn confirm(&mut self, question: &str) -> std::io::Result<bool> {
            self.asked.push(question.to_string());
            Ok(self.answer)
        }
    }

    #[tokio::test]
    async fn test_empty_store_skips_prompt() {
        let client = EmbeddedClient::new();
        let mut prompt = Scripted { answer: true, asked: Vec::new() };
        let mut out = Vec::new();

        let outcome = offer_wipe(&client, &mut prompt, &mut out).await.unwrap();
        assert_eq!(outcome, WipeOutcome::Empty);
        assert!(prompt.asked.is_empty());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_confirmed_wipe_deletes_everything() {
        let client = EmbeddedClient::new();
        client.create_node(&PropertyMap::new()).await.unwrap();
        client.create_node(&PropertyMap::new()).await.unwrap();

        let mut prompt = Scripted { answer: true, asked: Vec::new() };
        let mut out = Vec::new();
        let outcome = offer_wipe(&client, &mut prompt, &mut out).await.unwrap();

        assert_eq!(outcome, WipeOutcome::Wiped { deleted: 2 });
        assert_eq!(
            prompt.asked,
            vec!["Do you wish to remove all the 2 nodes in the db? (Y/n)"]
        );
        assert_eq!(String::from_utf8(out).unwrap(), "Deleting all nodes in the db...\n");
        assert_eq!(client.count_nodes().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_single_entity_two_states() {
        let client = EmbeddedClient::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut out = Vec::new();

        let report = generate(&client, &mut AssumeYes, &mut rng, &params(1, 2, 3), &mut out)
            .await
            .unwrap();

        assert_eq!(report.wipe, WipeOutcome::Empty);
        assert_eq!((report.entities, report.states, report.relationships), (1, 2, 4));

        let store = client.store_read().await;
        assert_eq!(store.get_nodes_by_label(&Label::new(ENTITY)).len(), 1);
        assert_eq!(store.get_nodes_by_label(&Label::new(STATE)).len(), 2);
        assert_eq!(store.get_edges_by_type(&EdgeType::new(HAS_STATE)).len(), 2);
        assert_eq!(store.get_edges_by_type(&EdgeType::new(CURRENT)).len(), 1);
        assert_eq!(store.get_edges_by_type(&EdgeType::new(NEXT)).len(), 1);
        assert_eq!(store.edge_count(), 4);
        for t in [HAS_STATE, CURRENT, NEXT] {
            for edge in store.get_edges_by_type(&EdgeType::new(t)) {
                assert!(edge.get_property("date").and_then(|d| d.as_datetime()).is_some());
                assert_eq!(edge.property_writes, 1);
            }
        }
    }

    #[tokio::test]
    async fn test_entity_properties() {
        let client = EmbeddedClient::new();
        let mut rng = StdRng::seed_from_u64(2);
        let mut out = Vec::new();
        generate(&client, &mut AssumeNo, &mut rng, &params(5, 1, 2), &mut out)
            .await
            .unwrap();

        let store = client.store_read().await;
        for entity in store.get_nodes_by_label(&Label::new(ENTITY)) {
            let age = entity.get_property("age").and_then(|v| v.as_integer()).unwrap();
            assert!((18..=27).contains(&age));
            let name = entity.get_property("name").and_then(|v| v.as_string()).unwrap();
            assert_eq!(name.len(), 10);
            assert!(name.chars().all(|c| c.is_ascii_lowercase()));
        }
        for state in store.get_nodes_by_label(&Label::new(STATE)) {
            let name = state.get_property("name").and_then(|v| v.as_string()).unwrap();
            assert_eq!(name.len(), 5);
        }
    }

    #[tokio::test]
    async fn test_banner_and_progress_output() {
        let client = EmbeddedClient::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut out = Vec::new();
        generate(&client, &mut AssumeYes, &mut rng, &params(10, 1, 2), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Start inserting 10 entities with 1 to 2 states each");
        assert_eq!(
            &lines[1..],
            &["10%", "20%", "30%", "40%", "50%", "60%", "70%", "80%", "90%"]
        );
    }

    #[test]
    fn test_report_display() {
        let report = GenerationReport {
            wipe: WipeOutcome::Kept { existing: 4 },
            entities: 2,
            states: 7,
            relationships: 14,
        };
        assert_eq!(
            report.to_string(),
            "Inserted 2 entities, 7 states and 14 relationships"
        );
    }
}
