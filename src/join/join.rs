use serde::Serialize;

use crate::{data::RegionPolygon, join::ScoreTable};

/// Outcome of looking a region up in the score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "score", rename_all = "snake_case")]
pub enum ScoreStatus {
    Scored(i64),
    Unscored,
}

impl ScoreStatus {
    pub fn score(&self) -> Option<i64> {
        match self {
            ScoreStatus::Scored(value) => Some(*value),
            ScoreStatus::Unscored => None,
        }
    }
}

/// One row of the choropleth join table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinedRegion {
    pub name: String,
    #[serde(flatten)]
    pub status: ScoreStatus,
}

/// Attach a score to every region by exact name match, in region order.
/// Misses are expected (spelling drift between sources) and yield `Unscored`.
pub fn join_scores(regions: &[RegionPolygon], table: &ScoreTable) -> Vec<JoinedRegion> {
    let joined: Vec<JoinedRegion> = regions.iter()
        .map(|region| JoinedRegion {
            name: region.name.clone(),
            status: table.get(&region.name).map_or(ScoreStatus::Unscored, ScoreStatus::Scored),
        })
        .collect();

    let matched = joined.iter().filter(|j| j.status != ScoreStatus::Unscored).count();
    tracing::debug!(regions = joined.len(), matched, "joined region scores");
    joined
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::*;

    fn region(name: &str) -> RegionPolygon {
        RegionPolygon { name: name.into(), geometry: Value::Null, properties: Map::new() }
    }

    #[test]
    fn scored_and_unscored_regions() {
        let regions = vec![region("Texas"), region("Kansas")];
        let table = ScoreTable::from_pairs([("Texas", 2)]);
        let joined = join_scores(&regions, &table);

        assert_eq!(joined[0], JoinedRegion { name: "Texas".into(), status: ScoreStatus::Scored(2) });
        assert_eq!(joined[1], JoinedRegion { name: "Kansas".into(), status: ScoreStatus::Unscored });
    }

    #[test]
    fn no_case_folding() {
        let joined = join_scores(&[region("TEXAS")], &ScoreTable::from_pairs([("Texas", 2)]));
        assert_eq!(joined[0].status, ScoreStatus::Unscored);
    }

    #[test]
    fn serializes_flat() {
        let row = JoinedRegion { name: "Texas".into(), status: ScoreStatus::Scored(2) };
        assert_eq!(serde_json::to_value(&row).unwrap(), json!({ "name": "Texas", "status": "scored", "score": 2 }));
        let row = JoinedRegion { name: "Kansas".into(), status: ScoreStatus::Unscored };
        assert_eq!(serde_json::to_value(&row).unwrap(), json!({ "name": "Kansas", "status": "unscored" }));
    }
}
