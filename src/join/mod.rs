mod join;
mod table;

pub use join::{join_scores, JoinedRegion, ScoreStatus};
pub use table::{RegionScore, ScoreTable, KEY_COLUMN, VALUE_COLUMN};
