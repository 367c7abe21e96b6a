pub mod client;
pub mod club;
pub mod conditions;
pub mod error;
pub mod explain;
pub mod format;
pub mod recommend;
pub mod scenario;
pub mod session;
pub mod shot;
pub mod trajectory;
pub mod view;

pub use client::{ClientConfig, TrajectoryClient};
pub use club::{CLUBS, Club, LADDER};
pub use conditions::Conditions;
pub use error::{CaddieError, FetchError, Result};
pub use explain::Explanation;
pub use recommend::Recommendation;
pub use scenario::{CustomShot, SCENARIOS, Scenario, Selection};
pub use session::{Evaluation, RequestToken, Session};
pub use shot::ShotParameters;
pub use trajectory::{TrajectoryRequest, TrajectoryResult};
pub use view::ScenarioView;
