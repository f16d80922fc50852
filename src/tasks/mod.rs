//! Task model, decision cache, and the injection protocol

pub mod cache;
pub mod injection;
pub mod work;

pub use cache::DecisionCache;
pub use injection::{execute_equip, ApparelInjector};
pub use work::{active_skill_for, Task, TaskKind, TaskSpec, UnitOfWork, WorkStep};
