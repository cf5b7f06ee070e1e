// Job-to-provider matching engine.
// Five independent component scores, a fixed weighted sum, category filter and top-K ranking.
// Everything below `handlers` is pure and synchronous.

pub mod availability;
pub mod budget;
pub mod explanation;
pub mod handlers;
pub mod location;
pub mod quality;
pub mod scorer;
pub mod skills;
pub mod weights;
