// Results page: reads the ResultStore on mount and derives everything the
// page displays (headline, chart, career cards, profile summary).

pub mod catalog;
pub mod chart;
pub mod renderer;
pub mod view;

pub use renderer::{
    ActionOutcome, Platform, RenderState, ResultsAction, ResultsRenderer, RevealTimings,
};
pub use view::ResultsView;
