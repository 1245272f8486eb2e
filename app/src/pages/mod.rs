mod dashboard;
mod not_found;
mod running_experiment;
mod visualizer;

pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use running_experiment::RunningExperiment;
pub use visualizer::Visualizer;
