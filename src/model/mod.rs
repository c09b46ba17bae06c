pub use hexlife_core::{FrameSink, GridState, Simulator};
pub mod config {
    pub use hexlife_core::config::*;
}
pub mod metrics {
    pub use hexlife_core::metrics::*;
}
pub mod resurrection {
    pub use hexlife_core::resurrection::*;
}
pub mod rules {
    pub use hexlife_core::rules::*;
}
pub mod simulator {
    pub use hexlife_core::simulator::*;
}
pub mod data {
    pub use hexlife_data::*;
}
pub mod state {
    pub use hexlife_core::state::*;
}
pub mod topology {
    pub use hexlife_core::topology::*;
}
pub mod render {
    pub use hexlife_io::*;
}
