pub mod analysis;
pub mod chart;
pub mod parcel;
pub mod series;
pub mod session;
pub mod view;

pub use analysis::{AnalysisResult, ParcelId};
pub use chart::{ChartDataset, ChartKind, ChartSpec};
pub use parcel::ParcelFeature;
pub use series::{NdviPoint, NdviSeries};
pub use session::{Session, UserId};
pub use view::{MapView, Panel};
